use vacation_planner::input::Config;
use vacation_planner::plan::Report;
use vacation_planner::plan_vacation;

#[must_use]
pub fn make_input(eligibility: &str, holidays: &str, requests: &str) -> String {
    format!(
        concat!(
            "{{\n",
            "  \"eligibility\": {{ {eligibility} }},\n",
            "  \"holidays\": [ {holidays} ],\n",
            "  \"request\": [ {requests} ]\n",
            "}}\n",
        ),
        eligibility = eligibility,
        holidays = holidays,
        requests = requests,
    )
}

#[must_use]
pub fn eligibility_2024(days: &str) -> String {
    format!(
        "\"2024\": {{ \"period\": [\"2024-01-01\", \"2024-12-31\"], \"days\": {} }}",
        days
    )
}

#[must_use]
#[allow(dead_code)]
pub fn make_report(input: &str, label: &str) -> Report {
    let mut builder = Config::try_from_json(input).expect("input should be valid");
    builder.eligibility_label(label);
    let config = builder.build().expect("config should build");

    plan_vacation(&config)
}
