//! Tests that `to_day` clips the effective period and that requests
//! beyond the cutoff stop counting.

use pretty_assertions::assert_eq;

use vacation_planner::input::Config;
use vacation_planner::plan_vacation;
use vacation_planner::time::Date;

mod common;

fn make_clipped_report(input: &str, to_day: Option<&str>) -> String {
    let mut builder = Config::try_from_json(input).expect("input should be valid");
    builder.eligibility_label("2024");
    if let Some(to_day) = to_day {
        builder.to_day(to_day.parse::<Date>().expect("date should be valid"));
    }
    let config = builder.build().expect("config should build");

    plan_vacation(&config).to_string()
}

fn input_with_summer_and_winter_requests() -> String {
    common::make_input(
        &common::eligibility_2024("25"),
        "",
        concat!(
            "{ \"period\": [\"2024-06-03\", \"2024-06-05\"] },",
            "{ \"period\": [\"2024-12-02\", \"2024-12-04\"] }",
        ),
    )
}

#[test]
fn test_cutoff_drops_later_requests() {
    let input = input_with_summer_and_winter_requests();

    let output = make_clipped_report(&input, Some("2024-06-30"));

    assert!(output.contains("Period             : 01.01.2024 to 30.06.2024\n"));
    assert!(output.contains("Vacation taken     : 3.0 days\n"));
    assert!(output.contains("Vacation remaining : 22.0 days\n"));
}

#[test]
fn test_cutoff_after_the_end_changes_nothing() {
    let input = input_with_summer_and_winter_requests();

    assert_eq!(
        make_clipped_report(&input, Some("2025-06-30")),
        make_clipped_report(&input, None)
    );
}

#[test]
fn test_without_cutoff_all_requests_count() {
    let input = input_with_summer_and_winter_requests();

    let output = make_clipped_report(&input, None);

    assert!(output.contains("Period             : 01.01.2024 to 31.12.2024\n"));
    assert!(output.contains("Vacation taken     : 6.0 days\n"));
}

#[test]
fn test_cutoff_on_a_request_day_keeps_that_day() {
    let input = input_with_summer_and_winter_requests();

    let output = make_clipped_report(&input, Some("2024-06-04"));

    assert!(output.contains("Vacation taken     : 2.0 days\n"));
}
