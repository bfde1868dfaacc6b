use std::env;
use std::ffi::OsStr;

use log::error;
use seahorse::{App, Context, Flag, FlagType};

use vacation_planner::input::Config;
use vacation_planner::plan_vacation;
use vacation_planner::time::Date;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [flags] <plan.json>", args[0]))
        .flag(
            Flag::new("eligibility", FlagType::String)
                .description("Eligibility period to report on. Default: the current year.")
                .alias("e"),
        )
        .flag(
            Flag::new("no-merge", FlagType::Bool)
                .description("Do not merge subsequent vacation days into one block.")
                .alias("n"),
        )
        .flag(
            Flag::new("to-day", FlagType::String)
                .description(
                    "Only consider the period until the given date. \
                     Needs to be ISO format, i.e., yyyy-mm-dd.",
                )
                .alias("t"),
        )
        .action(run_action);

    app.run(args);
}

fn run_action(context: &Context) {
    if let Err(e) = run(context) {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

fn run(context: &Context) -> anyhow::Result<()> {
    let input = context
        .args
        .first()
        .ok_or_else(|| anyhow::anyhow!("missing path to the input file"))?;

    let mut builder = Config::try_from_json_file(input)?;

    if let Ok(label) = context.string_flag("eligibility") {
        builder.eligibility_label(label);
    }

    if let Ok(to_day) = context.string_flag("to-day") {
        builder.to_day(to_day.parse::<Date>()?);
    }

    builder.merge(!context.bool_flag("no-merge"));

    let config = builder.build()?;

    print!("{}", plan_vacation(&config));

    Ok(())
}
