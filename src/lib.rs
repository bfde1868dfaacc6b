mod utils;

pub mod input;
pub mod plan;
pub mod time;

use log::info;

use crate::input::Config;
use crate::plan::{Report, RequiredWork, VacationLog};

/// Runs the whole computation: build the required-work map over the
/// effective period, walk the requests and put the result into a
/// printable report.
#[must_use]
pub fn plan_vacation(config: &Config) -> Report {
    let required_work = RequiredWork::build(config.period(), config.holidays());

    let log = VacationLog::accumulate(config.requests(), &required_work);
    info!("vacation taken: {:.1} days", log.taken());

    Report::new(config, log)
}
