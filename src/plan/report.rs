use core::fmt;

use crate::input::Config;
use crate::plan::VacationLog;
use crate::time::Period;

const DAY_FORMAT: &str = "{week_day}, {day}.{month}.{year}";
const SUMMARY_FORMAT: &str = "{day}.{month}.{year}";

/// The rendered result of a planner run: one line per vacation day or
/// merged block, followed by the allowance summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    period: Period,
    allowance: f64,
    shifted_from_prev: f64,
    shifted_into_next: f64,
    merge: bool,
    log: VacationLog,
}

impl Report {
    #[must_use]
    pub fn new(config: &Config, log: VacationLog) -> Self {
        let eligibility = config.eligibility();

        Self {
            period: *config.period(),
            allowance: eligibility.days(),
            shifted_from_prev: eligibility.shift_from_prev(),
            shifted_into_next: eligibility.shift_into_next(),
            merge: config.merge(),
            log,
        }
    }

    pub fn log(&self) -> &VacationLog {
        &self.log
    }

    pub fn effective_allowance(&self) -> f64 {
        self.allowance + self.shifted_from_prev - self.shifted_into_next
    }

    pub fn remaining(&self) -> f64 {
        self.effective_allowance() - self.log.taken()
    }

    fn fmt_merged(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for range in self.log.merged_ranges() {
            if range.is_single_day() {
                writeln!(
                    f,
                    "{:<53} {:.1} days",
                    range.start().formatted(DAY_FORMAT),
                    range.amount()
                )?;
            } else {
                writeln!(
                    f,
                    "{:<25} - {:<25} {:.1} days",
                    range.start().formatted(DAY_FORMAT),
                    range.end().formatted(DAY_FORMAT),
                    range.amount()
                )?;
            }
        }

        Ok(())
    }

    fn fmt_days(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (day, amount) in self.log.days() {
            writeln!(f, "{:<25} {:.1} days", day.formatted(DAY_FORMAT), amount)?;
        }

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.merge {
            self.fmt_merged(f)?;
        } else {
            self.fmt_days(f)?;
        }

        writeln!(f, "{}", "~".repeat(80))?;
        writeln!(
            f,
            "Period             : {} to {}",
            self.period.start().formatted(SUMMARY_FORMAT),
            self.period.end().formatted(SUMMARY_FORMAT)
        )?;
        writeln!(f, "Vacation allowance : {:.1} days", self.allowance)?;
        if self.shifted_from_prev > 0.0 {
            writeln!(f, "Shifted from prev  : {:.1} days", self.shifted_from_prev)?;
        }
        if self.shifted_into_next > 0.0 {
            writeln!(f, "Shifted into next  : {:.1} days", self.shifted_into_next)?;
        }
        writeln!(f, "Effective allowance: {:.1} days", self.effective_allowance())?;
        writeln!(f, "Vacation taken     : {:.1} days", self.log.taken())?;
        writeln!(f, "Vacation remaining : {:.1} days", self.remaining())?;

        Ok(())
    }
}
