use serde::Deserialize;

use crate::time::Period;

/// The date range and allowance for one plan year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Eligibility {
    period: Period,
    days: f64,
    #[serde(default)]
    shift_from_prev: f64,
    #[serde(default)]
    shift_into_next: f64,
}

impl Eligibility {
    pub fn period(&self) -> &Period {
        &self.period
    }

    /// The base allowance in days, before any shifts.
    pub fn days(&self) -> f64 {
        self.days
    }

    /// Allowance carried over from the previous period.
    pub fn shift_from_prev(&self) -> f64 {
        self.shift_from_prev
    }

    /// Allowance already promised to the next period.
    pub fn shift_into_next(&self) -> f64 {
        self.shift_into_next
    }

    #[must_use]
    pub fn effective_allowance(&self) -> f64 {
        self.days + self.shift_from_prev - self.shift_into_next
    }
}
