use serde::Deserialize;

use crate::time::Period;

const fn default_active() -> bool {
    true
}

/// A request for time off. Inactive requests stay in the input file
/// for bookkeeping, but are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Request {
    period: Period,
    #[serde(default = "default_active")]
    active: bool,
}

impl Request {
    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
