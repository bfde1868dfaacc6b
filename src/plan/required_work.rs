use std::collections::BTreeMap;

use crate::input::json_input::Holiday;
use crate::time::{Date, Period};

/// The work-day credit owed on each date of the effective period.
///
/// Every day starts out as a full workday (1.0), weekends are set to
/// 0.0 and each holiday subtracts its credit. Holiday credit on top of
/// a free day can push a value below zero; such days are simply
/// "already fully free" and never clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredWork {
    days: BTreeMap<Date, f64>,
}

impl RequiredWork {
    #[must_use]
    pub fn build(period: &Period, holidays: &[Holiday]) -> Self {
        let mut days: BTreeMap<_, _> = period.iter().map(|day| (day, 1.0)).collect();

        for day in period.weekends() {
            days.insert(day, 0.0);
        }

        // holidays outside the period are ignored, duplicates compound
        for holiday in holidays {
            if let Some(value) = days.get_mut(&holiday.day()) {
                *value -= holiday.value();
            }
        }

        Self { days }
    }

    /// `None` for dates outside the effective period.
    pub fn amount(&self, day: Date) -> Option<f64> {
        self.days.get(&day).copied()
    }
}
