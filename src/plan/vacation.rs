use std::collections::btree_map::{BTreeMap, Entry};

use crate::input::json_input::Request;
use crate::plan::RequiredWork;
use crate::time::Date;

/// The vacation days actually consumed by the requests, keyed by date
/// so that overlapping requests count a day only once.
#[derive(Debug, Clone, PartialEq)]
pub struct VacationLog {
    days: BTreeMap<Date, f64>,
    taken: f64,
}

/// A run of consecutive vacation days, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VacationRange {
    start: Date,
    end: Date,
    amount: f64,
}

impl VacationLog {
    #[must_use]
    pub fn accumulate(requests: &[Request], required_work: &RequiredWork) -> Self {
        let mut days = BTreeMap::new();
        let mut taken = 0.0;

        for request in requests.iter().filter(|request| request.is_active()) {
            for day in request.period() {
                // outside the effective period
                let Some(amount) = required_work.amount(day) else {
                    continue;
                };

                // weekends and fully covered holidays cost nothing
                if amount <= 0.0 {
                    continue;
                }

                if let Entry::Vacant(entry) = days.entry(day) {
                    entry.insert(amount);
                    taken += amount;
                }
            }
        }

        Self { days, taken }
    }

    /// Total vacation taken, in days.
    pub fn taken(&self) -> f64 {
        self.taken
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The consumed days in chronological order.
    pub fn days(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.days.iter().map(|(day, amount)| (*day, *amount))
    }

    /// Merges runs of consecutive calendar days into ranges, summing
    /// their amounts.
    #[must_use]
    pub fn merged_ranges(&self) -> Vec<VacationRange> {
        let mut ranges: Vec<VacationRange> = Vec::new();

        for (day, amount) in self.days() {
            match ranges.last_mut() {
                Some(range) if range.end + 1 == day => {
                    range.end = day;
                    range.amount += amount;
                }
                _ => ranges.push(VacationRange {
                    start: day,
                    end: day,
                    amount,
                }),
            }
        }

        ranges
    }
}

impl VacationRange {
    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }
}
