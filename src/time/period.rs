use serde::Deserialize;
use thiserror::Error;

use crate::time::Date;

/// An inclusive, closed range of calendar days.
///
/// Deserializes from either a single date string (a one day period)
/// or a `[start, end]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "PeriodSpec")]
pub struct Period {
    start: Date,
    end: Date,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PeriodSpec {
    Day(Date),
    Range([Date; 2]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid period: start {start} is after end {end}")]
pub struct InvalidPeriod {
    start: Date,
    end: Date,
}

impl Period {
    pub fn new(start: Date, end: Date) -> Result<Self, InvalidPeriod> {
        if start > end {
            return Err(InvalidPeriod { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn single(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    /// Every day from `start` to `end` inclusive, ascending.
    pub fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// The subset of [`Self::iter`] falling on a Saturday or Sunday.
    pub fn weekends(&self) -> impl Iterator<Item = Date> {
        self.iter().filter(Date::is_weekend)
    }
}

impl TryFrom<PeriodSpec> for Period {
    type Error = InvalidPeriod;

    fn try_from(spec: PeriodSpec) -> Result<Self, Self::Error> {
        match spec {
            PeriodSpec::Day(day) => Ok(Self::single(day)),
            PeriodSpec::Range([start, end]) => Self::new(start, end),
        }
    }
}

impl IntoIterator for &Period {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current + 1);
        Some(current)
    }
}
