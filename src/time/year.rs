use derive_more::Display;

use crate::time::Month;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(usize);

impl Year {
    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to February, so
    /// it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        !self.is_common_year()
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The number of leap years strictly before this one.
    ///
    /// Year 0 counts as a leap year, consistent with the proleptic
    /// Gregorian calendar.
    const fn leap_years_before(&self) -> usize {
        match self.0 {
            0 => 0,
            year => 1 + (year - 1) / 4 - (year - 1) / 100 + (year - 1) / 400,
        }
    }

    /// The number of days between 0000-01-01 (the base of all day
    /// arithmetic) and the first day of this year.
    pub(super) const fn days_since_base_date(&self) -> usize {
        self.0 * 365 + self.leap_years_before()
    }

    pub(super) const fn from_days_since_base_date(days: usize) -> Self {
        // 366 underestimates the year, so at most a handful of steps remain
        let mut year = Self::new(days / 366);

        while year.next().days_since_base_date() <= days {
            year = year.next();
        }

        year
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
