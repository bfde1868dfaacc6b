use core::fmt;
use core::ops::Add;
use core::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        unsafe { $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day) }
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    /// 0000-01-01, the base of all day arithmetic, was a Saturday.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[doc(hidden)]
    #[must_use]
    pub const unsafe fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    pub const fn week_day(&self) -> WeekDay {
        Self::BASE_WEEK_DAY.advance(self.days_since_base_date())
    }

    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        self.week_day().is_weekend()
    }

    /// The current calendar day, derived from the system clock.
    #[must_use]
    pub fn today() -> Self {
        const UNIX_EPOCH_DAYS: usize = Year::new(1970).days_since_base_date();

        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        Self::from_days_since_base_date(UNIX_EPOCH_DAYS + since_epoch.as_secs() as usize / 86_400)
    }

    /// Expands `{year}`, `{month}`, `{day}` and `{week_day}` in `f`.
    pub fn formatted(&self, f: &str) -> String {
        f.replace("{year}", &format!("{:04}", self.year.as_usize()))
            .replace("{month}", &format!("{:02}", self.month.as_usize()))
            .replace("{day}", &format!("{:02}", self.day))
            .replace("{week_day}", self.week_day().name())
    }

    /// The position of this date in its year, starting at 1.
    const fn ordinal(&self) -> usize {
        let mut days = self.day;

        let mut month = Month::January;
        while !month.is_eq(&self.month) {
            days += self.year.number_of_days_in_month(month);
            month = month.next();
        }

        days
    }

    #[must_use]
    const fn from_ordinal(year: Year, ordinal: usize) -> Self {
        debug_assert!(ordinal != 0 && ordinal <= year.days());

        let mut month = Month::January;
        let mut day = ordinal;
        while day > year.number_of_days_in_month(month) {
            day -= year.number_of_days_in_month(month);
            month = month.next();
        }

        Self { year, month, day }
    }

    const fn days_since_base_date(&self) -> usize {
        // the ordinal of the first day of a year is 1, not 0
        self.year.days_since_base_date() + self.ordinal() - 1
    }

    #[must_use]
    const fn from_days_since_base_date(days: usize) -> Self {
        let year = Year::from_days_since_base_date(days);
        let ordinal = days - year.days_since_base_date() + 1;
        Self::from_ordinal(year, ordinal)
    }

    #[must_use]
    pub(crate) const fn add_days(self, days: usize) -> Self {
        let mut ordinal = self.ordinal() + days;
        let mut year = self.year;

        while ordinal > year.days() {
            ordinal -= year.days();
            year = year.next();
        }

        Self::from_ordinal(year, ordinal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not a valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{day} is not a valid day for {year}-{month}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}
