use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn week() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// The week day `days` calendar days after this one.
    #[must_use]
    pub(super) const fn advance(self, days: usize) -> Self {
        Self::week()[(self.as_usize() - 1 + days % 7) % 7]
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_advance() {
        assert_eq!(WeekDay::Monday.advance(0), WeekDay::Monday);
        assert_eq!(WeekDay::Monday.advance(1), WeekDay::Tuesday);
        assert_eq!(WeekDay::Monday.advance(7), WeekDay::Monday);
        assert_eq!(WeekDay::Saturday.advance(2), WeekDay::Monday);
        assert_eq!(WeekDay::Sunday.advance(6), WeekDay::Saturday);
        assert_eq!(WeekDay::Friday.advance(700), WeekDay::Friday);
    }

    #[test]
    fn test_is_weekend() {
        let weekend: Vec<_> = WeekDay::week()
            .into_iter()
            .filter(WeekDay::is_weekend)
            .collect();
        assert_eq!(weekend, vec![WeekDay::Saturday, WeekDay::Sunday]);
    }
}
