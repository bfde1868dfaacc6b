use serde::Deserialize;

use crate::time::Date;

const fn default_value() -> f64 {
    1.0
}

/// A single public holiday.
///
/// The `value` is the work-day credit the holiday grants, 1.0 for a
/// full day off. Half-day holidays like Christmas Eve use 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Holiday {
    day: Date,
    #[serde(default = "default_value")]
    value: f64,
}

impl Holiday {
    pub fn day(&self) -> Date {
        self.day
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    #[test]
    fn test_value_defaults_to_full_day() {
        let holiday: Holiday = serde_json::from_str("{ \"day\": \"2024-01-01\" }")
            .expect("value should be optional");

        assert_eq!(holiday.day(), date!(2024:01:01));
        assert_eq!(holiday.value(), 1.0);
    }

    #[test]
    fn test_fractional_value() {
        let holiday: Holiday =
            serde_json::from_str("{ \"day\": \"2024-12-24\", \"value\": 0.5 }")
                .expect("json should be valid");

        assert_eq!(holiday.value(), 0.5);
    }
}
