use std::path::Path;

use anyhow::Context as _;
use log::debug;

use crate::input::json_input::{Document, Eligibility, Holiday, Request};
use crate::time::{Date, Period};
use crate::utils;

/// Everything a single planner run needs, with the eligibility label
/// already resolved and the period clipped.
#[derive(Debug)]
pub struct Config {
    document: Document,
    eligibility: Eligibility,
    period: Period,
    merge: bool,
}

pub struct ConfigBuilder {
    document: Document,
    eligibility_label: Option<String>,
    to_day: Option<Date>,
    merge: bool,
}

impl ConfigBuilder {
    fn new(document: Document) -> Self {
        Self {
            document,
            eligibility_label: None,
            to_day: None,
            merge: true,
        }
    }

    /// Selects the eligibility period to report on. Without an explicit
    /// label the current calendar year is used.
    pub fn eligibility_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.eligibility_label = Some(label.into());
        self
    }

    /// Only considers the period up to the given date. A cutoff past the
    /// period's natural end never extends it.
    pub fn to_day(&mut self, day: Date) -> &mut Self {
        self.to_day = Some(day);
        self
    }

    /// Whether subsequent vacation days are merged into one block.
    pub fn merge(&mut self, merge: bool) -> &mut Self {
        self.merge = merge;
        self
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let label = self
            .eligibility_label
            .unwrap_or_else(|| format!("{:04}", Date::today().year().as_usize()));

        let eligibility = self
            .document
            .eligibility(&label)
            .ok_or_else(|| {
                anyhow::anyhow!("input file has no eligibility entry named \"{}\"", label)
            })?
            .clone();

        let mut period = *eligibility.period();
        if let Some(to_day) = self.to_day {
            if to_day < period.end() {
                period = Period::new(period.start(), to_day)?;
            }
        }

        debug!(
            "eligibility \"{}\": effective period {} to {}",
            label,
            period.start(),
            period.end()
        );

        Ok(Config {
            document: self.document,
            eligibility,
            period,
            merge: self.merge,
        })
    }
}

impl Config {
    pub fn try_from_json(input: &str) -> anyhow::Result<ConfigBuilder> {
        let document: Document =
            serde_json::from_str(input).context("failed to parse the input document")?;

        Ok(ConfigBuilder::new(document))
    }

    pub fn try_from_json_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let input = utils::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read `{}`", path.as_ref().display()))?;

        Self::try_from_json(&input)
            .with_context(|| format!("failed to parse `{}`", path.as_ref().display()))
    }

    pub fn eligibility(&self) -> &Eligibility {
        &self.eligibility
    }

    /// The eligibility period, clipped to the `to_day` cutoff if one was
    /// given.
    pub fn period(&self) -> &Period {
        &self.period
    }

    pub fn holidays(&self) -> &[Holiday] {
        self.document.holidays()
    }

    pub fn requests(&self) -> &[Request] {
        self.document.requests()
    }

    pub fn merge(&self) -> bool {
        self.merge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;

    const INPUT: &str = concat!(
        "{\n",
        "  \"eligibility\": {\n",
        "    \"2024\": { \"period\": [\"2024-01-01\", \"2024-12-31\"], \"days\": 25 }\n",
        "  },\n",
        "  \"holidays\": [],\n",
        "  \"request\": []\n",
        "}\n",
    );

    #[test]
    fn test_unknown_label() {
        let mut builder = Config::try_from_json(INPUT).expect("json should be valid");
        builder.eligibility_label("2019");

        let error = builder.build().expect_err("label should be unknown");
        assert_eq!(
            error.to_string(),
            "input file has no eligibility entry named \"2019\""
        );
    }

    #[test]
    fn test_to_day_clips_the_period() {
        let mut builder = Config::try_from_json(INPUT).expect("json should be valid");
        builder.eligibility_label("2024").to_day(date!(2024:06:30));

        let config = builder.build().expect("config should build");
        assert_eq!(config.period().start(), date!(2024:01:01));
        assert_eq!(config.period().end(), date!(2024:06:30));
    }

    #[test]
    fn test_to_day_past_the_end_is_ignored() {
        let mut builder = Config::try_from_json(INPUT).expect("json should be valid");
        builder.eligibility_label("2024").to_day(date!(2025:06:30));

        let config = builder.build().expect("config should build");
        assert_eq!(config.period().end(), date!(2024:12:31));
    }

    #[test]
    fn test_to_day_before_the_start_is_fatal() {
        let mut builder = Config::try_from_json(INPUT).expect("json should be valid");
        builder.eligibility_label("2024").to_day(date!(2023:12:31));

        assert!(builder.build().is_err());
    }
}
