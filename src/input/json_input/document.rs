use std::collections::HashMap;

use serde::Deserialize;

use crate::input::json_input::{Eligibility, Holiday, Request};

/// The whole input file, deserialized up front so that structural
/// problems surface before any computation starts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    eligibility: HashMap<String, Eligibility>,
    holidays: Vec<Holiday>,
    request: Vec<Request>,
}

impl Document {
    pub fn eligibility(&self, label: &str) -> Option<&Eligibility> {
        self.eligibility.get(label)
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn requests(&self) -> &[Request] {
        &self.request
    }
}
