//! Query filters for the model store.

use serde::{Deserialize, Serialize};

/// Default cap on returned rows when a filter does not set one.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Inclusive numeric bounds on one parameter.
///
/// At least one bound should be present for the range to constrain
/// anything; with both absent it only requires a numeric parameter of
/// that name to exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub name: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ParameterRange {
    pub fn new(name: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }
}

/// Filter for model lookups.
///
/// `model_type` is required; `name_pattern` uses SQL LIKE semantics with
/// `%` wildcards. Every range is enforced. All matching is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFilter {
    pub model_type: String,
    pub name_pattern: Option<String>,
    pub ranges: Vec<ParameterRange>,
    pub max_results: usize,
}

impl ModelFilter {
    pub fn new(model_type: impl Into<String>) -> Self {
        Self {
            model_type: model_type.into(),
            name_pattern: None,
            ranges: Vec::new(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    pub fn with_range(mut self, range: ParameterRange) -> Self {
        self.ranges.push(range);
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }
}

/// Filter for subcircuit lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcircuitFilter {
    pub name_pattern: Option<String>,
    pub max_results: usize,
}

impl SubcircuitFilter {
    pub fn new() -> Self {
        Self {
            name_pattern: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }
}

impl Default for SubcircuitFilter {
    fn default() -> Self {
        Self::new()
    }
}
