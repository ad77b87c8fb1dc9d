//! Records produced by the netlist extractor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::ParameterValue;

/// A `.model` directive: device model name, type, and parameter map.
///
/// Parameter names are lowercase and unique; insertion order is not
/// preserved. Two identical directives from different files stay two
/// distinct records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub name: String,
    pub model_type: String,
    pub source_file: String,
    pub line_number: u32,
    pub parameters: HashMap<String, ParameterValue>,
}

/// A `.subckt` definition with its captured body.
///
/// `content` runs from the `.subckt` header line through the matching
/// `.ends` line inclusive, newline-joined, original case preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcircuitRecord {
    pub name: String,
    pub content: String,
    pub source_file: String,
    pub line_number: u32,
}
