//! Parameter value classification.
//!
//! A `.model` parameter carries either a number (possibly with an SI
//! suffix) or an opaque string. Arithmetic and function calls are not
//! evaluated here; the extractor detects them and discards the whole
//! model directive instead of storing an approximation.

use serde::{Deserialize, Serialize};

use crate::units::parse_spice_number;

/// Function names reserved by SPICE expression syntax.
const FUNCTION_NAMES: &[&str] = &[
    "abs", "acos", "acosh", "asin", "asinh", "atan", "atanh", "cos", "cosh", "exp", "ln", "log",
    "log10", "max", "min", "pow", "pwr", "sin", "sinh", "sqrt", "tan", "tanh", "uramp", "ceil",
    "floor", "nint", "sgn", "buf", "inv", "table",
];

/// A classified parameter value.
///
/// Numeric values keep the raw source text (suffix included) alongside
/// the scaled double; the scaled form is used for range filtering only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterValue {
    Numeric { raw: String, scaled: f64 },
    Text { raw: String },
}

impl ParameterValue {
    /// The value text as it appeared in the source.
    pub fn raw(&self) -> &str {
        match self {
            ParameterValue::Numeric { raw, .. } => raw,
            ParameterValue::Text { raw } => raw,
        }
    }

    /// The scaled double, present for numeric values only.
    pub fn scaled(&self) -> Option<f64> {
        match self {
            ParameterValue::Numeric { scaled, .. } => Some(*scaled),
            ParameterValue::Text { .. } => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ParameterValue::Numeric { .. })
    }
}

/// Classify a raw parameter text as numeric or opaque string.
///
/// Numeric wins when the whole text parses as a suffixed number, so a
/// signed value like `-0.7` is numeric rather than arithmetic. Callers
/// screen for expressions with [`is_expression`] before classifying;
/// anything non-numeric that survives the screen is kept verbatim.
pub fn classify(raw: &str) -> ParameterValue {
    match parse_spice_number(raw) {
        Some(scaled) => ParameterValue::Numeric {
            raw: raw.to_string(),
            scaled,
        },
        None => ParameterValue::Text {
            raw: raw.to_string(),
        },
    }
}

/// Does this text contain SPICE expression syntax?
///
/// Fires when the text begins with a reserved function name followed by
/// whitespace or `(`, when any word is followed by `(`, or when a
/// whitespace-separated part that is not itself a suffixed number
/// contains one of `( ) + - * / ,`. Parts that parse as numbers are
/// exempt, so signed literals do not count as arithmetic.
pub fn is_expression(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    if starts_with_function_name(trimmed) {
        return true;
    }

    // word immediately (modulo spaces) followed by an open paren
    let bytes = trimmed.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'(' {
            continue;
        }
        let mut j = i;
        while j > 0 && (bytes[j - 1] == b' ' || bytes[j - 1] == b'\t') {
            j -= 1;
        }
        if j > 0 && (bytes[j - 1].is_ascii_alphanumeric() || bytes[j - 1] == b'_') {
            return true;
        }
    }

    for part in trimmed.split_whitespace() {
        if parse_spice_number(part).is_some() {
            continue;
        }
        if part.contains(['(', ')', '+', '-', '*', '/', ',']) {
            return true;
        }
    }

    false
}

fn starts_with_function_name(text: &str) -> bool {
    let stem_len = text
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(text.len());
    let stem = &text[..stem_len];
    if !FUNCTION_NAMES.iter().any(|f| stem.eq_ignore_ascii_case(f)) {
        return false;
    }
    // Must be followed by whitespace or a call; a bare word is a value.
    text[stem_len..].starts_with([' ', '\t', '('])
}
