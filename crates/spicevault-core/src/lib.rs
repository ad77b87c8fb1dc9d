//! Core types for the spicevault SPICE model extractor.
//!
//! This crate provides the vocabulary shared by the extractor and the
//! store:
//!
//! - [`units`] - SI-prefix numeric parsing (`1k`, `0.18u`, `1meg`)
//! - [`ParameterValue`] - classified parameter values (numeric vs. text)
//! - [`ModelRecord`] / [`SubcircuitRecord`] - extraction products
//! - [`ModelFilter`] / [`SubcircuitFilter`] - query inputs
//!
//! # Example
//!
//! ```
//! use spicevault_core::value::classify;
//!
//! let v = classify("0.18u");
//! assert!(v.is_numeric());
//! assert!((v.scaled().unwrap() - 1.8e-7).abs() < 1e-20);
//! assert_eq!(v.raw(), "0.18u");
//! ```

pub mod filter;
pub mod record;
pub mod units;
pub mod value;

pub use filter::{DEFAULT_MAX_RESULTS, ModelFilter, ParameterRange, SubcircuitFilter};
pub use record::{ModelRecord, SubcircuitRecord};
pub use value::{ParameterValue, classify, is_expression};
