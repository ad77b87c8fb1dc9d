//! SPICE netlist extractor for spicevault.
//!
//! This crate pulls `.model` and `.subckt` definitions out of SPICE
//! netlist text. Everything else in the file is skipped; malformed
//! input is reported through an [`AnomalyLog`] and never aborts the
//! scan.
//!
//! # Example
//!
//! ```
//! use spicevault_parser::{AnomalyLog, Extracted, extract};
//!
//! let mut anomalies = AnomalyLog::disabled();
//! let records = extract(
//!     ".model nfet nmos vth=0.7 l=0.18u\n",
//!     "models.lib",
//!     &mut anomalies,
//! );
//!
//! assert_eq!(records.len(), 1);
//! let Extracted::Model(model) = &records[0] else { panic!() };
//! assert_eq!(model.model_type, "nmos");
//! assert_eq!(model.parameters["l"].raw(), "0.18u");
//! ```

pub mod anomaly;
pub mod lexer;
pub mod parser;

pub use anomaly::AnomalyLog;
pub use parser::{Extracted, Parser, extract};
