//! # spicevault
//!
//! Extracts SPICE device-model and subcircuit definitions from netlist
//! files into a queryable SQLite store.
//!
//! The pipeline: file bytes are normalized (CR stripped, case folded
//! for lexing), the extractor pulls out `.model` and `.subckt`
//! definitions, parameter values are classified (numeric with SI
//! prefix vs. opaque string; arithmetic is rejected), and every record
//! lands in the store as soon as its directive completes. Lookups
//! filter by model type, SQL-LIKE name pattern, and numeric parameter
//! range, all case-insensitive.
//!
//! ## Quick start
//!
//! ```
//! use spicevault::{Extractor, ExtractorConfig, ModelFilter, ModelStore, ParameterRange};
//!
//! let store = ModelStore::open_in_memory().unwrap();
//! let mut extractor = Extractor::new(store, &ExtractorConfig::default()).unwrap();
//!
//! let stats = extractor
//!     .extract_source(".model nfet nmos l=0.18u vth=0.7\n", "models.lib")
//!     .unwrap();
//! assert_eq!(stats.models, 1);
//!
//! let filter = ModelFilter::new("nmos")
//!     .with_range(ParameterRange::new("l", Some(1e-7), Some(2e-7)));
//! let hits = extractor.store().query_models(&filter).unwrap();
//! assert!(hits.contains_key("nfet"));
//! ```

pub mod error;
pub mod extract;

pub use error::{Error, Result};
pub use extract::{ExtractStats, Extractor, ExtractorConfig};

// Re-export the member crates for direct access.
pub use spicevault_core as core;
pub use spicevault_parser as parser;
pub use spicevault_store as store;

// Convenient re-exports of the everyday types.
pub use spicevault_core::{
    ModelFilter, ModelRecord, ParameterRange, ParameterValue, SubcircuitFilter, SubcircuitRecord,
};
pub use spicevault_parser::{AnomalyLog, Extracted};
pub use spicevault_store::{ModelMatch, ModelStore, StoreStats, SubcircuitMatch};
