//! SQLite-backed index and query engine for extracted SPICE models.
//!
//! Three relations hold the extraction products: `models`,
//! `parameters`, and `subcircuits`. Inserts are transactional per
//! model; queries filter by type, LIKE pattern, and numeric parameter
//! range with case-insensitive matching throughout.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use spicevault_core::{ModelFilter, ModelRecord, ParameterRange, classify};
//! use spicevault_store::ModelStore;
//!
//! let mut store = ModelStore::open_in_memory().unwrap();
//! store
//!     .insert_model(&ModelRecord {
//!         name: "nfet".into(),
//!         model_type: "nmos".into(),
//!         source_file: "models.lib".into(),
//!         line_number: 1,
//!         parameters: HashMap::from([("l".into(), classify("0.18u"))]),
//!     })
//!     .unwrap();
//!
//! let filter = ModelFilter::new("NMOS")
//!     .with_range(ParameterRange::new("l", Some(1e-7), Some(2e-7)));
//! let hits = store.query_models(&filter).unwrap();
//! assert_eq!(hits["nfet"].parameters["l"], "0.18u");
//! ```

pub mod error;
pub mod query;
pub mod store;

pub use error::{Error, Result};
pub use query::{ModelMatch, StoreStats, SubcircuitMatch};
pub use store::ModelStore;
