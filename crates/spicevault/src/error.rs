//! Error types for the extraction driver.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving an extraction.
#[derive(Debug, Error)]
pub enum Error {
    /// A netlist file could not be read. Aborts that file only.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The anomaly log could not be opened.
    #[error("cannot open anomaly log {path}: {source}")]
    AnomalyLog {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The store rejected a write or query.
    #[error(transparent)]
    Store(#[from] spicevault_store::Error),
}
