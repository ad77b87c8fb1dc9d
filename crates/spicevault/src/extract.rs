//! Extraction driver: files in, store rows out.

use std::path::{Path, PathBuf};

use spicevault_parser::{AnomalyLog, Extracted, extract};
use spicevault_store::ModelStore;

use crate::error::{Error, Result};

/// Driver configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Where to append anomaly lines; `None` suppresses the file sink.
    pub log_path: Option<PathBuf>,
}

/// Counts from one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub models: usize,
    pub subcircuits: usize,
}

/// Streams extracted definitions into a [`ModelStore`].
///
/// Files are processed one at a time; each record is persisted as soon
/// as its directive completes. The anomaly sink stays open for the
/// extractor's lifetime.
pub struct Extractor {
    store: ModelStore,
    anomalies: AnomalyLog,
}

impl Extractor {
    pub fn new(store: ModelStore, config: &ExtractorConfig) -> Result<Self> {
        let anomalies = AnomalyLog::from_path(config.log_path.as_deref()).map_err(|source| {
            Error::AnomalyLog {
                // only reachable with a configured path
                path: config.log_path.clone().unwrap_or_default(),
                source,
            }
        })?;
        Ok(Self { store, anomalies })
    }

    /// Extract one netlist file into the store.
    ///
    /// Unreadable files abort only themselves; everything extracted
    /// from earlier files stays persisted.
    pub fn extract_file(&mut self, path: &Path) -> Result<ExtractStats> {
        let bytes = std::fs::read(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);
        let file_name = path.to_string_lossy();
        self.extract_source(&source, &file_name)
    }

    /// Extract in-memory netlist text into the store.
    pub fn extract_source(&mut self, source: &str, file_name: &str) -> Result<ExtractStats> {
        let mut stats = ExtractStats::default();
        for record in extract(source, file_name, &mut self.anomalies) {
            match record {
                Extracted::Model(model) => {
                    self.store.insert_model(&model)?;
                    stats.models += 1;
                }
                Extracted::Subcircuit(subcircuit) => {
                    self.store.insert_subcircuit(&subcircuit)?;
                    stats.subcircuits += 1;
                }
            }
        }
        log::info!(
            "{file_name}: {} models, {} subcircuits",
            stats.models,
            stats.subcircuits
        );
        Ok(stats)
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Release the driver, keeping the store open.
    pub fn into_store(self) -> ModelStore {
        self.store
    }
}
