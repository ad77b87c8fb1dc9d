//! Anomaly reporting for the extractor.
//!
//! Parse problems never abort extraction; they are appended to an
//! optional log file, one line per anomaly, and mirrored to the `log`
//! facade. With no file configured the sink is a no-op beyond the
//! facade.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append-mode anomaly sink, held open for the extractor's lifetime.
pub struct AnomalyLog {
    sink: Option<File>,
}

impl AnomalyLog {
    /// A sink that only forwards to the `log` facade.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Open (or create) the log file at `path` for appending.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { sink: Some(file) })
    }

    /// Open from an optional configured path.
    pub fn from_path(path: Option<&Path>) -> std::io::Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::disabled()),
        }
    }

    /// Record one anomaly at `file`:`line`.
    pub fn record(&mut self, file: &str, line: usize, message: &str) {
        log::debug!("{file}:{line}: {message}");
        if let Some(sink) = &mut self.sink {
            // a failing sink must not abort extraction
            let _ = writeln!(sink, "{file}:{line}: {message}");
        }
    }
}
