//! SQLite store for extracted models and subcircuits.

use std::path::Path;

use rusqlite::{Connection, params};
use spicevault_core::{ModelRecord, SubcircuitRecord};

use crate::error::{Error, Result};

/// Relational index over extracted definitions.
///
/// Names and model types carry `NOCASE` collation so every lookup is
/// case-insensitive. A model row and its parameter rows are written in
/// one transaction; there are no orphan parameters.
pub struct ModelStore {
    conn: Connection,
}

impl ModelStore {
    /// Create or open a store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// An in-memory store, mainly for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        Self::configure(&conn)?;
        Self::ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    fn configure(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            PRAGMA busy_timeout=10000;
            PRAGMA foreign_keys=ON;
            ",
        )?;
        Ok(())
    }

    fn ensure_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS models (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL COLLATE NOCASE,
                type TEXT NOT NULL COLLATE NOCASE,
                source_file TEXT NOT NULL,
                line_number INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS parameters (
                id INTEGER PRIMARY KEY,
                model_id INTEGER NOT NULL REFERENCES models(id) ON DELETE CASCADE,
                name TEXT NOT NULL COLLATE NOCASE,
                value TEXT NOT NULL,
                parameter_type TEXT NOT NULL
                    CHECK (parameter_type IN ('NUMERIC', 'STRING')),
                numeric_value REAL
            );

            CREATE TABLE IF NOT EXISTS subcircuits (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL COLLATE NOCASE,
                content TEXT NOT NULL,
                source_file TEXT NOT NULL,
                line_number INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_models_type ON models(type);
            CREATE INDEX IF NOT EXISTS idx_models_name ON models(name);
            CREATE INDEX IF NOT EXISTS idx_parameters_model ON parameters(model_id);
            CREATE INDEX IF NOT EXISTS idx_parameters_name ON parameters(name);
            CREATE INDEX IF NOT EXISTS idx_parameters_numeric
                ON parameters(name, numeric_value)
                WHERE parameter_type = 'NUMERIC';
            CREATE INDEX IF NOT EXISTS idx_subcircuits_name ON subcircuits(name);
            ",
        )?;
        Ok(())
    }

    /// Insert a model and all of its parameters as one unit.
    pub fn insert_model(&mut self, record: &ModelRecord) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO models (name, type, source_file, line_number)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.name,
                record.model_type,
                record.source_file,
                record.line_number,
            ],
        )?;
        let model_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO parameters
                     (model_id, name, value, parameter_type, numeric_value)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (name, value) in &record.parameters {
                let kind = if value.is_numeric() { "NUMERIC" } else { "STRING" };
                stmt.execute(params![model_id, name, value.raw(), kind, value.scaled()])?;
            }
        }

        tx.commit()?;
        log::debug!(
            "indexed model {} ({}) with {} parameters",
            record.name,
            record.model_type,
            record.parameters.len()
        );
        Ok(model_id)
    }

    /// Insert a subcircuit definition.
    pub fn insert_subcircuit(&mut self, record: &SubcircuitRecord) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO subcircuits (name, content, source_file, line_number)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.name,
                record.content,
                record.source_file,
                record.line_number,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Remove every stored model, parameter, and subcircuit.
    pub fn clear(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM parameters", [])?;
        tx.execute("DELETE FROM models", [])?;
        tx.execute("DELETE FROM subcircuits", [])?;
        tx.commit()?;
        Ok(())
    }

    pub fn model_count(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM models", [], |row| row.get(0))?;
        Ok(n)
    }

    pub fn parameter_count(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM parameters", [], |row| row.get(0))?;
        Ok(n)
    }

    pub fn subcircuit_count(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM subcircuits", [], |row| row.get(0))?;
        Ok(n)
    }
}
