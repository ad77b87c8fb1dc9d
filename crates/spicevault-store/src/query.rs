//! Filtered lookups over the store.
//!
//! A model query is one SQL statement: the candidate set is narrowed by
//! type, optional LIKE pattern, and one `EXISTS` clause per parameter
//! range, capped by `LIMIT`, then left-joined back to `parameters` so
//! models without parameters still surface. Range predicates compare
//! `numeric_value`; the returned parameter values are the raw source
//! text, suffixes intact.

use std::collections::BTreeMap;

use rusqlite::params_from_iter;
use rusqlite::types::Value;
use serde::Serialize;
use spicevault_core::{ModelFilter, SubcircuitFilter};

use crate::error::Result;
use crate::store::ModelStore;

/// One model returned by [`ModelStore::query_models`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelMatch {
    pub model_type: String,
    pub source_file: String,
    pub line_number: u32,
    /// Parameter name to raw value text.
    pub parameters: BTreeMap<String, String>,
}

/// One subcircuit returned by [`ModelStore::search_subcircuits`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcircuitMatch {
    pub content: String,
    pub source_file: String,
    pub line_number: u32,
}

/// Store-wide counts for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreStats {
    pub models_by_type: BTreeMap<String, i64>,
    pub subcircuit_count: i64,
}

impl ModelStore {
    /// Look up models by type, name pattern, and parameter ranges.
    ///
    /// Results are keyed by model name; when duplicate names survive
    /// the filter, the most recently inserted row wins. At most
    /// `filter.max_results` model rows are considered.
    pub fn query_models(&self, filter: &ModelFilter) -> Result<BTreeMap<String, ModelMatch>> {
        let mut candidates = String::from("SELECT id FROM models WHERE type = ?");
        let mut values: Vec<Value> = vec![Value::Text(filter.model_type.clone())];

        if let Some(pattern) = &filter.name_pattern {
            candidates.push_str(" AND name LIKE ?");
            values.push(Value::Text(pattern.clone()));
        }

        for range in &filter.ranges {
            candidates.push_str(
                " AND EXISTS (SELECT 1 FROM parameters r \
                 WHERE r.model_id = models.id AND r.name = ? \
                 AND r.parameter_type = 'NUMERIC'",
            );
            values.push(Value::Text(range.name.clone()));
            if let Some(min) = range.min {
                candidates.push_str(" AND r.numeric_value >= ?");
                values.push(Value::Real(min));
            }
            if let Some(max) = range.max {
                candidates.push_str(" AND r.numeric_value <= ?");
                values.push(Value::Real(max));
            }
            candidates.push(')');
        }

        candidates.push_str(" ORDER BY id LIMIT ?");
        values.push(Value::Integer(filter.max_results as i64));

        let sql = format!(
            "SELECT m.id, m.name, m.type, m.source_file, m.line_number, p.name, p.value \
             FROM models m \
             LEFT JOIN parameters p ON p.model_id = m.id \
             WHERE m.id IN ({candidates}) \
             ORDER BY m.id"
        );

        let mut stmt = self.conn().prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(values.iter()))?;

        let mut results: BTreeMap<String, ModelMatch> = BTreeMap::new();
        let mut last_id: Option<i64> = None;
        while let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            if last_id != Some(id) {
                results.insert(
                    name.clone(),
                    ModelMatch {
                        model_type: row.get(2)?,
                        source_file: row.get(3)?,
                        line_number: row.get(4)?,
                        parameters: BTreeMap::new(),
                    },
                );
                last_id = Some(id);
            }
            let parameter: Option<String> = row.get(5)?;
            if let Some(parameter) = parameter
                && let Some(entry) = results.get_mut(&name)
            {
                entry.parameters.insert(parameter, row.get(6)?);
            }
        }

        Ok(results)
    }

    /// Look up subcircuits by name pattern.
    pub fn search_subcircuits(
        &self,
        filter: &SubcircuitFilter,
    ) -> Result<BTreeMap<String, SubcircuitMatch>> {
        let mut sql = String::from(
            "SELECT name, content, source_file, line_number FROM subcircuits",
        );
        let mut values: Vec<Value> = Vec::new();

        if let Some(pattern) = &filter.name_pattern {
            sql.push_str(" WHERE name LIKE ?");
            values.push(Value::Text(pattern.clone()));
        }
        sql.push_str(" ORDER BY id LIMIT ?");
        values.push(Value::Integer(filter.max_results as i64));

        let mut stmt = self.conn().prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(values.iter()))?;

        let mut results = BTreeMap::new();
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            results.insert(
                name,
                SubcircuitMatch {
                    content: row.get(1)?,
                    source_file: row.get(2)?,
                    line_number: row.get(3)?,
                },
            );
        }

        Ok(results)
    }

    /// Model counts per type plus the subcircuit count.
    pub fn stats(&self) -> Result<StoreStats> {
        let mut stmt = self
            .conn()
            .prepare("SELECT type, COUNT(*) FROM models GROUP BY type ORDER BY type")?;
        let mut rows = stmt.query([])?;

        let mut models_by_type = BTreeMap::new();
        while let Some(row) = rows.next()? {
            models_by_type.insert(row.get::<_, String>(0)?, row.get::<_, i64>(1)?);
        }

        Ok(StoreStats {
            models_by_type,
            subcircuit_count: self.subcircuit_count()?,
        })
    }
}
