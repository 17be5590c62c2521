//! Flattening of records into store rows.

use serde::Serialize;

use crate::constants::tables;
use crate::errors::StoreError;
use crate::models::{
    AdvancedMetricsRecord, Evaluation, PatternHitRecord, PromptMetrics, Run, Suggestion,
};

/// A flat, string-keyed row.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Implemented by every persisted record type.
pub trait ToRow: Serialize {
    /// Destination table.
    const TABLE: &'static str;

    fn to_row(&self) -> Result<Row, StoreError> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(other) => Err(StoreError::Serialization {
                message: format!("{} record is not an object: {other}", Self::TABLE),
            }),
            Err(e) => Err(StoreError::Serialization {
                message: e.to_string(),
            }),
        }
    }
}

impl ToRow for Run {
    const TABLE: &'static str = tables::RUNS;
}

impl ToRow for PromptMetrics {
    const TABLE: &'static str = tables::METRICS_DETERMINISTIC;
}

impl ToRow for AdvancedMetricsRecord {
    const TABLE: &'static str = tables::METRICS_ADVANCED;
}

impl ToRow for Suggestion {
    const TABLE: &'static str = tables::SUGGESTIONS;
}

impl ToRow for Evaluation {
    const TABLE: &'static str = tables::EVALUATIONS;
}

impl ToRow for PatternHitRecord {
    const TABLE: &'static str = tables::PATTERN_HITS;
}

/// Flatten a slice of records, stopping at the first failure.
pub fn to_rows<T: ToRow>(records: &[T]) -> Result<Vec<Row>, StoreError> {
    records.iter().map(ToRow::to_row).collect()
}
