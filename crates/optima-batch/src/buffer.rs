//! Per-kind record buffers, flushed together.

use optima_core::errors::StoreError;
use optima_core::models::{
    AdvancedMetricsRecord, Evaluation, PatternHitRecord, PromptMetrics, Run, Suggestion,
};
use optima_core::traits::{to_row, IRecordStore, ToRow};

use crate::cell::{CellState, ExperimentCell};

/// Everything one successful cell produced.
#[derive(Debug, Clone)]
pub struct CellRecords {
    pub run: Run,
    pub metrics: PromptMetrics,
    pub advanced: AdvancedMetricsRecord,
    pub pattern_hits: Vec<PatternHitRecord>,
    pub suggestion: Option<Suggestion>,
    pub evaluation: Evaluation,
}

/// Result of one flush.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub runs: usize,
    pub appends: usize,
    pub errors: usize,
}

/// Staging area for one batch. Owned exclusively by the orchestrator.
#[derive(Debug, Default)]
pub struct RecordBuffers {
    runs: Vec<Run>,
    metrics: Vec<PromptMetrics>,
    advanced: Vec<AdvancedMetricsRecord>,
    suggestions: Vec<Suggestion>,
    evaluations: Vec<Evaluation>,
    pattern_hits: Vec<PatternHitRecord>,
    cells: Vec<ExperimentCell>,
}

impl RecordBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a scored cell's records and move the cell to `Buffered`.
    pub fn push(
        &mut self,
        mut cell: ExperimentCell,
        records: CellRecords,
    ) -> Result<(), optima_core::errors::BatchError> {
        cell.advance(CellState::Buffered)?;
        self.runs.push(records.run);
        self.metrics.push(records.metrics);
        self.advanced.push(records.advanced);
        self.pattern_hits.extend(records.pattern_hits);
        self.suggestions.extend(records.suggestion);
        self.evaluations.push(records.evaluation);
        self.cells.push(cell);
        Ok(())
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
            && self.metrics.is_empty()
            && self.advanced.is_empty()
            && self.suggestions.is_empty()
            && self.evaluations.is_empty()
            && self.pattern_hits.is_empty()
    }

    /// Append every non-empty kind, then clear all buffers.
    ///
    /// A failed append is logged and counted; the other kinds are still
    /// attempted and nothing is retained for a later flush.
    pub fn flush(&mut self, store: &dyn IRecordStore) -> FlushReport {
        let mut report = FlushReport {
            runs: self.runs.len(),
            ..FlushReport::default()
        };

        append_kind(store, &self.runs, &mut report);
        append_kind(store, &self.metrics, &mut report);
        append_kind(store, &self.advanced, &mut report);
        append_kind(store, &self.suggestions, &mut report);
        append_kind(store, &self.evaluations, &mut report);
        append_kind(store, &self.pattern_hits, &mut report);

        for mut cell in self.cells.drain(..) {
            if let Err(e) = cell.advance(CellState::Flushed) {
                tracing::error!(run_id = %cell.run_id, error = %e, "cell not flushable");
            }
        }
        self.runs.clear();
        self.metrics.clear();
        self.advanced.clear();
        self.suggestions.clear();
        self.evaluations.clear();
        self.pattern_hits.clear();
        report
    }
}

fn append_kind<T: ToRow>(store: &dyn IRecordStore, records: &[T], report: &mut FlushReport) {
    if records.is_empty() {
        return;
    }
    let result: Result<(), StoreError> =
        to_row::to_rows(records).and_then(|rows| store.append(T::TABLE, &rows));
    match result {
        Ok(()) => {
            report.appends += 1;
            tracing::debug!(table = T::TABLE, rows = records.len(), "appended");
        }
        Err(e) => {
            report.errors += 1;
            tracing::error!(table = T::TABLE, rows = records.len(), error = %e, "append failed; rows dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::PromptVariant;
    use optima_core::constants::tables;
    use optima_storage::MemoryRecordStore;
    use test_fixtures::fakes::FailingStore;
    use test_fixtures::records;

    fn scored_cell() -> ExperimentCell {
        let mut cell = ExperimentCell::new("p-1", PromptVariant::baseline());
        for state in [CellState::Analyzing, CellState::Solving, CellState::Scoring] {
            cell.advance(state).unwrap();
        }
        cell
    }

    fn cell_records(run_id: &str) -> CellRecords {
        CellRecords {
            run: records::sample_run(run_id),
            metrics: records::sample_metrics(run_id),
            advanced: records::sample_advanced(run_id),
            pattern_hits: vec![PatternHitRecord::new(
                run_id,
                "numbers",
                optima_core::models::HitSource::Lexicon,
                &["3".to_string()],
            )],
            suggestion: None,
            evaluation: records::sample_evaluation(run_id),
        }
    }

    fn stage(buffers: &mut RecordBuffers) {
        let cell = scored_cell();
        let run_id = cell.run_id.clone();
        buffers.push(cell, cell_records(&run_id)).unwrap();
    }

    #[test]
    fn flush_appends_each_kind_once_and_clears() {
        let store = MemoryRecordStore::new();
        let mut buffers = RecordBuffers::new();
        stage(&mut buffers);
        stage(&mut buffers);
        assert_eq!(buffers.run_count(), 2);

        let report = buffers.flush(&store);
        assert_eq!(report, FlushReport { runs: 2, appends: 5, errors: 0 });
        assert!(buffers.is_empty());
        assert_eq!(store.append_sizes(tables::RUNS).unwrap(), vec![2]);
        assert_eq!(store.count(tables::SUGGESTIONS).unwrap(), 0);
        assert_eq!(store.count(tables::PATTERN_HITS).unwrap(), 2);
    }

    #[test]
    fn failed_flush_still_clears() {
        let store = FailingStore::default();
        let mut buffers = RecordBuffers::new();
        stage(&mut buffers);
        let report = buffers.flush(&store);
        assert_eq!(report.errors, 5);
        assert_eq!(store.attempts(), 5);
        assert!(buffers.is_empty());
        assert_eq!(buffers.flush(&store), FlushReport::default());
    }

    #[test]
    fn unscored_cell_cannot_be_buffered() {
        let mut buffers = RecordBuffers::new();
        let cell = ExperimentCell::new("p-1", PromptVariant::baseline());
        let run_id = cell.run_id.clone();
        assert!(buffers.push(cell, cell_records(&run_id)).is_err());
        assert!(buffers.is_empty());
    }
}
