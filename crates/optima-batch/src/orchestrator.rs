//! Batch orchestrator: problems × prompt variants × personas.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use optima_core::config::OptimaConfig;
use optima_core::constants::{AUTO_EVALUATION_NOTES, AUTO_GRADER_ID};
use optima_core::errors::{BatchError, CollaboratorError};
use optima_core::models::{
    Evaluation, HitSource, PatternHitRecord, PatternHits, ProblemRecord, PromptTemplate, Run,
    SessionContext, Solution, Suggestion,
};
use optima_core::traits::{
    IAnalyzer, IJudger, IPromptSynthesizer, IRecordStore, ISolver, ISourceTable,
};
use optima_metrics::{AdvancedTokenizer, BasicMetrics};
use optima_scoring::sss::compute_sss;
use optima_scoring::{consistency, AdvancedMetrics, AdvancedScorer};

use crate::analysis::{AnalysisOutcome, AnalyzerAttempts, HeuristicInputs};
use crate::buffer::{CellRecords, RecordBuffers};
use crate::cell::{CellState, ExperimentCell};
use crate::events::{
    BatchCompleteEvent, BatchStartedEvent, CellCompletedEvent, CellFailedEvent, EventDispatcher,
    FlushEvent, ProgressEvent,
};
use crate::selection::{self, SelectionFilter};
use crate::taxonomy;
use crate::variants::{self, PromptVariant};

/// External collaborators of a batch.
#[derive(Clone)]
pub struct Collaborators {
    pub source: Arc<dyn ISourceTable>,
    pub store: Arc<dyn IRecordStore>,
    pub analyzer: Arc<dyn IAnalyzer>,
    pub solver: Arc<dyn ISolver>,
    pub synthesizer: Arc<dyn IPromptSynthesizer>,
    /// Only consulted when consistency sampling is enabled.
    pub judger: Option<Arc<dyn IJudger>>,
}

/// Always returned, even when nothing could be selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub selected: usize,
    pub total_cells: usize,
    pub created_runs: usize,
    pub failed_cells: usize,
    pub flushes: usize,
    pub persistence_errors: usize,
}

pub struct BatchOrchestrator {
    config: OptimaConfig,
    collaborators: Collaborators,
    entries: Vec<PromptTemplate>,
    dispatcher: EventDispatcher,
    tokenizer: AdvancedTokenizer,
    metrics: BasicMetrics,
    scorer: AdvancedScorer,
}

impl BatchOrchestrator {
    pub fn new(config: OptimaConfig, collaborators: Collaborators) -> Self {
        let metrics = BasicMetrics::new(&config.metrics);
        let scorer = AdvancedScorer::new(&config.scoring);
        Self {
            config,
            collaborators,
            entries: taxonomy::entries().to_vec(),
            dispatcher: EventDispatcher::new(),
            tokenizer: AdvancedTokenizer::new(),
            metrics,
            scorer,
        }
    }

    /// Restrict the taxonomy entries used for variants.
    pub fn with_taxonomy(mut self, entries: Vec<PromptTemplate>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    pub fn config(&self) -> &OptimaConfig {
        &self.config
    }

    /// Run the whole batch. Never fails: problems surface in the summary
    /// and the logs.
    pub fn run(&self) -> BatchSummary {
        let batch = &self.config.batch;
        let table = batch.effective_source_table();
        let flush_every = batch.effective_flush_every();
        let span = crate::batch_span!(table, flush_every);
        let _guard = span.enter();

        let rows = match self.collaborators.source.read(table) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(table, error = %e, "source table unreadable");
                return self.finish(BatchSummary::default());
            }
        };
        let selection = match selection::select(table, &rows, &SelectionFilter::from(batch)) {
            Ok(selection) => selection,
            Err(e) => {
                tracing::error!(table, error = %e, "no problems selected");
                return self.finish(BatchSummary::default());
            }
        };
        for rejected in &selection.rejected {
            tracing::warn!(table, error = %rejected, "row rejected");
        }

        let per_problem = variants::cells_per_problem(
            batch.effective_include_baseline(),
            self.entries.len(),
            batch.personas.len(),
        );
        let mut summary = BatchSummary {
            selected: selection.problems.len(),
            total_cells: selection.problems.len() * per_problem,
            ..BatchSummary::default()
        };
        tracing::info!(
            selected = summary.selected,
            total_cells = summary.total_cells,
            "batch started"
        );
        self.dispatcher.emit_batch_started(&BatchStartedEvent {
            selected: summary.selected,
            total_cells: summary.total_cells,
        });

        let session = SessionContext::new(batch.effective_batch_user_id());
        let mut buffers = RecordBuffers::new();
        let mut done = 0usize;

        for problem in &selection.problems {
            let variants = variants::build_variants(
                problem,
                &self.entries,
                &batch.personas,
                batch.effective_include_baseline(),
                self.collaborators.synthesizer.as_ref(),
            );
            for variant in variants {
                if done > 0 {
                    std::thread::sleep(batch.effective_throttle());
                }
                let mut cell = ExperimentCell::new(&problem.problem_id, variant);
                let cell_span = crate::cell_span!(cell.run_id, cell.variant.name);
                let _cell_guard = cell_span.enter();

                match self.process_cell(&mut cell, problem, &session) {
                    Ok(records) => {
                        let completed = CellCompletedEvent {
                            run_id: cell.run_id.clone(),
                            problem_id: problem.problem_id.clone(),
                            prompt_name: cell.variant.name.clone(),
                        };
                        match buffers.push(cell, records) {
                            Ok(()) => {
                                summary.created_runs += 1;
                                self.dispatcher.emit_cell_completed(&completed);
                            }
                            Err(e) => {
                                summary.failed_cells += 1;
                                tracing::error!(error = %e, "scored cell could not be buffered");
                            }
                        }
                    }
                    Err(e) => {
                        let stage = cell.state().name().to_string();
                        if let Err(te) = cell.fail() {
                            tracing::error!(error = %te, "cell already terminal");
                        }
                        summary.failed_cells += 1;
                        tracing::warn!(stage = %stage, error = %e, "cell failed");
                        self.dispatcher.emit_cell_failed(&CellFailedEvent {
                            run_id: cell.run_id.clone(),
                            problem_id: problem.problem_id.clone(),
                            prompt_name: cell.variant.name.clone(),
                            stage,
                            message: e.to_string(),
                        });
                    }
                }

                done += 1;
                self.dispatcher.emit_progress(&ProgressEvent {
                    done,
                    total: summary.total_cells,
                });
                tracing::debug!(done, total = summary.total_cells, "progress");

                if buffers.run_count() >= flush_every {
                    self.flush(&mut buffers, &mut summary);
                }
            }
        }

        if !buffers.is_empty() {
            self.flush(&mut buffers, &mut summary);
        }
        tracing::info!(
            created_runs = summary.created_runs,
            failed_cells = summary.failed_cells,
            persistence_errors = summary.persistence_errors,
            "batch complete"
        );
        self.finish(summary)
    }

    fn finish(&self, summary: BatchSummary) -> BatchSummary {
        self.dispatcher
            .emit_batch_complete(&BatchCompleteEvent { summary });
        summary
    }

    fn flush(&self, buffers: &mut RecordBuffers, summary: &mut BatchSummary) {
        let span = crate::flush_span!(buffers.run_count());
        let _guard = span.enter();
        let report = buffers.flush(self.collaborators.store.as_ref());
        summary.flushes += 1;
        summary.persistence_errors += report.errors;
        self.dispatcher.emit_flush(&FlushEvent {
            runs: report.runs,
            errors: report.errors,
        });
    }

    /// Drive one cell to `Scoring` and assemble its records.
    fn process_cell(
        &self,
        cell: &mut ExperimentCell,
        problem: &ProblemRecord,
        session: &SessionContext,
    ) -> Result<CellRecords, BatchError> {
        let batch = &self.config.batch;
        let prompt_text = cell.variant.prompt_text.clone();
        let window = self.config.metrics.effective_window_size();

        cell.advance(CellState::Analyzing)?;
        let prompt_metrics = self
            .metrics
            .compute(&prompt_text, &self.tokenizer, &cell.run_id, window);
        let fallback = HeuristicInputs::new(&prompt_metrics, compute_sss(&prompt_text).weighted);
        let AnalysisOutcome { analysis, source } = AnalyzerAttempts::new(
            self.collaborators.analyzer.as_ref(),
            batch.effective_analyzer_model(),
            batch.effective_strict_retry(),
        )
        .run(&prompt_text, &problem.problem_text, &fallback);

        cell.advance(CellState::Solving)?;
        let samples = if batch.consistency_enabled() {
            batch.effective_consistency_samples()
        } else {
            1
        };
        let solutions = self
            .solve_samples(&prompt_text, &problem.problem_text, samples)
            .map_err(|e| BatchError::CellFailed {
                run_id: cell.run_id.clone(),
                stage: CellState::Solving.name().to_string(),
                message: e.to_string(),
            })?;
        let Some(solution) = solutions.first() else {
            return Err(BatchError::CellFailed {
                run_id: cell.run_id.clone(),
                stage: CellState::Solving.name().to_string(),
                message: "solver returned no samples".to_string(),
            });
        };

        cell.advance(CellState::Scoring)?;
        let advanced = self.scorer.score(&prompt_text, Some(&analysis.pattern_hits));
        let consistency_score = (solutions.len() > 1).then(|| {
            let texts: Vec<&str> = solutions.iter().map(|s| s.solution_text.as_str()).collect();
            consistency::score(&texts)
        });

        let user_id = session.user_id.as_str();
        let run = Run {
            run_id: cell.run_id.clone(),
            session_id: session.session_id.clone(),
            user_id: user_id.to_string(),
            problem_id: problem.problem_id.clone(),
            problem_text: problem.problem_text.clone(),
            content_domain: problem.content_domain.clone(),
            cognitive_level: problem.cognitive_level.clone(),
            problem_context: problem.problem_context.clone(),
            prompt_text: prompt_text.clone(),
            prompt_level: cell.variant.level,
            prompt_name: cell.variant.name.clone(),
            persona: cell.variant.persona.clone(),
            solver_model_name: batch.effective_solver_model().to_string(),
            response_text: solution.solution_text.clone(),
            clarity_score: analysis.qualitative_scores.clarity(),
            specificity_score: analysis.qualitative_scores.specificity(),
            structure_score: analysis.qualitative_scores.structure(),
            estimated_token_count: analysis.estimated_token_count(),
            estimated_mattr_score: analysis.estimated_mattr(),
            estimated_reading_ease: analysis.estimated_reading_ease(),
            analysis_rationale: analysis.overall_evaluation.clone(),
            analysis_source: source,
            cdi_composite: advanced.cdi.composite,
            sss_weighted: advanced.sss.weighted,
            arq_score: advanced.arq.score,
            consistency_score,
            latency_ms: solution.latency_ms,
            tokens_in: solution.tokens_in,
            tokens_out: solution.tokens_out,
            created_at: Utc::now(),
        };

        let suggestion = cell.variant.key.map(|key| {
            Suggestion::new(
                &session.session_id,
                user_id,
                &cell.run_id,
                key,
                &cell.variant.name,
                cell.variant.level,
                true,
            )
        });
        let evaluation = self.evaluate(&cell.run_id, problem, &cell.variant, solution, consistency_score);

        Ok(CellRecords {
            pattern_hits: pattern_hit_records(&cell.run_id, &advanced, &analysis.pattern_hits),
            advanced: advanced.to_record(&cell.run_id, &session.session_id, user_id, &prompt_text),
            metrics: prompt_metrics,
            run,
            suggestion,
            evaluation,
        })
    }

    /// Solver is never retried; any failed sample fails the cell.
    fn solve_samples(
        &self,
        prompt_text: &str,
        problem_text: &str,
        samples: usize,
    ) -> Result<Vec<Solution>, CollaboratorError> {
        let model = self.config.batch.effective_solver_model();
        (0..samples)
            .map(|_| self.collaborators.solver.solve(prompt_text, problem_text, model))
            .collect()
    }

    /// Judge grade when sampling with a judger, otherwise the review placeholder.
    fn evaluate(
        &self,
        run_id: &str,
        problem: &ProblemRecord,
        variant: &PromptVariant,
        solution: &Solution,
        consistency_score: Option<f64>,
    ) -> Evaluation {
        let placeholder = || Evaluation::new(run_id, AUTO_GRADER_ID, true, AUTO_EVALUATION_NOTES);
        let judger = match (&self.collaborators.judger, consistency_score) {
            (Some(judger), Some(_)) => judger,
            _ => return placeholder(),
        };
        match judger.judge(&problem.problem_text, &variant.prompt_text, &solution.solution_text) {
            Ok(judgement) => Evaluation::new(
                run_id,
                judger.grader_id(),
                judgement.is_correct(),
                &judgement.narrative,
            )
            .with_aggregate(judgement.aggregate_score),
            Err(e) => {
                tracing::warn!(error = %e, "judger failed; writing placeholder evaluation");
                placeholder()
            }
        }
    }
}

/// Scorer hits plus analyzer hits, one record per non-empty category.
pub fn pattern_hit_records(
    run_id: &str,
    advanced: &AdvancedMetrics,
    analyzer_hits: &PatternHits,
) -> Vec<PatternHitRecord> {
    let lexicon = advanced.hits();
    lexicon
        .iter()
        .map(|(category, hits)| (category, hits, HitSource::Lexicon))
        .chain(
            analyzer_hits
                .iter()
                .map(|(category, hits)| (category, hits, HitSource::Analyzer)),
        )
        .filter(|(_, hits, _)| !hits.is_empty())
        .map(|(category, hits, source)| PatternHitRecord::new(run_id, category, source, hits))
        .collect()
}
