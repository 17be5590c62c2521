//! Single-prompt submission path: one user, one problem, one prompt.

use std::sync::Arc;

use chrono::Utc;

use optima_core::config::OptimaConfig;
use optima_core::constants::MANUAL_GRADER_ID;
use optima_core::errors::{InputError, OptimaResult};
use optima_core::models::{
    AnalysisSource, Evaluation, ProblemRecord, PromptMetrics, Run, SessionContext, Suggestion,
};
use optima_core::traits::{to_row, IAnalyzer, IRecordStore, ISolver, ToRow};
use optima_metrics::{AdvancedTokenizer, BasicMetrics};
use optima_scoring::sss::compute_sss;
use optima_scoring::{AdvancedMetrics, AdvancedScorer};

use crate::analysis::{AnalysisOutcome, AnalyzerAttempts, HeuristicInputs};
use crate::orchestrator::pattern_hit_records;
use crate::taxonomy;

/// Name recorded on runs for free-form user prompts.
pub const USER_PROMPT_NAME: &str = "User Prompt";

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub run: Run,
    pub metrics: PromptMetrics,
    pub advanced: AdvancedMetrics,
    pub analysis_source: AnalysisSource,
    /// Appends that failed; the outcome is still valid.
    pub persistence_errors: usize,
}

pub struct SubmissionService {
    config: OptimaConfig,
    analyzer: Arc<dyn IAnalyzer>,
    solver: Arc<dyn ISolver>,
    store: Arc<dyn IRecordStore>,
    tokenizer: AdvancedTokenizer,
    metrics: BasicMetrics,
    scorer: AdvancedScorer,
}

impl SubmissionService {
    pub fn new(
        config: OptimaConfig,
        analyzer: Arc<dyn IAnalyzer>,
        solver: Arc<dyn ISolver>,
        store: Arc<dyn IRecordStore>,
    ) -> Self {
        let metrics = BasicMetrics::new(&config.metrics);
        let scorer = AdvancedScorer::new(&config.scoring);
        Self {
            config,
            analyzer,
            solver,
            store,
            tokenizer: AdvancedTokenizer::new(),
            metrics,
            scorer,
        }
    }

    /// Analyze, solve and score one prompt, then append its records.
    ///
    /// Blank input is rejected before any collaborator is called. A solver
    /// failure is returned; store failures are only counted.
    pub fn submit(
        &self,
        session: &SessionContext,
        problem: &ProblemRecord,
        prompt_text: &str,
    ) -> OptimaResult<SubmissionOutcome> {
        InputError::check_texts(&problem.problem_text, prompt_text)?;
        let span = crate::submission_span!(session.session_id, problem.problem_id);
        let _guard = span.enter();

        let run_id = uuid::Uuid::new_v4().to_string();
        let metrics = self.metrics.compute(
            prompt_text,
            &self.tokenizer,
            &run_id,
            self.config.metrics.effective_window_size(),
        );
        let fallback = HeuristicInputs::new(&metrics, compute_sss(prompt_text).weighted);
        let batch = &self.config.batch;
        let AnalysisOutcome { analysis, source } = AnalyzerAttempts::new(
            self.analyzer.as_ref(),
            batch.effective_analyzer_model(),
            batch.effective_strict_retry(),
        )
        .run(prompt_text, &problem.problem_text, &fallback);

        let solution =
            self.solver
                .solve(prompt_text, &problem.problem_text, batch.effective_solver_model())?;
        let advanced = self.scorer.score(prompt_text, Some(&analysis.pattern_hits));

        let run = Run {
            run_id: run_id.clone(),
            session_id: session.session_id.clone(),
            user_id: session.user_id.clone(),
            problem_id: problem.problem_id.clone(),
            problem_text: problem.problem_text.clone(),
            content_domain: problem.content_domain.clone(),
            cognitive_level: problem.cognitive_level.clone(),
            problem_context: problem.problem_context.clone(),
            prompt_text: prompt_text.to_string(),
            prompt_level: 0,
            prompt_name: USER_PROMPT_NAME.to_string(),
            persona: None,
            solver_model_name: batch.effective_solver_model().to_string(),
            response_text: solution.solution_text,
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
            consistency_score: None,
            latency_ms: solution.latency_ms,
            tokens_in: solution.tokens_in,
            tokens_out: solution.tokens_out,
            created_at: Utc::now(),
        };

        let record = advanced.to_record(&run_id, &session.session_id, &session.user_id, prompt_text);
        let hits = pattern_hit_records(&run_id, &advanced, &analysis.pattern_hits);
        let persistence_errors = [
            self.append(std::slice::from_ref(&run)),
            self.append(std::slice::from_ref(&metrics)),
            self.append(std::slice::from_ref(&record)),
            self.append(&hits),
        ]
        .into_iter()
        .filter(|ok| !ok)
        .count();

        tracing::info!(run_id = %run_id, source = %source, "prompt submitted");
        Ok(SubmissionOutcome {
            run,
            metrics,
            advanced,
            analysis_source: source,
            persistence_errors,
        })
    }

    /// Record a manual grade for `run_id`.
    pub fn grade(
        &self,
        session: &SessionContext,
        run_id: &str,
        correct: bool,
        notes: &str,
    ) -> OptimaResult<Evaluation> {
        let grader = session.evaluator_name.as_deref().unwrap_or(MANUAL_GRADER_ID);
        let evaluation = Evaluation::new(run_id, grader, correct, notes);
        self.store
            .append(Evaluation::TABLE, &[evaluation.to_row()?])?;
        Ok(evaluation)
    }

    /// Suggest the first taxonomy entry, in key order, not yet shown in
    /// this session. `None` once every entry has been shown.
    pub fn suggest(
        &self,
        session: &mut SessionContext,
        run_id: &str,
    ) -> OptimaResult<Option<Suggestion>> {
        let Some(entry) = taxonomy::entries()
            .iter()
            .find(|entry| !session.has_seen(entry.name))
        else {
            return Ok(None);
        };
        session.mark_shown(entry.name);
        let suggestion = Suggestion::new(
            &session.session_id,
            &session.user_id,
            run_id,
            entry.key,
            entry.name,
            entry.level,
            false,
        );
        self.store
            .append(Suggestion::TABLE, &[suggestion.to_row()?])?;
        Ok(Some(suggestion))
    }

    fn append<T: ToRow>(&self, records: &[T]) -> bool {
        if records.is_empty() {
            return true;
        }
        match to_row::to_rows(records).and_then(|rows| self.store.append(T::TABLE, &rows)) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(table = T::TABLE, error = %e, "append failed");
                false
            }
        }
    }
}
