//! Single-prompt submission, grading and suggestions.

use std::sync::Arc;

use optima_batch::submission::USER_PROMPT_NAME;
use optima_batch::{taxonomy, SubmissionService};
use optima_core::config::OptimaConfig;
use optima_core::constants::{tables, MANUAL_GRADER_ID};
use optima_core::errors::{InputError, OptimaError};
use optima_core::models::{AnalysisSource, ProblemRecord, SessionContext};
use optima_storage::MemoryRecordStore;
use test_fixtures::fakes::{FailingStore, FixedSolver, ScriptedAnalyzer};

fn problem() -> ProblemRecord {
    ProblemRecord::new("Solve for x: 3x + 7 = 22.", "7.ee.b.4", "2", "abstract")
}

fn service(
    analyzer: Arc<ScriptedAnalyzer>,
    solver: Arc<FixedSolver>,
    store: Arc<MemoryRecordStore>,
) -> SubmissionService {
    SubmissionService::new(OptimaConfig::default(), analyzer, solver, store)
}

fn primary_analyzer() -> Arc<ScriptedAnalyzer> {
    Arc::new(ScriptedAnalyzer::always(&test_fixtures::analyzer_response()))
}

#[test]
fn submit_scores_and_persists_the_prompt() {
    let store = Arc::new(MemoryRecordStore::new());
    let solver = Arc::new(FixedSolver::new("x = 5"));
    let service = service(primary_analyzer(), solver.clone(), store.clone());
    let session = SessionContext::new("student-7");

    let prompt = "Explain why each step is valid, then verify the answer by substitution.";
    let outcome = service.submit(&session, &problem(), prompt).unwrap();

    assert_eq!(outcome.analysis_source, AnalysisSource::Primary);
    assert_eq!(outcome.persistence_errors, 0);
    assert_eq!(outcome.run.prompt_name, USER_PROMPT_NAME);
    assert_eq!(outcome.run.user_id, "student-7");
    assert_eq!(outcome.run.session_id, session.session_id);
    assert_eq!(outcome.run.response_text, "x = 5");
    assert_eq!(outcome.metrics.run_id, outcome.run.run_id);
    assert_eq!(solver.calls(), 1);

    assert_eq!(store.count(tables::RUNS).unwrap(), 1);
    assert_eq!(store.count(tables::METRICS_DETERMINISTIC).unwrap(), 1);
    assert_eq!(store.count(tables::METRICS_ADVANCED).unwrap(), 1);
    assert!(store.count(tables::PATTERN_HITS).unwrap() >= 1);
    assert_eq!(store.count(tables::EVALUATIONS).unwrap(), 0);
}

#[test]
fn submit_uses_the_configured_models() {
    let mut config = OptimaConfig::default();
    config.batch.analyzer_model = Some("gpt-4o".to_string());
    config.batch.solver_model = Some("gpt-4o-mini".to_string());
    let analyzer = primary_analyzer();
    let solver = Arc::new(FixedSolver::new("x = 5"));
    let service = SubmissionService::new(
        config,
        analyzer.clone(),
        solver.clone(),
        Arc::new(MemoryRecordStore::new()),
    );

    let outcome = service
        .submit(&SessionContext::new("u"), &problem(), "Explain each step.")
        .unwrap();

    assert_eq!(analyzer.models(), vec!["gpt-4o"]);
    assert_eq!(solver.models(), vec!["gpt-4o-mini"]);
    assert_eq!(outcome.run.solver_model_name, "gpt-4o-mini");
}

#[test]
fn blank_prompt_is_rejected_before_any_call() {
    let store = Arc::new(MemoryRecordStore::new());
    let analyzer = primary_analyzer();
    let solver = Arc::new(FixedSolver::new("x = 5"));
    let service = service(analyzer.clone(), solver.clone(), store.clone());

    let err = service
        .submit(&SessionContext::new("u"), &problem(), "  \n ")
        .unwrap_err();

    assert!(matches!(err, OptimaError::Input(InputError::BlankPrompt)));
    assert!(analyzer.modes().is_empty());
    assert_eq!(solver.calls(), 0);
    assert_eq!(store.count(tables::RUNS).unwrap(), 0);
}

#[test]
fn solver_failure_is_returned() {
    let store = Arc::new(MemoryRecordStore::new());
    let solver = Arc::new(FixedSolver::new("x = 5").failing_call(0));
    let service = service(primary_analyzer(), solver, store.clone());

    let err = service
        .submit(&SessionContext::new("u"), &problem(), "Solve it carefully.")
        .unwrap_err();

    assert!(matches!(err, OptimaError::Collaborator(_)));
    assert_eq!(store.count(tables::RUNS).unwrap(), 0);
}

#[test]
fn store_failures_are_counted_not_returned() {
    let store = Arc::new(FailingStore::default());
    let service = SubmissionService::new(
        OptimaConfig::default(),
        primary_analyzer(),
        Arc::new(FixedSolver::new("x = 5")),
        store.clone(),
    );

    let outcome = service
        .submit(&SessionContext::new("u"), &problem(), "Explain each step.")
        .unwrap();

    // Run, metrics, advanced metrics and the analyzer's pattern hits.
    assert_eq!(outcome.persistence_errors, 4);
    assert_eq!(store.attempts(), 4);
}

#[test]
fn grade_uses_the_evaluator_name_or_manual() {
    let store = Arc::new(MemoryRecordStore::new());
    let service = service(primary_analyzer(), Arc::new(FixedSolver::new("5")), store.clone());

    let anonymous = service
        .grade(&SessionContext::new("u"), "run-1", true, "looks right")
        .unwrap();
    assert_eq!(anonymous.grader_id, MANUAL_GRADER_ID);
    assert_eq!(anonymous.correctness_score, 1);

    let named = service
        .grade(&SessionContext::new("u").with_evaluator("Ana"), "run-1", false, "")
        .unwrap();
    assert_eq!(named.grader_id, "Ana");
    assert_eq!(named.correctness_score, 0);

    let rows = store.rows(tables::EVALUATIONS).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["grader_id"], "Ana");
}

#[test]
fn grade_propagates_store_errors() {
    let service = SubmissionService::new(
        OptimaConfig::default(),
        primary_analyzer(),
        Arc::new(FixedSolver::new("5")),
        Arc::new(FailingStore::default()),
    );
    let err = service
        .grade(&SessionContext::new("u"), "run-1", true, "")
        .unwrap_err();
    assert!(matches!(err, OptimaError::Store(_)));
}

#[test]
fn suggestions_walk_the_taxonomy_once() {
    let store = Arc::new(MemoryRecordStore::new());
    let service = service(primary_analyzer(), Arc::new(FixedSolver::new("5")), store.clone());
    let mut session = SessionContext::new("u");

    let mut keys = Vec::new();
    while let Some(suggestion) = service.suggest(&mut session, "run-1").unwrap() {
        assert!(!suggestion.accepted);
        keys.push(suggestion.suggestion_key);
    }

    let expected: Vec<u16> = taxonomy::entries().iter().map(|e| e.key).collect();
    assert_eq!(keys, expected);
    assert_eq!(store.count(tables::SUGGESTIONS).unwrap(), expected.len());
    assert!(service.suggest(&mut session, "run-2").unwrap().is_none());
}

#[test]
fn renewed_session_starts_suggestions_over() {
    let store = Arc::new(MemoryRecordStore::new());
    let service = service(primary_analyzer(), Arc::new(FixedSolver::new("5")), store);
    let mut session = SessionContext::new("u");

    let first = service.suggest(&mut session, "run-1").unwrap().unwrap();
    let mut renewed = session.renew(optima_core::models::IdentityKeep::USER);
    let again = service.suggest(&mut renewed, "run-2").unwrap().unwrap();

    assert_eq!(first.suggestion_key, again.suggestion_key);
    assert_ne!(first.session_id, again.session_id);
}
