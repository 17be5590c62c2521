//! Ready-made records for buffer and store tests.

use chrono::Utc;
use optima_core::models::{AdvancedMetricsRecord, AnalysisSource, Evaluation, PromptMetrics, Run};

pub fn sample_run(run_id: &str) -> Run {
    Run {
        run_id: run_id.to_string(),
        session_id: "abcd1234".to_string(),
        user_id: "AI User".to_string(),
        problem_id: "p-1".to_string(),
        problem_text: "Solve for x: 3x + 7 = 22.".to_string(),
        content_domain: "7.ee.b.4".to_string(),
        cognitive_level: "2".to_string(),
        problem_context: "abstract".to_string(),
        prompt_text: "Solve this problem.".to_string(),
        prompt_level: 0,
        prompt_name: "Baseline".to_string(),
        persona: None,
        solver_model_name: "fixed-solver".to_string(),
        response_text: "x = 5".to_string(),
        clarity_score: 70,
        specificity_score: 40,
        structure_score: 40,
        estimated_token_count: Some(4),
        estimated_mattr_score: None,
        estimated_reading_ease: None,
        analysis_rationale: String::new(),
        analysis_source: AnalysisSource::Primary,
        cdi_composite: 0.0,
        sss_weighted: 0.0,
        arq_score: 0.0,
        consistency_score: None,
        latency_ms: 5,
        tokens_in: 10,
        tokens_out: 3,
        created_at: Utc::now(),
    }
}

pub fn sample_metrics(run_id: &str) -> PromptMetrics {
    PromptMetrics {
        metric_id: format!("m-{run_id}"),
        run_id: run_id.to_string(),
        tokenizer: "AdvancedTokenizer".to_string(),
        window_w: 10,
        mattr: 1.0,
        token_count: 4,
        reading_ease: 66.7,
        reading_lix: 36.3,
        computed_at: Utc::now(),
    }
}

pub fn sample_advanced(run_id: &str) -> AdvancedMetricsRecord {
    AdvancedMetricsRecord {
        run_id: run_id.to_string(),
        session_id: "abcd1234".to_string(),
        user_id: "AI User".to_string(),
        prompt_text: "Solve this problem.".to_string(),
        lexicon_version: "2.1".to_string(),
        cdi_rate_cognitive_verbs: 0.33,
        cdi_lexical_density: 0.67,
        cdi_clauses_per_sentence: 1.0,
        cdi_rate_abstract_terms: 0.0,
        cdi_composite: 0.0,
        sss_n_examples: 0,
        sss_n_step_markers: 0,
        sss_n_formula_markers: 0,
        sss_n_hints: 0,
        sss_raw: 0,
        sss_weighted: 0.0,
        arq_abstract_terms: 0,
        arq_numbers: 0,
        arq_ratio: 0.0,
        arq_meta_bonus: 0.0,
        arq_score: 0.0,
        computed_at: Utc::now(),
    }
}

pub fn sample_evaluation(run_id: &str) -> Evaluation {
    Evaluation::new(run_id, "AI Grader", true, "Auto (AI batch). Please review.")
}
