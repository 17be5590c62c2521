/// Default moving-window length for MATTR.
pub const DEFAULT_MATTR_WINDOW: usize = 10;

/// A word with at least this many characters counts as "long" for LIX.
pub const DEFAULT_LONG_WORD_LEN: usize = 7;

/// Raw LIX value that maps to reading ease 100.
pub const DEFAULT_EASE_ANCHOR: f64 = 20.0;

/// Ease points lost per raw LIX point above the anchor.
pub const DEFAULT_EASE_SLOPE: f64 = 2.5;

/// Run-buffer size that triggers a flush of every buffer kind.
pub const DEFAULT_FLUSH_EVERY: usize = 20;

/// Pause between batch cells, in milliseconds.
pub const DEFAULT_THROTTLE_MS: u64 = 150;

/// Source table holding the problem bank.
pub const DEFAULT_SOURCE_TABLE: &str = "problems";

/// Fixed prompt used for the baseline variant.
pub const BASELINE_PROMPT: &str = "Solve this problem.";

/// Display name of the baseline variant.
pub const BASELINE_NAME: &str = "Baseline";

/// Default model names handed to collaborators.
pub const DEFAULT_ANALYZER_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_SOLVER_MODEL: &str = "gpt-3.5-turbo";

/// Identity of the synthetic batch user.
pub const DEFAULT_BATCH_USER: &str = "AI User";

/// Grader id recorded on placeholder evaluations.
pub const AUTO_GRADER_ID: &str = "AI Grader";

/// Notes attached to placeholder evaluations written by the batch runner.
pub const AUTO_EVALUATION_NOTES: &str = "Auto (AI batch). Please review.";

/// Grader id used when a manual grade has no evaluator name.
pub const MANUAL_GRADER_ID: &str = "Manual";

/// Namespace prefix hashed into problem ids.
pub const PROBLEM_ID_PREFIX: &str = "promptoptima:problem:";

/// Stable table names shared with downstream tooling.
pub mod tables {
    pub const RUNS: &str = "runs";
    pub const METRICS_DETERMINISTIC: &str = "metrics_deterministic";
    pub const METRICS_ADVANCED: &str = "metrics_advanced";
    pub const SUGGESTIONS: &str = "suggestions";
    pub const EVALUATIONS: &str = "evaluations";
    pub const PATTERN_HITS: &str = "pattern_hits";
}
