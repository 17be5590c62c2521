//! Scripted collaborators.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use optima_core::errors::{CollaboratorError, StoreError};
use optima_core::models::{AnalysisMode, Judgement, PromptTemplate, Solution};
use optima_core::traits::{IAnalyzer, IJudger, IPromptSynthesizer, IRecordStore, ISolver, Row};

/// Replays queued responses, then repeats the fallback forever.
pub struct ScriptedAnalyzer {
    queue: Mutex<VecDeque<Result<String, CollaboratorError>>>,
    fallback: Result<String, CollaboratorError>,
    modes: Mutex<Vec<AnalysisMode>>,
    models: Mutex<Vec<String>>,
}

impl ScriptedAnalyzer {
    /// Always answers with `response`.
    pub fn always(response: &str) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: Ok(response.to_string()),
            modes: Mutex::new(Vec::new()),
            models: Mutex::new(Vec::new()),
        }
    }

    /// Always fails.
    pub fn failing() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: Err(CollaboratorError::call_failed("analyzer", "service unavailable")),
            modes: Mutex::new(Vec::new()),
            models: Mutex::new(Vec::new()),
        }
    }

    /// Answer from `queue` first.
    pub fn then(self, queue: Vec<Result<String, CollaboratorError>>) -> Self {
        *self.queue.lock().unwrap() = queue.into();
        self
    }

    /// Modes of every call so far.
    pub fn modes(&self) -> Vec<AnalysisMode> {
        self.modes.lock().unwrap().clone()
    }

    /// Model names of every call so far.
    pub fn models(&self) -> Vec<String> {
        self.models.lock().unwrap().clone()
    }
}

impl IAnalyzer for ScriptedAnalyzer {
    fn analyze(
        &self,
        _prompt_text: &str,
        _problem_text: &str,
        model: &str,
        mode: AnalysisMode,
    ) -> Result<String, CollaboratorError> {
        self.modes.lock().unwrap().push(mode);
        self.models.lock().unwrap().push(model.to_string());
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Returns fixed answers; can fail by prompt marker or by call index.
pub struct FixedSolver {
    answers: Vec<String>,
    fail_marker: Option<String>,
    fail_calls: Vec<usize>,
    calls: AtomicUsize,
    models: Mutex<Vec<String>>,
}

impl FixedSolver {
    pub fn new(answer: &str) -> Self {
        Self::cycling(&[answer])
    }

    /// Cycles through `answers`, one per call.
    pub fn cycling(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            fail_marker: None,
            fail_calls: Vec::new(),
            calls: AtomicUsize::new(0),
            models: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call whose prompt contains `marker`.
    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    /// Fail the `n`th call (0-based).
    pub fn failing_call(mut self, n: usize) -> Self {
        self.fail_calls.push(n);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn models(&self) -> Vec<String> {
        self.models.lock().unwrap().clone()
    }
}

impl ISolver for FixedSolver {
    fn solve(
        &self,
        prompt_text: &str,
        _problem_text: &str,
        model: &str,
    ) -> Result<Solution, CollaboratorError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.models.lock().unwrap().push(model.to_string());
        let marked = self
            .fail_marker
            .as_deref()
            .is_some_and(|marker| prompt_text.contains(marker));
        if marked || self.fail_calls.contains(&n) {
            return Err(CollaboratorError::call_failed("solver", "rate limited"));
        }
        let answer = self
            .answers
            .get(n % self.answers.len().max(1))
            .cloned()
            .unwrap_or_default();
        Ok(Solution {
            solution_text: answer,
            tokens_in: 120,
            tokens_out: 80,
            latency_ms: 5,
        })
    }
}

/// Builds prompts from the entry name, persona and problem.
#[derive(Default)]
pub struct EchoSynthesizer {
    fail: bool,
}

impl EchoSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl IPromptSynthesizer for EchoSynthesizer {
    fn synthesize(
        &self,
        problem_text: &str,
        entry: &PromptTemplate,
        persona: Option<&str>,
        _cognitive_level: &str,
    ) -> Result<String, CollaboratorError> {
        if self.fail {
            return Err(CollaboratorError::call_failed("synthesizer", "timeout"));
        }
        let voice = persona.map(|p| format!(" Speak as {p}.")).unwrap_or_default();
        Ok(format!(
            "[{}] {} Explain your reasoning step by step.{voice}\n\nProblem:\n{problem_text}",
            entry.name, entry.description
        ))
    }
}

/// Fixed verdict.
pub struct FixedJudger {
    pub aggregate: f64,
}

impl IJudger for FixedJudger {
    fn judge(&self, _: &str, _: &str, _: &str) -> Result<Judgement, CollaboratorError> {
        Ok(Judgement {
            narrative: "checked against the reference answer".to_string(),
            component_scores: [("correctness".to_string(), self.aggregate)].into(),
            aggregate_score: self.aggregate,
        })
    }

    fn grader_id(&self) -> &str {
        "fixed-judger"
    }
}

/// Rejects every append.
#[derive(Default)]
pub struct FailingStore {
    attempts: AtomicUsize,
}

impl FailingStore {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl IRecordStore for FailingStore {
    fn append(&self, table: &str, _rows: &[Row]) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::AppendFailed {
            table: table.to_string(),
            message: "quota exceeded".to_string(),
        })
    }
}
