//! Analyzer attempt sequence: primary call, one strict retry, then a
//! heuristic analysis built from deterministic metrics.

use optima_core::errors::{CollaboratorError, ParseError};
use optima_core::models::{
    AnalysisMode, AnalysisSource, EstimatedMetrics, PromptAnalysis, PromptMetrics,
    QualitativeScores, QualityBand,
};
use optima_core::traits::IAnalyzer;

/// Top-level key wrapping the analysis in analyzer responses.
pub const ANALYSIS_SECTION: &str = "prompt_analysis";

pub const FALLBACK_RATIONALE: &str =
    "Heuristic analysis: analyzer response unavailable, bands derived from deterministic metrics.";

/// Outermost `{...}` span of `raw`, tolerating prose or code fences around it.
pub fn extract_json_object(raw: &str) -> Result<&str, ParseError> {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&raw[start..=end]),
        _ => Err(ParseError::NoJsonObject),
    }
}

/// Parse an analyzer response into a `PromptAnalysis`.
pub fn parse_analysis(raw: &str) -> Result<PromptAnalysis, ParseError> {
    let object = extract_json_object(raw)?;
    let mut value: serde_json::Value =
        serde_json::from_str(object).map_err(|e| ParseError::InvalidJson {
            message: e.to_string(),
        })?;
    let section = value
        .get_mut(ANALYSIS_SECTION)
        .map(serde_json::Value::take)
        .ok_or_else(|| ParseError::MissingSection {
            section: ANALYSIS_SECTION.to_string(),
        })?;
    if section.is_null() {
        return Ok(PromptAnalysis::default());
    }
    serde_json::from_value(section).map_err(|e| ParseError::InvalidJson {
        message: e.to_string(),
    })
}

/// Deterministic inputs for the heuristic fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicInputs {
    pub reading_ease: f64,
    pub mattr: f64,
    pub token_count: usize,
    pub sss_weighted: f64,
}

impl HeuristicInputs {
    pub fn new(metrics: &PromptMetrics, sss_weighted: f64) -> Self {
        Self {
            reading_ease: metrics.reading_ease,
            mattr: metrics.mattr,
            token_count: metrics.token_count,
            sss_weighted,
        }
    }
}

/// Prompts shorter than this read as unspecific; longer than the upper
/// bound as highly specific.
const SPECIFICITY_TOKENS: (usize, usize) = (20, 60);

/// SSS weighted score thresholds for medium and high structure.
const STRUCTURE_SSS: (f64, f64) = (1.0, 2.5);

/// Analysis derived without the analyzer.
pub fn heuristic_analysis(inputs: &HeuristicInputs) -> PromptAnalysis {
    let clarity = QualityBand::from_score(inputs.reading_ease);
    let specificity = match inputs.token_count {
        n if n >= SPECIFICITY_TOKENS.1 => QualityBand::High,
        n if n >= SPECIFICITY_TOKENS.0 => QualityBand::Medium,
        _ => QualityBand::Low,
    };
    let structure = if inputs.sss_weighted >= STRUCTURE_SSS.1 {
        QualityBand::High
    } else if inputs.sss_weighted >= STRUCTURE_SSS.0 {
        QualityBand::Medium
    } else {
        QualityBand::Low
    };

    PromptAnalysis {
        qualitative_scores: QualitativeScores::from_bands(clarity, specificity, structure),
        ai_estimated: Some(EstimatedMetrics {
            token_count: Some(inputs.token_count as f64),
            mattr: Some(inputs.mattr * 100.0),
            reading_ease: Some(inputs.reading_ease),
        }),
        overall_evaluation: FALLBACK_RATIONALE.to_string(),
        ..PromptAnalysis::default()
    }
}

/// Analysis plus the attempt that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub analysis: PromptAnalysis,
    pub source: AnalysisSource,
}

/// Drives the attempt sequence against one analyzer.
pub struct AnalyzerAttempts<'a> {
    analyzer: &'a dyn IAnalyzer,
    model: &'a str,
    strict_retry: bool,
}

impl<'a> AnalyzerAttempts<'a> {
    pub fn new(analyzer: &'a dyn IAnalyzer, model: &'a str, strict_retry: bool) -> Self {
        Self {
            analyzer,
            model,
            strict_retry,
        }
    }

    /// Always yields a populated analysis; failures are logged and absorbed.
    pub fn run(
        &self,
        prompt_text: &str,
        problem_text: &str,
        fallback: &HeuristicInputs,
    ) -> AnalysisOutcome {
        match self.attempt(prompt_text, problem_text, AnalysisMode::Standard) {
            Ok(analysis) => {
                return AnalysisOutcome {
                    analysis,
                    source: AnalysisSource::Primary,
                }
            }
            Err(e) => tracing::warn!(error = %e, "analyzer attempt failed"),
        }

        if self.strict_retry {
            match self.attempt(prompt_text, problem_text, AnalysisMode::Strict) {
                Ok(analysis) => {
                    return AnalysisOutcome {
                        analysis,
                        source: AnalysisSource::StrictRetry,
                    }
                }
                Err(e) => tracing::warn!(error = %e, "strict analyzer retry failed"),
            }
        }

        tracing::debug!("using heuristic analysis");
        AnalysisOutcome {
            analysis: heuristic_analysis(fallback),
            source: AnalysisSource::HeuristicFallback,
        }
    }

    fn attempt(
        &self,
        prompt_text: &str,
        problem_text: &str,
        mode: AnalysisMode,
    ) -> Result<PromptAnalysis, AttemptError> {
        let raw = self
            .analyzer
            .analyze(prompt_text, problem_text, self.model, mode)?;
        Ok(parse_analysis(&raw)?)
    }
}

/// Either half of a failed attempt.
#[derive(Debug, thiserror::Error)]
enum AttemptError {
    #[error(transparent)]
    Call(#[from] CollaboratorError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
