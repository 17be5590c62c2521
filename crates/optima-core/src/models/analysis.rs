//! Structured analyzer output.
//!
//! Every field carries a serde default so partially populated responses
//! still deserialize; missing bands read as `QualityBand::Low`. Fields that
//! arrive as `null` or with the wrong type are read leniently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::lenient;
use super::PatternHits;

/// Qualitative band reported by the analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum QualityBand {
    #[default]
    Low,
    Medium,
    High,
}

impl QualityBand {
    /// Numeric score stored on the run.
    pub fn score(self) -> u8 {
        match self {
            Self::Low => 40,
            Self::Medium => 70,
            Self::High => 90,
        }
    }

    /// Band for a 0..=100 score, using the midpoints between band scores.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 55.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl From<String> for QualityBand {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "medium" | "med" | "moderate" => Self::Medium,
            _ => Self::Low,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualitativeScores {
    #[serde(deserialize_with = "lenient::band")]
    pub clarity_band: Option<QualityBand>,
    #[serde(deserialize_with = "lenient::band")]
    pub specificity_band: Option<QualityBand>,
    #[serde(deserialize_with = "lenient::band")]
    pub structure_band: Option<QualityBand>,
    /// Older responses carry numeric scores instead of bands.
    #[serde(deserialize_with = "lenient::number")]
    pub clarity_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub specificity_score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub structure_score: Option<f64>,
}

impl QualitativeScores {
    pub fn from_bands(clarity: QualityBand, specificity: QualityBand, structure: QualityBand) -> Self {
        Self {
            clarity_band: Some(clarity),
            specificity_band: Some(specificity),
            structure_band: Some(structure),
            ..Self::default()
        }
    }

    pub fn clarity(&self) -> u8 {
        resolve(self.clarity_band, self.clarity_score)
    }

    pub fn specificity(&self) -> u8 {
        resolve(self.specificity_band, self.specificity_score)
    }

    pub fn structure(&self) -> u8 {
        resolve(self.structure_band, self.structure_score)
    }
}

fn resolve(band: Option<QualityBand>, score: Option<f64>) -> u8 {
    match (band, score) {
        (Some(band), _) => band.score(),
        (None, Some(score)) if score.is_finite() => score.clamp(0.0, 100.0).round() as u8,
        _ => QualityBand::Low.score(),
    }
}

/// Analyzer estimates of the deterministic metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatedMetrics {
    #[serde(alias = "estimated_token_count", deserialize_with = "lenient::number")]
    pub token_count: Option<f64>,
    #[serde(
        alias = "mattr_like",
        alias = "estimated_mattr_score",
        deserialize_with = "lenient::number"
    )]
    pub mattr: Option<f64>,
    #[serde(
        alias = "reading_ease_like",
        alias = "estimated_reading_ease",
        deserialize_with = "lenient::number"
    )]
    pub reading_ease: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptAnalysis {
    #[serde(deserialize_with = "lenient::or_default")]
    pub qualitative_scores: QualitativeScores,
    /// Non-numeric signals are dropped.
    #[serde(deserialize_with = "lenient::numeric_map")]
    pub signals: BTreeMap<String, f64>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub ai_estimated: Option<EstimatedMetrics>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub estimated_metrics: Option<EstimatedMetrics>,
    #[serde(alias = "hits")]
    pub pattern_hits: PatternHits,
    #[serde(deserialize_with = "lenient::text")]
    pub overall_evaluation: String,
}

impl PromptAnalysis {
    /// Current estimates, falling back to the older `estimated_metrics` key.
    pub fn estimates(&self) -> EstimatedMetrics {
        self.ai_estimated
            .clone()
            .or_else(|| self.estimated_metrics.clone())
            .unwrap_or_default()
    }

    /// Token estimate: the `tokens` signal wins over the estimate block.
    pub fn estimated_token_count(&self) -> Option<u32> {
        self.signals
            .get("tokens")
            .copied()
            .or(self.estimates().token_count)
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.round() as u32)
    }

    /// MATTR estimate on a 0..=100 scale.
    pub fn estimated_mattr(&self) -> Option<f64> {
        self.estimates().mattr.map(to_percent_scale)
    }

    /// Reading ease estimate on a 0..=100 scale.
    pub fn estimated_reading_ease(&self) -> Option<f64> {
        self.estimates().reading_ease.map(to_percent_scale)
    }
}

/// Values at or below 1 are read as fractions.
fn to_percent_scale(value: f64) -> f64 {
    if value <= 1.0 {
        value * 100.0
    } else {
        value
    }
}

/// Which analyzer attempt produced a `PromptAnalysis`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    #[default]
    Primary,
    StrictRetry,
    HeuristicFallback,
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::StrictRetry => "strict_retry",
            Self::HeuristicFallback => "heuristic_fallback",
        };
        f.write_str(name)
    }
}
