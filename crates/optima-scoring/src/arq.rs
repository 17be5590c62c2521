//! Abstract Reasoning Quotient.
//!
//! Abstraction density (abstract terms per number/formula marker) that only
//! counts when the prompt also frames reasoning: a metacognitive request, or
//! enough logical connectors and modals.

use optima_core::config::ScoringConfig;
use optima_core::models::PatternHits;
use serde::Serialize;

use crate::enrichment::{enrich, ARQ_CATEGORIES};
use crate::lexicon::Lexicon;
use crate::patterns;

/// Gate thresholds and denominator smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArqParams {
    pub meta_min: usize,
    pub logic_modal_min: usize,
    pub smoothing: f64,
}

impl Default for ArqParams {
    fn default() -> Self {
        Self::from(&ScoringConfig::default())
    }
}

impl From<&ScoringConfig> for ArqParams {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            meta_min: config.effective_arq_meta_min(),
            logic_modal_min: config.effective_arq_logic_modal_min(),
            smoothing: config.effective_arq_smoothing(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArqScore {
    pub abstract_terms: usize,
    pub numbers: usize,
    pub formula_marks: usize,
    pub meta_terms: usize,
    pub logic_connectors: usize,
    pub modals: usize,
    pub ratio: f64,
    pub gate_open: bool,
    /// 1.0 when the gate is open, else 0.0.
    pub meta_bonus: f64,
    pub score: f64,
    pub abstract_hits: Vec<String>,
    pub number_hits: Vec<String>,
    pub formula_hits: Vec<String>,
    pub meta_hits: Vec<String>,
    pub logic_hits: Vec<String>,
    pub modal_hits: Vec<String>,
}

pub fn compute_arq(
    text: &str,
    enrichment: Option<&PatternHits>,
    lexicon: &Lexicon,
    params: &ArqParams,
) -> ArqScore {
    let text_lower = text.to_lowercase();
    let enriched = enrich(&text_lower, enrichment, &ARQ_CATEGORIES);

    let abstract_hits = lexicon.abstract_terms.hits(&enriched);
    let meta_hits = lexicon.metacognitive_verbs.hits(&enriched);

    let number_hits: Vec<String> = patterns::numbers(text).into_iter().map(String::from).collect();
    let formula_hits: Vec<String> = patterns::formula_marks(text)
        .into_iter()
        .map(String::from)
        .collect();
    let logic_hits = lexicon.logic_connectors.hits(&text_lower);
    let modal_hits = lexicon.modals.hits(&text_lower);

    let denominator = (number_hits.len() + formula_hits.len()) as f64 + params.smoothing;
    let ratio = abstract_hits.len() as f64 / denominator;
    let gate_open = meta_hits.len() >= params.meta_min
        || logic_hits.len() + modal_hits.len() >= params.logic_modal_min;

    ArqScore {
        abstract_terms: abstract_hits.len(),
        numbers: number_hits.len(),
        formula_marks: formula_hits.len(),
        meta_terms: meta_hits.len(),
        logic_connectors: logic_hits.len(),
        modals: modal_hits.len(),
        ratio,
        gate_open,
        meta_bonus: if gate_open { 1.0 } else { 0.0 },
        score: if gate_open { ratio } else { 0.0 },
        abstract_hits,
        number_hits,
        formula_hits,
        meta_hits,
        logic_hits,
        modal_hits,
    }
}
