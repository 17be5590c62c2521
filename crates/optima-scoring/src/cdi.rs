//! Cognitive Demand Index.
//!
//! Geometric mean of the cognitive-verb rate and the abstract-term rate:
//! a prompt scores only when it asks for cognitive action *and* engages
//! abstract content. Rates are counted on the enriched text; lexical
//! density and clause depth are descriptive and use the original text.

use optima_core::models::PatternHits;
use serde::Serialize;

use crate::enrichment::{enrich, CDI_CATEGORIES};
use crate::lexicon::Lexicon;
use crate::patterns::{self, RE_CLAUSE_BOUNDARY};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CdiScore {
    pub rate_cognitive_verbs: f64,
    pub lexical_density: f64,
    pub clauses_per_sentence: f64,
    pub rate_abstract_terms: f64,
    pub composite: f64,
    pub cognitive_hits: Vec<String>,
    pub abstract_hits: Vec<String>,
}

pub fn compute_cdi(text: &str, enrichment: Option<&PatternHits>, lexicon: &Lexicon) -> CdiScore {
    let text_lower = text.to_lowercase();
    let enriched = enrich(&text_lower, enrichment, &CDI_CATEGORIES);

    let n_tokens = patterns::words_lower(&enriched).len().max(1) as f64;
    let cognitive_hits = lexicon.cognitive_verbs.hits(&enriched);
    let abstract_hits = lexicon.abstract_terms.hits(&enriched);

    let rate_cognitive_verbs = cognitive_hits.len() as f64 / n_tokens;
    let rate_abstract_terms = abstract_hits.len() as f64 / n_tokens;
    let composite = if rate_cognitive_verbs > 0.0 && rate_abstract_terms > 0.0 {
        (rate_cognitive_verbs * rate_abstract_terms).sqrt()
    } else {
        0.0
    };

    CdiScore {
        rate_cognitive_verbs,
        lexical_density: lexical_density(&patterns::words_lower(&text_lower), lexicon),
        clauses_per_sentence: clauses_per_sentence(text),
        rate_abstract_terms,
        composite,
        cognitive_hits,
        abstract_hits,
    }
}

/// Share of tokens that are not stopwords.
pub fn lexical_density(tokens: &[String], lexicon: &Lexicon) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let content = tokens.iter().filter(|t| !lexicon.is_stopword(t)).count();
    content as f64 / tokens.len() as f64
}

/// Mean of `1 + clause boundaries` over non-blank sentences.
pub fn clauses_per_sentence(text: &str) -> f64 {
    let sentences = patterns::sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences
        .iter()
        .map(|s| 1 + patterns::count(&RE_CLAUSE_BOUNDARY, s))
        .sum();
    total as f64 / sentences.len() as f64
}
