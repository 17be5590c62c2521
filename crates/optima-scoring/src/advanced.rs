//! Combined CDI/SSS/ARQ scoring and its flattened record.

use chrono::Utc;
use optima_core::config::ScoringConfig;
use optima_core::models::pattern_hits::categories;
use optima_core::models::{AdvancedMetricsRecord, PatternHits};
use serde::Serialize;

use crate::arq::{compute_arq, ArqParams, ArqScore};
use crate::cdi::{compute_cdi, CdiScore};
use crate::lexicon::{self, Lexicon};
use crate::sss::{compute_sss, SssScore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    pub arq: ArqParams,
    /// When false, analyzer hits are ignored.
    pub enrichment: bool,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self::from(&ScoringConfig::default())
    }
}

impl From<&ScoringConfig> for ScoringParams {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            arq: ArqParams::from(config),
            enrichment: config.effective_enrichment(),
        }
    }
}

/// All three composites for one prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedMetrics {
    pub lexicon_version: &'static str,
    pub cdi: CdiScore,
    pub sss: SssScore,
    pub arq: ArqScore,
}

impl AdvancedMetrics {
    /// Scorer hits keyed by category.
    pub fn hits(&self) -> PatternHits {
        let mut hits = PatternHits::new();
        hits.insert(categories::C_TERMS, self.cdi.cognitive_hits.clone());
        hits.insert(categories::A_TERMS, self.cdi.abstract_hits.clone());
        hits.insert(categories::EXAMPLES, self.sss.example_hits.clone());
        hits.insert(categories::STEP_MARKERS, self.sss.step_hits.clone());
        hits.insert(categories::FORMULA_MARKS, self.sss.formula_hits.clone());
        hits.insert(categories::HINTS, self.sss.hint_hits.clone());
        hits.insert(categories::NUMBERS, self.arq.number_hits.clone());
        hits.insert(categories::META_TERMS, self.arq.meta_hits.clone());
        hits.insert(categories::LOGIC_CONNECTORS, self.arq.logic_hits.clone());
        hits.insert(categories::MODALS, self.arq.modal_hits.clone());
        hits
    }

    pub fn to_record(
        &self,
        run_id: &str,
        session_id: &str,
        user_id: &str,
        prompt_text: &str,
    ) -> AdvancedMetricsRecord {
        AdvancedMetricsRecord {
            run_id: run_id.to_string(),
            session_id: session_id.to_string(),
            user_id: user_id.to_string(),
            prompt_text: prompt_text.to_string(),
            lexicon_version: self.lexicon_version.to_string(),
            cdi_rate_cognitive_verbs: self.cdi.rate_cognitive_verbs,
            cdi_lexical_density: self.cdi.lexical_density,
            cdi_clauses_per_sentence: self.cdi.clauses_per_sentence,
            cdi_rate_abstract_terms: self.cdi.rate_abstract_terms,
            cdi_composite: self.cdi.composite,
            sss_n_examples: self.sss.n_examples,
            sss_n_step_markers: self.sss.n_step_markers,
            sss_n_formula_markers: self.sss.n_formula_markers,
            sss_n_hints: self.sss.n_hints,
            sss_raw: self.sss.raw,
            sss_weighted: self.sss.weighted,
            arq_abstract_terms: self.arq.abstract_terms,
            arq_numbers: self.arq.numbers,
            arq_ratio: self.arq.ratio,
            arq_meta_bonus: self.arq.meta_bonus,
            arq_score: self.arq.score,
            computed_at: Utc::now(),
        }
    }
}

/// Pure scorer over a fixed lexicon and parameter set.
#[derive(Clone, Copy)]
pub struct AdvancedScorer {
    lexicon: &'static Lexicon,
    params: ScoringParams,
}

impl Default for AdvancedScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl AdvancedScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self::with_lexicon(lexicon::current(), ScoringParams::from(config))
    }

    pub fn with_lexicon(lexicon: &'static Lexicon, params: ScoringParams) -> Self {
        Self { lexicon, params }
    }

    pub fn lexicon_version(&self) -> &'static str {
        self.lexicon.version
    }

    /// SSS is structural and never enriched.
    pub fn score(&self, prompt_text: &str, enrichment: Option<&PatternHits>) -> AdvancedMetrics {
        let enrichment = enrichment.filter(|_| self.params.enrichment);
        AdvancedMetrics {
            lexicon_version: self.lexicon.version,
            cdi: compute_cdi(prompt_text, enrichment, self.lexicon),
            sss: compute_sss(prompt_text),
            arq: compute_arq(prompt_text, enrichment, self.lexicon, &self.params.arq),
        }
    }
}

impl std::fmt::Debug for AdvancedScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvancedScorer")
            .field("lexicon_version", &self.lexicon.version)
            .field("params", &self.params)
            .finish()
    }
}
