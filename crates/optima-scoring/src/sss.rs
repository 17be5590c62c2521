//! Structured Scaffolding Score.
//!
//! Counts explicit procedural support: examples, step markers (section
//! headers included), formula markers and hints. The weighted score
//! log-damps each count so repetition of one cue cannot dominate.

use serde::Serialize;

use crate::patterns::{
    self, RE_EXAMPLE, RE_HINT, RE_SECTION_HEADER, RE_STEP_INLINE, RE_STEP_LINE, RE_STEP_PHRASE,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SssScore {
    pub n_examples: usize,
    pub n_step_markers: usize,
    pub n_formula_markers: usize,
    pub n_hints: usize,
    pub raw: usize,
    /// `Σ ln(1 + count)` over the four categories.
    pub weighted: f64,
    pub example_hits: Vec<String>,
    pub step_hits: Vec<String>,
    pub formula_hits: Vec<String>,
    pub hint_hits: Vec<String>,
}

pub fn compute_sss(text: &str) -> SssScore {
    let owned = |hits: Vec<&str>| -> Vec<String> { hits.into_iter().map(String::from).collect() };

    let example_hits = owned(patterns::find_all(&RE_EXAMPLE, text));
    let mut step_hits = owned(patterns::find_all(&RE_STEP_LINE, text));
    step_hits.extend(owned(patterns::find_all(&RE_STEP_INLINE, text)));
    step_hits.extend(owned(patterns::find_all(&RE_STEP_PHRASE, text)));
    step_hits.extend(owned(patterns::find_all(&RE_SECTION_HEADER, text)));
    let formula_hits = owned(patterns::formula_marks(text));
    let hint_hits = owned(patterns::find_all(&RE_HINT, text));

    let counts = [
        example_hits.len(),
        step_hits.len(),
        formula_hits.len(),
        hint_hits.len(),
    ];

    SssScore {
        n_examples: counts[0],
        n_step_markers: counts[1],
        n_formula_markers: counts[2],
        n_hints: counts[3],
        raw: counts.iter().sum(),
        weighted: counts.iter().map(|&c| (c as f64).ln_1p()).sum(),
        example_hits,
        step_hits,
        formula_hits,
        hint_hits,
    }
}
