//! Merging analyzer-detected terms into the text a lexicon counts.

use std::borrow::Cow;

use optima_core::models::pattern_hits::categories;
use optima_core::models::PatternHits;

/// Analyzer categories appended for CDI.
pub const CDI_CATEGORIES: [&str; 2] = [
    categories::COGNITIVE_TERMS_AI,
    categories::ABSTRACT_TERMS_AI,
];

/// Analyzer categories appended for ARQ. Cognitive hits are included since
/// analyzers often file reasoning words there.
pub const ARQ_CATEGORIES: [&str; 3] = [
    categories::ABSTRACT_TERMS_AI,
    categories::META_TERMS_AI,
    categories::COGNITIVE_TERMS_AI,
];

/// `text_lower` followed by the selected hits, lower-cased and space separated.
pub fn enrich<'a>(
    text_lower: &'a str,
    hits: Option<&PatternHits>,
    selected: &[&str],
) -> Cow<'a, str> {
    let extra = hits
        .map(|h| h.joined(selected).to_lowercase())
        .unwrap_or_default();
    if extra.trim().is_empty() {
        Cow::Borrowed(text_lower)
    } else {
        Cow::Owned(format!("{text_lower} {extra}"))
    }
}
