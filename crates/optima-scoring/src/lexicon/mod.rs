//! Versioned, immutable term lexicons.
//!
//! Each table is loaded once. A multi-word entry counts every
//! non-overlapping substring occurrence; a single-word entry counts
//! whole-word matches only.

pub mod v2_1;

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Identifier recorded on every `AdvancedMetricsRecord`.
pub const LEXICON_VERSION: &str = "2.1";

enum Matcher {
    Phrase,
    Word(Regex),
}

struct Term {
    text: &'static str,
    matcher: Matcher,
}

/// A deduplicated term table with its compiled matchers.
pub struct TermSet {
    terms: Vec<Term>,
}

impl TermSet {
    /// Duplicate entries collapse to the first occurrence.
    pub fn new(entries: &[&'static str]) -> Self {
        let mut seen = BTreeSet::new();
        let terms = entries
            .iter()
            .filter(|e| seen.insert(**e))
            .map(|&text| {
                let matcher = if text.contains(' ') {
                    Matcher::Phrase
                } else {
                    Regex::new(&format!(r"\b{}\b", regex::escape(text)))
                        .map(Matcher::Word)
                        .unwrap_or(Matcher::Phrase)
                };
                Term { text, matcher }
            })
            .collect();
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t.text == term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.terms.iter().map(|t| t.text)
    }

    /// Every match in `text_lower`, in table order, one entry per occurrence.
    pub fn hits(&self, text_lower: &str) -> Vec<String> {
        let mut hits = Vec::new();
        for term in &self.terms {
            match &term.matcher {
                Matcher::Phrase => {
                    let k = text_lower.matches(term.text).count();
                    hits.extend(std::iter::repeat(term.text.to_string()).take(k));
                }
                Matcher::Word(re) => {
                    hits.extend(re.find_iter(text_lower).map(|m| m.as_str().to_string()));
                }
            }
        }
        hits
    }
}

/// The full set of tables used by one scoring revision.
pub struct Lexicon {
    pub version: &'static str,
    pub cognitive_verbs: TermSet,
    pub abstract_terms: TermSet,
    pub metacognitive_verbs: TermSet,
    pub logic_connectors: TermSet,
    pub modals: TermSet,
    stopwords: HashSet<&'static str>,
}

impl Lexicon {
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    fn v2_1() -> Self {
        Self {
            version: LEXICON_VERSION,
            cognitive_verbs: TermSet::new(&v2_1::COGNITIVE_VERBS),
            abstract_terms: TermSet::new(&v2_1::ABSTRACT_TERMS),
            metacognitive_verbs: TermSet::new(&v2_1::METACOGNITIVE_VERBS),
            logic_connectors: TermSet::new(&v2_1::LOGIC_CONNECTORS),
            modals: TermSet::new(&v2_1::MODALS),
            stopwords: v2_1::STOPWORDS.iter().copied().collect(),
        }
    }
}

static CURRENT: LazyLock<Lexicon> = LazyLock::new(Lexicon::v2_1);

/// The lexicon revision used by default.
pub fn current() -> &'static Lexicon {
    &CURRENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set = TermSet::new(&["range", "mean", "range"]);
        assert_eq!(set.len(), 2);
        // "range" and "distribution" appear twice in the source tables
        let abstract_terms = &current().abstract_terms;
        assert_eq!(abstract_terms.terms().filter(|t| *t == "range").count(), 1);
        assert_eq!(abstract_terms.terms().filter(|t| *t == "distribution").count(), 1);
    }

    #[test]
    fn single_words_need_word_boundaries() {
        let set = TermSet::new(&["set", "rate"]);
        assert_eq!(set.hits("subset sets set; the rate, ratey"), vec!["set", "rate"]);
    }

    #[test]
    fn phrases_count_substrings() {
        let set = TermSet::new(&["explain why"]);
        assert_eq!(set.hits("explain why, then explain whyever").len(), 2);
    }

    #[test]
    fn hyphenated_words_match_whole() {
        let set = TermSet::new(&["self-check", "x-axis"]);
        assert_eq!(set.hits("self-check the x-axis"), vec!["self-check", "x-axis"]);
    }

    #[test]
    fn stopwords_and_version() {
        let lex = current();
        assert_eq!(lex.version, "2.1");
        assert!(lex.is_stopword("the"));
        assert!(!lex.is_stopword("triangle"));
        assert!(lex.metacognitive_verbs.contains("check your work"));
    }
}
