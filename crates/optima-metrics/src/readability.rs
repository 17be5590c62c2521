//! LIX readability (Björnsson, 1983) and its 0..100 ease mapping.

use std::sync::LazyLock;

use optima_core::config::MetricsConfig;
use regex::Regex;

static SENTENCE_SPLIT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[.!?…]+").ok());
static WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\b\w+\b").ok());

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadabilityParams {
    pub long_word_len: usize,
    /// Raw index mapped to ease 100.
    pub ease_anchor: f64,
    pub ease_slope: f64,
}

impl Default for ReadabilityParams {
    fn default() -> Self {
        Self::from(&MetricsConfig::default())
    }
}

impl From<&MetricsConfig> for ReadabilityParams {
    fn from(config: &MetricsConfig) -> Self {
        Self {
            long_word_len: config.effective_long_word_len(),
            ease_anchor: config.effective_ease_anchor(),
            ease_slope: config.effective_ease_slope(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readability {
    pub sentences: usize,
    pub words: usize,
    pub long_words: usize,
    /// `words/sentences + 100 * long_words/words`.
    pub lix: f64,
    /// `clamp(100 - (lix - anchor) * slope, 0, 100)`.
    pub ease: f64,
}

impl Readability {
    /// Blank text reads as all zeros.
    pub fn measure(text: &str, params: &ReadabilityParams) -> Self {
        if text.trim().is_empty() {
            return Self::default();
        }

        let (Some(sentence_split), Some(word)) = (SENTENCE_SPLIT.as_ref(), WORD.as_ref()) else {
            return Self::default();
        };

        let sentences = sentence_split
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);
        let words: Vec<&str> = word.find_iter(text).map(|m| m.as_str()).collect();
        let long_words = words
            .iter()
            .filter(|w| w.chars().count() >= params.long_word_len)
            .count();
        let n_words = words.len().max(1);

        let lix = lix_index(n_words as f64 / sentences as f64, long_words as f64 / n_words as f64);
        Self {
            sentences,
            words: words.len(),
            long_words,
            lix,
            ease: ease_from_lix(lix, params),
        }
    }
}

/// Raw LIX from words per sentence and long-word share.
pub fn lix_index(words_per_sentence: f64, long_share: f64) -> f64 {
    words_per_sentence + 100.0 * long_share
}

pub fn ease_from_lix(lix: f64, params: &ReadabilityParams) -> f64 {
    (100.0 - (lix - params.ease_anchor) * params.ease_slope).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_zero() {
        assert_eq!(
            Readability::measure("   ", &ReadabilityParams::default()),
            Readability::default()
        );
    }

    #[test]
    fn counts_sentences_words_and_long_words() {
        let r = Readability::measure(
            "Calculate the distance. Then explain!",
            &ReadabilityParams::default(),
        );
        assert_eq!(r.sentences, 2);
        assert_eq!(r.words, 5);
        // "Calculate", "distance", "explain"
        assert_eq!(r.long_words, 3);
        assert!((r.lix - (2.5 + 60.0)).abs() < 1e-9);
        assert_eq!(r.ease, 0.0);
    }

    #[test]
    fn ease_anchors() {
        let p = ReadabilityParams::default();
        assert_eq!(ease_from_lix(20.0, &p), 100.0);
        assert_eq!(ease_from_lix(60.0, &p), 0.0);
        assert_eq!(ease_from_lix(40.0, &p), 50.0);
        assert_eq!(ease_from_lix(5.0, &p), 100.0);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        let r = Readability::measure("two words", &ReadabilityParams::default());
        assert_eq!(r.sentences, 1);
        assert_eq!(r.lix, 2.0);
        assert_eq!(r.ease, 100.0);
    }
}
