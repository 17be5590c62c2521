use optima_core::traits::Tokenizer;
use optima_metrics::readability::{ease_from_lix, lix_index, ReadabilityParams};
use optima_metrics::{mattr, AdvancedTokenizer, BasicMetrics};
use proptest::prelude::*;

fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn count_equals_tokenize_len(s in ".{0,200}") {
        let t = AdvancedTokenizer::new();
        prop_assert_eq!(t.count(&s), t.tokenize(&s).len());
    }

    #[test]
    fn tokenizer_never_drops_input(s in "[ a-zA-Z0-9àếđ.,+=*/()!?\\-\n@#π]{0,120}") {
        let tokens = AdvancedTokenizer::new().tokenize(&s);
        prop_assert_eq!(strip_ws(&tokens.concat()), strip_ws(&s));
    }

    #[test]
    fn no_token_is_blank(s in ".{0,120}") {
        for token in AdvancedTokenizer::new().tokenize(&s) {
            prop_assert!(!token.trim().is_empty());
        }
    }

    #[test]
    fn short_sequences_are_plain_type_token_ratio(
        words in prop::collection::vec("[a-d]{1,2}", 1..=10)
    ) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut distinct = words.clone();
        distinct.sort();
        distinct.dedup();
        let expected = distinct.len() as f64 / words.len() as f64;
        prop_assert_eq!(mattr(&refs, 10), expected);
    }

    #[test]
    fn mattr_is_a_ratio(words in prop::collection::vec("[a-z]{1,4}", 0..60), w in 1usize..15) {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let value = mattr(&refs, w);
        prop_assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn ease_non_increasing_in_sentence_length(
        wps in 1.0f64..80.0, extra in 0.0f64..40.0, share in 0.0f64..1.0
    ) {
        let p = ReadabilityParams::default();
        let easier = ease_from_lix(lix_index(wps, share), &p);
        let harder = ease_from_lix(lix_index(wps + extra, share), &p);
        prop_assert!(harder <= easier);
    }

    #[test]
    fn ease_non_increasing_in_long_word_share(
        wps in 1.0f64..80.0, share in 0.0f64..1.0, extra in 0.0f64..1.0
    ) {
        let p = ReadabilityParams::default();
        let easier = ease_from_lix(lix_index(wps, share), &p);
        let harder = ease_from_lix(lix_index(wps, share + extra), &p);
        prop_assert!(harder <= easier);
    }

    #[test]
    fn zero_tokens_imply_zero_scores(s in "[ \t\n]{0,10}") {
        let m = BasicMetrics::default().compute(&s, &AdvancedTokenizer::new(), "r", 10);
        prop_assert_eq!(m.token_count, 0);
        prop_assert_eq!(m.mattr, 0.0);
        prop_assert_eq!(m.reading_ease, 0.0);
    }
}
