use optima_scoring::consistency::{self, extract_final_answer};
use optima_core::models::pattern_hits::categories;
use optima_core::models::PatternHits;
use optima_scoring::AdvancedScorer;
use proptest::prelude::*;

fn analyzer_hits(cognitive: &[String], abstract_terms: &[String], meta: &[String]) -> PatternHits {
    let mut hits = PatternHits::new();
    hits.insert(categories::COGNITIVE_TERMS_AI, cognitive.to_vec());
    hits.insert(categories::ABSTRACT_TERMS_AI, abstract_terms.to_vec());
    hits.insert(categories::META_TERMS_AI, meta.to_vec());
    hits
}

proptest! {
    #[test]
    fn scoring_is_deterministic(s in ".{0,240}") {
        let scorer = AdvancedScorer::default();
        let a = scorer.score(&s, None);
        let b = scorer.score(&s, None);
        prop_assert_eq!(a.cdi, b.cdi);
        prop_assert_eq!(a.sss, b.sss);
        prop_assert_eq!(a.arq, b.arq);
    }

    #[test]
    fn enriched_scoring_is_deterministic(
        s in ".{0,160}",
        cognitive in prop::collection::vec("(explain|analyze|compare|[a-z]{2,8})", 1..4),
        abstract_terms in prop::collection::vec("(ratio|proportion|variable|[a-z]{2,8})", 1..4),
        meta in prop::collection::vec("(justify|verify|[a-z]{2,8})", 0..3),
    ) {
        let scorer = AdvancedScorer::default();
        let hits = analyzer_hits(&cognitive, &abstract_terms, &meta);
        let a = scorer.score(&s, Some(&hits));
        let b = scorer.score(&s, Some(&hits.clone()));
        prop_assert_eq!(&a.cdi, &b.cdi);
        prop_assert_eq!(&a.sss, &b.sss);
        prop_assert_eq!(&a.arq, &b.arq);
        prop_assert_eq!(a.sss, scorer.score(&s, None).sss);
    }

    #[test]
    fn composites_are_non_negative(s in "[ a-zA-Z0-9.,:;=+\\-\n]{0,240}") {
        let m = AdvancedScorer::default().score(&s, None);
        prop_assert!(m.cdi.composite >= 0.0);
        prop_assert!(m.sss.weighted >= 0.0);
        prop_assert!(m.arq.score >= 0.0);
        prop_assert!(m.cdi.lexical_density <= 1.0);
    }

    #[test]
    fn closed_gate_means_zero_arq(s in "[ a-z0-9.,]{0,200}") {
        let arq = AdvancedScorer::default().score(&s, None).arq;
        if !arq.gate_open {
            prop_assert_eq!(arq.score, 0.0);
            prop_assert_eq!(arq.meta_bonus, 0.0);
        } else {
            prop_assert_eq!(arq.score, arq.ratio);
        }
    }

    #[test]
    fn sss_raw_is_sum_of_counts(s in "[ a-zA-Z0-9.:=+\\-\n]{0,200}") {
        let sss = AdvancedScorer::default().score(&s, None).sss;
        prop_assert_eq!(
            sss.raw,
            sss.n_examples + sss.n_step_markers + sss.n_formula_markers + sss.n_hints
        );
    }

    #[test]
    fn consistency_score_is_one_of_three(answers in prop::collection::vec("[a-z ]{0,5}[0-9]{0,2}", 0..8)) {
        let score = consistency::score(&answers);
        prop_assert!(score == 0.0 || score == 0.5 || score == 1.0);
        if answers.len() < 3 {
            prop_assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn identical_numeric_answers_fully_agree(n in 0u32..100_000, k in 3usize..7) {
        let answers: Vec<String> = (0..k).map(|i| format!("attempt {i}: x = {n}")).collect();
        prop_assert_eq!(consistency::score(&answers), 1.0);
    }

    #[test]
    fn extracted_answer_is_numeric(s in ".{0,80}") {
        if let Some(answer) = extract_final_answer(&s) {
            prop_assert!(answer.parse::<f64>().is_ok());
        }
    }
}
