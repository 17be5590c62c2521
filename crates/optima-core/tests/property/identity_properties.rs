use optima_core::generate_problem_id;
use proptest::prelude::*;

proptest! {
    #[test]
    fn id_ignores_case_and_whitespace_runs(words in prop::collection::vec("[a-zA-Z0-9.]{1,8}", 1..8)) {
        let spaced = format!("  {}  ", words.join(" \t "));
        let compact = words.join(" ").to_lowercase();
        prop_assert_eq!(generate_problem_id(&spaced), generate_problem_id(&compact));
    }

    #[test]
    fn id_is_a_uuid(s in ".{0,80}") {
        let id = generate_problem_id(&s);
        prop_assert_eq!(id.len(), 36);
        prop_assert!(uuid_like(&id));
    }
}

fn uuid_like(id: &str) -> bool {
    id.chars().all(|c| c == '-' || c.is_ascii_hexdigit())
}
