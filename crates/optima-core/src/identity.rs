//! Stable problem identity.
//!
//! Two problem texts that normalize to the same string always map to the
//! same uuid v5, so repeated problems de-duplicate across runs.

use uuid::Uuid;

use crate::constants::PROBLEM_ID_PREFIX;

/// Strip one layer of wrapping quotes (`"""…"""`, `'''…'''`, `"…"`, `'…'`)
/// and surrounding whitespace.
pub fn clean_problem_text(text: &str) -> &str {
    let trimmed = text.trim();
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if trimmed.len() >= 2 * quote.len()
            && trimmed.starts_with(quote)
            && trimmed.ends_with(quote)
        {
            return trimmed[quote.len()..trimmed.len() - quote.len()].trim();
        }
    }
    trimmed
}

/// Case-fold and collapse whitespace runs to a single space.
pub fn normalize_problem_text(text: &str) -> String {
    clean_problem_text(text)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic name-based id for a problem text.
pub fn generate_problem_id(text: &str) -> String {
    let name = format!("{PROBLEM_ID_PREFIX}{}", normalize_problem_text(text));
    Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_triple_quotes_before_single() {
        assert_eq!(clean_problem_text("\"\"\"abc\"\"\""), "abc");
        assert_eq!(clean_problem_text("'x'"), "x");
        assert_eq!(clean_problem_text("\""), "\"");
    }

    #[test]
    fn whitespace_and_case_do_not_change_id() {
        assert_eq!(
            generate_problem_id("  A train travels 5 km.  "),
            generate_problem_id("a train travels 5 km.")
        );
        assert_eq!(
            generate_problem_id("A\ttrain\n travels"),
            generate_problem_id("a train travels")
        );
    }

    #[test]
    fn different_problems_differ() {
        assert_ne!(generate_problem_id("2 + 2"), generate_problem_id("2 + 3"));
    }
}
