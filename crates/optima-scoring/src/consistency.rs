//! Agreement of final numeric answers across repeated solver samples.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Fewer samples than this are not evidence of anything.
pub const MIN_SAMPLES: usize = 3;

static RE_NUMERIC_LITERAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"-?(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?").ok());

/// Canonical form of the last numeric literal in `solution`.
///
/// Thousands separators are dropped and numerically equal literals share one
/// form, so `5`, `5.0` and `5.00` all read as `"5"`. A `-` directly after a
/// word character is a range or hyphen, not a sign.
pub fn extract_final_answer(solution: &str) -> Option<String> {
    let re = RE_NUMERIC_LITERAL.as_ref()?;
    let m = re.find_iter(solution).last()?;
    let joined = solution[..m.start()]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    let literal = match m.as_str().strip_prefix('-') {
        Some(unsigned) if joined => unsigned,
        _ => m.as_str(),
    }
    .replace(',', "");
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(canonical(value)),
        _ => Some(literal),
    }
}

fn canonical(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    /// Extracted answer per sample; `None` where no number was found.
    pub answers: Vec<Option<String>>,
    /// Most frequent extracted answer, if any sample had one.
    pub majority_answer: Option<String>,
    pub agreement: usize,
    pub samples: usize,
    /// 1.0 all agree, 0.5 strict majority, else 0.0.
    pub score: f64,
}

impl ConsistencyReport {
    pub fn analyze<S: AsRef<str>>(solutions: &[S]) -> Self {
        let answers: Vec<Option<String>> = solutions
            .iter()
            .map(|s| extract_final_answer(s.as_ref()))
            .collect();
        let samples = answers.len();

        // Samples without a number get keys that can never collide.
        let keys: Vec<String> = answers
            .iter()
            .enumerate()
            .map(|(i, a)| a.clone().unwrap_or_else(|| format!("__no_answer_{i}__")))
            .collect();

        let mut tally: HashMap<&str, usize> = HashMap::new();
        for key in &keys {
            *tally.entry(key.as_str()).or_insert(0) += 1;
        }
        // Ties go to the earliest sample.
        let (majority_key, agreement) = keys
            .iter()
            .map(|k| (k.as_str(), tally[k.as_str()]))
            .fold(None, |best: Option<(&str, usize)>, (k, c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((k, c)),
            })
            .unwrap_or(("", 0));

        let score = if samples < MIN_SAMPLES {
            0.0
        } else if agreement == samples {
            1.0
        } else if agreement * 2 > samples {
            0.5
        } else {
            0.0
        };

        let majority_answer = answers
            .iter()
            .flatten()
            .find(|a| a.as_str() == majority_key)
            .cloned();

        Self {
            answers,
            majority_answer,
            agreement,
            samples,
            score,
        }
    }
}

/// Agreement score in {0.0, 0.5, 1.0}.
pub fn score<S: AsRef<str>>(solutions: &[S]) -> f64 {
    ConsistencyReport::analyze(solutions).score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agreement_levels() {
        assert_eq!(score(&["x=5", "x=5", "x=5"]), 1.0);
        assert_eq!(score(&["x=5", "x=5", "x=7"]), 0.5);
        assert_eq!(score(&["x=5", "x=7", "x=9"]), 0.0);
        assert_eq!(score(&["x=5"]), 0.0);
        assert_eq!(score::<&str>(&[]), 0.0);
    }

    #[test]
    fn last_number_wins_and_is_canonical() {
        assert_eq!(extract_final_answer("2 + 3 = 5.0").as_deref(), Some("5"));
        assert_eq!(extract_final_answer("Total: 1,250 apples").as_deref(), Some("1250"));
        assert_eq!(extract_final_answer("It is -3.50").as_deref(), Some("-3.5"));
        assert_eq!(extract_final_answer("no idea"), None);
    }

    #[test]
    fn hyphen_after_a_word_is_not_a_sign() {
        assert_eq!(extract_final_answer("It takes 2-3 hours").as_deref(), Some("3"));
        assert_eq!(extract_final_answer("pages 10-12").as_deref(), Some("12"));
        assert_eq!(extract_final_answer("x = -3").as_deref(), Some("-3"));
        assert_eq!(extract_final_answer("(-4)").as_deref(), Some("-4"));
        assert_eq!(score(&["about 2-3 hours", "3 hours", "x = 3"]), 1.0);
    }

    #[test]
    fn missing_answers_never_agree() {
        assert_eq!(score(&["no idea", "none", "unsure"]), 0.0);
        assert_eq!(score(&["no idea", "= 4", "4"]), 0.5);
    }

    #[test]
    fn even_split_is_not_a_majority() {
        assert_eq!(score(&["1", "1", "2", "2"]), 0.0);
        assert_eq!(score(&["1", "1", "1", "2"]), 0.5);
    }

    #[test]
    fn report_names_majority() {
        let report = ConsistencyReport::analyze(&["x = 10", "so 10.0", "maybe 12"]);
        assert_eq!(report.majority_answer.as_deref(), Some("10"));
        assert_eq!(report.agreement, 2);
        assert_eq!(report.answers[2].as_deref(), Some("12"));
    }
}
