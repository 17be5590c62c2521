//! Regex pattern families shared by the composite scorers.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! scoring_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Tokens ─────────────────────────────────────────────────────────────────
scoring_pattern!(RE_WORD, r"[A-Za-zÀ-ÖØ-öø-ÿ']+");
scoring_pattern!(RE_NUMBER, r"\b\d+(?:\.\d+)?\b");
scoring_pattern!(RE_SENTENCE_SPLIT, r"[.!?…]+");
scoring_pattern!(
    RE_CLAUSE_BOUNDARY,
    r"(?i),|;|:|\bthat\b|\bwhich\b|\bbecause\b|\bif\b|\bwhen\b|\bwhile\b|\bwhereas\b|\balthough\b|\bsince\b"
);

// ── Scaffolding ────────────────────────────────────────────────────────────
// A bare hyphen is a candidate only; `formula_marks` keeps it when both
// neighbours are word characters.
scoring_pattern!(RE_FORMULA_CANDIDATE, r"(?i)[=^±%×÷+*/≤≥]|\bpi\b|π|-");
scoring_pattern!(RE_EXAMPLE, r"(?i)\bexample\b|\be\.g\.|\bfor example\b");
scoring_pattern!(
    RE_HINT,
    r"(?i)\bhint\b|\bremember\b|\bnote\b|\bdefinition\b|\brecall\b"
);
scoring_pattern!(
    RE_STEP_LINE,
    r"(?mi)^\s*(?:\d+[.)]\s+|-\s+|\*\s+|step\s*\d+)"
);
scoring_pattern!(RE_STEP_INLINE, r"(?i)\b(?:first|second|third|fourth|fifth)\b");
scoring_pattern!(RE_STEP_PHRASE, r"(?i)\bstep[-\s]?by[-\s]?step\b");
scoring_pattern!(
    RE_SECTION_HEADER,
    r"(?mi)^\s*(?:part|section|thread|student|approach)\s*[A-Z\d]+[:.)]"
);

/// Every pattern with its name.
pub fn all_patterns() -> [(&'static str, &'static LazyLock<Option<Regex>>); 11] {
    [
        ("word", &RE_WORD),
        ("number", &RE_NUMBER),
        ("sentence_split", &RE_SENTENCE_SPLIT),
        ("clause_boundary", &RE_CLAUSE_BOUNDARY),
        ("formula_candidate", &RE_FORMULA_CANDIDATE),
        ("example", &RE_EXAMPLE),
        ("hint", &RE_HINT),
        ("step_line", &RE_STEP_LINE),
        ("step_inline", &RE_STEP_INLINE),
        ("step_phrase", &RE_STEP_PHRASE),
        ("section_header", &RE_SECTION_HEADER),
    ]
}

/// All non-overlapping matches of `pattern` in `text`.
pub fn find_all<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Vec<&'t str> {
    match pattern.as_ref() {
        Some(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
        None => Vec::new(),
    }
}

pub fn count(pattern: &LazyLock<Option<Regex>>, text: &str) -> usize {
    pattern.as_ref().map_or(0, |re| re.find_iter(text).count())
}

/// Lower-cased word tokens.
pub fn words_lower(text: &str) -> Vec<String> {
    find_all(&RE_WORD, text)
        .into_iter()
        .map(str::to_lowercase)
        .collect()
}

/// Numeric literals, integer or decimal.
pub fn numbers(text: &str) -> Vec<&str> {
    find_all(&RE_NUMBER, text)
}

/// Non-blank sentences split at `.`, `!`, `?` and ellipsis.
pub fn sentences(text: &str) -> Vec<&str> {
    match RE_SENTENCE_SPLIT.as_ref() {
        Some(re) => re
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Arithmetic operators, hyphens between word characters, `pi` and `π`.
pub fn formula_marks(text: &str) -> Vec<&str> {
    let Some(re) = RE_FORMULA_CANDIDATE.as_ref() else {
        return Vec::new();
    };
    re.find_iter(text)
        .filter(|m| m.as_str() != "-" || hyphen_joins_words(text, m.start(), m.end()))
        .map(|m| m.as_str())
        .collect()
}

fn hyphen_joins_words(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    matches!((before, after), (Some(b), Some(a)) if is_word_char(b) && is_word_char(a))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
