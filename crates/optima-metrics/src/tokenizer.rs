//! Ordered-pattern tokenizer for math prompts in Latin and Vietnamese script.

use std::sync::LazyLock;

use optima_core::traits::Tokenizer;
use regex::Regex;

/// Category of a token, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `2 + 3`, `4.5=9`
    MathExpression,
    Number,
    /// Word containing at least one Vietnamese diacritic letter.
    DiacriticWord,
    LatinWord,
    Punctuation,
    MathSymbol,
    /// A character no family claimed, emitted as-is.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

const VIETNAMESE_LETTERS: &str =
    "àáảãạăắằẳẵặâấầẩẫậèéẻẽẹêếềểễệìíỉĩịòóỏõọôốồổỗộơớờởỡợùúủũụưứừửữựỳýỷỹỵđ";

static WHITESPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\s+").ok());

/// Families tried at each position, highest priority first.
static FAMILIES: LazyLock<Vec<(TokenKind, Regex)>> = LazyLock::new(|| {
    let diacritic_word = format!("(?i)^[a-z{v}]*[{v}][a-z{v}]*", v = VIETNAMESE_LETTERS);
    [
        (
            TokenKind::MathExpression,
            r"^\d+\.?\d*\s*[+\-*/=<>≤≥≠]\s*\d+\.?\d*",
        ),
        (TokenKind::Number, r"^\d+\.?\d*"),
        (TokenKind::DiacriticWord, diacritic_word.as_str()),
        (TokenKind::LatinWord, r"^[a-zA-Z]+(?:'[a-zA-Z]+)?"),
        (TokenKind::Punctuation, r#"^[.!?…,;:()\[\]{}"'\-]"#),
        (TokenKind::MathSymbol, r"^[+\-*/=<>≤≥≠∑∏∫√∞π∆∇]"),
    ]
    .into_iter()
    .filter_map(|(kind, pattern)| Regex::new(pattern).ok().map(|re| (kind, re)))
    .collect()
});

/// Left-to-right scanner over the ordered pattern families.
///
/// Whitespace is skipped. A position no family matches yields its single
/// character as a `TokenKind::Other` token, so no input is ever dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedTokenizer;

impl AdvancedTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize_typed<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];
            if let Some(ws) = WHITESPACE.as_ref().and_then(|re| re.find(rest)) {
                i += ws.end();
                continue;
            }

            let matched = FAMILIES.iter().find_map(|(kind, re)| {
                re.find(rest)
                    .filter(|m| !m.is_empty())
                    .map(|m| (*kind, m.end()))
            });

            let (kind, len) = match matched {
                Some(hit) => hit,
                None => {
                    let ch_len = rest.chars().next().map_or(1, char::len_utf8);
                    (TokenKind::Other, ch_len)
                }
            };
            tokens.push(Token {
                text: &rest[..len],
                kind,
            });
            i += len;
        }

        tokens
    }
}

impl Tokenizer for AdvancedTokenizer {
    fn name(&self) -> &str {
        "AdvancedTokenizer"
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenize_typed(text).into_iter().map(|t| t.text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(&str, TokenKind)> {
        AdvancedTokenizer
            .tokenize_typed(text)
            .into_iter()
            .map(|t| (t.text, t.kind))
            .collect()
    }

    #[test]
    fn every_family_compiles() {
        assert_eq!(FAMILIES.len(), 6);
        assert!(WHITESPACE.is_some());
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(AdvancedTokenizer.tokenize("").is_empty());
        assert!(AdvancedTokenizer.tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn math_expression_beats_bare_number() {
        assert_eq!(
            kinds("2x + 5 = 11"),
            vec![
                ("2", TokenKind::Number),
                ("x", TokenKind::LatinWord),
                ("+", TokenKind::MathSymbol),
                ("5 = 11", TokenKind::MathExpression),
            ]
        );
        assert_eq!(kinds("3.5*2")[0], ("3.5*2", TokenKind::MathExpression));
    }

    #[test]
    fn diacritic_words_stay_whole() {
        let tokens = AdvancedTokenizer.tokenize("Giải phương trình");
        assert_eq!(tokens, vec!["Giải", "phương", "trình"]);
        assert_eq!(kinds("Tìm")[0].1, TokenKind::DiacriticWord);
        assert_eq!(kinds("ĐÚNG")[0], ("ĐÚNG", TokenKind::DiacriticWord));
    }

    #[test]
    fn contractions_are_one_word() {
        assert_eq!(AdvancedTokenizer.tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn punctuation_and_symbols() {
        assert_eq!(
            kinds("(x)! ∑ √"),
            vec![
                ("(", TokenKind::Punctuation),
                ("x", TokenKind::LatinWord),
                (")", TokenKind::Punctuation),
                ("!", TokenKind::Punctuation),
                ("∑", TokenKind::MathSymbol),
                ("√", TokenKind::MathSymbol),
            ]
        );
    }

    #[test]
    fn unknown_characters_are_emitted_verbatim() {
        assert_eq!(
            kinds("@#"),
            vec![("@", TokenKind::Other), ("#", TokenKind::Other)]
        );
        assert_eq!(AdvancedTokenizer.tokenize("日本"), vec!["日", "本"]);
    }

    #[test]
    fn count_matches_tokenize() {
        let text = "Step 1: compute 12/4 = 3, then explain why.";
        assert_eq!(
            AdvancedTokenizer.count(text),
            AdvancedTokenizer.tokenize(text).len()
        );
    }
}
