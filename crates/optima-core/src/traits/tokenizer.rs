/// Splits text into lexical units.
///
/// Implementations are total: every non-whitespace character of the input
/// ends up in some token.
pub trait Tokenizer: Send + Sync {
    /// Name recorded on `PromptMetrics`.
    fn name(&self) -> &str;

    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn count(&self, text: &str) -> usize {
        self.tokenize(text).len()
    }
}
