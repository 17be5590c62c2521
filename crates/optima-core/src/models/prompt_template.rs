use serde::Serialize;

/// One entry of the prompt taxonomy.
///
/// Templates use `{problem_text}` plus optional placeholders such as
/// `{example_analogy}` or `{method_a}` that the synthesizer fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptTemplate {
    pub key: u16,
    pub level: u8,
    pub level_name: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub ccss_domains: &'static [&'static str],
    pub description: &'static str,
    pub template: &'static str,
    pub example: &'static str,
}
