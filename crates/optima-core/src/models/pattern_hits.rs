//! Category → matched-substring mapping.
//!
//! Order is kept and duplicates are kept: a term matched twice appears twice.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Categories the external analyzer may report.
pub mod categories {
    pub const COGNITIVE_TERMS_AI: &str = "cognitive_terms_ai";
    pub const ABSTRACT_TERMS_AI: &str = "abstract_terms_ai";
    pub const META_TERMS_AI: &str = "meta_terms_ai";

    pub const C_TERMS: &str = "c_terms";
    pub const A_TERMS: &str = "a_terms";
    pub const EXAMPLES: &str = "examples";
    pub const STEP_MARKERS: &str = "step_markers";
    pub const FORMULA_MARKS: &str = "formula_marks";
    pub const HINTS: &str = "hints";
    pub const NUMBERS: &str = "numbers";
    pub const META_TERMS: &str = "meta_terms";
    pub const LOGIC_CONNECTORS: &str = "logic_connectors";
    pub const MODALS: &str = "modals";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternHits(BTreeMap<String, Vec<String>>);

/// Reads analyzer output leniently: `null` or a non-object is empty, a bare
/// string is a one-hit list, numbers are rendered and other items dropped.
impl<'de> Deserialize<'de> for PatternHits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Value::Object(map) = Value::deserialize(deserializer)? else {
            return Ok(Self::default());
        };
        Ok(map
            .into_iter()
            .map(|(category, hits)| (category, hit_list(hits)))
            .collect())
    }
}

fn hit_list(value: Value) -> Vec<String> {
    let hit = |item: Value| match item {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    };
    match value {
        Value::Array(items) => items.into_iter().filter_map(hit).collect(),
        other => hit(other).into_iter().collect(),
    }
}

impl PatternHits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hits for `category`.
    pub fn insert(&mut self, category: &str, hits: Vec<String>) {
        self.0.insert(category.to_string(), hits);
    }

    /// Builder form of `insert`.
    pub fn with(mut self, category: &str, hits: &[&str]) -> Self {
        self.insert(category, hits.iter().map(|h| h.to_string()).collect());
        self
    }

    /// Hits for `category`, empty when absent.
    pub fn get(&self, category: &str) -> &[String] {
        self.0.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, category: &str) -> usize {
        self.get(category).len()
    }

    /// Hits from several categories joined by spaces, for enrichment.
    pub fn joined(&self, categories: &[&str]) -> String {
        categories
            .iter()
            .flat_map(|c| self.get(c).iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}

impl FromIterator<(String, Vec<String>)> for PatternHits {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
