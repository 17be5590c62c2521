//! Problem selection from the source table.

use std::collections::{BTreeMap, BTreeSet};

use optima_core::config::BatchConfig;
use optima_core::errors::InputError;
use optima_core::identity::clean_problem_text;
use optima_core::models::ProblemRecord;
use optima_core::traits::SourceRow;

pub const COL_CCSS: &str = "ccss";
pub const COL_LEVEL: &str = "level";
pub const COL_CONTEXT: &str = "abstract / real-world";
pub const COL_PROBLEM: &str = "problem";

pub const REQUIRED_COLUMNS: [&str; 4] = [COL_CCSS, COL_LEVEL, COL_CONTEXT, COL_PROBLEM];

/// Canonical CCSS code: text before any "(", trimmed and lower-cased.
pub fn canonical_ccss(value: &str) -> String {
    value.split('(').next().unwrap_or("").trim().to_lowercase()
}

/// First decimal digit in the value ("Level 3" → 3), 0 when there is none.
pub fn parse_level(value: &str) -> u8 {
    value
        .chars()
        .find_map(|c| c.to_digit(10))
        .map_or(0, |d| d as u8)
}

pub fn normalize_context(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Row filters. An empty set matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionFilter {
    pub content_domains: BTreeSet<String>,
    pub cognitive_levels: BTreeSet<u8>,
    pub contexts: BTreeSet<String>,
}

impl From<&BatchConfig> for SelectionFilter {
    fn from(config: &BatchConfig) -> Self {
        Self {
            content_domains: config.content_domains.iter().map(|d| canonical_ccss(d)).collect(),
            cognitive_levels: config.cognitive_levels.iter().copied().collect(),
            contexts: config.contexts.iter().map(|c| normalize_context(c)).collect(),
        }
    }
}

impl SelectionFilter {
    pub fn matches(&self, ccss: &str, level: &str, context: &str) -> bool {
        (self.content_domains.is_empty() || self.content_domains.contains(&canonical_ccss(ccss)))
            && (self.cognitive_levels.is_empty()
                || self.cognitive_levels.contains(&parse_level(level)))
            && (self.contexts.is_empty() || self.contexts.contains(&normalize_context(context)))
    }
}

/// Outcome of selection.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub problems: Vec<ProblemRecord>,
    /// Matching rows dropped because their problem text was blank.
    pub rejected: Vec<InputError>,
}

/// Map normalized header → header as it appears in the rows.
fn header_index(rows: &[SourceRow]) -> BTreeMap<String, String> {
    rows.iter()
        .flat_map(|row| row.keys())
        .map(|header| (header.trim().to_lowercase(), header.clone()))
        .collect()
}

/// Filter `rows` into problem records.
///
/// Headers match case-insensitively after trimming. An empty table or a
/// missing required column is an error; a blank problem only drops its row.
pub fn select(
    table: &str,
    rows: &[SourceRow],
    filter: &SelectionFilter,
) -> Result<Selection, InputError> {
    if rows.is_empty() {
        return Err(InputError::EmptySource {
            table: table.to_string(),
        });
    }

    let headers = header_index(rows);
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.contains_key(**c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(InputError::MissingColumns {
            table: table.to_string(),
            missing,
        });
    }

    let cell = |row: &SourceRow, column: &str| -> String {
        headers
            .get(column)
            .and_then(|header| row.get(header))
            .cloned()
            .unwrap_or_default()
    };

    let mut selection = Selection::default();
    for row in rows {
        let ccss = cell(row, COL_CCSS);
        let level = cell(row, COL_LEVEL);
        let context = cell(row, COL_CONTEXT);
        if !filter.matches(&ccss, &level, &context) {
            continue;
        }

        let problem = cell(row, COL_PROBLEM);
        if clean_problem_text(&problem).is_empty() {
            selection.rejected.push(InputError::BlankProblem);
            continue;
        }
        selection.problems.push(ProblemRecord::new(
            &problem,
            &canonical_ccss(&ccss),
            &parse_level(&level).to_string(),
            &normalize_context(&context),
        ));
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ccss: &str, level: &str, context: &str, problem: &str) -> SourceRow {
        [
            ("CCSS ", ccss),
            ("Level", level),
            ("Abstract / Real-World", context),
            ("Problem", problem),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn canonicalization() {
        assert_eq!(canonical_ccss(" 7.RP.A.3 (ratios) "), "7.rp.a.3");
        assert_eq!(parse_level("Level 3"), 3);
        assert_eq!(parse_level("none"), 0);
        assert_eq!(normalize_context(" Real-World "), "real-world");
    }

    #[test]
    fn empty_filters_match_everything() {
        let rows = vec![
            row("7.RP.A.1", "Level 1", "Abstract", "1 + 1?"),
            row("7.EE.B.4", "Level 4", "Real-world", "A car travels 60 km."),
        ];
        let selection = select("problems", &rows, &SelectionFilter::default()).unwrap();
        assert_eq!(selection.problems.len(), 2);
        assert_eq!(selection.problems[1].content_domain, "7.ee.b.4");
        assert_eq!(selection.problems[1].cognitive_level, "4");
        assert_eq!(selection.problems[1].problem_context, "real-world");
    }

    #[test]
    fn filters_combine() {
        let rows = vec![
            row("7.RP.A.1 (ratios)", "Level 1", "Abstract", "a"),
            row("7.RP.A.1", "Level 2", "Abstract", "b"),
            row("7.RP.A.1", "1", "real-world", "c"),
        ];
        let filter = SelectionFilter {
            content_domains: ["7.rp.a.1".to_string()].into(),
            cognitive_levels: [1].into(),
            contexts: ["abstract".to_string()].into(),
        };
        let selection = select("problems", &rows, &filter).unwrap();
        assert_eq!(selection.problems.len(), 1);
        assert_eq!(selection.problems[0].problem_text, "a");
    }

    #[test]
    fn blank_problem_is_rejected_not_fatal() {
        let rows = vec![row("7.G.A.1", "1", "abstract", "  \"\"  "), row("7.G.A.1", "1", "abstract", "ok")];
        let selection = select("problems", &rows, &SelectionFilter::default()).unwrap();
        assert_eq!(selection.problems.len(), 1);
        assert_eq!(selection.rejected, vec![InputError::BlankProblem]);
    }

    #[test]
    fn missing_columns_and_empty_table() {
        let mut partial = SourceRow::new();
        partial.insert("Problem".into(), "x".into());
        match select("problems", &[partial], &SelectionFilter::default()) {
            Err(InputError::MissingColumns { missing, .. }) => {
                assert_eq!(missing, vec!["ccss", "level", "abstract / real-world"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            select("problems", &[], &SelectionFilter::default()),
            Err(InputError::EmptySource { .. })
        ));
    }
}
