//! Prompt variants for one problem: baseline plus taxonomy × persona.

use optima_core::constants::{BASELINE_NAME, BASELINE_PROMPT};
use optima_core::models::{ProblemRecord, PromptTemplate};
use optima_core::traits::IPromptSynthesizer;

use crate::taxonomy::render_template;

/// One prompt to run against a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptVariant {
    pub prompt_text: String,
    pub level: u8,
    pub name: String,
    /// Taxonomy key; `None` for the baseline.
    pub key: Option<u16>,
    pub persona: Option<String>,
    /// True when the synthesizer failed and the template was rendered locally.
    pub rendered_locally: bool,
}

impl PromptVariant {
    pub fn baseline() -> Self {
        Self {
            prompt_text: BASELINE_PROMPT.to_string(),
            level: 0,
            name: BASELINE_NAME.to_string(),
            key: None,
            persona: None,
            rendered_locally: false,
        }
    }

    pub fn is_taxonomy(&self) -> bool {
        self.key.is_some()
    }
}

/// Cells produced per problem.
pub fn cells_per_problem(include_baseline: bool, entries: usize, personas: usize) -> usize {
    usize::from(include_baseline) + entries * personas.max(1)
}

/// Expand `problem` into its variants, in baseline, key, persona order.
pub fn build_variants(
    problem: &ProblemRecord,
    entries: &[PromptTemplate],
    personas: &[String],
    include_baseline: bool,
    synthesizer: &dyn IPromptSynthesizer,
) -> Vec<PromptVariant> {
    let persona_slots: Vec<Option<&str>> = if personas.is_empty() {
        vec![None]
    } else {
        personas.iter().map(|p| Some(p.as_str())).collect()
    };

    let mut variants = Vec::with_capacity(cells_per_problem(
        include_baseline,
        entries.len(),
        personas.len(),
    ));
    if include_baseline {
        variants.push(PromptVariant::baseline());
    }

    for entry in entries {
        for persona in &persona_slots {
            let synthesized = synthesizer.synthesize(
                &problem.problem_text,
                entry,
                *persona,
                &problem.cognitive_level,
            );
            let (prompt_text, rendered_locally) = match synthesized {
                Ok(text) if !text.trim().is_empty() => (text, false),
                Ok(_) => {
                    tracing::warn!(key = entry.key, "synthesizer returned an empty prompt; rendering template");
                    (render_template(entry, &problem.problem_text), true)
                }
                Err(e) => {
                    tracing::warn!(key = entry.key, error = %e, "synthesizer failed; rendering template");
                    (render_template(entry, &problem.problem_text), true)
                }
            };
            variants.push(PromptVariant {
                prompt_text,
                level: entry.level,
                name: entry.name.to_string(),
                key: Some(entry.key),
                persona: persona.map(str::to_string),
                rendered_locally,
            });
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy;
    use optima_core::errors::CollaboratorError;

    struct Echo;

    impl IPromptSynthesizer for Echo {
        fn synthesize(
            &self,
            problem_text: &str,
            entry: &PromptTemplate,
            persona: Option<&str>,
            _cognitive_level: &str,
        ) -> Result<String, CollaboratorError> {
            Ok(format!("{} for {} as {}", entry.name, problem_text, persona.unwrap_or("-")))
        }
    }

    struct Down;

    impl IPromptSynthesizer for Down {
        fn synthesize(
            &self,
            _: &str,
            _: &PromptTemplate,
            _: Option<&str>,
            _: &str,
        ) -> Result<String, CollaboratorError> {
            Err(CollaboratorError::call_failed("synthesizer", "offline"))
        }
    }

    fn problem() -> ProblemRecord {
        ProblemRecord::new("What is 3 x 4?", "7.ns.a.2", "1", "abstract")
    }

    #[test]
    fn baseline_then_entries_then_personas() {
        let personas = vec!["coach".to_string(), "peer".to_string()];
        let variants = build_variants(&problem(), &taxonomy::entries()[..2], &personas, true, &Echo);
        assert_eq!(variants.len(), cells_per_problem(true, 2, 2));
        assert_eq!(variants[0], PromptVariant::baseline());
        assert_eq!(variants[1].key, Some(101));
        assert_eq!(variants[1].persona.as_deref(), Some("coach"));
        assert_eq!(variants[2].persona.as_deref(), Some("peer"));
        assert_eq!(variants[3].key, Some(102));
        assert!(variants[4].prompt_text.ends_with("as peer"));
    }

    #[test]
    fn no_personas_means_one_variant_per_entry() {
        let variants = build_variants(&problem(), taxonomy::entries(), &[], false, &Echo);
        assert_eq!(variants.len(), 15);
        assert!(variants.iter().all(|v| v.persona.is_none() && v.is_taxonomy()));
    }

    #[test]
    fn synthesizer_failure_renders_template() {
        let variants = build_variants(&problem(), &taxonomy::entries()[..1], &[], false, &Down);
        assert!(variants[0].rendered_locally);
        assert!(variants[0].prompt_text.contains("What is 3 x 4?"));
        assert_eq!(variants[0].level, 1);
    }
}
