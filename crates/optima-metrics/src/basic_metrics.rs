//! `PromptMetrics` assembly.

use chrono::Utc;
use optima_core::config::MetricsConfig;
use optima_core::models::PromptMetrics;
use optima_core::traits::Tokenizer;
use uuid::Uuid;

use crate::mattr::mattr;
use crate::readability::{Readability, ReadabilityParams};

/// Token count, MATTR and LIX/ease for one prompt.
#[derive(Debug, Clone, Default)]
pub struct BasicMetrics {
    params: ReadabilityParams,
}

impl BasicMetrics {
    pub fn new(config: &MetricsConfig) -> Self {
        Self {
            params: ReadabilityParams::from(config),
        }
    }

    pub fn readability(&self, text: &str) -> Readability {
        Readability::measure(text, &self.params)
    }

    /// Blank prompts produce an all-zero record, never an error.
    pub fn compute(
        &self,
        prompt_text: &str,
        tokenizer: &dyn Tokenizer,
        run_id: &str,
        window_size: usize,
    ) -> PromptMetrics {
        let (mattr_value, token_count, readability) = if prompt_text.trim().is_empty() {
            (0.0, 0, Readability::default())
        } else {
            let tokens = tokenizer.tokenize(prompt_text);
            (
                mattr(&tokens, window_size),
                tokens.len(),
                self.readability(prompt_text),
            )
        };

        PromptMetrics {
            metric_id: Uuid::new_v4().to_string(),
            run_id: run_id.to_string(),
            tokenizer: tokenizer.name().to_string(),
            window_w: window_size,
            mattr: mattr_value,
            token_count,
            reading_ease: readability.ease,
            reading_lix: readability.lix,
            computed_at: Utc::now(),
        }
    }
}
