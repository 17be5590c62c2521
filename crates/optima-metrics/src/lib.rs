//! # optima-metrics
//!
//! Deterministic prompt metrics: a multi-script tokenizer, moving-average
//! type-token ratio (MATTR) and LIX readability mapped to a 0..100 ease scale.

pub mod basic_metrics;
pub mod mattr;
pub mod readability;
pub mod tokenizer;

pub use basic_metrics::BasicMetrics;
pub use mattr::mattr;
pub use readability::{Readability, ReadabilityParams};
pub use tokenizer::{AdvancedTokenizer, Token, TokenKind};
