//! Deterministic metrics configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for MATTR and LIX.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetricsConfig {
    /// MATTR window length. Default: 10.
    pub window_size: Option<usize>,
    /// Minimum characters for a LIX long word. Default: 7.
    pub long_word_len: Option<usize>,
    /// Raw LIX value mapped to ease 100. Default: 20.0.
    pub ease_anchor: Option<f64>,
    /// Ease lost per raw LIX point. Default: 2.5.
    pub ease_slope: Option<f64>,
}

impl MetricsConfig {
    pub fn effective_window_size(&self) -> usize {
        self.window_size.unwrap_or(constants::DEFAULT_MATTR_WINDOW)
    }

    pub fn effective_long_word_len(&self) -> usize {
        self.long_word_len.unwrap_or(constants::DEFAULT_LONG_WORD_LEN)
    }

    pub fn effective_ease_anchor(&self) -> f64 {
        self.ease_anchor.unwrap_or(constants::DEFAULT_EASE_ANCHOR)
    }

    pub fn effective_ease_slope(&self) -> f64 {
        self.ease_slope.unwrap_or(constants::DEFAULT_EASE_SLOPE)
    }
}
