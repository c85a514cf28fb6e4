use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_max_results() -> usize {
    5
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_recency_capacity() -> usize {
    20
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PredictionConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Quiet period after a keystroke before suggestions are recomputed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_recency_capacity")]
    pub recency_capacity: usize,
}

impl PredictionConfig {
    pub fn new() -> Self {
        Self {
            max_results: env_or("PREDICT_MAX_RESULTS", default_max_results()),
            debounce_ms: env_or("PREDICT_DEBOUNCE_MS", default_debounce_ms()),
            recency_capacity: env_or("RECENCY_CAPACITY", default_recency_capacity()),
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            debounce_ms: default_debounce_ms(),
            recency_capacity: default_recency_capacity(),
        }
    }
}
