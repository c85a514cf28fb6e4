use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_max_results() -> usize {
    50
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            max_results: env_or("SEARCH_MAX_RESULTS", default_max_results()),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}
