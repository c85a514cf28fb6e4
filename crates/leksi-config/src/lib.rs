use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::prediction::PredictionConfig;
use self::search::SearchConfig;

pub mod dictionary;
pub mod prediction;
pub mod search;

/// Parse an environment variable, falling back to `default` when unset or invalid.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub prediction: PredictionConfig,
    pub search: SearchConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            prediction: PredictionConfig::new(),
            search: SearchConfig::new(),
        }
    }
}
