use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "de".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from("preferences.json")
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Source language loaded when no preference is stored
    #[serde(default = "default_language")]
    pub language: String,
    /// Directory holding `<code>.json` dictionaries and `<code>.grammar.json` feature files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            language: env::var("LEKSI_LANGUAGE").unwrap_or_else(|_| default_language()),
            data_dir: env::var("LEKSI_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_dir()),
            preferences_path: env::var("LEKSI_PREFS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_preferences_path()),
        }
    }

    pub fn dictionary_path(&self, language: &str) -> PathBuf {
        self.data_dir.join(format!("{language}.json"))
    }

    pub fn grammar_path(&self, language: &str) -> PathBuf {
        self.data_dir.join(format!("{language}.grammar.json"))
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            data_dir: default_data_dir(),
            preferences_path: default_preferences_path(),
        }
    }
}
