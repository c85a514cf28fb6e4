use std::path::Path;

use leksi_core::LoadError;
use leksi_core::dictionary::ParsedDictionary;
use leksi_core::features::FeatureDefinitions;

use crate::language::German;

const EMBEDDED_DICTIONARY: &str = include_str!("../data/de.json");
const EMBEDDED_FEATURES: &str = include_str!("../data/de.grammar.json");

pub struct GermanLoader;

impl GermanLoader {
    /// Load the starter vocabulary shipped with the crate
    pub fn load_embedded() -> Result<ParsedDictionary, LoadError> {
        tracing::info!("Loading embedded German dictionary...");
        let dict = ParsedDictionary::from_json(EMBEDDED_DICTIONARY, &German)?;
        tracing::info!("Loaded {} dictionary entries", dict.entries.len());
        Ok(dict)
    }

    pub fn embedded_features() -> Result<FeatureDefinitions, LoadError> {
        FeatureDefinitions::from_json(EMBEDDED_FEATURES)
    }

    /// Dictionary from `path`, falling back to the embedded one when the file is missing
    pub fn load_or_embedded(path: &Path) -> Result<ParsedDictionary, LoadError> {
        match ParsedDictionary::load_from_file(path, &German) {
            Err(LoadError::FileNotFound(missing)) => {
                tracing::warn!("{} not found, using embedded dictionary", missing);
                Self::load_embedded()
            }
            other => other,
        }
    }

    pub fn features_or_embedded(path: &Path) -> Result<FeatureDefinitions, LoadError> {
        match FeatureDefinitions::load_from_file(path) {
            Err(LoadError::FileNotFound(missing)) => {
                tracing::warn!("{} not found, using embedded grammar features", missing);
                Self::embedded_features()
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_parses() {
        let dict = GermanLoader::load_embedded().unwrap();
        assert_eq!(dict.metadata.language_code.as_deref(), Some("de"));
        assert!(dict.entries.iter().any(|e| e.headword == "sein"));

        let features = GermanLoader::embedded_features().unwrap();
        assert!(features.preset("basic").is_some());
        assert!(features.all_ids().any(|id| id == "grammar_dativ"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dict = GermanLoader::load_or_embedded(Path::new("does/not/exist.json")).unwrap();
        assert!(!dict.entries.is_empty());
    }
}
