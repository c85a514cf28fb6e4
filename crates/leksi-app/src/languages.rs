use std::sync::Arc;

use anyhow::anyhow;
use leksi_config::Config;
use leksi_core::dictionary::ParsedDictionary;
use leksi_core::features::FeatureDefinitions;
use leksi_core::prefs::PreferenceStore;
use leksi_core::{Language, LexiconSession, LoadError};
use leksi_lang_french::French;
use leksi_lang_german::{German, GermanLoader};
use leksi_lang_spanish::Spanish;

pub const SUPPORTED: &[&str] = &["de", "es", "fr"];

pub fn language_for(code: &str) -> Option<Arc<dyn Language>> {
    match code {
        "de" => Some(Arc::new(German)),
        "es" => Some(Arc::new(Spanish)),
        "fr" => Some(Arc::new(French)),
        _ => None,
    }
}

/// Build a ready session for `code`: grammar features, stored preferences,
/// then the dictionary.
///
/// A missing dictionary file leaves the session empty (German falls back to
/// its embedded vocabulary); malformed JSON is an error.
pub async fn open_session(
    code: &str,
    config: &Config,
    prefs: &dyn PreferenceStore,
) -> anyhow::Result<LexiconSession> {
    let language = language_for(code).ok_or_else(|| anyhow!("unsupported language: {code}"))?;
    let mut session = LexiconSession::new(language, config);

    let grammar_path = config.dictionary.grammar_path(code);
    let definitions = if code == "de" {
        GermanLoader::features_or_embedded(&grammar_path)
    } else {
        FeatureDefinitions::load_from_file(&grammar_path)
    };
    match definitions {
        Ok(definitions) => session.set_definitions(definitions, None),
        Err(e) => tracing::warn!("No grammar features for {}: {}", code, e),
    }

    if let Err(e) = session.restore_preferences(prefs).await {
        tracing::warn!("Failed to restore preferences for {}: {}", code, e);
    }

    let dictionary_path = config.dictionary.dictionary_path(code);
    let parsed = if code == "de" {
        GermanLoader::load_or_embedded(&dictionary_path)
    } else {
        ParsedDictionary::load_from_file(&dictionary_path, session.language())
    };
    match parsed {
        Ok(parsed) => session.load_parsed(parsed),
        Err(LoadError::FileNotFound(path)) => {
            tracing::warn!("Dictionary {} not found, suggestions stay empty", path);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leksi_config::dictionary::DictionaryConfig;
    use leksi_core::prefs::MemoryPreferenceStore;

    fn config() -> Config {
        Config {
            dictionary: DictionaryConfig {
                data_dir: "no/such/dir".into(),
                ..DictionaryConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_registry() {
        for code in SUPPORTED {
            assert_eq!(language_for(code).unwrap().language_code(), *code);
        }
        assert!(language_for("ja").is_none());
    }

    #[tokio::test]
    async fn test_german_falls_back_to_embedded_data() {
        let prefs = MemoryPreferenceStore::new();
        let session = open_session("de", &config(), &prefs).await.unwrap();
        assert!(session.is_loaded());
        assert!(session.definitions().is_some());
    }

    #[tokio::test]
    async fn test_missing_dictionary_leaves_session_empty() {
        let prefs = MemoryPreferenceStore::new();
        let session = open_session("es", &config(), &prefs).await.unwrap();
        assert!(!session.is_loaded());
        assert!(session.predict("ha", None, false, 5).is_empty());

        assert!(open_session("xx", &config(), &prefs).await.is_err());
    }
}
