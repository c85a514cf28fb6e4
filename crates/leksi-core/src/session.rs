use std::sync::Arc;

use leksi_config::Config;
use leksi_config::prediction::PredictionConfig;
use leksi_config::search::SearchConfig;
use leksi_types::{Prediction, SearchDirection, SearchHit};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::context::classify_context;
use crate::dictionary::ParsedDictionary;
use crate::error::StoreError;
use crate::features::{FeatureDefinitions, GrammarFeatureSet};
use crate::fuzzy::find_matches;
use crate::language::Language;
use crate::phonetic::PhoneticNormalizer;
use crate::prefs::{self, PreferenceStore};
use crate::ranker::{RankContext, rank};
use crate::recency::RecencySet;
use crate::resolver;
use crate::store::LexicalStore;

/// All mutable state of one source language.
///
/// The lexical store is swapped as a whole on reload or feature change, so
/// a clone of [`LexiconSession::store`] taken before the swap stays valid.
pub struct LexiconSession {
    language: Arc<dyn Language>,
    normalizer: PhoneticNormalizer,
    features: GrammarFeatureSet,
    definitions: Option<FeatureDefinitions>,
    recency: RecencySet,
    store: Option<Arc<LexicalStore>>,
    prediction: PredictionConfig,
    search: SearchConfig,
}

impl LexiconSession {
    pub fn new(language: Arc<dyn Language>, config: &Config) -> Self {
        let normalizer = PhoneticNormalizer::for_language(language.as_ref());
        let features = GrammarFeatureSet::resolve(language.as_ref(), None, None);
        Self {
            normalizer,
            features,
            definitions: None,
            recency: RecencySet::new(config.prediction.recency_capacity),
            store: None,
            prediction: config.prediction.clone(),
            search: config.search.clone(),
            language,
        }
    }

    pub fn language(&self) -> &dyn Language {
        self.language.as_ref()
    }

    pub fn features(&self) -> &GrammarFeatureSet {
        &self.features
    }

    pub fn definitions(&self) -> Option<&FeatureDefinitions> {
        self.definitions.as_ref()
    }

    pub fn recency(&self) -> &RecencySet {
        &self.recency
    }

    pub fn store(&self) -> Option<Arc<LexicalStore>> {
        self.store.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Install feature definitions. Without a stored preference the `basic`
    /// preset becomes the active feature set.
    pub fn set_definitions(&mut self, definitions: FeatureDefinitions, stored: Option<Vec<String>>) {
        let features = GrammarFeatureSet::resolve(self.language.as_ref(), stored, Some(&definitions));
        self.definitions = Some(definitions);
        self.on_feature_set_changed(features);
    }

    pub fn on_dictionary_reload(&mut self, payload: &Value) {
        let parsed = ParsedDictionary::from_value(payload, self.language.as_ref());
        self.load_parsed(parsed);
    }

    pub fn load_parsed(&mut self, parsed: ParsedDictionary) {
        let store = LexicalStore::from_parsed(parsed, &self.features, self.language.as_ref());
        self.store = Some(Arc::new(store));
    }

    /// Regenerate candidates for `features` without reparsing the dictionary
    pub fn on_feature_set_changed(&mut self, features: GrammarFeatureSet) {
        self.features = features;
        if let Some(store) = &self.store {
            let next = store.with_features(&self.features, self.language.as_ref());
            self.store = Some(Arc::new(next));
        }
    }

    /// Flip one feature; returns whether it is enabled afterwards
    pub fn toggle_feature(&mut self, id: &str) -> bool {
        let mut features = self.features.clone();
        let enabled = features.toggle(id);
        tracing::info!("Grammar feature {} {}", id, if enabled { "enabled" } else { "disabled" });
        self.on_feature_set_changed(features);
        enabled
    }

    pub fn on_recency_update(&mut self, accepted_form: &str) {
        self.recency.record(accepted_form);
    }

    /// Ranked suggestions for a partially typed word.
    ///
    /// Empty until a dictionary has been loaded.
    pub fn predict(
        &self,
        query: &str,
        preceding_role: Option<&str>,
        modal_verb_present: bool,
        max_results: usize,
    ) -> Vec<Prediction> {
        let Some(store) = &self.store else {
            tracing::debug!("Prediction for '{}' before dictionary load", query);
            return Vec::new();
        };

        let matches = find_matches(store, &self.normalizer, query, max_results);
        let ctx = RankContext {
            preceding_role,
            modal_verb_present,
            recency: &self.recency,
        };
        rank(store, matches, &ctx, max_results)
    }

    /// Predict from raw text before the cursor: the trailing word is the
    /// query, the words before it supply the ranking context.
    pub fn predict_in_context(&self, text_before_cursor: &str) -> Vec<Prediction> {
        if text_before_cursor.ends_with(char::is_whitespace) {
            return Vec::new();
        }
        let Some(query) = text_before_cursor.split_whitespace().last() else {
            return Vec::new();
        };
        let query = query.trim_matches(|c: char| !c.is_alphanumeric());

        let signal = classify_context(text_before_cursor, self.language.as_ref());
        self.predict(
            query,
            signal.preceding_role.as_deref(),
            signal.modal_verb_present,
            self.prediction.max_results,
        )
    }

    pub fn search(&self, query: &str, direction: SearchDirection) -> Vec<SearchHit> {
        let Some(store) = &self.store else {
            tracing::debug!("Search for '{}' before dictionary load", query);
            return Vec::new();
        };
        resolver::search(
            store,
            self.language.as_ref(),
            query,
            direction,
            self.search.max_results,
        )
    }

    /// Load the feature set and recency list stored for this language.
    ///
    /// Malformed stored values are ignored; only an unreachable store is an error.
    pub async fn restore_preferences(&mut self, store: &dyn PreferenceStore) -> Result<(), StoreError> {
        let code = self.language.language_code().to_string();

        let stored_features: Option<Vec<String>> =
            lenient(prefs::get_typed(store, &prefs::grammar_features_key(&code)).await)?;
        let features =
            GrammarFeatureSet::resolve(self.language.as_ref(), stored_features, self.definitions.as_ref());

        let recent: Vec<String> =
            lenient(prefs::get_typed(store, &prefs::recent_key(&code)).await)?.unwrap_or_default();
        self.recency = RecencySet::from_forms(self.prediction.recency_capacity, recent);

        tracing::info!(
            "Restored preferences for {}: {} features, {} recent forms",
            code,
            features.ids().len(),
            self.recency.len()
        );
        self.on_feature_set_changed(features);
        Ok(())
    }

    pub async fn persist_preferences(&self, store: &dyn PreferenceStore) -> Result<(), StoreError> {
        let code = self.language.language_code();
        store.set(prefs::LANGUAGE_KEY, json!(code)).await?;
        store
            .set(&prefs::grammar_features_key(code), json!(self.features.ids()))
            .await?;
        store
            .set(&prefs::recent_key(code), json!(self.recency.forms()))
            .await?;
        Ok(())
    }
}

fn lenient<T: DeserializeOwned>(result: Result<Option<T>, StoreError>) -> Result<Option<T>, StoreError> {
    match result {
        Err(StoreError::Malformed { key, source }) => {
            tracing::warn!("Ignoring stored {}: {}", key, source);
            Ok(None)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferenceStore;
    use crate::testutil::TestLanguage;
    use leksi_types::FormType;

    fn payload() -> Value {
        json!({
            "_metadata": { "languageCode": "de", "languageName": "Deutsch" },
            "verbbank": {
                "sein": {
                    "word": "sein",
                    "translation": "å være",
                    "conjugations": { "presens": { "ich": "bin", "du": "bist", "er/sie/es": "ist" } }
                },
                "bilden": { "word": "bilden", "translation": "å danne" }
            },
            "nounbank": {
                "bild": { "word": "Bild", "translation": "bilde", "plural": "die Bilder" }
            }
        })
    }

    fn session() -> LexiconSession {
        LexiconSession::new(Arc::new(TestLanguage), &Config::default())
    }

    #[test]
    fn test_queries_before_load_are_empty() {
        let session = session();
        assert!(!session.is_loaded());
        assert!(session.predict("bi", None, false, 5).is_empty());
        assert!(session.search("bin", SearchDirection::SourceToTarget).is_empty());
    }

    #[test]
    fn test_predict_uses_basic_features() {
        let mut session = session();
        session.on_dictionary_reload(&payload());

        let forms: Vec<String> = session
            .predict("bi", None, false, 10)
            .into_iter()
            .map(|p| p.display_form)
            .collect();
        assert!(forms.contains(&"bin".to_string()));
        assert!(forms.contains(&"Bilder".to_string()));
    }

    #[test]
    fn test_toggle_regenerates_without_reload() {
        let mut session = session();
        session.on_dictionary_reload(&payload());
        let before = session.store().unwrap();

        assert!(!session.toggle_feature("plural"));
        let after = session.store().unwrap();
        assert!(
            after
                .candidates()
                .iter()
                .all(|c| c.form_type != FormType::Plural)
        );
        // the old snapshot is untouched
        assert!(
            before
                .candidates()
                .iter()
                .any(|c| c.form_type == FormType::Plural)
        );
    }

    #[test]
    fn test_predict_in_context() {
        let mut session = session();
        session.on_dictionary_reload(&payload());

        let predictions = session.predict_in_context("Heute du bi");
        assert_eq!(predictions[0].display_form, "bist");

        let predictions = session.predict_in_context("Ich kann bi");
        assert_eq!(predictions[0].display_form, "bilden");

        assert!(session.predict_in_context("Ich ").is_empty());
    }

    #[tokio::test]
    async fn test_preferences_roundtrip() {
        let prefs = MemoryPreferenceStore::new();
        let mut original = session();
        original.on_dictionary_reload(&payload());
        original.toggle_feature("grammar_preteritum");
        original.on_recency_update("Bild");
        original.persist_preferences(&prefs).await.unwrap();

        let mut restored = session();
        restored.restore_preferences(&prefs).await.unwrap();
        assert!(restored.features().is_enabled("preteritum"));
        assert!(restored.recency().contains("bild"));

        let language: Option<String> = prefs::get_typed(&prefs, prefs::LANGUAGE_KEY).await.unwrap();
        assert_eq!(language.as_deref(), Some("de"));
    }

    #[tokio::test]
    async fn test_malformed_preferences_fall_back_to_defaults() {
        let prefs = MemoryPreferenceStore::new();
        prefs.set("grammar_features_de", json!("not a list")).await.unwrap();

        let mut session = session();
        session.restore_preferences(&prefs).await.unwrap();
        assert!(session.features().is_enabled("grammar_presens"));
        assert!(session.recency().is_empty());
    }
}
