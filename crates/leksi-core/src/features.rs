use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::language::Language;

const FEATURE_PREFIX: &str = "grammar_";
pub const PLURAL: &str = "grammar_plural";
pub const COMPARATIVE: &str = "grammar_comparative";
pub const SUPERLATIVE: &str = "grammar_superlative";
const BASIC_PRESET: &str = "basic";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Per-language grammar feature document: feature ids grouped by category plus named presets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDefinitions {
    pub features: BTreeMap<String, Vec<FeatureDefinition>>,
    pub presets: BTreeMap<String, Vec<String>>,
}

impl FeatureDefinitions {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn preset(&self, name: &str) -> Option<&[String]> {
        self.presets.get(name).map(Vec::as_slice)
    }

    pub fn all_ids(&self) -> impl Iterator<Item = &str> {
        self.features
            .values()
            .flat_map(|group| group.iter().map(|f| f.id.as_str()))
    }
}

/// Enabled grammar features of one language.
///
/// Ids follow `grammar_<tense|case>`; a bare tense or case name is
/// treated as an alias of its prefixed id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarFeatureSet {
    language: String,
    enabled: BTreeSet<String>,
}

impl GrammarFeatureSet {
    pub fn new<I, S>(language: &str, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.to_string(),
            enabled: ids.into_iter().map(|id| canonical_id(id.as_ref())).collect(),
        }
    }

    /// Stored preference if present, else the `basic` preset, else the language's own basic list
    pub fn resolve(
        language: &dyn Language,
        stored: Option<Vec<String>>,
        definitions: Option<&FeatureDefinitions>,
    ) -> Self {
        let code = language.language_code();
        if let Some(ids) = stored {
            return Self::new(code, ids);
        }
        if let Some(preset) = definitions.and_then(|d| d.preset(BASIC_PRESET)) {
            return Self::new(code, preset);
        }
        Self::new(code, language.basic_features())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.contains(&canonical_id(id))
    }

    pub fn tense_enabled(&self, tense: &str) -> bool {
        self.is_enabled(tense)
    }

    pub fn case_enabled(&self, case: &str) -> bool {
        self.is_enabled(case)
    }

    pub fn plural_enabled(&self) -> bool {
        self.enabled.contains(PLURAL)
    }

    pub fn comparative_enabled(&self) -> bool {
        self.enabled.contains(COMPARATIVE)
    }

    pub fn superlative_enabled(&self) -> bool {
        self.enabled.contains(SUPERLATIVE)
    }

    /// Flip one feature; returns whether it is enabled afterwards
    pub fn toggle(&mut self, id: &str) -> bool {
        let id = canonical_id(id);
        if self.enabled.remove(&id) {
            false
        } else {
            self.enabled.insert(id);
            true
        }
    }

    pub fn ids(&self) -> Vec<String> {
        self.enabled.iter().cloned().collect()
    }
}

fn canonical_id(id: &str) -> String {
    let id = id.trim().to_lowercase();
    if id.starts_with(FEATURE_PREFIX) {
        id
    } else {
        format!("{FEATURE_PREFIX}{id}")
    }
}
