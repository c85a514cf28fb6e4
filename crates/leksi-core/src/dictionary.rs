use std::path::Path;

use leksi_types::{
    CaseForms, ComparisonForms, Conjugation, DictionaryEntry, EntryId, ExampleSentence, Gender,
    InflectionTable, PartOfSpeech,
};
use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::language::Language;

/// Reserved payload key holding language metadata
pub const METADATA_KEY: &str = "_metadata";

const COMPARATIVE_FIELDS: &[(Option<&str>, &str)] = &[
    (Some("comparison"), "comparative"),
    (Some("comparison"), "komparativ"),
    (None, "comparative"),
    (None, "komparativ"),
];

const SUPERLATIVE_FIELDS: &[(Option<&str>, &str)] = &[
    (Some("comparison"), "superlative"),
    (Some("comparison"), "superlativ"),
    (None, "superlative"),
    (None, "superlativ"),
];

#[derive(Debug, Clone, Default)]
pub struct DictionaryMetadata {
    pub language_code: Option<String>,
    pub language_name: Option<String>,
    pub entry_count: usize,
}

/// Entries of one dictionary payload, in deterministic category/id order
#[derive(Debug, Clone, Default)]
pub struct ParsedDictionary {
    pub metadata: DictionaryMetadata,
    pub entries: Vec<DictionaryEntry>,
}

impl ParsedDictionary {
    /// Parse a dictionary payload.
    ///
    /// Malformed categories and entries are skipped; a payload that is not
    /// an object yields an empty dictionary.
    pub fn from_value(payload: &Value, language: &dyn Language) -> Self {
        let Some(categories) = payload.as_object() else {
            tracing::warn!("Dictionary payload is not an object, nothing loaded");
            return Self::default();
        };

        let mut metadata = DictionaryMetadata::default();
        if let Some(meta) = categories.get(METADATA_KEY).and_then(Value::as_object) {
            metadata.language_code = str_field(meta, &["languageCode", "language_code", "code"]);
            metadata.language_name = str_field(meta, &["languageName", "language_name", "name"]);
        }

        let mut entries = Vec::new();
        for (category, records) in categories {
            if category.starts_with('_') {
                continue;
            }
            let Some(records) = records.as_object() else {
                tracing::warn!("Skipping category {}: not a key-value mapping", category);
                continue;
            };

            for (key, record) in records {
                if key.starts_with('_') {
                    continue;
                }
                match parse_entry(category, key, record, language) {
                    Some(entry) => entries.push(entry),
                    None => tracing::debug!("Skipping malformed entry {}/{}", category, key),
                }
            }
        }

        metadata.entry_count = entries.len();
        Self { metadata, entries }
    }

    /// Parse a dictionary from JSON text. Fails only on invalid JSON.
    pub fn from_json(json: &str, language: &dyn Language) -> Result<Self, LoadError> {
        let payload: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&payload, language))
    }

    pub fn load_from_file(path: &Path, language: &dyn Language) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dict = Self::from_json(&json, language)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entries.len());
        Ok(dict)
    }
}

fn parse_entry(
    category: &str,
    key: &str,
    record: &Value,
    language: &dyn Language,
) -> Option<DictionaryEntry> {
    let record = record.as_object()?;
    let headword = str_field(record, &["word", "headword"])?;

    let part_of_speech = PartOfSpeech::from_category(category)
        .or_else(|| str_field(record, &["type", "pos"]).map(|tag| PartOfSpeech::from_tag(&tag)))
        .unwrap_or(PartOfSpeech::Other);

    let gender = str_field(record, &["genus", "gender"]).and_then(|tag| Gender::from_tag(&tag));

    let comparison = ComparisonForms {
        comparative: resolve_field(record, COMPARATIVE_FIELDS),
        superlative: resolve_field(record, SUPERLATIVE_FIELDS),
    };
    let comparison = (comparison.comparative.is_some() || comparison.superlative.is_some())
        .then_some(comparison);

    Some(DictionaryEntry {
        id: EntryId::new(category, key),
        headword,
        translation: str_field(record, &["translation"]),
        part_of_speech,
        gender,
        conjugations: record
            .get("conjugations")
            .and_then(Value::as_object)
            .map(|tenses| parse_conjugations(tenses, language))
            .unwrap_or_default(),
        cases: record
            .get("cases")
            .and_then(Value::as_object)
            .map(|cases| parse_cases(cases, language))
            .unwrap_or_default(),
        plural: str_field(record, &["plural"]),
        comparison,
        examples: parse_examples(record),
        audio: str_field(record, &["audio"]),
    })
}

fn parse_conjugations(tenses: &Map<String, Value>, language: &dyn Language) -> Vec<Conjugation> {
    tenses
        .iter()
        .filter(|(tense, _)| !tense.starts_with('_'))
        .filter_map(|(tense, value)| {
            let table = parse_table(value, language)?;
            Some(Conjugation {
                tense: tense.clone(),
                table,
            })
        })
        .collect()
}

fn parse_table(value: &Value, language: &dyn Language) -> Option<InflectionTable> {
    match value {
        Value::Array(forms) => Some(InflectionTable::PersonIndexed(
            forms
                .iter()
                .map(|f| f.as_str().unwrap_or_default().trim().to_string())
                .collect(),
        )),
        Value::Object(map) => {
            if let Some(inner) = map.get("former").or_else(|| map.get("forms")) {
                return parse_table(inner, language);
            }

            let labels = language.person_labels();
            let mut pairs: Vec<(String, String)> = map
                .iter()
                .filter_map(|(label, form)| {
                    let form = form.as_str()?.trim();
                    Some((label.clone(), form.to_string()))
                })
                .collect();
            pairs.sort_by_key(|(label, _)| {
                labels
                    .iter()
                    .position(|l| *l == label.as_str())
                    .unwrap_or(labels.len())
            });

            (!pairs.is_empty()).then_some(InflectionTable::PronounKeyed(pairs))
        }
        _ => None,
    }
}

/// Known case names come first in grammatical order, unknown ones after
fn parse_cases(cases: &Map<String, Value>, language: &dyn Language) -> Vec<CaseForms> {
    let order = language.case_names();
    let mut parsed: Vec<CaseForms> = cases
        .iter()
        .filter_map(|(case, value)| {
            let (definite, indefinite) = match value {
                Value::String(form) => (non_empty(form), None),
                Value::Object(forms) => (
                    str_field(forms, &["bestemt", "definite", "definitt"]),
                    str_field(forms, &["ubestemt", "indefinite"]),
                ),
                _ => return None,
            };
            if definite.is_none() && indefinite.is_none() {
                return None;
            }
            Some(CaseForms {
                case: case.clone(),
                definite,
                indefinite,
            })
        })
        .collect();
    parsed.sort_by_key(|c| {
        order
            .iter()
            .position(|name| name.eq_ignore_ascii_case(&c.case))
            .unwrap_or(order.len())
    });
    parsed
}

fn parse_examples(record: &Map<String, Value>) -> Vec<ExampleSentence> {
    let parse_one = |value: &Value| match value {
        Value::String(s) => non_empty(s).map(|sentence| ExampleSentence {
            sentence,
            translation: None,
        }),
        Value::Object(obj) => str_field(obj, &["sentence", "text"]).map(|sentence| {
            ExampleSentence {
                sentence,
                translation: str_field(obj, &["translation"]),
            }
        }),
        _ => None,
    };

    match record.get("examples") {
        Some(Value::Array(items)) => items.iter().filter_map(parse_one).collect(),
        _ => record.get("example").and_then(parse_one).into_iter().collect(),
    }
}

/// First candidate field holding a non-empty string; nested fields are `(parent, child)`
fn resolve_field(record: &Map<String, Value>, fields: &[(Option<&str>, &str)]) -> Option<String> {
    fields.iter().find_map(|(parent, field)| match parent {
        Some(parent) => record
            .get(*parent)
            .and_then(Value::as_object)
            .and_then(|nested| str_field(nested, &[*field])),
        None => str_field(record, &[*field]),
    })
}

fn str_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str).and_then(non_empty))
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestLanguage;
    use serde_json::json;

    #[test]
    fn test_metadata_and_underscore_keys_are_skipped() {
        let payload = json!({
            "_metadata": { "languageCode": "de", "languageName": "Tysk" },
            "nounbank": {
                "_comment": { "word": "ignored" },
                "hund_noun": { "word": "Hund", "translation": "hund", "genus": "m" }
            }
        });
        let dict = ParsedDictionary::from_value(&payload, &TestLanguage);

        assert_eq!(dict.metadata.language_code.as_deref(), Some("de"));
        assert_eq!(dict.entries.len(), 1);
        assert_eq!(dict.entries[0].id.as_str(), "nounbank/hund_noun");
        assert_eq!(dict.entries[0].gender, Some(Gender::Masculine));
        assert_eq!(dict.entries[0].part_of_speech, PartOfSpeech::Noun);
    }

    #[test]
    fn test_malformed_units_are_skipped() {
        let payload = json!({
            "verbbank": "not an object",
            "nounbank": {
                "broken": 42,
                "no_word": { "translation": "x" },
                "ok": { "word": "Haus" }
            }
        });
        let dict = ParsedDictionary::from_value(&payload, &TestLanguage);
        assert_eq!(dict.entries.len(), 1);
        assert_eq!(dict.entries[0].headword, "Haus");
        assert_eq!(dict.entries[0].translation, None);

        let dict = ParsedDictionary::from_value(&json!([1, 2, 3]), &TestLanguage);
        assert!(dict.entries.is_empty());
    }

    #[test]
    fn test_both_table_shapes_are_normalized() {
        let payload = json!({
            "verbbank": {
                "sein": {
                    "word": "sein",
                    "conjugations": {
                        "presens": { "former": { "du": "bist", "ich": "bin" } },
                        "preteritum": ["war", "warst", "war", "waren", "wart", "waren"]
                    }
                }
            }
        });
        let dict = ParsedDictionary::from_value(&payload, &TestLanguage);
        let conj = &dict.entries[0].conjugations;

        assert_eq!(
            conj[0].table,
            InflectionTable::PronounKeyed(vec![
                ("ich".to_string(), "bin".to_string()),
                ("du".to_string(), "bist".to_string()),
            ])
        );
        assert!(matches!(&conj[1].table, InflectionTable::PersonIndexed(f) if f.len() == 6));
    }

    #[test]
    fn test_comparison_field_priority() {
        let payload = json!({
            "adjectivebank": {
                "gut": {
                    "word": "gut",
                    "komparativ": "legacy",
                    "comparison": { "komparativ": "besser", "superlativ": "am besten" }
                },
                "alt": { "word": "alt", "comparative": "älter" }
            }
        });
        let dict = ParsedDictionary::from_value(&payload, &TestLanguage);
        let alt = &dict.entries[0];
        let gut = &dict.entries[1];

        assert_eq!(
            gut.comparison.as_ref().and_then(|c| c.comparative.as_deref()),
            Some("besser")
        );
        assert_eq!(
            gut.comparison.as_ref().and_then(|c| c.superlative.as_deref()),
            Some("am besten")
        );
        assert_eq!(
            alt.comparison.as_ref().and_then(|c| c.comparative.as_deref()),
            Some("älter")
        );
    }

    #[test]
    fn test_cases_and_examples() {
        let payload = json!({
            "nounbank": {
                "mann": {
                    "word": "Mann",
                    "cases": {
                        "genitiv": "des Mannes",
                        "dativ": { "bestemt": "dem Mann", "ubestemt": "einem Mann" },
                        "bad": 3
                    },
                    "examples": [{ "sentence": "Der Mann liest.", "translation": "Mannen leser." }]
                }
            }
        });
        let dict = ParsedDictionary::from_value(&payload, &TestLanguage);
        let mann = &dict.entries[0];

        assert_eq!(mann.cases.len(), 2);
        assert_eq!(mann.cases[0].indefinite.as_deref(), Some("einem Mann"));
        assert_eq!(mann.cases[1].definite.as_deref(), Some("des Mannes"));
        assert_eq!(mann.examples[0].translation.as_deref(), Some("Mannen leser."));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ParsedDictionary::from_json("{ nope", &TestLanguage).is_err());
    }
}
