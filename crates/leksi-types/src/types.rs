use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Stable identifier of a dictionary entry: `"<category>/<id>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn new(category: &str, key: &str) -> Self {
        Self(format!("{category}/{key}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adjective,
    Adverb,
    Pronoun,
    Article,
    Numeral,
    Preposition,
    Conjunction,
    Phrase,
    Other,
}

impl PartOfSpeech {
    /// Part of speech implied by a payload category name, if the category fixes one.
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "verbbank" => Some(Self::Verb),
            "nounbank" => Some(Self::Noun),
            "adjectivebank" => Some(Self::Adjective),
            "articlesbank" => Some(Self::Article),
            "pronounsbank" => Some(Self::Pronoun),
            "numbersbank" => Some(Self::Numeral),
            "phrasesbank" => Some(Self::Phrase),
            _ => None,
        }
    }

    /// Parse the free-form `type` tag carried by entries of mixed categories.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "verb" | "verbs" => Self::Verb,
            "noun" | "nouns" | "substantiv" => Self::Noun,
            "adj" | "adjective" | "adjektiv" => Self::Adjective,
            "adv" | "adverb" => Self::Adverb,
            "pron" | "pronoun" | "pronomen" => Self::Pronoun,
            "art" | "article" | "artikkel" => Self::Article,
            "num" | "numeral" | "number" | "tall" => Self::Numeral,
            "prep" | "preposition" | "preposisjon" => Self::Preposition,
            "conj" | "conjunction" | "konjunksjon" => Self::Conjunction,
            "phrase" | "uttrykk" => Self::Phrase,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Plural,
}

impl Gender {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "m" | "masc" | "masculine" | "maskulin" => Some(Self::Masculine),
            "f" | "fem" | "feminine" | "feminin" => Some(Self::Feminine),
            "n" | "neut" | "neuter" | "nøytrum" => Some(Self::Neuter),
            "pl" | "plural" => Some(Self::Plural),
            _ => None,
        }
    }
}

/// One tense of a verb, normalized at ingestion.
///
/// Source data stores tables either as six forms ordered by grammatical
/// person or keyed by pronoun; both shapes survive here and are read
/// through [`InflectionTable::labelled_forms`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InflectionTable {
    PersonIndexed(Vec<String>),
    PronounKeyed(Vec<(String, String)>),
}

impl InflectionTable {
    /// Every non-empty form with its person label.
    ///
    /// Person-indexed slots take the label at the same position in
    /// `person_labels`; slots past the end of the label set are labelled
    /// with their 1-based index.
    pub fn labelled_forms(&self, person_labels: &[&str]) -> Vec<(String, &str)> {
        match self {
            InflectionTable::PersonIndexed(forms) => forms
                .iter()
                .enumerate()
                .filter(|(_, form)| !form.trim().is_empty())
                .map(|(i, form)| {
                    let label = person_labels
                        .get(i)
                        .map(|l| l.to_string())
                        .unwrap_or_else(|| (i + 1).to_string());
                    (label, form.as_str())
                })
                .collect(),
            InflectionTable::PronounKeyed(pairs) => pairs
                .iter()
                .filter(|(_, form)| !form.trim().is_empty())
                .map(|(label, form)| (label.clone(), form.as_str()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub tense: String,
    pub table: InflectionTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseForms {
    pub case: String,
    pub definite: Option<String>,
    pub indefinite: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonForms {
    pub comparative: Option<String>,
    pub superlative: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub sentence: String,
    pub translation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub id: EntryId,
    pub headword: String,
    pub translation: Option<String>,
    pub part_of_speech: PartOfSpeech,
    pub gender: Option<Gender>,
    pub conjugations: Vec<Conjugation>,
    pub cases: Vec<CaseForms>,
    pub plural: Option<String>,
    pub comparison: Option<ComparisonForms>,
    pub examples: Vec<ExampleSentence>,
    pub audio: Option<String>,
}

impl DictionaryEntry {
    pub fn is_verb(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Verb
    }

    pub fn is_noun(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Noun
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormType {
    Base,
    Translation,
    Conjugation,
    CaseForm,
    Plural,
    Comparative,
    Superlative,
}

/// One searchable surface form derived from an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionCandidate {
    /// Lowercased form used for matching
    pub surface: String,
    /// Form shown to the user, original casing
    pub display: String,
    /// Position of the source entry in the store's entry list
    pub entry: usize,
    pub form_type: FormType,
    /// Person/pronoun label for conjugations, case name for case forms
    pub role: Option<String>,
    /// Tense name for conjugations
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InflectionKind {
    Conjugation,
    Plural,
    CaseForm,
    Irregular,
    RegularSuffix,
}

/// Why an entry matched a query it does not literally contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionHint {
    pub kind: InflectionKind,
    /// Tense or case label, or the rule that produced the match
    pub detail: String,
    /// The matched surface form
    pub form: String,
}

#[derive(Debug, Clone)]
pub struct SearchHit {
    pub entry: Arc<DictionaryEntry>,
    pub inflection_hint: Option<InflectionHint>,
}

#[derive(Debug, Clone)]
pub struct Prediction {
    pub display_form: String,
    pub translation_label: String,
    pub entry: Arc<DictionaryEntry>,
    pub form_type: FormType,
    pub role: Option<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchDirection {
    /// Query typed in the source language, answers show translations
    SourceToTarget,
    /// Query typed in the translation language, answers show headwords
    TargetToSource,
}

impl SearchDirection {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "source-target" => Some(Self::SourceToTarget),
            "target-source" => Some(Self::TargetToSource),
            c if c.starts_with("target-") => Some(Self::SourceToTarget),
            c if c.starts_with("source-") => Some(Self::TargetToSource),
            _ => None,
        }
    }
}

/// Classification of the text before the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextSignal {
    pub preceding_role: Option<String>,
    pub modal_verb_present: bool,
}

/// Messages between the input reader, the event loop and the output printer
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Text before the cursor; the trailing word is the query
    TextInput(String),
    Search {
        query: String,
        direction: SearchDirection,
    },
    ToggleFeature(String),
    /// A suggestion number from the last list, or a literal form
    AcceptSuggestion(String),
    SwitchLanguage(String),
    ListFeatures,
    ShowPredictions(Vec<Prediction>),
    ShowSearchResults(Vec<SearchHit>),
    StatusUpdate(String),
    BackendReady,
    Quit,
}
