use std::collections::HashMap;
use std::sync::Arc;

use leksi_types::{DictionaryEntry, FormType, InflectionKind, PredictionCandidate};
use serde_json::Value;

use crate::dictionary::{DictionaryMetadata, ParsedDictionary};
use crate::features::GrammarFeatureSet;
use crate::language::Language;
use crate::phonetic::PhoneticNormalizer;

/// First `n` characters of `s`, if it has at least that many
pub fn prefix_key(s: &str, n: usize) -> Option<String> {
    let key: String = s.chars().take(n).collect();
    (key.chars().count() == n).then_some(key)
}

/// Candidate positions grouped by their 2- and 3-character surface prefixes
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    buckets: HashMap<String, Vec<usize>>,
}

impl PrefixIndex {
    pub fn build(candidates: &[PredictionCandidate]) -> Self {
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, candidate) in candidates.iter().enumerate() {
            for n in [2, 3] {
                if let Some(key) = prefix_key(&candidate.surface, n) {
                    buckets.entry(key).or_default().push(i);
                }
            }
        }
        Self { buckets }
    }

    /// Candidate positions in scan order; empty for unknown prefixes
    pub fn get(&self, prefix: &str) -> &[usize] {
        self.buckets.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionHit {
    pub entry: usize,
    pub kind: InflectionKind,
    /// Tense or case label
    pub detail: String,
}

/// Lowercased inflected surface form -> entries it belongs to
#[derive(Debug, Clone, Default)]
pub struct InflectionIndex {
    forms: HashMap<String, Vec<InflectionHit>>,
}

impl InflectionIndex {
    pub fn build(entries: &[Arc<DictionaryEntry>], language: &dyn Language) -> Self {
        let mut index = Self::default();
        let labels = language.person_labels();

        for (i, entry) in entries.iter().enumerate() {
            let headword = entry.headword.to_lowercase();

            for conjugation in &entry.conjugations {
                for (_, form) in conjugation.table.labelled_forms(labels) {
                    index.add(form, &headword, i, InflectionKind::Conjugation, &conjugation.tense);
                }
            }

            if !entry.is_noun() {
                continue;
            }
            if let Some(plural) = &entry.plural {
                index.add(
                    language.strip_article(plural),
                    &headword,
                    i,
                    InflectionKind::Plural,
                    "plural",
                );
            }
            for case in &entry.cases {
                for form in [&case.definite, &case.indefinite].into_iter().flatten() {
                    index.add(
                        language.strip_article(form),
                        &headword,
                        i,
                        InflectionKind::CaseForm,
                        &case.case,
                    );
                }
            }
        }

        index
    }

    fn add(&mut self, form: &str, headword: &str, entry: usize, kind: InflectionKind, detail: &str) {
        let key = form.trim().to_lowercase();
        if key.is_empty() || key == headword {
            return;
        }
        let hits = self.forms.entry(key).or_default();
        if hits.iter().any(|h| h.entry == entry && h.kind == kind && h.detail == detail) {
            return;
        }
        hits.push(InflectionHit {
            entry,
            kind,
            detail: detail.to_string(),
        });
    }

    pub fn get(&self, form: &str) -> &[InflectionHit] {
        self.forms
            .get(&form.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Per-dictionary data, independent of the enabled grammar features
#[derive(Debug, Default)]
pub struct Lexicon {
    pub metadata: DictionaryMetadata,
    pub entries: Vec<Arc<DictionaryEntry>>,
    pub inflections: InflectionIndex,
    /// Lowercased headword -> entry positions
    pub headwords: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    pub fn build(parsed: ParsedDictionary, language: &dyn Language) -> Self {
        let entries: Vec<Arc<DictionaryEntry>> = parsed.entries.into_iter().map(Arc::new).collect();
        let inflections = InflectionIndex::build(&entries, language);

        let mut headwords: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            headwords.entry(entry.headword.to_lowercase()).or_default().push(i);
        }

        Self {
            metadata: parsed.metadata,
            entries,
            inflections,
            headwords,
        }
    }
}

/// Candidates for one feature set, with their phonetic forms and prefix index
#[derive(Debug, Default)]
pub struct CandidateIndex {
    pub candidates: Vec<PredictionCandidate>,
    /// Phonetic canonical form of each candidate surface, same positions
    pub phonetic: Vec<String>,
    pub prefixes: PrefixIndex,
}

impl CandidateIndex {
    pub fn build(
        entries: &[Arc<DictionaryEntry>],
        features: &GrammarFeatureSet,
        language: &dyn Language,
    ) -> Self {
        let mut candidates = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            generate_candidates(i, entry, features, language, &mut candidates);
        }

        let normalizer = PhoneticNormalizer::for_language(language);
        let phonetic = candidates
            .iter()
            .map(|c| normalizer.normalize(&c.surface))
            .collect();
        let prefixes = PrefixIndex::build(&candidates);

        Self {
            candidates,
            phonetic,
            prefixes,
        }
    }
}

fn push_candidate(
    out: &mut Vec<PredictionCandidate>,
    entry: usize,
    surface: &str,
    display: &str,
    form_type: FormType,
    role: Option<&str>,
    detail: Option<&str>,
) {
    let surface = surface.trim().to_lowercase();
    if surface.is_empty() {
        return;
    }
    out.push(PredictionCandidate {
        surface,
        display: display.trim().to_string(),
        entry,
        form_type,
        role: role.map(str::to_string),
        detail: detail.map(str::to_string),
    });
}

fn generate_candidates(
    i: usize,
    entry: &DictionaryEntry,
    features: &GrammarFeatureSet,
    language: &dyn Language,
    out: &mut Vec<PredictionCandidate>,
) {
    let headword = entry.headword.as_str();
    push_candidate(out, i, headword, headword, FormType::Base, None, None);

    if let Some(translation) = &entry.translation {
        let lower = translation.to_lowercase();
        let surface = language
            .translation_markers()
            .iter()
            .find(|m| lower.starts_with(**m))
            .map(|m| &lower[m.len()..])
            .unwrap_or(lower.as_str());
        push_candidate(out, i, surface, translation, FormType::Translation, None, None);
    }

    for conjugation in &entry.conjugations {
        let tense = conjugation.tense.as_str();
        if !features.tense_enabled(tense) {
            continue;
        }
        for (label, form) in conjugation.table.labelled_forms(language.person_labels()) {
            push_candidate(
                out,
                i,
                form,
                form,
                FormType::Conjugation,
                Some(label.as_str()),
                Some(tense),
            );
        }
    }

    for case in &entry.cases {
        let name = case.case.as_str();
        if !features.case_enabled(name) {
            continue;
        }
        if let Some(form) = &case.definite {
            push_candidate(out, i, form, form, FormType::CaseForm, Some(name), Some("definite"));
        }
        if let Some(form) = &case.indefinite {
            push_candidate(out, i, form, form, FormType::CaseForm, Some(name), Some("indefinite"));
        }
    }

    if features.plural_enabled() {
        if let Some(plural) = &entry.plural {
            let form = language.strip_article(plural);
            push_candidate(out, i, form, form, FormType::Plural, None, Some("plural"));
        }
    }

    if let Some(comparison) = &entry.comparison {
        if features.comparative_enabled() {
            if let Some(form) = &comparison.comparative {
                push_candidate(out, i, form, form, FormType::Comparative, None, None);
            }
        }
        if features.superlative_enabled() {
            if let Some(form) = &comparison.superlative {
                push_candidate(out, i, form, form, FormType::Superlative, None, None);
            }
        }
    }
}

/// Everything derived from one dictionary load and one feature set.
///
/// Never mutated after construction; a reload or feature change builds a
/// new store and the owner swaps the whole reference.
#[derive(Debug, Clone, Default)]
pub struct LexicalStore {
    lexicon: Arc<Lexicon>,
    index: Arc<CandidateIndex>,
}

impl LexicalStore {
    pub fn load(payload: &Value, features: &GrammarFeatureSet, language: &dyn Language) -> Self {
        Self::from_parsed(ParsedDictionary::from_value(payload, language), features, language)
    }

    pub fn from_parsed(
        parsed: ParsedDictionary,
        features: &GrammarFeatureSet,
        language: &dyn Language,
    ) -> Self {
        let lexicon = Arc::new(Lexicon::build(parsed, language));
        let index = Arc::new(CandidateIndex::build(&lexicon.entries, features, language));
        tracing::info!(
            "Lexical store ready: {} entries, {} candidates, {} inflected forms",
            lexicon.entries.len(),
            index.candidates.len(),
            lexicon.inflections.len()
        );
        Self { lexicon, index }
    }

    /// Regenerate candidates for a new feature set, sharing the parsed dictionary
    pub fn with_features(&self, features: &GrammarFeatureSet, language: &dyn Language) -> Self {
        let index = Arc::new(CandidateIndex::build(&self.lexicon.entries, features, language));
        tracing::debug!("Regenerated {} candidates", index.candidates.len());
        Self {
            lexicon: Arc::clone(&self.lexicon),
            index,
        }
    }

    pub fn entries(&self) -> &[Arc<DictionaryEntry>] {
        &self.lexicon.entries
    }

    pub fn entry(&self, idx: usize) -> Option<&Arc<DictionaryEntry>> {
        self.lexicon.entries.get(idx)
    }

    pub fn metadata(&self) -> &DictionaryMetadata {
        &self.lexicon.metadata
    }

    pub fn candidates(&self) -> &[PredictionCandidate] {
        &self.index.candidates
    }

    pub fn phonetic_forms(&self) -> &[String] {
        &self.index.phonetic
    }

    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.index.prefixes
    }

    pub fn inflection_index(&self) -> &InflectionIndex {
        &self.lexicon.inflections
    }

    /// Entry positions whose headword equals `headword`, ignoring case
    pub fn entries_with_headword(&self, headword: &str) -> &[usize] {
        self.lexicon
            .headwords
            .get(&headword.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
