use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use leksi_types::{DictionaryEntry, InflectionHint, InflectionKind, SearchDirection, SearchHit};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::language::Language;
use crate::store::LexicalStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DirectMatch {
    Exact,
    Prefix,
    Substring,
}

/// Dictionary lookup by any form of a word.
///
/// Order: exact then prefix matches on the searched field, then entries
/// found through an inflected form, then substring-only matches.
/// Inflected forms are only resolved when the query is in the source
/// language.
pub fn search(
    store: &LexicalStore,
    language: &dyn Language,
    query: &str,
    direction: SearchDirection,
    max_results: usize,
) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut direct: Vec<(DirectMatch, usize)> = Vec::new();
    for (i, entry) in store.entries().iter().enumerate() {
        if let Some(kind) = direct_match(entry, &query, direction, language) {
            direct.push((kind, i));
        }
    }

    let sort_field = |i: usize| -> String {
        store
            .entry(i)
            .map(|e| match direction {
                SearchDirection::SourceToTarget => e.headword.clone(),
                SearchDirection::TargetToSource => e.translation.clone().unwrap_or_default(),
            })
            .unwrap_or_default()
    };

    direct.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| collate(&sort_field(a.1), &sort_field(b.1)))
    });

    let mut inflected = match direction {
        SearchDirection::SourceToTarget => {
            let seen: HashSet<usize> = direct.iter().map(|(_, i)| *i).collect();
            inflection_matches(store, language, &query, &seen)
        }
        SearchDirection::TargetToSource => Vec::new(),
    };
    inflected.sort_by(|a, b| collate(&sort_field(a.0), &sort_field(b.0)));

    tracing::debug!(
        "Search '{}': {} direct, {} inflected",
        query,
        direct.len(),
        inflected.len()
    );

    let hit = |i: usize, hint: Option<InflectionHint>| {
        store.entry(i).map(|entry| SearchHit {
            entry: Arc::clone(entry),
            inflection_hint: hint,
        })
    };

    let (leading, substring): (Vec<_>, Vec<_>) = direct
        .into_iter()
        .partition(|(kind, _)| *kind != DirectMatch::Substring);

    leading
        .into_iter()
        .filter_map(|(_, i)| hit(i, None))
        .chain(inflected.into_iter().filter_map(|(i, hint)| hit(i, Some(hint))))
        .chain(substring.into_iter().filter_map(|(_, i)| hit(i, None)))
        .take(max_results)
        .collect()
}

fn direct_match(
    entry: &DictionaryEntry,
    query: &str,
    direction: SearchDirection,
    language: &dyn Language,
) -> Option<DirectMatch> {
    let fields: Vec<String> = match direction {
        SearchDirection::SourceToTarget => vec![entry.headword.to_lowercase()],
        SearchDirection::TargetToSource => {
            let translation = entry.translation.as_deref()?.to_lowercase();
            let mut fields = vec![translation.clone()];
            for marker in language.translation_markers() {
                if let Some(rest) = translation.strip_prefix(*marker) {
                    fields.push(rest.to_string());
                }
            }
            fields
        }
    };

    fields
        .iter()
        .filter_map(|field| {
            if field == query {
                Some(DirectMatch::Exact)
            } else if field.starts_with(query) {
                Some(DirectMatch::Prefix)
            } else if field.contains(query) {
                Some(DirectMatch::Substring)
            } else {
                None
            }
        })
        .min()
}

/// Entries reached through an inflected query, first source per entry wins:
/// the inflection index, then the irregular table, then the suffix heuristic
fn inflection_matches(
    store: &LexicalStore,
    language: &dyn Language,
    query: &str,
    exclude: &HashSet<usize>,
) -> Vec<(usize, InflectionHint)> {
    let mut found: Vec<(usize, InflectionHint)> = Vec::new();
    let mut push = |entry: usize, kind: InflectionKind, detail: &str| {
        if exclude.contains(&entry) || found.iter().any(|(i, _)| *i == entry) {
            return;
        }
        found.push((
            entry,
            InflectionHint {
                kind,
                detail: detail.to_string(),
                form: query.to_string(),
            },
        ));
    };

    for hit in store.inflection_index().get(query) {
        push(hit.entry, hit.kind, &hit.detail);
    }

    if let Some(base) = language.irregular_base(query) {
        for &i in store.entries_with_headword(base) {
            push(i, InflectionKind::Irregular, base);
        }
    }

    for citation in language.citation_forms(query) {
        for &i in store.entries_with_headword(&citation) {
            push(i, InflectionKind::RegularSuffix, &citation);
        }
    }

    found
}

/// Locale-aware enough ordering: base letters first, then case and accents
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
