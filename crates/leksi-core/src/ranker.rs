use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use leksi_types::{DictionaryEntry, FormType, Prediction, PredictionCandidate};

use crate::fuzzy::ScoredCandidate;
use crate::recency::RecencySet;
use crate::store::LexicalStore;

pub const RECENCY_BOOST: f64 = 50.0;
pub const INFINITIVE_AFTER_MODAL_BOOST: f64 = 250.0;
pub const AGREEMENT_BOOST: f64 = 200.0;

/// Session and linguistic context applied on top of raw match scores
#[derive(Debug, Clone, Copy)]
pub struct RankContext<'a> {
    pub preceding_role: Option<&'a str>,
    pub modal_verb_present: bool,
    pub recency: &'a RecencySet,
}

/// Additive context boost for one candidate.
///
/// The infinitive-after-modal boost is checked first and excludes the
/// pronoun agreement boost.
pub fn boost(candidate: &PredictionCandidate, entry: &DictionaryEntry, ctx: &RankContext<'_>) -> f64 {
    let mut total = 0.0;

    if ctx.recency.contains(&entry.headword) {
        total += RECENCY_BOOST;
    }

    if ctx.modal_verb_present && candidate.form_type == FormType::Base && entry.is_verb() {
        total += INFINITIVE_AFTER_MODAL_BOOST;
    } else if let Some(role) = ctx.preceding_role {
        if candidate.role.as_deref() == Some(role) {
            total += AGREEMENT_BOOST;
        }
    }

    total
}

/// Boost, order, deduplicate and cap matched candidates.
///
/// Ordering is by descending final score with ties kept in scan order
/// (stable sort). Results are deduplicated by lowercased display form,
/// keeping the first (best) occurrence, before truncation to `max_results`.
pub fn rank(
    store: &LexicalStore,
    scored: Vec<ScoredCandidate>,
    ctx: &RankContext<'_>,
    max_results: usize,
) -> Vec<Prediction> {
    let candidates = store.candidates();

    let mut boosted: Vec<(f64, &PredictionCandidate, &Arc<DictionaryEntry>)> = scored
        .into_iter()
        .filter_map(|s| {
            let candidate = candidates.get(s.index)?;
            let entry = store.entry(candidate.entry)?;
            Some((s.score + boost(candidate, entry, ctx), candidate, entry))
        })
        .collect();

    boosted.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut seen = HashSet::new();
    boosted
        .into_iter()
        .filter(|(_, candidate, _)| seen.insert(candidate.display.to_lowercase()))
        .take(max_results)
        .map(|(score, candidate, entry)| Prediction {
            display_form: candidate.display.clone(),
            translation_label: translation_label(candidate, entry),
            entry: Arc::clone(entry),
            form_type: candidate.form_type,
            role: candidate.role.clone(),
            score,
        })
        .collect()
}

/// Text shown next to a suggestion: the other side of the dictionary pair
fn translation_label(candidate: &PredictionCandidate, entry: &DictionaryEntry) -> String {
    match candidate.form_type {
        FormType::Translation => entry.headword.clone(),
        FormType::Base => entry.translation.clone().unwrap_or_default(),
        _ => {
            let translation = entry.translation.as_deref().unwrap_or_default();
            format!("{} ({})", translation, entry.headword).trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::GrammarFeatureSet;
    use crate::testutil::TestLanguage;
    use serde_json::json;

    fn store() -> LexicalStore {
        let payload = json!({
            "verbbank": {
                "bilden": {
                    "word": "bilden",
                    "translation": "å danne",
                    "conjugations": { "presens": ["bilde", "bildest", "bildet", "bilden", "bildet", "bilden"] }
                }
            },
            "nounbank": {
                "bild": { "word": "Bild", "translation": "maleri" }
            }
        });
        LexicalStore::load(&payload, &GrammarFeatureSet::new("de", ["presens"]), &TestLanguage)
    }

    fn scored(store: &LexicalStore, surfaces: &[&str]) -> Vec<ScoredCandidate> {
        surfaces
            .iter()
            .map(|s| {
                let index = store
                    .candidates()
                    .iter()
                    .position(|c| c.surface == *s)
                    .unwrap();
                ScoredCandidate {
                    index,
                    score: 100.0,
                    phonetic: false,
                }
            })
            .collect()
    }

    #[test]
    fn test_ties_keep_scan_order() {
        let store = store();
        let recency = RecencySet::default();
        let ctx = RankContext {
            preceding_role: None,
            modal_verb_present: false,
            recency: &recency,
        };
        let ranked = rank(&store, scored(&store, &["bildest", "bild", "bilden"]), &ctx, 5);
        let forms: Vec<&str> = ranked.iter().map(|p| p.display_form.as_str()).collect();
        assert_eq!(forms, vec!["bildest", "Bild", "bilden"]);
    }

    #[test]
    fn test_modal_boost_dominates_agreement() {
        let store = store();
        let recency = RecencySet::default();
        let ctx = RankContext {
            preceding_role: Some("ich"),
            modal_verb_present: true,
            recency: &recency,
        };
        let ranked = rank(&store, scored(&store, &["bilde", "bilden"]), &ctx, 5);
        assert_eq!(ranked[0].display_form, "bilden");
        assert_eq!(ranked[0].form_type, FormType::Base);
        assert!(ranked[0].score - ranked[1].score >= 50.0);
    }

    #[test]
    fn test_agreement_boost() {
        let store = store();
        let recency = RecencySet::default();
        let ctx = RankContext {
            preceding_role: Some("du"),
            modal_verb_present: false,
            recency: &recency,
        };
        let ranked = rank(&store, scored(&store, &["bild", "bildest"]), &ctx, 5);
        assert_eq!(ranked[0].display_form, "bildest");
        assert_eq!(ranked[0].score, 300.0);
    }

    #[test]
    fn test_recency_boost_uses_headword() {
        let store = store();
        let mut recency = RecencySet::default();
        recency.record("Bild");
        let ctx = RankContext {
            preceding_role: None,
            modal_verb_present: false,
            recency: &recency,
        };
        let ranked = rank(&store, scored(&store, &["bildest", "bild"]), &ctx, 5);
        assert_eq!(ranked[0].display_form, "Bild");
        assert_eq!(ranked[0].score, 150.0);
    }

    #[test]
    fn test_dedup_by_display_and_cap() {
        let store = store();
        let recency = RecencySet::default();
        let ctx = RankContext {
            preceding_role: None,
            modal_verb_present: false,
            recency: &recency,
        };
        // "bilden" is both the infinitive and two conjugated forms, "bildet" twice
        let all: Vec<ScoredCandidate> = (0..store.candidates().len())
            .map(|index| ScoredCandidate {
                index,
                score: 100.0,
                phonetic: false,
            })
            .collect();
        let ranked = rank(&store, all.clone(), &ctx, 50);
        let unique: HashSet<String> = ranked.iter().map(|p| p.display_form.to_lowercase()).collect();
        assert_eq!(unique.len(), ranked.len());
        assert!(ranked.len() < store.candidates().len());

        assert_eq!(rank(&store, all, &ctx, 2).len(), 2);
    }
}
