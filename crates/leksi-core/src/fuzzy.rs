//! Query-against-candidate scoring and candidate discovery.
//!
//! Scores are only comparable within one query. Each score comes from the
//! first applicable tier (prefix, substring, anchored edit distance); tiers
//! never add up.

use crate::phonetic::PhoneticNormalizer;
use crate::store::{LexicalStore, prefix_key};

/// Below this query length neither the edit-distance tier nor the phonetic
/// fallback scan is attempted
pub const MIN_FUZZY_LEN: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Tiers {
    prefix: f64,
    length_ratio_bonus: f64,
    substring: f64,
    edit: f64,
}

const LITERAL: Tiers = Tiers {
    prefix: 100.0,
    length_ratio_bonus: 50.0,
    substring: 50.0,
    edit: 30.0,
};

// Every phonetic tier stays below its literal counterpart, bonus included
const PHONETIC: Tiers = Tiers {
    prefix: 70.0,
    length_ratio_bonus: 25.0,
    substring: 35.0,
    edit: 20.0,
};

const EDIT_PENALTY: f64 = 5.0;

/// Score a lowercased query against a lowercased candidate surface form
pub fn score(query: &str, candidate: &str) -> f64 {
    tiered_score(query, candidate, LITERAL)
}

/// Same tiers over phonetically normalized forms, with lower constants
pub fn phonetic_score(query_canonical: &str, candidate_canonical: &str) -> f64 {
    tiered_score(query_canonical, candidate_canonical, PHONETIC)
}

/// Edits tolerated for a query of `query_len` characters
pub fn allowed_distance(query_len: usize) -> usize {
    if query_len <= 4 { 1 } else { 2 }
}

fn tiered_score(query: &str, candidate: &str, tiers: Tiers) -> f64 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let query_len = query.chars().count();

    if candidate.starts_with(query) {
        let ratio = query_len as f64 / candidate.chars().count() as f64;
        return tiers.prefix + ratio * tiers.length_ratio_bonus;
    }

    if candidate.contains(query) {
        return tiers.substring;
    }

    if query_len < MIN_FUZZY_LEN {
        return 0.0;
    }

    let allowed = allowed_distance(query_len);
    let slice: String = candidate.chars().take(query_len + allowed).collect();
    let distance = levenshtein(query, &slice);
    if distance <= allowed {
        tiers.edit - EDIT_PENALTY * distance as f64
    } else {
        0.0
    }
}

/// Levenshtein distance between two strings, by characters
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let last_row = levenshtein_rows(a, &b_chars);
    last_row[b_chars.len()]
}

/// Final DP row of `a` against `b`: entry `j` is the distance to `b[..j]`
fn levenshtein_rows(a: &str, b: &[char]) -> Vec<usize> {
    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for j in 1..=b.len() {
            let cost = if a_char == b[j - 1] { 0 } else { 1 };
            curr_row[j] = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row
}

/// One matched candidate, positions refer to [`LexicalStore::candidates`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: f64,
    pub phonetic: bool,
}

/// Find candidates matching `query`, in scan order.
///
/// Phase one scans only the prefix-index bucket of the query (its
/// 3-character prefix once the query has three characters, else its
/// 2-character prefix; single characters scan for plain prefix matches).
/// When that yields fewer than `wanted` hits and the query is long enough,
/// phase two scans every remaining candidate, falling back to the phonetic
/// score where the literal one is zero.
pub fn find_matches(
    store: &LexicalStore,
    normalizer: &PhoneticNormalizer,
    query: &str,
    wanted: usize,
) -> Vec<ScoredCandidate> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let candidates = store.candidates();
    let query_len = query.chars().count();
    let mut seen = vec![false; candidates.len()];
    let mut matches = Vec::new();

    let bucket_key = match query_len {
        1 => None,
        2 => prefix_key(&query, 2),
        _ => prefix_key(&query, 3),
    };

    match bucket_key {
        Some(key) => {
            for &i in store.prefix_index().get(&key) {
                let s = score(&query, &candidates[i].surface);
                if s > 0.0 {
                    seen[i] = true;
                    matches.push(ScoredCandidate {
                        index: i,
                        score: s,
                        phonetic: false,
                    });
                }
            }
        }
        None => {
            for (i, candidate) in candidates.iter().enumerate() {
                if candidate.surface.starts_with(&query) {
                    seen[i] = true;
                    matches.push(ScoredCandidate {
                        index: i,
                        score: score(&query, &candidate.surface),
                        phonetic: false,
                    });
                }
            }
        }
    }

    tracing::debug!("Prefix scan for '{}': {} matches", query, matches.len());

    if matches.len() >= wanted || query_len < MIN_FUZZY_LEN {
        return matches;
    }

    let query_canonical = normalizer.normalize(&query);
    let phonetic_forms = store.phonetic_forms();
    for (i, candidate) in candidates.iter().enumerate() {
        if seen[i] {
            continue;
        }
        let literal = score(&query, &candidate.surface);
        let (s, phonetic) = if literal > 0.0 {
            (literal, false)
        } else {
            (phonetic_score(&query_canonical, &phonetic_forms[i]), true)
        };
        if s > 0.0 {
            matches.push(ScoredCandidate {
                index: i,
                score: s,
                phonetic,
            });
        }
    }

    tracing::debug!("Full scan for '{}': {} matches", query, matches.len());
    matches
}
