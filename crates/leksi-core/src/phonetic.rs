use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::language::Language;

/// Upper bound on rewrite passes; every pass makes the text shortlex-smaller
/// so this is never reached with a sane rule table.
const MAX_PASSES: usize = 8;

#[derive(Debug, Clone)]
struct Rule {
    variant: Vec<char>,
    canonical: String,
}

/// Collapses sound-alike spellings into one canonical form.
///
/// Each rule pair is oriented so that the shorter member (or, at equal
/// length, the lexicographically smaller one) is canonical. Rewriting is a
/// single left-to-right scan taking the longest matching variant at each
/// position, repeated until the text stops changing, so a rewrite that
/// creates a new variant is picked up on the next pass instead of
/// depending on rule order.
#[derive(Debug, Clone, Default)]
pub struct PhoneticNormalizer {
    rules: Vec<Rule>,
}

impl PhoneticNormalizer {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        let mut rules: Vec<Rule> = pairs
            .iter()
            .filter_map(|(a, b)| {
                let (a, b) = (a.to_lowercase(), b.to_lowercase());
                if a == b {
                    return None;
                }
                let a_len = a.chars().count();
                let b_len = b.chars().count();
                let (canonical, variant) = if a_len < b_len || (a_len == b_len && a < b) {
                    (a, b)
                } else {
                    (b, a)
                };
                Some(Rule {
                    variant: variant.chars().collect(),
                    canonical,
                })
            })
            .collect();

        // Longest variant first; stable sort keeps table order among equals
        rules.sort_by(|x, y| y.variant.len().cmp(&x.variant.len()));

        Self { rules }
    }

    pub fn for_language(language: &dyn Language) -> Self {
        Self::new(language.phonetic_rules())
    }

    /// Canonical form of `text`. Total: never fails, unmapped characters pass through.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = text.to_lowercase();

        for _ in 0..MAX_PASSES {
            let next = self.rewrite_once(&current);
            if next == current {
                break;
            }
            current = next;
        }

        current.nfd().filter(|c| !is_combining_mark(*c)).collect()
    }

    fn rewrite_once(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let hit = self
                .rules
                .iter()
                .find(|rule| chars[i..].starts_with(&rule.variant));

            match hit {
                Some(rule) => {
                    out.push_str(&rule.canonical);
                    i += rule.variant.len();
                }
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }

        out
    }
}

/// Normalize `text` with the rule table of `language`
pub fn normalize(text: &str, language: &dyn Language) -> String {
    PhoneticNormalizer::for_language(language).normalize(text)
}
