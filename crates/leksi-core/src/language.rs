/// Source-language tables consumed by the lexical store, the phonetic
/// normalizer, the inflection resolver and the context classifier
pub trait Language: Send + Sync {
    /// Language identifier (ISO 639-1 code: "de", "es", "fr", etc.)
    fn language_code(&self) -> &str;

    /// Human readable name
    fn display_name(&self) -> &str;

    /// Person labels in grammatical order, used for array-form conjugation tables
    fn person_labels(&self) -> &[&'static str];

    /// Ordered spelling equivalence pairs for sound-alike matching
    fn phonetic_rules(&self) -> &[(&'static str, &'static str)];

    /// Determiners stripped from plural and declined forms, each with its trailing space
    fn articles(&self) -> &[&'static str];

    /// Lowercased modal verb forms that imply an infinitive later in the clause
    fn modal_verbs(&self) -> &[&'static str];

    /// Lowercased pronoun -> person label of the conjugation tables
    fn pronoun_roles(&self) -> &[(&'static str, &'static str)];

    /// Lowercased irregular surface form -> lowercased headword
    fn irregular_forms(&self) -> &[(&'static str, &'static str)];

    /// Noun case names in grammatical order
    fn case_names(&self) -> &[&'static str] {
        &[]
    }

    /// Endings appended to a stripped stem to rebuild candidate citation forms
    fn citation_endings(&self) -> &[&'static str] {
        &[""]
    }

    /// Feature ids enabled when neither a stored preference nor a preset exists
    fn basic_features(&self) -> &[&'static str] {
        &[]
    }

    /// Markers in front of translations that are not part of the typed word
    fn translation_markers(&self) -> &[&'static str] {
        &["å "]
    }

    fn is_vowel(&self, c: char) -> bool {
        "aeiouyäöüéèêëáíóúàâîïôûùœæøå".contains(c)
    }

    fn is_modal_verb(&self, word: &str) -> bool {
        self.modal_verbs().contains(&word)
    }

    fn pronoun_role(&self, word: &str) -> Option<&'static str> {
        self.pronoun_roles()
            .iter()
            .find(|(pronoun, _)| *pronoun == word)
            .map(|(_, role)| *role)
    }

    fn irregular_base(&self, form: &str) -> Option<&'static str> {
        self.irregular_forms()
            .iter()
            .find(|(irregular, _)| *irregular == form)
            .map(|(_, base)| *base)
    }

    /// Remove one leading article (case-insensitive) from a form
    fn strip_article<'a>(&self, form: &'a str) -> &'a str {
        let trimmed = form.trim();
        for article in self.articles() {
            if let Some(head) = trimmed.get(..article.len()) {
                if head.eq_ignore_ascii_case(article) && trimmed.len() > article.len() {
                    return trimmed[article.len()..].trim_start();
                }
            }
        }
        trimmed
    }

    /// Approximate citation forms of a regularly inflected word.
    ///
    /// Strips a single trailing vowel + consonant suffix and appends each
    /// of [`Language::citation_endings`] to the stem. Words of four
    /// characters or fewer are left alone.
    fn citation_forms(&self, word: &str) -> Vec<String> {
        let lower = word.trim().to_lowercase();
        let chars: Vec<char> = lower.chars().collect();
        if chars.len() <= 4 {
            return Vec::new();
        }

        let last = chars[chars.len() - 1];
        let before = chars[chars.len() - 2];
        if !(self.is_vowel(before) && last.is_alphabetic() && !self.is_vowel(last)) {
            return Vec::new();
        }

        let stem: String = chars[..chars.len() - 2].iter().collect();
        self.citation_endings()
            .iter()
            .map(|ending| format!("{stem}{ending}"))
            .filter(|form| *form != lower)
            .collect()
    }
}
