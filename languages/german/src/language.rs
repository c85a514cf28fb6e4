use leksi_core::Language;

use crate::irregular::IRREGULAR_FORMS;

/// German as the source language
#[derive(Debug, Clone, Copy, Default)]
pub struct German;

impl German {
    pub fn new() -> Self {
        Self
    }
}

impl Language for German {
    fn language_code(&self) -> &str {
        "de"
    }

    fn display_name(&self) -> &str {
        "Deutsch"
    }

    fn person_labels(&self) -> &[&'static str] {
        &["ich", "du", "er/sie/es", "wir", "ihr", "sie/Sie"]
    }

    fn phonetic_rules(&self) -> &[(&'static str, &'static str)] {
        &[
            ("v", "f"),
            ("ph", "f"),
            ("th", "t"),
            ("dt", "t"),
            ("tt", "t"),
            ("ck", "k"),
            ("tz", "z"),
            ("ie", "i"),
            ("ah", "a"),
            ("eh", "e"),
            ("ai", "ei"),
            ("äu", "eu"),
            ("ä", "e"),
            ("ß", "ss"),
            ("qu", "kw"),
            ("chs", "x"),
        ]
    }

    fn articles(&self) -> &[&'static str] {
        &[
            "die ", "der ", "das ", "den ", "dem ", "des ", "ein ", "eine ", "einer ", "einem ",
            "einen ", "eines ",
        ]
    }

    fn modal_verbs(&self) -> &[&'static str] {
        &[
            "kann", "kannst", "können", "könnt", "konnte", "konntest", "konnten",
            "muss", "musst", "müssen", "müsst", "musste", "mussten",
            "will", "willst", "wollen", "wollt", "wollte", "wollten",
            "soll", "sollst", "sollen", "sollt", "sollte", "sollten",
            "darf", "darfst", "dürfen", "dürft", "durfte", "durften",
            "mag", "magst", "mögen", "möchte", "möchtest", "möchten",
            "werde", "wirst", "wird", "werden", "werdet",
        ]
    }

    fn pronoun_roles(&self) -> &[(&'static str, &'static str)] {
        &[
            ("ich", "ich"),
            ("du", "du"),
            ("er", "er/sie/es"),
            ("es", "er/sie/es"),
            ("man", "er/sie/es"),
            ("wir", "wir"),
            ("ihr", "ihr"),
            // lowercased, so formal "Sie" and plural "sie" collide
            ("sie", "sie/Sie"),
        ]
    }

    fn irregular_forms(&self) -> &[(&'static str, &'static str)] {
        IRREGULAR_FORMS
    }

    fn case_names(&self) -> &[&'static str] {
        &["nominativ", "akkusativ", "dativ", "genitiv"]
    }

    fn citation_endings(&self) -> &[&'static str] {
        &["", "e", "en", "n"]
    }

    fn basic_features(&self) -> &[&'static str] {
        &["grammar_presens", "grammar_plural"]
    }
}
