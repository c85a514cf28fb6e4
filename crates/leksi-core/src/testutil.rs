//! Small German-flavoured language used by unit tests

use crate::language::Language;

pub(crate) struct TestLanguage;

impl Language for TestLanguage {
    fn language_code(&self) -> &str {
        "de"
    }

    fn display_name(&self) -> &str {
        "Test German"
    }

    fn person_labels(&self) -> &[&'static str] {
        &["ich", "du", "er/sie/es", "wir", "ihr", "sie/Sie"]
    }

    fn phonetic_rules(&self) -> &[(&'static str, &'static str)] {
        &[("v", "f"), ("ph", "f"), ("ck", "k"), ("ie", "i")]
    }

    fn articles(&self) -> &[&'static str] {
        &["die ", "der ", "das ", "den ", "dem ", "des "]
    }

    fn modal_verbs(&self) -> &[&'static str] {
        &["kann", "muss", "will"]
    }

    fn pronoun_roles(&self) -> &[(&'static str, &'static str)] {
        &[("ich", "ich"), ("du", "du"), ("er", "er/sie/es"), ("wir", "wir")]
    }

    fn irregular_forms(&self) -> &[(&'static str, &'static str)] {
        &[("war", "sein"), ("ging", "gehen")]
    }

    fn case_names(&self) -> &[&'static str] {
        &["nominativ", "akkusativ", "dativ", "genitiv"]
    }

    fn citation_endings(&self) -> &[&'static str] {
        &["", "en", "e"]
    }

    fn basic_features(&self) -> &[&'static str] {
        &["grammar_presens", "grammar_plural"]
    }
}
