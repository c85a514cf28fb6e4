use leksi_core::Language;

/// French as the source language
#[derive(Debug, Clone, Copy, Default)]
pub struct French;

impl Language for French {
    fn language_code(&self) -> &str {
        "fr"
    }

    fn display_name(&self) -> &str {
        "Français"
    }

    fn person_labels(&self) -> &[&'static str] {
        &["je", "tu", "il/elle/on", "nous", "vous", "ils/elles"]
    }

    fn phonetic_rules(&self) -> &[(&'static str, &'static str)] {
        &[
            ("ph", "f"),
            ("qu", "k"),
            ("eau", "o"),
            ("au", "o"),
            ("ai", "è"),
            ("ei", "è"),
            ("ç", "s"),
            ("ss", "s"),
            ("ll", "l"),
            ("mm", "m"),
            ("nn", "n"),
            ("tt", "t"),
            ("en", "an"),
            ("y", "i"),
        ]
    }

    fn articles(&self) -> &[&'static str] {
        &["le ", "la ", "les ", "l'", "un ", "une ", "des "]
    }

    fn modal_verbs(&self) -> &[&'static str] {
        &[
            "peux", "peut", "pouvons", "pouvez", "peuvent", "pouvait", "pourrait",
            "veux", "veut", "voulons", "voulez", "veulent", "voudrais", "voudrait",
            "dois", "doit", "devons", "devez", "doivent", "devrait",
            "sais", "sait", "savons", "savez", "savent",
            "vais", "vas", "va", "allons", "allez", "vont",
        ]
    }

    fn pronoun_roles(&self) -> &[(&'static str, &'static str)] {
        &[
            ("je", "je"),
            ("tu", "tu"),
            ("il", "il/elle/on"),
            ("elle", "il/elle/on"),
            ("on", "il/elle/on"),
            ("nous", "nous"),
            ("vous", "vous"),
            ("ils", "ils/elles"),
            ("elles", "ils/elles"),
        ]
    }

    fn irregular_forms(&self) -> &[(&'static str, &'static str)] {
        &[
            ("suis", "être"),
            ("es", "être"),
            ("est", "être"),
            ("sommes", "être"),
            ("êtes", "être"),
            ("sont", "être"),
            ("étais", "être"),
            ("était", "être"),
            ("été", "être"),
            ("ai", "avoir"),
            ("as", "avoir"),
            ("a", "avoir"),
            ("avons", "avoir"),
            ("avez", "avoir"),
            ("ont", "avoir"),
            ("eu", "avoir"),
            ("vais", "aller"),
            ("vas", "aller"),
            ("va", "aller"),
            ("vont", "aller"),
            ("allé", "aller"),
            ("fais", "faire"),
            ("fait", "faire"),
            ("faisons", "faire"),
            ("faites", "faire"),
            ("font", "faire"),
            ("peux", "pouvoir"),
            ("peut", "pouvoir"),
            ("peuvent", "pouvoir"),
            ("pu", "pouvoir"),
            ("veux", "vouloir"),
            ("veut", "vouloir"),
            ("veulent", "vouloir"),
            ("voulu", "vouloir"),
            ("dois", "devoir"),
            ("doit", "devoir"),
            ("doivent", "devoir"),
            ("dû", "devoir"),
            ("dit", "dire"),
            ("dites", "dire"),
            ("disent", "dire"),
            ("vois", "voir"),
            ("voit", "voir"),
            ("vu", "voir"),
            ("prends", "prendre"),
            ("prend", "prendre"),
            ("pris", "prendre"),
            ("viens", "venir"),
            ("vient", "venir"),
            ("venu", "venir"),
            ("sais", "savoir"),
            ("sait", "savoir"),
            ("su", "savoir"),
        ]
    }

    fn citation_endings(&self) -> &[&'static str] {
        &["", "er", "ir", "re", "e"]
    }

    fn basic_features(&self) -> &[&'static str] {
        &["grammar_presens", "grammar_plural"]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use leksi_config::Config;
    use leksi_core::LexiconSession;
    use leksi_core::phonetic::normalize;
    use leksi_types::{InflectionKind, SearchDirection};
    use serde_json::json;

    use super::*;

    fn session() -> LexiconSession {
        let mut session = LexiconSession::new(Arc::new(French), &Config::default());
        session.on_dictionary_reload(&json!({
            "verbbank": {
                "parler": {
                    "word": "parler",
                    "translation": "å snakke",
                    "conjugations": {
                        "presens": {
                            "je": "parle", "tu": "parles", "il/elle/on": "parle",
                            "nous": "parlons", "vous": "parlez", "ils/elles": "parlent"
                        }
                    }
                },
                "finir": { "word": "finir", "translation": "å avslutte" },
                "etre": { "word": "être", "translation": "å være" }
            },
            "nounbank": {
                "chateau": { "word": "château", "translation": "slott", "plural": "les châteaux" }
            }
        }));
        session
    }

    #[test]
    fn test_sound_alike_spellings() {
        assert_eq!(normalize("photo", &French), normalize("foto", &French));
        assert_eq!(normalize("bateau", &French), normalize("bato", &French));
        assert_eq!(normalize("lait", &French), normalize("lèt", &French));
    }

    #[test]
    fn test_rule_table_snapshot() {
        let fixtures = [
            ("photo", "foto"),
            ("château", "chato"),
            ("beau", "bo"),
            ("maison", "meson"),
            ("neige", "nege"),
            ("garçon", "garson"),
            ("poisson", "poison"),
            ("femme", "feme"),
            ("paume", "pome"),
            ("lettre", "letre"),
            ("enfant", "anfant"),
            ("stylo", "stilo"),
            ("quelque", "kelke"),
        ];
        for (input, expected) in fixtures {
            assert_eq!(normalize(input, &French), expected, "{input}");
        }
    }

    #[test]
    fn test_pronoun_keyed_table_follows_label_order() {
        let session = session();
        let predictions = session.predict("parl", Some("nous"), false, 5);
        assert_eq!(predictions[0].display_form, "parlons");
        assert_eq!(predictions[0].role.as_deref(), Some("nous"));
    }

    #[test]
    fn test_search_by_any_form() {
        let session = session();
        let hits = session.search("finissez", SearchDirection::SourceToTarget);
        assert!(hits.is_empty());

        let hits = session.search("finis", SearchDirection::SourceToTarget);
        assert_eq!(hits[0].entry.headword, "finir");

        let hits = session.search("sommes", SearchDirection::SourceToTarget);
        assert_eq!(hits[0].entry.headword, "être");
        assert_eq!(
            hits[0].inflection_hint.as_ref().map(|h| h.kind),
            Some(InflectionKind::Irregular)
        );

        let hits = session.search("châteaux", SearchDirection::SourceToTarget);
        assert_eq!(hits[0].entry.headword, "château");
    }

    #[test]
    fn test_elided_article() {
        assert_eq!(French.strip_article("l'homme"), "homme");
        assert_eq!(French.strip_article("les hommes"), "hommes");
    }
}
