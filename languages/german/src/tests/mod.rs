mod phonetic;

use std::sync::Arc;

use leksi_config::Config;
use leksi_core::LexiconSession;
use serde_json::{Value, json};

use crate::German;

pub(crate) fn fixture() -> Value {
    json!({
        "_metadata": { "languageCode": "de", "languageName": "Tysk" },
        "verbbank": {
            "sein": {
                "word": "sein",
                "translation": "å være",
                "conjugations": {
                    "presens": {
                        "ich": "bin", "du": "bist", "er/sie/es": "ist",
                        "wir": "sind", "ihr": "seid", "sie/Sie": "sind"
                    }
                }
            },
            "bilden": {
                "word": "bilden",
                "translation": "å danne",
                "conjugations": { "presens": ["bilde", "bildest", "bildet", "bilden", "bildet", "bilden"] }
            },
            "bitten": {
                "word": "bitten",
                "translation": "å be",
                "conjugations": { "presens": ["bitte", "bittest", "bittet", "bitten", "bittet", "bitten"] }
            }
        },
        "nounbank": {
            "familie": {
                "word": "Familie",
                "translation": "familie",
                "plural": "die Familien",
                "cases": { "dativ": { "bestemt": "der Familie", "ubestemt": "einer Familie" } }
            },
            "bild": {
                "word": "Bild",
                "translation": "bilde",
                "plural": "die Bilder",
                "cases": {
                    "dativ": { "bestemt": "dem Bild", "ubestemt": "einem Bild" },
                    "genitiv": { "bestemt": "des Bildes", "ubestemt": "eines Bildes" }
                }
            },
            "vogel": {
                "word": "Vogel",
                "translation": "fugl",
                "plural": "die Vögel",
                "cases": { "dativ": { "bestemt": "dem Vogel", "ubestemt": "einem Vogel" } }
            }
        }
    })
}

pub(crate) fn loaded_session() -> LexiconSession {
    let mut session = LexiconSession::new(Arc::new(German), &Config::default());
    session.on_dictionary_reload(&fixture());
    session
}
