use leksi_types::ContextSignal;

use crate::language::Language;

const CLAUSE_BREAKS: &[char] = &['.', '!', '?', ';', ':', ','];

/// Derive ranking hints from the text in front of the cursor.
///
/// Only the current clause is considered. The word still being typed (no
/// whitespace after it yet) is not part of the context.
pub fn classify_context(text_before_cursor: &str, language: &dyn Language) -> ContextSignal {
    let clause = text_before_cursor
        .rfind(CLAUSE_BREAKS)
        .map(|i| &text_before_cursor[i + 1..])
        .unwrap_or(text_before_cursor);

    let mut words: Vec<String> = clause
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .collect();

    let typing = !clause.ends_with(char::is_whitespace);
    if typing {
        words.pop();
    }
    words.retain(|w| !w.is_empty());

    ContextSignal {
        preceding_role: words
            .last()
            .and_then(|w| language.pronoun_role(w))
            .map(str::to_string),
        modal_verb_present: words.iter().any(|w| language.is_modal_verb(w)),
    }
}
