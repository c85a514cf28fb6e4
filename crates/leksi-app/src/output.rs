use kanal::AsyncReceiver;
use leksi_types::{AppEvent, InflectionHint, InflectionKind, Prediction, SearchHit};

/// Print everything the event loop sends until the channel closes or `Quit`
pub async fn output_loop(app_to_output_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_output_rx.recv().await {
        match event {
            AppEvent::ShowPredictions(predictions) => {
                for line in format_predictions(&predictions) {
                    println!("{line}");
                }
            }
            AppEvent::ShowSearchResults(hits) => {
                for line in format_search_results(&hits) {
                    println!("{line}");
                }
            }
            AppEvent::StatusUpdate(status) => println!("{status}"),
            AppEvent::BackendReady => {
                println!("Ready. Commands: :search [direction] <word>, :toggle <feature>, :accept <n|word>, :lang <code>, :features, :quit")
            }
            AppEvent::Quit => break,
            other => tracing::debug!("Output ignores {:?}", std::mem::discriminant(&other)),
        }
    }
    Ok(())
}

pub fn format_predictions(predictions: &[Prediction]) -> Vec<String> {
    if predictions.is_empty() {
        return vec!["  (no suggestions)".to_string()];
    }
    predictions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let role = p.role.as_deref().map(|r| format!(" [{r}]")).unwrap_or_default();
            format!("  {}. {}{} - {}", i + 1, p.display_form, role, p.translation_label)
        })
        .collect()
}

pub fn format_search_results(hits: &[SearchHit]) -> Vec<String> {
    if hits.is_empty() {
        return vec!["  (no matches)".to_string()];
    }
    hits.iter()
        .map(|hit| {
            let entry = &hit.entry;
            let translation = entry.translation.as_deref().unwrap_or("?");
            match &hit.inflection_hint {
                Some(hint) => format!("  {} - {} ({})", entry.headword, translation, describe(hint)),
                None => format!("  {} - {}", entry.headword, translation),
            }
        })
        .collect()
}

fn describe(hint: &InflectionHint) -> String {
    match hint.kind {
        InflectionKind::Plural => format!("plural: {}", hint.form),
        InflectionKind::Conjugation | InflectionKind::CaseForm => {
            format!("{}: {}", hint.detail, hint.form)
        }
        InflectionKind::Irregular | InflectionKind::RegularSuffix => {
            format!("{} via {}", hint.form, hint.detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use leksi_types::{DictionaryEntry, EntryId, FormType, PartOfSpeech};

    fn entry() -> Arc<DictionaryEntry> {
        Arc::new(DictionaryEntry {
            id: EntryId::new("nounbank", "familie"),
            headword: "Familie".into(),
            translation: Some("familie".into()),
            part_of_speech: PartOfSpeech::Noun,
            gender: None,
            conjugations: Vec::new(),
            cases: Vec::new(),
            plural: Some("die Familien".into()),
            comparison: None,
            examples: Vec::new(),
            audio: None,
        })
    }

    #[test]
    fn test_search_line_shows_inflection() {
        let hits = vec![SearchHit {
            entry: entry(),
            inflection_hint: Some(InflectionHint {
                kind: InflectionKind::Plural,
                detail: "plural".into(),
                form: "familien".into(),
            }),
        }];
        assert_eq!(
            format_search_results(&hits),
            vec!["  Familie - familie (plural: familien)"]
        );
    }

    #[test]
    fn test_prediction_lines_are_numbered() {
        let predictions = vec![Prediction {
            display_form: "Familien".into(),
            translation_label: "familie (Familie)".into(),
            entry: entry(),
            form_type: FormType::Plural,
            role: None,
            score: 120.0,
        }];
        assert_eq!(
            format_predictions(&predictions),
            vec!["  1. Familien - familie (Familie)"]
        );
        assert_eq!(format_predictions(&[]), vec!["  (no suggestions)"]);
    }
}
