use kanal::AsyncSender;
use leksi_types::AppEvent;

use crate::state::AppState;

/// Record an accepted word for the recency boost.
///
/// A number picks from the last suggestion list and records its headword,
/// since the boost is keyed by headword; anything else is recorded as typed.
pub async fn handle_accept(
    state: &AppState,
    choice: &str,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let accepted = match choice.parse::<usize>() {
        Ok(n) => {
            let predictions = state.last_predictions.read().await;
            n.checked_sub(1)
                .and_then(|i| predictions.get(i))
                .map(|p| p.entry.headword.clone())
        }
        Err(_) => Some(choice.to_string()),
    };

    let Some(form) = accepted else {
        output_tx
            .send(AppEvent::StatusUpdate(format!("No suggestion number {choice}")))
            .await?;
        return Ok(());
    };

    {
        let mut session = state.session.write().await;
        session.on_recency_update(&form);
        if let Err(e) = session.persist_preferences(state.prefs.as_ref()).await {
            tracing::warn!("Failed to save recent words: {}", e);
        }
    }

    output_tx
        .send(AppEvent::StatusUpdate(format!("Accepted {form}")))
        .await?;
    Ok(())
}
