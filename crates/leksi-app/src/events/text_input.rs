use std::sync::Arc;

use kanal::AsyncSender;
use leksi_core::debounce::Debouncer;
use leksi_types::AppEvent;

use crate::state::AppState;

/// Schedule a suggestion pass; a newer keystroke within the delay replaces it
pub fn handle_text_input(
    state: Arc<AppState>,
    text: String,
    debouncer: &mut Debouncer,
    output_tx: AsyncSender<AppEvent>,
) {
    debouncer.schedule(async move {
        let predictions = state.session.read().await.predict_in_context(&text);
        tracing::debug!("{} suggestions for '{}'", predictions.len(), text);

        *state.last_predictions.write().await = predictions.clone();
        if let Err(e) = output_tx.send(AppEvent::ShowPredictions(predictions)).await {
            tracing::error!("Failed to send suggestions: {}", e);
        }
    });
}
