use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use leksi_core::debounce::Debouncer;
use leksi_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod accept;
pub mod features;
pub mod search;
pub mod switch_language;
pub mod text_input;

use accept::handle_accept;
use features::{handle_feature_list, handle_feature_toggle};
use search::handle_search;
use switch_language::handle_language_switch;
use text_input::handle_text_input;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    output_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut debouncer = {
        let config = state.config.read().await;
        Debouncer::from_config(&config.prediction)
    };

    output_tx.send(AppEvent::BackendReady).await?;
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = input_rx.recv() => event?,
        };

        if matches!(event, AppEvent::Quit) {
            // let a pending suggestion land before the printer stops
            tokio::time::sleep(debouncer.delay() * 2).await;
            output_tx.send(AppEvent::Quit).await?;
            break;
        }

        handle_events(state.clone(), &mut debouncer, &output_tx, event).await?;
    }

    debouncer.cancel();
    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

async fn handle_events(
    state: Arc<AppState>,
    debouncer: &mut Debouncer,
    output_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: {} chars", text.len());
            *state.last_input.write().await = Some(text.clone());
            handle_text_input(state, text, debouncer, output_tx.clone());
        }
        AppEvent::Search { query, direction } => {
            handle_search(&state, &query, direction, output_tx).await?;
        }
        AppEvent::ToggleFeature(id) => {
            handle_feature_toggle(&state, &id, output_tx).await?;
            // shown suggestions may hold forms of the toggled feature
            let last_input = state.last_input.read().await.clone();
            if let Some(text) = last_input {
                handle_text_input(state, text, debouncer, output_tx.clone());
            }
        }
        AppEvent::ListFeatures => {
            handle_feature_list(&state, output_tx).await?;
        }
        AppEvent::AcceptSuggestion(choice) => {
            handle_accept(&state, &choice, output_tx).await?;
        }
        AppEvent::SwitchLanguage(code) => {
            debouncer.cancel();
            handle_language_switch(&state, &code, output_tx).await?;
        }
        AppEvent::ShowPredictions(_)
        | AppEvent::ShowSearchResults(_)
        | AppEvent::StatusUpdate(_)
        | AppEvent::BackendReady
        | AppEvent::Quit => {
            // output-only events
        }
    }

    Ok(())
}
