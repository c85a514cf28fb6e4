use kanal::AsyncSender;
use leksi_types::AppEvent;

use crate::languages::open_session;
use crate::state::AppState;

/// Replace the session with one for `code`; the current one keeps serving
/// until the new dictionary is loaded.
pub async fn handle_language_switch(
    state: &AppState,
    code: &str,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let code = code.trim().to_lowercase();
    if state.session.read().await.language().language_code() == code {
        output_tx
            .send(AppEvent::StatusUpdate(format!("Already using {code}")))
            .await?;
        return Ok(());
    }

    let config = state.config.read().await.clone();
    let session = match open_session(&code, &config, state.prefs.as_ref()).await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Language switch to {} failed: {}", code, e);
            output_tx
                .send(AppEvent::StatusUpdate(format!("Cannot switch to {code}: {e}")))
                .await?;
            return Ok(());
        }
    };

    if let Err(e) = session.persist_preferences(state.prefs.as_ref()).await {
        tracing::warn!("Failed to save language choice: {}", e);
    }
    let name = session.language().display_name().to_string();
    *state.session.write().await = session;
    state.last_predictions.write().await.clear();
    *state.last_input.write().await = None;

    output_tx
        .send(AppEvent::StatusUpdate(format!("Switched to {name}")))
        .await?;
    Ok(())
}
