use kanal::AsyncSender;
use leksi_types::AppEvent;

use crate::state::AppState;

pub async fn handle_feature_toggle(
    state: &AppState,
    id: &str,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let enabled = {
        let mut session = state.session.write().await;
        let enabled = session.toggle_feature(id);
        if let Err(e) = session.persist_preferences(state.prefs.as_ref()).await {
            tracing::warn!("Failed to save grammar features: {}", e);
        }
        enabled
    };

    let status = if enabled { "enabled" } else { "disabled" };
    output_tx
        .send(AppEvent::StatusUpdate(format!("{id} {status}")))
        .await?;
    Ok(())
}

pub async fn handle_feature_list(state: &AppState, output_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let lines: Vec<String> = {
        let session = state.session.read().await;
        let features = session.features();
        match session.definitions() {
            Some(definitions) => definitions
                .features
                .iter()
                .flat_map(move |(group, items)| {
                    std::iter::once(format!("{group}:")).chain(items.iter().map(move |f| {
                        let mark = if features.is_enabled(&f.id) { "x" } else { " " };
                        format!("  [{mark}] {} - {}", f.id, f.name)
                    }))
                })
                .collect(),
            None => features.ids().into_iter().map(|id| format!("  [x] {id}")).collect(),
        }
    };

    output_tx
        .send(AppEvent::StatusUpdate(lines.join("\n")))
        .await?;
    Ok(())
}
