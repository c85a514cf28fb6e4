use kanal::AsyncSender;
use leksi_types::{AppEvent, SearchDirection};

use crate::state::AppState;

pub async fn handle_search(
    state: &AppState,
    query: &str,
    direction: SearchDirection,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let hits = state.session.read().await.search(query, direction);
    tracing::debug!("Search '{}' ({:?}): {} hits", query, direction, hits.len());
    output_tx.send(AppEvent::ShowSearchResults(hits)).await?;
    Ok(())
}
