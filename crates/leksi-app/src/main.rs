use std::sync::Arc;

use leksi_config::Config;
use leksi_core::prefs::{self, PreferenceStore};
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod languages;
pub mod output;
pub mod prefs_file;
pub mod state;


use self::controller::AppController;
use self::languages::open_session;
use self::prefs_file::JsonFilePreferenceStore;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::new();
    let prefs: Arc<dyn PreferenceStore> =
        Arc::new(JsonFilePreferenceStore::open(&config.dictionary.preferences_path).await?);

    // last language used wins over the configured default
    let language = match prefs::get_typed::<String>(prefs.as_ref(), prefs::LANGUAGE_KEY).await {
        Ok(Some(code)) if languages::language_for(&code).is_some() => code,
        Ok(_) => config.dictionary.language.clone(),
        Err(e) => {
            tracing::warn!("Ignoring stored language: {}", e);
            config.dictionary.language.clone()
        }
    };
    tracing::info!("Starting with language {}", language);

    let session = open_session(&language, &config, prefs.as_ref()).await?;
    let state = Arc::new(AppState::new(config, session, prefs));

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}
