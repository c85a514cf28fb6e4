use std::sync::Arc;

use leksi_config::Config;
use leksi_core::LexiconSession;
use leksi_core::prefs::PreferenceStore;
use leksi_types::Prediction;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub session: RwLock<LexiconSession>,
    pub prefs: Arc<dyn PreferenceStore>,
    /// Suggestions last shown, for accepting by number
    pub last_predictions: RwLock<Vec<Prediction>>,
    /// Text behind the shown suggestions, re-run when the feature set changes
    pub last_input: RwLock<Option<String>>,
}

impl AppState {
    pub fn new(config: Config, session: LexiconSession, prefs: Arc<dyn PreferenceStore>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            session: RwLock::new(session),
            prefs,
            last_predictions: RwLock::new(Vec::new()),
            last_input: RwLock::new(None),
        }
    }
}
