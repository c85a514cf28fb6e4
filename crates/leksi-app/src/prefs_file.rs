use std::path::{Path, PathBuf};

use async_trait::async_trait;
use leksi_core::StoreError;
use leksi_core::prefs::PreferenceStore;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// Preferences kept as one JSON object on disk, rewritten on every change
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: RwLock<Map<String, Value>>,
}

impl JsonFilePreferenceStore {
    /// Open the store, starting empty when the file does not exist yet
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        let values = match tokio::fs::read_to_string(path).await {
            Ok(data) => match serde_json::from_str::<Value>(&data) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    tracing::warn!("Preferences at {} are unreadable, starting fresh", path.display());
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No preferences at {}, starting fresh", path.display());
                Map::new()
            }
            Err(e) => return Err(StoreError::IoError(e)),
        };

        Ok(Self {
            path: path.to_path_buf(),
            values: RwLock::new(values),
        })
    }

    async fn flush(&self, values: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let data = serde_json::to_string_pretty(values).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for JsonFilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value);
        self.flush(&values).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let path = std::env::temp_dir()
            .join(format!("leksi-prefs-{}", std::process::id()))
            .join("preferences.json");
        let _ = tokio::fs::remove_file(&path).await;

        let store = JsonFilePreferenceStore::open(&path).await.unwrap();
        assert!(store.get("language").await.unwrap().is_none());
        store.set("language", json!("fr")).await.unwrap();
        store.set("recent_fr", json!(["parler"])).await.unwrap();

        let reopened = JsonFilePreferenceStore::open(&path).await.unwrap();
        assert_eq!(reopened.get("language").await.unwrap(), Some(json!("fr")));
        assert_eq!(reopened.get("recent_fr").await.unwrap(), Some(json!(["parler"])));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
