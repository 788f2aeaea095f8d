use std::sync::{Arc, RwLock};

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::LoadOutcome;
use crate::readers::DatasetLoader;

/// Process-wide cache for the loaded datasets.
///
/// The outcome is computed once on first request and handed out as a shared
/// read-only `Arc`; nothing mutates it after that. `invalidate` drops the
/// cached outcome so the next request reloads from the source files - there
/// is no automatic invalidation.
pub struct DatasetStore {
    config: AppConfig,
    cached: RwLock<Option<Arc<LoadOutcome>>>,
}

impl DatasetStore {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            cached: RwLock::new(None),
        }
    }

    pub async fn get_or_load(&self) -> Result<Arc<LoadOutcome>> {
        if let Some(outcome) = self.cached.read().ok().and_then(|guard| guard.clone()) {
            return Ok(outcome);
        }

        // Load outside the lock; a racing loader just does redundant work
        let outcome = Arc::new(
            DatasetLoader::new()
                .load_all(self.config.country_files())
                .await?,
        );

        if let Ok(mut guard) = self.cached.write() {
            *guard = Some(outcome.clone());
        }
        Ok(outcome)
    }

    /// Drop the cached outcome; the next `get_or_load` re-reads the files.
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.cached.write() {
            *guard = None;
        }
    }
}
