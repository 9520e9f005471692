//! Configuration stores: the trait, an in-memory map, and a JSON-file
//! directory store with one `<key>.json` file per dashboard.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

use evr_model::{EvrError, Result};

use crate::config::DashboardConfig;

/// Fallback key consulted when a dashboard has no entry of its own.
pub const DEFAULT_KEY: &str = "default";

/// Keyed storage for dashboard configuration blobs.
pub trait ConfigStore {
    fn get(&self, key: &str) -> Result<Option<DashboardConfig>>;
    fn put(&mut self, key: &str, config: &DashboardConfig) -> Result<()>;
}

/// Load the configuration for a dashboard, falling back to the shared
/// default entry and then to built-in defaults.
pub fn load_config(store: &dyn ConfigStore, dashboard_id: &str) -> Result<DashboardConfig> {
    if let Some(config) = store.get(dashboard_id)? {
        debug!(%dashboard_id, "loaded dashboard config");
        return Ok(config);
    }
    if let Some(config) = store.get(DEFAULT_KEY)? {
        debug!(%dashboard_id, "dashboard config missing, using default entry");
        return Ok(config);
    }
    debug!(%dashboard_id, "no stored config, using built-in defaults");
    Ok(DashboardConfig::default())
}

/// In-memory store, used in tests and by hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, DashboardConfig>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<DashboardConfig>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, config: &DashboardConfig) -> Result<()> {
        self.entries.insert(key.to_string(), config.clone());
        Ok(())
    }
}

/// Directory-backed store writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `base_dir`, creating the directory if
    /// needed.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl ConfigStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<DashboardConfig>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        match serde_json::from_str(&data) {
            Ok(config) => Ok(Some(config)),
            Err(error) => {
                // A corrupt entry behaves like a missing one.
                warn!(%key, path = %path.display(), %error, "unreadable config entry ignored");
                Ok(None)
            }
        }
    }

    fn put(&mut self, key: &str, config: &DashboardConfig) -> Result<()> {
        let path = self.path_for(key);
        let data = serde_json::to_string_pretty(config)
            .map_err(|e| EvrError::Message(format!("serialize config {key}: {e}")))?;
        fs::write(&path, data)?;
        debug!(%key, path = %path.display(), "wrote dashboard config");
        Ok(())
    }
}

/// Keep keys filesystem-safe without losing uniqueness for the id shapes
/// the platform uses (alphanumeric uids).
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}
