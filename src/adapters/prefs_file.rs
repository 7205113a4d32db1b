use crate::domain::model::Preferences;
use crate::domain::ports::{ConfigProvider, PreferencesStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// The two persisted preferences as one small TOML file on disk.
pub struct TomlPreferencesStore {
    path: PathBuf,
}

impl TomlPreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.prefs_path())
    }
}

#[async_trait]
impl PreferencesStore for TomlPreferencesStore {
    async fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no preferences file yet, using defaults");
            return Ok(Preferences::default());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        let prefs = toml::from_str(&raw)?;
        Ok(prefs)
    }

    async fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let encoded = toml::to_string_pretty(prefs)?;
        std::fs::write(&self.path, encoded)?;
        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}
