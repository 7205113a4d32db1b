use crate::domain::model::{Gender, Preferences, Profile};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Remote source of random person profiles.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch(&self, gender: Gender) -> Result<Profile>;
}

/// Persistence for the two user preferences. Loaded once at startup,
/// written on the user actions that change them.
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    async fn load(&self) -> Result<Preferences>;
    async fn save(&self, prefs: &Preferences) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn prefs_path(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
