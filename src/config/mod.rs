use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "guess-my-age")]
#[command(about = "Guess the age of a random person fetched from a public API")]
pub struct CliConfig {
    #[arg(long, default_value = "https://randomuser.me/api/")]
    pub api_endpoint: String,

    #[arg(long, default_value = "./guess_my_age_prefs.toml")]
    pub prefs_path: String,

    #[arg(long, default_value = "10")]
    pub request_timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn prefs_path(&self) -> &str {
        &self.prefs_path
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("prefs_path", &self.prefs_path)?;
        validate_range("request_timeout_seconds", self.request_timeout_seconds, 1, 300)?;
        Ok(())
    }
}
