pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{RandomUserClient, TomlPreferencesStore};
pub use crate::app::ConsoleApp;
pub use crate::config::CliConfig;
pub use crate::core::engine::{GameEngine, GuessReport, Phase};
pub use crate::core::round::{GuessOutcome, Round, RoundState};
pub use crate::domain::model::{DisplayMode, Gender, Preferences, Profile};
pub use crate::utils::error::{GameError, Result};
