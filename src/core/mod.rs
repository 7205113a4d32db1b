pub mod engine;
pub mod round;

pub use crate::domain::model::{DisplayMode, Gender, Preferences, Profile};
pub use crate::domain::ports::{ConfigProvider, PreferencesStore, ProfileSource};
pub use crate::utils::error::Result;
