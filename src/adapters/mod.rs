// Adapters layer: concrete implementations for external systems (http profile source, preferences file).

pub mod prefs_file;
pub mod random_user;

pub use prefs_file::TomlPreferencesStore;
pub use random_user::RandomUserClient;
