use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Preferences file is not valid TOML: {0}")]
    PrefsParseError(#[from] toml::de::Error),

    #[error("Could not encode preferences: {0}")]
    PrefsEncodeError(#[from] toml::ser::Error),

    #[error("Profile data error: {message}")]
    ProfileDataError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Config,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GameError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GameError::ApiError(_) => ErrorCategory::Network,
            GameError::IoError(_)
            | GameError::PrefsParseError(_)
            | GameError::PrefsEncodeError(_) => ErrorCategory::Storage,
            GameError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            GameError::SerializationError(_) | GameError::ProfileDataError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤可以重試，不算嚴重
            GameError::ApiError(_)
            | GameError::ProfileDataError { .. }
            | GameError::SerializationError(_) => ErrorSeverity::Medium,
            GameError::PrefsParseError(_) => ErrorSeverity::Low,
            GameError::PrefsEncodeError(_) | GameError::IoError(_) => ErrorSeverity::High,
            GameError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GameError::ApiError(_) => {
                "Could not reach the profile service. Check your network connection.".to_string()
            }
            GameError::ProfileDataError { message } => {
                format!("The profile service sent something unusable: {}", message)
            }
            GameError::SerializationError(_) => {
                "The profile service answered with data this game does not understand.".to_string()
            }
            GameError::PrefsParseError(_) => {
                "The preferences file is damaged; defaults will be used.".to_string()
            }
            GameError::PrefsEncodeError(_) | GameError::IoError(_) => {
                "Could not save your preferences to disk.".to_string()
            }
            GameError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GameError::ApiError(_) => "Type 'retry' to request a new profile.".to_string(),
            GameError::ProfileDataError { .. } | GameError::SerializationError(_) => {
                "Type 'retry'; the service returns a different record each time.".to_string()
            }
            GameError::PrefsParseError(_) => {
                "Delete the preferences file to silence this warning.".to_string()
            }
            GameError::PrefsEncodeError(_) | GameError::IoError(_) => {
                "Check that the preferences path is writable (--prefs-path).".to_string()
            }
            GameError::InvalidConfigValueError { field, .. } => {
                format!("Fix the --{} argument and start again.", field.replace('_', "-"))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
