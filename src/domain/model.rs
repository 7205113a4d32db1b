use serde::{Deserialize, Serialize};

/// Gender filter applied when requesting a profile. Persisted under the
/// short codes `Any` / `F` / `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Any,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Gender {
    /// Cycles in the fixed order Any -> F -> M -> Any.
    pub fn next(self) -> Self {
        match self {
            Self::Any => Self::Female,
            Self::Female => Self::Male,
            Self::Male => Self::Any,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Female => "F",
            Self::Male => "M",
        }
    }

    /// Query-parameter value for the remote API; `None` means no filter.
    pub fn api_param(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Female => Some("female"),
            Self::Male => Some("male"),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One random person as reported by the remote source. The age is the only
/// field a round cannot do without; name and picture are display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: Option<String>,
    pub age: u32,
    pub image_url: Option<String>,
}

/// The two user preferences that survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub high_score: u32,
    #[serde(default)]
    pub gender: Gender,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            high_score: 0,
            gender: Gender::Any,
        }
    }
}

/// Confirmation descriptor handed to the frontend before a hint is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintPrompt {
    pub cost: u32,
}

/// Inclusive age range revealed by a hint: the target's decade widened by
/// 12 on each side. Signed because low ages push the lower bound below 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintRange {
    pub low: i32,
    pub high: i32,
}

/// What the profile panel is currently showing. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Photo,
    Age,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Photo => Self::Age,
            Self::Age => Self::Photo,
        }
    }
}
