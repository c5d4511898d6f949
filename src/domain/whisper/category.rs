//! Whisper categories and their duration policies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidCategoryError;

/// How long a whisper stays on screen once it has appeared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationPolicy {
    /// Dismisses itself after the configured number of ticks
    Finite,
    /// Stays until the user dismisses it
    Infinite,
}

impl DurationPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Finite => "finite",
            Self::Infinite => "infinite",
        }
    }
}

impl fmt::Display for DurationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a whisper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhisperCategory {
    #[default]
    Success,
    Error,
}

/// All available categories
pub const ALL_CATEGORIES: [WhisperCategory; 2] = [WhisperCategory::Success, WhisperCategory::Error];

impl WhisperCategory {
    /// Get the string identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Errors stay until dismissed, everything else times out
    pub const fn duration_policy(&self) -> DurationPolicy {
        match self {
            Self::Success => DurationPolicy::Finite,
            Self::Error => DurationPolicy::Infinite,
        }
    }
}

impl FromStr for WhisperCategory {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            _ => Err(InvalidCategoryError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for WhisperCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
