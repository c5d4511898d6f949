//! Output format value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidOutputFormatError;

/// Where whisper events are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Animated banner on the terminal
    #[default]
    Terminal,
    /// One JSON object per event on stdout
    Json,
    /// Discard events
    None,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Json => "json",
            Self::None => "none",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = InvalidOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "none" => Ok(Self::None),
            _ => Err(InvalidOutputFormatError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
