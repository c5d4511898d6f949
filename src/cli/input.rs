//! Line commands for interactive mode

use std::str::FromStr;

use thiserror::Error;

use crate::domain::error::InvalidCategoryError;
use crate::domain::whisper::WhisperCategory;

/// Help text listing every command
pub const INPUT_HELP: &str = "show <category> <message> | update <category> <message> | tap | close | alert <message> | confirm | cancel | clear | status | quit";

/// Errors parsing an input line
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Category(#[from] InvalidCategoryError),
}

/// One parsed interactive command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Show {
        category: WhisperCategory,
        message: String,
    },
    Update {
        category: WhisperCategory,
        message: String,
    },
    Tap,
    Close,
    Alert {
        message: String,
    },
    Confirm,
    Cancel,
    Clear,
    Status,
    Quit,
}

impl FromStr for InputCommand {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "" => Err(InputError::Empty),
            "show" => {
                let (category, message) =
                    category_and_message(rest, "show <category> <message>")?;
                Ok(Self::Show { category, message })
            }
            "update" => {
                let (category, message) =
                    category_and_message(rest, "update <category> <message>")?;
                Ok(Self::Update { category, message })
            }
            "tap" => Ok(Self::Tap),
            "close" => Ok(Self::Close),
            "alert" if rest.is_empty() => Err(InputError::Usage("alert <message>")),
            "alert" => Ok(Self::Alert {
                message: rest.to_string(),
            }),
            "confirm" | "y" => Ok(Self::Confirm),
            "cancel" | "n" => Ok(Self::Cancel),
            "clear" => Ok(Self::Clear),
            "status" => Ok(Self::Status),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(InputError::Unknown(other.to_string())),
        }
    }
}

fn category_and_message(
    rest: &str,
    usage: &'static str,
) -> Result<(WhisperCategory, String), InputError> {
    let Some((category, message)) = rest.split_once(char::is_whitespace) else {
        return Err(InputError::Usage(usage));
    };
    let message = message.trim();
    if message.is_empty() {
        return Err(InputError::Usage(usage));
    }
    Ok((category.parse()?, message.to_string()))
}
