//! The four external triggers a customer or operator can apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An external trigger. Every action is legal in every state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    InsertCoin,
    EjectCoin,
    TurnCrank,
    /// Operator restock. Only meaningful while sold out.
    Refill,
}

impl Action {
    pub const ALL: &'static [Action] = &[
        Action::InsertCoin,
        Action::EjectCoin,
        Action::TurnCrank,
        Action::Refill,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertCoin => "insert-coin",
            Self::EjectCoin => "eject-coin",
            Self::TurnCrank => "turn-crank",
            Self::Refill => "refill",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from parsing an [`Action`] out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    #[error("No action given")]
    Empty,

    #[error("Unknown action '{0}', expected one of: insert, eject, crank, refill")]
    Unknown(String),
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts the short and the kebab-case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_ascii_lowercase();
        match word.as_str() {
            "" => Err(ParseActionError::Empty),
            "insert" | "insert-coin" => Ok(Self::InsertCoin),
            "eject" | "eject-coin" => Ok(Self::EjectCoin),
            "crank" | "turn-crank" => Ok(Self::TurnCrank),
            "refill" => Ok(Self::Refill),
            _ => Err(ParseActionError::Unknown(s.trim().to_string())),
        }
    }
}
