//! Fixed texts shown on the machine's display.
//!
//! The code prefix names the state the action was taken in (`SO_` sold
//! out, `NQ_` no coin, `HQ_` has coin). `_START` messages greet the state
//! just entered.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Message {
    SoldOutStart,
    SoldOutCoin,
    SoldOutEject,
    SoldOutCrank,
    NoCoinStart,
    NoCoinEject,
    NoCoinCrank,
    HasCoinStart,
    HasCoinCoin,
    HasCoinEject,
}

impl Message {
    pub const ALL: &'static [Message] = &[
        Message::SoldOutStart,
        Message::SoldOutCoin,
        Message::SoldOutEject,
        Message::SoldOutCrank,
        Message::NoCoinStart,
        Message::NoCoinEject,
        Message::NoCoinCrank,
        Message::HasCoinStart,
        Message::HasCoinCoin,
        Message::HasCoinEject,
    ];

    /// Short code, stable across text changes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SoldOutStart => "SO_START",
            Self::SoldOutCoin => "SO_QUART",
            Self::SoldOutEject => "SO_EJECT",
            Self::SoldOutCrank => "SO_CRANK",
            Self::NoCoinStart => "NQ_START",
            Self::NoCoinEject => "NQ_EJECT",
            Self::NoCoinCrank => "NQ_CRANK",
            Self::HasCoinStart => "HQ_START",
            Self::HasCoinCoin => "HQ_QUART",
            Self::HasCoinEject => "HQ_EJECT",
        }
    }

    /// The line sent to the device display.
    pub fn text(&self) -> &'static str {
        match self {
            Self::SoldOutStart => "Sold out. Please wait for a refill.",
            Self::SoldOutCoin => "Sold out. Your coin has been returned.",
            Self::SoldOutEject => "Sold out. There is no coin to return.",
            Self::SoldOutCrank => "Sold out. Turning the crank does nothing.",
            Self::NoCoinStart => "Insert a coin to buy a gumball.",
            Self::NoCoinEject => "No coin has been inserted.",
            Self::NoCoinCrank => "Insert a coin before turning the crank.",
            Self::HasCoinStart => "Coin accepted. Turn the crank for a gumball.",
            Self::HasCoinCoin => "A coin is already inserted. Extra coin returned.",
            Self::HasCoinEject => "Coin returned.",
        }
    }

    /// Look a message up by its display text.
    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.text() == text)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
