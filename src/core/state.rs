//! State trait and the machine's states.
//!
//! States are plain values. Everything here is pure: inspecting a state
//! never touches the device.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Copy`: states are small tags, copied into history records
/// - `PartialEq`: transition logic compares states
/// - `Debug`: diagnostics
/// - `Serialize` + `Deserialize`: history export
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Disposition of the gumball machine between actions.
    ///
    /// Dispensing is transient: it happens inside a crank turn and is
    /// never observable as a state.
    #[derive(Default)]
    pub enum MachineState {
        /// No gumballs known to be available. The machine starts here.
        #[default]
        SoldOut,
        /// Stocked and waiting for a coin.
        NoCoin,
        /// Stocked with a coin inserted.
        HasCoin,
    }
}

impl MachineState {
    /// State from the two-flag view. Returns `None` for a coin held while
    /// sold out, which cannot happen.
    pub fn from_flags(sold_out: bool, has_coin: bool) -> Option<Self> {
        match (sold_out, has_coin) {
            (true, false) => Some(Self::SoldOut),
            (false, false) => Some(Self::NoCoin),
            (false, true) => Some(Self::HasCoin),
            (true, true) => None,
        }
    }

    pub fn is_sold_out(self) -> bool {
        matches!(self, Self::SoldOut)
    }

    pub fn has_coin(self) -> bool {
        matches!(self, Self::HasCoin)
    }
}
