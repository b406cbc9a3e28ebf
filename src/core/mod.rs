//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the gumball machine:
//! - States via the `State` trait and `MachineState`
//! - The four `Action`s and the display `Message`s
//! - The transition table deciding next state and effects
//! - Immutable history tracking
//!
//! Nothing in this module talks to a device.

mod action;
mod history;
mod message;
mod state;
pub mod table;

pub use action::{Action, ParseActionError};
pub use history::{StateHistory, StateTransition};
pub use message::Message;
pub use state::{MachineState, State};
pub use table::{Effect, Outcome, Step};
