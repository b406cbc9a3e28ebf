//! Gumball: a coin-operated vending state machine
//!
//! The machine follows a "pure core, imperative shell" split. The core
//! decides, for the current state and an action, the next state and the
//! device effects to run. The shell (`GumballMachine`) runs those effects
//! against a [`Device`] and owns nothing but the current state.
//!
//! # Core Concepts
//!
//! - **State**: SoldOut, NoCoin or HasCoin, via `MachineState`
//! - **Action**: insert coin, eject coin, turn crank, refill
//! - **Device**: display and dispensing hardware, owner of the gumball count
//! - **History**: optional immutable record of executed actions
//!
//! # Example
//!
//! ```rust
//! use gumball::{GumballMachine, MachineState, MemoryDevice, Message};
//!
//! let mut machine = GumballMachine::new(MemoryDevice::with_gumballs(1));
//! assert_eq!(machine.state(), MachineState::SoldOut);
//!
//! machine.refill();
//! machine.insert_coin();
//! assert!(machine.has_coin());
//!
//! machine.turn_crank();
//! assert_eq!(machine.device().count(), 0);
//! assert_eq!(machine.device().line(), Some(Message::NoCoinStart.text()));
//!
//! // The machine finds out it is empty on the next paid crank.
//! machine.insert_coin();
//! machine.turn_crank();
//! assert!(machine.is_sold_out());
//! assert_eq!(machine.device().coins_returned(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod device;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, GumballMachineBuilder};
pub use crate::core::{Action, MachineState, Message, ParseActionError, State, StateHistory};
pub use device::{Device, MemoryDevice};
pub use machine::GumballMachine;
