//! Builder API for ergonomic machine construction.
//!
//! This module provides the fluent machine builder, its errors, and the
//! `state_enum!` macro used to declare states.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::GumballMachineBuilder;
