//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a gumball machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Device not specified. Call .device(device) before .build()")]
    MissingDevice,
}
