//! Builder for constructing gumball machines.

use crate::builder::error::BuildError;
use crate::device::Device;
use crate::machine::GumballMachine;

/// Builder for configuring a [`GumballMachine`] with a fluent API.
///
/// # Example
///
/// ```
/// use gumball::builder::GumballMachineBuilder;
/// use gumball::device::MemoryDevice;
///
/// let machine = GumballMachineBuilder::new()
///     .device(MemoryDevice::with_gumballs(10))
///     .track_history(true)
///     .build()
///     .unwrap();
///
/// assert!(machine.history().is_some());
/// ```
#[derive(Debug)]
pub struct GumballMachineBuilder<D: Device> {
    device: Option<D>,
    track_history: bool,
    announce: bool,
}

impl<D: Device> GumballMachineBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            device: None,
            track_history: false,
            announce: true,
        }
    }

    /// Set the device the machine drives (required).
    pub fn device(mut self, device: D) -> Self {
        self.device = Some(device);
        self
    }

    /// Record every executed action. Off by default.
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.track_history = enabled;
        self
    }

    /// Show the sold-out message when the machine is built. On by default.
    pub fn announce(mut self, enabled: bool) -> Self {
        self.announce = enabled;
        self
    }

    /// Build the machine.
    /// Returns an error if the device is missing.
    pub fn build(self) -> Result<GumballMachine<D>, BuildError> {
        let device = self.device.ok_or(BuildError::MissingDevice)?;
        Ok(GumballMachine::with_options(
            device,
            self.track_history,
            self.announce,
        ))
    }
}

impl<D: Device> Default for GumballMachineBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
