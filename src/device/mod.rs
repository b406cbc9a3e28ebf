//! Hardware capabilities the machine drives.
//!
//! The machine never counts gumballs itself. It asks the device to
//! dispense one and learns from the answer whether any were left.

mod memory;

pub use memory::MemoryDevice;

/// Display and dispensing hardware behind a gumball machine.
pub trait Device {
    /// Show one line of text on the display.
    fn display_line(&mut self, line: &str);

    /// Return one coin to the customer.
    fn dispense_coin(&mut self);

    /// Drop one gumball if any remain.
    ///
    /// Returns `true` when a gumball was dispensed and the inventory
    /// decremented, `false` when the inventory was already empty.
    fn dispense_gumball(&mut self) -> bool;
}

impl<D: Device + ?Sized> Device for &mut D {
    fn display_line(&mut self, line: &str) {
        (**self).display_line(line)
    }

    fn dispense_coin(&mut self) {
        (**self).dispense_coin()
    }

    fn dispense_gumball(&mut self) -> bool {
        (**self).dispense_gumball()
    }
}

impl<D: Device + ?Sized> Device for Box<D> {
    fn display_line(&mut self, line: &str) {
        (**self).display_line(line)
    }

    fn dispense_coin(&mut self) {
        (**self).dispense_coin()
    }

    fn dispense_gumball(&mut self) -> bool {
        (**self).dispense_gumball()
    }
}
