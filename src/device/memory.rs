//! In-memory device that records everything it is asked to do.

use super::Device;

/// A [`Device`] backed by counters and a display log.
///
/// Used by tests and the REPL demo in place of real hardware.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDevice {
    gumballs: u32,
    lines: Vec<String>,
    coins_returned: usize,
    gumballs_dispensed: usize,
}

impl MemoryDevice {
    /// An empty device.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gumballs(count: u32) -> Self {
        Self {
            gumballs: count,
            ..Self::default()
        }
    }

    /// Load more gumballs. The machine only notices after a refill.
    pub fn add_gumballs(&mut self, count: u32) {
        self.gumballs = self.gumballs.saturating_add(count);
    }

    /// Gumballs still inside.
    pub fn count(&self) -> u32 {
        self.gumballs
    }

    /// Last line shown on the display.
    pub fn line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn coins_returned(&self) -> usize {
        self.coins_returned
    }

    pub fn has_coin_returned(&self) -> bool {
        self.coins_returned > 0
    }

    pub fn gumballs_dispensed(&self) -> usize {
        self.gumballs_dispensed
    }
}

impl Device for MemoryDevice {
    fn display_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn dispense_coin(&mut self) {
        self.coins_returned += 1;
    }

    fn dispense_gumball(&mut self) -> bool {
        if self.gumballs == 0 {
            return false;
        }
        self.gumballs -= 1;
        self.gumballs_dispensed += 1;
        true
    }
}
