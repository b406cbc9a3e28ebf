//! The gumball machine: the imperative shell around the transition table.
//!
//! Each action looks up its outcome in [`crate::core::table`], asks the
//! device for a gumball when the table says so, runs the resulting effects
//! against the device in order and then moves to the next state.

use crate::core::table::{self, Effect, Step};
use crate::core::{Action, MachineState, Message, StateHistory, StateTransition};
use crate::device::Device;
use chrono::Utc;

/// A coin-operated gumball machine driving a [`Device`].
///
/// Starts sold out. Every action is accepted in every state; actions that
/// make no sense in the current state only show a message.
///
/// # Example
///
/// ```rust
/// use gumball::device::MemoryDevice;
/// use gumball::machine::GumballMachine;
/// use gumball::core::MachineState;
///
/// let mut machine = GumballMachine::new(MemoryDevice::with_gumballs(1));
/// machine.refill();
/// machine.insert_coin();
/// machine.turn_crank();
///
/// assert_eq!(machine.state(), MachineState::NoCoin);
/// assert_eq!(machine.device().count(), 0);
/// ```
#[derive(Debug)]
pub struct GumballMachine<D: Device> {
    device: D,
    state: MachineState,
    history: Option<StateHistory<MachineState>>,
}

impl<D: Device> GumballMachine<D> {
    /// Create a machine that announces it is sold out and keeps no history.
    pub fn new(device: D) -> Self {
        Self::with_options(device, false, true)
    }

    pub(crate) fn with_options(device: D, track_history: bool, announce: bool) -> Self {
        let mut machine = Self {
            device,
            state: MachineState::SoldOut,
            history: track_history.then(StateHistory::new),
        };
        if announce {
            machine.apply(Effect::Display(Message::SoldOutStart));
        }
        machine
    }

    pub fn insert_coin(&mut self) {
        self.dispatch(Action::InsertCoin);
    }

    pub fn eject_coin(&mut self) {
        self.dispatch(Action::EjectCoin);
    }

    pub fn turn_crank(&mut self) {
        self.dispatch(Action::TurnCrank);
    }

    /// Tell the machine it has been restocked. Ignored unless sold out.
    pub fn refill(&mut self) {
        self.dispatch(Action::Refill);
    }

    /// Execute any action and return the state it leaves the machine in.
    pub fn dispatch(&mut self, action: Action) -> MachineState {
        let from = self.state;
        let outcome = match table::step(from, action) {
            Step::Settled(outcome) => outcome,
            Step::Dispense => {
                let dispensed = self.device.dispense_gumball();
                log::trace!("dispense_gumball -> {}", dispensed);
                table::after_dispense(dispensed)
            }
        };

        for effect in outcome.effects {
            self.apply(*effect);
        }
        self.state = outcome.next;

        if outcome.changes_state(from) {
            log::debug!("{} --{}--> {}", from, action, outcome.next);
        } else {
            log::trace!("{} --{}--> (unchanged)", from, action);
        }

        if let Some(history) = &self.history {
            self.history = Some(history.record(StateTransition {
                from,
                to: outcome.next,
                action,
                timestamp: Utc::now(),
            }));
        }

        self.state
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Display(message) => {
                log::trace!("display {}: {}", message.code(), message);
                self.device.display_line(message.text());
            }
            Effect::RefundCoin => {
                log::trace!("refund coin");
                self.device.dispense_coin();
            }
        }
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn is_sold_out(&self) -> bool {
        self.state.is_sold_out()
    }

    pub fn has_coin(&self) -> bool {
        self.state.has_coin()
    }

    /// Recorded actions, if history tracking was enabled.
    pub fn history(&self) -> Option<&StateHistory<MachineState>> {
        self.history.as_ref()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MemoryDevice;

    fn stocked(gumballs: u32) -> GumballMachine<MemoryDevice> {
        let mut machine = GumballMachine::new(MemoryDevice::with_gumballs(gumballs));
        machine.refill();
        machine
    }

    fn shown(machine: &GumballMachine<MemoryDevice>) -> Option<Message> {
        machine.device().line().and_then(Message::from_text)
    }

    #[test]
    fn new_machine_is_sold_out_and_says_so() {
        let machine = GumballMachine::new(MemoryDevice::new());
        assert_eq!(machine.state(), MachineState::SoldOut);
        assert_eq!(shown(&machine), Some(Message::SoldOutStart));
        assert!(machine.history().is_none());
    }

    #[test]
    fn silent_machine_shows_nothing_at_start() {
        let machine = GumballMachine::with_options(MemoryDevice::new(), false, false);
        assert!(machine.device().lines().is_empty());
    }

    #[test]
    fn paid_crank_dispenses_one_gumball() {
        let mut machine = stocked(3);
        machine.insert_coin();
        machine.turn_crank();

        assert_eq!(machine.state(), MachineState::NoCoin);
        assert_eq!(machine.device().count(), 2);
        assert_eq!(shown(&machine), Some(Message::NoCoinStart));
        assert_eq!(machine.device().coins_returned(), 0);
    }

    #[test]
    fn crank_on_empty_device_sells_out_and_refunds() {
        let mut machine = stocked(0);
        machine.insert_coin();
        let state = machine.dispatch(Action::TurnCrank);

        assert_eq!(state, MachineState::SoldOut);
        assert_eq!(shown(&machine), Some(Message::SoldOutStart));
        assert_eq!(machine.device().coins_returned(), 1);
    }

    #[test]
    fn coin_inserted_while_sold_out_is_returned() {
        let mut machine = GumballMachine::with_options(MemoryDevice::new(), false, false);
        machine.insert_coin();

        assert_eq!(machine.device().lines().len(), 1);
        assert_eq!(machine.device().coins_returned(), 1);
    }

    #[test]
    fn history_records_every_action() {
        let mut machine = GumballMachine::with_options(MemoryDevice::with_gumballs(1), true, true);
        machine.refill();
        machine.insert_coin();
        machine.turn_crank();
        machine.eject_coin();

        let history = machine.history().unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(
            history.get_path(),
            vec![
                &MachineState::SoldOut,
                &MachineState::NoCoin,
                &MachineState::HasCoin,
                &MachineState::NoCoin
            ]
        );
    }

    #[test]
    fn borrowed_device_outlives_machine() {
        let mut device = MemoryDevice::with_gumballs(1);
        {
            let mut machine = GumballMachine::new(&mut device);
            machine.refill();
            machine.insert_coin();
            machine.turn_crank();
        }
        assert_eq!(device.count(), 0);
        assert_eq!(device.gumballs_dispensed(), 1);
    }
}
