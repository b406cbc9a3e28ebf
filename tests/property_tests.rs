//! Property-based tests for the gumball machine.
//!
//! These tests use proptest to drive machines through random action
//! sequences and check the accounting and state invariants hold.

use gumball::core::table::{self, Step};
use gumball::{Action, GumballMachineBuilder, MachineState, MemoryDevice, Message, State};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(index in 0..MachineState::ALL.len()) -> MachineState {
        MachineState::ALL[index]
    }
}

prop_compose! {
    fn arbitrary_action()(index in 0..Action::ALL.len()) -> Action {
        Action::ALL[index]
    }
}

/// The state the machine is in right after showing `message`.
fn state_of(message: Message) -> MachineState {
    match message {
        Message::SoldOutStart
        | Message::SoldOutCoin
        | Message::SoldOutEject
        | Message::SoldOutCrank => MachineState::SoldOut,
        Message::NoCoinStart
        | Message::NoCoinEject
        | Message::NoCoinCrank
        | Message::HasCoinEject => MachineState::NoCoin,
        Message::HasCoinStart | Message::HasCoinCoin => MachineState::HasCoin,
    }
}

proptest! {
    #[test]
    fn table_is_deterministic(state in arbitrary_state(), action in arbitrary_action()) {
        prop_assert_eq!(table::step(state, action), table::step(state, action));
    }

    #[test]
    fn state_name_is_stable(state in arbitrary_state()) {
        prop_assert_eq!(state.name(), state.to_string());
    }

    #[test]
    fn shown_message_belongs_to_next_state(
        state in arbitrary_state(),
        action in arbitrary_action(),
        dispensed in any::<bool>()
    ) {
        let outcome = match table::step(state, action) {
            Step::Settled(outcome) => outcome,
            Step::Dispense => table::after_dispense(dispensed),
        };
        if let Some(message) = outcome.shown() {
            prop_assert_eq!(state_of(message), outcome.next);
        }
    }

    #[test]
    fn gumballs_are_conserved(
        stock in 0u32..5,
        actions in prop::collection::vec(arbitrary_action(), 0..60)
    ) {
        let mut machine = GumballMachineBuilder::new()
            .device(MemoryDevice::with_gumballs(stock))
            .build()
            .unwrap();

        for action in &actions {
            machine.dispatch(*action);
        }

        let device = machine.device();
        prop_assert_eq!(device.gumballs_dispensed() as u32 + device.count(), stock);
    }

    #[test]
    fn coins_are_never_created(
        stock in 0u32..5,
        actions in prop::collection::vec(arbitrary_action(), 0..60)
    ) {
        let mut machine = GumballMachineBuilder::new()
            .device(MemoryDevice::with_gumballs(stock))
            .build()
            .unwrap();

        for action in &actions {
            machine.dispatch(*action);
        }

        let inserted = actions.iter().filter(|a| **a == Action::InsertCoin).count();
        let device = machine.device();
        let kept = usize::from(machine.has_coin());
        // Every inserted coin is refunded, bought a gumball, or is still held.
        prop_assert_eq!(device.coins_returned() + device.gumballs_dispensed() + kept, inserted);
    }

    #[test]
    fn display_agrees_with_state(
        stock in 0u32..5,
        actions in prop::collection::vec(arbitrary_action(), 1..60)
    ) {
        let mut machine = GumballMachineBuilder::new()
            .device(MemoryDevice::with_gumballs(stock))
            .build()
            .unwrap();

        for action in &actions {
            machine.dispatch(*action);
            let shown = machine.device().line().and_then(Message::from_text);
            prop_assert!(shown.is_some());
            prop_assert_eq!(shown.map(state_of), Some(machine.state()));
        }
    }

    #[test]
    fn history_matches_dispatched_actions(
        actions in prop::collection::vec(arbitrary_action(), 0..40)
    ) {
        let mut machine = GumballMachineBuilder::new()
            .device(MemoryDevice::with_gumballs(2))
            .track_history(true)
            .build()
            .unwrap();

        for action in &actions {
            machine.dispatch(*action);
        }

        let history = machine.history().unwrap();
        prop_assert_eq!(history.len(), actions.len());
        for (record, action) in history.transitions().iter().zip(&actions) {
            prop_assert_eq!(record.action, *action);
        }
        for pair in history.transitions().windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
        if let Some(last) = history.transitions().last() {
            prop_assert_eq!(last.to, machine.state());
        }
    }

    #[test]
    fn refill_is_idempotent(state_actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        let mut machine = GumballMachineBuilder::new()
            .device(MemoryDevice::with_gumballs(1))
            .build()
            .unwrap();
        for action in &state_actions {
            machine.dispatch(*action);
        }

        machine.refill();
        let state = machine.state();
        let lines = machine.device().lines().to_vec();

        machine.refill();
        prop_assert_eq!(machine.state(), state);
        prop_assert_eq!(machine.device().lines(), &lines[..]);
    }
}
