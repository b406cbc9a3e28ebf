//! Pure transition table.
//!
//! `step` decides, for a state and an action, the next state and the
//! ordered device effects. It never touches a device. The one decision
//! that depends on the device (whether a gumball was left) is returned as
//! [`Step::Dispense`] and finished with [`after_dispense`].

use super::action::Action;
use super::message::Message;
use super::state::MachineState;

/// A device side effect, executed in order by the machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Effect {
    /// Show a line on the display.
    Display(Message),
    /// Return one coin to the customer.
    RefundCoin,
}

/// Resolved result of an action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    pub next: MachineState,
    pub effects: &'static [Effect],
}

impl Outcome {
    /// Whether applying this outcome moves the machine out of `from`.
    pub fn changes_state(&self, from: MachineState) -> bool {
        self.next != from
    }

    /// Number of coins this outcome returns.
    pub fn refunds(&self) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, Effect::RefundCoin))
            .count()
    }

    /// The last display line this outcome shows, if any.
    pub fn shown(&self) -> Option<Message> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::Display(message) => Some(*message),
            Effect::RefundCoin => None,
        })
    }
}

/// What the machine must do for one action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    /// Fully decided.
    Settled(Outcome),
    /// Ask the device for a gumball, then call [`after_dispense`].
    Dispense,
}

const fn settled(next: MachineState, effects: &'static [Effect]) -> Step {
    Step::Settled(Outcome { next, effects })
}

/// Transition for `action` taken in `state`.
pub fn step(state: MachineState, action: Action) -> Step {
    use Action as A;
    use MachineState as S;

    match (state, action) {
        (S::SoldOut, A::InsertCoin) => settled(
            S::SoldOut,
            &[Effect::Display(Message::SoldOutCoin), Effect::RefundCoin],
        ),
        (S::SoldOut, A::EjectCoin) => settled(S::SoldOut, &[Effect::Display(Message::SoldOutEject)]),
        (S::SoldOut, A::TurnCrank) => settled(S::SoldOut, &[Effect::Display(Message::SoldOutCrank)]),
        (S::SoldOut, A::Refill) => settled(S::NoCoin, &[Effect::Display(Message::NoCoinStart)]),

        (S::NoCoin, A::InsertCoin) => settled(S::HasCoin, &[Effect::Display(Message::HasCoinStart)]),
        (S::NoCoin, A::EjectCoin) => settled(S::NoCoin, &[Effect::Display(Message::NoCoinEject)]),
        (S::NoCoin, A::TurnCrank) => settled(S::NoCoin, &[Effect::Display(Message::NoCoinCrank)]),
        (S::NoCoin, A::Refill) => settled(S::NoCoin, &[]),

        (S::HasCoin, A::InsertCoin) => settled(
            S::HasCoin,
            &[Effect::Display(Message::HasCoinCoin), Effect::RefundCoin],
        ),
        (S::HasCoin, A::EjectCoin) => settled(
            S::NoCoin,
            &[Effect::Display(Message::HasCoinEject), Effect::RefundCoin],
        ),
        (S::HasCoin, A::TurnCrank) => Step::Dispense,
        (S::HasCoin, A::Refill) => settled(S::HasCoin, &[]),
    }
}

/// Finish a crank turn once the device reported whether it dispensed.
///
/// An empty device means the coin bought nothing: the machine sells out
/// and refunds it.
pub fn after_dispense(dispensed: bool) -> Outcome {
    if dispensed {
        Outcome {
            next: MachineState::NoCoin,
            effects: &[Effect::Display(Message::NoCoinStart)],
        }
    } else {
        Outcome {
            next: MachineState::SoldOut,
            effects: &[Effect::Display(Message::SoldOutStart), Effect::RefundCoin],
        }
    }
}
