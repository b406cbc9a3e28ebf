//! Action history tracking.
//!
//! Provides immutable tracking of the actions a machine has executed,
//! including the ones that left the state unchanged.

use super::action::Action;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single executed action.
///
/// `from` and `to` are equal for actions that only showed a message.
///
/// # Example
///
/// ```rust
/// use gumball::core::{Action, MachineState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: MachineState::NoCoin,
///     to: MachineState::HasCoin,
///     action: Action::InsertCoin,
///     timestamp: Utc::now(),
/// };
/// assert!(transition.changed_state());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state the action was applied in
    pub from: S,
    /// The state after the action
    pub to: S,
    /// The action that was executed
    pub action: Action,
    /// When the action completed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of executed actions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use gumball::core::{Action, MachineState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: MachineState::SoldOut,
///     to: MachineState::NoCoin,
///     action: Action::Refill,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     from: MachineState::NoCoin,
///     to: MachineState::HasCoin,
///     action: Action::InsertCoin,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // SoldOut -> NoCoin -> HasCoin
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gumball::core::{Action, MachineState, StateHistory, StateTransition};
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     from: MachineState::SoldOut,
    ///     to: MachineState::SoldOut,
    ///     action: Action::TurnCrank,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the state after each state
    /// change. Actions that left the state alone do not repeat it.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in self.state_changes() {
            path.push(&transition.to);
        }
        path
    }

    /// Transitions that moved the machine to a different state.
    pub fn state_changes(&self) -> impl Iterator<Item = &StateTransition<S>> {
        self.transitions.iter().filter(|t| t.changed_state())
    }

    /// How many times `action` was executed.
    pub fn count(&self, action: Action) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.action == action)
            .count()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Export the history as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
