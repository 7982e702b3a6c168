//! Transition history tracking.
//!
//! Records applied transitions in the order a machine performed them.
//! Dispatches that produced no transition are never recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, E> {
    /// The state being transitioned from
    pub from: S,
    /// The event that triggered the transition
    pub event: E,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

impl<S, E> StateTransition<S, E> {
    pub fn now(from: S, event: E, to: S) -> Self {
        Self {
            from,
            event,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of applied transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now("Start", "go", "Middle"))
///     .record(StateTransition::now("Middle", "go", "End"));
///
/// assert_eq!(history.get_path(), vec![&"Start", &"Middle", &"End"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, E> {
    transitions: Vec<StateTransition<S, E>>,
}

impl<S, E> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> StateHistory<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self
    where
        S: Clone,
        E: Clone,
    {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// In-place append used by a running machine.
    pub(crate) fn push(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push(transition);
    }

    /// States traversed: the first `from` state, then every `to` state.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transitions.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
