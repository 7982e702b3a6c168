//! Immutable description of a state machine.

use std::fmt;
use std::sync::Arc;

/// Side effect run against the subject after a state change.
pub type Action<Subj> = Box<dyn FnOnce(&Subj)>;

/// Maps the current state and an incoming event to an optional transition.
///
/// Returning `None` means the event is not handled in that state.
pub type TransitionFn<S, E, Subj> =
    Arc<dyn Fn(&S, &E) -> Option<Transition<S, Subj>> + Send + Sync>;

/// Outcome of a matched (state, event) pair: the next state and an optional
/// action to run once the machine has moved to it.
pub struct Transition<S, Subj> {
    pub next: S,
    pub action: Option<Action<Subj>>,
}

impl<S, Subj> Transition<S, Subj> {
    /// Move to `next` without running an action.
    pub fn to(next: S) -> Self {
        Self { next, action: None }
    }

    /// Move to `next`, then run `action` with the subject.
    pub fn with_action<F>(next: S, action: F) -> Self
    where
        F: FnOnce(&Subj) + 'static,
    {
        Self {
            next,
            action: Some(Box::new(action)),
        }
    }

    pub fn into_parts(self) -> (S, Option<Action<Subj>>) {
        (self.next, self.action)
    }
}

impl<S: fmt::Debug, Subj> fmt::Debug for Transition<S, Subj> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("next", &self.next)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Initial state plus transition function.
///
/// The initial state is never checked against the transition function.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Schema, Transition};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Light { Off, On }
///
/// #[derive(Clone, Debug)]
/// enum Switch { Flip }
///
/// let schema: Schema<Light, Switch> = Schema::new(Light::Off, |state, _event| match state {
///     Light::Off => Some(Transition::to(Light::On)),
///     Light::On => Some(Transition::to(Light::Off)),
/// });
///
/// assert_eq!(schema.initial_state(), &Light::Off);
/// let next = schema.transition(&Light::Off, &Switch::Flip).map(|t| t.next);
/// assert_eq!(next, Some(Light::On));
/// ```
pub struct Schema<S, E, Subj = ()> {
    initial_state: S,
    transition_fn: TransitionFn<S, E, Subj>,
}

impl<S, E, Subj> Schema<S, E, Subj> {
    /// Construct a schema. Plain schemas have no preconditions and cannot fail.
    ///
    /// A running [`Machine`](crate::engine::Machine) calls `transition_fn`
    /// while holding its state lock, so the function must not call back into
    /// that machine (`current_state` or `dispatch` would deadlock).
    pub fn new<F>(initial_state: S, transition_fn: F) -> Self
    where
        F: Fn(&S, &E) -> Option<Transition<S, Subj>> + Send + Sync + 'static,
    {
        Self {
            initial_state,
            transition_fn: Arc::new(transition_fn),
        }
    }

    /// Construct a schema around an already shared transition function.
    pub fn from_shared(initial_state: S, transition_fn: TransitionFn<S, E, Subj>) -> Self {
        Self {
            initial_state,
            transition_fn,
        }
    }

    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    pub fn transition_fn(&self) -> &TransitionFn<S, E, Subj> {
        &self.transition_fn
    }

    /// Evaluate the transition function for one (state, event) pair.
    pub fn transition(&self, state: &S, event: &E) -> Option<Transition<S, Subj>> {
        (self.transition_fn)(state, event)
    }
}

impl<S: Clone, E, Subj> Clone for Schema<S, E, Subj> {
    fn clone(&self) -> Self {
        Self {
            initial_state: self.initial_state.clone(),
            transition_fn: Arc::clone(&self.transition_fn),
        }
    }
}

impl<S: fmt::Debug, E, Subj> fmt::Debug for Schema<S, E, Subj> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("initial_state", &self.initial_state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, PartialEq, Debug)]
    enum Phase {
        Start,
        Middle,
        End,
    }

    #[derive(Clone, Debug)]
    enum Step {
        Advance,
        Reset,
    }

    fn schema() -> Schema<Phase, Step, Cell<u32>> {
        Schema::new(Phase::Start, |state, event| match (state, event) {
            (Phase::Start, Step::Advance) => Some(Transition::to(Phase::Middle)),
            (Phase::Middle, Step::Advance) => {
                Some(Transition::with_action(Phase::End, |count: &Cell<u32>| {
                    count.set(count.get() + 1)
                }))
            }
            (Phase::End, Step::Reset) => Some(Transition::to(Phase::Start)),
            _ => None,
        })
    }

    #[test]
    fn exposes_initial_state() {
        assert_eq!(schema().initial_state(), &Phase::Start);
    }

    #[test]
    fn transition_returns_next_state() {
        let schema = schema();
        let transition = schema.transition(&Phase::Start, &Step::Advance).unwrap();

        assert_eq!(transition.next, Phase::Middle);
        assert!(transition.action.is_none());
    }

    #[test]
    fn unhandled_pair_returns_none() {
        let schema = schema();
        assert!(schema.transition(&Phase::Start, &Step::Reset).is_none());
        assert!(schema.transition(&Phase::End, &Step::Advance).is_none());
    }

    #[test]
    fn action_runs_against_subject() {
        let schema = schema();
        let (next, action) = schema
            .transition(&Phase::Middle, &Step::Advance)
            .unwrap()
            .into_parts();
        let counter = Cell::new(0);

        action.unwrap()(&counter);

        assert_eq!(next, Phase::End);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn clone_shares_transition_fn() {
        let original = schema();
        let cloned = original.clone();

        assert!(Arc::ptr_eq(original.transition_fn(), cloned.transition_fn()));
        assert_eq!(cloned.initial_state(), &Phase::Start);
    }
}
