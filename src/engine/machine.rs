//! Live state machine that dispatches events through a schema.

use crate::core::{Schema, StateHistory, StateTransition};
use crate::engine::executor::{InlineExecutor, SerialExecutor};
use crate::engine::subject::SubjectRef;
use parking_lot::{Mutex, RwLock};
use std::fmt::Debug;
use std::sync::Arc;

type BeforeEventCallback<E> = Arc<dyn Fn(&E) + Send + Sync>;
type AfterTransitionCallback<S, E> = Arc<dyn Fn(&S, &E, &S) + Send + Sync>;
type NoTransitionCallback<S, E> = Arc<dyn Fn(&S, &E) + Send + Sync>;

struct Callbacks<S, E> {
    before_event: Option<BeforeEventCallback<E>>,
    after_transition: Option<AfterTransitionCallback<S, E>>,
    on_no_transition: Option<NoTransitionCallback<S, E>>,
}

impl<S, E> Default for Callbacks<S, E> {
    fn default() -> Self {
        Self {
            before_event: None,
            after_transition: None,
            on_no_transition: None,
        }
    }
}

impl<S, E> Clone for Callbacks<S, E> {
    fn clone(&self) -> Self {
        Self {
            before_event: self.before_event.clone(),
            after_transition: self.after_transition.clone(),
            on_no_transition: self.on_no_transition.clone(),
        }
    }
}

struct Inner<S, E, Subj> {
    debug_name: &'static str,
    schema: Schema<S, E, Subj>,
    state: RwLock<S>,
    subject: SubjectRef<Subj>,
    callbacks: RwLock<Callbacks<S, E>>,
    history: Option<Mutex<StateHistory<S, E>>>,
}

/// A running state machine.
///
/// Holds the current state, a handle to its subject, and the schema that
/// decides transitions. Cloning a `Machine` yields another handle to the
/// same running machine.
///
/// Dispatching an event runs, in order: the before-event callback, subject
/// resolution, the transition function, the state update, the transition's
/// action, and the after-transition callback. When the subject is gone or
/// the transition function returns `None`, the no-transition callback runs
/// instead and the state is left untouched. With no callback installed that
/// outcome is silent.
///
/// The transition function runs while the state cell is locked and must not
/// call back into the machine. Actions and callbacks run unlocked and may
/// read the state or dispatch further events.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Schema, Transition};
/// use switchyard::engine::Machine;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Turnstile { Locked, Unlocked }
///
/// #[derive(Clone, Debug)]
/// enum Input { Coin, Push }
///
/// let schema: Schema<Turnstile, Input> = Schema::new(Turnstile::Locked, |state, event| match (state, event) {
///     (Turnstile::Locked, Input::Coin) => Some(Transition::to(Turnstile::Unlocked)),
///     (Turnstile::Unlocked, Input::Push) => Some(Transition::to(Turnstile::Locked)),
///     _ => None,
/// });
///
/// let machine = Machine::without_subject(schema);
/// machine.dispatch(Input::Coin);
/// assert_eq!(machine.current_state(), Turnstile::Unlocked);
/// machine.dispatch(Input::Coin);
/// assert_eq!(machine.current_state(), Turnstile::Unlocked);
/// ```
pub struct Machine<S, E, Subj = ()> {
    inner: Arc<Inner<S, E, Subj>>,
    executor: Arc<dyn SerialExecutor>,
}

impl<S, E, Subj> Clone for Machine<S, E, Subj> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            executor: Arc::clone(&self.executor),
        }
    }
}

impl<S, E, Subj> Machine<S, E, Subj>
where
    S: Clone + Debug + Send + Sync + 'static,
    E: Clone + Debug + Send + 'static,
    Subj: Send + Sync + 'static,
{
    /// Create a machine that owns `subject`.
    pub fn new(schema: Schema<S, E, Subj>, subject: Subj) -> Self {
        Self::assemble(schema, SubjectRef::owned(subject), None, "machine", false)
    }

    /// Create a machine sharing ownership of `subject`.
    pub fn with_shared_subject(schema: Schema<S, E, Subj>, subject: Arc<Subj>) -> Self {
        Self::assemble(schema, SubjectRef::shared(subject), None, "machine", false)
    }

    /// Create a machine that only weakly refers to `subject`.
    ///
    /// Use this when the subject stores the machine, so neither keeps the
    /// other alive. After the subject is dropped every dispatch reports no
    /// transition.
    pub fn with_weak_subject(schema: Schema<S, E, Subj>, subject: &Arc<Subj>) -> Self {
        Self::assemble(schema, SubjectRef::weak(subject), None, "machine", false)
    }

    /// Create a machine whose dispatches all run on `executor`.
    ///
    /// `dispatch` then returns as soon as the work is queued.
    pub fn with_executor(
        schema: Schema<S, E, Subj>,
        subject: SubjectRef<Subj>,
        executor: Arc<dyn SerialExecutor>,
    ) -> Self {
        Self::assemble(schema, subject, Some(executor), "machine", false)
    }

    pub(crate) fn assemble(
        schema: Schema<S, E, Subj>,
        subject: SubjectRef<Subj>,
        executor: Option<Arc<dyn SerialExecutor>>,
        debug_name: &'static str,
        record_history: bool,
    ) -> Self {
        let state = RwLock::new(schema.initial_state().clone());
        let inner = Inner {
            debug_name,
            schema,
            state,
            subject,
            callbacks: RwLock::new(Callbacks::default()),
            history: record_history.then(|| Mutex::new(StateHistory::new())),
        };
        Self {
            inner: Arc::new(inner),
            executor: executor.unwrap_or_else(|| Arc::new(InlineExecutor)),
        }
    }

    /// Snapshot of the current state.
    ///
    /// Safe to call from any thread, including while a dispatch is running.
    pub fn current_state(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Propose `event` to the machine.
    ///
    /// Without an executor this returns after the dispatch has completed.
    /// With one, the whole dispatch is queued as a single job.
    pub fn dispatch(&self, event: E) {
        let inner = Arc::clone(&self.inner);
        self.executor.submit(Box::new(move || inner.handle(event)));
    }

    pub fn schema(&self) -> &Schema<S, E, Subj> {
        &self.inner.schema
    }

    pub fn subject(&self) -> &SubjectRef<Subj> {
        &self.inner.subject
    }

    pub fn debug_name(&self) -> &'static str {
        self.inner.debug_name
    }

    /// Snapshot of the recorded transitions, if history recording is on.
    pub fn history(&self) -> Option<StateHistory<S, E>> {
        self.inner.history.as_ref().map(|h| h.lock().clone())
    }

    /// Called with every event before it is handled.
    pub fn set_before_event<F>(&self, callback: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.inner.callbacks.write().before_event = Some(Arc::new(callback));
    }

    /// Called with (old state, event, new state) after a transition's action.
    pub fn set_after_transition<F>(&self, callback: F)
    where
        F: Fn(&S, &E, &S) + Send + Sync + 'static,
    {
        self.inner.callbacks.write().after_transition = Some(Arc::new(callback));
    }

    /// Called with (current state, event) when an event causes no transition,
    /// either because none matched or because the subject is gone.
    pub fn set_on_no_transition<F>(&self, callback: F)
    where
        F: Fn(&S, &E) + Send + Sync + 'static,
    {
        self.inner.callbacks.write().on_no_transition = Some(Arc::new(callback));
    }

    pub fn clear_callbacks(&self) {
        *self.inner.callbacks.write() = Callbacks::default();
    }
}

impl<S, E> Machine<S, E, ()>
where
    S: Clone + Debug + Send + Sync + 'static,
    E: Clone + Debug + Send + 'static,
{
    /// Create a machine with no associated subject.
    pub fn without_subject(schema: Schema<S, E, ()>) -> Self {
        Self::new(schema, ())
    }
}

impl<S, E, Subj> Inner<S, E, Subj>
where
    S: Clone + Debug,
    E: Clone + Debug,
{
    fn handle(&self, event: E) {
        let callbacks = self.callbacks.read().clone();

        if let Some(before_event) = &callbacks.before_event {
            before_event(&event);
        }
        tracing::trace!(machine = self.debug_name, ?event, "dispatching event");

        let Some(subject) = self.subject.resolve() else {
            tracing::debug!(machine = self.debug_name, ?event, "subject released, ignoring event");
            self.report_no_transition(&callbacks, &event);
            return;
        };

        let applied = {
            let mut state = self.state.write();
            self.schema.transition(&state, &event).map(|transition| {
                let (next, action) = transition.into_parts();
                let old = std::mem::replace(&mut *state, next.clone());
                (old, next, action)
            })
        };

        let Some((old, new, action)) = applied else {
            tracing::debug!(machine = self.debug_name, ?event, "no transition for event");
            self.report_no_transition(&callbacks, &event);
            return;
        };

        tracing::debug!(machine = self.debug_name, from = ?old, ?event, to = ?new, "transitioned");
        if let Some(history) = &self.history {
            history
                .lock()
                .push(StateTransition::now(old.clone(), event.clone(), new.clone()));
        }

        if let Some(action) = action {
            action(subject.as_ref());
        }

        if let Some(after_transition) = &callbacks.after_transition {
            after_transition(&old, &event, &new);
        }
    }

    fn report_no_transition(&self, callbacks: &Callbacks<S, E>, event: &E) {
        if let Some(on_no_transition) = &callbacks.on_no_transition {
            let current = self.state.read().clone();
            on_no_transition(&current, event);
        }
    }
}
