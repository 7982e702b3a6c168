//! Builder for configuring machines.

use crate::builder::error::BuildError;
use crate::core::Schema;
use crate::engine::{Machine, SerialExecutor, SubjectRef};
use std::fmt::Debug;
use std::sync::Arc;

/// Builder for configuring a [`Machine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::MachineBuilder;
/// use switchyard::core::{Schema, Transition};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Mode { Idle, Busy }
///
/// #[derive(Clone, Debug)]
/// enum Cmd { Start }
///
/// struct Controller;
///
/// let schema = Schema::new(Mode::Idle, |state, _event: &Cmd| match state {
///     Mode::Idle => Some(Transition::to(Mode::Busy)),
///     Mode::Busy => None,
/// });
///
/// let controller = Arc::new(Controller);
/// let machine = MachineBuilder::new(schema)
///     .weak_subject(&controller)
///     .debug_name("controller")
///     .record_history(true)
///     .build()
///     .unwrap();
///
/// machine.dispatch(Cmd::Start);
/// assert_eq!(machine.current_state(), Mode::Busy);
/// assert_eq!(machine.history().map(|h| h.len()), Some(1));
/// ```
pub struct MachineBuilder<S, E, Subj = ()> {
    schema: Schema<S, E, Subj>,
    subject: Option<SubjectRef<Subj>>,
    executor: Option<Arc<dyn SerialExecutor>>,
    debug_name: &'static str,
    record_history: bool,
}

impl<S, E, Subj> MachineBuilder<S, E, Subj>
where
    S: Clone + Debug + Send + Sync + 'static,
    E: Clone + Debug + Send + 'static,
    Subj: Send + Sync + 'static,
{
    pub fn new(schema: Schema<S, E, Subj>) -> Self {
        Self {
            schema,
            subject: None,
            executor: None,
            debug_name: "machine",
            record_history: false,
        }
    }

    /// Take ownership of the subject.
    pub fn subject(mut self, subject: Subj) -> Self {
        self.subject = Some(SubjectRef::owned(subject));
        self
    }

    /// Share ownership of the subject with the caller.
    pub fn shared_subject(mut self, subject: Arc<Subj>) -> Self {
        self.subject = Some(SubjectRef::shared(subject));
        self
    }

    /// Refer to the subject without keeping it alive.
    pub fn weak_subject(mut self, subject: &Arc<Subj>) -> Self {
        self.subject = Some(SubjectRef::weak(subject));
        self
    }

    /// Route every dispatch through `executor` (optional).
    pub fn executor(mut self, executor: Arc<dyn SerialExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Name used in log output (optional).
    pub fn debug_name(mut self, name: &'static str) -> Self {
        self.debug_name = name;
        self
    }

    /// Record applied transitions (defaults to `false`).
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Build the machine.
    /// Returns an error if no subject was given.
    pub fn build(self) -> Result<Machine<S, E, Subj>, BuildError> {
        let subject = self.subject.ok_or(BuildError::MissingSubject)?;

        Ok(Machine::assemble(
            self.schema,
            subject,
            self.executor,
            self.debug_name,
            self.record_history,
        ))
    }
}

impl<S, E> MachineBuilder<S, E, ()>
where
    S: Clone + Debug + Send + Sync + 'static,
    E: Clone + Debug + Send + 'static,
{
    /// Builder for a machine with no associated subject.
    pub fn unit(schema: Schema<S, E, ()>) -> Self {
        Self::new(schema).subject(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;
    use crate::engine::QueueExecutor;
    use parking_lot::Mutex;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    #[derive(Clone, PartialEq, Debug)]
    enum TestEvent {
        Next,
    }

    fn schema<Subj>() -> Schema<TestState, TestEvent, Subj> {
        Schema::new(TestState::Initial, |state, _| match state {
            TestState::Initial => Some(Transition::to(TestState::Processing)),
            TestState::Processing => Some(Transition::to(TestState::Complete)),
            TestState::Complete => None,
        })
    }

    #[test]
    fn builder_requires_subject() {
        let result = MachineBuilder::<TestState, TestEvent, String>::new(schema()).build();

        assert!(matches!(result, Err(BuildError::MissingSubject)));
    }

    #[test]
    fn unit_builder_needs_no_subject() {
        let machine = MachineBuilder::unit(schema()).build().unwrap();

        machine.dispatch(TestEvent::Next);

        assert_eq!(machine.current_state(), TestState::Processing);
    }

    #[test]
    fn fluent_api_applies_options() {
        let machine = MachineBuilder::new(schema())
            .subject(String::from("owner"))
            .debug_name("pipeline")
            .record_history(true)
            .build()
            .unwrap();

        machine.dispatch(TestEvent::Next);
        machine.dispatch(TestEvent::Next);

        assert_eq!(machine.debug_name(), "pipeline");
        assert_eq!(machine.current_state(), TestState::Complete);
        assert_eq!(machine.history().unwrap().len(), 2);
    }

    #[test]
    fn weak_subject_is_not_retained() {
        let owner = Arc::new(5u32);
        let machine = MachineBuilder::new(schema())
            .weak_subject(&owner)
            .build()
            .unwrap();

        assert!(machine.subject().is_weak());
        assert_eq!(Arc::strong_count(&owner), 1);
    }

    #[test]
    fn executor_defers_dispatch() {
        let (executor, worker) = QueueExecutor::new();
        let machine = MachineBuilder::unit(schema())
            .executor(Arc::new(executor))
            .build()
            .unwrap();

        let reached = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&reached);
        machine.set_after_transition(move |_, _, new| *sink.lock() = Some(new.clone()));

        machine.dispatch(TestEvent::Next);
        assert_eq!(machine.current_state(), TestState::Initial);

        drop(machine);
        worker.run_blocking();

        assert_eq!(*reached.lock(), Some(TestState::Processing));
    }
}
