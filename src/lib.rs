//! Switchyard: a generic finite state machine runtime
//!
//! A [`Schema`](core::Schema) pairs an initial state with a transition
//! function mapping `(state, event)` to an optional next state and action.
//! A [`Machine`](engine::Machine) holds the live state, a strong or weak
//! handle to its subject, and dispatches events through the schema, either
//! synchronously or through a caller-supplied serial executor.
//!
//! # Core Concepts
//!
//! - **Schema**: initial state plus transition function, immutable
//! - **Machine**: current state, subject, callbacks and optional executor
//! - **Labelable**: exhaustive enumeration of a state or event type's variants
//! - **GraphableSchema**: schema whose transition graph is validated and derived
//!   at construction
//!
//! # Example
//!
//! ```rust
//! use switchyard::core::Transition;
//! use switchyard::engine::Machine;
//! use switchyard::graph::GraphableSchema;
//! use switchyard::labelled_enum;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! labelled_enum! {
//!     pub enum Position { A, B, C }
//! }
//! labelled_enum! {
//!     pub enum Move { Forward, Backward }
//! }
//!
//! let schema: GraphableSchema<Position, Move> = GraphableSchema::new(Position::A, |state, event| match (state, event) {
//!     (Position::A, Move::Forward) => Some(Transition::to(Position::B)),
//!     (Position::B, Move::Backward) => Some(Transition::to(Position::A)),
//!     (Position::B, Move::Forward) => Some(Transition::to(Position::C)),
//!     (Position::C, Move::Backward) => Some(Transition::to(Position::B)),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(schema.graph().edges().len(), 4);
//!
//! let machine = Machine::without_subject(schema.into_schema());
//! let transitions = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&transitions);
//! machine.set_after_transition(move |_, _, _| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! for event in [Move::Forward, Move::Forward, Move::Backward] {
//!     machine.dispatch(event);
//! }
//! assert_eq!(machine.current_state(), Position::B);
//! assert_eq!(transitions.load(Ordering::SeqCst), 3);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod graph;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{Labelable, LabelledItem, Schema, Transition};
pub use engine::{Machine, QueueExecutor, SerialExecutor, SubjectRef};
pub use graph::{GraphDescription, GraphEdge, GraphError, GraphableSchema};
