//! Core state machine types.
//!
//! This module contains the parts of a machine that hold no live state:
//! - The `Schema` (initial state plus transition function)
//! - The `Labelable` contract used to enumerate state and event variants
//! - Transition history records

mod history;
mod label;
mod schema;

pub use history::{StateHistory, StateTransition};
pub use label::{Labelable, LabelledItem};
pub use schema::{Action, Schema, Transition, TransitionFn};
