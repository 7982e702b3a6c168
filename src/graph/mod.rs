//! Graph introspection for schemas over labelled state and event types.
//!
//! A [`GraphableSchema`] is built like a plain schema but additionally
//! requires `S: Labelable` and `E: Labelable`. At construction it validates
//! that both labelled lists are complete and derives a [`GraphDescription`]
//! by probing the transition function with every (state, event) pair.

mod description;
mod error;
mod schema;

pub use description::{GraphDescription, GraphEdge};
pub use error::GraphError;
pub use schema::GraphableSchema;
