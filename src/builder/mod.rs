//! Builder API for ergonomic machine construction.
//!
//! This module provides the fluent machine builder, a table-driven schema
//! helper and the `labelled_enum!` macro.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::core::{Schema, Transition};

/// Create a schema from a fixed `(from, event, to)` table.
///
/// The first row matching both the current state and the event wins; pairs
/// not in the table have no transition.
///
/// # Example
///
/// ```
/// use switchyard::builder::table_schema;
/// use switchyard::core::Schema;
/// use switchyard::labelled_enum;
///
/// labelled_enum! {
///     enum Door { Open, Closed }
/// }
/// labelled_enum! {
///     enum Push { Open, Close }
/// }
///
/// let schema: Schema<Door, Push> = table_schema(
///     Door::Closed,
///     vec![
///         (Door::Closed, Push::Open, Door::Open),
///         (Door::Open, Push::Close, Door::Closed),
///     ],
/// );
///
/// let next = schema.transition(&Door::Closed, &Push::Open).map(|t| t.next);
/// assert_eq!(next, Some(Door::Open));
/// assert!(schema.transition(&Door::Closed, &Push::Close).is_none());
/// ```
pub fn table_schema<S, E, Subj>(initial: S, rows: Vec<(S, E, S)>) -> Schema<S, E, Subj>
where
    S: Clone + PartialEq + Send + Sync + 'static,
    E: PartialEq + Send + Sync + 'static,
{
    Schema::new(initial, move |state: &S, event: &E| {
        rows.iter()
            .find(|(from, on, _)| from == state && on == event)
            .map(|(_, _, to)| Transition::to(to.clone()))
    })
}
