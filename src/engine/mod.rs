//! Runtime half of the crate: machines that hold live state and dispatch
//! events through a [`Schema`](crate::core::Schema).
//!
//! # Key Concepts
//!
//! - **Machine**: current state, subject handle and callback slots
//! - **Subject**: the object actions run against, held strongly or weakly
//! - **Executors**: optional serial queue that every dispatch is routed through

mod executor;
mod machine;
mod subject;

pub use executor::{InlineExecutor, Job, QueueExecutor, QueueWorker, SerialExecutor};
pub use machine::Machine;
pub use subject::SubjectRef;
