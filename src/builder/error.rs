//! Build errors for machine builders.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Subject not specified. Call .subject(), .shared_subject() or .weak_subject() before .build()")]
    MissingSubject,
}
