//! Handle to the object a machine acts on.

use std::sync::{Arc, Weak};

/// Strong or weak reference to a machine's subject.
///
/// A weak handle lets the subject own its machine without forming a
/// reference cycle. Once the subject is dropped, the machine stops
/// transitioning.
pub enum SubjectRef<T> {
    Strong(Arc<T>),
    Weak(Weak<T>),
}

impl<T> SubjectRef<T> {
    /// Take ownership of `value`.
    pub fn owned(value: T) -> Self {
        Self::Strong(Arc::new(value))
    }

    /// Keep `subject` alive for as long as the machine lives.
    pub fn shared(subject: Arc<T>) -> Self {
        Self::Strong(subject)
    }

    /// Refer to `subject` without keeping it alive.
    pub fn weak(subject: &Arc<T>) -> Self {
        Self::Weak(Arc::downgrade(subject))
    }

    /// Upgrade to a usable reference, or `None` if the subject is gone.
    pub fn resolve(&self) -> Option<Arc<T>> {
        match self {
            Self::Strong(subject) => Some(Arc::clone(subject)),
            Self::Weak(subject) => subject.upgrade(),
        }
    }

    pub fn is_weak(&self) -> bool {
        matches!(self, Self::Weak(_))
    }
}

impl<T> Clone for SubjectRef<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Strong(subject) => Self::Strong(Arc::clone(subject)),
            Self::Weak(subject) => Self::Weak(Weak::clone(subject)),
        }
    }
}

impl<T> std::fmt::Debug for SubjectRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strong(_) => f.write_str("SubjectRef::Strong"),
            Self::Weak(subject) => write!(f, "SubjectRef::Weak(alive: {})", subject.strong_count() > 0),
        }
    }
}
