//! Errors raised while building a graphable schema.

use thiserror::Error;

/// Label validation failures. No schema is produced when one occurs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The labelled list does not have one entry per declared variant.
    #[error("missing labels for {type_name}: {found} labelled of {expected} variants")]
    IncompleteLabels {
        type_name: &'static str,
        expected: usize,
        found: usize,
    },

    /// A reachable variant has no entry in the labelled list.
    #[error("missing labels for {type_name}: {}", .missing.join(", "))]
    MissingLabels {
        type_name: &'static str,
        missing: Vec<String>,
    },

    /// Two labelled items share one label.
    #[error("duplicate label '{label}' for {type_name}")]
    DuplicateLabel {
        type_name: &'static str,
        label: String,
    },
}

impl GraphError {
    /// True for errors caused by an unlabelled variant.
    pub fn is_missing_labels(&self) -> bool {
        matches!(
            self,
            Self::IncompleteLabels { .. } | Self::MissingLabels { .. }
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::IncompleteLabels { type_name, .. }
            | Self::MissingLabels { type_name, .. }
            | Self::DuplicateLabel { type_name, .. } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_type() {
        let err = GraphError::MissingLabels {
            type_name: "Position",
            missing: vec!["C".to_string(), "D".to_string()],
        };
        assert_eq!(err.to_string(), "missing labels for Position: C, D");

        let err = GraphError::IncompleteLabels {
            type_name: "Move",
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "missing labels for Move: 1 labelled of 2 variants");
    }

    #[test]
    fn duplicate_is_not_a_missing_label() {
        let err = GraphError::DuplicateLabel {
            type_name: "Move",
            label: "Go".to_string(),
        };
        assert!(!err.is_missing_labels());
        assert_eq!(err.type_name(), "Move");
    }
}
