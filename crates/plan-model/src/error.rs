//! Error types for plan rows
//!
//! Rows are checked once, when they cross the storage boundary. Every
//! failing row is reported, not only the first one.

use crate::records::RecordKind;

/// Errors raised while turning raw rows into typed records
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// One or more rows failed to decode
    #[error("{} invalid row(s), first: {}", .errors.len(), first_error(.errors))]
    InvalidRows {
        /// Every row that failed, in input order
        errors: Vec<RowError>,
    },

    /// Identifier already used by another row
    #[error("duplicate {kind} id: {id}")]
    DuplicateId {
        /// Record kind holding the duplicate
        kind: RecordKind,
        /// Offending identifier
        id: String,
    },

    /// Row set is neither an array nor null
    #[error("{kind} rows must be a JSON array, got {found}")]
    NotAnArray {
        /// Record kind of the row set
        kind: RecordKind,
        /// JSON type actually received
        found: &'static str,
    },
}

impl ModelError {
    /// Rows rejected by this error, if it carries any
    #[inline]
    #[must_use]
    pub fn row_errors(&self) -> &[RowError] {
        match self {
            Self::InvalidRows { errors } => errors,
            _ => &[],
        }
    }
}

fn first_error(errors: &[RowError]) -> String {
    errors
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}

/// A single row that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} row {index}: {message}")]
pub struct RowError {
    /// Record kind of the row
    pub kind: RecordKind,
    /// Position of the row in its input array
    pub index: usize,
    /// Decoder message
    pub message: String,
}

impl RowError {
    /// Create new row error
    #[inline]
    #[must_use]
    pub fn new(kind: RecordKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Label that matches none of the known status or criticality values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {value:?}")]
pub struct UnknownLabel {
    /// Label family (`status`, `criticality`)
    pub kind: &'static str,
    /// Raw value received
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rows_display_mentions_first() {
        let err = ModelError::InvalidRows {
            errors: vec![
                RowError::new(RecordKind::Task, 3, "missing field `tache_id`"),
                RowError::new(RecordKind::Phase, 0, "other"),
            ],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("2 invalid row(s)"));
        assert!(msg.contains("task row 3"));
        assert_eq!(err.row_errors().len(), 2);
    }

    #[test]
    fn duplicate_id_display() {
        let err = ModelError::DuplicateId {
            kind: RecordKind::Milestone,
            id: "J1".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate milestone id: J1");
        assert!(err.row_errors().is_empty());
    }
}
