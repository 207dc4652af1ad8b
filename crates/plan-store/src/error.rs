//! Error types for plan storage

use plan_model::ModelError;
use std::path::PathBuf;

/// Storage and loading errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backend could not serve the request
    #[error("backend error: {0}")]
    Backend(String),

    /// Rows failed boundary validation
    #[error("invalid plan rows: {0}")]
    InvalidRows(#[from] ModelError),

    /// Snapshot file could not be read
    #[error("cannot read snapshot {}: {source}", .path.display())]
    SnapshotIo {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot document is malformed
    #[error("invalid snapshot: {0}")]
    SnapshotFormat(#[from] serde_json::Error),
}

impl StoreError {
    /// Check if retrying the same request may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Backend(_) | Self::SnapshotIo { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_model::RecordKind;

    #[test]
    fn retryable_classification() {
        assert!(StoreError::Backend("timeout".to_string()).is_retryable());

        let invalid = StoreError::from(ModelError::DuplicateId {
            kind: RecordKind::Task,
            id: "T1".to_string(),
        });
        assert!(!invalid.is_retryable());
        assert_eq!(
            invalid.to_string(),
            "invalid plan rows: duplicate task id: T1"
        );
    }

    #[test]
    fn snapshot_io_display() {
        let err = StoreError::SnapshotIo {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("cannot read snapshot missing.json"));
        assert!(err.is_retryable());
    }
}
