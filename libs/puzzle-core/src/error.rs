//! Error types for puzzle-core.

use crate::types::Side;
use thiserror::Error;

/// Result type alias using RecordError.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Per-record failures. These exclude one puzzle from the run and never
/// abort it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{label}: {reason}")]
    Validation { label: String, reason: String },

    #[error("{label}: invalid position {position:?}: {reason}")]
    InvalidPosition {
        label: String,
        position: String,
        reason: String,
    },

    #[error("{label}: solution does not fit {side} to move: {reason}")]
    MoveAgreement {
        label: String,
        side: Side,
        reason: String,
    },
}

impl RecordError {
    /// Label of the record that failed.
    pub fn label(&self) -> &str {
        match self {
            Self::Validation { label, .. }
            | Self::InvalidPosition { label, .. }
            | Self::MoveAgreement { label, .. } => label,
        }
    }

    /// Short machine-readable name for summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::InvalidPosition { .. } => "invalid_position",
            Self::MoveAgreement { .. } => "move_agreement",
        }
    }

    pub(crate) fn validation(label: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            label: label.to_string(),
            reason: reason.into(),
        }
    }
}

/// Fatal errors reading the puzzle file as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed puzzle file: {0}")]
    Format(String),
}

/// Errors raised at the collection store boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store cannot be opened or queried. Fatal for a run.
    #[error("collection unavailable: {0}")]
    Unavailable(String),

    /// A single deck or card could not be written.
    #[error("failed to write to deck {deck:?}: {reason}")]
    Write { deck: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_error_display_includes_label() {
        let error = RecordError::validation("card3", "missing required field `solution`");
        assert_eq!(error.to_string(), "card3: missing required field `solution`");
        assert_eq!(error.label(), "card3");
        assert_eq!(error.kind(), "validation");
    }

    #[test]
    fn move_agreement_names_side() {
        let error = RecordError::MoveAgreement {
            label: "p1".to_string(),
            side: Side::Black,
            reason: "move number marks a White move".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "p1: solution does not fit Black to move: move number marks a White move"
        );
        assert_eq!(error.kind(), "move_agreement");
    }

    #[test]
    fn store_error_display() {
        let error = StoreError::Write {
            deck: "Hard: Tactics".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "failed to write to deck \"Hard: Tactics\": disk full"
        );
    }
}
