//! Error types of hmmgen.

use thiserror::Error;

/// Errors raised while building a model or generating a sequence.
///
/// Validation errors are always raised before the first random draw,
/// so a failed call never produces a partial sequence.
#[derive(Debug, Error)]
pub enum HmmError {
    /// A probability vector is not a distribution
    /// (negative/NaN/above-one entry, or a sum away from 1).
    #[error("invalid distribution in {what}: {reason}")]
    InvalidDistribution { what: String, reason: String },

    /// A matrix or vector does not match the size of the label sets.
    #[error("dimension mismatch in {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        got: usize,
    },

    /// Requested sequence length is smaller than 1.
    #[error("invalid length {0}: at least one position is required")]
    InvalidLength(usize),

    /// A model file refers to a label that is not declared.
    #[error("unknown label `{0}`")]
    UnknownLabel(String),

    /// A label appears twice in `states` or `symbols`.
    #[error("duplicate label `{0}`")]
    DuplicateLabel(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("model file error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HmmError>;

impl HmmError {
    pub(crate) fn distribution(what: impl Into<String>, reason: impl Into<String>) -> Self {
        HmmError::InvalidDistribution {
            what: what.into(),
            reason: reason.into(),
        }
    }
    pub(crate) fn dimension(what: impl Into<String>, expected: usize, got: usize) -> Self {
        HmmError::DimensionMismatch {
            what: what.into(),
            expected,
            got,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = HmmError::dimension("transition", 2, 3);
        assert_eq!(
            e.to_string(),
            "dimension mismatch in transition: expected 2, got 3"
        );
        let e = HmmError::distribution("initial", "sum is 1.1");
        assert_eq!(e.to_string(), "invalid distribution in initial: sum is 1.1");
        assert_eq!(
            HmmError::InvalidLength(0).to_string(),
            "invalid length 0: at least one position is required"
        );
    }
}
