//! Error type shared by every module of the crate.

use thiserror::Error;

/// Errors raised by weighting, scoring, and robust ranking.
///
/// An inconsistent set of pairwise judgments is *not* an error; see
/// [`AhpResult::is_consistent`](crate::ahp::AhpResult::is_consistent).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McdmError {
    #[error("comparison matrix is {rows}x{cols} but {criteria} criteria were given")]
    DimensionMismatch {
        criteria: usize,
        rows: usize,
        cols: usize,
    },

    #[error("weights sum to zero and cannot be normalized")]
    ZeroWeightSum,

    #[error("weights sum to {0} and cannot be normalized")]
    NonFiniteWeightSum(f64),

    #[error("weight for '{criterion}' must be finite and nonnegative, got {value}")]
    InvalidWeight { criterion: String, value: f64 },

    #[error("{0} criteria is outside the supported random index range 3..=10")]
    UnsupportedCriteriaCount(usize),

    #[error("invalid comparison matrix at ({row}, {col}): {reason}")]
    InvalidMatrix {
        row: usize,
        col: usize,
        reason: String,
    },

    #[error("duplicate criterion '{0}'")]
    DuplicateCriterion(String),

    #[error("unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("invalid judgment: {0}")]
    InvalidJudgment(String),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("row '{id}' has {found} values, expected {expected}")]
    RaggedRow {
        id: String,
        expected: usize,
        found: usize,
    },

    #[error("duplicate alternative '{0}'")]
    DuplicateAlternative(String),

    #[error("method '{method}' returned {found} scores for {expected} alternatives")]
    ScoreLengthMismatch {
        method: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, McdmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dimension_mismatch() {
        let err = McdmError::DimensionMismatch {
            criteria: 3,
            rows: 2,
            cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "comparison matrix is 2x2 but 3 criteria were given"
        );
    }

    #[test]
    fn test_display_unsupported_count() {
        let err = McdmError::UnsupportedCriteriaCount(2);
        assert!(err.to_string().contains("3..=10"));
    }
}
