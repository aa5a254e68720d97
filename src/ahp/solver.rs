//! Priority vector and consistency computation.

use super::config::AhpConfig;
use super::matrix::ComparisonMatrix;
use crate::error::{McdmError, Result};
use crate::weights::WeightVector;
use tracing::{debug, warn};

/// Saaty's Random Index, indexed by the number of criteria.
///
/// Entries for n = 0, 1, 2 are zero: the consistency ratio is undefined
/// for fewer than three criteria.
const RANDOM_INDEX: [f64; 11] = [0.0, 0.0, 0.0, 0.58, 0.9, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Returns the Random Index for `n` criteria, or `None` outside `3..=10`.
///
/// ```
/// use u_mcdm::ahp::random_index;
///
/// assert_eq!(random_index(3), Some(0.58));
/// assert_eq!(random_index(2), None);
/// assert_eq!(random_index(11), None);
/// ```
pub fn random_index(n: usize) -> Option<f64> {
    RANDOM_INDEX.get(n).copied().filter(|&ri| ri > 0.0)
}

/// Output of an AHP solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpResult {
    /// Priority vector keyed by criterion, in input order. Sums to 1.
    pub weights: WeightVector,

    /// Estimated principal eigenvalue.
    pub lambda_max: f64,

    /// `CI = (λmax - n) / (n - 1)`.
    pub consistency_index: f64,

    /// `CR = CI / RI[n]`.
    pub consistency_ratio: f64,

    /// `false` when `CR` reached the configured threshold. Advisory only.
    pub is_consistent: bool,
}

/// Derives criterion weights from a pairwise comparison matrix.
///
/// Uses the column-normalization approximation of the principal
/// eigenvector: every column is divided by its sum and the rows of the
/// result are averaged.
///
/// # Examples
///
/// ```
/// use u_mcdm::ahp::{AhpSolver, ComparisonMatrix};
///
/// let m = ComparisonMatrix::from_rows(vec![
///     vec![1.0, 3.0, 5.0],
///     vec![1.0 / 3.0, 1.0, 2.0],
///     vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
/// ]).unwrap();
///
/// let result = AhpSolver::solve(&["X", "Y", "Z"], &m).unwrap();
/// assert!(result.is_consistent);
/// assert!((result.weights.sum() - 1.0).abs() < 1e-10);
/// ```
///
/// # References
///
/// Saaty (1980), "The Analytic Hierarchy Process"
pub struct AhpSolver;

impl AhpSolver {
    /// Solves with the default [`AhpConfig`].
    pub fn solve<S: AsRef<str>>(criteria: &[S], matrix: &ComparisonMatrix) -> Result<AhpResult> {
        Self::solve_with_config(criteria, matrix, &AhpConfig::default())
    }

    /// Solves with an explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`McdmError::InvalidConfig`] if `config` does not validate.
    /// - [`McdmError::DimensionMismatch`] if the matrix order differs
    ///   from the number of criteria.
    /// - [`McdmError::DuplicateCriterion`] if a criterion name repeats.
    /// - [`McdmError::UnsupportedCriteriaCount`] outside `3..=10` criteria.
    pub fn solve_with_config<S: AsRef<str>>(
        criteria: &[S],
        matrix: &ComparisonMatrix,
        config: &AhpConfig,
    ) -> Result<AhpResult> {
        config.validate().map_err(McdmError::InvalidConfig)?;

        let n = criteria.len();
        if matrix.order() != n {
            return Err(McdmError::DimensionMismatch {
                criteria: n,
                rows: matrix.order(),
                cols: matrix.order(),
            });
        }
        for (i, c) in criteria.iter().enumerate() {
            if criteria[..i].iter().any(|p| p.as_ref() == c.as_ref()) {
                return Err(McdmError::DuplicateCriterion(c.as_ref().to_string()));
            }
        }
        let ri = random_index(n).ok_or(McdmError::UnsupportedCriteriaCount(n))?;

        let column_sums = matrix.column_sums();
        let priority: Vec<f64> = (0..n)
            .map(|i| {
                let row = matrix.row(i);
                row.iter()
                    .zip(&column_sums)
                    .map(|(v, s)| v / s)
                    .sum::<f64>()
                    / n as f64
            })
            .collect();

        let lambda_max: f64 = priority.iter().zip(&column_sums).map(|(p, s)| p * s).sum();
        let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
        let consistency_ratio = consistency_index / ri;
        let is_consistent = consistency_ratio < config.consistency_threshold;

        debug!(n, lambda_max, consistency_index, consistency_ratio, "ahp solved");
        if !is_consistent {
            warn!(
                consistency_ratio,
                threshold = config.consistency_threshold,
                "pairwise judgments are not consistent"
            );
        }

        let weights = WeightVector::from_pairs(
            criteria
                .iter()
                .map(|c| c.as_ref().to_string())
                .zip(priority),
        )?;

        Ok(AhpResult {
            weights,
            lambda_max,
            consistency_index,
            consistency_ratio,
            is_consistent,
        })
    }
}

/// Solves an AHP problem with default settings.
///
/// Shorthand for [`AhpSolver::solve`].
pub fn solve_ahp<S: AsRef<str>>(criteria: &[S], matrix: &ComparisonMatrix) -> Result<AhpResult> {
    AhpSolver::solve(criteria, matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consistent_matrix() -> ComparisonMatrix {
        ComparisonMatrix::from_rows(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 2.0],
            vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
        ])
        .unwrap()
    }

    // A cyclic preference: X > Y, Y > Z, Z > X.
    fn cyclic_matrix() -> ComparisonMatrix {
        ComparisonMatrix::from_rows(vec![
            vec![1.0, 9.0, 1.0 / 9.0],
            vec![1.0 / 9.0, 1.0, 9.0],
            vec![9.0, 1.0 / 9.0, 1.0],
        ])
        .unwrap()
    }

    fn identity(n: usize) -> ComparisonMatrix {
        ComparisonMatrix::from_rows(vec![vec![1.0; n]; n]).unwrap()
    }

    #[test]
    fn test_consistent_judgments() {
        let result = AhpSolver::solve(&["X", "Y", "Z"], &consistent_matrix()).unwrap();

        assert!((result.weights.sum() - 1.0).abs() < 1e-10);
        assert!(result.consistency_ratio < 0.10);
        assert!(result.is_consistent);

        // X dominates, Z is least preferred
        let x = result.weights.get("X").unwrap();
        let y = result.weights.get("Y").unwrap();
        let z = result.weights.get("Z").unwrap();
        assert!(x > y && y > z);
        assert!((x - 0.6479).abs() < 1e-3, "x = {x}");
        assert!((result.lambda_max - 3.0055).abs() < 1e-3);
    }

    #[test]
    fn test_weights_follow_criteria_order() {
        let result = AhpSolver::solve(&["X", "Y", "Z"], &consistent_matrix()).unwrap();
        assert_eq!(result.weights.names().collect::<Vec<_>>(), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn test_inconsistent_is_advisory() {
        let result = AhpSolver::solve(&["X", "Y", "Z"], &cyclic_matrix()).unwrap();

        assert!(!result.is_consistent);
        assert!(result.consistency_ratio >= 0.10);
        assert!((result.weights.sum() - 1.0).abs() < 1e-10);
        for (_, w) in result.weights.iter() {
            assert!((w - 1.0 / 3.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_identity_is_perfectly_consistent() {
        let result = AhpSolver::solve(&["a", "b", "c", "d"], &identity(4)).unwrap();
        assert!(result.consistency_index.abs() < 1e-12);
        assert!(result.consistency_ratio.abs() < 1e-12);
        for (_, w) in result.weights.iter() {
            assert!((w - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = AhpSolver::solve(&["X", "Y"], &consistent_matrix()).unwrap_err();
        assert_eq!(
            err,
            McdmError::DimensionMismatch {
                criteria: 2,
                rows: 3,
                cols: 3
            }
        );
    }

    #[test]
    fn test_two_criteria_unsupported() {
        let err = AhpSolver::solve(&["a", "b"], &identity(2)).unwrap_err();
        assert_eq!(err, McdmError::UnsupportedCriteriaCount(2));
    }

    #[test]
    fn test_eleven_criteria_unsupported() {
        let names: Vec<String> = (0..11).map(|i| format!("c{i}")).collect();
        let err = AhpSolver::solve(&names, &identity(11)).unwrap_err();
        assert_eq!(err, McdmError::UnsupportedCriteriaCount(11));
    }

    #[test]
    fn test_ten_criteria_supported() {
        let names: Vec<String> = (0..10).map(|i| format!("c{i}")).collect();
        assert!(AhpSolver::solve(&names, &identity(10)).is_ok());
    }

    #[test]
    fn test_duplicate_criterion() {
        let err = AhpSolver::solve(&["X", "Y", "X"], &consistent_matrix()).unwrap_err();
        assert_eq!(err, McdmError::DuplicateCriterion("X".into()));
    }

    #[test]
    fn test_custom_threshold() {
        let strict = AhpConfig::default().with_consistency_threshold(0.001);
        let result =
            AhpSolver::solve_with_config(&["X", "Y", "Z"], &consistent_matrix(), &strict)
                .unwrap();
        assert!(!result.is_consistent);
    }

    #[test]
    fn test_invalid_config() {
        let bad = AhpConfig::default().with_consistency_threshold(-1.0);
        let err = AhpSolver::solve_with_config(&["X", "Y", "Z"], &consistent_matrix(), &bad)
            .unwrap_err();
        assert!(matches!(err, McdmError::InvalidConfig(_)));
    }

    #[test]
    fn test_random_index_table() {
        assert_eq!(random_index(0), None);
        assert_eq!(random_index(1), None);
        assert_eq!(random_index(4), Some(0.9));
        assert_eq!(random_index(10), Some(1.49));
    }
}
