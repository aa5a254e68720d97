//! Pairwise comparison matrix.

use crate::error::{McdmError, Result};

/// Allowed deviation of `M[i][j] * M[j][i]` from 1.
///
/// The verbal scale rounds reciprocals to three digits (0.333, 0.143,
/// 0.111), so exact reciprocity cannot be required.
pub const RECIPROCAL_TOLERANCE: f64 = 0.01;

/// A validated n×n pairwise comparison matrix.
///
/// `M[i][j]` is how strongly criterion `i` is preferred over criterion
/// `j`. Construction checks that the matrix is square, every entry is
/// finite and strictly positive, the diagonal is 1, and
/// `M[i][j] * M[j][i] ≈ 1` within [`RECIPROCAL_TOLERANCE`].
///
/// # Examples
///
/// ```
/// use u_mcdm::ahp::ComparisonMatrix;
///
/// let m = ComparisonMatrix::from_rows(vec![
///     vec![1.0, 3.0],
///     vec![1.0 / 3.0, 1.0],
/// ]).unwrap();
/// assert_eq!(m.order(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    n: usize,
    data: Vec<f64>,
}

impl ComparisonMatrix {
    /// Builds a matrix from row vectors.
    ///
    /// # Errors
    ///
    /// [`McdmError::InvalidMatrix`] if the rows do not form a square matrix,
    /// or an entry violates positivity, the unit diagonal, or reciprocal
    /// symmetry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some((i, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(invalid(
                i,
                bad.len().min(n),
                format!("row {i} has {} entries, expected {n}", bad.len()),
            ));
        }

        let data: Vec<f64> = rows.into_iter().flatten().collect();
        let m = Self { n, data };
        m.check_invariants()?;
        Ok(m)
    }

    fn check_invariants(&self) -> Result<()> {
        for i in 0..self.n {
            for j in 0..self.n {
                let v = self.get(i, j);
                if !v.is_finite() || v <= 0.0 {
                    return Err(invalid(i, j, format!("entry {v} is not a positive number")));
                }
            }
        }

        for i in 0..self.n {
            let d = self.get(i, i);
            if (d - 1.0).abs() > f64::EPSILON {
                return Err(invalid(i, i, format!("diagonal entry is {d}, expected 1")));
            }
            for j in (i + 1)..self.n {
                let product = self.get(i, j) * self.get(j, i);
                if (product - 1.0).abs() > RECIPROCAL_TOLERANCE {
                    return Err(invalid(
                        i,
                        j,
                        format!("entries are not reciprocal (product {product})"),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Number of criteria compared.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds");
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Sum of each column.
    pub fn column_sums(&self) -> Vec<f64> {
        (0..self.n)
            .map(|j| (0..self.n).map(|i| self.get(i, j)).sum())
            .collect()
    }
}

fn invalid(row: usize, col: usize, reason: String) -> McdmError {
    McdmError::InvalidMatrix { row, col, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Vec<Vec<f64>> {
        vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 2.0],
            vec![1.0 / 5.0, 1.0 / 2.0, 1.0],
        ]
    }

    #[test]
    fn test_valid_matrix() {
        let m = ComparisonMatrix::from_rows(three()).unwrap();
        assert_eq!(m.order(), 3);
        assert!((m.get(0, 2) - 5.0).abs() < 1e-12);
        assert_eq!(m.row(1).len(), 3);
    }

    #[test]
    fn test_column_sums() {
        let m = ComparisonMatrix::from_rows(three()).unwrap();
        let sums = m.column_sums();
        assert!((sums[0] - (1.0 + 1.0 / 3.0 + 0.2)).abs() < 1e-12);
        assert!((sums[1] - 4.5).abs() < 1e-12);
        assert!((sums[2] - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_rounded_reciprocals_accepted() {
        let m = ComparisonMatrix::from_rows(vec![
            vec![1.0, 3.0, 7.0],
            vec![0.333, 1.0, 9.0],
            vec![0.143, 0.111, 1.0],
        ]);
        assert!(m.is_ok());
    }

    #[test]
    fn test_non_square() {
        let err = ComparisonMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.5]]).unwrap_err();
        assert!(matches!(err, McdmError::InvalidMatrix { row: 1, .. }));
        assert_eq!(
            err.to_string(),
            "invalid comparison matrix at (1, 1): row 1 has 1 entries, expected 2"
        );
    }

    #[test]
    fn test_non_positive_entry() {
        let err =
            ComparisonMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0, 1.0]]).unwrap_err();
        assert!(matches!(err, McdmError::InvalidMatrix { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_bad_diagonal() {
        let err =
            ComparisonMatrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 1.0]]).unwrap_err();
        assert!(matches!(err, McdmError::InvalidMatrix { row: 0, col: 0, .. }));
    }

    #[test]
    fn test_not_reciprocal() {
        let err =
            ComparisonMatrix::from_rows(vec![vec![1.0, 3.0], vec![3.0, 1.0]]).unwrap_err();
        assert!(matches!(err, McdmError::InvalidMatrix { row: 0, col: 1, .. }));
    }

    #[test]
    fn test_empty_matrix() {
        let m = ComparisonMatrix::from_rows(vec![]).unwrap();
        assert_eq!(m.order(), 0);
        assert!(m.column_sums().is_empty());
    }
}
