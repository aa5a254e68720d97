//! Alternatives × criteria table.

use crate::error::{McdmError, Result};
use crate::weights::WeightVector;

/// An in-memory table of alternatives scored on each criterion.
///
/// One identifier column names the alternatives; every other column is a
/// numeric criterion. Values are expected to be on a comparable scale,
/// typically `[0, 1]` (see [`min_max_normalize`](super::min_max_normalize)).
///
/// # Examples
///
/// ```
/// use u_mcdm::dataset::AlternativeDataset;
///
/// let ds = AlternativeDataset::new(
///     "supplier",
///     ["price", "quality"],
///     vec![
///         ("acme", vec![0.2, 0.9]),
///         ("globex", vec![0.8, 0.4]),
///     ],
/// ).unwrap();
///
/// assert_eq!(ds.len(), 2);
/// assert_eq!(ds.value(1, 0), 0.8);
/// assert_eq!(ds.column("quality").unwrap(), vec![0.9, 0.4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeDataset {
    id_column: String,
    criteria: Vec<String>,
    ids: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl AlternativeDataset {
    /// Builds a dataset from `(identifier, values)` rows.
    ///
    /// # Errors
    ///
    /// - [`McdmError::DuplicateCriterion`] if a column name repeats.
    /// - [`McdmError::RaggedRow`] if a row does not have one value per column.
    /// - [`McdmError::DuplicateAlternative`] if an identifier repeats.
    pub fn new<C, S, R, I>(id_column: impl Into<String>, criteria: C, rows: R) -> Result<Self>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = (I, Vec<f64>)>,
        I: Into<String>,
    {
        let id_column = id_column.into();
        let mut names: Vec<String> = Vec::new();
        for c in criteria {
            let c = c.into();
            if c == id_column || names.contains(&c) {
                return Err(McdmError::DuplicateCriterion(c));
            }
            names.push(c);
        }

        let mut ids: Vec<String> = Vec::new();
        let mut values = Vec::new();
        for (id, row) in rows {
            let id = id.into();
            if row.len() != names.len() {
                return Err(McdmError::RaggedRow {
                    id,
                    expected: names.len(),
                    found: row.len(),
                });
            }
            if ids.contains(&id) {
                return Err(McdmError::DuplicateAlternative(id));
            }
            ids.push(id);
            values.push(row);
        }

        Ok(Self {
            id_column,
            criteria: names,
            ids,
            values,
        })
    }

    /// Name of the identifier column.
    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    /// Criterion column names, in order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Alternative identifiers, in row order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Index of a criterion column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.criteria.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// All values of row `row`, in column order.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row]
    }

    /// Copy of a criterion column.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let j = self.column_index(name)?;
        Some(self.values.iter().map(|r| r[j]).collect())
    }

    /// The criteria present in both `weights` and this dataset.
    ///
    /// Returns `(column index, weight)` in weight order. Weighted criteria
    /// the dataset does not carry are left out; scoring rules only ever
    /// aggregate over this intersection.
    pub fn shared_criteria(&self, weights: &WeightVector) -> Vec<(usize, f64)> {
        weights
            .iter()
            .filter_map(|(name, w)| self.column_index(name).map(|j| (j, w)))
            .collect()
    }

    /// Returns a copy with the named columns rescaled into `[0, 1]`.
    ///
    /// Fails with [`McdmError::MissingColumn`] for an unknown name.
    pub fn normalized_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let mut out = self.clone();
        for name in names {
            let name = name.as_ref();
            let j = self
                .column_index(name)
                .ok_or_else(|| McdmError::MissingColumn(name.to_string()))?;
            let column: Vec<f64> = self.values.iter().map(|r| r[j]).collect();
            for (row, v) in out.values.iter_mut().zip(super::min_max_normalize(&column)) {
                row[j] = v;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AlternativeDataset {
        AlternativeDataset::new(
            "id",
            ["P", "Q"],
            vec![("a", vec![0.5, 10.0]), ("b", vec![1.0, 20.0]), ("c", vec![0.0, 30.0])],
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let ds = sample();
        assert_eq!(ds.id_column(), "id");
        assert_eq!(ds.ids(), &["a", "b", "c"]);
        assert_eq!(ds.criteria(), &["P", "Q"]);
        assert_eq!(ds.row(2), &[0.0, 30.0]);
        assert_eq!(ds.column("R"), None);
    }

    #[test]
    fn test_ragged_row() {
        let err = AlternativeDataset::new("id", ["P", "Q"], vec![("a", vec![1.0])]).unwrap_err();
        assert_eq!(
            err,
            McdmError::RaggedRow {
                id: "a".into(),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_duplicate_alternative() {
        let err = AlternativeDataset::new("id", ["P"], vec![("a", vec![1.0]), ("a", vec![2.0])])
            .unwrap_err();
        assert_eq!(err, McdmError::DuplicateAlternative("a".into()));
    }

    #[test]
    fn test_duplicate_column() {
        let err = AlternativeDataset::new("id", ["P", "P"], Vec::<(String, Vec<f64>)>::new())
            .unwrap_err();
        assert_eq!(err, McdmError::DuplicateCriterion("P".into()));

        let err = AlternativeDataset::new("id", ["id"], Vec::<(String, Vec<f64>)>::new())
            .unwrap_err();
        assert_eq!(err, McdmError::DuplicateCriterion("id".into()));
    }

    #[test]
    fn test_shared_criteria_skips_missing() {
        let ds = sample();
        let w = WeightVector::from_pairs([("Q", 0.3), ("missing", 0.5), ("P", 0.2)]).unwrap();
        assert_eq!(ds.shared_criteria(&w), vec![(1, 0.3), (0, 0.2)]);
    }

    #[test]
    fn test_normalized_columns() {
        let ds = sample().normalized_columns(&["Q"]).unwrap();
        assert_eq!(ds.column("Q").unwrap(), vec![0.0, 0.5, 1.0]);
        // untouched
        assert_eq!(ds.column("P").unwrap(), vec![0.5, 1.0, 0.0]);
    }

    #[test]
    fn test_normalized_unknown_column() {
        let err = sample().normalized_columns(&["Z"]).unwrap_err();
        assert_eq!(err, McdmError::MissingColumn("Z".into()));
    }
}
