//! Weighted sum and weighted product aggregation.

use super::types::ScoringMethod;
use crate::dataset::AlternativeDataset;
use crate::weights::WeightVector;

/// Simple additive weighting: `score = Σ value[c] * weight[c]`.
///
/// Only criteria present in both the dataset and the weights contribute
/// (see [`AlternativeDataset::shared_criteria`]). With no shared criteria
/// every score is 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedSum;

impl ScoringMethod for WeightedSum {
    fn name(&self) -> &str {
        "weighted_sum"
    }

    fn score(&self, data: &AlternativeDataset, weights: &WeightVector) -> Vec<f64> {
        let shared = data.shared_criteria(weights);
        (0..data.len())
            .map(|r| shared.iter().map(|&(j, w)| data.value(r, j) * w).sum())
            .collect()
    }
}

/// Multiplicative weighting: `score = Π value[c] ^ weight[c]`.
///
/// Skips criteria the same way as [`WeightedSum`]. With no shared
/// criteria every score is 1. A zero value on any positively weighted
/// criterion zeroes the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedProduct;

impl ScoringMethod for WeightedProduct {
    fn name(&self) -> &str {
        "weighted_product"
    }

    fn score(&self, data: &AlternativeDataset, weights: &WeightVector) -> Vec<f64> {
        let shared = data.shared_criteria(weights);
        (0..data.len())
            .map(|r| {
                shared
                    .iter()
                    .fold(1.0, |acc, &(j, w)| acc * data.value(r, j).powf(w))
            })
            .collect()
    }
}

/// Scores `data` under `weights` with `method`.
///
/// ```
/// use u_mcdm::dataset::AlternativeDataset;
/// use u_mcdm::scoring::{score, WeightedSum};
/// use u_mcdm::weights::WeightVector;
///
/// let data = AlternativeDataset::new("id", ["P", "Q"], vec![("a", vec![0.5, 0.5])]).unwrap();
/// let weights = WeightVector::from_pairs([("P", 0.6), ("Q", 0.4)]).unwrap();
/// assert!((score(&data, &weights, &WeightedSum)[0] - 0.5).abs() < 1e-12);
/// ```
pub fn score(
    data: &AlternativeDataset,
    weights: &WeightVector,
    method: &dyn ScoringMethod,
) -> Vec<f64> {
    method.score(data, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> AlternativeDataset {
        AlternativeDataset::new("id", ["P", "Q"], vec![("a", vec![0.5, 0.5])]).unwrap()
    }

    fn weights() -> WeightVector {
        WeightVector::from_pairs([("P", 0.6), ("Q", 0.4)]).unwrap()
    }

    fn three() -> AlternativeDataset {
        AlternativeDataset::new(
            "id",
            ["P", "Q"],
            vec![
                ("a", vec![1.0, 0.0]),
                ("b", vec![0.5, 0.5]),
                ("c", vec![0.25, 1.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_weighted_sum_single() {
        let s = WeightedSum.score(&single(), &weights());
        assert_eq!(s.len(), 1);
        assert!((s[0] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_weighted_product_single() {
        let s = WeightedProduct.score(&single(), &weights());
        let expected = 0.5f64.powf(0.6) * 0.5f64.powf(0.4);
        assert!((s[0] - expected).abs() < 1e-10);
        assert!((s[0] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_row_order_preserved() {
        let s = WeightedSum.score(&three(), &weights());
        assert!((s[0] - 0.6).abs() < 1e-10);
        assert!((s[1] - 0.5).abs() < 1e-10);
        assert!((s[2] - 0.55).abs() < 1e-10);
    }

    #[test]
    fn test_product_zero_value() {
        let s = WeightedProduct.score(&three(), &weights());
        assert_eq!(s[0], 0.0);
        assert!(s[2] > 0.0);
    }

    #[test]
    fn test_missing_criterion_skipped() {
        let w = WeightVector::from_pairs([("P", 0.6), ("R", 0.4)]).unwrap();
        let sum = WeightedSum.score(&single(), &w);
        assert!((sum[0] - 0.3).abs() < 1e-10);

        let product = WeightedProduct.score(&single(), &w);
        assert!((product[0] - 0.5f64.powf(0.6)).abs() < 1e-10);
    }

    #[test]
    fn test_no_shared_criteria() {
        let w = WeightVector::from_pairs([("R", 1.0)]).unwrap();
        assert_eq!(WeightedSum.score(&three(), &w), vec![0.0; 3]);
        assert_eq!(WeightedProduct.score(&three(), &w), vec![1.0; 3]);
    }

    #[test]
    fn test_empty_dataset() {
        let empty =
            AlternativeDataset::new("id", ["P"], Vec::<(String, Vec<f64>)>::new()).unwrap();
        assert!(WeightedSum.score(&empty, &weights()).is_empty());
        assert!(WeightedProduct.score(&empty, &weights()).is_empty());
    }

    #[test]
    fn test_score_dispatch() {
        let s = score(&single(), &weights(), &WeightedProduct);
        assert!((s[0] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_names() {
        assert_eq!(WeightedSum.name(), "weighted_sum");
        assert_eq!(WeightedProduct.name(), "weighted_product");
    }
}
