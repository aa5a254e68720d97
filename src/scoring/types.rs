//! Core trait for scoring methods.

use crate::dataset::AlternativeDataset;
use crate::weights::WeightVector;
use std::fmt;

/// Aggregates per-criterion values into one score per alternative.
///
/// Scores are returned in dataset row order, one per row. **Higher is
/// better**: the robust ranker keeps the `k` largest scores.
///
/// Implementations must be pure: the same dataset and weights always give
/// the same scores. They are shared across rayon workers, hence the
/// `Send + Sync` bound.
///
/// # Examples
///
/// ```
/// use u_mcdm::dataset::AlternativeDataset;
/// use u_mcdm::scoring::ScoringMethod;
/// use u_mcdm::weights::WeightVector;
///
/// // Scores each alternative by its single best weighted criterion.
/// struct MaxCriterion;
///
/// impl ScoringMethod for MaxCriterion {
///     fn name(&self) -> &str { "max_criterion" }
///
///     fn score(&self, data: &AlternativeDataset, weights: &WeightVector) -> Vec<f64> {
///         let shared = data.shared_criteria(weights);
///         (0..data.len())
///             .map(|r| shared.iter().map(|&(j, w)| data.value(r, j) * w).fold(0.0, f64::max))
///             .collect()
///     }
/// }
/// ```
pub trait ScoringMethod: Send + Sync {
    /// Returns the name of this method.
    fn name(&self) -> &str;

    /// Computes one score per row of `data`.
    fn score(&self, data: &AlternativeDataset, weights: &WeightVector) -> Vec<f64>;
}

/// Adapts a closure into a named [`ScoringMethod`].
///
/// ```
/// use u_mcdm::scoring::{ScoringFn, ScoringMethod};
///
/// let zero = ScoringFn::new("zero", |data, _weights| vec![0.0; data.len()]);
/// assert_eq!(zero.name(), "zero");
/// ```
pub struct ScoringFn<F> {
    name: String,
    f: F,
}

impl<F> ScoringFn<F>
where
    F: Fn(&AlternativeDataset, &WeightVector) -> Vec<f64> + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> ScoringMethod for ScoringFn<F>
where
    F: Fn(&AlternativeDataset, &WeightVector) -> Vec<f64> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn score(&self, data: &AlternativeDataset, weights: &WeightVector) -> Vec<f64> {
        (self.f)(data, weights)
    }
}

impl<F> fmt::Debug for ScoringFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringFn").field("name", &self.name).finish()
    }
}
