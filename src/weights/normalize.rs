//! Sum-to-one rescaling.

use super::types::WeightVector;
use crate::error::{McdmError, Result};

/// Rescales `weights` so that its values sum to 1.
///
/// Keys and order are preserved. The input is not modified.
///
/// # Errors
///
/// - [`McdmError::InvalidWeight`] if any weight is negative or not finite.
/// - [`McdmError::ZeroWeightSum`] if all weights are zero.
/// - [`McdmError::NonFiniteWeightSum`] if the weights overflow when summed.
///
/// # Examples
///
/// ```
/// use u_mcdm::weights::{normalize, WeightVector};
///
/// let w = WeightVector::from_pairs([("A", 2.0), ("B", 2.0), ("C", 4.0)]).unwrap();
/// let n = normalize(&w).unwrap();
/// assert!((n.get("C").unwrap() - 0.5).abs() < 1e-12);
/// ```
pub fn normalize(weights: &WeightVector) -> Result<WeightVector> {
    if let Some((name, value)) = weights.iter().find(|&(_, v)| !v.is_finite() || v < 0.0) {
        return Err(McdmError::InvalidWeight {
            criterion: name.to_string(),
            value,
        });
    }

    let total = weights.sum();
    if total == 0.0 {
        return Err(McdmError::ZeroWeightSum);
    }
    if !total.is_finite() {
        return Err(McdmError::NonFiniteWeightSum(total));
    }

    Ok(weights.map_values(|v| v / total))
}
