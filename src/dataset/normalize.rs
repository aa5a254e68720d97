//! Min-max rescaling of raw criterion values.

/// Rescales `values` linearly so the minimum maps to 0 and the maximum to 1.
///
/// A constant input maps to all zeros. Non-finite values propagate.
///
/// # Examples
///
/// ```
/// use u_mcdm::dataset::min_max_normalize;
///
/// assert_eq!(min_max_normalize(&[2.0, 4.0, 6.0]), vec![0.0, 0.5, 1.0]);
/// assert_eq!(min_max_normalize(&[3.0, 3.0]), vec![0.0, 0.0]);
/// ```
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / range).collect()
}
