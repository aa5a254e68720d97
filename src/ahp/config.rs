//! AHP solver configuration.

/// Consistency ratio at or above which judgments are flagged.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Configuration for [`AhpSolver`](super::AhpSolver).
///
/// # Examples
///
/// ```
/// use u_mcdm::ahp::AhpConfig;
///
/// let config = AhpConfig::default().with_consistency_threshold(0.08);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AhpConfig {
    /// Judgments with `CR >= consistency_threshold` are reported as
    /// inconsistent. The priority vector is returned either way.
    ///
    /// Saaty's rule of thumb is 0.10.
    pub consistency_threshold: f64,
}

impl Default for AhpConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
        }
    }
}

impl AhpConfig {
    pub fn with_consistency_threshold(mut self, threshold: f64) -> Self {
        self.consistency_threshold = threshold;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.consistency_threshold.is_finite() || self.consistency_threshold <= 0.0 {
            return Err(format!(
                "consistency_threshold must be positive, got {}",
                self.consistency_threshold
            ));
        }
        Ok(())
    }
}
