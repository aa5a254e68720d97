//! Robust ranking configuration.

/// Configuration for [`RobustRanker`](super::RobustRanker).
///
/// # Defaults
///
/// ```
/// use u_mcdm::robust::RobustConfig;
///
/// let config = RobustConfig::default();
/// assert!((config.perturbation_range - 0.1).abs() < 1e-12);
/// assert_eq!(config.top_k, 5);
/// assert_eq!(config.trials, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_mcdm::robust::RobustConfig;
///
/// let config = RobustConfig::default()
///     .with_perturbation_range(0.25)
///     .with_top_k(3)
///     .with_trials(1000)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RobustConfig {
    /// Half-width `p` of the multiplicative perturbation: every weight is
    /// scaled by a factor drawn uniformly from `[1 - p, 1 + p]`.
    ///
    /// Must lie in `[0, 1]`.
    pub perturbation_range: f64,

    /// Number of best alternatives credited per method and trial.
    pub top_k: usize,

    /// Number of perturbation trials. Trial `t` is seeded with `t`.
    pub trials: usize,

    /// Whether to run trials in parallel using rayon.
    ///
    /// Results are identical to a sequential run.
    pub parallel: bool,
}

impl Default for RobustConfig {
    fn default() -> Self {
        Self {
            perturbation_range: 0.1,
            top_k: 5,
            trials: 100,
            parallel: false,
        }
    }
}

impl RobustConfig {
    pub fn with_perturbation_range(mut self, p: f64) -> Self {
        self.perturbation_range = p;
        self
    }

    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.perturbation_range) {
            return Err(format!(
                "perturbation_range must be in [0, 1], got {}",
                self.perturbation_range
            ));
        }
        if self.top_k == 0 {
            return Err("top_k must be at least 1".into());
        }
        if self.trials == 0 {
            return Err("trials must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert!(RobustConfig::default().validate().is_ok());
        assert!(RobustConfig::default()
            .with_perturbation_range(0.0)
            .validate()
            .is_ok());
        assert!(RobustConfig::default()
            .with_perturbation_range(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_range() {
        let config = RobustConfig::default().with_perturbation_range(1.5);
        assert!(config.validate().is_err());
        let config = RobustConfig::default().with_perturbation_range(-0.1);
        assert!(config.validate().is_err());
        let config = RobustConfig::default().with_perturbation_range(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_top_k() {
        assert!(RobustConfig::default().with_top_k(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_trials() {
        assert!(RobustConfig::default().with_trials(0).validate().is_err());
    }
}
