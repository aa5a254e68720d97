//! Per-trial weight perturbation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the multiplicative weight factors for a trial.
///
/// Implementations must derive the factors from `trial` alone, never from
/// state shared between calls, so that trials can run in any order or in
/// parallel and still give the same ranking.
pub trait PerturbationSource: Send + Sync {
    /// Returns `n` factors for trial `trial`, one per criterion in weight order.
    fn factors(&self, trial: u64, n: usize) -> Vec<f64>;
}

/// Independent uniform factors in `[1 - range, 1 + range]`.
///
/// Trial `t` seeds a fresh [`StdRng`] with `t`.
///
/// # Examples
///
/// ```
/// use u_mcdm::robust::{PerturbationSource, UniformPerturbation};
///
/// let source = UniformPerturbation::new(0.1);
/// let a = source.factors(7, 4);
/// let b = source.factors(7, 4);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|f| (0.9..=1.1).contains(f)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UniformPerturbation {
    range: f64,
}

impl UniformPerturbation {
    /// # Panics
    /// Panics if `range` is not in `[0, 1]`.
    pub fn new(range: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&range),
            "perturbation range must be in [0, 1], got {range}"
        );
        Self { range }
    }

    pub fn range(&self) -> f64 {
        self.range
    }
}

impl PerturbationSource for UniformPerturbation {
    fn factors(&self, trial: u64, n: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(trial);
        let low = 1.0 - self.range;
        let high = 1.0 + self.range;
        (0..n).map(|_| rng.random_range(low..=high)).collect()
    }
}
