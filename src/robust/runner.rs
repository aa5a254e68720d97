//! Monte Carlo robust ranking loop.
//!
//! [`RobustRanker`] repeats: perturb weights → renormalize → score with
//! every method → credit the top-k alternatives, then turns the tallies
//! into proportions.

use super::config::RobustConfig;
use super::perturbation::{PerturbationSource, UniformPerturbation};
use crate::dataset::AlternativeDataset;
use crate::error::{McdmError, Result};
use crate::scoring::MethodRegistry;
use crate::weights::{normalize, WeightVector};
use rayon::prelude::*;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// One alternative's share of trials spent in the top-k, per method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RobustRow {
    /// Alternative identifier.
    pub id: String,

    /// Proportions in `[0, 1]`, one per method in registry order.
    pub proportions: Vec<f64>,
}

/// Result of a robust ranking run.
///
/// Rows are sorted by their proportion tuple, descending, and rows that
/// never reached the top-k under any method are omitted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RobustRanking {
    /// Name of the identifier column the rows are keyed by.
    pub id_column: String,

    /// Method names, in registry order.
    pub methods: Vec<String>,

    pub rows: Vec<RobustRow>,

    /// Trials actually executed. Proportions are relative to this count.
    pub trials_completed: usize,

    /// Whether the run was cancelled before all trials completed.
    pub cancelled: bool,
}

impl RobustRanking {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifiers in ranking order.
    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }

    /// Proportion for alternative `id` under `method`.
    ///
    /// Returns `None` if either is unknown or the alternative was filtered
    /// out for never reaching the top-k.
    pub fn get(&self, id: &str, method: &str) -> Option<f64> {
        let m = self.methods.iter().position(|name| name == method)?;
        self.rows
            .iter()
            .find(|r| r.id == id)
            .and_then(|r| r.proportions.get(m).copied())
    }

    /// Proportions of all listed alternatives under `method`, in row order.
    ///
    /// Returns `None` if the method is unknown or a row lacks its entry.
    pub fn column(&self, method: &str) -> Option<Vec<f64>> {
        let m = self.methods.iter().position(|name| name == method)?;
        self.rows.iter().map(|r| r.proportions.get(m).copied()).collect()
    }
}

/// Per-method, per-alternative top-k counts.
#[derive(Debug, Clone)]
struct Tally {
    counts: Vec<Vec<u32>>,
    trials: usize,
}

impl Tally {
    fn new(methods: usize, alternatives: usize) -> Self {
        Self {
            counts: vec![vec![0; alternatives]; methods],
            trials: 0,
        }
    }

    fn merge(mut self, other: Tally) -> Self {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        self.trials += other.trials;
        self
    }
}

/// Executes robust ranking.
///
/// # Usage
///
/// ```
/// use u_mcdm::dataset::AlternativeDataset;
/// use u_mcdm::robust::{RobustConfig, RobustRanker};
/// use u_mcdm::scoring::MethodRegistry;
/// use u_mcdm::weights::WeightVector;
///
/// let data = AlternativeDataset::new(
///     "supplier",
///     ["price", "quality"],
///     vec![
///         ("acme", vec![0.9, 0.8]),
///         ("globex", vec![0.4, 0.5]),
///         ("initech", vec![0.1, 0.2]),
///     ],
/// ).unwrap();
/// let weights = WeightVector::from_pairs([("price", 0.5), ("quality", 0.5)]).unwrap();
/// let config = RobustConfig::default().with_top_k(1).with_trials(20);
///
/// let ranking =
///     RobustRanker::run(&data, &weights, "supplier", &MethodRegistry::standard(), &config)
///         .unwrap();
///
/// assert_eq!(ranking.ids(), vec!["acme"]);
/// assert_eq!(ranking.get("acme", "weighted_sum"), Some(1.0));
/// ```
pub struct RobustRanker;

impl RobustRanker {
    /// Runs robust ranking with uniform perturbations.
    pub fn run(
        data: &AlternativeDataset,
        weights: &WeightVector,
        id_column: &str,
        registry: &MethodRegistry,
        config: &RobustConfig,
    ) -> Result<RobustRanking> {
        Self::run_with_cancel(data, weights, id_column, registry, config, None)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is checked before each trial. Once it is set, remaining
    /// trials are skipped and proportions are computed over the trials
    /// that did complete.
    pub fn run_with_cancel(
        data: &AlternativeDataset,
        weights: &WeightVector,
        id_column: &str,
        registry: &MethodRegistry,
        config: &RobustConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RobustRanking> {
        config.validate().map_err(McdmError::InvalidConfig)?;
        let source = UniformPerturbation::new(config.perturbation_range);
        Self::run_with_perturbation(data, weights, id_column, registry, config, &source, cancel)
    }

    /// Runs with a caller-supplied perturbation source.
    ///
    /// `config.perturbation_range` is validated but otherwise unused;
    /// `source` alone decides the factors.
    ///
    /// # Errors
    ///
    /// - [`McdmError::InvalidConfig`] for an invalid config or registry, or
    ///   a source returning the wrong number of factors.
    /// - [`McdmError::MissingColumn`] if `id_column` is not the dataset's
    ///   identifier column.
    /// - [`McdmError::ZeroWeightSum`], [`McdmError::NonFiniteWeightSum`] or
    ///   [`McdmError::InvalidWeight`] if the baseline or a perturbed weight
    ///   vector cannot be normalized.
    /// - [`McdmError::ScoreLengthMismatch`] if a method returns the wrong
    ///   number of scores.
    pub fn run_with_perturbation<P: PerturbationSource>(
        data: &AlternativeDataset,
        weights: &WeightVector,
        id_column: &str,
        registry: &MethodRegistry,
        config: &RobustConfig,
        source: &P,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RobustRanking> {
        config.validate().map_err(McdmError::InvalidConfig)?;
        registry.validate().map_err(McdmError::InvalidConfig)?;
        if data.id_column() != id_column {
            return Err(McdmError::MissingColumn(id_column.to_string()));
        }
        normalize(weights)?;

        debug!(
            alternatives = data.len(),
            criteria = weights.len(),
            methods = registry.len(),
            trials = config.trials,
            top_k = config.top_k,
            perturbation_range = config.perturbation_range,
            parallel = config.parallel,
            "robust ranking started"
        );

        let is_cancelled = || {
            cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
        };
        let trial = |tally: &mut Tally, t: usize| -> Result<()> {
            if is_cancelled() {
                return Ok(());
            }
            run_trial(t, data, weights, registry, source, config.top_k, tally)?;
            tally.trials += 1;
            Ok(())
        };

        let tally = if config.parallel {
            (0..config.trials)
                .into_par_iter()
                .try_fold(
                    || Tally::new(registry.len(), data.len()),
                    |mut tally, t| {
                        trial(&mut tally, t)?;
                        Ok::<_, McdmError>(tally)
                    },
                )
                .try_reduce(|| Tally::new(registry.len(), data.len()), |a, b| Ok(a.merge(b)))?
        } else {
            let mut tally = Tally::new(registry.len(), data.len());
            for t in 0..config.trials {
                if is_cancelled() {
                    break;
                }
                trial(&mut tally, t)?;
            }
            tally
        };

        let cancelled = tally.trials < config.trials;
        if cancelled {
            info!(
                completed = tally.trials,
                requested = config.trials,
                "robust ranking cancelled"
            );
        }

        let ranking = finalize(data, registry, tally, cancelled);
        debug!(
            listed = ranking.rows.len(),
            trials_completed = ranking.trials_completed,
            "robust ranking finished"
        );
        Ok(ranking)
    }
}

/// Runs robust ranking with the given parameters.
///
/// Shorthand for [`RobustRanker::run`] with a sequential [`RobustConfig`].
pub fn robust_rank(
    data: &AlternativeDataset,
    weights: &WeightVector,
    id_column: &str,
    registry: &MethodRegistry,
    perturbation_range: f64,
    top_k: usize,
    trials: usize,
) -> Result<RobustRanking> {
    let config = RobustConfig::default()
        .with_perturbation_range(perturbation_range)
        .with_top_k(top_k)
        .with_trials(trials);
    RobustRanker::run(data, weights, id_column, registry, &config)
}

/// Executes trial `t` and adds its top-k selections to `tally`.
fn run_trial<P: PerturbationSource>(
    t: usize,
    data: &AlternativeDataset,
    weights: &WeightVector,
    registry: &MethodRegistry,
    source: &P,
    top_k: usize,
    tally: &mut Tally,
) -> Result<()> {
    let factors = source.factors(t as u64, weights.len());
    if factors.len() != weights.len() {
        return Err(McdmError::InvalidConfig(format!(
            "perturbation source returned {} factors for {} criteria",
            factors.len(),
            weights.len()
        )));
    }
    let perturbed = normalize(&weights.scaled(&factors))?;

    for (m, method) in registry.iter().enumerate() {
        let scores = method.score(data, &perturbed);
        if scores.len() != data.len() {
            return Err(McdmError::ScoreLengthMismatch {
                method: method.name().to_string(),
                expected: data.len(),
                found: scores.len(),
            });
        }
        for r in top_k_indices(&scores, top_k) {
            tally.counts[m][r] += 1;
        }
    }
    Ok(())
}

/// Indices of the `k` largest scores, best first.
///
/// Equal scores keep row order (earlier row wins). NaN scores are never
/// selected, so fewer than `k` indices come back when too few are valid.
fn top_k_indices(scores: &[f64], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).filter(|&i| !scores[i].is_nan()).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(CmpOrdering::Equal)
    });
    indices.truncate(k);
    indices
}

/// Converts counts to proportions, drops all-zero rows, and sorts.
fn finalize(
    data: &AlternativeDataset,
    registry: &MethodRegistry,
    tally: Tally,
    cancelled: bool,
) -> RobustRanking {
    let trials = tally.trials;
    let mut rows: Vec<RobustRow> = data
        .ids()
        .iter()
        .enumerate()
        .map(|(r, id)| RobustRow {
            id: id.clone(),
            proportions: tally
                .counts
                .iter()
                .map(|per_method| {
                    if trials == 0 {
                        0.0
                    } else {
                        per_method[r] as f64 / trials as f64
                    }
                })
                .collect(),
        })
        .filter(|row| row.proportions.iter().any(|&p| p > 0.0))
        .collect();

    // Stable: rows with identical proportions keep dataset order.
    rows.sort_by(|a, b| {
        b.proportions
            .iter()
            .zip(&a.proportions)
            .map(|(x, y)| x.partial_cmp(y).unwrap_or(CmpOrdering::Equal))
            .find(|o| *o != CmpOrdering::Equal)
            .unwrap_or(CmpOrdering::Equal)
    });

    RobustRanking {
        id_column: data.id_column().to_string(),
        methods: registry.names().into_iter().map(String::from).collect(),
        rows,
        trials_completed: trials,
        cancelled,
    }
}
