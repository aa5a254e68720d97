//! Robust ranking under weight uncertainty.
//!
//! Repeatedly perturbs the baseline weights, re-scores every alternative
//! under every registered scoring method, and reports how often each
//! alternative lands among the `k` best. An alternative that stays in the
//! top-k across most perturbations is a robust choice; one that only
//! appears for the exact baseline weights is fragile.
//!
//! Each trial draws its factors from a generator seeded with the trial
//! index, so runs are reproducible and trials can be spread across
//! threads without changing the result.
//!
//! # References
//!
//! - Triantaphyllou & Sánchez (1997), "A Sensitivity Analysis Approach
//!   for Some Deterministic Multi-Criteria Decision-Making Methods"
//! - Butler, Jia & Dyer (1997), "Simulation techniques for the
//!   sensitivity analysis of multi-criteria decision models"

mod config;
mod perturbation;
mod runner;

pub use config::RobustConfig;
pub use perturbation::{PerturbationSource, UniformPerturbation};
pub use runner::{robust_rank, RobustRanker, RobustRanking, RobustRow};
