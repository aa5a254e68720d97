//! Analytic Hierarchy Process (AHP).
//!
//! Converts pairwise judgments between criteria into a priority (weight)
//! vector and a consistency diagnostic. Judgments can be entered as a raw
//! [`ComparisonMatrix`] or collected on the verbal scale through a
//! [`JudgmentSet`].
//!
//! An inconsistent judgment set (`CR >= 0.10` by default) is reported,
//! not rejected: the weights are returned and the caller decides.
//!
//! # References
//!
//! - Saaty (1977), "A Scaling Method for Priorities in Hierarchical Structures"
//! - Saaty (1980), "The Analytic Hierarchy Process"

mod config;
mod matrix;
mod scale;
mod solver;

pub use config::{AhpConfig, DEFAULT_CONSISTENCY_THRESHOLD};
pub use matrix::{ComparisonMatrix, RECIPROCAL_TOLERANCE};
pub use scale::{JudgmentSet, Preference};
pub use solver::{random_index, solve_ahp, AhpResult, AhpSolver};
