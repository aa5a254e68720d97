//! Scoring strategies.
//!
//! A [`ScoringMethod`] combines a [`WeightVector`](crate::weights::WeightVector)
//! with an [`AlternativeDataset`](crate::dataset::AlternativeDataset) into one
//! score per alternative. Two rules ship with the crate:
//!
//! - [`WeightedSum`]: `Σ value[c] * weight[c]`
//! - [`WeightedProduct`]: `Π value[c] ^ weight[c]`
//!
//! Weighted criteria that the dataset does not carry are skipped by both
//! rules. Custom rules implement the trait directly or wrap a closure in
//! [`ScoringFn`]. A [`MethodRegistry`] groups several rules for robust
//! ranking.

mod methods;
mod registry;
mod types;

pub use methods::{score, WeightedProduct, WeightedSum};
pub use registry::MethodRegistry;
pub use types::{ScoringFn, ScoringMethod};
