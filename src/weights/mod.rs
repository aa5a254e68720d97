//! Criterion weight vectors.
//!
//! A [`WeightVector`] is an ordered mapping from criterion name to a
//! nonnegative weight. Weights produced by [`normalize`] or by the AHP
//! solver sum to 1.

mod normalize;
mod types;

pub use normalize::normalize;
pub use types::WeightVector;
