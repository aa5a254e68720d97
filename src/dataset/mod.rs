//! Alternative datasets.
//!
//! An [`AlternativeDataset`] is the table scoring rules run against: one
//! identifier per alternative and one numeric column per criterion.
//! Raw measurements on different scales should be brought into `[0, 1]`
//! with [`min_max_normalize`] or [`AlternativeDataset::normalized_columns`]
//! before scoring.

mod normalize;
mod types;

pub use normalize::min_max_normalize;
pub use types::AlternativeDataset;
