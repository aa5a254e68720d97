//! Multi-criteria decision making.
//!
//! Provides the building blocks of a weighted decision analysis:
//!
//! - **Weights**: ordered criterion weight vectors and sum-to-one
//!   normalization.
//! - **AHP**: Analytic Hierarchy Process — derives weights from pairwise
//!   judgments and reports their consistency ratio.
//! - **Dataset**: alternatives × criteria tables with min-max rescaling.
//! - **Scoring**: pluggable aggregation rules (weighted sum, weighted
//!   product, or user-defined).
//! - **Robust ranking**: Monte Carlo weight perturbation with
//!   reproducible per-trial seeding and top-k tallies.
//!
//! # Example
//!
//! ```
//! use u_mcdm::ahp::{JudgmentSet, Preference};
//! use u_mcdm::dataset::AlternativeDataset;
//! use u_mcdm::robust::{RobustConfig, RobustRanker};
//! use u_mcdm::scoring::MethodRegistry;
//!
//! let mut judgments = JudgmentSet::new(["cost", "quality", "delivery"]).unwrap();
//! judgments.set("cost", "quality", Preference::ModeratelyMore).unwrap();
//! judgments.set("cost", "delivery", Preference::StronglyMore).unwrap();
//! judgments.set("quality", "delivery", Preference::ModeratelyMore).unwrap();
//! let ahp = judgments.solve().unwrap();
//! assert!(ahp.is_consistent);
//!
//! let data = AlternativeDataset::new(
//!     "supplier",
//!     ["cost", "quality", "delivery"],
//!     vec![
//!         ("acme", vec![0.9, 0.6, 0.4]),
//!         ("globex", vec![0.5, 0.9, 0.9]),
//!         ("initech", vec![0.1, 0.2, 0.3]),
//!     ],
//! ).unwrap();
//!
//! let config = RobustConfig::default().with_top_k(1);
//! let ranking = RobustRanker::run(
//!     &data, &ahp.weights, "supplier", &MethodRegistry::standard(), &config,
//! ).unwrap();
//! assert!(!ranking.ids().contains(&"initech"));
//! ```

pub mod ahp;
pub mod dataset;
pub mod error;
pub mod robust;
pub mod scoring;
pub mod weights;

pub use error::{McdmError, Result};
