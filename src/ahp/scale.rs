//! Verbal preference scale and judgment collection.
//!
//! Pairwise judgments are recorded one per unordered pair of criteria on
//! Saaty's nine-point verbal scale and converted into a reciprocal
//! [`ComparisonMatrix`].

use super::matrix::ComparisonMatrix;
use super::solver::{AhpResult, AhpSolver};
use crate::error::{McdmError, Result};
use std::fmt;
use std::str::FromStr;

/// A verbal judgment of how strongly the first criterion of a pair is
/// preferred over the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Preference {
    ExtremelyMore,
    VeryStronglyMore,
    StronglyMore,
    ModeratelyMore,
    #[default]
    Equal,
    ModeratelyLess,
    StronglyLess,
    VeryStronglyLess,
    ExtremelyLess,
}

impl Preference {
    /// Every level, strongest "more" first.
    pub const ALL: [Preference; 9] = [
        Preference::ExtremelyMore,
        Preference::VeryStronglyMore,
        Preference::StronglyMore,
        Preference::ModeratelyMore,
        Preference::Equal,
        Preference::ModeratelyLess,
        Preference::StronglyLess,
        Preference::VeryStronglyLess,
        Preference::ExtremelyLess,
    ];

    /// Numeric ratio for this level.
    ///
    /// The "less" side uses three-digit rounded reciprocals.
    pub fn value(self) -> f64 {
        match self {
            Preference::ExtremelyMore => 9.0,
            Preference::VeryStronglyMore => 7.0,
            Preference::StronglyMore => 5.0,
            Preference::ModeratelyMore => 3.0,
            Preference::Equal => 1.0,
            Preference::ModeratelyLess => 0.333,
            Preference::StronglyLess => 0.2,
            Preference::VeryStronglyLess => 0.143,
            Preference::ExtremelyLess => 0.111,
        }
    }

    /// Human-readable label, e.g. `"strongly more preferable"`.
    pub fn label(self) -> &'static str {
        match self {
            Preference::ExtremelyMore => "extremely more preferable",
            Preference::VeryStronglyMore => "very strongly more preferable",
            Preference::StronglyMore => "strongly more preferable",
            Preference::ModeratelyMore => "moderately more preferable",
            Preference::Equal => "equally preferable",
            Preference::ModeratelyLess => "moderately less preferable",
            Preference::StronglyLess => "strongly less preferable",
            Preference::VeryStronglyLess => "very strongly less preferable",
            Preference::ExtremelyLess => "extremely less preferable",
        }
    }

    /// The same judgment seen from the other criterion of the pair.
    pub fn inverse(self) -> Self {
        match self {
            Preference::ExtremelyMore => Preference::ExtremelyLess,
            Preference::VeryStronglyMore => Preference::VeryStronglyLess,
            Preference::StronglyMore => Preference::StronglyLess,
            Preference::ModeratelyMore => Preference::ModeratelyLess,
            Preference::Equal => Preference::Equal,
            Preference::ModeratelyLess => Preference::ModeratelyMore,
            Preference::StronglyLess => Preference::StronglyMore,
            Preference::VeryStronglyLess => Preference::VeryStronglyMore,
            Preference::ExtremelyLess => Preference::ExtremelyMore,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preference {
    type Err = McdmError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Preference::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| McdmError::InvalidJudgment(format!("unknown preference '{s}'")))
    }
}

/// Pairwise judgments over an ordered list of criteria.
///
/// Pairs that were never set default to [`Preference::Equal`].
///
/// # Examples
///
/// ```
/// use u_mcdm::ahp::{JudgmentSet, Preference};
///
/// let mut judgments = JudgmentSet::new(["cost", "quality", "delivery"]).unwrap();
/// judgments.set("cost", "quality", Preference::ModeratelyMore).unwrap();
/// judgments.set("cost", "delivery", Preference::StronglyMore).unwrap();
///
/// let result = judgments.solve().unwrap();
/// assert!(result.weights.get("cost").unwrap() > 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct JudgmentSet {
    criteria: Vec<String>,
    // Upper triangle only: judgments[i][j - i - 1] for i < j.
    judgments: Vec<Vec<Preference>>,
}

impl JudgmentSet {
    /// Creates a judgment set with every pair equally preferable.
    pub fn new<I, S>(criteria: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for c in criteria {
            let c = c.into();
            if names.contains(&c) {
                return Err(McdmError::DuplicateCriterion(c));
            }
            names.push(c);
        }
        let n = names.len();
        let judgments = (0..n).map(|i| vec![Preference::Equal; n - i - 1]).collect();
        Ok(Self {
            criteria: names,
            judgments,
        })
    }

    /// Criteria in order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Number of unordered pairs, i.e. questions to ask.
    pub fn pair_count(&self) -> usize {
        let n = self.criteria.len();
        n * n.saturating_sub(1) / 2
    }

    /// Unordered pairs in elicitation order: `(0,1), (0,2), ..., (1,2), ...`.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        let c = &self.criteria;
        (0..c.len()).flat_map(move |i| {
            ((i + 1)..c.len()).map(move |j| (c[i].as_str(), c[j].as_str()))
        })
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.criteria
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| McdmError::UnknownCriterion(name.to_string()))
    }

    /// Records how strongly `first` is preferred over `second`.
    ///
    /// Setting `(b, a)` stores the mirrored judgment for `(a, b)`; the
    /// latest call for a pair wins.
    pub fn set(&mut self, first: &str, second: &str, preference: Preference) -> Result<()> {
        let i = self.index_of(first)?;
        let j = self.index_of(second)?;
        match i.cmp(&j) {
            std::cmp::Ordering::Less => self.judgments[i][j - i - 1] = preference,
            std::cmp::Ordering::Greater => self.judgments[j][i - j - 1] = preference.inverse(),
            std::cmp::Ordering::Equal => {
                return Err(McdmError::InvalidJudgment(format!(
                    "cannot compare '{first}' with itself"
                )))
            }
        }
        Ok(())
    }

    /// Returns the judgment of `first` over `second`.
    pub fn get(&self, first: &str, second: &str) -> Result<Preference> {
        let i = self.index_of(first)?;
        let j = self.index_of(second)?;
        Ok(match i.cmp(&j) {
            std::cmp::Ordering::Less => self.judgments[i][j - i - 1],
            std::cmp::Ordering::Greater => self.judgments[j][i - j - 1].inverse(),
            std::cmp::Ordering::Equal => Preference::Equal,
        })
    }

    /// Builds the comparison matrix.
    ///
    /// The upper triangle holds the recorded values; the lower triangle
    /// holds their exact reciprocals.
    pub fn to_matrix(&self) -> Result<ComparisonMatrix> {
        let n = self.criteria.len();
        let mut rows = vec![vec![1.0; n]; n];
        for (i, row) in self.judgments.iter().enumerate() {
            for (offset, pref) in row.iter().enumerate() {
                let j = i + offset + 1;
                let v = pref.value();
                rows[i][j] = v;
                rows[j][i] = 1.0 / v;
            }
        }
        ComparisonMatrix::from_rows(rows)
    }

    /// Builds the matrix and runs [`AhpSolver::solve`] on it.
    pub fn solve(&self) -> Result<AhpResult> {
        AhpSolver::solve(&self.criteria, &self.to_matrix()?)
    }
}
