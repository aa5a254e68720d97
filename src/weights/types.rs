//! Ordered criterion → weight mapping.

use crate::error::{McdmError, Result};

/// An ordered mapping from criterion name to weight.
///
/// Iteration follows insertion order, which is also the order in which
/// perturbation factors are applied during robust ranking. Criterion
/// names are unique.
///
/// # Examples
///
/// ```
/// use u_mcdm::weights::WeightVector;
///
/// let w = WeightVector::from_pairs([("price", 0.6), ("quality", 0.4)]).unwrap();
/// assert_eq!(w.len(), 2);
/// assert_eq!(w.get("price"), Some(0.6));
/// assert_eq!(w.names().collect::<Vec<_>>(), vec!["price", "quality"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(String, f64)>", into = "Vec<(String, f64)>")
)]
pub struct WeightVector {
    entries: Vec<(String, f64)>,
}

impl WeightVector {
    /// Creates an empty weight vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a weight vector from `(name, weight)` pairs.
    ///
    /// Fails with [`McdmError::DuplicateCriterion`] if a name repeats.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut w = Self::new();
        for (name, value) in pairs {
            w.insert(name, value)?;
        }
        Ok(w)
    }

    /// Appends a criterion.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(McdmError::DuplicateCriterion(name));
        }
        self.entries.push((name, value));
        Ok(())
    }

    /// Returns the weight for `name`, if present.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Criterion names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Weights in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, v)| v)
    }

    /// `(name, weight)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    /// Returns a copy whose weights are multiplied elementwise by `factors`.
    ///
    /// `factors` must have one entry per criterion, in order.
    pub(crate) fn scaled(&self, factors: &[f64]) -> Self {
        debug_assert_eq!(factors.len(), self.entries.len());
        Self {
            entries: self
                .entries
                .iter()
                .zip(factors)
                .map(|((n, v), f)| (n.clone(), v * f))
                .collect(),
        }
    }

    /// Returns a copy with every weight replaced by `f(weight)`.
    pub(crate) fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            entries: self.entries.iter().map(|(n, v)| (n.clone(), f(*v))).collect(),
        }
    }
}

impl TryFrom<Vec<(String, f64)>> for WeightVector {
    type Error = McdmError;

    fn try_from(pairs: Vec<(String, f64)>) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}

impl From<WeightVector> for Vec<(String, f64)> {
    fn from(w: WeightVector) -> Self {
        w.entries
    }
}
