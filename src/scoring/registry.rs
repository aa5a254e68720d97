//! Named collection of scoring methods.

use super::methods::{WeightedProduct, WeightedSum};
use super::types::ScoringMethod;

/// An ordered set of scoring methods keyed by [`ScoringMethod::name`].
///
/// Registration order is the column order of robust ranking output and
/// the priority order when sorting its rows.
///
/// # Examples
///
/// ```
/// use u_mcdm::scoring::{MethodRegistry, ScoringFn};
///
/// let registry = MethodRegistry::standard()
///     .with_method(ScoringFn::new("first_column", |data, _w| {
///         (0..data.len()).map(|r| data.value(r, 0)).collect()
///     }));
///
/// assert_eq!(
///     registry.names(),
///     vec!["weighted_sum", "weighted_product", "first_column"]
/// );
/// ```
#[derive(Default)]
pub struct MethodRegistry {
    methods: Vec<Box<dyn ScoringMethod>>,
}

impl MethodRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with [`WeightedSum`] and [`WeightedProduct`], in that order.
    pub fn standard() -> Self {
        Self::new()
            .with_method(WeightedSum)
            .with_method(WeightedProduct)
    }

    /// Adds a method.
    pub fn with_method<M: ScoringMethod + 'static>(mut self, method: M) -> Self {
        self.methods.push(Box::new(method));
        self
    }

    /// Adds an already boxed method.
    pub fn push(&mut self, method: Box<dyn ScoringMethod>) {
        self.methods.push(method);
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Method names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name()).collect()
    }

    /// Looks a method up by name.
    pub fn get(&self, name: &str) -> Option<&dyn ScoringMethod> {
        self.methods
            .iter()
            .find(|m| m.name() == name)
            .map(|m| &**m as &dyn ScoringMethod)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ScoringMethod> {
        self.methods.iter().map(|m| &**m as &dyn ScoringMethod)
    }

    /// Checks that the registry is non-empty and names are unique.
    pub fn validate(&self) -> Result<(), String> {
        if self.methods.is_empty() {
            return Err("method registry must contain at least one method".into());
        }
        let names = self.names();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(format!("duplicate scoring method '{name}'"));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("methods", &self.names())
            .finish()
    }
}
