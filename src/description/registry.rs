//! Lookup of parametric descriptions by `(degree, transposition)`.
//!
//! Descriptions are looked up through the [`DescriptionProvider`] trait, so an
//! automaton can be bound to any table set: the built-in one, a registry
//! loaded from disk, or a test double. [`ParametricDescriptionRegistry`] is the
//! stock implementation, an immutable map built once and shared read-only.
//!
//! # Example
//!
//! ```rust
//! use parametric_levenshtein::description::{DescriptionKey, ParametricDescriptionRegistry};
//!
//! let registry = ParametricDescriptionRegistry::builtin();
//! assert!(registry.get(2, true).is_some());
//! assert!(registry.get(3, false).is_none());
//! assert_eq!(registry.keys().len(), 4);
//! assert!(registry.contains(DescriptionKey::new(1, false)));
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{tables, ParametricDescription};

/// Identifies a table family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DescriptionKey {
    /// Maximum edit distance
    pub degree: u32,
    /// Whether transposition is a primitive edit
    pub include_transposition: bool,
}

impl DescriptionKey {
    /// Creates a key.
    pub const fn new(degree: u32, include_transposition: bool) -> Self {
        Self {
            degree,
            include_transposition,
        }
    }
}

impl fmt::Display for DescriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "degree {} {} transposition",
            self.degree,
            if self.include_transposition { "with" } else { "without" }
        )
    }
}

/// Source of parametric descriptions.
///
/// Implementations must be safe to query from many threads at once, and must
/// return the same description for the same key every time.
pub trait DescriptionProvider: Send + Sync {
    /// Returns the description for `key`, or `None` if no table exists.
    fn description(&self, key: DescriptionKey) -> Option<Arc<ParametricDescription>>;
}

impl<P: DescriptionProvider + ?Sized> DescriptionProvider for Arc<P> {
    fn description(&self, key: DescriptionKey) -> Option<Arc<ParametricDescription>> {
        (**self).description(key)
    }
}

impl<P: DescriptionProvider + ?Sized> DescriptionProvider for &P {
    fn description(&self, key: DescriptionKey) -> Option<Arc<ParametricDescription>> {
        (**self).description(key)
    }
}

/// An immutable set of descriptions keyed by `(degree, transposition)`.
#[derive(Debug, Clone, Default)]
pub struct ParametricDescriptionRegistry {
    descriptions: FxHashMap<DescriptionKey, Arc<ParametricDescription>>,
}

impl ParametricDescriptionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `descriptions`.
    ///
    /// A later description replaces an earlier one with the same key.
    pub fn from_descriptions<I>(descriptions: I) -> Self
    where
        I: IntoIterator<Item = ParametricDescription>,
    {
        let registry = descriptions
            .into_iter()
            .fold(Self::new(), |registry, description| registry.with(description));

        debug!(
            count = registry.len(),
            keys = ?registry.keys(),
            "built parametric description registry"
        );
        registry
    }

    /// Returns the registry with `description` added under its own key.
    pub fn with(mut self, description: ParametricDescription) -> Self {
        self.descriptions
            .insert(description.key(), Arc::new(description));
        self
    }

    /// The precomputed tables for degrees 1 and 2, with and without
    /// transposition.
    ///
    /// Built on first use, exactly once per process even under concurrent
    /// first access, and shared from then on.
    pub fn builtin() -> &'static ParametricDescriptionRegistry {
        static BUILTIN: OnceLock<ParametricDescriptionRegistry> = OnceLock::new();

        BUILTIN.get_or_init(|| {
            debug!("materializing built-in parametric descriptions");
            Self::from_descriptions(tables::all())
        })
    }

    /// Returns the description for `degree` and `include_transposition`.
    pub fn get(&self, degree: u32, include_transposition: bool) -> Option<&Arc<ParametricDescription>> {
        self.descriptions
            .get(&DescriptionKey::new(degree, include_transposition))
    }

    /// Returns true if a description exists for `key`.
    pub fn contains(&self, key: DescriptionKey) -> bool {
        self.descriptions.contains_key(&key)
    }

    /// Supported keys, in ascending order.
    pub fn keys(&self) -> Vec<DescriptionKey> {
        let mut keys: Vec<_> = self.descriptions.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of descriptions.
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Returns true if the registry holds no descriptions.
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    /// Iterates over the descriptions in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ParametricDescription>> + '_ {
        self.keys()
            .into_iter()
            .filter_map(move |key| self.descriptions.get(&key))
    }
}

impl DescriptionProvider for ParametricDescriptionRegistry {
    fn description(&self, key: DescriptionKey) -> Option<Arc<ParametricDescription>> {
        let found = self.descriptions.get(&key).cloned();
        if found.is_none() {
            debug!(%key, "no parametric description");
        }
        found
    }
}

impl FromIterator<ParametricDescription> for ParametricDescriptionRegistry {
    fn from_iter<I: IntoIterator<Item = ParametricDescription>>(iter: I) -> Self {
        Self::from_descriptions(iter)
    }
}
