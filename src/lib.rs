//! # parametric-levenshtein
//!
//! Levenshtein automata driven by precomputed parametric descriptions.
//!
//! Given a word `w` and a degree `n`, a Levenshtein automaton accepts exactly
//! the strings within edit distance `n` of `w`. This crate builds such
//! automata in O(|w|) time from word-independent tables, as described in:
//!
//! > Schulz, Klaus U., and Stoyan Mihov. "Fast string correction with
//! > Levenshtein automata." International Journal on Document Analysis and
//! > Recognition 5.1 (2002): 67-85.
//!
//! Every transition costs one characteristic vector of at most `2n + 1`
//! comparisons and two reads from bit-packed tables. Traversal state is a
//! single `Copy` integer owned by the caller.
//!
//! Degrees 1 and 2 are built in, with and without transposition. Other table
//! sets can be supplied through a [`DescriptionProvider`](description::DescriptionProvider).
//!
//! ## Example
//!
//! ```rust
//! use parametric_levenshtein::prelude::*;
//!
//! let automaton = LevenshteinAutomaton::create("abcdefg", 1, true)?;
//!
//! assert!(automaton.accepts("abcdegf"));   // one transposition
//! assert!(!automaton.accepts("abcdegfx")); // and one insertion
//!
//! let state = automaton.run("abcd");
//! assert!(!automaton.is_failure(state));
//! assert!(!automaton.is_final(state));
//! # Ok::<(), parametric_levenshtein::automaton::ParametricDescriptionNotFound>(())
//! ```
//!
//! ## Features
//!
//! - `serialization`: save and load table bundles with bincode or JSON
//! - `compression`: gzip wrapper for the serializers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod automaton;
pub mod description;

#[cfg(feature = "serialization")]
pub mod serialization;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::algorithm::Algorithm;
    pub use crate::automaton::{
        AutomatonBuilder, BuilderError, LevenshteinAutomaton, ParametricDescriptionNotFound,
    };
    pub use crate::description::{
        DescriptionKey, DescriptionProvider, ParametricDescription, ParametricDescriptionRegistry,
        State,
    };

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{
        BincodeSerializer, DescriptionSerializer, JsonSerializer, SerializationError,
    };

    #[cfg(feature = "compression")]
    pub use crate::serialization::GzipSerializer;
}
