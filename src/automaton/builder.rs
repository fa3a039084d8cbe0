//! Builder pattern for creating LevenshteinAutomaton instances.
//!
//! The `AutomatonBuilder` provides a fluent API for binding a word to a
//! degree, an algorithm and, optionally, a custom table source.

use std::sync::Arc;

use crate::algorithm::Algorithm;
use crate::automaton::{LevenshteinAutomaton, ParametricDescriptionNotFound};
use crate::description::{DescriptionProvider, ParametricDescriptionRegistry};

/// Builder for constructing a `LevenshteinAutomaton` with a fluent API.
///
/// # Example
///
/// ```rust
/// use parametric_levenshtein::prelude::*;
///
/// let automaton = AutomatonBuilder::new()
///     .word("abcdefg")
///     .degree(1)
///     .algorithm(Algorithm::Transposition)
///     .build()?;
///
/// assert!(automaton.accepts("abcdegf"));
/// # Ok::<(), BuilderError>(())
/// ```
#[derive(Default, Clone)]
pub struct AutomatonBuilder {
    word: Option<Box<[char]>>,
    degree: Option<u32>,
    algorithm: Algorithm,
    descriptions: Option<Arc<dyn DescriptionProvider>>,
}

/// Error type for builder validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    /// No word was provided
    #[error("Word is required. Use .word() to set it.")]
    MissingWord,
    /// No degree was provided
    #[error("Degree is required. Use .degree() to set it.")]
    MissingDegree,
    /// The table source has nothing for the requested configuration
    #[error(transparent)]
    NotFound(#[from] ParametricDescriptionNotFound),
}

impl AutomatonBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word to match against.
    pub fn word(mut self, word: &str) -> Self {
        self.word = Some(word.chars().collect());
        self
    }

    /// Set the word from already decoded code points.
    pub fn word_chars<W: Into<Box<[char]>>>(mut self, word: W) -> Self {
        self.word = Some(word.into());
        self
    }

    /// Set the maximum edit distance.
    pub fn degree(mut self, degree: u32) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Set the Levenshtein distance algorithm. Defaults to `Standard`.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Shorthand for `.algorithm(Algorithm::from_transposition(..))`.
    pub fn transposition(self, include_transposition: bool) -> Self {
        self.algorithm(Algorithm::from_transposition(include_transposition))
    }

    /// Look tables up in `descriptions` instead of the built-in registry.
    pub fn descriptions(mut self, descriptions: Arc<dyn DescriptionProvider>) -> Self {
        self.descriptions = Some(descriptions);
        self
    }

    /// Build the `LevenshteinAutomaton`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Word was not set (use `.word()`)
    /// - Degree was not set (use `.degree()`)
    /// - No table exists for the degree and algorithm
    pub fn build(self) -> Result<LevenshteinAutomaton, BuilderError> {
        let word = self.word.ok_or(BuilderError::MissingWord)?;
        let degree = self.degree.ok_or(BuilderError::MissingDegree)?;
        let transposition = self.algorithm.includes_transposition();

        let automaton = match self.descriptions {
            Some(provider) => {
                LevenshteinAutomaton::from_chars(word, degree, transposition, &*provider)?
            }
            None => LevenshteinAutomaton::from_chars(
                word,
                degree,
                transposition,
                ParametricDescriptionRegistry::builtin(),
            )?,
        };

        Ok(automaton)
    }
}

impl std::fmt::Debug for AutomatonBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutomatonBuilder")
            .field("word", &self.word)
            .field("degree", &self.degree)
            .field("algorithm", &self.algorithm)
            .field("custom_descriptions", &self.descriptions.is_some())
            .finish()
    }
}
