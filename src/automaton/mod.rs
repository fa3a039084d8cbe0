//! Levenshtein automata bound to a query word.
//!
//! A [`LevenshteinAutomaton`] pairs a word with the parametric description for
//! its degree and transposition setting. It is immutable: traversal state is
//! a [`State`] value held by the caller, so one automaton can be walked by any
//! number of threads at once.
//!
//! # Example
//!
//! ```rust
//! use parametric_levenshtein::prelude::*;
//!
//! let automaton = LevenshteinAutomaton::create("abcdefg", 1, false)?;
//!
//! let mut state = automaton.initial_state();
//! for symbol in "abxdefg".chars() {
//!     state = automaton.next_state(state, symbol);
//! }
//! assert!(automaton.is_final(state));
//!
//! assert!(automaton.is_failure(automaton.run("abxdefgx")));
//! # Ok::<(), parametric_levenshtein::automaton::ParametricDescriptionNotFound>(())
//! ```

pub mod builder;

use std::sync::Arc;

use tracing::trace;

use crate::algorithm::Algorithm;
use crate::description::{
    transit, DescriptionKey, DescriptionProvider, NoMinimalBoundary, ParametricDescription,
    ParametricDescriptionRegistry, State,
};

pub use builder::{AutomatonBuilder, BuilderError};

/// No table exists for the requested `(degree, transposition)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("parametric description was not found: degree {degree}, transposition {include_transposition}")]
pub struct ParametricDescriptionNotFound {
    /// The requested degree
    pub degree: u32,
    /// The requested transposition flag
    pub include_transposition: bool,
}

impl From<DescriptionKey> for ParametricDescriptionNotFound {
    fn from(key: DescriptionKey) -> Self {
        Self {
            degree: key.degree,
            include_transposition: key.include_transposition,
        }
    }
}

/// A deterministic automaton accepting every string within `degree` edits of
/// a word.
///
/// Created through [`LevenshteinAutomaton::create`], [`create_with`] or
/// [`AutomatonBuilder`].
///
/// [`create_with`]: LevenshteinAutomaton::create_with
#[derive(Debug, Clone)]
pub struct LevenshteinAutomaton {
    word: Box<[char]>,
    description: Arc<ParametricDescription>,
}

impl LevenshteinAutomaton {
    /// Creates an automaton for `word` from the built-in tables.
    ///
    /// # Errors
    ///
    /// Returns [`ParametricDescriptionNotFound`] unless `degree` is 1 or 2.
    pub fn create(
        word: &str,
        degree: u32,
        include_transposition: bool,
    ) -> Result<Self, ParametricDescriptionNotFound> {
        Self::create_with(
            word,
            degree,
            include_transposition,
            ParametricDescriptionRegistry::builtin(),
        )
    }

    /// Creates an automaton for `word` using tables from `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`ParametricDescriptionNotFound`] if `provider` has no table
    /// for `(degree, include_transposition)`.
    pub fn create_with<P>(
        word: &str,
        degree: u32,
        include_transposition: bool,
        provider: &P,
    ) -> Result<Self, ParametricDescriptionNotFound>
    where
        P: DescriptionProvider + ?Sized,
    {
        Self::from_chars(word.chars().collect::<Vec<_>>(), degree, include_transposition, provider)
    }

    /// Creates an automaton from an already decoded word.
    ///
    /// # Errors
    ///
    /// Returns [`ParametricDescriptionNotFound`] if `provider` has no table
    /// for `(degree, include_transposition)`.
    pub fn from_chars<W, P>(
        word: W,
        degree: u32,
        include_transposition: bool,
        provider: &P,
    ) -> Result<Self, ParametricDescriptionNotFound>
    where
        W: Into<Box<[char]>>,
        P: DescriptionProvider + ?Sized,
    {
        let key = DescriptionKey::new(degree, include_transposition);
        let description = provider
            .description(key)
            .ok_or(ParametricDescriptionNotFound::from(key))?;

        Ok(Self::with_description(word, description))
    }

    /// Binds `word` to a description directly.
    ///
    /// Degree and transposition are taken from `description`.
    pub fn with_description<W>(word: W, description: Arc<ParametricDescription>) -> Self
    where
        W: Into<Box<[char]>>,
    {
        let word = word.into();
        trace!(
            word_len = word.len(),
            degree = description.degree(),
            algorithm = %description.algorithm(),
            "created levenshtein automaton"
        );

        Self { word, description }
    }

    /// The start state, `(state_id = 0, min_boundary = 0)`.
    #[inline]
    pub fn initial_state(&self) -> State {
        State::INITIAL
    }

    /// The successor of `state` after reading `symbol`.
    #[inline]
    pub fn next_state(&self, state: State, symbol: char) -> State {
        transit(state, symbol, &self.word, &self.description)
    }

    /// Returns true once the input is beyond `degree` edits of every
    /// extension. The failure state is absorbing.
    #[inline]
    pub fn is_failure(&self, state: State) -> bool {
        self.description.is_failure_state(state)
    }

    /// Returns true if the input read so far is within `degree` edits of the
    /// word.
    #[inline]
    pub fn is_final(&self, state: State) -> bool {
        self.description.is_final_state(state, self.word.len())
    }

    /// Word offset where the window of `state` begins.
    ///
    /// # Errors
    ///
    /// Returns [`NoMinimalBoundary`] for the failure state.
    pub fn min_boundary(&self, state: State) -> Result<usize, NoMinimalBoundary> {
        self.description.min_boundary(state)
    }

    /// Feeds every code point of `input` from the initial state.
    ///
    /// Stops reading as soon as the failure state is reached.
    pub fn run(&self, input: &str) -> State {
        self.run_chars(input.chars())
    }

    /// Like [`run`](Self::run), over any code point sequence.
    pub fn run_chars<I>(&self, input: I) -> State
    where
        I: IntoIterator<Item = char>,
    {
        let mut state = self.initial_state();
        for symbol in input {
            state = self.next_state(state, symbol);
            if self.is_failure(state) {
                break;
            }
        }
        state
    }

    /// Returns true if `input` is within `degree` edits of the word.
    pub fn accepts(&self, input: &str) -> bool {
        self.is_final(self.run(input))
    }

    /// The word as code points.
    pub fn word(&self) -> &[char] {
        &self.word
    }

    /// Number of code points in the word.
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Maximum edit distance.
    pub fn degree(&self) -> u32 {
        self.description.degree()
    }

    /// Whether transposition counts as one edit.
    pub fn includes_transposition(&self) -> bool {
        self.description.includes_transposition()
    }

    /// The distance variant.
    pub fn algorithm(&self) -> Algorithm {
        self.description.algorithm()
    }

    /// The bound parametric description.
    pub fn description(&self) -> &Arc<ParametricDescription> {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::PackedArray;

    fn automaton(word: &str, degree: u32, transposition: bool) -> LevenshteinAutomaton {
        LevenshteinAutomaton::create(word, degree, transposition).unwrap()
    }

    #[test]
    fn test_create_unsupported_degree() {
        let error = LevenshteinAutomaton::create("abcdefg", 10, false).unwrap_err();

        assert_eq!(
            error,
            ParametricDescriptionNotFound {
                degree: 10,
                include_transposition: false
            }
        );
        assert_eq!(
            error.to_string(),
            "parametric description was not found: degree 10, transposition false"
        );
    }

    #[test]
    fn test_create_degree_zero_not_built_in() {
        assert!(LevenshteinAutomaton::create("abc", 0, true).is_err());
    }

    #[test]
    fn test_accessors() {
        let automaton = automaton("naïve", 2, true);

        assert_eq!(automaton.word(), &['n', 'a', 'ï', 'v', 'e']);
        assert_eq!(automaton.word_len(), 5);
        assert_eq!(automaton.degree(), 2);
        assert!(automaton.includes_transposition());
        assert_eq!(automaton.algorithm(), Algorithm::Transposition);
        assert_eq!(automaton.description().states_count(), 42);
    }

    #[test]
    fn test_substitution_within_degree() {
        let automaton = automaton("abcdefg", 1, false);
        let state = automaton.run("abxdefg");

        assert_eq!(state.raw(), 43);
        assert!(automaton.is_final(state));
        assert!(!automaton.is_failure(state));
    }

    #[test]
    fn test_run_stops_at_failure() {
        let automaton = automaton("abcdefg", 1, false);
        let state = automaton.run("xxxabcdefg");

        assert!(automaton.is_failure(state));
        assert!(!automaton.is_final(state));
        assert_eq!(automaton.min_boundary(state), Err(NoMinimalBoundary { state }));
    }

    #[test]
    fn test_min_boundary_follows_exact_prefix() {
        let automaton = automaton("abcdefg", 2, false);

        assert_eq!(automaton.min_boundary(automaton.initial_state()), Ok(0));
        assert_eq!(automaton.min_boundary(automaton.run("abcd")), Ok(4));
    }

    #[test]
    fn test_accepts() {
        let automaton = automaton("abcdefg", 1, true);

        assert!(automaton.accepts("abcdefg"));
        assert!(automaton.accepts("abcdegf"));
        assert!(automaton.accepts("bcdefg"));
        assert!(!automaton.accepts("abcdegfx"));
        assert!(!automaton.accepts("abc"));
    }

    #[test]
    fn test_run_chars_matches_run() {
        let automaton = automaton("abcdefg", 2, true);
        let decoded: Vec<char> = "bacdxfg".chars().collect();

        assert_eq!(automaton.run_chars(decoded), automaton.run("bacdxfg"));
    }

    #[test]
    fn test_from_chars() {
        let word: Vec<char> = "abcdefg".chars().collect();
        let automaton = LevenshteinAutomaton::from_chars(
            word,
            1,
            false,
            ParametricDescriptionRegistry::builtin(),
        )
        .unwrap();

        assert!(automaton.accepts("abxdefg"));
    }

    #[test]
    fn test_injected_registry() {
        let exact = ParametricDescription::new(
            0,
            false,
            PackedArray::pack(&[1, 1, 0]).unwrap(),
            PackedArray::pack(&[0, 0, 1]).unwrap(),
            vec![0],
        )
        .unwrap();
        let registry = ParametricDescriptionRegistry::new().with(exact);

        let automaton = LevenshteinAutomaton::create_with("abc", 0, false, &registry).unwrap();
        assert!(automaton.accepts("abc"));
        assert!(!automaton.accepts("abd"));
        assert!(!automaton.accepts("ab"));

        assert!(LevenshteinAutomaton::create_with("abc", 1, false, &registry).is_err());
    }

    #[test]
    fn test_dyn_provider() {
        let provider: Arc<dyn DescriptionProvider> =
            Arc::new(ParametricDescriptionRegistry::builtin().clone());

        let automaton = LevenshteinAutomaton::create_with("abcdefg", 2, false, &provider).unwrap();
        assert!(automaton.accepts("abxdeg"));
    }

    #[test]
    fn test_clone_shares_description() {
        let automaton = automaton("abcdefg", 1, false);
        let copy = automaton.clone();

        assert!(Arc::ptr_eq(automaton.description(), copy.description()));
        assert_eq!(copy.run("abxdefg"), automaton.run("abxdefg"));
    }
}
