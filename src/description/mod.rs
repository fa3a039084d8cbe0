//! Parametric descriptions of Levenshtein automata.
//!
//! A parametric description is the word-independent part of a Levenshtein
//! automaton of degree `n`, as constructed by Schulz and Mihov:
//!
//! > Schulz, Klaus U., and Stoyan Mihov. "Fast string correction with
//! > Levenshtein automata." International Journal on Document Analysis and
//! > Recognition 5.1 (2002): 67-85.
//!
//! It is a table whose columns are parametric states and whose rows are
//! characteristic vectors of length at most `2n + 1`. Each cell holds the next
//! state and how far the state's window slides along the word. Binding the
//! table to a concrete word (see [`crate::automaton`]) yields a DFA whose
//! transitions cost one vector computation and two table reads.
//!
//! # Modules
//!
//! - [`packed_array`]: bit-packed storage for the two tables
//! - [`characteristic_vector`]: self-delimiting vector encoding (table rows)
//! - [`state`]: `(state_id, min_boundary)` packing
//! - [`transition`]: the transition function
//! - [`registry`]: lookup of descriptions by `(degree, transposition)`

pub mod characteristic_vector;
pub mod packed_array;
pub mod registry;
pub mod state;
pub mod transition;

mod tables;

use std::borrow::Cow;

use crate::algorithm::Algorithm;

pub use characteristic_vector::{CharacteristicVector, MAX_VECTOR_SIZE};
pub use packed_array::{PackError, PackedArray};
pub use registry::{DescriptionKey, DescriptionProvider, ParametricDescriptionRegistry};
pub use state::{NoMinimalBoundary, State};
pub use transition::transit;

/// Errors raised while validating a description bundle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptionError {
    /// The final-state addendum array is empty
    #[error("a parametric description needs at least one state")]
    NoStates,
    /// `2n + 1` does not fit into a characteristic vector
    #[error("degree {degree} needs windows longer than {max} symbols", max = MAX_VECTOR_SIZE)]
    UnsupportedDegree {
        /// The requested degree
        degree: u32,
    },
    /// A table does not hold exactly one entry per `(vector, state)` cell
    #[error("{table} table holds {len} entries, expected {expected}")]
    TableSize {
        /// `"transition"` or `"boundary offset"`
        table: &'static str,
        /// Entries present
        len: usize,
        /// Entries required
        expected: u64,
    },
    /// A transition leads outside `0..=states_count`
    #[error("transition {index} leads to state {target}, beyond {states_count} states")]
    StateOutOfRange {
        /// Table index of the bad cell
        index: usize,
        /// The stored next state id
        target: u64,
        /// Number of states in the description
        states_count: usize,
    },
    /// A boundary offset moves the window past the end of its own vector
    #[error("boundary offset {index} is {offset}, beyond the {max}-symbol vector of its row")]
    OffsetOutOfRange {
        /// Table index of the bad cell
        index: usize,
        /// The stored offset
        offset: u64,
        /// Data bits of the row's characteristic vector
        max: usize,
    },
}

/// The precomputed tables of one `(degree, transposition)` combination.
///
/// Immutable once built and meant to be shared (behind an `Arc`) by every
/// automaton of that combination.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DescriptionParts")
)]
pub struct ParametricDescription {
    degree: u32,
    include_transposition: bool,
    transitions: PackedArray,
    boundary_offsets: PackedArray,
    /// `f - state_length` per state, where `f` is the error count of the
    /// state's maximal-boundary position.
    final_addendums: Cow<'static, [i32]>,
}

impl ParametricDescription {
    /// Builds and validates a description.
    ///
    /// # Arguments
    ///
    /// * `degree` - Maximum edit distance `n` the tables were generated for
    /// * `include_transposition` - Whether transposition is a primitive edit
    /// * `transitions` - Next state id per `(vector - 1) * states_count + state_id`
    /// * `boundary_offsets` - Boundary shift per cell, same shape as `transitions`
    /// * `final_addendums` - One addendum per state; its length is the state count
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptionError`] if there are no states, the degree is
    /// too large for the vector encoding, a table does not have one entry per
    /// cell, a transition leads to an unknown state, or a boundary offset is
    /// larger than the vector of its row.
    ///
    /// The offset bound keeps `min_boundary <= word_len` for every reachable
    /// state: a vector read at `min_boundary` never extends past the word.
    pub fn new(
        degree: u32,
        include_transposition: bool,
        transitions: PackedArray,
        boundary_offsets: PackedArray,
        final_addendums: Vec<i32>,
    ) -> Result<Self, DescriptionError> {
        let states_count = final_addendums.len();
        if states_count == 0 {
            return Err(DescriptionError::NoStates);
        }
        if 2 * degree as usize + 1 > MAX_VECTOR_SIZE {
            return Err(DescriptionError::UnsupportedDegree { degree });
        }

        let expected = table_len(degree, states_count);
        for (table, array) in [("transition", &transitions), ("boundary offset", &boundary_offsets)] {
            if array.len() as u64 != expected {
                return Err(DescriptionError::TableSize {
                    table,
                    len: array.len(),
                    expected,
                });
            }
        }

        if let Some((index, target)) = transitions
            .iter()
            .enumerate()
            .find(|&(_, target)| target as usize > states_count)
        {
            return Err(DescriptionError::StateOutOfRange {
                index,
                target,
                states_count,
            });
        }

        if let Some((index, offset, max)) = boundary_offsets
            .iter()
            .enumerate()
            .map(|(index, offset)| (index, offset, row_vector_size(index, states_count)))
            .find(|&(_, offset, max)| offset > max as u64)
        {
            return Err(DescriptionError::OffsetOutOfRange { index, offset, max });
        }

        Ok(Self {
            degree,
            include_transposition,
            transitions,
            boundary_offsets,
            final_addendums: Cow::Owned(final_addendums),
        })
    }

    /// Assembles a built-in bundle. Validation is covered by the tables' tests.
    pub(crate) fn from_static_parts(
        degree: u32,
        include_transposition: bool,
        transitions: PackedArray,
        boundary_offsets: PackedArray,
        final_addendums: Cow<'static, [i32]>,
    ) -> Self {
        Self {
            degree,
            include_transposition,
            transitions,
            boundary_offsets,
            final_addendums,
        }
    }

    /// Maximum edit distance.
    #[inline]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Whether transposition counts as a single edit.
    #[inline]
    pub fn includes_transposition(&self) -> bool {
        self.include_transposition
    }

    /// The algorithm these tables implement.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from_transposition(self.include_transposition)
    }

    /// Registry key of this description.
    pub fn key(&self) -> DescriptionKey {
        DescriptionKey::new(self.degree, self.include_transposition)
    }

    /// Number of parametric states, excluding the failure state.
    #[inline]
    pub fn states_count(&self) -> usize {
        self.final_addendums.len()
    }

    /// The packed transition table.
    pub fn transitions(&self) -> &PackedArray {
        &self.transitions
    }

    /// The packed boundary-offset table.
    pub fn boundary_offsets(&self) -> &PackedArray {
        &self.boundary_offsets
    }

    /// Final-state addendum per state id.
    pub fn final_addendums(&self) -> &[i32] {
        &self.final_addendums
    }

    /// Start state of every traversal.
    #[inline]
    pub fn initial_state(&self) -> State {
        State::INITIAL
    }

    /// Returns true for the absorbing failure state.
    #[inline]
    pub fn is_failure_state(&self, state: State) -> bool {
        state::is_failure(state, self.states_count())
    }

    /// Word offset the window of `state` starts at.
    ///
    /// # Errors
    ///
    /// Returns [`NoMinimalBoundary`] for the failure state.
    pub fn min_boundary(&self, state: State) -> Result<usize, NoMinimalBoundary> {
        state::min_boundary(state, self.states_count())
    }

    /// Returns true if `state` accepts a word of length `word_len`.
    ///
    /// A position `j^#f` is accepting when `w - j <= n - f`, and a state is
    /// final when its maximal-boundary position is accepting. Writing
    /// `j = i + state_length` for the minimal boundary `i` turns this into
    ///
    /// ```text
    /// i >= w - n + (f - state_length)
    /// ```
    ///
    /// where the bracketed term is the per-state addendum.
    pub fn is_final_state(&self, state: State, word_len: usize) -> bool {
        let Ok(min_boundary) = self.min_boundary(state) else {
            return false;
        };
        let state_id = state::decode_state_id(state, self.states_count());
        let threshold =
            word_len as i64 - i64::from(self.degree) + i64::from(self.final_addendums[state_id]);

        min_boundary as i64 >= threshold
    }

    /// Looks up the cell for `vector` in column `state_id`.
    ///
    /// Returns the next state id and the boundary offset to add.
    ///
    /// # Panics
    ///
    /// In debug builds, if `state_id` is the failure id or beyond.
    #[inline]
    pub fn lookup(&self, vector: CharacteristicVector, state_id: usize) -> (usize, usize) {
        debug_assert!(
            state_id < self.states_count(),
            "state id {} out of range ({} states)",
            state_id,
            self.states_count()
        );
        let index = (vector.bits() as usize - 1) * self.states_count() + state_id;

        (
            self.transitions.get(index) as usize,
            self.boundary_offsets.get(index) as usize,
        )
    }
}

/// Cells needed for degree `n`: every vector of up to `2n + 1` bits, per state.
fn table_len(degree: u32, states_count: usize) -> u64 {
    ((1u64 << (2 * degree + 2)) - 1) * states_count as u64
}

/// Data bits of the characteristic vector addressing table cell `index`.
fn row_vector_size(index: usize, states_count: usize) -> usize {
    CharacteristicVector::from_bits((index / states_count + 1) as u32)
        .map_or(0, CharacteristicVector::size)
}

#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
struct DescriptionParts {
    degree: u32,
    include_transposition: bool,
    transitions: PackedArray,
    boundary_offsets: PackedArray,
    final_addendums: Vec<i32>,
}

#[cfg(feature = "serialization")]
impl TryFrom<DescriptionParts> for ParametricDescription {
    type Error = DescriptionError;

    fn try_from(parts: DescriptionParts) -> Result<Self, Self::Error> {
        ParametricDescription::new(
            parts.degree,
            parts.include_transposition,
            parts.transitions,
            parts.boundary_offsets,
            parts.final_addendums,
        )
    }
}
