//! Packing of parametric states into a single integer.
//!
//! A parametric state is a pair `(state_id, min_boundary)`: a column of the
//! parametric description table plus the word offset its window starts at.
//! Both are folded into one integer so that a traversal threads nothing but a
//! `Copy` value through successive transitions:
//!
//! ```text
//! encoded      = min_boundary * (states_count + 1) + state_id
//! state_id     = encoded % (states_count + 1)
//! min_boundary = encoded / (states_count + 1)
//! ```
//!
//! `state_id == states_count` is the absorbing failure state. Its
//! `min_boundary` is meaningless, and asking for it is an error.

use std::fmt;

/// An encoded parametric state.
///
/// Opaque outside this crate: it only means something together with the
/// `states_count` of the description that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct State(usize);

impl State {
    /// `(state_id = 0, min_boundary = 0)`, the start of every traversal.
    pub const INITIAL: Self = Self(0);

    /// Wraps a raw encoded value.
    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw encoded value.
    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when the minimal boundary of a failure state is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("failure state {state} has no minimal boundary")]
pub struct NoMinimalBoundary {
    /// The failure state that was queried
    pub state: State,
}

/// Packs `(state_id, min_boundary)`.
#[inline]
pub fn encode_state(state_id: usize, min_boundary: usize, states_count: usize) -> State {
    debug_assert!(state_id <= states_count);
    State(min_boundary * (states_count + 1) + state_id)
}

/// The table column of `state`.
#[inline]
pub fn decode_state_id(state: State, states_count: usize) -> usize {
    state.0 % (states_count + 1)
}

/// The word offset of `state`, without the failure check.
#[inline]
pub fn decode_min_boundary(state: State, states_count: usize) -> usize {
    state.0 / (states_count + 1)
}

/// Returns true for the absorbing failure state.
#[inline]
pub fn is_failure(state: State, states_count: usize) -> bool {
    decode_state_id(state, states_count) == states_count
}

/// The word offset of `state`.
///
/// # Errors
///
/// Returns [`NoMinimalBoundary`] if `state` is the failure state.
pub fn min_boundary(state: State, states_count: usize) -> Result<usize, NoMinimalBoundary> {
    if is_failure(state, states_count) {
        return Err(NoMinimalBoundary { state });
    }

    Ok(decode_min_boundary(state, states_count))
}

/// Length of the window starting at `min_boundary`: `min(2n + 1, w - min_boundary)`.
#[inline]
pub fn relevant_window_len(min_boundary: usize, degree: u32, word_len: usize) -> usize {
    (2 * degree as usize + 1).min(word_len.saturating_sub(min_boundary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let state = encode_state(7, 4, 30);

        assert_eq!(state.raw(), 4 * 31 + 7);
        assert_eq!(decode_state_id(state, 30), 7);
        assert_eq!(decode_min_boundary(state, 30), 4);
    }

    #[test]
    fn test_initial_state() {
        for states_count in [5, 6, 30, 42] {
            assert_eq!(encode_state(0, 0, states_count), State::INITIAL);
            assert!(!is_failure(State::INITIAL, states_count));
            assert_eq!(min_boundary(State::INITIAL, states_count), Ok(0));
        }
    }

    #[test]
    fn test_min_boundary() {
        assert_eq!(min_boundary(State::from_raw(129), 30), Ok(4));
    }

    #[test]
    fn test_min_boundary_of_failure() {
        let failure = State::from_raw(185);

        assert!(is_failure(failure, 30));
        assert_eq!(min_boundary(failure, 30), Err(NoMinimalBoundary { state: failure }));
    }

    #[test]
    fn test_failure_at_any_boundary() {
        for boundary in 0..10 {
            assert!(is_failure(encode_state(5, boundary, 5), 5));
            assert!(!is_failure(encode_state(4, boundary, 5), 5));
        }
    }

    #[test]
    fn test_relevant_window_len() {
        assert_eq!(relevant_window_len(0, 1, 7), 3);
        assert_eq!(relevant_window_len(5, 1, 7), 2);
        assert_eq!(relevant_window_len(7, 2, 7), 0);
        assert_eq!(relevant_window_len(0, 2, 3), 3);
        assert_eq!(relevant_window_len(9, 2, 7), 0);
    }

    #[test]
    fn test_error_message() {
        let error = NoMinimalBoundary { state: State::from_raw(185) };
        assert_eq!(error.to_string(), "failure state 185 has no minimal boundary");
    }
}
