//! The parametric transition function.
//!
//! Pure function over explicit values: no automaton object is needed, which
//! keeps transitions testable against hand-built descriptions.

use super::characteristic_vector::CharacteristicVector;
use super::state::{self, State};
use super::ParametricDescription;

/// Computes the successor of `from` after reading `symbol`.
///
/// 1. The failure state is absorbing and is returned unchanged.
/// 2. The state is unpacked into `(state_id, min_boundary)`.
/// 3. The window `[min_boundary, min_boundary + min(2n + 1, w - min_boundary))`
///    of `word` is turned into a characteristic vector for `symbol`.
/// 4. The table cell `(vector - 1) * states_count + state_id` gives the next
///    state id and how far the boundary moves.
///
/// Cost is one vector of at most `2n + 1` comparisons plus two table reads,
/// independent of word length and alphabet.
///
/// # Arguments
///
/// * `from` - Current state, produced by the same `description`
/// * `symbol` - Next input code point
/// * `word` - Code points of the query word
/// * `description` - Tables for the automaton's degree and transposition flag
#[inline]
pub fn transit(
    from: State,
    symbol: char,
    word: &[char],
    description: &ParametricDescription,
) -> State {
    let states_count = description.states_count();
    if state::is_failure(from, states_count) {
        return from;
    }

    let state_id = state::decode_state_id(from, states_count);
    let min_boundary = state::decode_min_boundary(from, states_count);
    let window = state::relevant_window_len(min_boundary, description.degree(), word.len());
    let vector = CharacteristicVector::encode(
        symbol,
        word,
        min_boundary as isize,
        (min_boundary + window) as isize,
    );

    let (next_state_id, offset) = description.lookup(vector, state_id);
    state::encode_state(next_state_id, min_boundary + offset, states_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{tables, PackedArray};

    fn run(description: &ParametricDescription, word: &str, input: &str) -> State {
        let word: Vec<char> = word.chars().collect();
        input
            .chars()
            .fold(State::INITIAL, |state, symbol| transit(state, symbol, &word, description))
    }

    #[test]
    fn test_exact_prefix_advances_boundary() {
        let description = tables::degree_1();
        let state = run(&description, "abcdefg", "abc");

        assert_eq!(state::decode_state_id(state, 5), 0);
        assert_eq!(description.min_boundary(state), Ok(3));
    }

    #[test]
    fn test_failure_is_absorbing() {
        let description = tables::degree_1();
        let word: Vec<char> = "abcdefg".chars().collect();
        let failure = run(&description, "abcdefg", "xxx");

        assert!(description.is_failure_state(failure));
        for symbol in ['a', 'g', 'x', 'é'] {
            assert_eq!(transit(failure, symbol, &word, &description), failure);
        }
    }

    #[test]
    fn test_known_encoded_states() {
        assert_eq!(run(&tables::degree_1(), "abcdefg", "abxdefg").raw(), 43);
        assert_eq!(run(&tables::degree_1_transposition(), "abcdefg", "abcdegf").raw(), 44);
        assert_eq!(run(&tables::degree_2(), "abcdefg", "abxdeg").raw(), 160);
        assert_eq!(run(&tables::degree_2(), "abcdefg", "abxxdeg").raw(), 185);
        assert_eq!(run(&tables::degree_2(), "abcdefg", "abcd").raw(), 124);
    }

    #[test]
    fn test_past_end_of_word_uses_empty_vector() {
        let description = tables::degree_1();

        // "" within distance 1 of "x", "xx" is not.
        let one = run(&description, "", "x");
        let two = run(&description, "", "xx");

        assert!(description.is_final_state(one, 0));
        assert!(description.is_failure_state(two));
    }

    #[test]
    fn test_hand_built_description() {
        let transitions = PackedArray::pack(&[1, 1, 0]).unwrap();
        let offsets = PackedArray::pack(&[0, 0, 1]).unwrap();
        let exact = ParametricDescription::new(0, false, transitions, offsets, vec![0]).unwrap();

        let matched = run(&exact, "ab", "ab");
        assert!(exact.is_final_state(matched, 2));

        assert!(exact.is_failure_state(run(&exact, "ab", "ax")));
        assert!(exact.is_failure_state(run(&exact, "ab", "abc")));
    }
}
