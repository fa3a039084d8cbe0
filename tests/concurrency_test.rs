//! Shared automata and tables under concurrent readers

use parametric_levenshtein::prelude::*;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

const NUM_READERS: usize = 8;

#[test]
fn test_parallel_traversals_share_one_automaton() {
    let automaton = LevenshteinAutomaton::create("approximately", 2, true).unwrap();
    let inputs = [
        "approximately",
        "aproximately",
        "approxiamtely",
        "apporximatly",
        "proximately",
        "approximatelyyy",
        "xxproximately",
    ];
    let expected: Vec<(State, bool, bool)> = inputs
        .iter()
        .map(|input| {
            let state = automaton.run(input);
            (state, automaton.is_final(state), automaton.is_failure(state))
        })
        .collect();

    let barrier = Barrier::new(NUM_READERS);
    let durations: Vec<Duration> = thread::scope(|scope| {
        let handles: Vec<_> = (0..NUM_READERS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    let start = Instant::now();

                    // Each thread keeps its own traversal state.
                    for _ in 0..200 {
                        for (input, &(state, is_final, is_failure)) in inputs.iter().zip(&expected) {
                            let mut current = automaton.initial_state();
                            for symbol in input.chars() {
                                current = automaton.next_state(current, symbol);
                            }
                            assert_eq!(current, state);
                            assert_eq!(automaton.is_final(current), is_final);
                            assert_eq!(automaton.is_failure(current), is_failure);
                        }
                    }

                    start.elapsed()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    println!("\n=== Parallel Traversal Test ===");
    for (i, duration) in durations.iter().enumerate() {
        println!("  Thread {}: {:?}", i, duration);
    }
}

#[test]
fn test_concurrent_first_access_to_builtin_tables() {
    let barrier = Arc::new(Barrier::new(NUM_READERS));

    let handles: Vec<_> = (0..NUM_READERS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let degree = 1 + (i % 2) as u32;
                let transposition = i % 4 >= 2;
                let automaton = LevenshteinAutomaton::create("abcdefg", degree, transposition).unwrap();

                (
                    ParametricDescriptionRegistry::builtin() as *const _ as usize,
                    Arc::as_ptr(automaton.description()) as usize,
                    automaton.description().key(),
                )
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // One registry, and one description per key.
    assert!(results.iter().all(|&(registry, _, _)| registry == results[0].0));
    for &(_, description, key) in &results {
        let shared = ParametricDescriptionRegistry::builtin()
            .get(key.degree, key.include_transposition)
            .unwrap();
        assert_eq!(Arc::as_ptr(shared) as usize, description);
    }
}

#[test]
fn test_automaton_moves_across_threads() {
    let automaton = Arc::new(LevenshteinAutomaton::create("abcdefg", 1, false).unwrap());

    let handles: Vec<_> = ["abxdefg", "abxdefgx", "abc"]
        .into_iter()
        .map(|input| {
            let automaton = Arc::clone(&automaton);
            thread::spawn(move || automaton.accepts(input))
        })
        .collect();

    let accepted: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(accepted, vec![true, false, false]);
}
