// Integration tests for the step-sort engine and the process controller

use rand::{rngs::StdRng, Rng, SeedableRng};
use stepsort::automaton::{Algorithm, MergeSort, QuickSort, SortAutomaton, StepSort};
use stepsort::process::SortProcess;

/// Feed each snapshot after the first as a guess; every guess must be correct
/// and the process must finish exactly on the last one.
fn assert_trace(algorithm: Algorithm, snapshots: &[&[i32]]) {
    let mut process = SortProcess::new(algorithm, snapshots[0].to_vec());
    let mut i = 1;

    while !process.is_done() {
        assert!(
            i < snapshots.len(),
            "{} sort still running after the last snapshot",
            algorithm
        );
        let verdict = process.next(snapshots[i]);
        assert!(
            verdict.is_correct(),
            "{} sort failed at step {}, expected {:?}, got {:?}",
            algorithm,
            i,
            snapshots[i],
            process.current()
        );
        i += 1;
    }

    assert_eq!(i, snapshots.len(), "{} sort finished early", algorithm);
    assert_eq!(process.guesses(), snapshots.len() - 1);
}

/// Run an automaton to completion, returning every intermediate array
fn run_to_done(algorithm: Algorithm, array: &[i32]) -> Vec<Vec<i32>> {
    let mut current = array.to_vec();
    let mut automaton = SortAutomaton::new(algorithm, &current);
    let mut states = Vec::new();

    for _ in 0..10_000 {
        let step = automaton.advance(&mut current);
        states.push(current.clone());
        if step.done {
            return states;
        }
    }
    panic!("{} sort did not terminate on {:?}", algorithm, array);
}

fn random_arrays(seed: u64) -> Vec<Vec<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arrays = Vec::new();
    for len in 1..=12 {
        for _ in 0..20 {
            // Narrow value range so duplicates are common
            arrays.push((0..len).map(|_| rng.random_range(-3..6)).collect());
        }
    }
    arrays
}

#[test]
fn test_bubble_sort_trace() {
    assert_trace(
        Algorithm::Bubble,
        &[
            &[5, 1, 4, 2, 6, 9, 10, 2], // initial array
            &[1, 5, 4, 2, 6, 9, 10, 2], // i = 0, j = 1
            &[1, 4, 5, 2, 6, 9, 10, 2], // i = 0, j = 2
            &[1, 4, 2, 5, 6, 9, 10, 2], // i = 0, j = 3
            &[1, 4, 2, 5, 6, 9, 2, 10], // i = 0, j = 7
            &[1, 2, 4, 5, 6, 9, 2, 10], // i = 1, j = 2
            &[1, 2, 4, 5, 6, 2, 9, 10], // i = 1, j = 6
            &[1, 2, 4, 5, 2, 6, 9, 10], // i = 2, j = 5
            &[1, 2, 4, 2, 5, 6, 9, 10], // i = 3, j = 4
            &[1, 2, 2, 4, 5, 6, 9, 10], // i = 4, j = 3
            &[1, 2, 2, 4, 5, 6, 9, 10], // end
        ],
    );
}

#[test]
fn test_heap_sort_trace() {
    assert_trace(
        Algorithm::Heap,
        &[
            &[3, 5, 1, 4, 7, 6, 2, 8], // initial array
            &[3, 5, 1, 8, 7, 6, 2, 4], // heapify at 3
            &[3, 5, 6, 8, 7, 1, 2, 4], // heapify at 2
            &[3, 8, 6, 5, 7, 1, 2, 4], // heapify at 1
            &[8, 7, 6, 5, 3, 1, 2, 4], // heapify at 0
            &[7, 5, 6, 4, 3, 1, 2, 8], // extract into 7
            &[6, 5, 2, 4, 3, 1, 7, 8],
            &[5, 4, 2, 1, 3, 6, 7, 8],
            &[4, 3, 2, 1, 5, 6, 7, 8],
            &[3, 1, 2, 4, 5, 6, 7, 8],
            &[2, 1, 3, 4, 5, 6, 7, 8],
            &[1, 2, 3, 4, 5, 6, 7, 8], // end
        ],
    );
}

#[test]
fn test_merge_sort_trace() {
    assert_trace(
        Algorithm::Merge,
        &[
            &[5, 3, 4, 1, 7, 6, 8, 2], // initial array
            &[3, 5, 4, 1, 7, 6, 8, 2], // 3, 5
            &[3, 5, 1, 4, 7, 6, 8, 2], // 1, 4
            &[1, 3, 4, 5, 7, 6, 8, 2], // 1, 3, 4, 5
            &[1, 3, 4, 5, 6, 7, 8, 2], // 6, 7
            &[1, 3, 4, 5, 6, 7, 2, 8], // 2, 8
            &[1, 3, 4, 5, 2, 6, 7, 8], // 2, 6, 7, 8
            &[1, 2, 3, 4, 5, 6, 7, 8], // end
        ],
    );
}

#[test]
fn test_merge_sort_trace_uneven_halves() {
    assert_trace(
        Algorithm::Merge,
        &[
            &[5, 3, 4, 1, 7, 6, 8, 2, 14, 12, 13, 10, 11, 9], // initial array
            &[3, 4, 5, 1, 7, 6, 8, 2, 14, 12, 13, 10, 11, 9], // 3, 4, 5
            &[3, 4, 5, 1, 6, 7, 8, 2, 14, 12, 13, 10, 11, 9], // 1, 6, 7, 8
            &[1, 3, 4, 5, 6, 7, 8, 2, 14, 12, 13, 10, 11, 9], // 1, 3, 4, 5, 6, 7, 8
            &[1, 3, 4, 5, 6, 7, 8, 2, 12, 14, 13, 10, 11, 9], // 12, 14
            &[1, 3, 4, 5, 6, 7, 8, 2, 12, 14, 10, 13, 11, 9], // 10, 13
            &[1, 3, 4, 5, 6, 7, 8, 2, 12, 14, 10, 13, 9, 11], // 9, 11
            &[1, 3, 4, 5, 6, 7, 8, 2, 12, 14, 9, 10, 11, 13], // 9, 10, 11, 13
            &[1, 3, 4, 5, 6, 7, 8, 2, 9, 10, 11, 12, 13, 14], // 2, 9, ..., 14
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14], // end
        ],
    );
}

#[test]
fn test_merge_sort_takes_seven_merges_for_eight() {
    let states = run_to_done(Algorithm::Merge, &[5, 3, 4, 1, 7, 6, 8, 2]);
    assert_eq!(states.len(), 7);
    assert_eq!(states[6], [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_quick_sort_trace() {
    assert_trace(
        Algorithm::Quick,
        &[
            &[5, 3, 2, 1, 7, 10, 6], // initial array
            &[5, 3, 2, 1, 6, 10, 7],
            &[1, 3, 2, 5, 6, 10, 7],
            &[1, 2, 3, 5, 6, 10, 7],
            &[1, 2, 3, 5, 6, 7, 10], // already sorted at this step
            &[1, 2, 3, 5, 6, 7, 10], // one more call is needed to end
        ],
    );
}

#[test]
fn test_all_algorithms_sort() {
    for array in random_arrays(11) {
        let mut expected = array.clone();
        expected.sort();

        for algorithm in Algorithm::ALL {
            let states = run_to_done(algorithm, &array);
            assert_eq!(
                states.last().unwrap(),
                &expected,
                "{} sort of {:?}",
                algorithm,
                array
            );
        }
    }
}

#[test]
fn test_replay_is_deterministic() {
    for array in random_arrays(23) {
        for algorithm in Algorithm::ALL {
            assert_eq!(run_to_done(algorithm, &array), run_to_done(algorithm, &array));
        }
    }
}

#[test]
fn test_changed_flag_matches_mutation() {
    for array in random_arrays(5) {
        for algorithm in Algorithm::ALL {
            let mut current = array.clone();
            let mut automaton = SortAutomaton::new(algorithm, &current);

            loop {
                let before = current.clone();
                let step = automaton.advance(&mut current);

                if !step.changed {
                    assert_eq!(before, current, "{} sort mutated without reporting", algorithm);
                } else if !(algorithm == Algorithm::Heap && step.done) {
                    // The final heap extraction always reports a change
                    assert_ne!(before, current, "{} sort reported a phantom change", algorithm);
                }

                if step.done {
                    break;
                }
            }
        }
    }
}

#[test]
fn test_merge_plan_is_balanced_decomposition() {
    for len in 0..40 {
        let plan = MergeSort::new(len).plan().to_vec();
        assert_eq!(plan.len(), len.saturating_sub(1));

        if len < 2 {
            continue;
        }

        // The last merge spans the whole array
        let root = plan.last().unwrap();
        assert_eq!((root.left_begin, root.right_end), (0, len));

        for (i, range) in plan.iter().enumerate() {
            let left = range.left_end - range.left_begin;
            let right = range.right_end - range.right_begin;
            assert_eq!(range.left_end, range.right_begin);
            assert_eq!(left, range.len() / 2);
            assert!(right == left || right == left + 1);

            // Each half of two or more elements was merged earlier
            for (begin, end) in [
                (range.left_begin, range.left_end),
                (range.right_begin, range.right_end),
            ] {
                if end - begin >= 2 {
                    assert!(plan[..i]
                        .iter()
                        .any(|r| r.left_begin == begin && r.right_end == end));
                }
            }
        }
    }
}

#[test]
fn test_quick_sort_done_only_on_empty_stack() {
    for array in random_arrays(31) {
        let mut current = array.clone();
        let mut sort = QuickSort::new(current.len());

        loop {
            let was_empty = sort.pending().is_empty();
            let step = sort.advance(&mut current);
            assert_eq!(step.done, was_empty);
            if step.done {
                break;
            }
        }
        assert!(sort.pending().is_empty());
    }
}

#[test]
fn test_quick_sort_handles_left_partition_first() {
    let mut array = [4, 9, 1, 8, 2, 7, 5];
    let mut sort = QuickSort::new(array.len());
    sort.advance(&mut array);

    let pending = sort.pending();
    assert_eq!(pending.len(), 2);
    let top = pending[1];
    let below = pending[0];
    assert!(top.end <= below.begin, "left range must be on top of the stack");
}

#[test]
fn test_single_element_sessions_finish_in_one_round() {
    for algorithm in Algorithm::ALL {
        let mut process = SortProcess::new(algorithm, vec![42]);
        assert!(process.next(&[42]).is_correct());
        assert!(process.is_done(), "{} sort", algorithm);
    }
}
