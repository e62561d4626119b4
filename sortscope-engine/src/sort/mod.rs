// Sortscope Engine - Sorting Core
//
// Ten sorting strategies over a shared snapshot-emission callback. Every
// element assignment or swap is immediately followed by an emission carrying
// the full sequence state plus the indices the mutation touched; the driver
// turns each emission into one animation frame. Nothing is batched: the
// step discipline trades efficiency for frame granularity on purpose.
//
// # Architecture
//
// ```text
// AnimationDriver
//         │
//         │ sort(values, algorithm, emit)
//         ▼
// ┌───────────────────┐   emit(values, touched)
// │  algorithm family  │ ───────────────────────▶ Snapshot ─▶ Renderer
// └───────────────────┘
// ```
//
// Families follow the classical taxonomy: exchange (bubble, quick),
// insertion (insertion, shell), selection (selection, heap), merge, and
// distribution (counting, radix, bucket). Each algorithm is a plain
// function; the only dispatch point is the `Algorithm` match below.

mod distribution;
mod error;
mod exchange;
mod insertion;
mod merge;
mod selection;

pub use error::{SortError, SortResult};

use sortscope_utils::algorithm::Algorithm;

/// Run `algorithm` over `values`, invoking `emit` after every element write
/// or swap with the full current sequence and the touched indices.
///
/// On success the slice is sorted ascending. Distribution sorts (radix,
/// bucket, counting) index by value and reject negative input before any
/// mutation occurs, so a rejected run leaves the slice untouched.
pub fn sort(
    values: &mut [i32],
    algorithm: Algorithm,
    emit: &mut dyn FnMut(&[i32], &[usize]),
) -> SortResult<()> {
    if algorithm.requires_non_negative() {
        if let Some((index, &value)) = values.iter().enumerate().find(|&(_, &v)| v < 0) {
            return Err(SortError::NegativeInput {
                algorithm,
                index,
                value,
            });
        }
    }

    match algorithm {
        Algorithm::Bubble => exchange::bubble(values, emit),
        Algorithm::Selection => selection::selection(values, emit),
        Algorithm::Insertion => insertion::insertion(values, emit),
        Algorithm::Merge => merge::merge_sort(values, emit),
        Algorithm::Quick => exchange::quick(values, emit),
        Algorithm::Heap => selection::heap(values, emit),
        Algorithm::Radix => distribution::radix(values, emit),
        Algorithm::Shell => insertion::shell(values, emit),
        Algorithm::Bucket => distribution::bucket(values, emit),
        Algorithm::Counting => distribution::counting(values, emit),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sorted_copy(values: &[i32]) -> Vec<i32> {
        let mut copy = values.to_vec();
        copy.sort_unstable();
        copy
    }

    fn run_collecting(values: &mut Vec<i32>, algorithm: Algorithm) -> Vec<Vec<i32>> {
        let mut emissions = Vec::new();
        sort(values, algorithm, &mut |state, _touched| {
            emissions.push(state.to_vec())
        })
        .unwrap();
        emissions
    }

    const FIXTURES: &[&[i32]] = &[
        &[],
        &[7],
        &[5, 3, 8, 1],
        &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        &[4, 4, 4],
        &[23, 5, 5, 101, 0, 77, 5, 309, 12, 12],
        &[170, 45, 75, 90, 802, 24, 2, 66],
    ];

    #[test]
    fn test_all_algorithms_sort_all_fixtures() {
        for algorithm in Algorithm::iter() {
            for fixture in FIXTURES {
                let mut values = fixture.to_vec();
                run_collecting(&mut values, algorithm);
                assert_eq!(
                    values,
                    sorted_copy(fixture),
                    "{} failed on {:?}",
                    algorithm,
                    fixture
                );
            }
        }
    }

    #[test]
    fn test_emissions_preserve_length_and_value_set() {
        for algorithm in Algorithm::iter() {
            for fixture in FIXTURES {
                let mut values = fixture.to_vec();
                let emissions = run_collecting(&mut values, algorithm);
                for emission in &emissions {
                    assert_eq!(emission.len(), fixture.len());
                    for value in emission {
                        assert!(
                            fixture.contains(value),
                            "{} emitted {} not present in {:?}",
                            algorithm,
                            value,
                            fixture
                        );
                    }
                }
            }
        }
    }

    // Swap-based strategies never hold a value outside the slice, so every
    // emission is a full permutation of the input, not just value-set
    // preserving. Shift- and rebuild-based strategies (insertion, shell,
    // merge, distribution) transiently duplicate values mid-write, exactly
    // as the animation shows.
    #[test]
    fn test_swap_based_emissions_are_permutations() {
        for algorithm in [
            Algorithm::Bubble,
            Algorithm::Selection,
            Algorithm::Quick,
            Algorithm::Heap,
        ] {
            for fixture in FIXTURES {
                let mut values = fixture.to_vec();
                let emissions = run_collecting(&mut values, algorithm);
                for emission in emissions {
                    assert_eq!(
                        sorted_copy(&emission),
                        sorted_copy(fixture),
                        "{} broke the multiset on {:?}",
                        algorithm,
                        fixture
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_equal_input_emits_input_state() {
        for algorithm in Algorithm::iter() {
            let mut values = vec![4, 4, 4];
            let emissions = run_collecting(&mut values, algorithm);
            assert_eq!(values, vec![4, 4, 4]);
            assert!(
                emissions.iter().any(|e| e == &[4, 4, 4]),
                "{} produced no snapshot equal to the input",
                algorithm
            );
        }
    }

    #[test]
    fn test_empty_and_singleton_terminate_without_emissions_or_with_identity() {
        for algorithm in Algorithm::iter() {
            let mut empty: Vec<i32> = Vec::new();
            let emissions = run_collecting(&mut empty, algorithm);
            assert!(empty.is_empty());
            assert!(emissions.iter().all(|e| e.is_empty()));

            let mut single = vec![42];
            let emissions = run_collecting(&mut single, algorithm);
            assert_eq!(single, vec![42]);
            assert!(emissions.iter().all(|e| e == &[42]));
        }
    }

    #[test]
    fn test_touched_indices_are_in_range() {
        for algorithm in Algorithm::iter() {
            let mut values = vec![23, 5, 5, 101, 0, 77, 5, 309, 12, 12];
            let len = values.len();
            sort(&mut values, algorithm, &mut |_state, touched| {
                assert!(touched.iter().all(|&index| index < len));
            })
            .unwrap();
        }
    }

    #[test]
    fn test_distribution_sorts_reject_negative_input() {
        for algorithm in [Algorithm::Radix, Algorithm::Bucket, Algorithm::Counting] {
            let mut values = vec![3, -1, 2];
            let mut emitted = false;
            let result = sort(&mut values, algorithm, &mut |_, _| emitted = true);
            assert_eq!(
                result,
                Err(SortError::NegativeInput {
                    algorithm,
                    index: 1,
                    value: -1,
                })
            );
            assert_eq!(values, vec![3, -1, 2], "rejected run must not mutate");
            assert!(!emitted, "rejected run must not emit");
        }
    }

    #[test]
    fn test_comparison_sorts_accept_negative_input() {
        for algorithm in [
            Algorithm::Bubble,
            Algorithm::Selection,
            Algorithm::Insertion,
            Algorithm::Merge,
            Algorithm::Quick,
            Algorithm::Heap,
            Algorithm::Shell,
        ] {
            let mut values = vec![3, -1, -7, 2];
            sort(&mut values, algorithm, &mut |_, _| {}).unwrap();
            assert_eq!(values, vec![-7, -1, 2, 3], "{} failed", algorithm);
        }
    }
}
