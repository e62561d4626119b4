// Sortscope Engine - Merge Sort
//
// Top-down merge sort, stable: when keys compare equal the left run wins.
// The internals are generic over the element type so the stability
// guarantee can be exercised with tagged keys; the engine itself only ever
// merges i32.

/// Recursive merge sort.
///
/// Emits once per element written during merging, including the two drain
/// loops for leftover elements.
pub(crate) fn merge_sort(values: &mut [i32], emit: &mut dyn FnMut(&[i32], &[usize])) {
    if values.len() < 2 {
        return;
    }
    sort_range(values, 0, values.len() - 1, emit);
}

fn sort_range<T: Ord + Copy>(
    values: &mut [T],
    left: usize,
    right: usize,
    emit: &mut dyn FnMut(&[T], &[usize]),
) {
    if left < right {
        let mid = (left + right) / 2;
        sort_range(values, left, mid, emit);
        sort_range(values, mid + 1, right, emit);
        merge(values, left, mid, right, emit);
    }
}

/// Merge the sorted runs `values[left..=mid]` and `values[mid+1..=right]`.
/// `<=` keeps the left run's elements first on ties.
fn merge<T: Ord + Copy>(
    values: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    emit: &mut dyn FnMut(&[T], &[usize]),
) {
    let left_run = values[left..=mid].to_vec();
    let right_run = values[mid + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;
    while i < left_run.len() && j < right_run.len() {
        if left_run[i] <= right_run[j] {
            values[k] = left_run[i];
            i += 1;
        } else {
            values[k] = right_run[j];
            j += 1;
        }
        emit(values, &[k]);
        k += 1;
    }
    while i < left_run.len() {
        values[k] = left_run[i];
        i += 1;
        emit(values, &[k]);
        k += 1;
    }
    while j < right_run.len() {
        values[k] = right_run[j];
        j += 1;
        emit(values, &[k]);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn collect(values: &mut [i32]) -> Vec<Vec<i32>> {
        let mut emissions = Vec::new();
        merge_sort(values, &mut |state, _| emissions.push(state.to_vec()));
        emissions
    }

    #[test]
    fn test_merge_emission_trace() {
        // Split is [2,3] / [1]: merging [2] and [3] writes both, then the
        // outer merge drains 1 first and the left run afterwards.
        let mut values = vec![2, 3, 1];
        let emissions = collect(&mut values);

        assert_eq!(
            emissions,
            vec![
                vec![2, 3, 1],
                vec![2, 3, 1],
                vec![1, 3, 1],
                vec![1, 2, 1],
                vec![1, 2, 3],
            ]
        );
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_emits_once_per_written_element() {
        // n elements written per merge level: n*ceil(log2 n) total for a
        // power-of-two length.
        let mut values = vec![4, 3, 2, 1];
        let emissions = collect(&mut values);
        assert_eq!(emissions.len(), 8);
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sorts_odd_lengths_and_duplicates() {
        for input in [
            vec![9, 1, 8, 2, 7, 3, 6],
            vec![5, 5, 5, 1, 1],
            vec![170, 45, 75, 90, 802, 24, 2, 66],
        ] {
            let mut expected = input.clone();
            expected.sort_unstable();
            let mut values = input;
            collect(&mut values);
            assert_eq!(values, expected);
        }
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: Vec<i32> = Vec::new();
        assert!(collect(&mut empty).is_empty());

        let mut single = vec![6];
        assert!(collect(&mut single).is_empty());
        assert_eq!(single, vec![6]);
    }

    /// Key that carries its origin but compares by value alone, making the
    /// tie-break observable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Tagged {
        value: i32,
        origin: usize,
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.value.cmp(&other.value)
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    #[test]
    fn test_merge_is_stable_on_equal_keys() {
        // Equal keys keep their original left-to-right order: at every
        // merge step the left run's occurrence lands first.
        let mut values: Vec<Tagged> = [2, 1, 2, 1, 2, 1]
            .iter()
            .enumerate()
            .map(|(origin, &value)| Tagged { value, origin })
            .collect();
        let last = values.len() - 1;
        sort_range(&mut values, 0, last, &mut |_, _| {});

        assert_eq!(
            values
                .iter()
                .map(|t| (t.value, t.origin))
                .collect::<Vec<_>>(),
            vec![(1, 1), (1, 3), (1, 5), (2, 0), (2, 2), (2, 4)]
        );
    }
}
