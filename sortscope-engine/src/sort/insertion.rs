// Sortscope Engine - Insertion Sorts
//
// Insertion and shell sort. Both shift elements right while the key is
// held aside, so mid-shift emissions show the transient duplicate exactly
// as the animation should.

/// Classic shift-right insertion sort.
///
/// Emits after every shift and once more when the key is placed, even when
/// the key was already in position.
pub(crate) fn insertion(values: &mut [i32], emit: &mut dyn FnMut(&[i32], &[usize])) {
    for i in 1..values.len() {
        let key = values[i];
        let mut slot = i;
        while slot > 0 && values[slot - 1] > key {
            values[slot] = values[slot - 1];
            emit(values, &[slot]);
            slot -= 1;
        }
        values[slot] = key;
        emit(values, &[slot]);
    }
}

/// Shell sort over the gap sequence n/2, n/4, … 1.
///
/// Each gap round is a gapped insertion sort with the same emission
/// discipline: one frame per shift, one per placement.
pub(crate) fn shell(values: &mut [i32], emit: &mut dyn FnMut(&[i32], &[usize])) {
    let n = values.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let key = values[i];
            let mut slot = i;
            while slot >= gap && values[slot - gap] > key {
                values[slot] = values[slot - gap];
                emit(values, &[slot]);
                slot -= gap;
            }
            values[slot] = key;
            emit(values, &[slot]);
        }
        gap /= 2;
    }
}
