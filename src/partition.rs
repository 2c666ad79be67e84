//! Partitioner (C3): Hoare-style partition-around-a-pivot.
//!
//! Ported from the two-pointer shape in the original `hoare` function
//! (`internal/node/tree/tree.go` in the retrieved `downflux/go-kd` source):
//! the pivot is rotated to the front of the slice, the two pointers close in
//! from both ends, and a final swap restores the pivot to its sorted
//! position.

use crate::point::KdPoint;

/// Partitions `data` around `data[0]`'s value on `axis`.
///
/// Postcondition: returns `q` such that every `data[i]` with `i < q` has
/// `data[i].coord(axis) < data[q].coord(axis)`, every `data[i]` with `i >=
/// q` has `data[i].coord(axis) >= data[q].coord(axis)`, and the original
/// pivot point now sits at index `q`.
///
/// # Panics
///
/// Panics if `data` is empty.
pub(crate) fn hoare_partition<P: KdPoint>(data: &mut [P], axis: usize) -> usize {
    assert!(!data.is_empty(), "partition requires a non-empty slice");

    let high = data.len();
    if high == 1 {
        return 0;
    }

    let mut i = 1usize;
    let mut j = high - 1;

    loop {
        while i <= j && data[i].coord(axis) < data[0].coord(axis) {
            i += 1;
        }
        while j > 0 && data[j].coord(axis) >= data[0].coord(axis) {
            j -= 1;
        }
        if i > j {
            break;
        }
        data.swap(i, j);
        i += 1;
        if j == 0 {
            break;
        }
        j -= 1;
    }

    let pivot_index = i - 1;
    data.swap(0, pivot_index);
    pivot_index
}
