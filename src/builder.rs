//! Builder (C6): recursive bulk construction. Ported from the shuffle-once,
//! `inorder`-recursion shape of `New`/`hoare` in
//! `internal/node/tree/tree.go` (the retrieved `downflux/go-kd` source),
//! generalized to an arbitrary runtime `K` and fanned out with `rayon`
//! above `PAR_THRESHOLD`.

use rand::seq::SliceRandom;

use crate::coord::Coord;
use crate::node::Node;
use crate::partition::hoare_partition;
use crate::point::KdPoint;

/// Below this many points, sequential construction avoids paying task-spawn
/// overhead that would dominate a small build (§4.4, §9).
pub(crate) const PAR_THRESHOLD: usize = 128;

/// Builds a tree of [`Node`]s from `data`, consuming it in place.
///
/// `data` is shuffled once at the top of this call (§4.2's pivot-selection
/// policy) before recursing; recursive calls never reshuffle.
pub(crate) fn build<P: KdPoint + Send>(mut data: Vec<P>, k: usize, n_leaf: usize) -> Option<Node<P>> {
    if data.is_empty() {
        return None;
    }
    let mut rng = rand::thread_rng();
    data.shuffle(&mut rng);
    Some(build_recursive(&mut data, 0, k, n_leaf))
}

fn build_recursive<P: KdPoint + Send>(data: &mut [P], axis: usize, k: usize, n_leaf: usize) -> Node<P> {
    if data.len() <= n_leaf {
        return Node::Leaf {
            data: data.to_vec(),
            axis,
        };
    }

    let total = data.len();
    let q = hoare_partition(data, axis);
    let pivot = Coord::from_point(&data[q]);
    let child_axis = (axis + 1) % k;

    // `data[q]` is the pivot; everything else splits into a left half
    // `[0, q)` (strictly less) and a right half `(q, len)` (greater-or-
    // equal), which `hoare_partition` guarantees are disjoint slices of the
    // same backing storage.
    let (left_slice, rest) = data.split_at_mut(q);
    let (pivot_slot, right_slice) = rest.split_first_mut().expect("q is a valid index");
    let pivot_point = pivot_slot.clone();

    let (left, right) = if total >= PAR_THRESHOLD {
        rayon::join(
            || build_child(left_slice, child_axis, k, n_leaf),
            || build_child(right_slice, child_axis, k, n_leaf),
        )
    } else {
        (
            build_child(left_slice, child_axis, k, n_leaf),
            build_child(right_slice, child_axis, k, n_leaf),
        )
    };

    Node::Interior {
        pivot,
        axis,
        data: vec![pivot_point],
        left: left.map(Box::new),
        right: right.map(Box::new),
    }
}

fn build_child<P: KdPoint + Send>(
    slice: &mut [P],
    axis: usize,
    k: usize,
    n_leaf: usize,
) -> Option<Node<P>> {
    if slice.is_empty() {
        None
    } else {
        Some(build_recursive(slice, axis, k, n_leaf))
    }
}
