//! KNN engine (C7). Ported from `path`/`knn` in
//! `internal/knn/knn.go` (the retrieved `downflux/go-kd` source): a
//! pivot-guided descent materialized as a leaf-first path, then an unwind
//! that tests the unexplored sibling at each level against the plane
//! distance.

use crate::coord::Coord;
use crate::heap::BoundedMaxHeap;
use crate::node::Node;
use crate::point::KdPoint;

/// Returns the at-most-`k` points in the subtree rooted at `root` closest to
/// `query` (by squared Euclidean distance) that satisfy `filter`, in
/// ascending distance order.
pub(crate) fn knn<P: KdPoint>(
    root: Option<&Node<P>>,
    query: &Coord,
    k: usize,
    filter: &dyn Fn(&P) -> bool,
) -> Vec<P> {
    let Some(root) = root else {
        return Vec::new();
    };
    if k == 0 {
        return Vec::new();
    }

    let mut heap = BoundedMaxHeap::new(k);
    visit(root, query, &mut heap, filter);
    heap.into_sorted_ascending()
        .into_iter()
        .map(|(p, _)| p)
        .collect()
}

/// Descends to a leaf along the query's side of every split, collecting the
/// visited nodes root-first, then reverses so the caller sees leaf-first
/// order (§4.6's `path` contract — never short-circuits on `query ==
/// pivot`).
fn path<'a, P: KdPoint>(mut n: &'a Node<P>, query: &Coord) -> Vec<&'a Node<P>> {
    let mut visited = Vec::new();
    loop {
        visited.push(n);
        match n {
            Node::Leaf { .. } => break,
            Node::Interior {
                pivot, axis, left, right, ..
            } => {
                let go_left = query.get(*axis) < pivot.get(*axis);
                let next = if go_left { left.as_deref() } else { right.as_deref() };
                match next {
                    Some(child) => n = child,
                    None => break,
                }
            }
        }
    }
    visited.reverse();
    visited
}

fn visit<P: KdPoint>(
    root: &Node<P>,
    query: &Coord,
    heap: &mut BoundedMaxHeap<P>,
    filter: &dyn Fn(&P) -> bool,
) {
    for m in path(root, query) {
        for p in m.data() {
            if filter(p) {
                let d = query.squared_distance(&Coord::from_point(p));
                if !heap.full() || d < heap.top_key() {
                    heap.push(p.clone(), d);
                }
            }
        }

        if let Node::Interior {
            pivot, axis, left, right, ..
        } = m
        {
            let plane = {
                let delta = query.get(*axis) - pivot.get(*axis);
                delta * delta
            };
            if !heap.full() || heap.top_key() > plane {
                let go_left = query.get(*axis) < pivot.get(*axis);
                // `path` already descended into the side matching the
                // query; now expand the complementary side.
                let other = if go_left { right.as_deref() } else { left.as_deref() };
                if let Some(other) = other {
                    visit(other, query, heap, filter);
                }
            }
        }
    }
}
