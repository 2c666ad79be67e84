//! Node representation (C5): leaf buckets and pivot-bearing interior nodes,
//! plus the insert/remove mutators that walk a single path.

use crate::coord::Coord;
use crate::point::{coincident, less_on, KdPoint};

/// A vertex of a [`crate::KdTree`].
#[derive(Debug, Clone)]
pub(crate) enum Node<P> {
    /// An unordered bucket of points, with the axis this node would have
    /// split on had it been interior (needed so inserts below it keep
    /// rotating axes correctly).
    Leaf { data: Vec<P>, axis: usize },

    /// A single pivot coordinate splitting the remaining points into a left
    /// and right subtree, plus every point coincident with the pivot.
    Interior {
        pivot: Coord,
        axis: usize,
        data: Vec<P>,
        left: Option<Box<Node<P>>>,
        right: Option<Box<Node<P>>>,
    },
}

impl<P: KdPoint> Node<P> {
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    #[inline]
    pub(crate) fn axis(&self) -> usize {
        match self {
            Node::Leaf { axis, .. } => *axis,
            Node::Interior { axis, .. } => *axis,
        }
    }

    #[inline]
    pub(crate) fn pivot(&self) -> Option<&Coord> {
        match self {
            Node::Leaf { .. } => None,
            Node::Interior { pivot, .. } => Some(pivot),
        }
    }

    #[inline]
    pub(crate) fn data(&self) -> &[P] {
        match self {
            Node::Leaf { data, .. } => data,
            Node::Interior { data, .. } => data,
        }
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<&Node<P>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Interior { left, .. } => left.as_deref(),
        }
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<&Node<P>> {
        match self {
            Node::Leaf { .. } => None,
            Node::Interior { right, .. } => right.as_deref(),
        }
    }

    /// Appends every point stored in this subtree into `out`, in
    /// unspecified (pre-order) order.
    pub(crate) fn collect_into(&self, out: &mut Vec<P>) {
        out.extend_from_slice(self.data());
        if let Node::Interior { left, right, .. } = self {
            if let Some(l) = left {
                l.collect_into(out);
            }
            if let Some(r) = right {
                r.collect_into(out);
            }
        }
    }

    /// Inserts `p` along a single path (§4.5).
    pub(crate) fn insert(&mut self, p: P) {
        match self {
            Node::Leaf { data, .. } => data.push(p),
            Node::Interior {
                pivot,
                axis,
                data,
                left,
                right,
            } => {
                if coincident(&p, pivot) {
                    data.push(p);
                    return;
                }
                let goes_left = p.coord(*axis) < pivot.get(*axis);
                let child_axis = (*axis + 1) % p.dim();
                if goes_left {
                    match left {
                        Some(l) => l.insert(p),
                        None => {
                            *left = Some(Box::new(Node::Leaf {
                                data: vec![p],
                                axis: child_axis,
                            }))
                        }
                    }
                } else {
                    match right {
                        Some(r) => r.insert(p),
                        None => {
                            *right = Some(Box::new(Node::Leaf {
                                data: vec![p],
                                axis: child_axis,
                            }))
                        }
                    }
                }
            }
        }
    }

    /// Removes the first point along the path to `v` satisfying
    /// `predicate`, swap-removing it from whichever node's data holds it
    /// (§4.5). Never restructures the tree (OQ-R).
    pub(crate) fn remove(&mut self, v: &Coord, predicate: &dyn Fn(&P) -> bool) -> Option<P> {
        match self {
            Node::Leaf { data, .. } => remove_matching(data, predicate),
            Node::Interior {
                pivot,
                data,
                axis,
                left,
                right,
            } => {
                if v.coincident(pivot) {
                    return remove_matching(data, predicate);
                }
                let goes_left = less_on(*axis, v, pivot);
                if goes_left {
                    left.as_mut().and_then(|l| l.remove(v, predicate))
                } else {
                    right.as_mut().and_then(|r| r.remove(v, predicate))
                }
            }
        }
    }
}

/// Swap-removes the first element of `data` satisfying `predicate`.
fn remove_matching<P>(data: &mut Vec<P>, predicate: &dyn Fn(&P) -> bool) -> Option<P> {
    let idx = data.iter().position(|p| predicate(p))?;
    Some(data.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pt(f64, f64);
    impl KdPoint for Pt {
        fn dim(&self) -> usize {
            2
        }
        fn coord(&self, axis: usize) -> f64 {
            match axis {
                0 => self.0,
                1 => self.1,
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn leaf_insert_appends() {
        let mut n: Node<Pt> = Node::Leaf {
            data: vec![Pt(0.0, 0.0)],
            axis: 0,
        };
        n.insert(Pt(1.0, 1.0));
        assert_eq!(n.data().len(), 2);
    }

    #[test]
    fn interior_insert_descends_by_axis() {
        let mut n: Node<Pt> = Node::Interior {
            pivot: Coord::new([5.0, 0.0]),
            axis: 0,
            data: vec![Pt(5.0, 0.0)],
            left: None,
            right: None,
        };
        n.insert(Pt(1.0, 1.0));
        n.insert(Pt(9.0, 1.0));
        assert!(n.left().is_some());
        assert!(n.right().is_some());
        assert_eq!(n.left().unwrap().data()[0], Pt(1.0, 1.0));
        assert_eq!(n.right().unwrap().data()[0], Pt(9.0, 1.0));
    }

    #[test]
    fn interior_insert_lifts_coincident_point() {
        let mut n: Node<Pt> = Node::Interior {
            pivot: Coord::new([5.0, 0.0]),
            axis: 0,
            data: vec![Pt(5.0, 0.0)],
            left: None,
            right: None,
        };
        n.insert(Pt(5.0, 0.0));
        assert_eq!(n.data().len(), 2);
        assert!(n.left().is_none());
        assert!(n.right().is_none());
    }

    #[test]
    fn remove_leaves_structure_intact() {
        let mut n: Node<Pt> = Node::Interior {
            pivot: Coord::new([5.0, 0.0]),
            axis: 0,
            data: vec![Pt(5.0, 0.0)],
            left: Some(Box::new(Node::Leaf {
                data: vec![Pt(1.0, 1.0)],
                axis: 1,
            })),
            right: None,
        };
        let removed = n.remove(&Coord::new([1.0, 1.0]), &|p: &Pt| *p == Pt(1.0, 1.0));
        assert_eq!(removed, Some(Pt(1.0, 1.0)));
        // The now-empty leaf remains in place (OQ-R).
        assert!(n.left().is_some());
        assert_eq!(n.left().unwrap().data().len(), 0);
    }
}
