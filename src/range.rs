//! Range engine (C8). Ported from `rangesearch`/`RangeSearch` in
//! `internal/rangesearch/rangesearch.go` (the retrieved `downflux/go-kd`
//! source): a recursively tightened subtree bound, with the goroutine
//! fan-out there replaced by `rayon::join`.

use crate::coord::Coord;
use crate::node::Node;
use crate::point::KdPoint;
use crate::rect::Rect;

/// Returns every point in the subtree rooted at `root` that lies within
/// `query` and satisfies `filter`, in unspecified order.
pub(crate) fn range<P: KdPoint + Send>(
    root: Option<&Node<P>>,
    query: &Rect,
    filter: &(dyn Fn(&P) -> bool + Sync),
) -> Vec<P>
where
    P: Sync,
{
    let Some(root) = root else {
        return Vec::new();
    };
    let bound = Rect::unbounded(query.dim());
    search(root, query, &bound, filter)
}

fn search<P: KdPoint + Send + Sync>(
    n: &Node<P>,
    query: &Rect,
    bound: &Rect,
    filter: &(dyn Fn(&P) -> bool + Sync),
) -> Vec<P> {
    if bound.is_disjoint(query) {
        return Vec::new();
    }

    let mut out: Vec<P> = n
        .data()
        .iter()
        .filter(|p| query.contains(&Coord::from_point(*p)) && filter(p))
        .cloned()
        .collect();

    if n.is_leaf() {
        return out;
    }

    let Node::Interior { pivot, axis, left, right, .. } = n else {
        unreachable!("checked is_leaf above")
    };
    let left_bound = bound.with_max(*axis, pivot.get(*axis));
    let right_bound = bound.with_min(*axis, pivot.get(*axis));

    let gather = |child: &Option<Box<Node<P>>>, child_bound: &Rect| -> Vec<P> {
        match child {
            Some(c) => search(c, query, child_bound, filter),
            None => Vec::new(),
        }
    };

    // Every interior recursive step fans out, matching the unconditional
    // goroutine fan-out in the original `rangesearch` (§4.7); unlike the
    // builder there is no cheap subtree-size hint to gate on here, and the
    // two sides are always disjoint work worth handing to the pool.
    let (left_out, right_out) = rayon::join(|| gather(left, &left_bound), || gather(right, &right_bound));

    out.extend(left_out);
    out.extend(right_out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;

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
    fn scenario_5_single_point_in_box() {
        let points = vec![
            Pt(-63.0, -14.0),
            Pt(-55.0, 36.0),
            Pt(51.0, -37.0),
            Pt(60.0, 46.0),
            Pt(86.0, 48.0),
        ];
        let root = build(points, 2, 1).unwrap();
        let query = Rect::new(Coord::new([79.0, 36.0]), Coord::new([95.0, 84.0])).unwrap();
        let result = range(Some(&root), &query, &|_| true);
        assert_eq!(result, vec![Pt(86.0, 48.0)]);
    }

    #[test]
    fn empty_tree_returns_empty() {
        let query = Rect::new(Coord::new([0.0, 0.0]), Coord::new([1.0, 1.0])).unwrap();
        let result: Vec<Pt> = range(None, &query, &|_| true);
        assert!(result.is_empty());
    }

    #[test]
    fn every_result_satisfies_containment_and_filter() {
        let points: Vec<Pt> = (0..300)
            .map(|i| Pt((i * 37 % 401) as f64 - 200.0, (i * 53 % 397) as f64 - 200.0))
            .collect();
        let root = build(points, 2, 8).unwrap();
        let query = Rect::new(Coord::new([-50.0, -50.0]), Coord::new([50.0, 50.0])).unwrap();
        let result = range(Some(&root), &query, &|p: &Pt| p.0 >= 0.0);
        for p in &result {
            assert!(query.contains(&Coord::new([p.0, p.1])));
            assert!(p.0 >= 0.0);
        }
    }

    #[test]
    fn completeness_against_brute_force() {
        let points: Vec<Pt> = (0..300)
            .map(|i| Pt((i * 37 % 401) as f64 - 200.0, (i * 53 % 397) as f64 - 200.0))
            .collect();
        let query = Rect::new(Coord::new([-50.0, -50.0]), Coord::new([50.0, 50.0])).unwrap();
        let expected: Vec<Pt> = points
            .iter()
            .filter(|p| query.contains(&Coord::new([p.0, p.1])))
            .cloned()
            .collect();

        let root = build(points, 2, 8).unwrap();
        let mut result = range(Some(&root), &query, &|_| true);
        result.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.partial_cmp(&b.1).unwrap()));
        let mut expected_sorted = expected;
        expected_sorted
            .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.partial_cmp(&b.1).unwrap()));
        assert_eq!(result, expected_sorted);
    }
}
