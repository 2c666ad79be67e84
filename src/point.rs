//! Point interface (C1) and axis comparator (C2).

/// A record that can be stored in a [`crate::KdTree`].
///
/// The tree only ever asks a point for its dimension and for one coordinate
/// at a time along a given axis; it never needs the whole coordinate at
/// once, which keeps this trait implementable for point types that don't
/// want to materialize a `Vec` just to answer a query.
pub trait KdPoint: Clone + std::fmt::Debug {
    /// Number of axes this point's coordinate spans.
    fn dim(&self) -> usize;

    /// The coordinate value along `axis`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `axis >= self.dim()`; the tree never
    /// calls this with an out-of-range axis.
    fn coord(&self, axis: usize) -> f64;

    /// Squared Euclidean distance to `other`. Both points must share a
    /// dimension; the default implementation assumes `self.dim() ==
    /// other.dim()` and does not check.
    #[inline]
    fn distance_squared(&self, other: &Self) -> f64 {
        (0..self.dim())
            .map(|d| {
                let delta = self.coord(d) - other.coord(d);
                delta * delta
            })
            .sum()
    }
}

/// Returns `true` iff `u[axis] < v[axis]`.
#[inline]
pub(crate) fn less_on<P: KdPoint>(axis: usize, u: &P, v: &P) -> bool {
    u.coord(axis) < v.coord(axis)
}

/// Epsilon used by the coincidence test (§3, §4.4, §9).
pub const COINCIDENCE_EPSILON: f64 = 1e-9;

/// Returns `true` iff every axis of `u` and `v` agree within
/// [`COINCIDENCE_EPSILON`]. `u` and `v` need not be the same concrete type —
/// this is what lets a stored point be compared against a bare [`Coord`].
#[inline]
pub(crate) fn coincident<P: KdPoint, Q: KdPoint>(u: &P, v: &Q) -> bool {
    debug_assert_eq!(u.dim(), v.dim());
    (0..u.dim()).all(|d| (u.coord(d) - v.coord(d)).abs() <= COINCIDENCE_EPSILON)
}
