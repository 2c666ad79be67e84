//! The coordinate type (V in SPEC_FULL §3): an owned, runtime-length tuple of
//! doubles, plus the small arithmetic the core needs from it.

use crate::point::{KdPoint, COINCIDENCE_EPSILON};

/// A K-dimensional coordinate, stored as an owned vector of `f64`.
///
/// Used for query points and for the coordinate cached at each interior
/// node's pivot. Point types supply their coordinate on demand via
/// [`KdPoint::coord`]; `Coord` is what the tree uses when it needs to hold
/// onto a coordinate independent of any particular point (e.g. a pivot, or a
/// caller's query).
#[derive(Debug, Clone, PartialEq)]
pub struct Coord(Vec<f64>);

impl Coord {
    /// Builds a coordinate from an explicit list of axis values.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Coord(values.into())
    }

    /// Builds a coordinate by reading every axis off a [`KdPoint`].
    pub fn from_point<P: KdPoint>(p: &P) -> Self {
        Coord((0..p.dim()).map(|d| p.coord(d)).collect())
    }

    /// Number of axes.
    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// The value along `axis`.
    #[inline]
    pub fn get(&self, axis: usize) -> f64 {
        self.0[axis]
    }

    /// Read-only access to the underlying axis values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn squared_distance(&self, other: &Coord) -> f64 {
        debug_assert_eq!(self.dim(), other.dim());
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let delta = a - b;
                delta * delta
            })
            .sum()
    }

    /// `true` iff every axis agrees with `other` within
    /// [`COINCIDENCE_EPSILON`].
    #[inline]
    pub fn coincident(&self, other: &Coord) -> bool {
        debug_assert_eq!(self.dim(), other.dim());
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= COINCIDENCE_EPSILON)
    }
}

impl KdPoint for Coord {
    #[inline]
    fn dim(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn coord(&self, axis: usize) -> f64 {
        self.0[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance_is_symmetric() {
        let a = Coord::new([0.0, 0.0]);
        let b = Coord::new([3.0, 4.0]);
        assert_eq!(a.squared_distance(&b), 25.0);
        assert_eq!(b.squared_distance(&a), 25.0);
    }

    #[test]
    fn coincidence_respects_epsilon() {
        let a = Coord::new([1.0, 1.0]);
        let b = Coord::new([1.0 + 1e-12, 1.0]);
        let c = Coord::new([1.0 + 1e-3, 1.0]);
        assert!(a.coincident(&b));
        assert!(!a.coincident(&c));
    }
}
