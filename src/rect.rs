//! Axis-aligned hyperrectangle (R in SPEC_FULL §3), used by the range engine
//! both as the caller's query box and as the internally tightened subtree
//! bound.

use crate::coord::Coord;
use crate::error::{KdError, Result};

/// An axis-aligned K-dimensional box, `[min, max]` per axis (inclusive).
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    min: Coord,
    max: Coord,
}

impl Rect {
    /// Builds a rectangle from min/max corners.
    ///
    /// # Errors
    ///
    /// Returns [`KdError::DimensionMismatch`] if `min` and `max` disagree in
    /// dimension, and [`KdError::InvalidConfig`] if any axis has `min >
    /// max`.
    pub fn new(min: Coord, max: Coord) -> Result<Self> {
        if min.dim() != max.dim() {
            return Err(KdError::DimensionMismatch {
                expected: min.dim(),
                actual: max.dim(),
            });
        }
        for axis in 0..min.dim() {
            if min.get(axis) > max.get(axis) {
                return Err(KdError::invalid_config(format!(
                    "axis {axis}: min {} > max {}",
                    min.get(axis),
                    max.get(axis)
                )));
            }
        }
        Ok(Rect { min, max })
    }

    /// A box spanning `[-inf, +inf]` in every one of `dim` axes; the subtree
    /// bound used at the root of a range search.
    pub(crate) fn unbounded(dim: usize) -> Self {
        Rect {
            min: Coord::new(vec![f64::NEG_INFINITY; dim]),
            max: Coord::new(vec![f64::INFINITY; dim]),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.min.dim()
    }

    #[inline]
    pub fn min(&self) -> &Coord {
        &self.min
    }

    #[inline]
    pub fn max(&self) -> &Coord {
        &self.max
    }

    /// `true` iff `point` lies within `[min, max]` on every axis.
    pub fn contains(&self, point: &Coord) -> bool {
        debug_assert_eq!(self.dim(), point.dim());
        (0..self.dim()).all(|d| self.min.get(d) <= point.get(d) && point.get(d) <= self.max.get(d))
    }

    /// `true` iff `self` and `other` share no point, i.e. some axis has
    /// `self.max < other.min` or `other.max < self.min`.
    pub fn is_disjoint(&self, other: &Rect) -> bool {
        debug_assert_eq!(self.dim(), other.dim());
        (0..self.dim())
            .any(|d| self.max.get(d) < other.min.get(d) || other.max.get(d) < self.min.get(d))
    }

    /// Returns a copy of `self` with `max[axis]` overridden to `value`.
    pub(crate) fn with_max(&self, axis: usize, value: f64) -> Rect {
        let mut max = self.max.as_slice().to_vec();
        max[axis] = value;
        Rect {
            min: self.min.clone(),
            max: Coord::new(max),
        }
    }

    /// Returns a copy of `self` with `min[axis]` overridden to `value`.
    pub(crate) fn with_min(&self, axis: usize, value: f64) -> Rect {
        let mut min = self.min.as_slice().to_vec();
        min[axis] = value;
        Rect {
            min: Coord::new(min),
            max: self.max.clone(),
        }
    }
}
