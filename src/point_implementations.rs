//! [`KdPoint`] implementations for common point representations: scalars
//! (K=1), fixed-size arrays, small tuples, and (feature `glam`) `glam`
//! vector types.
//!
//! Ported from the teacher crate's `point_implementations.rs`, adapted from
//! its `Point<const D: usize>` (`f32`, compile-time `D`) shape to this
//! crate's runtime-`dim()` `KdPoint` trait over `f64`.

use crate::point::KdPoint;

macro_rules! impl_kdpoint_scalar {
    ($t:ty) => {
        impl KdPoint for $t {
            #[inline]
            fn dim(&self) -> usize {
                1
            }
            #[inline]
            fn coord(&self, _axis: usize) -> f64 {
                *self as f64
            }
        }
    };
}
impl_kdpoint_scalar!(f32);
impl_kdpoint_scalar!(f64);
impl_kdpoint_scalar!(i8);
impl_kdpoint_scalar!(i16);
impl_kdpoint_scalar!(i32);
impl_kdpoint_scalar!(i64);
impl_kdpoint_scalar!(isize);
impl_kdpoint_scalar!(u8);
impl_kdpoint_scalar!(u16);
impl_kdpoint_scalar!(u32);
impl_kdpoint_scalar!(u64);
impl_kdpoint_scalar!(usize);

macro_rules! impl_kdpoint_array {
    ($t:ty, $n:literal) => {
        impl KdPoint for [$t; $n] {
            #[inline]
            fn dim(&self) -> usize {
                $n
            }
            #[inline]
            fn coord(&self, axis: usize) -> f64 {
                self[axis] as f64
            }
        }
    };
}
impl_kdpoint_array!(f32, 1);
impl_kdpoint_array!(f32, 2);
impl_kdpoint_array!(f32, 3);
impl_kdpoint_array!(f32, 4);
impl_kdpoint_array!(f64, 1);
impl_kdpoint_array!(f64, 2);
impl_kdpoint_array!(f64, 3);
impl_kdpoint_array!(f64, 4);

macro_rules! impl_kdpoint_tuple2 {
    ($t:ty) => {
        impl KdPoint for ($t, $t) {
            #[inline]
            fn dim(&self) -> usize {
                2
            }
            #[inline]
            fn coord(&self, axis: usize) -> f64 {
                match axis {
                    0 => self.0 as f64,
                    1 => self.1 as f64,
                    _ => unreachable!("axis {axis} out of range for a 2-tuple"),
                }
            }
        }
    };
}
impl_kdpoint_tuple2!(f32);
impl_kdpoint_tuple2!(f64);

macro_rules! impl_kdpoint_tuple3 {
    ($t:ty) => {
        impl KdPoint for ($t, $t, $t) {
            #[inline]
            fn dim(&self) -> usize {
                3
            }
            #[inline]
            fn coord(&self, axis: usize) -> f64 {
                match axis {
                    0 => self.0 as f64,
                    1 => self.1 as f64,
                    2 => self.2 as f64,
                    _ => unreachable!("axis {axis} out of range for a 3-tuple"),
                }
            }
        }
    };
}
impl_kdpoint_tuple3!(f32);
impl_kdpoint_tuple3!(f64);

macro_rules! impl_kdpoint_tuple4 {
    ($t:ty) => {
        impl KdPoint for ($t, $t, $t, $t) {
            #[inline]
            fn dim(&self) -> usize {
                4
            }
            #[inline]
            fn coord(&self, axis: usize) -> f64 {
                match axis {
                    0 => self.0 as f64,
                    1 => self.1 as f64,
                    2 => self.2 as f64,
                    3 => self.3 as f64,
                    _ => unreachable!("axis {axis} out of range for a 4-tuple"),
                }
            }
        }
    };
}
impl_kdpoint_tuple4!(f32);
impl_kdpoint_tuple4!(f64);

#[cfg(feature = "glam")]
pub use glam_implementations::*;
#[cfg(feature = "glam")]
mod glam_implementations {
    use super::*;

    macro_rules! impl_kdpoint_glam2 {
        ($t:ty) => {
            impl KdPoint for $t {
                #[inline]
                fn dim(&self) -> usize {
                    2
                }
                #[inline]
                fn coord(&self, axis: usize) -> f64 {
                    match axis {
                        0 => self.x as f64,
                        1 => self.y as f64,
                        _ => unreachable!("axis {axis} out of range for {}", stringify!($t)),
                    }
                }
            }
        };
    }
    impl_kdpoint_glam2!(glam::Vec2);
    impl_kdpoint_glam2!(glam::DVec2);

    macro_rules! impl_kdpoint_glam3 {
        ($t:ty) => {
            impl KdPoint for $t {
                #[inline]
                fn dim(&self) -> usize {
                    3
                }
                #[inline]
                fn coord(&self, axis: usize) -> f64 {
                    match axis {
                        0 => self.x as f64,
                        1 => self.y as f64,
                        2 => self.z as f64,
                        _ => unreachable!("axis {axis} out of range for {}", stringify!($t)),
                    }
                }
            }
        };
    }
    impl_kdpoint_glam3!(glam::Vec3);
    impl_kdpoint_glam3!(glam::Vec3A);
    impl_kdpoint_glam3!(glam::DVec3);

    macro_rules! impl_kdpoint_glam4 {
        ($t:ty) => {
            impl KdPoint for $t {
                #[inline]
                fn dim(&self) -> usize {
                    4
                }
                #[inline]
                fn coord(&self, axis: usize) -> f64 {
                    match axis {
                        0 => self.x as f64,
                        1 => self.y as f64,
                        2 => self.z as f64,
                        3 => self.w as f64,
                        _ => unreachable!("axis {axis} out of range for {}", stringify!($t)),
                    }
                }
            }
        };
    }
    impl_kdpoint_glam4!(glam::Vec4);
    impl_kdpoint_glam4!(glam::DVec4);

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_dim_is_one() {
        assert_eq!(KdPoint::dim(&3.5_f64), 1);
        assert_eq!(KdPoint::coord(&3.5_f64, 0), 3.5);
    }

    #[test]
    fn array_reads_each_axis() {
        let p = [1.0_f64, 2.0, 3.0];
        assert_eq!(p.dim(), 3);
        assert_eq!(p.coord(0), 1.0);
        assert_eq!(p.coord(2), 3.0);
    }

    #[test]
    fn tuple_reads_each_axis() {
        let p = (1.0_f64, 2.0);
        assert_eq!(p.dim(), 2);
        assert_eq!(p.coord(1), 2.0);
    }
}
