//! Definitions for the co-ordinate scalar trait shared by every part of the tree.
use num_traits::Num;
use std::fmt::Debug;

/// Axis trait represents the traits that must be implemented
/// by the type used as the generic parameter `A` on [`KdTree`](crate::KdTree),
/// i.e. the type of each co-ordinate of a stored point.
///
/// Implemented for the primitive float and integer types. Comparisons in the
/// tree are exact: two co-ordinates are equal only if `==` says so.
pub trait Axis: Num + PartialOrd + Copy + Debug {
    /// returns `false` for values that cannot take part in an ordering
    /// (NaN for floats). Such co-ordinates are rejected at the API boundary.
    fn is_comparable(self) -> bool;
}

macro_rules! impl_axis_float {
    ($($t:ty),+) => {
        $(
            impl Axis for $t {
                #[inline]
                fn is_comparable(self) -> bool {
                    !self.is_nan()
                }
            }
        )+
    };
}

macro_rules! impl_axis_int {
    ($($t:ty),+) => {
        $(
            impl Axis for $t {
                #[inline]
                fn is_comparable(self) -> bool {
                    true
                }
            }
        )+
    };
}

impl_axis_float!(f32, f64);
impl_axis_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::types::Axis;

    #[rstest]
    #[case(0.0f64, true)]
    #[case(-12.5f64, true)]
    #[case(f64::INFINITY, true)]
    #[case(f64::NEG_INFINITY, true)]
    #[case(f64::NAN, false)]
    fn f64_comparability(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_comparable(), expected);
    }

    #[test]
    fn f32_nan_is_not_comparable() {
        assert!(!f32::NAN.is_comparable());
        assert!(1.5f32.is_comparable());
    }

    #[test]
    fn integers_are_always_comparable() {
        assert!(i32::MIN.is_comparable());
        assert!(u64::MAX.is_comparable());
        assert!(0usize.is_comparable());
    }
}
