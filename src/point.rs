//! Fixed-length co-ordinate sequence stored at each node of a [`KdTree`](crate::KdTree).
use std::fmt;
use std::ops::Index;

/// A point with one co-ordinate per tree dimension.
///
/// The tree only ever compares, copies or replaces whole points; once stored,
/// a point's co-ordinates are never changed one by one.
///
/// # Examples
///
/// ```rust
/// use kdnode::Point;
///
/// let point = Point::from([30.0, 40.0]);
///
/// assert_eq!(point.dims(), 2);
/// assert_eq!(point[1], 40.0);
/// assert_eq!(point.to_string(), "(30, 40)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point<A> {
    coords: Box<[A]>,
}

impl<A> Point<A> {
    /// Number of co-ordinates in this point.
    #[inline]
    pub fn dims(&self) -> usize {
        self.coords.len()
    }

    /// The co-ordinates as a slice, indexed by axis.
    #[inline]
    pub fn coords(&self) -> &[A] {
        &self.coords
    }
}

impl<A: Copy> Point<A> {
    pub(crate) fn from_slice(coords: &[A]) -> Self {
        Self {
            coords: coords.into(),
        }
    }
}

impl<A> Index<usize> for Point<A> {
    type Output = A;

    #[inline]
    fn index(&self, axis: usize) -> &A {
        &self.coords[axis]
    }
}

impl<A> AsRef<[A]> for Point<A> {
    fn as_ref(&self) -> &[A] {
        &self.coords
    }
}

impl<A: PartialEq> PartialEq<[A]> for Point<A> {
    fn eq(&self, other: &[A]) -> bool {
        *self.coords == *other
    }
}

impl<A, const N: usize> From<[A; N]> for Point<A> {
    fn from(coords: [A; N]) -> Self {
        Self {
            coords: Box::new(coords),
        }
    }
}

impl<A> From<Vec<A>> for Point<A> {
    fn from(coords: Vec<A>) -> Self {
        Self {
            coords: coords.into_boxed_slice(),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Point<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, coord) in self.coords.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coord}")?;
        }
        write!(f, ")")
    }
}
