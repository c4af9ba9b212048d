//! Error type returned by fallible [`KdTree`](crate::KdTree) operations.
//!
//! Only malformed input is an error. A lookup that finds nothing, or a removal
//! of a point that is not stored, is reported through the `Ok` value instead.
use thiserror::Error;

/// Reasons a [`KdTree`](crate::KdTree) operation can be rejected.
///
/// Every check happens before the tree is touched, so a returned error means
/// the tree is exactly as it was before the call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum KdTreeError {
    /// A tree was requested with zero dimensions.
    #[error("a k-d tree needs at least one dimension")]
    ZeroDimensions,

    /// A point's co-ordinate count does not match the tree's dimensionality.
    #[error("point has {actual} co-ordinates but the tree has {expected} dimensions")]
    DimensionMismatch {
        /// Dimensionality of the tree.
        expected: usize,
        /// Length of the supplied point.
        actual: usize,
    },

    /// A co-ordinate cannot be ordered (NaN).
    #[error("co-ordinate on axis {axis} is not a number")]
    NonNumericCoordinate {
        /// Index of the first offending co-ordinate.
        axis: usize,
    },

    /// An axis index is not below the tree's dimensionality.
    #[error("axis {axis} is out of range for a tree with {dims} dimensions")]
    AxisOutOfRange {
        /// Requested axis.
        axis: usize,
        /// Dimensionality of the tree.
        dims: usize,
    },
}
