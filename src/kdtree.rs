//! Pointer-based k-d tree, one point per node, with the splitting axis
//! rotating through the dimensions as depth increases.

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::error::KdTreeError;
use crate::iter::TreeIter;
use crate::node::Node;
use crate::types::Axis;

/// k-d tree over points of a fixed dimensionality.
///
/// At depth `d` the tree splits on axis `d % dims`: a point whose co-ordinate
/// on that axis is less than the node's goes left, anything else (equal
/// included) goes right. The tree is never rebalanced, so its shape depends
/// only on the order in which points are added and removed.
///
/// Every method that accepts a point checks it has exactly
/// [`dims`](KdTree::dims) co-ordinates, none of them NaN, and returns a
/// [`KdTreeError`] without touching the tree otherwise.
///
/// Cloning, comparing, formatting and dropping never recurse, so a tree that
/// has degenerated into a long chain is as safe to handle as a balanced one.
#[derive(Clone, PartialEq)]
pub struct KdTree<A> {
    pub(crate) dims: usize,
    pub(crate) root: Option<Box<Node<A>>>,
    pub(crate) size: usize,
}

impl<A: Axis> KdTree<A> {
    /// Creates an empty tree for points with `dims` co-ordinates.
    ///
    /// # Errors
    ///
    /// [`KdTreeError::ZeroDimensions`] if `dims` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnode::KdTree;
    ///
    /// let tree: KdTree<f64> = KdTree::new(3)?;
    ///
    /// assert_eq!(tree.dims(), 3);
    /// assert!(tree.is_empty());
    /// # Ok::<(), kdnode::KdTreeError>(())
    /// ```
    pub fn new(dims: usize) -> Result<Self, KdTreeError> {
        if dims == 0 {
            return Err(KdTreeError::ZeroDimensions);
        }

        #[cfg(feature = "tracing")]
        event!(Level::DEBUG, dims, "created k-d tree");

        Ok(Self {
            dims,
            root: None,
            size: 0,
        })
    }

    /// Number of co-ordinates every stored point has.
    #[inline]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Returns the current number of points stored in the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnode::KdTree;
    ///
    /// let mut tree: KdTree<f64> = KdTree::new(2)?;
    ///
    /// tree.add(&[1.0, 2.0])?;
    /// tree.add(&[1.0, 2.0])?;
    ///
    /// assert_eq!(tree.size(), 2);
    /// # Ok::<(), kdnode::KdTreeError>(())
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// `true` if the tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree is not empty.
    #[inline]
    pub fn root(&self) -> Option<&Node<A>> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<A>, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.left().map(|n| (n, level + 1)));
            stack.extend(node.right().map(|n| (n, level + 1)));
        }
        height
    }

    /// Removes every point.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Iterate over all stored points, depth-first, root first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnode::KdTree;
    ///
    /// let mut tree: KdTree<i32> = KdTree::new(2)?;
    /// tree.add(&[3, 3])?;
    /// tree.add(&[1, 1])?;
    ///
    /// let points: Vec<_> = tree.iter().map(|p| p.coords().to_vec()).collect();
    /// assert_eq!(points, vec![vec![3, 3], vec![1, 1]]);
    /// # Ok::<(), kdnode::KdTreeError>(())
    /// ```
    pub fn iter(&self) -> TreeIter<'_, A> {
        TreeIter::new(self.root())
    }

    #[inline]
    pub(crate) fn axis_at(&self, depth: usize) -> usize {
        depth % self.dims
    }

    pub(crate) fn validate_point(&self, point: &[A]) -> Result<(), KdTreeError> {
        if point.len() != self.dims {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.dims,
                actual: point.len(),
            });
        }
        if let Some(axis) = point.iter().position(|coord| !coord.is_comparable()) {
            return Err(KdTreeError::NonNumericCoordinate { axis });
        }
        Ok(())
    }

    pub(crate) fn validate_axis(&self, axis: usize) -> Result<(), KdTreeError> {
        if axis >= self.dims {
            return Err(KdTreeError::AxisOutOfRange {
                axis,
                dims: self.dims,
            });
        }
        Ok(())
    }
}

/// Lists the stored points in iteration order rather than nesting the nodes.
impl<A: fmt::Debug> fmt::Debug for KdTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("dims", &self.dims)
            .field("size", &self.size)
            .field("points", &TreeIter::new(self.root.as_deref()).collect::<Vec<_>>())
            .finish()
    }
}
