#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::error::KdTreeError;
use crate::kdtree::KdTree;
use crate::node::Node;
use crate::point::Point;
use crate::types::Axis;

impl<A: Axis> KdTree<A> {
    /// Adds a point to the tree as a new leaf.
    ///
    /// Duplicates are never merged: adding a point that is already stored
    /// adds a second node for it, in the right subtree of the first.
    ///
    /// # Errors
    ///
    /// [`KdTreeError::DimensionMismatch`] or
    /// [`KdTreeError::NonNumericCoordinate`] for a malformed point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnode::KdTree;
    ///
    /// let mut tree: KdTree<f64> = KdTree::new(3)?;
    ///
    /// tree.add(&[1.0, 2.0, 5.0])?;
    ///
    /// assert_eq!(tree.size(), 1);
    /// assert!(tree.add(&[1.0, 2.0]).is_err());
    /// # Ok::<(), kdnode::KdTreeError>(())
    /// ```
    pub fn add(&mut self, point: &[A]) -> Result<(), KdTreeError> {
        self.validate_point(point)?;

        let dims = self.dims;
        let mut depth = 0;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            let split_dim = depth % dims;
            slot = if point[split_dim] < node.point[split_dim] {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Node::leaf(Point::from_slice(point)));
        self.size += 1;

        #[cfg(feature = "tracing")]
        event!(Level::TRACE, depth, point = ?point, "added point");

        Ok(())
    }

    /// Removes one node holding exactly `point`, if there is one.
    ///
    /// Returns `true` if a node was removed. When the point is stored more
    /// than once only the first copy found on the search path is removed.
    /// A node with children is not unlinked: it takes over the point of the
    /// nearest-on-its-axis node below it and that node is removed instead.
    ///
    /// # Stack usage
    ///
    /// Removal recurses once per level on the search path and again while
    /// looking for a substitute, so its stack depth grows with the tree's
    /// [`height`](KdTree::height). The tree is never rebalanced: points added
    /// in sorted order form a chain as tall as the tree is large, and removing
    /// from deep in such a chain can overflow the thread's stack. `add`,
    /// `contains`, iteration, `clone` and drop do not recurse.
    ///
    /// # Errors
    ///
    /// [`KdTreeError::DimensionMismatch`] or
    /// [`KdTreeError::NonNumericCoordinate`] for a malformed point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnode::KdTree;
    ///
    /// let mut tree: KdTree<f64> = KdTree::new(2)?;
    /// tree.add(&[30.0, 40.0])?;
    /// tree.add(&[70.0, 70.0])?;
    ///
    /// assert!(tree.remove(&[30.0, 40.0])?);
    /// assert!(!tree.remove(&[30.0, 40.0])?);
    /// assert_eq!(tree.size(), 1);
    /// # Ok::<(), kdnode::KdTreeError>(())
    /// ```
    pub fn remove(&mut self, point: &[A]) -> Result<bool, KdTreeError> {
        self.validate_point(point)?;

        let root = self.root.take();
        let (root, removed) = self.remove_recurse(root, point, 0);
        self.root = root;

        if removed {
            self.size -= 1;
        }

        #[cfg(feature = "tracing")]
        event!(Level::TRACE, removed, point = ?point, "remove");

        Ok(removed)
    }

    /// Removes `query` from the subtree `node` found at `depth`, returning the
    /// subtree that should take its place and whether anything was removed.
    fn remove_recurse(
        &self,
        node: Option<Box<Node<A>>>,
        query: &[A],
        depth: usize,
    ) -> (Option<Box<Node<A>>>, bool) {
        let Some(mut node) = node else {
            return (None, false);
        };
        let split_dim = self.axis_at(depth);

        if node.point == *query {
            // Prefer a substitute from the right; a right subtree's minimum
            // keeps the left subtree valid as it is.
            let from_right = self
                .min_recurse(node.right(), split_dim, depth + 1)
                .map(|min| min.point.clone());
            let (substitute, subtree) = match from_right {
                Some(substitute) => (substitute, node.right.take()),
                None => {
                    let Some(substitute) = self
                        .min_recurse(node.left(), split_dim, depth + 1)
                        .map(|min| min.point.clone())
                    else {
                        return (None, true);
                    };
                    // Everything left of the old point is >= the substitute,
                    // so the whole left subtree moves to the right.
                    (substitute, node.left.take())
                }
            };

            #[cfg(feature = "tracing")]
            event!(
                Level::DEBUG,
                depth,
                split_dim,
                substitute = ?substitute.coords(),
                "substituting removed point"
            );

            let (subtree, _) = self.remove_recurse(subtree, substitute.coords(), depth + 1);
            node.point = substitute;
            node.right = subtree;
            return (Some(node), true);
        }

        let removed = if query[split_dim] < node.point[split_dim] {
            let (left, removed) = self.remove_recurse(node.left.take(), query, depth + 1);
            node.left = left;
            removed
        } else {
            let (right, removed) = self.remove_recurse(node.right.take(), query, depth + 1);
            node.right = right;
            removed
        };

        (Some(node), removed)
    }
}
