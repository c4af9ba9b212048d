use crate::error::KdTreeError;
use crate::kdtree::KdTree;
use crate::types::Axis;

impl<A: Axis> KdTree<A> {
    /// Returns `true` if a node holding exactly `point` lies on the path the
    /// routing rule takes through the tree, i.e. the same search
    /// [`remove`](KdTree::remove) performs.
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
    /// let mut tree: KdTree<i32> = KdTree::new(2)?;
    /// tree.add(&[30, 40])?;
    /// tree.add(&[10, 12])?;
    ///
    /// assert!(tree.contains(&[10, 12])?);
    /// assert!(!tree.contains(&[10, 13])?);
    /// # Ok::<(), kdnode::KdTreeError>(())
    /// ```
    pub fn contains(&self, point: &[A]) -> Result<bool, KdTreeError> {
        self.validate_point(point)?;

        let mut depth = 0;
        let mut curr = self.root();
        while let Some(node) = curr {
            if node.point == *point {
                return Ok(true);
            }
            let split_dim = self.axis_at(depth);
            curr = if point[split_dim] < node.point[split_dim] {
                node.left()
            } else {
                node.right()
            };
            depth += 1;
        }
        Ok(false)
    }
}
