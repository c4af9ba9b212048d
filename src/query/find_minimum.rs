use crate::error::KdTreeError;
use crate::kdtree::KdTree;
use crate::node::Node;
use crate::point::Point;
use crate::types::Axis;

impl<A: Axis> KdTree<A> {
    /// Finds a stored point with the smallest co-ordinate on `axis`.
    ///
    /// Returns `Ok(None)` for an empty tree. If several points share the
    /// minimum, which one is returned depends on the shape of the tree.
    ///
    /// # Stack usage
    ///
    /// The search recurses once per level, so its stack depth equals the
    /// tree's [`height`](KdTree::height) in the worst case. A tree built from
    /// sorted points is a chain that tall, and querying it can overflow the
    /// thread's stack.
    ///
    /// # Errors
    ///
    /// [`KdTreeError::AxisOutOfRange`] if `axis` is not below
    /// [`dims`](KdTree::dims).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdnode::KdTree;
    ///
    /// let mut tree: KdTree<f64> = KdTree::new(2)?;
    /// tree.add(&[30.0, 40.0])?;
    /// tree.add(&[10.0, 12.0])?;
    /// tree.add(&[70.0, 5.0])?;
    ///
    /// assert_eq!(tree.find_minimum(0)?.unwrap().coords(), &[10.0, 12.0]);
    /// assert_eq!(tree.find_minimum(1)?.unwrap().coords(), &[70.0, 5.0]);
    /// # Ok::<(), kdnode::KdTreeError>(())
    /// ```
    pub fn find_minimum(&self, axis: usize) -> Result<Option<&Point<A>>, KdTreeError> {
        self.validate_axis(axis)?;

        Ok(self.min_recurse(self.root(), axis, 0).map(Node::point))
    }

    /// Node holding the minimum on `axis` within the subtree `node`, which
    /// sits at `depth`.
    ///
    /// Where the subtree splits on `axis` itself only its left side can hold
    /// anything smaller, so the right side is skipped.
    pub(crate) fn min_recurse<'a>(
        &self,
        node: Option<&'a Node<A>>,
        axis: usize,
        depth: usize,
    ) -> Option<&'a Node<A>> {
        let node = node?;

        if self.axis_at(depth) == axis {
            return match node.left() {
                Some(left) => self.min_recurse(Some(left), axis, depth + 1),
                None => Some(node),
            };
        }

        let mut best = node;
        for candidate in [
            self.min_recurse(node.left(), axis, depth + 1),
            self.min_recurse(node.right(), axis, depth + 1),
        ]
        .into_iter()
        .flatten()
        {
            if candidate.point[axis] < best.point[axis] {
                best = candidate;
            }
        }
        Some(best)
    }
}
