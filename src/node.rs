//! Tree nodes. Each node owns its point and, exclusively, its two subtrees.
//!
//! Nothing here recurses once per level: cloning, comparing and dropping a
//! subtree all walk it with an explicit stack, so list-shaped trees built
//! from sorted input are handled like any other.
use std::fmt;

use crate::iter::TreeIter;
use crate::point::Point;

/// A single node of a [`KdTree`](crate::KdTree).
///
/// Nodes are created by [`KdTree::add`](crate::KdTree::add) and only ever
/// handed out by shared reference, so the routing invariant cannot be broken
/// from outside the crate.
pub struct Node<A> {
    pub(crate) point: Point<A>,
    pub(crate) left: Option<Box<Node<A>>>,
    pub(crate) right: Option<Box<Node<A>>>,
}

impl<A> Node<A> {
    pub(crate) fn leaf(point: Point<A>) -> Box<Self> {
        Box::new(Self {
            point,
            left: None,
            right: None,
        })
    }

    /// The point currently held by this node.
    #[inline]
    pub fn point(&self) -> &Point<A> {
        &self.point
    }

    /// Subtree of points that compare less than this one on this node's axis.
    #[inline]
    pub fn left(&self) -> Option<&Node<A>> {
        self.left.as_deref()
    }

    /// Subtree of points that compare greater than or equal to this one on
    /// this node's axis.
    #[inline]
    pub fn right(&self) -> Option<&Node<A>> {
        self.right.as_deref()
    }

    /// `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Iterate over every point in the subtree rooted at this node, this
    /// node's point first.
    pub fn iter(&self) -> TreeIter<'_, A> {
        TreeIter::new(Some(self))
    }
}

/// Takes a subtree apart one node at a time. Each popped node has already
/// lost its children by the time it is dropped.
pub(crate) fn dismantle<A>(root: Option<Box<Node<A>>>) {
    let mut stack: Vec<Box<Node<A>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<A> Drop for Node<A> {
    fn drop(&mut self) {
        dismantle(self.left.take());
        dismantle(self.right.take());
    }
}

impl<A: Clone> Clone for Node<A> {
    fn clone(&self) -> Self {
        let mut copy = Node {
            point: self.point.clone(),
            left: None,
            right: None,
        };

        {
            let mut stack: Vec<(&Node<A>, &mut Node<A>)> = vec![(self, &mut copy)];
            while let Some((src, dst)) = stack.pop() {
                let Node { left, right, .. } = dst;
                if let Some(src_left) = src.left() {
                    let dst_left = left.insert(Node::leaf(src_left.point.clone()));
                    stack.push((src_left, &mut **dst_left));
                }
                if let Some(src_right) = src.right() {
                    let dst_right = right.insert(Node::leaf(src_right.point.clone()));
                    stack.push((src_right, &mut **dst_right));
                }
            }
        }

        copy
    }
}

/// Two subtrees are equal when they hold equal points in the same shape.
impl<A: PartialEq> PartialEq for Node<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.point != b.point {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

/// Shows the node's point and only the points of its immediate children.
impl<A: fmt::Debug> fmt::Debug for Node<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("point", &self.point)
            .field("left", &self.left().map(Node::point))
            .field("right", &self.right().map(Node::point))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::node::{dismantle, Node};
    use crate::point::Point;

    #[test]
    fn a_new_leaf_has_no_children() {
        let node = Node::leaf(Point::from([1, 2]));

        assert!(node.is_leaf());
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert_eq!(node.point(), &Point::from([1, 2]));
    }

    #[test]
    fn iterates_its_subtree_in_pre_order() {
        let mut root = Node::leaf(Point::from([10]));
        let mut left = Node::leaf(Point::from([5]));
        left.right = Some(Node::leaf(Point::from([7])));
        root.left = Some(left);
        root.right = Some(Node::leaf(Point::from([12])));

        let visited: Vec<i32> = root.iter().map(|p| p[0]).collect();
        assert_eq!(visited, vec![10, 5, 7, 12]);
        assert!(!root.is_leaf());
    }

    #[test]
    fn dismantles_a_deep_chain_without_recursing() {
        let mut root = Node::leaf(Point::from([0u32]));
        for i in 1..200_000u32 {
            let mut parent = Node::leaf(Point::from([i]));
            parent.right = Some(root);
            root = parent;
        }

        dismantle(Some(root));
    }

    fn chain(len: u32) -> Box<Node<u32>> {
        chain_above(0, len)
    }

    /// `len` nodes, each the right child of the next, ending in `bottom`.
    fn chain_above(bottom: u32, len: u32) -> Box<Node<u32>> {
        let mut root = Node::leaf(Point::from([bottom]));
        for i in 1..len {
            let mut parent = Node::leaf(Point::from([i]));
            parent.right = Some(root);
            root = parent;
        }
        root
    }

    #[test]
    fn drops_a_deep_chain_held_outside_a_tree() {
        drop(chain(200_000));
    }

    #[test]
    fn clones_a_deep_chain() {
        let root = chain(200_000);

        let copy = root.clone();

        assert_eq!(copy.iter().count(), 200_000);
        assert!(copy == root);
    }

    #[test]
    fn clone_keeps_the_shape_of_the_subtree() {
        let mut root = Node::leaf(Point::from([10]));
        let mut left = Node::leaf(Point::from([5]));
        left.right = Some(Node::leaf(Point::from([7])));
        root.left = Some(left);
        root.right = Some(Node::leaf(Point::from([12])));

        let copy = root.clone();

        assert_eq!(copy, root);
        assert!(copy.left().unwrap().left().is_none());
        assert_eq!(copy.left().unwrap().right().unwrap().point(), &Point::from([7]));
        assert_eq!(copy.right().unwrap().point(), &Point::from([12]));
    }

    #[test]
    fn equality_compares_shape_as_well_as_points() {
        let mut on_the_left = Node::leaf(Point::from([5]));
        on_the_left.left = Some(Node::leaf(Point::from([3])));
        let mut on_the_right = Node::leaf(Point::from([5]));
        on_the_right.right = Some(Node::leaf(Point::from([3])));

        assert_ne!(on_the_left, on_the_right);
    }

    #[test]
    fn deep_chains_that_differ_at_the_bottom_are_unequal() {
        let a = chain_above(0, 100_000);
        let b = chain_above(u32::MAX, 100_000);

        assert_ne!(a, b);
    }

    #[test]
    fn debug_shows_only_the_immediate_children() {
        let root = chain(3);

        assert_eq!(
            format!("{root:?}"),
            "Node { point: Point { coords: [2] }, left: None, right: Some(Point { coords: [1] }) }"
        );
    }
}
