//! Depth-first iteration over the points stored in a tree.
use crate::kdtree::KdTree;
use crate::node::Node;
use crate::point::Point;
use crate::types::Axis;

/// Pre-order, depth-first iterator over the points of a tree or subtree.
///
/// Uses an explicit stack, so it is safe to use on degenerate trees.
#[derive(Debug, Clone)]
pub struct TreeIter<'a, A> {
    stack: Vec<&'a Node<A>>,
}

impl<'a, A> TreeIter<'a, A> {
    pub(crate) fn new(root: Option<&'a Node<A>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, A> Iterator for TreeIter<'a, A> {
    type Item = &'a Point<A>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.point())
    }
}

impl<'a, A: Axis> IntoIterator for &'a KdTree<A> {
    type Item = &'a Point<A>;
    type IntoIter = TreeIter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
