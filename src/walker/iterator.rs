//! An iterator that traverses a tree depth-first in post-order.

use crate::TreeNode;

/// Pending-node slots reserved up front unless a capacity is given.
pub const DEFAULT_CAPACITY: usize = 32;

/// Iterator for a post-order, depth-first iteration (left subtree, right subtree, node).
///
/// Pending nodes are kept on a heap allocated stack, so deep trees do not
/// grow the call stack. The flag marks nodes whose children were already pushed.
pub struct PostOrderIterator<'a> {
    stack: Vec<(&'a TreeNode, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    pub fn new(root: &'a TreeNode) -> Self {
        Self::with_capacity(root, DEFAULT_CAPACITY)
    }

    /// Pre-allocates room for `capacity` pending nodes, roughly twice the expected tree height.
    pub fn with_capacity(root: &'a TreeNode, capacity: usize) -> Self {
        let mut stack = Vec::with_capacity(capacity.max(1));
        stack.push((root, false));
        PostOrderIterator { stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            // Right goes first so that left is popped first
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

impl TreeNode {
    /// Iterates over this node and all of its descendants in post-order.
    pub fn iter_post_order(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use test_log;

    #[test_log::test]
    fn test_single_node() {
        let root = TreeNode::new(7);
        assert_eq!(root.iter_post_order().map(|n| n.value()).collect_vec(), &[7]);
    }

    #[test_log::test]
    fn test_post_order() {
        // Layout of the tree
        //       1
        //      / \
        //     2   3
        //    / \   \
        //   4   5   6
        //      /
        //     7
        let root = TreeNode::with_children(
            1,
            Some(TreeNode::with_children(
                2,
                Some(TreeNode::new(4)),
                Some(TreeNode::with_children(5, Some(TreeNode::new(7)), None)),
            )),
            Some(TreeNode::with_children(3, None, Some(TreeNode::new(6)))),
        );

        let result = root.iter_post_order().map(|n| n.value()).collect_vec();
        assert_eq!(result, &[4, 7, 5, 2, 6, 3, 1]);

        // Subtrees can be iterated on their own
        let result = root.left().unwrap().iter_post_order().map(|n| n.value()).collect_vec();
        assert_eq!(result, &[4, 7, 5, 2]);
    }

    #[test_log::test]
    fn test_yields_the_tree_nodes() {
        let root = TreeNode::with_children(1, Some(TreeNode::new(2)), None);
        let first = root.iter_post_order().next().unwrap();
        assert!(std::ptr::eq(first, root.left().unwrap()));
    }
}
