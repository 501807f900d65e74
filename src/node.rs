/*! Binary tree node that exclusively owns its children */

use core::fmt;

/// A node holding an integer value and up to two children.
///
/// Children are boxed and owned by their parent. There are no references back
/// to the parent, so a subtree is dropped together with its owner and a cycle
/// cannot be expressed.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` never recurse per level, so they
/// work on trees of any height.
#[derive(Default)]
pub struct TreeNode {
    value: i64,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Constructor. The node has no children.
    pub fn new(value: i64) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    /// Builds a node with both children attached at once.
    pub fn with_children(value: i64, left: Option<TreeNode>, right: Option<TreeNode>) -> Self {
        TreeNode {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut TreeNode> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut TreeNode> {
        self.right.as_deref_mut()
    }

    /// Attaches `node` as the left child (or clears it with `None`) and
    /// returns the subtree that was attached before.
    pub fn set_left(&mut self, node: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
        std::mem::replace(&mut self.left, node)
    }

    /// Same as [TreeNode::set_left] for the right child.
    pub fn set_right(&mut self, node: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
        std::mem::replace(&mut self.right, node)
    }

    /// Detaches the left subtree and hands ownership to the caller.
    pub fn take_left(&mut self) -> Option<Box<TreeNode>> {
        self.left.take()
    }

    pub fn take_right(&mut self) -> Option<Box<TreeNode>> {
        self.right.take()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// The default drop glue recurses once per level, which overflows the stack
// on very deep trees. Detached subtrees are dropped from a heap stack instead.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Clone for TreeNode {
    fn clone(&self) -> Self {
        let mut root = TreeNode::new(self.value);
        let mut pending: Vec<(&TreeNode, &mut TreeNode)> = vec![(self, &mut root)];
        while let Some((source, target)) = pending.pop() {
            let TreeNode { left, right, .. } = target;
            if let Some(child) = source.left() {
                pending.push((child, &mut **left.insert(Box::new(TreeNode::new(child.value)))));
            }
            if let Some(child) = source.right() {
                pending.push((child, &mut **right.insert(Box::new(TreeNode::new(child.value)))));
            }
        }
        root
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            for (a, b) in [(a.left(), b.left()), (a.right(), b.right())] {
                match (a, b) {
                    (Some(a), Some(b)) => pending.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for TreeNode {}

/// Shows the node and the values of its direct children only.
impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("value", &self.value)
            .field("left", &self.left().map(TreeNode::value))
            .field("right", &self.right().map(TreeNode::value))
            .finish()
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let child = |node: Option<&TreeNode>| node.map(|n| n.value.to_string()).unwrap_or_else(|| "-".into());
        write!(
            f,
            "value: {}, left: {}, right: {}",
            self.value,
            child(self.left()),
            child(self.right())
        )
    }
}
