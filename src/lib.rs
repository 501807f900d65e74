//! ## About
//!
//! A binary tree of integer nodes that own their children, and a walker that
//! visits them depth-first in post-order (left subtree, right subtree, node).
//! What happens to each node is decided by a caller-supplied handler.
//!
//! ```
//! use treewalk::{TreeNode, TreeWalker, ValueRecorder};
//!
//! let root = TreeNode::with_children(1, Some(TreeNode::new(2)), Some(TreeNode::new(3)));
//! let mut recorder = ValueRecorder::new();
//! TreeWalker::new().walk_depth_first(Some(&root), &mut recorder).unwrap();
//! assert_eq!(recorder.values(), &[2, 3, 1]);
//! ```
//!
//! ## Naming conventions
//! * Traits – capabilities, named after the role the implementer plays
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters, which omit
//!             a `get_` prefix much like the standard library.

pub mod errors;
pub mod handler;
pub mod node;
pub mod walker;

pub use errors::WalkError;
pub use handler::{NodeHandler, NodeHandlerMut, ValueRecorder};
pub use node::TreeNode;
pub use walker::{PostOrderIterator, TreeWalker};
