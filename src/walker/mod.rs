//! Post-order, depth-first traversal of [TreeNode] trees.
//!
//! Both subtrees of a node are visited completely (left before right) before
//! the node itself is handed to the handler. The first error returned by the
//! handler stops the walk; nodes processed up to that point stay processed.

pub mod iterator;

pub use iterator::{PostOrderIterator, DEFAULT_CAPACITY};

use crate::{NodeHandler, NodeHandlerMut, TreeNode, WalkError};
use tracing::{debug, trace, warn};
use tracing_attributes::instrument;

/// Stateless walker. The only setting is the initial size of the pending-node
/// stack, which is a performance hint and does not change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeWalker {
    capacity: usize,
}

impl TreeWalker {
    pub fn new() -> Self {
        TreeWalker {
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Constructor that pre-allocates room for `capacity` pending nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        TreeWalker { capacity }
    }

    /// Walks the tree below `root` in post-order and calls `handler` on every node.
    ///
    /// Fails with [WalkError::RootNotSet] if `root` is `None` (the handler is not
    /// called) and with [WalkError::Handler] if the handler fails.
    #[instrument(level = "debug", skip_all)]
    pub fn walk_depth_first<H>(&self, root: Option<&TreeNode>, handler: &mut H) -> Result<(), WalkError<H::Error>>
    where
        H: NodeHandler + ?Sized,
    {
        let root = root.ok_or(WalkError::RootNotSet)?;

        let mut visited = 0usize;
        for node in PostOrderIterator::with_capacity(root, self.capacity) {
            trace!(value = node.value(), "Processing node");
            handler.process(node).map_err(|err| {
                warn!(value = node.value(), visited, "Handler aborted the walk");
                WalkError::Handler(err)
            })?;
            visited += 1;
        }
        debug!(visited, "Walk finished");
        Ok(())
    }

    /// Same as [TreeWalker::walk_depth_first] but the handler may modify the nodes.
    ///
    /// Children are visited before their parent, so a handler may rely on
    /// changes it made to the children when it processes the parent. Unlike the
    /// read-only walk, this one recurses and uses call stack proportional to the
    /// tree height.
    #[instrument(level = "debug", skip_all)]
    pub fn walk_depth_first_mut<H>(
        &self,
        root: Option<&mut TreeNode>,
        handler: &mut H,
    ) -> Result<(), WalkError<H::Error>>
    where
        H: NodeHandlerMut + ?Sized,
    {
        let root = root.ok_or(WalkError::RootNotSet)?;

        let mut visited = 0usize;
        walk_mut(root, handler, &mut visited).map_err(|err| {
            warn!(visited, "Handler aborted the walk");
            WalkError::Handler(err)
        })?;
        debug!(visited, "Walk finished");
        Ok(())
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

fn walk_mut<H>(node: &mut TreeNode, handler: &mut H, visited: &mut usize) -> Result<(), H::Error>
where
    H: NodeHandlerMut + ?Sized,
{
    if let Some(left) = node.left_mut() {
        walk_mut(left, handler, visited)?;
    }
    if let Some(right) = node.right_mut() {
        walk_mut(right, handler, visited)?;
    }
    trace!(value = node.value(), "Processing node");
    handler.process_mut(node)?;
    *visited += 1;
    Ok(())
}
