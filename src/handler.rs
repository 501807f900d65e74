/*! The capability invoked on every node visited by a [TreeWalker](crate::TreeWalker).
 *
 * The walker only decides *when* a node is processed. What happens during
 * processing (recording, aggregating, I/O) is up to the implementer. Closures
 * returning a `Result` implement the traits directly.
 */

use crate::TreeNode;

/// Processes one node at a time without modifying the tree.
pub trait NodeHandler {
    /// Returned by [NodeHandler::process] to abort the walk.
    /// Use [std::convert::Infallible] if processing cannot fail.
    type Error;

    fn process(&mut self, node: &TreeNode) -> Result<(), Self::Error>;
}

/// Processes one node at a time with write access to it.
///
/// Used by [TreeWalker::walk_depth_first_mut](crate::TreeWalker::walk_depth_first_mut),
/// which recurses once per tree level. Very deep trees can exhaust the call
/// stack there; [NodeHandler] with the read-only walk has no such limit.
pub trait NodeHandlerMut {
    type Error;

    fn process_mut(&mut self, node: &mut TreeNode) -> Result<(), Self::Error>;
}

impl<F, E> NodeHandler for F
where
    F: FnMut(&TreeNode) -> Result<(), E>,
{
    type Error = E;

    fn process(&mut self, node: &TreeNode) -> Result<(), E> {
        self(node)
    }
}

impl<F, E> NodeHandlerMut for F
where
    F: FnMut(&mut TreeNode) -> Result<(), E>,
{
    type Error = E;

    fn process_mut(&mut self, node: &mut TreeNode) -> Result<(), E> {
        self(node)
    }
}

/// Handler that records the values of the visited nodes in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValueRecorder {
    values: Vec<i64>,
}

impl ValueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<i64> {
        self.values
    }
}

impl NodeHandler for ValueRecorder {
    type Error = std::convert::Infallible;

    fn process(&mut self, node: &TreeNode) -> Result<(), Self::Error> {
        self.values.push(node.value());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log;

    #[test_log::test]
    fn test_closure_is_a_handler() {
        let mut sum = 0;
        let mut handler = |node: &TreeNode| -> Result<(), ()> {
            sum += node.value();
            Ok(())
        };
        handler.process(&TreeNode::new(3)).unwrap();
        handler.process(&TreeNode::new(4)).unwrap();
        assert_eq!(sum, 7);
    }

    #[test_log::test]
    fn test_closure_is_a_mutable_handler() {
        let mut node = TreeNode::new(3);
        let mut double = |node: &mut TreeNode| -> Result<(), ()> {
            node.set_value(node.value() * 2);
            Ok(())
        };
        double.process_mut(&mut node).unwrap();
        assert_eq!(node.value(), 6);
    }

    #[test_log::test]
    fn test_recorder_keeps_order() {
        let mut recorder = ValueRecorder::new();
        for value in [5, 1, 3] {
            recorder.process(&TreeNode::new(value)).unwrap();
        }
        assert_eq!(recorder.values(), &[5, 1, 3]);
        assert_eq!(recorder.into_values(), vec![5, 1, 3]);
    }
}
