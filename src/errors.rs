//! Provides the error type returned by the tree walker.

use thiserror::Error;

/// Errors raised while walking a tree.
///
/// `E` is the error type of the handler. Whatever the handler returns is
/// carried in [WalkError::Handler] as is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WalkError<E> {
    #[error("No root node given")]
    RootNotSet,
    #[error("Handler aborted the walk: {0}")]
    Handler(E),
}

impl<E> WalkError<E> {
    /// The handler's error, if the walk was aborted by the handler.
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            WalkError::Handler(err) => Some(err),
            WalkError::RootNotSet => None,
        }
    }
}
