//! Error types for list operations.
//!
//! All errors are local precondition violations detected at the point of
//! the offending operation. No operation mutates its receiver, so a
//! failure never leaves partial state behind.

use thiserror::Error;

/// Errors raised by [`ConsList`](crate::ConsList) operations.
///
/// Only element-level access fails: [`head`](crate::ConsList::head),
/// [`tail`](crate::ConsList::tail), [`at`](crate::ConsList::at), and
/// [`sample`](crate::ConsList::sample) with a positive count. Whole-list
/// algorithms such as `reverse` or `rotate` are total and map the empty
/// list to the empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// `head` or `tail` was called on the empty list.
    #[error("cannot access head or tail of the empty list")]
    EmptyList,

    /// A positional lookup did not resolve to any element.
    #[error("index {index} is out of bounds for a list of length {length}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the list at the time of the lookup.
        length: usize,
    },

    /// A positive number of random draws was requested from the empty list.
    #[error("cannot sample {requested} element(s) from the empty list")]
    EmptySample {
        /// The requested number of draws.
        requested: usize,
    },
}
