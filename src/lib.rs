//! # conslist
//!
//! An immutable, structurally-shared cons list together with a set of
//! stack-safe list algorithms.
//!
//! ## Overview
//!
//! The crate provides [`ConsList`], a persistent singly-linked list in the
//! Lisp/ML tradition:
//!
//! - **Immutable**: every operation returns a new list; the receiver is
//!   never modified, so old versions stay valid.
//! - **Structurally shared**: prepending is O(1) and lists may share tail
//!   suffixes, because nothing is ever mutated through a shared node.
//! - **Stack safe**: every algorithm is an explicit loop carrying an
//!   accumulator, never per-element recursion, so lists with hundreds of
//!   thousands of elements traverse, transform, and drop without
//!   overflowing the call stack.
//!
//! On top of the core representation the crate ships the classic list
//! algorithms: [`reverse`], [`append`], [`map`], [`flat_map`], [`filter`],
//! [`remove_at`], [`run_length_encode`], [`duplicate_each`], [`rotate`],
//! and with-replacement random [`sample`].
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes with [`Arc`] instead of [`Rc`], making lists
//!   `Send`/`Sync` for concurrent readers.
//!
//! ## Example
//!
//! ```rust
//! use conslist::ConsList;
//!
//! let list: ConsList<i32> = (1..=5).collect();
//! assert_eq!(list.to_string(), "[1, 2, 3, 4, 5]");
//!
//! let rotated = list.rotate(2);
//! assert_eq!(rotated.to_string(), "[3, 4, 5, 1, 2]");
//!
//! // The original is untouched.
//! assert_eq!(list.len(), 5);
//! ```
//!
//! [`reverse`]: ConsList::reverse
//! [`append`]: ConsList::append
//! [`map`]: ConsList::map
//! [`flat_map`]: ConsList::flat_map
//! [`filter`]: ConsList::filter
//! [`remove_at`]: ConsList::remove_at
//! [`run_length_encode`]: ConsList::run_length_encode
//! [`duplicate_each`]: ConsList::duplicate_each
//! [`rotate`]: ConsList::rotate
//! [`sample`]: ConsList::sample
//! [`Rc`]: std::rc::Rc
//! [`Arc`]: std::sync::Arc

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod algorithms;
mod error;
mod list;

pub use error::ListError;
pub use list::ConsList;
pub use list::ConsListIntoIterator;
pub use list::ConsListIterator;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use conslist::prelude::*;
///
/// let list: ConsList<i32> = (1..=3).collect();
/// assert_eq!(list.len(), 3);
/// ```
pub mod prelude {
    pub use crate::error::ListError;
    pub use crate::list::ConsList;
}
