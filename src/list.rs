//! The cons-list representation and its basic traversal operations.
//!
//! # Overview
//!
//! [`ConsList`] is an immutable singly-linked list with two structural
//! cases: the empty list, and a cons cell pairing one element with the
//! rest of the list. Internally the two cases are the two variants of
//! `Option<ReferenceCounter<Node<T>>>`, which keeps the variant set
//! closed and makes the list covariant in its element type.
//!
//! - O(1) prepend ([`cons`](ConsList::cons))
//! - O(1) head and tail access
//! - O(n) positional lookup
//! - O(n) reverse and append
//!
//! Every operation returns a new list without modifying the original.
//! Because nodes are never mutated after construction, a tail suffix may
//! be shared by any number of lists:
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3]
//! ```
//!
//! # Examples
//!
//! ```rust
//! use conslist::ConsList;
//!
//! let list = ConsList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Ok(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! // Build from an iterator
//! let list: ConsList<i32> = (1..=5).collect();
//! assert_eq!(list.iter().sum::<i32>(), 15);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::error::ListError;

/// Reference-counted smart pointer used for node sharing.
///
/// `std::sync::Arc` under the `arc` feature (thread-safe lists),
/// `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// A single cons cell: one element plus the rest of the list.
///
/// `next: None` terminates the list. Cells are immutable once built,
/// which is what makes sharing them between lists sound.
struct Node<T> {
    /// The element stored in this cell.
    element: T,
    /// The remainder of the list, if any.
    next: Option<ReferenceCounter<Self>>,
}

/// An immutable singly-linked cons list with structural sharing.
///
/// The handle caches the length, so `len` is O(1). Cloning the handle is
/// O(1) as well: it bumps the reference count of the first node.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
/// | `at`      | O(n)       |
/// | `append`  | O(n)       |
/// | `reverse` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use conslist::ConsList;
///
/// let list = ConsList::singleton(42);
/// assert_eq!(list.head(), Ok(&42));
/// ```
pub struct ConsList<T> {
    /// The first cell, or `None` for the empty list.
    head: Option<ReferenceCounter<Node<T>>>,
    /// Cached element count.
    length: usize,
}

impl<T> ConsList<T> {
    /// Creates the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list: ConsList<i32> = ConsList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::singleton(42);
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Prepends an element, returning a new list.
    ///
    /// The new list's tail is the receiver, shared rather than copied;
    /// the receiver itself is unchanged.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Ok(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::{ConsList, ListError};
    ///
    /// let list = ConsList::new().cons(2).cons(1);
    /// assert_eq!(list.head(), Ok(&1));
    ///
    /// let empty: ConsList<i32> = ConsList::new();
    /// assert_eq!(empty.head(), Err(ListError::EmptyList));
    /// ```
    #[inline]
    pub fn head(&self) -> Result<&T, ListError> {
        self.head
            .as_ref()
            .map(|node| &node.element)
            .ok_or(ListError::EmptyList)
    }

    /// Returns the list without its first element.
    ///
    /// The returned list shares every remaining cell with the receiver.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptyList`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let tail = list.tail()?;
    /// assert_eq!(tail.head(), Ok(&2));
    /// assert_eq!(tail.len(), 2);
    /// # Ok::<(), conslist::ListError>(())
    /// ```
    #[inline]
    pub fn tail(&self) -> Result<Self, ListError> {
        self.head
            .as_ref()
            .map(|node| Self {
                head: node.next.clone(),
                length: self.length - 1,
            })
            .ok_or(ListError::EmptyList)
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty. This is the non-failing
    /// sibling of [`head`](Self::head)/[`tail`](Self::tail), convenient
    /// for traversal loops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(2).cons(1);
    /// if let Some((head, tail)) = list.uncons() {
    ///     assert_eq!(*head, 1);
    ///     assert_eq!(tail.head(), Ok(&2));
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Returns a reference to the element at the given zero-based index.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= self.len()`.
    ///
    /// # Complexity
    ///
    /// O(min(n, index + 1))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::{ConsList, ListError};
    ///
    /// let list: ConsList<i32> = (1..=3).collect();
    /// assert_eq!(list.at(2), Ok(&3));
    /// assert_eq!(
    ///     list.at(3),
    ///     Err(ListError::IndexOutOfBounds { index: 3, length: 3 }),
    /// );
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, ListError> {
        let mut current = &self.head;
        let mut remaining = index;

        while let Some(node) = current {
            if remaining == 0 {
                return Ok(&node.element);
            }
            remaining -= 1;
            current = &node.next;
        }
        Err(ListError::IndexOutOfBounds {
            index,
            length: self.length,
        })
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached in the handle
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let empty: ConsList<i32> = ConsList::new();
    /// assert!(empty.is_empty());
    /// assert!(!empty.cons(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> ConsListIterator<'_, T> {
        ConsListIterator {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// Builds a list from a `Vec`, preserving the `Vec`'s order.
    ///
    /// Consumes the buffer back to front with `Vec::pop`, so each element
    /// is prepended in O(1) and no extra reversal pass is needed.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }
}

impl<T: Clone> ConsList<T> {
    /// Returns a new list with the elements in reverse order.
    ///
    /// Iteratively conses each traversed element onto an accumulator, so
    /// arbitrarily long lists reverse without deep recursion. Reversing
    /// the empty list yields the empty list.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=3).collect();
    /// let reversed = list.reverse();
    /// let collected: Vec<&i32> = reversed.iter().collect();
    /// assert_eq!(collected, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for element in self {
            result = result.cons(element.clone());
        }
        result
    }

    /// Concatenates `other` onto the end of this list.
    ///
    /// Neither input is modified. The receiver's elements are walked once
    /// and prepended in reverse order onto `other`, so the entirety of
    /// `other` is shared with the result rather than copied.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let front: ConsList<i32> = (1..=2).collect();
    /// let back: ConsList<i32> = (3..=4).collect();
    /// let combined = front.append(&back);
    ///
    /// let collected: Vec<&i32> = combined.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3, &4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        // Buffer the receiver once instead of reversing it, halving the
        // number of freshly allocated cells.
        let mut elements: Vec<T> = self.iter().cloned().collect();

        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }

    /// Creates a list from a slice, preserving the slice's order.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `slice.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::from_slice(&[1, 2, 3]);
    /// assert_eq!(list.head(), Ok(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let length = slice.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(ReferenceCounter::new(Node {
                element: element.clone(),
                next: head,
            }));
        }

        Self { head, length }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`ConsList`].
pub struct ConsListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for ConsListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ConsListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over elements of a [`ConsList`].
///
/// Elements shared with another list are cloned out; exclusively owned
/// elements could in principle be moved, but cloning keeps the iterator
/// simple and the lists it came from valid.
pub struct ConsListIntoIterator<T> {
    list: ConsList<T>,
}

impl<T: Clone> Iterator for ConsListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, rest) = match self.list.uncons() {
            Some((head, tail)) => (head.clone(), tail),
            None => return None,
        };
        self.list = rest;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ConsListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ConsList<T> {
    /// O(1): bumps the reference count of the first cell.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for ConsList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Unlinks exclusively owned cells iteratively.
///
/// The default recursive drop of a reference-counted chain overflows the
/// stack on very long lists; walking the spine in a loop keeps drop depth
/// constant. Cells still shared with another list stop the walk, since
/// that list remains responsible for them.
impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut inner) => current = inner.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: Clone> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::build_from_vec(elements)
    }
}

impl<T: Clone> IntoIterator for ConsList<T> {
    type Item = T;
    type IntoIter = ConsListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ConsListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = ConsListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for ConsList<T> {}

/// Hashes the length first, then each element in order, so equal lists
/// hash equally and lists of different lengths rarely collide.
impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[e1, e2, e3]`, with `[]` for the empty list.
impl<T: fmt::Display> fmt::Display for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
