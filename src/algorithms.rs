//! List algorithms layered over the core representation.
//!
//! Everything in this module is written against the public contract of
//! [`ConsList`] — `cons`, `head`, `tail`, `is_empty`, iteration — and
//! follows one discipline throughout: walk the input with an explicit
//! loop, cons results onto a reversed accumulator, and reverse once at
//! the end. No algorithm recurses per element, so all of them are safe
//! on lists far deeper than the call stack.
//!
//! # Examples
//!
//! ```rust
//! use conslist::ConsList;
//!
//! let list: ConsList<i32> = (1..=5).collect();
//!
//! let doubled = list.map(|x| x * 2);
//! assert_eq!(doubled.to_string(), "[2, 4, 6, 8, 10]");
//!
//! let evens = list.filter(|x| x % 2 == 0);
//! assert_eq!(evens.to_string(), "[2, 4]");
//! ```

use rand::Rng;

use crate::error::ListError;
use crate::list::ConsList;

impl<T> ConsList<T> {
    /// Applies a function to every element, preserving order and length.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=3).collect();
    /// let squared = list.map(|x| x * x);
    /// assert_eq!(squared.to_string(), "[1, 4, 9]");
    /// assert_eq!(squared.len(), list.len());
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> ConsList<B>
    where
        B: Clone,
        F: FnMut(&T) -> B,
    {
        let mut reversed = ConsList::new();
        for element in self {
            reversed = reversed.cons(function(element));
        }
        reversed.reverse()
    }

    /// Applies a list-producing function to every element and
    /// concatenates the results in order.
    ///
    /// Each produced sub-list's elements are consed individually onto a
    /// single reversed accumulator. Appending whole sub-lists onto a
    /// growing result would degrade to quadratic time in the output
    /// size; this stays O(n + z) where z is the total output length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=3).collect();
    /// let result = list.flat_map(|x| ConsList::new().cons(x * 10).cons(*x));
    /// assert_eq!(result.to_string(), "[1, 10, 2, 20, 3, 30]");
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, mut function: F) -> ConsList<B>
    where
        B: Clone,
        F: FnMut(&T) -> ConsList<B>,
    {
        let mut reversed = ConsList::new();
        for element in self {
            for produced in &function(element) {
                reversed = reversed.cons(produced.clone());
            }
        }
        reversed.reverse()
    }
}

impl<T: Clone> ConsList<T> {
    /// Retains the elements satisfying the predicate, preserving their
    /// relative order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=6).collect();
    /// let evens = list.filter(|x| x % 2 == 0);
    /// assert_eq!(evens.to_string(), "[2, 4, 6]");
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut reversed = Self::new();
        for element in self {
            if predicate(element) {
                reversed = reversed.cons(element.clone());
            }
        }
        reversed.reverse()
    }

    /// Returns a new list with the element at `index` omitted.
    ///
    /// All other elements keep their relative order, and the suffix past
    /// the removed element is shared with the receiver. An out-of-range
    /// index (including any index on the empty list) is a no-op: the
    /// result equals the receiver.
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::from_slice(&[1, 2, 3, 4, 5, 8, 99]);
    /// assert_eq!(list.remove_at(4).to_string(), "[1, 2, 3, 4, 8, 99]");
    /// assert_eq!(list.remove_at(100), list);
    /// ```
    #[must_use]
    pub fn remove_at(&self, index: usize) -> Self {
        if index >= self.len() {
            return self.clone();
        }

        // Accumulate the visited prefix in reverse, then splice it back
        // onto the suffix past the removed element.
        let mut prefix = Self::new();
        let mut rest = self.clone();
        for _ in 0..index {
            let element = match rest.head() {
                Ok(element) => element.clone(),
                Err(_) => break,
            };
            prefix = prefix.cons(element);
            rest = rest.tail().unwrap_or_default();
        }

        let mut result = rest.tail().unwrap_or_default();
        for element in &prefix {
            result = result.cons(element.clone());
        }
        result
    }

    /// Collapses consecutive equal elements into `(value, count)` pairs.
    ///
    /// Pairs appear in the same order as the runs they encode. Equality
    /// is `PartialEq` on the element type. The empty list encodes to the
    /// empty list.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list = ConsList::from_slice(&[1, 1, 1, 2, 3, 3]);
    /// let encoded: Vec<(i32, usize)> = list.run_length_encode().into_iter().collect();
    /// assert_eq!(encoded, vec![(1, 3), (2, 1), (3, 2)]);
    /// ```
    #[must_use]
    pub fn run_length_encode(&self) -> ConsList<(T, usize)>
    where
        T: PartialEq,
    {
        let mut runs = ConsList::new();
        let mut current_run: Option<(T, usize)> = None;

        for element in self {
            current_run = match current_run {
                Some((value, count)) if value == *element => Some((value, count + 1)),
                Some(completed) => {
                    runs = runs.cons(completed);
                    Some((element.clone(), 1))
                }
                None => Some((element.clone(), 1)),
            };
        }
        if let Some(completed) = current_run {
            runs = runs.cons(completed);
        }
        runs.reverse()
    }

    /// Returns a new list in which each element appears `count`
    /// consecutive times, preserving the original element order.
    ///
    /// `count == 0` yields the empty list.
    ///
    /// # Complexity
    ///
    /// O(n * count)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=3).collect();
    /// assert_eq!(list.duplicate_each(2).to_string(), "[1, 1, 2, 2, 3, 3]");
    /// assert!(list.duplicate_each(0).is_empty());
    /// ```
    #[must_use]
    pub fn duplicate_each(&self, count: usize) -> Self {
        let mut reversed = Self::new();
        for element in self {
            for _ in 0..count {
                reversed = reversed.cons(element.clone());
            }
        }
        reversed.reverse()
    }

    /// Left-rotates the list by `count` positions: the first
    /// `count % len` elements move to the back.
    ///
    /// Rotation wraps around, so any multiple of the length (and any
    /// rotation of the empty list) returns the list unchanged by value.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=5).collect();
    /// assert_eq!(list.rotate(2).to_string(), "[3, 4, 5, 1, 2]");
    /// assert_eq!(list.rotate(7), list.rotate(2));
    /// assert_eq!(list.rotate(0), list);
    /// ```
    #[must_use]
    pub fn rotate(&self, count: usize) -> Self {
        if self.is_empty() {
            return Self::new();
        }
        let shift = count % self.len();
        if shift == 0 {
            return self.clone();
        }

        let mut prefix = Self::new();
        let mut rest = self.clone();
        for _ in 0..shift {
            let element = match rest.head() {
                Ok(element) => element.clone(),
                Err(_) => break,
            };
            prefix = prefix.cons(element);
            rest = rest.tail().unwrap_or_default();
        }
        rest.append(&prefix.reverse())
    }

    /// Draws `count` elements independently and uniformly at random,
    /// with replacement.
    ///
    /// The same source element may be chosen more than once, and `count`
    /// may exceed the receiver's length. The generator is supplied by
    /// the caller, so a seeded generator makes the draw reproducible.
    ///
    /// The elements are materialized into an indexable buffer once, so
    /// the whole draw costs O(n + count) rather than O(n * count)
    /// positional walks.
    ///
    /// # Errors
    ///
    /// [`ListError::EmptySample`] if `count > 0` and the list is empty.
    /// `count == 0` succeeds with the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::ConsList;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let list: ConsList<i32> = (1..=5).collect();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let drawn = list.sample(8, &mut rng)?;
    /// assert_eq!(drawn.len(), 8);
    /// assert!(drawn.iter().all(|x| (1..=5).contains(x)));
    /// # Ok::<(), conslist::ListError>(())
    /// ```
    pub fn sample<R>(&self, count: usize, rng: &mut R) -> Result<Self, ListError>
    where
        R: Rng + ?Sized,
    {
        if count == 0 {
            return Ok(Self::new());
        }
        if self.is_empty() {
            return Err(ListError::EmptySample { requested: count });
        }

        let elements: Vec<&T> = self.iter().collect();
        let mut reversed = Self::new();
        for _ in 0..count {
            let index = rng.random_range(0..elements.len());
            reversed = reversed.cons(elements[index].clone());
        }
        Ok(reversed.reverse())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use crate::error::ListError;
    use crate::list::ConsList;

    #[rstest]
    fn test_map_preserves_order_and_length() {
        let list: ConsList<i32> = (1..=3).collect();
        let doubled = list.map(|x| x * 2);
        let collected: Vec<i32> = doubled.into_iter().collect();
        assert_eq!(collected, vec![2, 4, 6]);
    }

    #[rstest]
    fn test_map_changes_element_type() {
        let list: ConsList<i32> = (1..=3).collect();
        let rendered = list.map(|x| x.to_string());
        assert_eq!(format!("{rendered}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_map_empty() {
        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.map(|x| x * 2).is_empty());
    }

    #[rstest]
    fn test_flat_map_concatenates_in_order() {
        let list: ConsList<i32> = (1..=3).collect();
        let result = list.flat_map(|x| ConsList::new().cons(x * 10).cons(*x));
        let collected: Vec<i32> = result.into_iter().collect();
        assert_eq!(collected, vec![1, 10, 2, 20, 3, 30]);
    }

    #[rstest]
    fn test_flat_map_with_empty_sublists() {
        let list: ConsList<i32> = (1..=4).collect();
        let result = list.flat_map(|x| {
            if x % 2 == 0 {
                ConsList::singleton(*x)
            } else {
                ConsList::new()
            }
        });
        let collected: Vec<i32> = result.into_iter().collect();
        assert_eq!(collected, vec![2, 4]);
    }

    #[rstest]
    fn test_filter_keeps_matching_elements() {
        let list: ConsList<i32> = (1..=6).collect();
        let evens = list.filter(|x| x % 2 == 0);
        let collected: Vec<i32> = evens.into_iter().collect();
        assert_eq!(collected, vec![2, 4, 6]);
    }

    #[rstest]
    fn test_filter_none_and_all() {
        let list: ConsList<i32> = (1..=3).collect();
        assert!(list.filter(|_| false).is_empty());
        assert_eq!(list.filter(|_| true), list);
    }

    #[rstest]
    fn test_remove_at_middle() {
        let list = ConsList::from_slice(&[1, 2, 3, 4, 5, 8, 99]);
        let removed = list.remove_at(4);
        let collected: Vec<i32> = removed.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 8, 99]);
    }

    #[rstest]
    fn test_remove_at_head_and_last() {
        let list: ConsList<i32> = (1..=4).collect();
        assert_eq!(format!("{}", list.remove_at(0)), "[2, 3, 4]");
        assert_eq!(format!("{}", list.remove_at(3)), "[1, 2, 3]");
    }

    #[rstest]
    fn test_remove_at_out_of_range_is_noop() {
        let list: ConsList<i32> = (1..=3).collect();
        assert_eq!(list.remove_at(3), list);
        assert_eq!(list.remove_at(100), list);
    }

    #[rstest]
    fn test_remove_at_on_empty_is_noop() {
        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.remove_at(0).is_empty());
    }

    #[rstest]
    fn test_remove_at_shares_suffix() {
        let list: ConsList<i32> = (1..=5).collect();
        let removed = list.remove_at(1);
        assert_eq!(format!("{removed}"), "[1, 3, 4, 5]");
        // Original untouched.
        assert_eq!(list.len(), 5);
    }

    #[rstest]
    fn test_run_length_encode() {
        let list = ConsList::from_slice(&[1, 1, 1, 2, 3, 3, 4, 5, 5, 5]);
        let encoded = list.run_length_encode();
        let collected: Vec<(i32, usize)> = encoded.into_iter().collect();
        assert_eq!(collected, vec![(1, 3), (2, 1), (3, 2), (4, 1), (5, 3)]);
    }

    #[rstest]
    fn test_run_length_encode_no_adjacent_duplicates() {
        let list: ConsList<i32> = (1..=3).collect();
        let collected: Vec<(i32, usize)> = list.run_length_encode().into_iter().collect();
        assert_eq!(collected, vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[rstest]
    fn test_run_length_encode_single_run() {
        let list = ConsList::from_slice(&['a', 'a', 'a']);
        let collected: Vec<(char, usize)> = list.run_length_encode().into_iter().collect();
        assert_eq!(collected, vec![('a', 3)]);
    }

    #[rstest]
    fn test_run_length_encode_empty_is_empty() {
        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.run_length_encode().is_empty());
    }

    #[rstest]
    fn test_duplicate_each() {
        let list: ConsList<i32> = (1..=5).collect();
        let tripled = list.duplicate_each(3);
        let collected: Vec<i32> = tripled.into_iter().collect();
        assert_eq!(collected, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5]);
    }

    #[rstest]
    fn test_duplicate_each_once_is_identity() {
        let list: ConsList<i32> = (1..=3).collect();
        assert_eq!(list.duplicate_each(1), list);
    }

    #[rstest]
    fn test_duplicate_each_zero_is_empty() {
        let list: ConsList<i32> = (1..=3).collect();
        assert!(list.duplicate_each(0).is_empty());
    }

    #[rstest]
    fn test_rotate() {
        let list: ConsList<i32> = (1..=10).collect();
        let rotated = list.rotate(3);
        let collected: Vec<i32> = rotated.into_iter().collect();
        assert_eq!(collected, vec![4, 5, 6, 7, 8, 9, 10, 1, 2, 3]);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(10)]
    fn test_rotate_by_multiple_of_length_is_identity(#[case] multiple: usize) {
        let list: ConsList<i32> = (1..=5).collect();
        assert_eq!(list.rotate(multiple), list);
    }

    #[rstest]
    fn test_rotate_wraps_around() {
        let list: ConsList<i32> = (1..=5).collect();
        assert_eq!(list.rotate(7), list.rotate(2));
        assert_eq!(list.rotate(12), list.rotate(2));
    }

    #[rstest]
    fn test_rotate_empty_is_empty() {
        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.rotate(3).is_empty());
    }

    #[rstest]
    fn test_sample_returns_requested_count() {
        let list: ConsList<i32> = (1..=5).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let drawn = list.sample(8, &mut rng).unwrap();
        assert_eq!(drawn.len(), 8);
        assert!(drawn.iter().all(|x| (1..=5).contains(x)));
    }

    #[rstest]
    fn test_sample_zero_is_empty() {
        let list: ConsList<i32> = (1..=5).collect();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(list.sample(0, &mut rng).unwrap().is_empty());
    }

    #[rstest]
    fn test_sample_from_empty_fails() {
        let empty: ConsList<i32> = ConsList::new();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            empty.sample(3, &mut rng),
            Err(ListError::EmptySample { requested: 3 })
        );
        // A zero-size draw from the empty list is still fine.
        assert!(empty.sample(0, &mut rng).unwrap().is_empty());
    }

    #[rstest]
    fn test_sample_is_reproducible_with_seeded_rng() {
        let list: ConsList<i32> = (1..=100).collect();
        let mut first_rng = StdRng::seed_from_u64(7);
        let mut second_rng = StdRng::seed_from_u64(7);
        assert_eq!(
            list.sample(20, &mut first_rng).unwrap(),
            list.sample(20, &mut second_rng).unwrap()
        );
    }

    #[rstest]
    fn test_sample_singleton_source() {
        let list = ConsList::singleton(9);
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = list.sample(4, &mut rng).unwrap();
        let collected: Vec<i32> = drawn.into_iter().collect();
        assert_eq!(collected, vec![9, 9, 9, 9]);
    }
}
