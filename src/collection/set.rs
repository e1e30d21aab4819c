//! Value-unique, densely indexed specialization of [`Collection`].
//!
//! This module provides [`Set`], which composes the core ordered
//! container with a normalization pass: after every operation that
//! could introduce a duplicate value or a sparse key space, values are
//! deduplicated (first occurrence wins) and keys are reassigned to a
//! dense zero-based sequence.
//!
//! Keys are a storage artifact, not part of the `Set`'s meaning:
//! callers must not rely on a key surviving any mutation.
//!
//! # Examples
//!
//! ```rust
//! use primus::collection::Set;
//!
//! let set = Set::from_values(vec!["x", "y", "x", "z"]);
//! assert_eq!(set.to_vec(), vec!["x", "y", "z"]);
//! assert_eq!(set.keys(), vec![0, 1, 2]);
//!
//! // Adding a present value is a no-op
//! let same = set.add("y");
//! assert_eq!(same.len(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use super::ordered::{Collection, CollectionIntoIterator};

/// An ordered set of unique values with dense zero-based keys.
///
/// Built on the same storage and algorithms as [`Collection`], with a
/// normalization pass appended to every mutating operation. All
/// operations are immutable and return new sets.
///
/// # Type Parameters
///
/// * `T` - The value type. Must implement `Clone + PartialEq`;
///   uniqueness is decided by `PartialEq`, the strict comparison.
///
/// # Examples
///
/// ```rust
/// use primus::collection::Set;
///
/// let set = Set::new().add(3).add(1).add(3).add(2);
/// assert_eq!(set.to_vec(), vec![3, 1, 2]);
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: Collection<usize, T>,
}

impl<T> Set<T> {
    /// Creates a new empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Collection::new(),
        }
    }

    /// Returns the number of values in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a new empty set of the same type.
    #[inline]
    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }

    /// Returns the storage keys, always `0..len` in iteration order.
    #[must_use]
    pub fn keys(&self) -> Vec<usize> {
        self.inner.keys().copied().collect()
    }

    /// Returns an iterator over the values in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.values()
    }

    /// Returns an iterator over the values in iteration order.
    ///
    /// Alias of [`iter`](Self::iter), kept for symmetry with
    /// [`Collection::values`].
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.inner.values()
    }
}

impl<T: Clone + PartialEq> Set<T> {
    /// Creates a set from a sequence of values.
    ///
    /// Values receive sequential integer keys; duplicates are dropped,
    /// keeping the first occurrence and its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Set;
    ///
    /// let set = Set::from_values(vec![1, 2, 1, 3]);
    /// assert_eq!(set.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::normalized(values)
    }

    /// Rebuilds a set from raw values: deduplicate under `PartialEq`
    /// keeping first occurrences, then reindex densely from zero.
    fn normalized<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut unique: Vec<T> = Vec::new();
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }

        Self {
            inner: unique.into_iter().enumerate().collect(),
        }
    }

    /// Returns the value stored at a storage key, or `None`.
    #[must_use]
    pub fn get(&self, key: usize) -> Option<&T> {
        self.inner.get(&key)
    }

    /// Returns `true` if the set holds a value equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    /// Returns the values as an owned vector in iteration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.values().cloned().collect()
    }

    /// Adds a value, returning a new set.
    ///
    /// A value already present is not added again (idempotent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Set;
    ///
    /// let set = Set::from_values(vec![1, 2]);
    /// assert_eq!(set.add(2).len(), 2);
    /// assert_eq!(set.add(3).len(), 3);
    /// ```
    #[must_use]
    pub fn add(&self, value: T) -> Self {
        if self.contains(&value) {
            return self.clone();
        }

        Self {
            inner: self.inner.set(self.inner.len(), value),
        }
    }

    /// Stores a value at a storage key, then normalizes.
    ///
    /// Normalization may move or drop the pair, so the key passed in is
    /// not guaranteed to address the value afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Set;
    ///
    /// let set = Set::from_values(vec!["a", "b", "c"]);
    ///
    /// // Overwriting "b" with a duplicate of "a" collapses the two
    /// let collapsed = set.set(1, "a");
    /// assert_eq!(collapsed.to_vec(), vec!["a", "c"]);
    /// assert_eq!(collapsed.keys(), vec![0, 1]);
    /// ```
    #[must_use]
    pub fn set(&self, key: usize, value: T) -> Self {
        Self::normalized(self.inner.set(key, value).into_iter().map(|(_, value)| value))
    }

    /// Removes the value equal to `value`, returning the new set and
    /// whether it was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Set;
    ///
    /// let set = Set::from_values(vec![1, 2, 3]);
    /// let (removed, found) = set.remove(&2);
    ///
    /// assert!(found);
    /// assert_eq!(removed.to_vec(), vec![1, 3]);
    /// assert_eq!(removed.keys(), vec![0, 1]); // Keys re-compacted
    /// ```
    #[must_use]
    pub fn remove(&self, value: &T) -> (Self, bool) {
        let (inner, found) = self.inner.remove_element(value);
        let normalized = Self::normalized(inner.into_iter().map(|(_, value)| value));
        (normalized, found)
    }

    /// Keeps the values satisfying `predicate`, then re-compacts keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Set;
    ///
    /// let set = Set::from_values(vec![1, 2, 3, 4]);
    /// let even = set.filter(|value| value % 2 == 0);
    ///
    /// assert_eq!(even.to_vec(), vec![2, 4]);
    /// assert_eq!(even.keys(), vec![0, 1]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        Self::normalized(
            self.inner
                .filter(predicate)
                .into_iter()
                .map(|(_, value)| value),
        )
    }

    /// Applies `mapper` to every value, then deduplicates and
    /// re-compacts.
    ///
    /// Mapping can collapse distinct values into equal ones; the result
    /// keeps the first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Set;
    ///
    /// let set = Set::from_values(vec![1, 2, 3]);
    /// let parities = set.map(|value| value % 2);
    ///
    /// assert_eq!(parities.to_vec(), vec![1, 0]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mapper: F) -> Set<U>
    where
        U: Clone + PartialEq,
        F: Fn(&T) -> U,
    {
        Set::normalized(self.inner.values().map(mapper))
    }

    /// Reorders the values with a stable sort, then re-compacts keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Set;
    ///
    /// let set = Set::from_values(vec![3, 1, 2]);
    /// let sorted = set.sort_by(|left, right| left.cmp(right));
    ///
    /// assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(sorted.keys(), vec![0, 1, 2]);
    /// ```
    #[must_use]
    pub fn sort_by<F>(&self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Self::normalized(
            self.inner
                .sort_by(comparator)
                .into_iter()
                .map(|(_, value)| value),
        )
    }

    /// Reverses the iteration order, then re-compacts keys.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self::normalized(self.inner.reverse().into_iter().map(|(_, value)| value))
    }

    /// Appends `other`'s values after this set's, dropping duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Set;
    ///
    /// let left = Set::from_values(vec![1, 2]);
    /// let right = Set::from_values(vec![2, 3]);
    ///
    /// assert_eq!(left.merge(&right).to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self::normalized(
            self.inner
                .values()
                .chain(other.inner.values())
                .cloned(),
        )
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over the values of a [`Set`].
pub struct SetIntoIterator<T> {
    entries: CollectionIntoIterator<usize, T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_values(iterable)
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            entries: self.inner.into_iter(),
        }
    }
}

impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.inner.values()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
