//! Ordered key-value container preserving insertion order.
//!
//! This module provides [`Collection`], an immutable ordered container
//! that maps unique keys to values and iterates in insertion order.
//!
//! # Overview
//!
//! `Collection` stores its pairs in a flat vector, which keeps the
//! semantics simple and the iteration order explicit:
//!
//! - Insertion order is preserved by every operation except the ones
//!   whose purpose is reordering (`sort_by`, `sort_keys_by`, `reverse`,
//!   `shuffle`, `slice`)
//! - Keys are unique; `set` on an existing key updates the value in
//!   place without moving the pair
//! - Absence is always an `Option`, never an error
//!
//! All operations return new collections without modifying the original.
//! This is a correctness-first structure: lookups are linear scans, and
//! no hashing or tree balancing is involved.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `get`           | O(n)       |
//! | `set`           | O(n)       |
//! | `contains`      | O(n)       |
//! | `remove`        | O(n)       |
//! | `len`           | O(1)       |
//! | `map` / `filter`| O(n)       |
//! | `sort_by`       | O(n log n) |
//! | `merge`         | O(n * m)   |
//!
//! # Examples
//!
//! ```rust
//! use primus::collection::Collection;
//!
//! let collection = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
//! assert_eq!(collection.get(&"b"), Some(&2));
//!
//! // Transformations return new collections, originals are unchanged
//! let filtered = collection.filter(|value| *value > 1);
//! assert_eq!(filtered.to_vec(), vec![("b", 2), ("c", 3)]);
//! assert_eq!(collection.len(), 3);
//! ```

use rand::seq::SliceRandom;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

// =============================================================================
// IndexKey
// =============================================================================

/// Key types that can synthesize sequential append indices.
///
/// [`Collection::add`] appends a value without an explicit key, using the
/// next integer index that is disjoint from every existing key. This trait
/// describes how a key type participates in that scheme: converting an
/// index into a key, and reading an existing key back as an index.
///
/// `String` keys take part through their decimal rendering, so a
/// collection keyed by `"0"`, `"1"` continues counting at `"2"`.
pub trait IndexKey: Sized {
    /// Builds a key from a zero-based append index.
    fn from_index(index: usize) -> Self;

    /// Reads this key back as an append index, if it represents one.
    fn as_index(&self) -> Option<usize>;
}

impl IndexKey for usize {
    fn from_index(index: usize) -> Self {
        index
    }

    fn as_index(&self) -> Option<usize> {
        Some(*self)
    }
}

impl IndexKey for u32 {
    fn from_index(index: usize) -> Self {
        Self::try_from(index).unwrap_or(Self::MAX)
    }

    fn as_index(&self) -> Option<usize> {
        usize::try_from(*self).ok()
    }
}

impl IndexKey for u64 {
    fn from_index(index: usize) -> Self {
        Self::try_from(index).unwrap_or(Self::MAX)
    }

    fn as_index(&self) -> Option<usize> {
        usize::try_from(*self).ok()
    }
}

impl IndexKey for i32 {
    fn from_index(index: usize) -> Self {
        Self::try_from(index).unwrap_or(Self::MAX)
    }

    fn as_index(&self) -> Option<usize> {
        usize::try_from(*self).ok()
    }
}

impl IndexKey for i64 {
    fn from_index(index: usize) -> Self {
        Self::try_from(index).unwrap_or(Self::MAX)
    }

    fn as_index(&self) -> Option<usize> {
        usize::try_from(*self).ok()
    }
}

impl IndexKey for String {
    fn from_index(index: usize) -> Self {
        index.to_string()
    }

    fn as_index(&self) -> Option<usize> {
        self.parse().ok()
    }
}

// =============================================================================
// Collection
// =============================================================================

/// An immutable ordered key-value container.
///
/// Pairs iterate in insertion order unless a reordering operation
/// produced the collection. Keys are unique; values are compared with
/// `PartialEq`, the strict (type and value) comparison.
///
/// Every operation that changes the container returns a new
/// `Collection` and leaves the receiver untouched. A result owns its
/// storage independently of its source.
///
/// # Type Parameters
///
/// * `K` - The key type. Most operations require `Clone + PartialEq`.
/// * `V` - The value type. Most operations require `Clone`; value
///   searches additionally require `PartialEq`.
///
/// # Examples
///
/// ```rust
/// use primus::collection::Collection;
///
/// let collection = Collection::new()
///     .set("one", 1)
///     .set("two", 2);
///
/// assert_eq!(collection.get(&"one"), Some(&1));
/// assert_eq!(collection.keys().collect::<Vec<_>>(), vec![&"one", &"two"]);
/// ```
#[derive(Clone)]
pub struct Collection<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Collection<K, V> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of pairs in the collection.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection contains no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new empty collection of the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1)]);
    /// let cleared = collection.clear();
    ///
    /// assert!(cleared.is_empty());
    /// assert_eq!(collection.len(), 1); // Original unchanged
    /// ```
    #[inline]
    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }

    /// Returns the pairs as a slice in iteration order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Returns an iterator over `(&K, &V)` pairs in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    ///
    /// for (key, value) in collection.iter() {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> CollectionIterator<'_, K, V> {
        CollectionIterator {
            entries: &self.entries,
            position: 0,
        }
    }

    /// Returns an iterator over keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// let sum: i32 = collection.values().sum();
    /// assert_eq!(sum, 3);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Returns an explicit cursor over the collection's iteration order.
    ///
    /// The cursor owns its position; creating one never affects the
    /// collection or any other cursor. See [`Cursor`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// let mut cursor = collection.cursor();
    ///
    /// assert_eq!(cursor.current(), Some(&1));
    /// assert_eq!(cursor.next(), Some(&2));
    /// assert_eq!(cursor.next(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, K, V> {
        Cursor {
            entries: &self.entries,
            position: 0,
        }
    }
}

impl<K: Clone + PartialEq, V: Clone> Collection<K, V> {
    /// Creates a collection from an ordered sequence of pairs.
    ///
    /// A later pair with a key already seen overwrites the earlier
    /// value without moving the pair, so keys stay unique and keep
    /// their first position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(collection.to_vec(), vec![("a", 3), ("b", 2)]);
    /// ```
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries = Vec::new();
        for (key, value) in pairs {
            Self::upsert(&mut entries, key, value);
        }
        Self { entries }
    }

    /// Upserts into an entry vector: update in place when the key
    /// exists, append otherwise.
    fn upsert(entries: &mut Vec<(K, V)>, key: K, value: V) {
        if let Some(position) = entries.iter().position(|(existing, _)| existing == &key) {
            entries[position].1 = value;
        } else {
            entries.push((key, value));
        }
    }

    /// Returns a reference to the value stored under `key`, or `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1)]);
    /// assert_eq!(collection.get(&"a"), Some(&1));
    /// assert_eq!(collection.get(&"b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if a pair with the given key exists.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    /// Upserts a pair, returning a new collection.
    ///
    /// An existing key keeps its position and receives the new value; a
    /// new key is appended at the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// let updated = collection.set("a", 10).set("c", 3);
    ///
    /// assert_eq!(updated.to_vec(), vec![("a", 10), ("b", 2), ("c", 3)]);
    /// assert_eq!(collection.get(&"a"), Some(&1)); // Original unchanged
    /// ```
    #[must_use]
    pub fn set(&self, key: K, value: V) -> Self {
        let mut entries = self.entries.clone();
        Self::upsert(&mut entries, key, value);
        Self { entries }
    }

    /// Appends a value under the next synthesized integer key.
    ///
    /// The key is one past the largest existing index-convertible key,
    /// or `0` when there is none, matching the host-language append
    /// (`[]`) semantics. Available whenever the key type implements
    /// [`IndexKey`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection: Collection<usize, &str> = Collection::new();
    /// let collection = collection.add("a").add("b");
    ///
    /// assert_eq!(collection.to_vec(), vec![(0, "a"), (1, "b")]);
    ///
    /// // Appending after an explicit key continues past it
    /// let collection = collection.set(10, "j").add("k");
    /// assert_eq!(collection.get(&11), Some(&"k"));
    /// ```
    #[must_use]
    pub fn add(&self, value: V) -> Self
    where
        K: IndexKey,
    {
        let next = self
            .entries
            .iter()
            .filter_map(|(key, _)| key.as_index())
            .max()
            .map_or(0, |largest| largest + 1);

        let mut entries = self.entries.clone();
        entries.push((K::from_index(next), value));
        Self { entries }
    }

    /// Removes the pair stored under `key`.
    ///
    /// Returns the new collection together with the removed value, or
    /// `None` when the key was absent (in which case the new collection
    /// equals the receiver).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// let (removed, value) = collection.remove(&"a");
    ///
    /// assert_eq!(value, Some(1));
    /// assert_eq!(removed.get(&"a"), None);
    /// assert_eq!(collection.len(), 2); // Original unchanged
    /// ```
    #[must_use]
    pub fn remove(&self, key: &K) -> (Self, Option<V>) {
        match self.entries.iter().position(|(existing, _)| existing == key) {
            None => (self.clone(), None),
            Some(position) => {
                let mut entries = self.entries.clone();
                let (_, value) = entries.remove(position);
                (Self { entries }, Some(value))
            }
        }
    }

    /// Returns the pairs as an owned vector in iteration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<(K, V)> {
        self.entries.clone()
    }

    /// Applies `mapper` to every value, preserving keys and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// let mapped = collection.map(|value| value * 10);
    ///
    /// assert_eq!(mapped.to_vec(), vec![("a", 10), ("b", 20)]);
    /// ```
    #[must_use]
    pub fn map<V2, F>(&self, mapper: F) -> Collection<K, V2>
    where
        V2: Clone,
        F: Fn(&V) -> V2,
    {
        Collection {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), mapper(value)))
                .collect(),
        }
    }

    /// Keeps the pairs whose value satisfies `predicate`.
    ///
    /// Relative order and original keys are preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
    /// let kept = collection.filter(|value| *value > 1);
    ///
    /// assert_eq!(kept.to_vec(), vec![("b", 2), ("c", 3)]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&V) -> bool,
    {
        self.filter_pairs(|_, value| predicate(value))
    }

    /// Keeps the pairs whose key satisfies `predicate`.
    #[must_use]
    pub fn filter_keys<P>(&self, predicate: P) -> Self
    where
        P: Fn(&K) -> bool,
    {
        self.filter_pairs(|key, _| predicate(key))
    }

    /// Keeps the pairs satisfying a key-and-value predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
    /// let kept = collection.filter_pairs(|key, value| *key != "a" && *value < 3);
    ///
    /// assert_eq!(kept.to_vec(), vec![("b", 2)]);
    /// ```
    #[must_use]
    pub fn filter_pairs<P>(&self, predicate: P) -> Self
    where
        P: Fn(&K, &V) -> bool,
    {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(key, value)| predicate(key, value))
                .cloned()
                .collect(),
        }
    }

    /// Reorders the pairs by value with a stable sort.
    ///
    /// The comparator must describe a consistent total order; an
    /// inconsistent comparator yields an unspecified order but never
    /// loses pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 3), ("b", 1), ("c", 2)]);
    /// let sorted = collection.sort_by(|left, right| left.cmp(right));
    ///
    /// assert_eq!(sorted.to_vec(), vec![("b", 1), ("c", 2), ("a", 3)]);
    /// ```
    #[must_use]
    pub fn sort_by<F>(&self, comparator: F) -> Self
    where
        F: Fn(&V, &V) -> Ordering,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|(_, left), (_, right)| comparator(left, right));
        Self { entries }
    }

    /// Reorders the pairs by key with a stable sort.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("b", 2), ("a", 1)]);
    /// let sorted = collection.sort_keys_by(|left, right| left.cmp(right));
    ///
    /// assert_eq!(sorted.to_vec(), vec![("a", 1), ("b", 2)]);
    /// ```
    #[must_use]
    pub fn sort_keys_by<F>(&self, comparator: F) -> Self
    where
        F: Fn(&K, &K) -> Ordering,
    {
        let mut entries = self.entries.clone();
        entries.sort_by(|(left, _), (right, _)| comparator(left, right));
        Self { entries }
    }

    /// Reverses the iteration order. Keys are unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// assert_eq!(collection.reverse().to_vec(), vec![("b", 2), ("a", 1)]);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.reverse();
        Self { entries }
    }

    /// Randomizes the iteration order. Keys are unchanged.
    ///
    /// Uses the thread-local generator; not suitable for anything
    /// security-sensitive.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.shuffle(&mut rand::thread_rng());
        Self { entries }
    }

    /// Returns a sub-range of the pairs, preserving original keys.
    ///
    /// A negative `offset` counts from the end. An out-of-range offset
    /// clamps to an empty result. `None` for `length` means "to the
    /// end".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// assert_eq!(collection.slice(1, Some(1)).to_vec(), vec![("b", 2)]);
    /// assert_eq!(collection.slice(-2, None).to_vec(), vec![("b", 2), ("c", 3)]);
    /// assert!(collection.slice(9, None).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, offset: isize, length: Option<usize>) -> Self {
        let total = self.entries.len();
        let start = if offset < 0 {
            total.saturating_sub(offset.unsigned_abs())
        } else {
            usize::min(offset.unsigned_abs(), total)
        };
        let end = length.map_or(total, |length| {
            usize::min(start.saturating_add(length), total)
        });

        Self {
            entries: self.entries[start..end].to_vec(),
        }
    }

    /// Returns the first `count` pairs, preserving keys.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.slice(0, Some(count))
    }

    /// Returns the pairs after the first `count`, preserving keys.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        Self {
            entries: self
                .entries
                .get(usize::min(count, self.entries.len())..)
                .unwrap_or(&[])
                .to_vec(),
        }
    }

    /// Returns the pairs before the last `count`, preserving keys.
    #[must_use]
    pub fn drop_last(&self, count: usize) -> Self {
        let kept = self.entries.len().saturating_sub(count);
        self.take(kept)
    }

    /// Returns `true` if any pair satisfies `predicate`.
    ///
    /// Short-circuits on the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// assert!(collection.exists(|_, value| *value == 2));
    /// assert!(!collection.exists(|key, _| *key == "z"));
    /// ```
    #[must_use]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: Fn(&K, &V) -> bool,
    {
        self.entries.iter().any(|(key, value)| predicate(key, value))
    }

    /// Returns `true` if every pair satisfies `predicate`.
    ///
    /// Short-circuits on the first mismatch; true for an empty
    /// collection.
    #[must_use]
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&K, &V) -> bool,
    {
        self.entries.iter().all(|(key, value)| predicate(key, value))
    }

    /// Returns the first value satisfying `predicate`, in iteration
    /// order.
    #[must_use]
    pub fn find<P>(&self, predicate: P) -> Option<&V>
    where
        P: Fn(&V) -> bool,
    {
        self.entries
            .iter()
            .map(|(_, value)| value)
            .find(|value| predicate(value))
    }

    /// Returns the first key satisfying `predicate`, in iteration
    /// order.
    #[must_use]
    pub fn find_key<P>(&self, predicate: P) -> Option<&K>
    where
        P: Fn(&K) -> bool,
    {
        self.entries
            .iter()
            .map(|(key, _)| key)
            .find(|key| predicate(key))
    }

    /// Splits the pairs into (matching, non-matching) collections.
    ///
    /// Each side preserves the relative order and original keys of its
    /// subset; every pair lands in exactly one side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
    /// let (odd, even) = collection.partition(|_, value| value % 2 == 1);
    ///
    /// assert_eq!(odd.to_vec(), vec![("a", 1), ("c", 3)]);
    /// assert_eq!(even.to_vec(), vec![("b", 2)]);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, predicate: P) -> (Self, Self)
    where
        P: Fn(&K, &V) -> bool,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();

        for (key, value) in &self.entries {
            if predicate(key, value) {
                matching.push((key.clone(), value.clone()));
            } else {
                rest.push((key.clone(), value.clone()));
            }
        }

        (Self { entries: matching }, Self { entries: rest })
    }

    /// Overlays each of `others` onto this collection by key.
    ///
    /// Later collections win on key collision; new keys are appended in
    /// encounter order. Existing keys keep their position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let base = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// let patch = Collection::from_pairs(vec![("b", 20), ("c", 3)]);
    ///
    /// let merged = base.merge([&patch]);
    /// assert_eq!(merged.to_vec(), vec![("a", 1), ("b", 20), ("c", 3)]);
    /// ```
    #[must_use]
    pub fn merge<'a, I>(&self, others: I) -> Self
    where
        K: 'a,
        V: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        let mut entries = self.entries.clone();
        for other in others {
            for (key, value) in &other.entries {
                Self::upsert(&mut entries, key.clone(), value.clone());
            }
        }
        Self { entries }
    }

    /// Overlays `other` onto this collection, leaving both inputs
    /// unmodified.
    ///
    /// Identical to [`merge`](Self::merge) with a single argument.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.merge([other])
    }
}

impl<K: Clone + PartialEq, V: Clone + PartialEq> Collection<K, V> {
    /// Returns `true` if any pair holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// assert!(collection.contains(&2));
    /// assert!(!collection.contains(&9));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.entries.iter().any(|(_, existing)| existing == value)
    }

    /// Returns the key of the first pair holding a value equal to
    /// `value`, in iteration order.
    #[must_use]
    pub fn index_of(&self, value: &V) -> Option<&K> {
        self.entries
            .iter()
            .find(|(_, existing)| existing == value)
            .map(|(key, _)| key)
    }

    /// Counts the pairs holding a value equal to `value`.
    #[must_use]
    pub fn occurrences_of(&self, value: &V) -> usize {
        self.entries
            .iter()
            .filter(|(_, existing)| existing == value)
            .count()
    }

    /// Removes the first pair holding a value equal to `value`.
    ///
    /// Returns the new collection and whether a pair was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let collection = Collection::from_pairs(vec![("a", 1), ("b", 1)]);
    /// let (removed, found) = collection.remove_element(&1);
    ///
    /// assert!(found);
    /// assert_eq!(removed.to_vec(), vec![("b", 1)]);
    /// ```
    #[must_use]
    pub fn remove_element(&self, value: &V) -> (Self, bool) {
        match self.index_of(value).cloned() {
            None => (self.clone(), false),
            Some(key) => {
                let (collection, _) = self.remove(&key);
                (collection, true)
            }
        }
    }

    /// Keeps the pairs whose key exists in `other` with an equal value.
    ///
    /// This is key-and-value intersection: a shared key with differing
    /// values is excluded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let left = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
    /// let right = Collection::from_pairs(vec![("b", 2), ("c", 30)]);
    ///
    /// assert_eq!(left.intersect(&right).to_vec(), vec![("b", 2)]);
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.filter_pairs(|key, value| other.get(key) == Some(value))
    }

    /// Returns the pairs whose key-value combination appears in exactly
    /// one of the two collections.
    ///
    /// Membership is decided by the full (key, value) pair, so two
    /// different keys holding equal values are never conflated. When
    /// both sides hold the same key with different values, the
    /// surviving pair carries `other`'s value, consistent with
    /// [`union`](Self::union).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let left = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// let right = Collection::from_pairs(vec![("b", 2), ("c", 1)]);
    ///
    /// // ("b", 2) is in both sides; ("c", 1) survives even though the
    /// // value 1 also appears in `left` under another key
    /// assert_eq!(
    ///     left.symmetric_difference(&right).to_vec(),
    ///     vec![("a", 1), ("c", 1)],
    /// );
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.union(other)
            .filter_pairs(|key, value| {
                !(self.get(key) == Some(value) && other.get(key) == Some(value))
            })
    }

    /// Returns `true` if every one of `others` holds exactly the same
    /// pairs as this collection, independent of order.
    ///
    /// Each collection is canonically sorted by key before comparison,
    /// so two collections that differ only in iteration order are
    /// equitable. This is a whole-argument-set check, not pairwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Collection;
    ///
    /// let ordered = Collection::from_pairs(vec![("a", 1), ("b", 2)]);
    /// let reversed = Collection::from_pairs(vec![("b", 2), ("a", 1)]);
    /// let other = Collection::from_pairs(vec![("a", 1), ("b", 9)]);
    ///
    /// assert!(ordered.equitable([&reversed]));
    /// assert!(!ordered.equitable([&reversed, &other]));
    /// ```
    #[must_use]
    pub fn equitable<'a, I>(&self, others: I) -> bool
    where
        K: Ord + 'a,
        V: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        fn canonical<K: Clone + Ord, V: Clone>(collection: &Collection<K, V>) -> Vec<(K, V)> {
            let mut entries = collection.entries.clone();
            entries.sort_by(|(left, _), (right, _)| left.cmp(right));
            entries
        }

        let reference = canonical(self);
        others.into_iter().all(|other| canonical(other) == reference)
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// An explicit position over a collection's iteration order.
///
/// Replaces the container-embedded iteration pointer of classic
/// collection APIs: each cursor owns its position, so two call sites
/// reading the same collection can never disturb each other. A cursor
/// starts at the first pair; create a new cursor to restart.
///
/// # Examples
///
/// ```rust
/// use primus::collection::Collection;
///
/// let collection = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
/// let mut cursor = collection.cursor();
///
/// assert_eq!(cursor.first(), Some(&1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.key(), Some(&"b"));
/// assert_eq!(cursor.last(), Some(&3));
/// assert_eq!(cursor.next(), None);
/// assert_eq!(cursor.current(), None);
/// ```
pub struct Cursor<'a, K, V> {
    entries: &'a [(K, V)],
    position: usize,
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Returns the value at the current position, or `None` when the
    /// cursor has moved past the end.
    #[must_use]
    pub fn current(&self) -> Option<&'a V> {
        self.entries.get(self.position).map(|(_, value)| value)
    }

    /// Returns the key at the current position, or `None` when the
    /// cursor has moved past the end.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.entries.get(self.position).map(|(key, _)| key)
    }

    /// Moves to the first pair and returns its value.
    pub fn first(&mut self) -> Option<&'a V> {
        self.position = 0;
        self.current()
    }

    /// Moves to the last pair and returns its value.
    pub fn last(&mut self) -> Option<&'a V> {
        self.position = self.entries.len().saturating_sub(1);
        self.current()
    }

    /// Advances one pair and returns the value now under the cursor.
    ///
    /// Once past the end the cursor stays there; `current` and `key`
    /// return `None` until the cursor is repositioned.
    pub fn next(&mut self) -> Option<&'a V> {
        self.position = usize::min(self.position + 1, self.entries.len());
        self.current()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over `(&K, &V)` pairs of a [`Collection`].
pub struct CollectionIterator<'a, K, V> {
    entries: &'a [(K, V)],
    position: usize,
}

impl<'a, K, V> Iterator for CollectionIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.position)?;
        self.position += 1;
        Some((&entry.0, &entry.1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for CollectionIterator<'_, K, V> {}

/// An owning iterator over `(K, V)` pairs of a [`Collection`].
pub struct CollectionIntoIterator<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for CollectionIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for CollectionIntoIterator<K, V> {}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K, V> Default for Collection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + PartialEq, V: Clone> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        Self::from_pairs(iterable)
    }
}

impl<K, V> IntoIterator for Collection<K, V> {
    type Item = (K, V);
    type IntoIter = CollectionIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        CollectionIntoIterator {
            entries: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Collection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = CollectionIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Collection<K, V> {
    /// Order-sensitive pair-sequence equality. For order-independent
    /// comparison see [`Collection::equitable`].
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for Collection<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
