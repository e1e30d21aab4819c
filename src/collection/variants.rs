//! Named variants of [`Collection`].
//!
//! [`Map`] and [`Hash`] carry the exact behavior of the core container
//! under distinct type identities, for APIs that want to name their
//! intent. Both are thin newtypes generated by one forwarding macro;
//! neither adds or changes semantics.
//!
//! # Examples
//!
//! ```rust
//! use primus::collection::{Hash, Map};
//!
//! let map = Map::from_pairs(vec![("a", 1), ("b", 2)]);
//! assert_eq!(map.get(&"a"), Some(&1));
//!
//! let hash: Hash<&str, i32> = Hash::new().set("x", 10);
//! assert_eq!(hash.values().sum::<i32>(), 10);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use super::ordered::{Collection, CollectionIntoIterator, CollectionIterator, Cursor, IndexKey};

/// Generates a capability-equivalent newtype over [`Collection`].
macro_rules! collection_variant {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Clone)]
        pub struct $name<K, V> {
            inner: Collection<K, V>,
        }

        impl<K, V> $name<K, V> {
            #[doc = concat!("Creates a new empty `", stringify!($name), "`.")]
            #[inline]
            #[must_use]
            pub const fn new() -> Self {
                Self {
                    inner: Collection::new(),
                }
            }

            /// Forwards to [`Collection::len`].
            #[inline]
            #[must_use]
            pub fn len(&self) -> usize {
                self.inner.len()
            }

            /// Forwards to [`Collection::is_empty`].
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            #[doc = concat!("Returns a new empty `", stringify!($name), "`.")]
            #[inline]
            #[must_use]
            pub const fn clear(&self) -> Self {
                Self::new()
            }

            /// Forwards to [`Collection::as_slice`].
            #[inline]
            #[must_use]
            pub fn as_slice(&self) -> &[(K, V)] {
                self.inner.as_slice()
            }

            /// Forwards to [`Collection::iter`].
            #[inline]
            #[must_use]
            pub fn iter(&self) -> CollectionIterator<'_, K, V> {
                self.inner.iter()
            }

            /// Forwards to [`Collection::keys`].
            pub fn keys(&self) -> impl Iterator<Item = &K> {
                self.inner.keys()
            }

            /// Forwards to [`Collection::values`].
            pub fn values(&self) -> impl Iterator<Item = &V> {
                self.inner.values()
            }

            /// Forwards to [`Collection::cursor`].
            #[inline]
            #[must_use]
            pub fn cursor(&self) -> Cursor<'_, K, V> {
                self.inner.cursor()
            }

            /// Unwraps into the underlying [`Collection`].
            #[inline]
            #[must_use]
            pub fn into_inner(self) -> Collection<K, V> {
                self.inner
            }
        }

        impl<K: Clone + PartialEq, V: Clone> $name<K, V> {
            /// Forwards to [`Collection::from_pairs`].
            #[must_use]
            pub fn from_pairs<I>(pairs: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
            {
                Self {
                    inner: Collection::from_pairs(pairs),
                }
            }

            /// Forwards to [`Collection::get`].
            #[must_use]
            pub fn get(&self, key: &K) -> Option<&V> {
                self.inner.get(key)
            }

            /// Forwards to [`Collection::contains_key`].
            #[must_use]
            pub fn contains_key(&self, key: &K) -> bool {
                self.inner.contains_key(key)
            }

            /// Forwards to [`Collection::set`].
            #[must_use]
            pub fn set(&self, key: K, value: V) -> Self {
                Self {
                    inner: self.inner.set(key, value),
                }
            }

            /// Forwards to [`Collection::add`].
            #[must_use]
            pub fn add(&self, value: V) -> Self
            where
                K: IndexKey,
            {
                Self {
                    inner: self.inner.add(value),
                }
            }

            /// Forwards to [`Collection::remove`].
            #[must_use]
            pub fn remove(&self, key: &K) -> (Self, Option<V>) {
                let (inner, value) = self.inner.remove(key);
                (Self { inner }, value)
            }

            /// Forwards to [`Collection::to_vec`].
            #[must_use]
            pub fn to_vec(&self) -> Vec<(K, V)> {
                self.inner.to_vec()
            }

            /// Forwards to [`Collection::map`].
            #[must_use]
            pub fn map<V2, F>(&self, mapper: F) -> $name<K, V2>
            where
                V2: Clone,
                F: Fn(&V) -> V2,
            {
                $name {
                    inner: self.inner.map(mapper),
                }
            }

            /// Forwards to [`Collection::filter`].
            #[must_use]
            pub fn filter<P>(&self, predicate: P) -> Self
            where
                P: Fn(&V) -> bool,
            {
                Self {
                    inner: self.inner.filter(predicate),
                }
            }

            /// Forwards to [`Collection::filter_keys`].
            #[must_use]
            pub fn filter_keys<P>(&self, predicate: P) -> Self
            where
                P: Fn(&K) -> bool,
            {
                Self {
                    inner: self.inner.filter_keys(predicate),
                }
            }

            /// Forwards to [`Collection::filter_pairs`].
            #[must_use]
            pub fn filter_pairs<P>(&self, predicate: P) -> Self
            where
                P: Fn(&K, &V) -> bool,
            {
                Self {
                    inner: self.inner.filter_pairs(predicate),
                }
            }

            /// Forwards to [`Collection::sort_by`].
            #[must_use]
            pub fn sort_by<F>(&self, comparator: F) -> Self
            where
                F: Fn(&V, &V) -> Ordering,
            {
                Self {
                    inner: self.inner.sort_by(comparator),
                }
            }

            /// Forwards to [`Collection::sort_keys_by`].
            #[must_use]
            pub fn sort_keys_by<F>(&self, comparator: F) -> Self
            where
                F: Fn(&K, &K) -> Ordering,
            {
                Self {
                    inner: self.inner.sort_keys_by(comparator),
                }
            }

            /// Forwards to [`Collection::reverse`].
            #[must_use]
            pub fn reverse(&self) -> Self {
                Self {
                    inner: self.inner.reverse(),
                }
            }

            /// Forwards to [`Collection::shuffle`].
            #[must_use]
            pub fn shuffle(&self) -> Self {
                Self {
                    inner: self.inner.shuffle(),
                }
            }

            /// Forwards to [`Collection::slice`].
            #[must_use]
            pub fn slice(&self, offset: isize, length: Option<usize>) -> Self {
                Self {
                    inner: self.inner.slice(offset, length),
                }
            }

            /// Forwards to [`Collection::take`].
            #[must_use]
            pub fn take(&self, count: usize) -> Self {
                Self {
                    inner: self.inner.take(count),
                }
            }

            /// Forwards to [`Collection::drop_first`].
            #[must_use]
            pub fn drop_first(&self, count: usize) -> Self {
                Self {
                    inner: self.inner.drop_first(count),
                }
            }

            /// Forwards to [`Collection::drop_last`].
            #[must_use]
            pub fn drop_last(&self, count: usize) -> Self {
                Self {
                    inner: self.inner.drop_last(count),
                }
            }

            /// Forwards to [`Collection::exists`].
            #[must_use]
            pub fn exists<P>(&self, predicate: P) -> bool
            where
                P: Fn(&K, &V) -> bool,
            {
                self.inner.exists(predicate)
            }

            /// Forwards to [`Collection::for_all`].
            #[must_use]
            pub fn for_all<P>(&self, predicate: P) -> bool
            where
                P: Fn(&K, &V) -> bool,
            {
                self.inner.for_all(predicate)
            }

            /// Forwards to [`Collection::find`].
            #[must_use]
            pub fn find<P>(&self, predicate: P) -> Option<&V>
            where
                P: Fn(&V) -> bool,
            {
                self.inner.find(predicate)
            }

            /// Forwards to [`Collection::find_key`].
            #[must_use]
            pub fn find_key<P>(&self, predicate: P) -> Option<&K>
            where
                P: Fn(&K) -> bool,
            {
                self.inner.find_key(predicate)
            }

            /// Forwards to [`Collection::partition`].
            #[must_use]
            pub fn partition<P>(&self, predicate: P) -> (Self, Self)
            where
                P: Fn(&K, &V) -> bool,
            {
                let (matching, rest) = self.inner.partition(predicate);
                (Self { inner: matching }, Self { inner: rest })
            }

            /// Forwards to [`Collection::merge`].
            #[must_use]
            pub fn merge<'a, I>(&self, others: I) -> Self
            where
                K: 'a,
                V: 'a,
                I: IntoIterator<Item = &'a Self>,
            {
                Self {
                    inner: self
                        .inner
                        .merge(others.into_iter().map(|other| &other.inner)),
                }
            }

            /// Forwards to [`Collection::union`].
            #[must_use]
            pub fn union(&self, other: &Self) -> Self {
                Self {
                    inner: self.inner.union(&other.inner),
                }
            }
        }

        impl<K: Clone + PartialEq, V: Clone + PartialEq> $name<K, V> {
            /// Forwards to [`Collection::contains`].
            #[must_use]
            pub fn contains(&self, value: &V) -> bool {
                self.inner.contains(value)
            }

            /// Forwards to [`Collection::index_of`].
            #[must_use]
            pub fn index_of(&self, value: &V) -> Option<&K> {
                self.inner.index_of(value)
            }

            /// Forwards to [`Collection::occurrences_of`].
            #[must_use]
            pub fn occurrences_of(&self, value: &V) -> usize {
                self.inner.occurrences_of(value)
            }

            /// Forwards to [`Collection::remove_element`].
            #[must_use]
            pub fn remove_element(&self, value: &V) -> (Self, bool) {
                let (inner, found) = self.inner.remove_element(value);
                (Self { inner }, found)
            }

            /// Forwards to [`Collection::intersect`].
            #[must_use]
            pub fn intersect(&self, other: &Self) -> Self {
                Self {
                    inner: self.inner.intersect(&other.inner),
                }
            }

            /// Forwards to [`Collection::symmetric_difference`].
            #[must_use]
            pub fn symmetric_difference(&self, other: &Self) -> Self {
                Self {
                    inner: self.inner.symmetric_difference(&other.inner),
                }
            }

            /// Forwards to [`Collection::equitable`].
            #[must_use]
            pub fn equitable<'a, I>(&self, others: I) -> bool
            where
                K: Ord + 'a,
                V: 'a,
                I: IntoIterator<Item = &'a Self>,
            {
                self.inner
                    .equitable(others.into_iter().map(|other| &other.inner))
            }
        }

        impl<K, V> From<Collection<K, V>> for $name<K, V> {
            fn from(inner: Collection<K, V>) -> Self {
                Self { inner }
            }
        }

        impl<K, V> From<$name<K, V>> for Collection<K, V> {
            fn from(variant: $name<K, V>) -> Self {
                variant.inner
            }
        }

        impl<K, V> Default for $name<K, V> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<K: Clone + PartialEq, V: Clone> FromIterator<(K, V)> for $name<K, V> {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
                Self::from_pairs(iterable)
            }
        }

        impl<K, V> IntoIterator for $name<K, V> {
            type Item = (K, V);
            type IntoIter = CollectionIntoIterator<K, V>;

            fn into_iter(self) -> Self::IntoIter {
                self.inner.into_iter()
            }
        }

        impl<'a, K, V> IntoIterator for &'a $name<K, V> {
            type Item = (&'a K, &'a V);
            type IntoIter = CollectionIterator<'a, K, V>;

            fn into_iter(self) -> Self::IntoIter {
                self.inner.iter()
            }
        }

        impl<K: PartialEq, V: PartialEq> PartialEq for $name<K, V> {
            fn eq(&self, other: &Self) -> bool {
                self.inner == other.inner
            }
        }

        impl<K: Eq, V: Eq> Eq for $name<K, V> {}

        impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for $name<K, V> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter
                    .debug_tuple(stringify!($name))
                    .field(&self.inner)
                    .finish()
            }
        }
    };
}

collection_variant! {
    /// A named variant of [`Collection`] for map-shaped APIs.
    ///
    /// Behavior is identical to the core container; the distinct type
    /// exists for API clarity only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Map;
    ///
    /// let map = Map::from_pairs(vec![("a", 1)]).set("b", 2);
    /// assert_eq!(map.get(&"b"), Some(&2));
    /// ```
    Map
}

collection_variant! {
    /// A named variant of [`Collection`] for hash-shaped APIs.
    ///
    /// Behavior is identical to the core container; the distinct type
    /// exists for API clarity only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primus::collection::Hash;
    ///
    /// let hash = Hash::from_pairs(vec![("x", 1), ("y", 2)]);
    /// assert!(hash.contains_key(&"y"));
    /// ```
    Hash
}

// =============================================================================
// Tests
// =============================================================================
