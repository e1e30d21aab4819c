//! Ordered key-value containers.
//!
//! This module provides the collection family of the crate:
//!
//! - [`Collection`]: the core ordered key-value container
//! - [`Set`]: value-unique, densely indexed specialization
//! - [`Map`] / [`Hash`]: named variants of [`Collection`]
//! - [`Cursor`]: an explicit position object over a container's
//!   iteration order
//! - [`IndexKey`]: key types that can synthesize append indices
//!
//! # Immutability
//!
//! Every operation that changes a container returns a new one; the
//! receiver is never modified. A result owns its storage independently
//! of its source, so the two can never observe each other's changes.
//!
//! # Examples
//!
//! ## `Collection`
//!
//! ```rust
//! use primus::collection::Collection;
//!
//! let collection = Collection::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)]);
//!
//! let kept = collection.filter(|value| *value > 1);
//! assert_eq!(kept.to_vec(), vec![("b", 2), ("c", 3)]);
//!
//! // Insertion order survives transformation
//! let mapped = collection.map(|value| value * 10);
//! assert_eq!(mapped.values().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
//! ```
//!
//! ## `Set`
//!
//! ```rust
//! use primus::collection::Set;
//!
//! let set = Set::from_values(vec!["x", "y", "x", "z"]);
//!
//! // Duplicates are dropped, keys are dense and zero-based
//! assert_eq!(set.to_vec(), vec!["x", "y", "z"]);
//! assert_eq!(set.keys(), vec![0, 1, 2]);
//! ```

mod ordered;
mod set;
mod variants;

pub use ordered::Collection;
pub use ordered::CollectionIntoIterator;
pub use ordered::CollectionIterator;
pub use ordered::Cursor;
pub use ordered::IndexKey;
pub use set::Set;
pub use set::SetIntoIterator;
pub use variants::Hash;
pub use variants::Map;
