//! # primus
//!
//! Ordered key-value collection primitives for Rust.
//!
//! ## Overview
//!
//! This library provides a small family of ordered containers built around
//! one core abstraction:
//!
//! - [`Collection`](collection::Collection): an ordered key-value container
//!   preserving insertion order, with functional-style transformations
//!   (map, filter, sort, partition) and set algebra (union, intersect,
//!   symmetric difference)
//! - [`Set`](collection::Set): a value-unique specialization that re-indexes
//!   to dense zero-based keys after every mutation
//! - [`Map`](collection::Map) / [`Hash`](collection::Hash): named variants of
//!   the core container for API clarity
//!
//! All operations are immutable: they return a new container and never
//! modify the receiver.
//!
//! ## Example
//!
//! ```rust
//! use primus::prelude::*;
//!
//! let collection = Collection::new()
//!     .set("a", 1)
//!     .set("b", 2)
//!     .set("c", 3);
//!
//! let doubled = collection.map(|value| value * 2);
//! assert_eq!(doubled.get(&"b"), Some(&4));
//!
//! // The original is unchanged
//! assert_eq!(collection.get(&"b"), Some(&2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection types and the traits needed to use them.
///
/// # Usage
///
/// ```rust
/// use primus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::Collection;
    pub use crate::collection::Cursor;
    pub use crate::collection::Hash;
    pub use crate::collection::IndexKey;
    pub use crate::collection::Map;
    pub use crate::collection::Set;
}

pub mod collection;
