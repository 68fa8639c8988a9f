#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A key-value map over the chained hash table.
///
/// This module provides a `HashMap` that wraps the `HashTable` and hashes keys
/// with a pluggable [`KeyHasher`].
pub mod hash_map;

/// The raw chained table: caller-supplied hashes and equality predicates.
pub mod hash_table;

/// A hash set built on [`HashMap`] with unit values.
pub mod hash_set;

/// Key hashers: the [`KeyHasher`] trait and its stock implementations.
pub mod hasher;

pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_map::NumberMap;
pub use hash_map::StringMap;
pub use hash_set::HashSet;
pub use hash_set::NumberSet;
pub use hash_set::StringSet;
pub use hash_table::HashTable;
pub use hasher::BuildHasherAdapter;
#[cfg(any(feature = "foldhash", feature = "std"))]
pub use hasher::DefaultHasher;
pub use hasher::KeyHasher;
pub use hasher::NumberHasher;
pub use hasher::NumberKey;
pub use hasher::StringHasher;
pub use hasher::fnv1a_32;
