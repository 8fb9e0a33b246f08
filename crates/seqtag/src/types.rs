//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{Result, SeqTagError};

/// A type that can be used as a vocabulary or tag index.
///
/// These are constrained to be unsigned primitive integers;
/// such that the largest index in a mapping is at most `T::max()`.
pub trait IndexType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> IndexType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Convert a `usize` position into an index of type `T`.
///
/// ## Returns
/// [`SeqTagError::IndexOverflow`] if `value` does not fit in `T`.
pub fn try_index<T: IndexType>(value: usize) -> Result<T> {
    T::from_usize(value).ok_or(SeqTagError::IndexOverflow { size: value })
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type STHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> STHashMap<K, V> {
            STHashMap::new()
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type STHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> STHashMap<K, V> {
            STHashMap::new()
        }
    }
}
