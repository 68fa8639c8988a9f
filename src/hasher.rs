use core::hash::BuildHasher;
use core::hash::Hash;

/// Computes the bucket hash of a key.
///
/// The table never asks the key type how to hash itself; the hasher is a value
/// handed to the constructor. Any `Fn(&K) -> u64` closure or function item is
/// a `KeyHasher<K>`, and the crate ships [`NumberHasher`], [`StringHasher`]
/// and [`BuildHasherAdapter`] for the common cases.
///
/// A hasher must return the same value for equal keys for as long as a key is
/// stored. Breaking that makes lookups and removals of the affected key miss;
/// it never corrupts memory.
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashMap;
///
/// let mut map = HashMap::with_capacity_and_hasher(0, |k: &u32| u64::from(*k) * 31);
/// map.insert(7, "seven");
/// assert_eq!(map.get(&7), Some(&"seven"));
/// ```
pub trait KeyHasher<K: ?Sized> {
    /// Returns the hash of `key`.
    fn hash_key(&self, key: &K) -> u64;
}

impl<K, F> KeyHasher<K> for F
where
    K: ?Sized,
    F: Fn(&K) -> u64,
{
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

/// A primitive number usable with [`NumberHasher`].
pub trait NumberKey: Copy + PartialEq {
    /// The key's identity cast to `u64`.
    fn to_hash(self) -> u64;
}

macro_rules! impl_number_key_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl NumberKey for $t {
                #[inline(always)]
                fn to_hash(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_number_key_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Truncating through i64 keeps `0.0` and `-0.0` on the same hash.
impl NumberKey for f32 {
    #[inline(always)]
    fn to_hash(self) -> u64 {
        self as i64 as u64
    }
}

impl NumberKey for f64 {
    #[inline(always)]
    fn to_hash(self) -> u64 {
        self as i64 as u64
    }
}

/// Identity hasher for numeric keys.
///
/// The hash of a number is the number itself, cast to `u64`. Sequential keys
/// therefore land in sequential buckets.
///
/// # Examples
///
/// ```rust
/// use chain_hash::KeyHasher;
/// use chain_hash::NumberHasher;
///
/// assert_eq!(NumberHasher.hash_key(&42u8), 42);
/// assert_eq!(NumberHasher.hash_key(&3.9f64), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NumberHasher;

impl<K: NumberKey> KeyHasher<K> for NumberHasher {
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        key.to_hash()
    }
}

const FNV32_OFFSET: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a over `bytes`.
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV32_OFFSET;
    for &b in bytes {
        hash ^= u32::from(b);
        hash = hash.wrapping_mul(FNV32_PRIME);
    }
    hash
}

/// FNV-1a (32-bit) hasher for string-like keys.
///
/// # Examples
///
/// ```rust
/// use chain_hash::KeyHasher;
/// use chain_hash::StringHasher;
///
/// assert_eq!(StringHasher.hash_key(&"a"), 0xe40c_292c);
/// assert_eq!(StringHasher.hash_key(&String::from("a")), 0xe40c_292c);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StringHasher;

impl<K> KeyHasher<K> for StringHasher
where
    K: AsRef<str> + ?Sized,
{
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        u64::from(fnv1a_32(key.as_ref().as_bytes()))
    }
}

/// Adapts any [`BuildHasher`] into a [`KeyHasher`] for `K: Hash` keys.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "std")]
/// # {
/// use std::collections::hash_map::RandomState;
///
/// use chain_hash::BuildHasherAdapter;
/// use chain_hash::HashMap;
///
/// let mut map = HashMap::with_capacity_and_hasher(0, BuildHasherAdapter(RandomState::new()));
/// map.insert((1, 2), "pair");
/// assert_eq!(map.get(&(1, 2)), Some(&"pair"));
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildHasherAdapter<S>(pub S);

impl<K, S> KeyHasher<K> for BuildHasherAdapter<S>
where
    K: Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self.0.hash_one(key)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher installed by `HashMap::new` and friends for arbitrary
        /// `Hash` keys: foldhash's fast, randomly seeded hasher.
        pub type DefaultHasher = BuildHasherAdapter<foldhash::fast::RandomState>;
    } else if #[cfg(feature = "std")] {
        /// The hasher installed by `HashMap::new` and friends for arbitrary
        /// `Hash` keys: the standard library's SipHash `RandomState`.
        pub type DefaultHasher = BuildHasherAdapter<std::collections::hash_map::RandomState>;
    }
}
