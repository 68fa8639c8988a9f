use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::hash_map;
use crate::hash_map::HashMap;
use crate::hasher::KeyHasher;
use crate::hasher::NumberHasher;
use crate::hasher::StringHasher;

/// A [`HashSet`] of numbers, hashed by identity.
pub type NumberSet<T> = HashSet<T, NumberHasher>;

/// A [`HashSet`] of strings, hashed with FNV-1a.
///
/// # Examples
///
/// ```rust
/// use chain_hash::StringSet;
///
/// let set = StringSet::from(["a", "b", "a"]);
/// assert_eq!(set.len(), 2);
/// ```
pub type StringSet<T> = HashSet<T, StringHasher>;

/// A hash set implemented as a [`HashMap`] with `()` values.
///
/// `HashSet<T, H>` stores values of type `T` where `T` implements `PartialEq`, hashed
/// by the [`KeyHasher`] `H`. Iteration order is slot order, as for the map.
///
/// # Examples
///
/// ```rust
/// use chain_hash::NumberSet;
///
/// let mut set = NumberSet::new();
/// assert!(set.insert(3u32));
/// assert!(!set.insert(3));
/// assert!(set.contains(&3));
/// assert!(set.remove(&3));
/// assert!(set.is_empty());
/// ```
pub struct HashSet<T, H> {
    map: HashMap<T, (), H>,
}

impl<T, H> Clone for HashSet<T, H>
where
    T: Clone,
    H: Clone,
{
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<T, H> PartialEq for HashSet<T, H>
where
    T: PartialEq,
    H: KeyHasher<T>,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(v))
    }
}

impl<T, H> Eq for HashSet<T, H>
where
    T: Eq,
    H: KeyHasher<T>,
{
}

impl<T, H> Debug for HashSet<T, H>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, H> HashSet<T, H> {
    /// Creates a new hash set with the given hasher.
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates a new hash set with room for at least `capacity` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    /// use chain_hash::NumberHasher;
    ///
    /// let set: HashSet<u64, _> = HashSet::with_capacity_and_hasher(50, NumberHasher);
    /// assert!(set.capacity() >= 50);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns a reference to the set's hasher.
    pub fn hasher(&self) -> &H {
        self.map.hasher()
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no values.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of values the set can hold before reallocating.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Removes all values, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Reserves capacity for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    /// Returns an iterator over the values in the set.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.map.keys(),
        }
    }

    /// Removes and yields every value in the set.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            inner: self.map.drain(),
        }
    }

    /// Retains only the values for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberSet;
    ///
    /// let mut set: NumberSet<u8> = (0..10).collect();
    /// set.retain(|v| v % 3 == 0);
    /// assert_eq!(set.len(), 4);
    /// ```
    pub fn retain(&mut self, mut f: impl FnMut(&T) -> bool) {
        self.map.retain(|k, _| f(k));
    }

    /// Copies every value into a `Vec`, in iteration order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T, H> HashSet<T, H>
where
    T: PartialEq,
    H: KeyHasher<T>,
{
    /// Builds a set from any iterable with the given hasher.
    ///
    /// The iterator's lower size bound is used as the initial capacity.
    /// Duplicates keep their first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashSet;
    ///
    /// let set = HashSet::from_iter_with_hasher(|v: &u32| u64::from(*v % 7), [3, 10, 3]);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains(&10));
    /// ```
    pub fn from_iter_with_hasher<I>(hasher: H, iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity_and_hasher(iter.size_hint().0, hasher);
        set.put_all(iter);
        set
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was not already present. An equal value
    /// already in the set is kept.
    pub fn insert(&mut self, value: T) -> bool {
        match self.map.entry(value) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(());
                true
            }
        }
    }

    /// Returns `true` if the set contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// Returns `true` if the set contains every value yielded by `values`.
    ///
    /// Stops at the first missing value. An empty iterator yields `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberSet;
    ///
    /// let set = NumberSet::from([1, 2, 3]);
    /// assert!(set.contains_all(&[1, 3]));
    /// assert!(!set.contains_all(&[1, 4]));
    /// assert!(set.contains_all(&[]));
    /// ```
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    /// Returns a reference to the stored value equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.map.get_key_value(value).map(|(k, _)| k)
    }

    /// Removes a value from the set. Returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.map.remove_entry(value).map(|(k, _)| k)
    }

    /// Inserts every value from `iter`.
    pub fn put_all<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Returns `true` if `self` has no values in common with `other`.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().all(|v| !large.contains(v))
    }

    /// Returns `true` if every value of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && other.contains_all(self.iter())
    }

    /// Returns `true` if every value of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<T, H> HashSet<T, H>
where
    T: PartialEq,
    H: KeyHasher<T> + Default,
{
    /// Creates a new hash set using the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(H::default())
    }

    /// Creates a new hash set with the given capacity using the default
    /// hasher.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, H::default())
    }
}

impl<T, H> Default for HashSet<T, H>
where
    T: PartialEq,
    H: KeyHasher<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H> Extend<T> for HashSet<T, H>
where
    T: PartialEq,
    H: KeyHasher<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<T, H> FromIterator<T> for HashSet<T, H>
where
    T: PartialEq,
    H: KeyHasher<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_hasher(H::default(), iter)
    }
}

impl<T, H, const N: usize> From<[T; N]> for HashSet<T, H>
where
    T: PartialEq,
    H: KeyHasher<T> + Default,
{
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, H> IntoIterator for HashSet<T, H> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, T, H> IntoIterator for &'a HashSet<T, H> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of a `HashSet`.
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A draining iterator over the values of a `HashSet`.
pub struct Drain<'a, T> {
    inner: hash_map::Drain<'a, T, ()>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

/// An owning iterator over the values of a `HashSet`.
pub struct IntoIter<T> {
    inner: hash_map::IntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
