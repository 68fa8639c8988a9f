use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;
#[cfg(feature = "stats")]
use crate::hash_table::DebugStats;
use crate::hasher::KeyHasher;
use crate::hasher::NumberHasher;
use crate::hasher::StringHasher;

/// A [`HashMap`] keyed by numbers, hashed by identity.
///
/// # Examples
///
/// ```rust
/// use chain_hash::NumberMap;
///
/// let map = NumberMap::from([(1, "one"), (2, "two")]);
/// assert_eq!(map[&2], "two");
/// ```
pub type NumberMap<K, V> = HashMap<K, V, NumberHasher>;

/// A [`HashMap`] keyed by strings, hashed with FNV-1a.
///
/// # Examples
///
/// ```rust
/// use chain_hash::StringMap;
///
/// let mut map: StringMap<&str, u32> = StringMap::with_capacity(4);
/// map.insert("a", 1);
/// assert_eq!(map.get(&"a"), Some(&1));
/// ```
pub type StringMap<K, V> = HashMap<K, V, StringHasher>;

/// A hash map implemented on top of the chained [`HashTable`].
///
/// `HashMap<K, V, H>` stores key-value pairs where keys implement `PartialEq`,
/// and hashes keys with the [`KeyHasher`] `H` it was constructed with. Keys
/// that are not equal to themselves, such as `f64::NAN`, can be inserted but
/// never found again. The hasher
/// is called once per operation; each entry keeps the hash it was stored
/// under, so growing the table never calls it again.
///
/// Iteration order is the order of the slots the pairs occupy. Slots freed by
/// [`remove`](HashMap::remove) are reused by later inserts, so a key inserted
/// after a removal may iterate before older keys.
///
/// # Examples
///
/// ```rust
/// use chain_hash::HashMap;
/// use chain_hash::StringHasher;
///
/// let mut map = HashMap::with_capacity_and_hasher(0, StringHasher);
/// map.insert("a", 1);
/// map.insert("b", 2);
/// assert_eq!(map.insert("a", 3), Some(1));
/// assert_eq!(map.get(&"a"), Some(&3));
///
/// assert_eq!(map.remove(&"b"), Some(2));
/// map.insert("c", 4);
/// assert_eq!(map.get(&"a"), Some(&3));
/// assert_eq!(map.len(), 2);
/// ```
pub struct HashMap<K, V, H> {
    table: HashTable<(K, V)>,
    hasher: H,
}

impl<K, V, H> Clone for HashMap<K, V, H>
where
    K: Clone,
    V: Clone,
    H: Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, H> Debug for HashMap<K, V, H>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, H> PartialEq for HashMap<K, V, H>
where
    K: PartialEq,
    V: PartialEq,
    H: KeyHasher<K>,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<K, V, H> Eq for HashMap<K, V, H>
where
    K: Eq,
    V: Eq,
    H: KeyHasher<K>,
{
}

impl<K, V, H> HashMap<K, V, H> {
    /// Creates a new hash map with the given hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    /// use chain_hash::NumberHasher;
    ///
    /// let map: HashMap<i32, String, _> = HashMap::with_hasher(NumberHasher);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates a new hash map with room for at least `capacity` pairs, using
    /// the given hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    /// use chain_hash::NumberHasher;
    ///
    /// let map: HashMap<i32, String, _> = HashMap::with_capacity_and_hasher(100, NumberHasher);
    /// assert!(map.capacity() >= 100);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hasher,
        }
    }

    /// Creates a new hash map with the given capacity, load factor and
    /// hasher.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not a finite number greater than zero.
    pub fn with_capacity_hasher_and_load_factor(
        capacity: usize,
        load_factor: f64,
        hasher: H,
    ) -> Self {
        Self {
            table: HashTable::with_capacity_and_load_factor(capacity, load_factor),
            hasher,
        }
    }

    /// Returns a reference to the map's hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberMap;
    ///
    /// let mut map = NumberMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of pairs the map can hold before its entry store
    /// reallocates.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the length of the bucket array. Always a power of two.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Returns the average chain length above which the bucket array doubles.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Removes all elements from the map.
    ///
    /// This operation preserves the map's allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberMap;
    ///
    /// let mut map = NumberMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Returns an iterator over the key-value pairs of the map, in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberMap;
    ///
    /// let map = NumberMap::from([(1, "a"), (2, "b")]);
    /// for (key, value) in map.iter() {
    ///     println!("Key: {}, Value: {}", key, value);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the pairs of the map with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values of the map.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Returns an iterator that removes and yields all key-value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberMap;
    ///
    /// let mut map = NumberMap::from([(1, "a"), (2, "b")]);
    /// let pairs: Vec<_> = map.drain().collect();
    /// assert!(map.is_empty());
    /// assert_eq!(pairs.len(), 2);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Retains only the pairs for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(&K, &mut V) -> bool) {
        self.table.retain(|(k, v)| f(k, v));
    }

    /// Copies every pair into a `Vec`, in iteration order.
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Returns the underlying table's statistics.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> DebugStats {
        self.table.debug_stats()
    }
}

impl<K, V, H> HashMap<K, V, H>
where
    K: PartialEq,
    H: KeyHasher<K>,
{
    /// Builds a map from any iterable of pairs with the given hasher.
    ///
    /// The iterator's lower size bound is used as the initial capacity. Later
    /// pairs overwrite earlier pairs with the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::HashMap;
    ///
    /// let map = HashMap::from_iter_with_hasher(|k: &u8| u64::from(*k), [(1, 'a'), (1, 'b')]);
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map[&1], 'b');
    /// ```
    pub fn from_iter_with_hasher<I>(hasher: H, iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity_and_hasher(iter.size_hint().0, hasher);
        map.put_all(iter);
        map
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    /// If the map did have this key present, the value is updated in place,
    /// and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberMap;
    ///
    /// let mut map = NumberMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hasher.hash_key(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => {
                let old_value = core::mem::replace(&mut entry.get_mut().1, value);
                Some(old_value)
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Inserts or updates `key` with the value computed by `f`, in a single
    /// lookup.
    ///
    /// `f` receives the current value, or `None` if the key is absent, and
    /// returns the value to store. Returns a reference to the stored value and
    /// the value it replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::StringMap;
    ///
    /// let mut counts: StringMap<&str, u32> = StringMap::new();
    /// for word in ["a", "b", "a"] {
    ///     counts.get_and_put(word, |old| old.map_or(1, |n| n + 1));
    /// }
    /// assert_eq!(counts[&"a"], 2);
    ///
    /// let (new, old) = counts.get_and_put("b", |_| 10);
    /// assert_eq!(*new, 10);
    /// assert_eq!(old, Some(1));
    /// ```
    pub fn get_and_put<F>(&mut self, key: K, f: F) -> (&mut V, Option<V>)
    where
        F: FnOnce(Option<&V>) -> V,
    {
        let hash = self.hasher.hash_key(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => {
                let (_, value) = entry.into_mut();
                let new_value = f(Some(&*value));
                let old_value = core::mem::replace(value, new_value);
                (value, Some(old_value))
            }
            TableEntry::Vacant(entry) => {
                let new_value = f(None);
                (&mut entry.insert((key, new_value)).1, None)
            }
        }
    }

    /// Inserts every pair from `iter`, in iteration order.
    pub fn put_all<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberMap;
    ///
    /// let map = NumberMap::from([(1, "a")]);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns the stored key and its value.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let hash = self.hasher.hash_key(key);
        self.table.find(hash, |(k, _)| k == key).map(|(k, v)| (k, v))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hasher.hash_key(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberMap;
    ///
    /// let mut map = NumberMap::from([(1, "a")]);
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hasher.hash_key(key);
        self.table.remove(hash, |(k, _)| k == key)
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_hash::NumberMap;
    ///
    /// let mut map = NumberMap::new();
    /// map.entry(1).or_insert("a");
    /// map.entry(1).or_insert("b");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hasher.hash_key(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }
}

impl<K, V, H> HashMap<K, V, H>
where
    K: PartialEq,
    H: KeyHasher<K> + Default,
{
    /// Creates a new hash map using the default hasher.
    pub fn new() -> Self {
        Self::with_hasher(H::default())
    }

    /// Creates a new hash map with the specified capacity using the default
    /// hasher.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, H::default())
    }
}

impl<K, V, H> Default for HashMap<K, V, H>
where
    K: PartialEq,
    H: KeyHasher<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H> Index<&K> for HashMap<K, V, H>
where
    K: PartialEq,
    H: KeyHasher<K>,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not found in HashMap")
    }
}

impl<K, V, H> Extend<(K, V)> for HashMap<K, V, H>
where
    K: PartialEq,
    H: KeyHasher<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K, V, H> FromIterator<(K, V)> for HashMap<K, V, H>
where
    K: PartialEq,
    H: KeyHasher<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_iter_with_hasher(H::default(), iter)
    }
}

impl<K, V, H, const N: usize> From<[(K, V); N]> for HashMap<K, V, H>
where
    K: PartialEq,
    H: KeyHasher<K> + Default,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_iter_with_hasher(H::default(), pairs)
    }
}

impl<K, V, H> IntoIterator for HashMap<K, V, H> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, V, H> IntoIterator for &'a HashMap<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, H> IntoIterator for &'a mut HashMap<K, V, H> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// The result of a single chain walk for one key, from [`HashMap::entry`].
///
/// An occupied entry remembers where its pair sits in the chain, so updating
/// or removing it does not search again. A vacant entry inserts at the head
/// of the key's chain, reusing the most recently freed slot if there is one.
///
/// # Examples
///
/// ```rust
/// use chain_hash::StringMap;
///
/// let mut lengths: StringMap<&str, usize> = StringMap::new();
/// for word in ["chain", "hash", "chain"] {
///     lengths.entry(word).and_modify(|n| *n += 1).or_insert(1);
/// }
/// assert_eq!(lengths[&"chain"], 2);
/// ```
pub enum Entry<'a, K, V> {
    /// The key is absent.
    Vacant(VacantEntry<'a, K, V>),
    /// The key is stored.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Stores `default` if the key is absent. Returns the stored value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(|| default)
    }

    /// Stores the result of `default` if the key is absent. `default` is not
    /// called otherwise.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to the stored value, if any.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            vacant => vacant,
        }
    }

    /// The stored key, or the key that a vacant entry would insert.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Stores `V::default()` if the key is absent.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A key with no stored pair, and the hash it was looked up under.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// The key that [`insert`](Self::insert) will store.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Gives the key back without inserting.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Links `(key, value)` at the head of its chain.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A stored pair, located by its bucket, chain predecessor and slot.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// The stored key. Inserting through the entry never replaces it.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// The stored value.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// The stored value, mutably.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Like [`get_mut`](Self::get_mut), borrowing from the map instead of
    /// the entry.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Swaps in `value` and returns the previous one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Unlinks the pair and returns its value. The freed slot is the next one
    /// an insert reuses.
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Unlinks the pair and returns it.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A mutable iterator over the key-value pairs of a `HashMap`.
pub struct IterMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (&*k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a `HashMap`.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}
impl<K, V> FusedIterator for Drain<'_, K, V> {}

/// An owning iterator over the key-value pairs of a `HashMap`.
pub struct IntoIter<K, V> {
    inner: crate::hash_table::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use core::hash::Hash;
    use core::hash::Hasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone)]
    struct SipKeyHasher {
        k1: u64,
        k2: u64,
    }

    impl<K: Hash + ?Sized> KeyHasher<K> for SipKeyHasher {
        fn hash_key(&self, key: &K) -> u64 {
            let mut hasher = SipHasher::new_with_keys(self.k1, self.k2);
            key.hash(&mut hasher);
            hasher.finish()
        }
    }

    impl Default for SipKeyHasher {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k1: rng.try_next_u64().unwrap_or(0),
                k2: rng.try_next_u64().unwrap_or(0),
            }
        }
    }

    #[test]
    fn test_new_and_with_hasher() {
        let map: HashMap<i32, String, SipKeyHasher> = HashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.bucket_count(), 16);

        let map2 = HashMap::<i32, String, _>::with_hasher(SipKeyHasher::default());
        assert!(map2.is_empty());
        assert_eq!(map2.load_factor(), 1.0);
    }

    #[test]
    fn test_with_capacity() {
        let map: HashMap<i32, String, SipKeyHasher> = HashMap::with_capacity(100);
        assert!(map.capacity() >= 100);
        assert_eq!(map.bucket_count(), 128);

        let map2 =
            HashMap::<i32, String, _>::with_capacity_and_hasher(200, SipKeyHasher::default());
        assert!(map2.capacity() >= 200);
        assert!(map2.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());

        assert_eq!(map.insert(1, "hello".to_string()), None);
        assert_eq!(map.len(), 1);
        assert!(!map.is_empty());

        assert_eq!(map.get(&1), Some(&"hello".to_string()));
        assert_eq!(map.get(&2), None);

        assert_eq!(
            map.insert(1, "world".to_string()),
            Some("hello".to_string())
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"world".to_string()));
        assert!(map.contains_key(&1));
    }

    #[test]
    fn put_put_update_scenario() {
        let mut map = StringMap::new();
        assert_eq!(map.insert("a", 1), None);
        assert_eq!(map.insert("b", 2), None);
        assert_eq!(map.insert("a", 3), Some(1));
        assert_eq!(map.get(&"a"), Some(&3));

        let mut pairs = map.to_vec();
        pairs.sort();
        assert_eq!(pairs, [("a", 3), ("b", 2)]);

        assert_eq!(map.remove(&"b"), Some(2));
        assert_eq!(map.insert("c", 4), None);
        assert_eq!(map.get(&"a"), Some(&3));
        assert_eq!(map.get(&"c"), Some(&4));
        assert!(!map.contains_key(&"b"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_index() {
        let map = NumberMap::from([(1u32, "one"), (2, "two")]);
        assert_eq!(map[&1], "one");
        assert_eq!(map[&2], "two");
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_missing_key_panics() {
        let map = NumberMap::from([(1u32, "one")]);
        let _ = map[&3];
    }

    #[test]
    fn test_get_and_put() {
        let mut map = NumberMap::new();

        let (new, old) = map.get_and_put(5u64, |old| {
            assert!(old.is_none());
            10
        });
        assert_eq!(*new, 10);
        assert_eq!(old, None);

        let (new, old) = map.get_and_put(5, |old| old.copied().unwrap_or(0) + 1);
        assert_eq!(*new, 11);
        assert_eq!(old, Some(10));
        *new = 50;

        assert_eq!(map.get(&5), Some(&50));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_and_put_counts_words() {
        let text = "the quick brown fox jumps over the lazy dog the end";
        let mut counts: StringMap<&str, usize> = StringMap::new();
        for word in text.split(' ') {
            counts.get_and_put(word, |old| old.map_or(1, |n| n + 1));
        }
        assert_eq!(counts[&"the"], 3);
        assert_eq!(counts[&"fox"], 1);
        assert_eq!(counts.len(), 9);
    }

    #[test]
    fn test_get_mut() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());
        map.insert(1, "hello".to_string());

        if let Some(value) = map.get_mut(&1) {
            value.push_str(" world");
        }

        assert_eq!(map.get(&1), Some(&"hello world".to_string()));
        assert_eq!(map.get_mut(&2), None);
    }

    #[test]
    fn test_remove() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());
        map.insert(1, "hello".to_string());
        map.insert(2, "world".to_string());

        assert_eq!(map.remove(&1), Some("hello".to_string()));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key(&1));
        assert!(map.contains_key(&2));

        assert_eq!(map.remove(&1), None);
        assert_eq!(map.remove(&3), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_entry() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());
        map.insert(1, "hello".to_string());

        assert_eq!(map.remove_entry(&1), Some((1, "hello".to_string())));
        assert_eq!(map.len(), 0);
        assert_eq!(map.remove_entry(&1), None);
    }

    #[test]
    fn removed_slot_reuse_keeps_other_keys() {
        let mut map = NumberMap::new();
        for i in 0..64u32 {
            map.insert(i, i * 10);
        }
        for round in 0..64u32 {
            assert_eq!(map.remove(&round), Some(round * 10));
            map.insert(1000 + round, round);
            for i in (round + 1)..64 {
                assert_eq!(map.get(&i), Some(&(i * 10)));
            }
        }
        assert_eq!(map.len(), 64);
        assert_eq!(map.capacity(), {
            let mut fresh = NumberMap::<u32, u32>::new();
            fresh.put_all((0..64).map(|i| (i, i)));
            fresh.capacity()
        });
    }

    #[test]
    fn test_clear() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());
        map.insert(1, "hello".to_string());
        map.insert(2, "world".to_string());

        assert_eq!(map.len(), 2);
        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(!map.contains_key(&1));
        assert!(!map.contains_key(&2));
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn test_reserve() {
        let mut map = HashMap::<i32, String, _>::with_hasher(SipKeyHasher::default());
        map.insert(1, "one".to_string());

        map.reserve(1000);
        assert!(map.capacity() >= map.len() + 1000);
        assert!(map.bucket_count() >= 1001);
        assert!(map.bucket_count().is_power_of_two());
    }

    #[test]
    fn reserve_counts_removed_slots() {
        let mut map = NumberMap::new();
        for i in 0..100u32 {
            map.insert(i, i);
        }
        for i in 0..40u32 {
            map.remove(&i);
        }
        let capacity = map.capacity();
        let buckets = map.bucket_count();

        map.reserve(40);
        assert_eq!(map.capacity(), capacity);

        for i in 100..140u32 {
            map.insert(i, i);
        }
        assert_eq!(map.len(), 100);
        assert_eq!(map.capacity(), capacity);
        assert_eq!(map.bucket_count(), buckets);

        map.reserve(20);
        assert!(map.capacity() >= map.len() + 20);
        for i in 140..160u32 {
            map.insert(i, i);
        }
        assert!((40..160).all(|i| map.get(&i) == Some(&i)));
    }

    #[test]
    fn entry_upserts_in_one_walk() {
        let mut map = StringMap::new();

        assert_eq!(*map.entry("k").or_insert(1), 1);
        assert_eq!(*map.entry("k").or_insert(2), 1);
        assert_eq!(map.len(), 1);

        let mut called = false;
        map.entry("k").or_insert_with(|| {
            called = true;
            3
        });
        assert!(!called);

        map.entry("k").and_modify(|v| *v += 10).or_insert(0);
        map.entry("fresh").and_modify(|v| *v += 10).or_insert(0);
        assert_eq!(map[&"k"], 11);
        assert_eq!(map[&"fresh"], 0);

        assert_eq!(map.entry("absent").key(), &"absent");
        assert!(!map.contains_key(&"absent"));
    }

    #[test]
    fn test_entry_or_default() {
        let mut map: NumberMap<u8, Vec<u8>> = NumberMap::new();

        map.entry(1).or_default().push(42);
        map.entry(1).or_default().push(24);
        assert_eq!(map.get(&1), Some(&vec![42, 24]));
    }

    #[test]
    fn occupied_entry_remove_frees_slot_for_reuse() {
        let mut map = NumberMap::new();
        for k in [10u32, 20, 30] {
            map.insert(k, k.to_string());
        }
        let capacity = map.capacity();

        match map.entry(20) {
            Entry::Occupied(mut entry) => {
                assert_eq!(entry.key(), &20);
                entry.get_mut().push('!');
                assert_eq!(entry.insert("x".to_string()), "20!");
                assert_eq!(entry.remove_entry(), (20, "x".to_string()));
            }
            Entry::Vacant(_) => panic!("Expected occupied entry"),
        }
        assert_eq!(map.len(), 2);

        match map.entry(40) {
            Entry::Vacant(entry) => {
                entry.insert("40".to_string());
            }
            Entry::Occupied(_) => panic!("Expected vacant entry"),
        }

        let keys: Vec<u32> = map.keys().copied().collect();
        assert_eq!(keys, [10, 40, 30]);
        assert_eq!(map.capacity(), capacity);
    }

    #[test]
    fn entry_remove_in_middle_of_chain() {
        let mut map = HashMap::with_hasher(|_: &u8| 3u64);
        for k in 0..5u8 {
            map.insert(k, k);
        }

        match map.entry(2) {
            Entry::Occupied(entry) => assert_eq!(entry.remove(), 2),
            Entry::Vacant(_) => panic!("Expected occupied entry"),
        }
        for k in [0u8, 1, 3, 4] {
            assert_eq!(map.get(&k), Some(&k));
        }
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn vacant_entry_returns_key_without_inserting() {
        let mut map: StringMap<String, u8> = StringMap::new();

        match map.entry("owned".to_string()) {
            Entry::Vacant(entry) => assert_eq!(entry.into_key(), "owned"),
            Entry::Occupied(_) => panic!("Expected vacant entry"),
        }
        assert!(map.is_empty());

        match map.entry("owned".to_string()) {
            Entry::Vacant(entry) => *entry.insert(1) += 1,
            Entry::Occupied(_) => panic!("Expected vacant entry"),
        }
        assert_eq!(map.get(&"owned".to_string()), Some(&2));
    }

    #[test]
    fn float_keys() {
        let mut map: NumberMap<f64, &str> = NumberMap::new();
        assert_eq!(map.insert(1.5, "one and a half"), None);
        assert_eq!(map.insert(0.0, "zero"), None);
        assert_eq!(map.insert(-0.0, "negative zero"), Some("zero"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1.5), Some(&"one and a half"));
        assert_eq!(map[&0.0], "negative zero");

        // 1.25 truncates to the same hash as 1.5 and shares its chain.
        assert_eq!(map.get(&1.25), None);
        map.insert(1.25, "one and a quarter");
        assert_eq!(map.remove(&1.5), Some("one and a half"));
        assert_eq!(map.get(&1.25), Some(&"one and a quarter"));

        map.insert(f64::NAN, "nan");
        assert_eq!(map.get(&f64::NAN), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn iterator_adapters_report_exact_len() {
        let mut map: NumberMap<u8, u8> = (0..6).map(|i| (i, i)).collect();
        map.remove(&2);

        assert_eq!(map.keys().len(), 5);
        assert_eq!(map.values().len(), 5);
        assert_eq!(map.values_mut().len(), 5);

        let mut keys = map.keys().fuse();
        assert_eq!(keys.by_ref().count(), 5);
        assert_eq!(keys.next(), None);

        let mut drain = map.drain();
        assert_eq!(drain.len(), 5);
        drain.next();
        assert_eq!(drain.len(), 4);
        drop(drain);
        assert!(map.is_empty());
    }

    #[test]
    fn test_iterators() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        let pairs: std::collections::HashMap<i32, String> =
            map.iter().map(|(k, v)| (*k, v.clone())).collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.get(&1), Some(&"one".to_string()));
        assert_eq!(pairs.get(&3), Some(&"three".to_string()));

        let keys: std::collections::HashSet<i32> = map.keys().copied().collect();
        assert_eq!(keys, [1, 2, 3].into_iter().collect());

        let values: std::collections::HashSet<String> = map.values().cloned().collect();
        assert!(values.contains("two"));

        for value in map.values_mut() {
            value.push('!');
        }
        for (_, value) in &mut map {
            value.push('?');
        }
        assert_eq!(map.get(&2), Some(&"two!?".to_string()));
        assert_eq!(map.iter().len(), 3);
    }

    #[test]
    fn iteration_order_is_slot_order() {
        let mut map = NumberMap::new();
        for k in [10u32, 20, 30, 40] {
            map.insert(k, ());
        }
        map.remove(&20);
        map.insert(50, ());
        map.insert(60, ());

        let keys: Vec<u32> = map.keys().copied().collect();
        assert_eq!(keys, [10, 50, 30, 40, 60]);
    }

    #[test]
    fn test_drain() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        let drained: std::collections::HashMap<i32, String> = map.drain().collect();
        assert_eq!(drained.len(), 3);
        assert!(map.is_empty());
        assert_eq!(drained.get(&2), Some(&"two".to_string()));

        map.insert(4, "four".to_string());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_into_iter_and_retain() {
        let mut map: NumberMap<u8, u8> = (0..20).map(|i| (i, i * 2)).collect();
        map.retain(|k, v| {
            *v += 1;
            k % 4 == 0
        });
        assert_eq!(map.len(), 5);
        assert_eq!(map.get(&8), Some(&17));
        assert!(!map.contains_key(&9));

        let mut pairs: Vec<(u8, u8)> = map.into_iter().collect();
        pairs.sort();
        assert_eq!(pairs, [(0, 1), (4, 9), (8, 17), (12, 25), (16, 33)]);
    }

    #[test]
    fn test_multiple_insertions() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());

        for i in 0..100 {
            map.insert(i, format!("value_{}", i));
        }

        assert_eq!(map.len(), 100);

        for i in 0..100 {
            assert_eq!(map.get(&i), Some(&format!("value_{}", i)));
        }
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn growth_keeps_every_key() {
        let mut map = NumberMap::with_capacity(10);
        for i in 0..10_000u64 {
            map.insert(i, i.wrapping_mul(31));
            assert!(map.bucket_count().is_power_of_two());
        }
        assert_eq!(map.len(), 10_000);
        for i in 0..10_000u64 {
            assert_eq!(map.get(&i), Some(&i.wrapping_mul(31)));
        }
        assert_eq!(map.iter().count(), 10_000);
    }

    #[test]
    fn test_collision_handling() {
        let mut map = HashMap::with_hasher(|_: &i32| 7u64);

        for i in 0..1000 {
            map.insert(i, i * 2);
        }

        assert_eq!(map.len(), 1000);

        for i in 0..1000 {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }

        for i in (0..1000).step_by(2) {
            assert_eq!(map.remove(&i), Some(i * 2));
        }

        assert_eq!(map.len(), 500);

        for i in (1..1000).step_by(2) {
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
    }

    #[test]
    fn test_string_keys() {
        let mut map = StringMap::new();

        map.insert("hello".to_string(), 1);
        map.insert("world".to_string(), 2);
        map.insert("rust".to_string(), 3);

        assert_eq!(map.get(&"hello".to_string()), Some(&1));
        assert_eq!(map.get(&"world".to_string()), Some(&2));
        assert_eq!(map.get(&"rust".to_string()), Some(&3));
        assert_eq!(map.get(&"missing".to_string()), None);
    }

    #[test]
    fn test_from_iter_with_hasher() {
        let pairs = vec![(1u16, 'a'), (2, 'b'), (1, 'c')];
        let map = HashMap::from_iter_with_hasher(NumberHasher, pairs);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], 'c');
        assert_eq!(map[&2], 'b');
    }

    #[test]
    fn test_extend_and_put_all() {
        let mut map = StringMap::from([("x", 1)]);
        map.extend([("y", 2), ("x", 3)]);
        map.put_all(vec![("z", 4)]);
        assert_eq!(map.len(), 3);
        assert_eq!(map[&"x"], 3);
        assert_eq!(map[&"z"], 4);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut map = NumberMap::from([(1u8, String::from("a")), (2, String::from("b"))]);
        let snapshot = map.clone();

        map.get_mut(&1).unwrap().push('!');
        map.remove(&2);
        map.insert(3, String::from("c"));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[&1], "a");
        assert_eq!(snapshot[&2], "b");
        assert!(!snapshot.contains_key(&3));
    }

    #[test]
    fn test_eq_ignores_slot_order() {
        let mut a = NumberMap::new();
        a.insert(1u8, 'a');
        a.insert(2, 'b');
        a.insert(3, 'c');
        a.remove(&1);
        a.insert(1, 'a');

        let b = NumberMap::from([(3u8, 'c'), (1, 'a'), (2, 'b')]);
        assert_eq!(a, b);

        a.insert(2, 'z');
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_trait() {
        let map: HashMap<i32, String, SipKeyHasher> = HashMap::default();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_debug_output() {
        let map = NumberMap::from([(1u8, "one")]);
        assert_eq!(format!("{map:?}"), r#"{1: "one"}"#);
    }

    #[test]
    fn test_complex_values() {
        let mut map = HashMap::with_hasher(SipKeyHasher::default());

        let vec1 = vec![1, 2, 3];
        let vec2 = vec![4, 5, 6];

        map.insert("first".to_string(), vec1.clone());
        map.insert("second".to_string(), vec2.clone());

        assert_eq!(map.get(&"first".to_string()), Some(&vec1));
        assert_eq!(map.get(&"second".to_string()), Some(&vec2));

        if let Some(v) = map.get_mut(&"first".to_string()) {
            v.push(4);
        }

        assert_eq!(map.get(&"first".to_string()), Some(&vec![1, 2, 3, 4]));
    }
}
