use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

/// Link value terminating a chain or the free list, and marking an empty
/// bucket.
const NIL: usize = usize::MAX;

/// Smallest bucket array ever allocated.
const MIN_BUCKETS: usize = 16;

/// Smallest entry store ever allocated.
const MIN_ENTRIES: usize = 10;

/// Average chain length above which the bucket array doubles.
pub const DEFAULT_LOAD_FACTOR: f64 = 1.0;

/// Number of buckets needed for `capacity` entries: the smallest power of two
/// not below `capacity`, and never fewer than [`MIN_BUCKETS`].
#[inline(always)]
fn buckets_for(capacity: usize) -> usize {
    capacity.max(MIN_BUCKETS).next_power_of_two()
}

/// One cell of the entry store.
///
/// A live slot holds a value, the hash it was stored under, and the index of
/// the next entry in its bucket's chain. A free slot holds no value and its
/// `next` threads the free list.
#[derive(Clone)]
struct Slot<T> {
    hash: u64,
    next: usize,
    value: Option<T>,
}

impl<T> Slot<T> {
    #[inline(always)]
    fn vacant() -> Self {
        Self {
            hash: 0,
            next: NIL,
            value: None,
        }
    }

    #[inline(always)]
    fn is_live(&self) -> bool {
        self.value.is_some()
    }
}

/// Where a lookup found its match.
#[derive(Clone, Copy)]
struct Probe {
    bucket: usize,
    prev: usize,
    index: usize,
}

/// Low-level statistics about the shape of a [`HashTable`].
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq)]
pub struct DebugStats {
    /// Number of live entries.
    pub populated: usize,
    /// Length of the bucket array.
    pub bucket_count: usize,
    /// Buckets with a non-empty chain.
    pub occupied_buckets: usize,
    /// Slots the entry store can hold before reallocating.
    pub entry_capacity: usize,
    /// Slots ever appended, live or free.
    pub append_count: usize,
    /// Slots currently on the free list.
    pub free_count: usize,
    /// Length of the longest chain.
    pub longest_chain: usize,
    /// Average chain length over all buckets (populated / bucket_count).
    pub load_factor: f64,
    /// Entry store utilization (populated / entry_capacity).
    pub slot_utilization: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {} in {} buckets ({:.2} average chain length)",
            self.populated, self.bucket_count, self.load_factor
        );
        println!(
            "Buckets: {}/{} non-empty, longest chain {}",
            self.occupied_buckets, self.bucket_count, self.longest_chain
        );
        println!(
            "Slots: {}/{} appended, {} free ({:.2}% utilization)",
            self.append_count,
            self.entry_capacity,
            self.free_count,
            self.slot_utilization * 100.0
        );
    }
}

/// A separately chained hash table whose chains live in a single entry array.
///
/// `HashTable<T>` stores values of type `T`. Like other raw tables, it does not
/// hash anything itself: every operation takes the value's hash and an
/// equality predicate. [`HashMap`](crate::HashMap) and
/// [`HashSet`](crate::HashSet) wrap it with a hasher.
///
/// Internally there are two arrays:
///
/// - a bucket array, always a power of two long, holding the index of the
///   first entry of each chain;
/// - an entry store, where every entry records its hash and the index of the
///   next entry in the same chain. Removed entries are threaded onto a free
///   list through the same link and are reused before the store grows.
///
/// Entries never move: growing the store keeps every index, and growing the
/// bucket array only relinks chains. Iteration walks the entry store in index
/// order.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::with_capacity(100);
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
///
/// assert_eq!(table.find(hash, |p| p.id == 123).map(|p| p.name.as_str()), Some("Alice"));
/// ```
pub struct HashTable<T> {
    buckets: Vec<usize>,
    entries: Vec<Slot<T>>,

    free_head: usize,
    free_len: usize,

    load_factor: f64,
}

impl<T> Debug for HashTable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::String;
        use alloc::string::ToString;

        let link = |i: usize| -> String {
            if i == NIL {
                "-".to_string()
            } else {
                format!("{i}")
            }
        };

        f.debug_struct("HashTable")
            .field(
                "buckets",
                &self
                    .buckets
                    .chunks(16)
                    .map(|row| row.iter().map(|&b| link(b)).collect::<Vec<_>>().join(", "))
                    .collect::<Vec<_>>(),
            )
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .enumerate()
                    .map(|(i, slot)| {
                        if slot.is_live() {
                            format!("{i:>4}: {:016x} -> {}", slot.hash, link(slot.next))
                        } else {
                            format!("{i:>4}: free -> {}", link(slot.next))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
            .field("free_head", &link(self.free_head))
            .field("populated", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Clone for HashTable<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // `Vec::clone` would trim the spare capacity; keep the store the same
        // size so the copy grows on the same schedule.
        let mut entries = Vec::with_capacity(self.entries.capacity());
        entries.extend(self.entries.iter().cloned());

        Self {
            buckets: self.buckets.clone(),
            entries,
            free_head: self.free_head,
            free_len: self.free_len,
            load_factor: self.load_factor,
        }
    }
}

impl<T> Default for HashTable<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<T> HashTable<T> {
    /// Creates a new hash table with room for at least `capacity` values.
    ///
    /// The bucket array starts at the smallest power of two not below
    /// `capacity` (at least 16), and the entry store holds at least
    /// `max(capacity, 10)` values before it reallocates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert!(table.capacity() >= 100);
    /// assert_eq!(table.bucket_count(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a new hash table with the given capacity and load factor.
    ///
    /// The load factor is the average chain length the table tolerates before
    /// doubling its bucket array.
    ///
    /// # Panics
    ///
    /// Panics if `load_factor` is not a finite number greater than zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u32> = HashTable::with_capacity_and_load_factor(0, 0.75);
    /// assert_eq!(table.load_factor(), 0.75);
    /// ```
    pub fn with_capacity_and_load_factor(capacity: usize, load_factor: f64) -> Self {
        assert!(
            load_factor.is_finite() && load_factor > 0.0,
            "load factor must be finite and positive, got {load_factor}"
        );

        Self {
            buckets: vec![NIL; buckets_for(capacity)],
            entries: Vec::with_capacity(capacity.max(MIN_ENTRIES)),
            free_head: NIL,
            free_len: 0,
            load_factor,
        }
    }

    /// Returns an iterator over all values in the table.
    ///
    /// Values are yielded in entry-store order: the order of the slots they
    /// occupy, not the order they were inserted in. A value inserted after a
    /// removal may reuse the removed value's slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(1, |&v: &u32| v == 10).or_insert(10);
    /// table.entry(2, |&v: &u32| v == 20).or_insert(20);
    ///
    /// let values: Vec<u32> = table.iter().copied().collect();
    /// assert_eq!(values, [10, 20]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.entries.iter(),
            remaining: self.len(),
        }
    }

    /// Returns an iterator yielding mutable references to all values.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let remaining = self.len();
        IterMut {
            slots: self.entries.iter_mut(),
            remaining,
        }
    }

    /// Returns an iterator that removes and yields all values from the table.
    ///
    /// The table is empty as soon as `drain` returns, and keeps both of its
    /// allocations. Values not consumed by the iterator are dropped with it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(7, |&v: &u8| v == 1).or_insert(1);
    ///
    /// let values: Vec<u8> = table.drain().collect();
    /// assert!(table.is_empty());
    /// assert_eq!(values, [1]);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        let remaining = self.len();
        self.buckets.fill(NIL);
        self.free_head = NIL;
        self.free_len = 0;

        Drain {
            slots: self.entries.drain(..),
            remaining,
        }
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the table.
    ///
    /// This is the number of slots ever appended minus the number currently
    /// on the free list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// assert_eq!(table.len(), 0);
    ///
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// assert_eq!(table.len(), 1);
    ///
    /// table.remove(1, |&n| n == 1);
    /// assert_eq!(table.len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        self.entries.len() - self.free_len
    }

    /// Returns the number of values the table can hold before the entry store
    /// reallocates.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the length of the bucket array. Always a power of two.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the average chain length above which the bucket array doubles.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Removes all elements from the table.
    ///
    /// Neither the bucket array nor the entry store shrinks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// table.entry(2, |&n: &u64| n == 2).or_insert(2);
    /// let capacity = table.capacity();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.buckets.fill(NIL);
        self.entries.clear();
        self.free_head = NIL;
        self.free_len = 0;
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// Free slots count towards the reservation. The bucket array is grown
    /// as if `len() + additional` values had been inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<i32> = HashTable::with_capacity(0);
    /// table.reserve(1000);
    /// assert!(table.capacity() >= 1000);
    /// assert!(table.bucket_count() >= 1000);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len().saturating_add(additional);
        self.grow_buckets(required);
        self.entries
            .reserve_exact(additional.saturating_sub(self.free_len));
    }

    /// Returns a reference to the value matching `hash` and `eq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(42, |&(k, _): &(u8, u32)| k == 4).or_insert((4, 400));
    ///
    /// assert_eq!(table.find(42, |&(k, _)| k == 4), Some(&(4, 400)));
    /// assert_eq!(table.find(42, |&(k, _)| k == 5), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&T) -> bool) -> Option<&T> {
        let probe = self.search(hash, eq)?;
        self.entries[probe.index].value.as_ref()
    }

    /// Returns a mutable reference to the value matching `hash` and `eq`.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&T) -> bool) -> Option<&mut T> {
        let probe = self.search(hash, eq)?;
        self.entries[probe.index].value.as_mut()
    }

    /// Removes and returns the value matching `hash` and `eq`.
    ///
    /// The freed slot goes to the head of the free list and is the next one
    /// reused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(99, |&n| n == 99), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&T) -> bool) -> Option<T> {
        let probe = self.search(hash, eq)?;
        Some(self.unlink(probe))
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// The lookup is done once; inserting through the returned
    /// [`VacantEntry`] does not search again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    ///
    /// match table.entry(5, |s: &String| s == "hello") {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     Entry::Occupied(mut entry) => {
    ///         entry.get_mut().push('!');
    ///     }
    /// }
    ///
    /// table
    ///     .entry(5, |s: &String| s == "hello")
    ///     .and_modify(|s| s.push('!'));
    /// assert_eq!(table.find(5, |s| s.starts_with("hello")).unwrap(), "hello!");
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&T) -> bool) -> Entry<'_, T> {
        match self.search(hash, eq) {
            Some(probe) => Entry::Occupied(OccupiedEntry { table: self, probe }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Retains only the values for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    /// for i in 0..10u64 {
    ///     table.entry(i, |&v| v == i).or_insert(i);
    /// }
    ///
    /// table.retain(|v| *v % 2 == 0);
    /// assert_eq!(table.len(), 5);
    /// ```
    pub fn retain(&mut self, mut f: impl FnMut(&mut T) -> bool) {
        for bucket in 0..self.buckets.len() {
            let mut prev = NIL;
            let mut index = self.buckets[bucket];
            while index != NIL {
                let next = self.entries[index].next;
                let keep = self.entries[index].value.as_mut().is_some_and(&mut f);
                if keep {
                    prev = index;
                } else {
                    drop(self.unlink(Probe {
                        bucket,
                        prev,
                        index,
                    }));
                }
                index = next;
            }
        }
    }

    #[inline(always)]
    fn bucket_of(&self, hash: u64) -> usize {
        debug_assert!(self.buckets.len().is_power_of_two());
        hash as usize & (self.buckets.len() - 1)
    }

    /// Walks the chain for `hash`, returning the matching slot and its
    /// predecessor in the chain.
    fn search(&self, hash: u64, eq: impl Fn(&T) -> bool) -> Option<Probe> {
        let bucket = self.bucket_of(hash);
        let mut prev = NIL;
        let mut index = self.buckets[bucket];
        while index != NIL {
            let slot = &self.entries[index];
            debug_assert!(slot.is_live(), "free slot {index} linked into a chain");
            if slot.hash == hash && slot.value.as_ref().is_some_and(&eq) {
                return Some(Probe {
                    bucket,
                    prev,
                    index,
                });
            }
            prev = index;
            index = slot.next;
        }
        None
    }

    /// Splices the probed slot out of its chain, pushes it onto the free list
    /// and returns its value.
    fn unlink(&mut self, probe: Probe) -> T {
        let Probe {
            bucket,
            prev,
            index,
        } = probe;

        let next = self.entries[index].next;
        if prev == NIL {
            self.buckets[bucket] = next;
        } else {
            self.entries[prev].next = next;
        }

        let slot = core::mem::replace(
            &mut self.entries[index],
            Slot {
                hash: 0,
                next: self.free_head,
                value: None,
            },
        );
        self.free_head = index;
        self.free_len += 1;

        match slot.value {
            Some(value) => value,
            None => unreachable!("slot {index} was linked into a chain but free"),
        }
    }

    /// Stores `value` under `hash` in a fresh slot and makes it the head of
    /// its chain.
    fn insert_new(&mut self, hash: u64, value: T) -> usize {
        let index = self.acquire_slot();
        let bucket = self.bucket_of(hash);

        let slot = &mut self.entries[index];
        slot.hash = hash;
        slot.next = self.buckets[bucket];
        slot.value = Some(value);
        self.buckets[bucket] = index;

        index
    }

    /// Pops the free list, or appends a new slot after growing whatever needs
    /// to grow.
    fn acquire_slot(&mut self) -> usize {
        if self.free_head != NIL {
            let index = self.free_head;
            self.free_head = self.entries[index].next;
            self.free_len -= 1;
            return index;
        }

        self.grow(self.len() + 1);
        self.entries.push(Slot::vacant());
        self.entries.len() - 1
    }

    fn grow(&mut self, new_len: usize) {
        self.grow_buckets(new_len);

        if self.entries.len() == self.entries.capacity() {
            let old = self.entries.capacity();
            self.entries.reserve_exact((old >> 1).max(1));
        }
    }

    /// Doubles the bucket array until `new_len` values fit under the load
    /// factor, then relinks every live entry.
    fn grow_buckets(&mut self, new_len: usize) {
        let mut bucket_count = self.buckets.len();
        while new_len as f64 / bucket_count as f64 > self.load_factor {
            bucket_count *= 2;
        }

        if bucket_count != self.buckets.len() {
            self.rehash(bucket_count);
        }
    }

    fn rehash(&mut self, bucket_count: usize) {
        debug_assert!(bucket_count.is_power_of_two());

        let mut buckets = vec![NIL; bucket_count];
        let mask = bucket_count - 1;
        for (index, slot) in self.entries.iter_mut().enumerate() {
            if slot.is_live() {
                let bucket = slot.hash as usize & mask;
                slot.next = buckets[bucket];
                buckets[bucket] = index;
            }
        }
        self.buckets = buckets;
    }

    /// Returns the number of chains of each length.
    ///
    /// Index `n` of the result counts the buckets whose chain has exactly `n`
    /// entries; index 0 counts empty buckets.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let mut hist = vec![0usize; 1];
        for &head in &self.buckets {
            let mut length = 0;
            let mut index = head;
            while index != NIL {
                length += 1;
                index = self.entries[index].next;
            }
            if hist.len() <= length {
                hist.resize(length + 1, 0);
            }
            hist[length] += 1;
        }
        hist
    }

    /// Returns detailed utilization statistics for debugging.
    ///
    /// Available in tests and with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let hist = self.chain_histogram();
        let populated = self.len();
        let entry_capacity = self.capacity();

        DebugStats {
            populated,
            bucket_count: self.buckets.len(),
            occupied_buckets: self.buckets.len() - hist[0],
            entry_capacity,
            append_count: self.entries.len(),
            free_count: self.free_len,
            longest_chain: hist.len() - 1,
            load_factor: populated as f64 / self.buckets.len() as f64,
            slot_utilization: if entry_capacity == 0 {
                0.0
            } else {
                populated as f64 / entry_capacity as f64
            },
        }
    }

    /// Pretty-prints the chain-length histogram horizontally using stdout.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_histogram();
        let max = hist.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!(
            "chain histogram ({} entries, {} buckets):",
            self.len(),
            self.buckets.len()
        );
        for (length, &count) in hist.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", length, "█".repeat(width), count);
        }
    }

    /// Checks every structural invariant, panicking on the first violation.
    #[cfg(test)]
    fn assert_consistent(&self) {
        assert!(self.buckets.len().is_power_of_two());

        let mut seen = vec![false; self.entries.len()];
        let mut live = 0;
        for (bucket, &head) in self.buckets.iter().enumerate() {
            let mut index = head;
            while index != NIL {
                assert!(!seen[index], "slot {index} reached twice");
                seen[index] = true;
                let slot = &self.entries[index];
                assert!(slot.is_live(), "free slot {index} in chain {bucket}");
                assert_eq!(self.bucket_of(slot.hash), bucket);
                live += 1;
                index = slot.next;
            }
        }

        let mut free = 0;
        let mut index = self.free_head;
        while index != NIL {
            assert!(!seen[index], "slot {index} is both free and chained");
            seen[index] = true;
            assert!(!self.entries[index].is_live());
            free += 1;
            index = self.entries[index].next;
        }

        assert_eq!(free, self.free_len);
        assert_eq!(live, self.len());
        assert!(seen.iter().all(|&s| s), "slot lost from every list");
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
///
/// # Examples
///
/// ```rust
/// # use chain_hash::hash_table::Entry;
/// # use chain_hash::hash_table::HashTable;
/// #
/// let mut table = HashTable::with_capacity(10);
///
/// match table.entry(3, |s: &String| s == "key") {
///     Entry::Vacant(entry) => {
///         entry.insert("key".to_string());
///     }
///     Entry::Occupied(entry) => {
///         println!("Key already exists with value: {}", entry.get());
///     }
/// }
/// ```
pub enum Entry<'a, T> {
    /// A vacant entry - no value matched
    Vacant(VacantEntry<'a, T>),
    /// An occupied entry - a value matched
    Occupied(OccupiedEntry<'a, T>),
}

impl<'a, T> Entry<'a, T> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the entry's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(10);
    ///
    /// let value = table.entry(1, |s: &String| s == "key").or_insert("key".to_string());
    /// assert_eq!(value, "key");
    ///
    /// let existing = table.entry(1, |s: &String| s == "key").or_insert("other".to_string());
    /// assert_eq!(existing, "key");
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn or_insert(self, default: T) -> &'a mut T {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the entry's value.
    pub fn or_insert_with(self, default: impl FnOnce() -> T) -> &'a mut T {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Calls `f` on the value if the entry is occupied.
    pub fn and_modify(self, f: impl FnOnce(&mut T)) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Inserts `T::default()` if the entry is vacant and returns a mutable
    /// reference to the entry's value.
    pub fn or_default(self) -> &'a mut T
    where
        T: Default,
    {
        self.or_insert_with(T::default)
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, T> {
    table: &'a mut HashTable<T>,
    hash: u64,
}

impl<'a, T> VacantEntry<'a, T> {
    /// The hash this entry was looked up with.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Inserts `value` and returns a mutable reference to it.
    ///
    /// Reuses the most recently freed slot if there is one; otherwise appends
    /// to the entry store, growing the bucket array and the store first if
    /// needed.
    pub fn insert(self, value: T) -> &'a mut T {
        let table = self.table;
        let index = table.insert_new(self.hash, value);
        match table.entries[index].value.as_mut() {
            Some(value) => value,
            None => unreachable!("slot {index} was just filled"),
        }
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, T> {
    table: &'a mut HashTable<T>,
    probe: Probe,
}

impl<'a, T> OccupiedEntry<'a, T> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &T {
        match self.table.entries[self.probe.index].value.as_ref() {
            Some(value) => value,
            None => unreachable!("occupied entry points at a free slot"),
        }
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut T {
        match self.table.entries[self.probe.index].value.as_mut() {
            Some(value) => value,
            None => unreachable!("occupied entry points at a free slot"),
        }
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut T {
        match self.table.entries[self.probe.index].value.as_mut() {
            Some(value) => value,
            None => unreachable!("occupied entry points at a free slot"),
        }
    }

    /// Replaces the value in the entry, returning the old one.
    ///
    /// The slot, its hash and its place in the chain are unchanged.
    pub fn replace(&mut self, value: T) -> T {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the value from the table and returns it.
    pub fn remove(self) -> T {
        self.table.unlink(self.probe)
    }
}

/// An iterator over the values in a [`HashTable`], in entry-store order.
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, T> {
    slots: core::slice::Iter<'a, Slot<T>>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.slots.find_map(|slot| slot.value.as_ref())?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the values in a [`HashTable`].
pub struct IterMut<'a, T> {
    slots: core::slice::IterMut<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.slots.find_map(|slot| slot.value.as_mut())?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// A draining iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`drain`] method on [`HashTable`].
///
/// [`drain`]: HashTable::drain
pub struct Drain<'a, T> {
    slots: alloc::vec::Drain<'a, Slot<T>>,
    remaining: usize,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.slots.find_map(|slot| slot.value)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

/// An owning iterator over the values of a [`HashTable`].
pub struct IntoIter<T> {
    slots: alloc::vec::IntoIter<Slot<T>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.slots.find_map(|slot| slot.value)?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for HashTable<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let remaining = self.len();
        IntoIter {
            slots: self.entries.into_iter(),
            remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a HashTable<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
