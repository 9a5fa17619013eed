use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{Index, IndexMut};
use std::{cmp, iter, mem};

use log::{debug, trace};

use super::{IntoKeys, IntoValues, Iter, IterMut, KeyNotFound, Keys, Values, ValuesMut};
use crate::util::fmt::DebugChain;

/// The number of slots a HashTable starts with, unless constructed with another capacity. Clearing
/// a HashTable always returns it to this capacity.
pub const DEFAULT_CAP: usize = 31;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// The table grows before an insertion once it holds this many entries per slot.
const GROW_LOAD: usize = 10;
/// The table shrinks after a removal once it holds this many (or fewer) entries per slot.
const SHRINK_LOAD: usize = 2;

/// Keeps the low 31 bits of a hash, so that slot indices are derived from a non-negative value.
const HASH_MASK: u64 = 0x7fff_ffff;

/// A map of keys to values which relies on the keys implementing [`Hash`], resolving collisions by
/// separate chaining.
///
/// Each slot holds a chain of key-value pairs, in insertion order. The number of slots is adjusted
/// automatically to keep the load factor (entries per slot) roughly between 2 and 10: the table
/// doubles its capacity before an insertion when there are `10 * cap` entries, and halves it after
/// any removal that leaves `2 * cap` entries or fewer. Every resize rebuilds the whole table.
///
/// Note that the shrink check runs after every successful removal, so a table close to the lower
/// threshold will halve its capacity on the next removal, even if it was only just grown.
///
/// It is a logic error for keys in a HashTable to be manipulated in a way that changes their hash.
/// Because of this, HashTable's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)`** |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`*, `O(n)`** |
/// | `contains` | `O(1)`* |
/// | `resize` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Lookups scan a single chain, which the load factor bounds to a handful of entries on
/// average. Many colliding keys will lengthen the chain they share.
///
/// \** If the insertion or removal crosses a load factor threshold, the table is rebuilt.
#[derive(Clone)]
pub struct HashTable<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) slots: Box<[Chain<K, V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Chain<K, V> = Vec<(K, V)>;

/// Allocates `cap` empty chains.
fn empty_slots<K, V>(cap: usize) -> Box<[Chain<K, V>]> {
    iter::repeat_with(Vec::new).take(cap).collect()
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashTable<K, V, B> {
    /// Creates a new, empty HashTable with [`DEFAULT_CAP`] slots and the default value for `B`.
    pub fn new() -> HashTable<K, V, B> {
        HashTable::with_cap(DEFAULT_CAP)
    }

    /// Creates a new, empty HashTable with the provided `cap`acity (at least 1) and the default
    /// hasher.
    pub fn with_cap(cap: usize) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Creates a new, empty HashTable with [`DEFAULT_CAP`] slots and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashTable<K, V, B> {
        HashTable::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new, empty HashTable with the provided `cap`acity and `hasher`. A capacity of 0 is
    /// raised to 1, because every key needs a slot.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashTable<K, V, B> {
        HashTable {
            slots: empty_slots(cmp::max(cap, MIN_CAP)),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashTable, the number of slots (chains) it has.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the index of the slot that the provided `key` belongs in. The result only depends on
    /// the key, the hasher and the current capacity.
    pub fn slot_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let masked = self.hasher.hash_one(key) & HASH_MASK;
        // The capacity is never 0, so this can't divide by zero.
        (masked % self.cap() as u64) as usize
    }

    /// Inserts the provided `key`-`value` pair into the HashTable, growing it first if it is at
    /// its upper load factor. If the key was already associated with a value, the value is
    /// replaced in place and the previous one is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// This is also the way to write through a key: `table[&key] = value` only updates existing
    /// entries, so new keys have to be added here (or with [`Extend`]).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.grow();
        }

        let index = self.slot_index(&key);
        let chain = &mut self.slots[index];

        if let Some(existing) = chain.iter_mut().find(|entry| entry.0 == key) {
            return Some(mem::replace(&mut existing.1, value));
        }

        chain.push((key, value));
        self.len += 1;
        None
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q is a borrowed form of K, which hashes and compares the same way.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots[self.slot_index(key)]
            .iter()
            .find(|entry| entry.0.borrow() == key)
            .map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the table
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// table contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.slot_index(key);

        self.slots[index]
            .iter_mut()
            .find(|entry| entry.0.borrow() == key)
            .map(|entry| &mut entry.1)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry associated with `key` and returns it, or [`KeyNotFound`] if there is no
    /// such entry (in which case the table is left untouched).
    ///
    /// After a successful removal, the table is halved if it holds `2 * cap` entries or fewer.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.slot_index(key);
        let chain = &mut self.slots[index];

        let position = chain.iter()
            .position(|entry| entry.0.borrow() == key)
            .ok_or(KeyNotFound)?;

        // Vec::remove shifts the rest of the chain left, keeping insertion order.
        let removed = chain.remove(position);
        self.len -= 1;

        if self.should_shrink() {
            self.shrink();
        }

        Ok(removed)
    }

    /// Removes the entry associated with `key`, returning its value, or [`KeyNotFound`] if there
    /// is no such entry.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Rebuilds the HashTable with `new_cap` slots (or 1, if `new_cap` is 0), re-inserting every
    /// entry. Chains are drained in slot order, so entries that share a chain after the rebuild
    /// keep their relative order.
    ///
    /// Re-insertion goes through [`HashTable::insert`], so a `new_cap` too small for the current
    /// entries keeps growing the table during the rebuild, until it is below its upper load
    /// factor again.
    ///
    /// This happens automatically when inserting or removing, but can also be done manually.
    pub fn resize(&mut self, new_cap: usize) {
        let new_cap = cmp::max(new_cap, MIN_CAP);

        debug!(
            "Rebuilding HashTable with {} entries: {} -> {} slots",
            self.len, self.cap(), new_cap
        );

        // The new slots are fully allocated before the old ones are taken.
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_cap));
        self.len = 0;

        for (key, value) in old_slots.into_vec().into_iter().flatten() {
            self.insert(key, value);
        }
    }

    /// Removes every entry and returns the HashTable to [`DEFAULT_CAP`] slots, regardless of the
    /// capacity it was constructed with. The hasher is kept.
    pub fn clear(&mut self) {
        self.slots = empty_slots(DEFAULT_CAP);
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashTable, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the HashTable, with mutable references to
    /// the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashTable, as references. Keys are produced in
    /// slot order, then in insertion order within each slot, which isn't preserved across resizes.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashTable, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Returns an iterator over all values in the HashTable, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Determines whether the HashTable has reached its upper load factor, suggesting that it
    /// should grow before inserting new entries.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= GROW_LOAD * self.cap()
    }

    /// Determines whether the HashTable is at or below its lower load factor.
    pub(crate) fn should_shrink(&self) -> bool {
        self.len <= SHRINK_LOAD * self.cap()
    }

    /// Grows the HashTable by the growth factor.
    pub(crate) fn grow(&mut self) {
        trace!("HashTable reached {} entries in {} slots, growing", self.len, self.cap());
        self.resize(self.cap() * GROWTH_FACTOR)
    }

    /// Shrinks the HashTable by the growth factor, down to a minimum of 1 slot.
    pub(crate) fn shrink(&mut self) {
        trace!("HashTable dropped to {} entries in {} slots, shrinking", self.len, self.cap());
        self.resize(self.cap() / GROWTH_FACTOR)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashTable<K, V, B> {
    fn default() -> Self {
        HashTable::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashTable<K, V, B> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashTable<K, V, B> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = HashTable::new();
        table.extend(iter);
        table
    }
}

/// Two HashTables are equal if they contain the same keys, associated with equal values. Capacity
/// and the layout of the chains are ignored.
impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashTable<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashTable<K, V, B> {}

impl<K, V, B, Q> Index<&Q> for HashTable<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if the HashTable doesn't contain `key`. Use [`HashTable::get`] to handle that case.
    fn index(&self, key: &Q) -> &Self::Output {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", KeyNotFound),
        }
    }
}

impl<K, V, B, Q> IndexMut<&Q> for HashTable<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    /// Returns a mutable reference to the value associated with `key`. New keys can't be added
    /// through indexing, use [`HashTable::insert`] instead.
    ///
    /// # Panics
    /// Panics if the HashTable doesn't contain `key`.
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("{}", KeyNotFound),
        }
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field(
                "slots",
                &self.slots.iter().map(|chain| DebugChain(chain)).collect::<Vec<_>>()
            )
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter().map(|(k, v)| (k, v))).finish()
    }
}
