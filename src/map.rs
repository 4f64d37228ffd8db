//! An ordered map implemented with an AVL tree.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::ops::Index;

use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::Tree;

pub use crate::tree::{IntoIter, Iter, IterMut};

/// An ordered map implemented with an AVL tree.
///
/// Keys are unique. Inserting a key that is already present is an error;
/// use [`update`](AvlTreeMap::update) or [`get_mut`](AvlTreeMap::get_mut)
/// to change the value stored under an existing key.
///
/// ```
/// use avl_containers::AvlTreeMap;
/// let mut map = AvlTreeMap::new();
/// map.insert(0, "zero").unwrap();
/// map.insert(1, "one").unwrap();
/// map.insert(2, "two").unwrap();
/// assert!(map.insert(2, "deux").is_err());
/// assert_eq!(map.get(&1), Some(&"one"));
/// assert!(map.remove(&1));
/// assert!(map.get(&1).is_none());
/// ```
///
/// The map is not synchronized. Mutation needs `&mut self`, so sharing a map
/// between threads for writing requires an external lock.
pub struct AvlTreeMap<K, V> {
    tree: Tree<K, V>,
}

/// An iterator over the keys of a map, in ascending order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a map, in ascending key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// A mutable iterator over the values of a map, in ascending key order.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

/// A read-only view of the keys of a map.
///
/// The view borrows the map and always reads its current contents.
/// Mutating methods exist to mirror a collection interface but always
/// fail with [`Error::UnsupportedOperation`].
pub struct KeysView<'a, K, V> {
    map: &'a AvlTreeMap<K, V>,
}

/// A read-only view of the values of a map.
///
/// Like [`KeysView`], but over the values in ascending key order.
pub struct ValuesView<'a, K, V> {
    map: &'a AvlTreeMap<K, V>,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_mut(key)
    }

    /// Returns references to the key-value pair corresponding to the key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_key_value(key)
    }

    /// Returns a reference to the value corresponding to the key,
    /// or [`Error::KeyNotFound`] if there is none.
    pub fn lookup<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(key).ok_or(Error::KeyNotFound)
    }

    /// Replaces the value stored under an existing key and returns the old value.
    ///
    /// Fails with [`Error::KeyNotFound`] if the key is absent;
    /// no entry is created in that case.
    pub fn update<Q>(&mut self, key: &Q, value: V) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = self.tree.get_mut(key).ok_or(Error::KeyNotFound)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Returns true if the map contains a value for the key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains_key(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Fails with [`Error::DuplicateKey`] if the key is already present,
    /// in which case the map is left unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        self.tree.insert(key, value).map_err(|err| {
            debug!("rejected insert of duplicate key");
            err
        })
    }

    /// Removes a key from the map.
    /// Returns whether the key was previously in the map.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove_entry(key).is_some()
    }

    /// Removes a key from the map.
    /// Returns the stored key and value if the key was previously in the map.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove_entry(key)
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.tree.check_consistency()
    }
}

impl<K, V> AvlTreeMap<K, V> {
    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the height of the underlying tree, zero for an empty map.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Clears the map, deallocating all memory.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.first()
    }

    /// Returns the entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.last()
    }

    /// Gets an iterator over the entries of the map in sorted order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Gets a mutable iterator over the entries of the map in sorted order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.tree.iter_mut()
    }

    /// Gets an iterator over the keys of the map in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of the map in key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Gets a read-only view of the keys of the map.
    pub fn key_view(&self) -> KeysView<'_, K, V> {
        KeysView { map: self }
    }

    /// Gets a read-only view of the values of the map.
    pub fn value_view(&self) -> ValuesView<'_, K, V> {
        ValuesView { map: self }
    }
}

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    /// Creates an empty map.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for AvlTreeMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AvlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AvlTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for AvlTreeMap<K, V> {}

impl<K: PartialOrd, V: PartialOrd> PartialOrd for AvlTreeMap<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord> Ord for AvlTreeMap<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: Hash, V: Hash> Hash for AvlTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for entry in self {
            entry.hash(state);
        }
    }
}

impl<K, Q, V> Index<&Q> for AvlTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", Error::KeyNotFound),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    /// Builds a map from key-value pairs. A repeated key keeps the last value.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTreeMap<K, V> {
    /// Adds key-value pairs. A key that is already present has its value replaced.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            match self.tree.get_mut(&key) {
                Some(slot) => *slot = value,
                None => {
                    let inserted = self.tree.insert(key, value);
                    debug_assert!(inserted.is_ok());
                }
            }
        }
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut AvlTreeMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for AvlTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

// Auto derived clone seems to have an invalid type bound of K: Clone
impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
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

// Auto derived clone seems to have an invalid type bound of V: Clone
impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
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

fn read_only<T>(what: &str) -> Result<T> {
    debug!(view = what, "attempted mutation through read-only view");
    Err(Error::UnsupportedOperation)
}

impl<'a, K, V> KeysView<'a, K, V> {
    /// Returns the number of keys, always equal to the map's length.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Gets an iterator over the current keys in sorted order.
    pub fn iter(&self) -> Keys<'a, K, V> {
        self.map.keys()
    }

    /// Always fails, keys cannot be added through a view.
    pub fn insert(&mut self, _key: K) -> Result<()> {
        read_only("keys")
    }

    /// Always fails, keys cannot be removed through a view.
    pub fn remove<Q>(&mut self, _key: &Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: ?Sized,
    {
        read_only("keys")
    }

    /// Always fails, a view cannot clear its map.
    pub fn clear(&mut self) -> Result<()> {
        read_only("keys")
    }
}

impl<K: Ord, V> KeysView<'_, K, V> {
    /// Returns true if the key is present in the map.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }
}

impl<K, V> Clone for KeysView<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for KeysView<'_, K, V> {}

impl<K: fmt::Debug, V> fmt::Debug for KeysView<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for KeysView<'a, K, V> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> ValuesView<'a, K, V> {
    /// Returns the number of values, always equal to the map's length.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Gets an iterator over the current values in key order.
    pub fn iter(&self) -> Values<'a, K, V> {
        self.map.values()
    }

    /// Returns true if any entry of the map holds an equal value.
    /// Values are unordered, so this is a linear scan.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Always fails, values cannot be added through a view.
    pub fn insert(&mut self, _value: V) -> Result<()> {
        read_only("values")
    }

    /// Always fails, values cannot be removed through a view.
    pub fn remove(&mut self, _value: &V) -> Result<bool> {
        read_only("values")
    }

    /// Always fails, a view cannot clear its map.
    pub fn clear(&mut self) -> Result<()> {
        read_only("values")
    }
}

impl<K, V> Clone for ValuesView<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for ValuesView<'_, K, V> {}

impl<K, V: fmt::Debug> fmt::Debug for ValuesView<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for ValuesView<'a, K, V> {
    type Item = &'a V;
    type IntoIter = Values<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
