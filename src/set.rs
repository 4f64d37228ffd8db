//! An ordered set implemented with an AVL tree.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::map::{IntoIter as MapIntoIter, Iter as MapIter};
use crate::tree::Tree;

/// An ordered set implemented with an AVL tree.
///
/// ```
/// use avl_containers::AvlTreeSet;
/// let mut set = AvlTreeSet::new();
/// assert!(set.insert(0));
/// assert!(set.insert(1));
/// assert!(!set.insert(1));
/// assert_eq!(set.get(&1), Some(&1));
/// set.remove(&1);
/// assert!(!set.contains(&1));
/// ```
///
/// Set operations such as [`union`](AvlTreeSet::union) build a new set and
/// leave both operands untouched.
pub struct AvlTreeSet<T> {
    tree: Tree<T, ()>,
}

/// An iterator over the values of a set.
pub struct Iter<'a, T> {
    map_iter: MapIter<'a, T, ()>,
}

/// An owning iterator over the values of a set.
pub struct IntoIter<T> {
    map_into_iter: MapIntoIter<T, ()>,
}

impl<T: Ord> AvlTreeSet<T> {
    /// Creates an empty set.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    /// Returns a reference to the value in the set that is equal to the given value.
    ///
    /// The value may be any borrowed form of the set's value type, but the ordering
    /// on the borrowed form *must* match the ordering on the value type.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_key_value(value).map(|(k, _)| k)
    }

    /// Returns true if the set contains a value.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains_key(value)
    }

    /// Inserts a value into the set.
    /// Returns whether the value was newly inserted; a duplicate is not an error.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value, ()).is_ok()
    }

    /// Removes a value from the set.
    /// Returns whether the value was previously in the set.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove_entry(value).is_some()
    }

    /// Removes a value from the set.
    /// Returns the value if it was previously in the set.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove_entry(value).map(|(k, _)| k)
    }

    /// Returns `true` if every value of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|value| other.contains(value))
    }

    /// Returns `true` if every value of `other` is also in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and the sets are not equal.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and the sets are not equal.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if `self` has no elements in common with `other`.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = Self::by_len(self, other);
        !smaller.iter().any(|value| larger.contains(value))
    }

    /// Removes every value that is also in `other`.
    pub fn except_with(&mut self, other: &Self) {
        for value in other {
            self.remove(value);
        }
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.tree.check_consistency()
    }

    fn by_len<'a>(lhs: &'a Self, rhs: &'a Self) -> (&'a Self, &'a Self) {
        if lhs.len() <= rhs.len() {
            (lhs, rhs)
        } else {
            (rhs, lhs)
        }
    }
}

impl<T: Ord + Clone> AvlTreeSet<T> {
    /// Returns a new set with all values that are in `self` or `other`.
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = Self::by_len(self, other);
        let mut set = larger.clone();
        set.union_with(smaller);
        set
    }

    /// Returns a new set with the values that are both in `self` and `other`.
    /// Iterates the smaller set and probes the larger one.
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = Self::by_len(self, other);
        smaller
            .iter()
            .filter(|value| larger.contains(*value))
            .cloned()
            .collect()
    }

    /// Returns a new set with the values of `self` that are not in `other`.
    pub fn complement(&self, other: &Self) -> Self {
        self.iter()
            .filter(|value| !other.contains(*value))
            .cloned()
            .collect()
    }

    /// Returns a new set with the values that are in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut set = self.complement(other);
        set.union_with(&other.complement(self));
        set
    }

    /// Adds every value of `other` to `self`.
    pub fn union_with(&mut self, other: &Self) {
        for value in other {
            if !self.contains(value) {
                self.insert(value.clone());
            }
        }
    }

    /// Keeps only the values that are also in `other`.
    pub fn intersect_with(&mut self, other: &Self) {
        let missing: Vec<T> = self
            .iter()
            .filter(|value| !other.contains(*value))
            .cloned()
            .collect();
        for value in &missing {
            self.remove(value);
        }
    }

    /// Keeps the values that are in exactly one of `self` and `other`.
    pub fn symmetric_except_with(&mut self, other: &Self) {
        for value in other {
            if !self.remove(value) {
                self.insert(value.clone());
            }
        }
    }
}

impl<T> AvlTreeSet<T> {
    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns the height of the underlying tree, zero for an empty set.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the smallest value in the set.
    pub fn first(&self) -> Option<&T> {
        self.tree.first().map(|(k, _)| k)
    }

    /// Returns the largest value in the set.
    pub fn last(&self) -> Option<&T> {
        self.tree.last().map(|(k, _)| k)
    }

    /// Gets an iterator over the values of the set in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            map_iter: self.tree.iter(),
        }
    }
}

impl<T: Ord> Default for AvlTreeSet<T> {
    /// Creates an empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for AvlTreeSet<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for AvlTreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlTreeSet<T> {}

impl<T: PartialOrd> PartialOrd for AvlTreeSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for AvlTreeSet<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for AvlTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTreeSet<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a AvlTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for AvlTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_into_iter: self.tree.into_iter(),
        }
    }
}

impl<T: Ord> Extend<T> for AvlTreeSet<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().for_each(move |value| {
            self.insert(value);
        });
    }
}

impl<'a, T> Extend<&'a T> for AvlTreeSet<T>
where
    T: Ord + Copy,
    T: 'a,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord + Clone> BitOr<&AvlTreeSet<T>> for &AvlTreeSet<T> {
    type Output = AvlTreeSet<T>;

    /// Returns the union of `self` and `rhs` as a new set.
    fn bitor(self, rhs: &AvlTreeSet<T>) -> AvlTreeSet<T> {
        self.union(rhs)
    }
}

impl<T: Ord + Clone> BitAnd<&AvlTreeSet<T>> for &AvlTreeSet<T> {
    type Output = AvlTreeSet<T>;

    /// Returns the intersection of `self` and `rhs` as a new set.
    fn bitand(self, rhs: &AvlTreeSet<T>) -> AvlTreeSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Ord + Clone> Sub<&AvlTreeSet<T>> for &AvlTreeSet<T> {
    type Output = AvlTreeSet<T>;

    /// Returns the values of `self` that are not in `rhs` as a new set.
    fn sub(self, rhs: &AvlTreeSet<T>) -> AvlTreeSet<T> {
        self.complement(rhs)
    }
}

impl<T: Ord + Clone> BitXor<&AvlTreeSet<T>> for &AvlTreeSet<T> {
    type Output = AvlTreeSet<T>;

    /// Returns the symmetric difference of `self` and `rhs` as a new set.
    fn bitxor(self, rhs: &AvlTreeSet<T>) -> AvlTreeSet<T> {
        self.symmetric_difference(rhs)
    }
}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            map_iter: self.map_iter.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|(k, _)| k)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.map_into_iter.next().map(|(k, _)| k)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_into_iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
