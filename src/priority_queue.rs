//! A priority queue that keeps first-in, first-out order among values of
//! equal priority.
//!
//! Every distinct priority sits once in a max-[`Heap`], and owns a
//! `VecDeque` bucket of the values queued under it. A priority leaves the
//! heap exactly when its bucket runs empty.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::iter::FromIterator;

use tracing::trace;

use crate::error::{Error, Result};
use crate::heap::{Heap, HeapKind};

/// A queue that yields values by descending priority, and in insertion
/// order within one priority.
///
/// ```
/// use avl_containers::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.push("low", 1);
/// queue.push("high", 5);
/// queue.push("also high", 5);
/// assert_eq!(queue.peek(), Ok(&"high"));
/// assert_eq!(queue.pop(), Ok("high"));
/// assert_eq!(queue.pop(), Ok("also high"));
/// assert_eq!(queue.pop(), Ok("low"));
/// assert!(queue.pop().is_err());
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T> {
    priorities: Heap<i32>,
    buckets: BTreeMap<i32, VecDeque<T>>,
    len: usize,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            priorities: Heap::new(HeapKind::Max),
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    /// Creates a queue holding all `values` under one `priority`.
    pub fn from_values<I>(values: I, priority: i32) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Self::new();
        for value in values {
            queue.push(value, priority);
        }
        queue
    }

    /// Creates a queue from groups of values in descending priority.
    /// The first group is queued under `starting_priority`, each following
    /// group one below the previous, bottoming out at `i32::MIN`.
    pub fn from_groups<I, G>(groups: I, starting_priority: i32) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = T>,
    {
        let mut queue = Self::new();
        let mut priority = starting_priority;
        for group in groups {
            for value in group {
                queue.push(value, priority);
            }
            priority = priority.saturating_sub(1);
        }
        queue
    }

    /// Queues `value` behind every value already queued at `priority`.
    pub fn push(&mut self, value: T, priority: i32) {
        self.buckets
            .entry(priority)
            .or_insert_with(|| {
                trace!(priority, "new priority");
                self.priorities.push(priority);
                VecDeque::new()
            })
            .push_back(value);
        self.len += 1;
    }

    /// Removes the oldest value of the highest priority.
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T> {
        let priority = *self.priorities.peek()?;
        let Entry::Occupied(mut bucket) = self.buckets.entry(priority) else {
            return Err(Error::EmptyContainer);
        };
        let value = bucket.get_mut().pop_front().ok_or(Error::EmptyContainer)?;
        if bucket.get().is_empty() {
            bucket.remove();
            self.priorities.pop()?;
            trace!(priority, "priority drained");
        }
        self.len -= 1;
        Ok(value)
    }

    /// Returns the value [`pop`](Self::pop) would remove next.
    /// Fails with [`Error::EmptyContainer`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        let priority = self.priorities.peek()?;
        self.buckets
            .get(priority)
            .and_then(VecDeque::front)
            .ok_or(Error::EmptyContainer)
    }

    /// Returns the highest priority currently queued.
    pub fn peek_priority(&self) -> Option<i32> {
        self.priorities.peek().ok().copied()
    }

    /// Returns the number of queued values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no values are queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.priorities.clear();
        self.buckets.clear();
        self.len = 0;
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(T, i32)> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, i32)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<(T, i32)> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = (T, i32)>>(&mut self, iter: I) {
        iter.into_iter()
            .for_each(move |(value, priority)| self.push(value, priority));
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.buckets.iter().rev()).finish()
    }
}
