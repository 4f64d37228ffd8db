//! A binary heap stored in a `Vec`, ordered either as a min-heap or a max-heap.
//!
//! The children of the element at index `i` live at `2 * i + 1` and `2 * i + 2`,
//! its parent at `(i - 1) / 2`.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// Which end of the ordering a [`Heap`] keeps at its top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapKind {
    /// The smallest element is on top.
    Min,
    /// The largest element is on top.
    Max,
}

impl HeapKind {
    /// Returns true if `a` belongs above `b`.
    fn precedes<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }
}

/// A binary heap with a configurable direction.
///
/// ```
/// use avl_containers::{Heap, HeapKind};
/// let mut heap = Heap::new(HeapKind::Min);
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Clone)]
pub struct Heap<T> {
    data: Vec<T>,
    kind: HeapKind,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty heap.
    pub fn new(kind: HeapKind) -> Self {
        Self {
            data: Vec::new(),
            kind,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(kind: HeapKind, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            kind,
        }
    }

    /// Creates a heap from the given elements in linear time.
    pub fn from_vec(kind: HeapKind, data: Vec<T>) -> Self {
        let mut heap = Self { data, kind };
        heap.heapify();
        heap
    }

    /// Adds an element to the heap.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the top element.
    /// Fails with [`Error::EmptyContainer`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T> {
        let Some(mut top) = self.data.pop() else {
            debug!("pop on empty heap");
            return Err(Error::EmptyContainer);
        };
        if !self.data.is_empty() {
            std::mem::swap(&mut top, &mut self.data[0]);
            sift_down(&mut self.data, 0, self.kind);
        }
        Ok(top)
    }

    /// Returns the top element without removing it.
    /// Fails with [`Error::EmptyContainer`] if the heap is empty.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or_else(|| {
            debug!("peek on empty heap");
            Error::EmptyContainer
        })
    }

    /// Consumes the heap and returns its elements in pop order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            sift_down(&mut self.data[..end], 0, self.kind);
        }
        // Swapping the top to the back leaves reversed pop order.
        self.data.reverse();
        self.data
    }

    fn heapify(&mut self) {
        // Leaves already satisfy the heap property.
        for index in (0..self.data.len() / 2).rev() {
            sift_down(&mut self.data, index, self.kind);
        }
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if !self.kind.precedes(&self.data[child], &self.data[parent]) {
                break;
            }
            self.data.swap(child, parent);
            child = parent;
        }
    }
}

impl<T> Heap<T> {
    /// Returns the direction of the heap.
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Discards as much spare capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |value| self.push(value));
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Heap")
            .field("kind", &self.kind)
            .field("data", &self.data)
            .finish()
    }
}

/// Sorts the slice in ascending order with heapsort.
///
/// ```
/// let mut data = [5, 1, 4, 2, 3];
/// avl_containers::heap_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// ```
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    for index in (0..data.len() / 2).rev() {
        sift_down(data, index, HeapKind::Max);
    }
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0, HeapKind::Max);
    }
}

// Moves the element at `parent` down until neither child belongs above it.
fn sift_down<T: Ord>(data: &mut [T], mut parent: usize, kind: HeapKind) {
    loop {
        let left = 2 * parent + 1;
        if left >= data.len() {
            break;
        }
        let right = left + 1;
        let mut best = left;
        if right < data.len() && kind.precedes(&data[right], &data[left]) {
            best = right;
        }
        if !kind.precedes(&data[best], &data[parent]) {
            break;
        }
        data.swap(parent, best);
        parent = best;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: i32 = 1_000;

    #[test]
    fn test_empty() {
        let mut heap = Heap::<i32>::new(HeapKind::Max);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), Err(Error::EmptyContainer));
        assert_eq!(heap.pop(), Err(Error::EmptyContainer));
        assert_eq!(heap.kind(), HeapKind::Max);
    }

    #[test]
    fn test_push_pop_min() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut values: Vec<i32> = (0..N).map(|_| rng.gen_range(0..N)).collect();

        let mut heap = Heap::new(HeapKind::Min);
        for value in &values {
            heap.push(*value);
        }
        assert_eq!(heap.len(), values.len());

        values.sort();
        for value in &values {
            assert_eq!(heap.peek(), Ok(value));
            assert_eq!(heap.pop(), Ok(*value));
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn test_push_pop_max() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut values: Vec<i32> = (0..N).map(|_| rng.gen()).collect();

        let mut heap = Heap::new(HeapKind::Max);
        heap.extend(values.iter().copied());

        values.sort_by(|a, b| b.cmp(a));
        for value in &values {
            assert_eq!(heap.pop(), Ok(*value));
        }
        assert_eq!(heap.pop(), Err(Error::EmptyContainer));
    }

    #[test]
    fn test_from_vec() {
        use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

        let mut values: Vec<i32> = (0..N).collect();
        let mut rng = StdRng::seed_from_u64(0);
        values.shuffle(&mut rng);

        let heap = Heap::from_vec(HeapKind::Min, values.clone());
        assert_eq!(heap.peek(), Ok(&0));
        assert_eq!(heap.into_sorted_vec(), (0..N).collect::<Vec<_>>());

        let heap = Heap::from_vec(HeapKind::Max, values);
        assert_eq!(heap.peek(), Ok(&(N - 1)));
        assert_eq!(heap.into_sorted_vec(), (0..N).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_clear() {
        let mut heap = Heap::with_capacity(HeapKind::Min, 8);
        assert!(heap.capacity() >= 8);
        heap.extend([3, 1, 2]);
        heap.clear();
        assert!(heap.is_empty());
        heap.shrink_to_fit();
        heap.push(7);
        assert_eq!(heap.peek(), Ok(&7));
    }

    #[test]
    fn test_heap_sort() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0);
        let mut values: Vec<i32> = (0..N).map(|_| rng.gen_range(-50..50)).collect();
        let mut expected = values.clone();
        expected.sort();

        heap_sort(&mut values);
        assert_eq!(values, expected);

        let mut empty: [i32; 0] = [];
        heap_sort(&mut empty);
        let mut single = [1];
        heap_sort(&mut single);
        assert_eq!(single, [1]);
    }
}
