//! Ordered containers built on a height-balanced (AVL) binary search tree,
//! a binary heap, and a priority queue built on that heap.
//!
//! [`AvlTreeMap`] and [`AvlTreeSet`] share one tree engine. Every node keeps
//! a link to its parent, so rebalancing after an insert or remove walks
//! straight up from the changed node to the root. Iteration uses an explicit
//! stack bounded by the tree height.
//!
//! None of the containers are synchronized; concurrent mutation has to be
//! guarded by the caller, which the borrow checker enforces.

mod error;
mod heap;
pub mod map;
mod priority_queue;
pub mod set;
mod tree;

pub use error::{Error, Result};
pub use heap::{heap_sort, Heap, HeapKind};
pub use map::AvlTreeMap;
pub use priority_queue::PriorityQueue;
pub use set::AvlTreeSet;
