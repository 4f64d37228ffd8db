//! The AVL tree engine shared by [`AvlTreeMap`](crate::AvlTreeMap) and
//! [`AvlTreeSet`](crate::AvlTreeSet).
//!
//! Nodes are heap allocated and linked with raw pointers. The `left` and
//! `right` links own their subtrees; the `parent` link is a plain back
//! reference used to walk up the tree when rebalancing.

use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::error::{Error, Result};

pub(crate) struct Tree<K, V> {
    root: Link<K, V>,
    num_nodes: usize,
    marker: PhantomData<Box<Node<K, V>>>,
}

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
    parent: Link<K, V>,
    height: usize,
}

type NodePtr<K, V> = NonNull<Node<K, V>>;
type Link<K, V> = Option<NodePtr<K, V>>;

/// An iterator over the entries of a tree, in ascending key order.
pub struct Iter<'a, K, V> {
    stack: Vec<NodePtr<K, V>>,
    len: usize,
    marker: PhantomData<&'a Node<K, V>>,
}

/// A mutable iterator over the entries of a tree, in ascending key order.
pub struct IterMut<'a, K, V> {
    stack: Vec<NodePtr<K, V>>,
    len: usize,
    marker: PhantomData<&'a mut Node<K, V>>,
}

/// An owning iterator over the entries of a tree, in ascending key order.
pub struct IntoIter<K, V> {
    stack: Vec<NodePtr<K, V>>,
    len: usize,
    marker: PhantomData<Box<Node<K, V>>>,
}

#[allow(clippy::enum_variant_names)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

// The tree exclusively owns its nodes, so it may cross threads like a `Box` would.
unsafe impl<K: Send, V: Send> Send for Tree<K, V> {}
unsafe impl<K: Sync, V: Sync> Sync for Tree<K, V> {}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
            marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Height of the tree, counting nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        Self::height_of(self.root)
    }

    pub fn clear(&mut self) {
        if self.num_nodes > 0 {
            debug!(len = self.num_nodes, "clearing tree");
        }
        self.postorder(|node_ptr| drop(unsafe { Node::destroy(node_ptr) }));
        self.root = None;
        self.num_nodes = 0;
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node_ptr = self.root?;
        unsafe {
            while let Some(left_ptr) = node_ptr.as_ref().left {
                node_ptr = left_ptr;
            }
            let node = &*node_ptr.as_ptr();
            Some((&node.key, &node.value))
        }
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node_ptr = self.root?;
        unsafe {
            while let Some(right_ptr) = node_ptr.as_ref().right {
                node_ptr = right_ptr;
            }
            let node = &*node_ptr.as_ptr();
            Some((&node.key, &node.value))
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut stack = Vec::with_capacity(self.height());
        push_left_spine(&mut stack, self.root);
        Iter {
            stack,
            len: self.num_nodes,
            marker: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let mut stack = Vec::with_capacity(self.height());
        push_left_spine(&mut stack, self.root);
        IterMut {
            stack,
            len: self.num_nodes,
            marker: PhantomData,
        }
    }

    fn height_of(link: Link<K, V>) -> usize {
        match link {
            None => 0,
            Some(node_ptr) => unsafe { node_ptr.as_ref().height },
        }
    }

    fn update_height(mut node_ptr: NodePtr<K, V>) {
        unsafe {
            node_ptr.as_mut().height = 1 + cmp::max(
                Self::height_of(node_ptr.as_ref().left),
                Self::height_of(node_ptr.as_ref().right),
            );
        }
    }

    /// Height of the left subtree minus height of the right subtree.
    fn balance(node_ptr: NodePtr<K, V>) -> isize {
        unsafe {
            Self::height_of(node_ptr.as_ref().left) as isize
                - Self::height_of(node_ptr.as_ref().right) as isize
        }
    }

    /// Points the slot that currently holds `old` (a child link of `parent`,
    /// or the root link) at `new`.
    fn replace_child(&mut self, parent: Link<K, V>, old: NodePtr<K, V>, new: Link<K, V>) {
        match parent {
            None => self.root = new,
            Some(mut parent_ptr) => unsafe {
                if parent_ptr.as_ref().left == Some(old) {
                    parent_ptr.as_mut().left = new;
                } else {
                    debug_assert!(parent_ptr.as_ref().right == Some(old));
                    parent_ptr.as_mut().right = new;
                }
            },
        }
    }

    /// Moves the right child of `node_ptr` into its position and `node_ptr` down to the left.
    /// Returns the node now heading the subtree.
    fn rotate_left(&mut self, mut node_ptr: NodePtr<K, V>) -> NodePtr<K, V> {
        unsafe {
            let mut right_ptr = node_ptr
                .as_ref()
                .right
                .expect("left rotation needs a right child");
            trace!("rotate left");

            node_ptr.as_mut().right = right_ptr.as_ref().left;
            if let Some(mut right_left_ptr) = right_ptr.as_ref().left {
                right_left_ptr.as_mut().parent = Some(node_ptr);
            }

            let parent = node_ptr.as_ref().parent;
            right_ptr.as_mut().parent = parent;
            self.replace_child(parent, node_ptr, Some(right_ptr));

            right_ptr.as_mut().left = Some(node_ptr);
            node_ptr.as_mut().parent = Some(right_ptr);

            Self::update_height(node_ptr);
            Self::update_height(right_ptr);
            right_ptr
        }
    }

    /// Moves the left child of `node_ptr` into its position and `node_ptr` down to the right.
    /// Returns the node now heading the subtree.
    fn rotate_right(&mut self, mut node_ptr: NodePtr<K, V>) -> NodePtr<K, V> {
        unsafe {
            let mut left_ptr = node_ptr
                .as_ref()
                .left
                .expect("right rotation needs a left child");
            trace!("rotate right");

            node_ptr.as_mut().left = left_ptr.as_ref().right;
            if let Some(mut left_right_ptr) = left_ptr.as_ref().right {
                left_right_ptr.as_mut().parent = Some(node_ptr);
            }

            let parent = node_ptr.as_ref().parent;
            left_ptr.as_mut().parent = parent;
            self.replace_child(parent, node_ptr, Some(left_ptr));

            left_ptr.as_mut().right = Some(node_ptr);
            node_ptr.as_mut().parent = Some(left_ptr);

            Self::update_height(node_ptr);
            Self::update_height(left_ptr);
            left_ptr
        }
    }

    /// Restores heights and the AVL condition from the given node up to the root.
    /// After a single insert or remove no balance exceeds +2 or -2 on the way up.
    fn rebalance(&mut self, start_from: Link<K, V>) {
        let mut current = start_from;
        while let Some(mut node_ptr) = current {
            Self::update_height(node_ptr);
            let balance = Self::balance(node_ptr);
            debug_assert!((-2..=2).contains(&balance));
            if balance < -1 {
                // Right heavy
                trace!(balance, "rebalance right heavy node");
                if let Some(right_ptr) = unsafe { node_ptr.as_ref().right } {
                    if Self::balance(right_ptr) > 0 {
                        self.rotate_right(right_ptr);
                    }
                }
                node_ptr = self.rotate_left(node_ptr);
            } else if balance > 1 {
                // Left heavy
                trace!(balance, "rebalance left heavy node");
                if let Some(left_ptr) = unsafe { node_ptr.as_ref().left } {
                    if Self::balance(left_ptr) < 0 {
                        self.rotate_left(left_ptr);
                    }
                }
                node_ptr = self.rotate_right(node_ptr);
            }
            current = unsafe { node_ptr.as_ref().parent };
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn preorder<F: FnMut(NodePtr<K, V>)>(&self, f: F) {
        self.traverse(f, |_| {});
    }

    fn postorder<F: FnMut(NodePtr<K, V>)>(&self, f: F) {
        self.traverse(|_| {}, f);
    }

    // Walks the tree along parent links, so no auxiliary stack is needed.
    fn traverse<Pre, Post>(&self, mut preorder: Pre, mut postorder: Post)
    where
        Pre: FnMut(NodePtr<K, V>),
        Post: FnMut(NodePtr<K, V>),
    {
        if let Some(mut node_ptr) = self.root {
            let mut dir = Direction::FromParent;
            loop {
                match dir {
                    Direction::FromParent => {
                        preorder(node_ptr);
                        if let Some(left_ptr) = unsafe { node_ptr.as_ref().left } {
                            node_ptr = left_ptr;
                        } else {
                            dir = Direction::FromLeft;
                        }
                    }
                    Direction::FromLeft => {
                        if let Some(right_ptr) = unsafe { node_ptr.as_ref().right } {
                            node_ptr = right_ptr;
                            dir = Direction::FromParent;
                        } else {
                            dir = Direction::FromRight;
                        }
                    }
                    Direction::FromRight => {
                        // Post order traversal is used for node deletion,
                        // so make sure not to use node pointer after postorder call.
                        if let Some(parent_ptr) = unsafe { node_ptr.as_ref().parent } {
                            if Some(node_ptr) == unsafe { parent_ptr.as_ref().left } {
                                dir = Direction::FromLeft;
                            } else {
                                dir = Direction::FromRight;
                            }
                            postorder(node_ptr);
                            node_ptr = parent_ptr;
                        } else {
                            postorder(node_ptr);
                            break;
                        }
                    }
                }
            }
        }
    }
}

impl<K: Ord, V> Tree<K, V> {
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key)
            .map(|node_ptr| &unsafe { &*node_ptr.as_ptr() }.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key)
            .map(|node_ptr| &mut unsafe { &mut *node_ptr.as_ptr() }.value)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|node_ptr| {
            let node = unsafe { &*node_ptr.as_ptr() };
            (&node.key, &node.value)
        })
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Inserts a new entry, failing if the key is already present.
    /// The tree is left untouched on failure.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.contains_key(&key) {
            return Err(Error::DuplicateKey);
        }

        match self.find_insertion_parent(&key) {
            None => {
                debug_assert!(self.root.is_none());
                self.root = Some(Node::create(None, key, value));
                self.num_nodes = 1;
            }
            Some(mut parent_ptr) => {
                let goes_left = key < unsafe { parent_ptr.as_ref() }.key;
                let node_ptr = Node::create(Some(parent_ptr), key, value);
                unsafe {
                    if goes_left {
                        parent_ptr.as_mut().left = Some(node_ptr);
                    } else {
                        parent_ptr.as_mut().right = Some(node_ptr);
                    }
                }
                self.num_nodes += 1;
                // The new leaf is balanced, start at its parent.
                self.rebalance(Some(parent_ptr));
            }
        }
        Ok(())
    }

    /// Removes the entry with the given key and hands it back.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node_ptr = self.find(key)?;
        debug_assert!(self.num_nodes >= 1);
        if self.num_nodes == 1 {
            debug_assert!(self.root == Some(node_ptr));
            self.root = None;
        } else {
            self.unlink_node(node_ptr);
        }
        self.num_nodes -= 1;
        let node = unsafe { Node::destroy(node_ptr) };
        Some((node.key, node.value))
    }

    /// Returns the node that was last visited before the search for `key`
    /// fell off the tree, i.e. the parent of the slot where `key` lives or
    /// would be inserted.
    /// Returns `None` if the tree is empty or the root holds `key`.
    fn find_insertion_parent<Q>(&self, key: &Q) -> Link<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut parent = None;
        let mut current = self.root;
        while let Some(node_ptr) = current {
            let node = unsafe { node_ptr.as_ref() };
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => break,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            parent = Some(node_ptr);
        }
        parent
    }

    fn find<Q>(&self, key: &Q) -> Link<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(node_ptr) = current {
            current = unsafe {
                match key.cmp(node_ptr.as_ref().key.borrow()) {
                    Ordering::Equal => break,
                    Ordering::Less => node_ptr.as_ref().left,
                    Ordering::Greater => node_ptr.as_ref().right,
                }
            }
        }
        current
    }

    // Detaches the node from the tree and rebalances. The node keeps its key and value.
    fn unlink_node(&mut self, mut node_ptr: NodePtr<K, V>) {
        unsafe {
            let parent = node_ptr.as_ref().parent;
            match node_ptr.as_ref().left {
                None => {
                    // Promote the right subtree (possibly empty)
                    let replacement = node_ptr.as_ref().right;
                    if let Some(mut replacement_ptr) = replacement {
                        replacement_ptr.as_mut().parent = parent;
                    }
                    self.replace_child(parent, node_ptr, replacement);
                    self.rebalance(parent);
                }
                Some(mut left_ptr) => {
                    // Find the in-order predecessor, the right-most node of the left subtree
                    let mut pred_parent_ptr = node_ptr;
                    let mut pred_ptr = left_ptr;
                    while let Some(right_ptr) = pred_ptr.as_ref().right {
                        pred_parent_ptr = pred_ptr;
                        pred_ptr = right_ptr;
                    }

                    let rebalance_from = if pred_parent_ptr == node_ptr {
                        // Predecessor is the left child and keeps its own left subtree
                        pred_ptr
                    } else {
                        // Predecessor has no right child, its left child takes its slot
                        pred_parent_ptr.as_mut().right = pred_ptr.as_ref().left;
                        if let Some(mut pred_left_ptr) = pred_ptr.as_ref().left {
                            pred_left_ptr.as_mut().parent = Some(pred_parent_ptr);
                        }
                        pred_ptr.as_mut().left = Some(left_ptr);
                        left_ptr.as_mut().parent = Some(pred_ptr);
                        pred_parent_ptr
                    };

                    pred_ptr.as_mut().right = node_ptr.as_ref().right;
                    if let Some(mut right_ptr) = node_ptr.as_ref().right {
                        right_ptr.as_mut().parent = Some(pred_ptr);
                    }
                    pred_ptr.as_mut().parent = parent;
                    self.replace_child(parent, node_ptr, Some(pred_ptr));

                    self.rebalance(Some(rebalance_from));
                }
            }

            // Fully unlinked, drop the stale links
            let node = node_ptr.as_mut();
            node.left = None;
            node.right = None;
            node.parent = None;
        }
    }

    /// Asserts parent links, key order, cached heights, AVL balance and node count.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        unsafe {
            // Check root link
            if let Some(root_node_ptr) = self.root {
                assert!(root_node_ptr.as_ref().parent.is_none());
            }

            // Check tree nodes
            let mut num_nodes = 0;
            self.preorder(|node_ptr| {
                let mut left_height = 0;
                let mut right_height = 0;

                // Check link for left child node
                if let Some(left_ptr) = node_ptr.as_ref().left {
                    assert!(left_ptr.as_ref().parent == Some(node_ptr));
                    assert!(left_ptr.as_ref().key < node_ptr.as_ref().key);
                    left_height = left_ptr.as_ref().height;
                }

                // Check link for right child node
                if let Some(right_ptr) = node_ptr.as_ref().right {
                    assert!(right_ptr.as_ref().parent == Some(node_ptr));
                    assert!(right_ptr.as_ref().key > node_ptr.as_ref().key);
                    right_height = right_ptr.as_ref().height;
                }

                // Check height
                assert_eq!(
                    node_ptr.as_ref().height,
                    1 + cmp::max(left_height, right_height)
                );

                // Check AVL condition (nearly balance)
                assert!(left_height <= right_height + 1);
                assert!(right_height <= left_height + 1);

                num_nodes += 1;
            });

            // Check number of nodes
            assert_eq!(num_nodes, self.num_nodes);
            assert_eq!(self.num_nodes == 0, self.root.is_none());
        }
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> IntoIterator for Tree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut stack = Vec::with_capacity(self.height());
        push_left_spine(&mut stack, self.root.take());
        let len = self.num_nodes;
        self.num_nodes = 0;
        IntoIter {
            stack,
            len,
            marker: PhantomData,
        }
    }
}

impl<K: Clone, V: Clone> Clone for Tree<K, V> {
    /// Copies the tree node by node, keeping its shape and cached heights.
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        let Some(src_root_ptr) = self.root else {
            return tree;
        };

        let root_ptr = unsafe { Node::copy(src_root_ptr, None) };
        tree.root = Some(root_ptr);
        let mut stack = vec![(src_root_ptr, root_ptr)];
        while let Some((src_ptr, mut dst_ptr)) = stack.pop() {
            unsafe {
                if let Some(src_left_ptr) = src_ptr.as_ref().left {
                    let left_ptr = Node::copy(src_left_ptr, Some(dst_ptr));
                    dst_ptr.as_mut().left = Some(left_ptr);
                    stack.push((src_left_ptr, left_ptr));
                }
                if let Some(src_right_ptr) = src_ptr.as_ref().right {
                    let right_ptr = Node::copy(src_right_ptr, Some(dst_ptr));
                    dst_ptr.as_mut().right = Some(right_ptr);
                    stack.push((src_right_ptr, right_ptr));
                }
            }
        }
        tree.num_nodes = self.num_nodes;
        tree
    }
}

impl<K, V> Node<K, V> {
    fn create(parent: Link<K, V>, key: K, value: V) -> NodePtr<K, V> {
        let boxed = Box::new(Node {
            key,
            value,
            left: None,
            right: None,
            parent,
            height: 1,
        });
        unsafe { NodePtr::new_unchecked(Box::into_raw(boxed)) }
    }

    unsafe fn destroy(node_ptr: NodePtr<K, V>) -> Box<Node<K, V>> {
        Box::from_raw(node_ptr.as_ptr())
    }
}

impl<K: Clone, V: Clone> Node<K, V> {
    unsafe fn copy(src_ptr: NodePtr<K, V>, parent: Link<K, V>) -> NodePtr<K, V> {
        let src = src_ptr.as_ref();
        let mut node_ptr = Node::create(parent, src.key.clone(), src.value.clone());
        node_ptr.as_mut().height = src.height;
        node_ptr
    }
}

fn push_left_spine<K, V>(stack: &mut Vec<NodePtr<K, V>>, mut link: Link<K, V>) {
    while let Some(node_ptr) = link {
        stack.push(node_ptr);
        link = unsafe { node_ptr.as_ref().left };
    }
}

// Auto derived clone seems to have an invalid type bound of K: Clone
impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node_ptr = self.stack.pop()?;
        let node = unsafe { &*node_ptr.as_ptr() };
        push_left_spine(&mut self.stack, node.right);
        self.len -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let node_ptr = self.stack.pop()?;
        let node = unsafe { &mut *node_ptr.as_ptr() };
        push_left_spine(&mut self.stack, node.right);
        self.len -= 1;
        Some((&node.key, &mut node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        // The left subtree of a popped node has already been yielded and freed.
        let node_ptr = self.stack.pop()?;
        let node = unsafe { Node::destroy(node_ptr) };
        push_left_spine(&mut self.stack, node.right);
        self.len -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        self.by_ref().for_each(drop);
    }
}

unsafe impl<K: Sync, V: Sync> Send for Iter<'_, K, V> {}
unsafe impl<K: Sync, V: Sync> Sync for Iter<'_, K, V> {}
unsafe impl<K: Sync, V: Send> Send for IterMut<'_, K, V> {}
unsafe impl<K: Sync, V: Sync> Sync for IterMut<'_, K, V> {}
unsafe impl<K: Send, V: Send> Send for IntoIter<K, V> {}
unsafe impl<K: Sync, V: Sync> Sync for IntoIter<K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_round_trip() {
        //   1  ->  2  ->  1
        //    \    /        \
        //     2  1          2
        let mut tree = Tree::new();
        tree.insert(1, ()).unwrap();
        tree.insert(2, ()).unwrap();
        let root_ptr = tree.root.unwrap();

        let head_ptr = tree.rotate_left(root_ptr);
        assert_eq!(tree.root, Some(head_ptr));
        assert_eq!(unsafe { head_ptr.as_ref().key }, 2);
        assert_eq!(unsafe { root_ptr.as_ref().parent }, Some(head_ptr));
        tree.check_consistency();

        let head_ptr = tree.rotate_right(head_ptr);
        assert_eq!(head_ptr, root_ptr);
        assert_eq!(tree.root, Some(root_ptr));
        assert_eq!(unsafe { root_ptr.as_ref().parent }, None);
        tree.check_consistency();
    }

    #[test]
    #[should_panic(expected = "left rotation needs a right child")]
    fn test_rotate_left_without_right_child() {
        let mut tree = Tree::new();
        tree.insert(1, ()).unwrap();
        let root_ptr = tree.root.unwrap();
        tree.rotate_left(root_ptr);
    }

    #[test]
    #[should_panic(expected = "right rotation needs a left child")]
    fn test_rotate_right_without_left_child() {
        let mut tree = Tree::new();
        tree.insert(1, ()).unwrap();
        let root_ptr = tree.root.unwrap();
        tree.rotate_right(root_ptr);
    }
}
