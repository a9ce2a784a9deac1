//! Construction, teardown and bulk-building for RedBlackTreeMap.
//!
//! This module contains the constructors, the `Default`/`FromIterator`/
//! `Extend` implementations, and whole-tree release with caller-supplied
//! destroyers.

use crate::arena::{ArenaStats, NodeArena};
use crate::error::InitResult;
use crate::ordering::EntryDestroyer;
use crate::types::{RedBlackTreeMap, DEFAULT_CAPACITY, NULL_NODE};

impl<K, V> RedBlackTreeMap<K, V> {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTreeMap;
    ///
    /// let tree = RedBlackTreeMap::<i32, String>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            root: NULL_NODE,
            nodes: NodeArena::new(),
        }
    }

    /// Creates an empty tree with node slots reserved for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: NULL_NODE,
            nodes: NodeArena::with_capacity(capacity),
        }
    }

    /// Creates an empty tree with `capacity` node slots reserved, returning
    /// an allocation error instead of aborting when the reservation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTreeMap;
    ///
    /// let tree = RedBlackTreeMap::<u32, u32>::try_with_capacity(128).unwrap();
    /// assert!(tree.arena_stats().total_capacity >= 128);
    /// assert!(RedBlackTreeMap::<u32, u32>::try_with_capacity(usize::MAX).is_err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> InitResult<Self> {
        let nodes = NodeArena::try_with_capacity(capacity)?;
        tracing::trace!(capacity, "reserved node arena");
        Ok(Self {
            root: NULL_NODE,
            nodes,
        })
    }

    /// Releases every entry through `destroyer` and consumes the tree.
    ///
    /// Each stored key and value reaches the destroyer exactly once. Nodes
    /// are released parent before children, using an explicit stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use redblacktree::{FnDestroyer, RedBlackTreeMap};
    ///
    /// let released = Cell::new(0);
    /// let tree: RedBlackTreeMap<i32, i32> = (0..10).map(|k| (k, k)).collect();
    /// tree.destroy(&FnDestroyer {
    ///     key: |_k: i32| released.set(released.get() + 1),
    ///     value: |_v: i32| released.set(released.get() + 1),
    /// });
    /// assert_eq!(released.get(), 20);
    /// ```
    pub fn destroy<D>(mut self, destroyer: &D)
    where
        D: EntryDestroyer<K, V> + ?Sized,
    {
        let released = self.release_all(destroyer);
        tracing::debug!(released, "tree destroyed");
    }

    /// Removes every entry, dropping keys and values.
    pub fn clear(&mut self) {
        self.root = NULL_NODE;
        self.nodes.clear();
    }

    fn release_all<D>(&mut self, destroyer: &D) -> usize
    where
        D: EntryDestroyer<K, V> + ?Sized,
    {
        let mut released = 0;
        let mut stack = Vec::new();
        if self.root != NULL_NODE {
            stack.push(self.root);
        }
        self.root = NULL_NODE;

        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.deallocate(id) else {
                continue;
            };
            for child in [node.left, node.right] {
                if child != NULL_NODE {
                    stack.push(child);
                }
            }
            let (key, value) = node.into_entry();
            destroyer.destroy_key(key);
            destroyer.destroy_value(value);
            released += 1;
        }
        self.nodes.clear();
        released
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.nodes.stats()
    }
}

impl<K, V> Default for RedBlackTreeMap<K, V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTreeMap<K, V> {
    /// Builds a tree from pairs; later duplicates of a key are ignored.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for RedBlackTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RedBlackTreeError;
    use crate::ordering::FnDestroyer;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_and_default_are_empty() {
        let tree: RedBlackTreeMap<u8, u8> = RedBlackTreeMap::new();
        assert!(tree.is_empty());
        let tree: RedBlackTreeMap<u8, u8> = RedBlackTreeMap::default();
        assert!(tree.is_empty());
        assert!(tree.arena_stats().total_capacity >= DEFAULT_CAPACITY);
    }

    #[test]
    fn test_try_with_capacity() {
        let mut tree: RedBlackTreeMap<u32, u32> = RedBlackTreeMap::try_with_capacity(64).unwrap();
        assert!(tree.is_empty());
        assert!(tree.arena_stats().total_capacity >= 64);
        assert!(tree.insert(1, 1));
        assert!(tree.check_invariants());

        match RedBlackTreeMap::<u32, u32>::try_with_capacity(usize::MAX) {
            Err(RedBlackTreeError::AllocationError(msg)) => assert!(msg.contains("node arena")),
            other => panic!("expected allocation error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_destroy_releases_each_entry_once() {
        let released = RefCell::new(Vec::new());
        let tree: RedBlackTreeMap<i32, String> =
            (0..50).map(|k| (k, format!("v{}", k))).collect();
        tree.destroy(&FnDestroyer {
            key: |k: i32| released.borrow_mut().push(k),
            value: |v: String| assert!(v.starts_with('v')),
        });
        let mut keys = released.into_inner();
        keys.sort();
        assert_eq!(keys, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_destroy_empty_tree() {
        let calls = RefCell::new(0);
        RedBlackTreeMap::<i32, i32>::new().destroy(&FnDestroyer {
            key: |_k: i32| *calls.borrow_mut() += 1,
            value: |_v: i32| *calls.borrow_mut() += 1,
        });
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_clear_and_drop_release_values() {
        let marker = Rc::new(());
        let mut tree = RedBlackTreeMap::new();
        for k in 0..10 {
            tree.insert(k, Rc::clone(&marker));
        }
        assert_eq!(Rc::strong_count(&marker), 11);
        tree.clear();
        assert_eq!(Rc::strong_count(&marker), 1);
        assert!(tree.is_empty());
        assert!(tree.check_invariants());

        tree.insert(1, Rc::clone(&marker));
        drop(tree);
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_from_iter_ignores_later_duplicates() {
        let tree: RedBlackTreeMap<&str, i32> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(&"a"), Some(&1));
    }
}
