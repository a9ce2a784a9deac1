//! Iterator implementations for RedBlackTreeMap.
//!
//! Iteration steps between in-order neighbours through parent links, so it
//! needs no auxiliary stack regardless of tree shape.

use std::iter::FusedIterator;

use crate::types::{NodeId, RedBlackTreeMap, Side, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over key-value pairs in key order.
#[derive(Debug)]
pub struct ItemIterator<'a, K, V> {
    tree: &'a RedBlackTreeMap<K, V>,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

/// Iterator over keys in order.
#[derive(Debug)]
pub struct KeyIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

/// Iterator over values in key order.
#[derive(Debug)]
pub struct ValueIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

// ============================================================================
// TREE ITERATOR METHODS
// ============================================================================

impl<K, V> RedBlackTreeMap<K, V> {
    /// Returns an iterator over all key-value pairs in sorted order.
    pub fn items(&self) -> ItemIterator<'_, K, V> {
        ItemIterator::new(self)
    }

    /// Alias for [`items`](Self::items).
    pub fn iter(&self) -> ItemIterator<'_, K, V> {
        self.items()
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> KeyIterator<'_, K, V> {
        KeyIterator {
            items: self.items(),
        }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> ValueIterator<'_, K, V> {
        ValueIterator {
            items: self.items(),
        }
    }

    /// Returns all key-value pairs as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<(&K, &V)> {
        self.items().collect()
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a, K, V> ItemIterator<'a, K, V> {
    fn new(tree: &'a RedBlackTreeMap<K, V>) -> Self {
        Self {
            tree,
            front: tree.subtree_min(tree.root),
            back: tree.subtree_max(tree.root),
            remaining: tree.len(),
        }
    }
}

impl<'a, K, V> Iterator for ItemIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.front == NULL_NODE {
            return None;
        }
        let id = self.front;
        self.front = self.tree.step(id, Side::Right);
        self.remaining -= 1;
        self.tree.entry(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for ItemIterator<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.back == NULL_NODE {
            return None;
        }
        let id = self.back;
        self.back = self.tree.step(id, Side::Left);
        self.remaining -= 1;
        self.tree.entry(id)
    }
}

impl<'a, K, V> ExactSizeIterator for ItemIterator<'a, K, V> {}

impl<'a, K, V> FusedIterator for ItemIterator<'a, K, V> {}

impl<'a, K, V> Iterator for KeyIterator<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for KeyIterator<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(k, _)| k)
    }
}

impl<'a, K, V> ExactSizeIterator for KeyIterator<'a, K, V> {}

impl<'a, K, V> Iterator for ValueIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for ValueIterator<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back().map(|(_, v)| v)
    }
}

impl<'a, K, V> ExactSizeIterator for ValueIterator<'a, K, V> {}

impl<'a, K, V> IntoIterator for &'a RedBlackTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ItemIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_in_order() {
        let tree: RedBlackTreeMap<i32, i32> =
            [5, 3, 8, 1, 4, 7, 9, 2, 6].into_iter().map(|k| (k, k * k)).collect();
        let items: Vec<_> = tree.items().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(items, (1..=9).map(|k| (k, k * k)).collect::<Vec<_>>());
        assert_eq!(tree.keys().len(), 9);
        assert_eq!(tree.values().copied().sum::<i32>(), (1..=9).map(|k| k * k).sum());
    }

    #[test]
    fn test_iterates_from_both_ends() {
        let tree: RedBlackTreeMap<i32, ()> = (0..6).map(|k| (k, ())).collect();
        let mut keys = tree.keys();
        assert_eq!(keys.next(), Some(&0));
        assert_eq!(keys.next_back(), Some(&5));
        assert_eq!(keys.next(), Some(&1));
        assert_eq!(keys.next_back(), Some(&4));
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.next(), Some(&2));
        assert_eq!(keys.next_back(), Some(&3));
        assert_eq!(keys.next(), None);
        assert_eq!(keys.next_back(), None);

        let reversed: Vec<_> = tree.keys().rev().copied().collect();
        assert_eq!(reversed, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_empty_and_borrowed_into_iter() {
        let empty: RedBlackTreeMap<i32, i32> = RedBlackTreeMap::new();
        assert_eq!(empty.items().next(), None);
        assert!(empty.slice().is_empty());

        let tree: RedBlackTreeMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
        let mut seen = Vec::new();
        for (k, v) in &tree {
            seen.push((*k, *v));
        }
        assert_eq!(seen, vec![(1, "a"), (2, "b")]);
    }
}
