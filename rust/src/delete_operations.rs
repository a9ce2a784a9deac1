//! DELETE operations for RedBlackTreeMap.
//!
//! This module contains removal: locating the node, splicing it out with the
//! transplant-based three-case BST deletion, and the fixup pass that repays
//! the black-height deficit left behind when a black node disappears.

use crate::error::{ModifyResult, RedBlackTreeError};
use crate::ordering::{EntryDestroyer, KeyOrder, NaturalOrder};
use crate::types::{Color, NodeId, RedBlackTreeMap, Side, NULL_NODE};

impl<K, V> RedBlackTreeMap<K, V> {
    /// Removes `key` and hands its stored key and value to `destroyer`.
    ///
    /// Returns `false`, without touching the tree, when `key` is absent.
    pub fn remove_with<O, D>(&mut self, key: &K, order: &O, destroyer: &D) -> bool
    where
        O: KeyOrder<K> + ?Sized,
        D: EntryDestroyer<K, V> + ?Sized,
    {
        match self.remove_by(key, order) {
            Some((stored_key, stored_value)) => {
                destroyer.destroy_key(stored_key);
                destroyer.destroy_value(stored_value);
                true
            }
            None => false,
        }
    }

    /// Removes `key` under `order` and returns the stored entry.
    pub fn remove_by<O>(&mut self, key: &K, order: &O) -> Option<(K, V)>
    where
        O: KeyOrder<K> + ?Sized,
    {
        let z = self.find_node(key, order);
        if z == NULL_NODE {
            return None;
        }
        self.remove_node(z)
    }

    /// Splices `z` out of the tree, rebalances, and releases its slot.
    pub(crate) fn remove_node(&mut self, z: NodeId) -> Option<(K, V)> {
        let (z_left, z_right) = (self.nodes[z].left, self.nodes[z].right);

        // `x` takes the spliced node's place and may be absent, so its parent
        // is tracked separately.
        let (x, x_parent, removed_color) = if z_left == NULL_NODE {
            let z_parent = self.parent(z);
            self.transplant(z, z_right);
            (z_right, z_parent, self.color(z))
        } else if z_right == NULL_NODE {
            let z_parent = self.parent(z);
            self.transplant(z, z_left);
            (z_left, z_parent, self.color(z))
        } else {
            let y = self.subtree_min(z_right);
            let removed_color = self.color(y);
            let x = self.nodes[y].right;
            let x_parent = if self.parent(y) == z {
                y
            } else {
                let y_parent = self.parent(y);
                self.transplant(y, x);
                self.set_child(y, Side::Right, z_right);
                self.set_parent(z_right, y);
                y_parent
            };
            self.transplant(z, y);
            self.set_child(y, Side::Left, z_left);
            self.set_parent(z_left, y);
            let z_color = self.color(z);
            self.set_color(y, z_color);
            (x, x_parent, removed_color)
        };

        if removed_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }

        tracing::trace!(node = z, ?removed_color, "removed");
        self.nodes.deallocate(z).map(|node| node.into_entry())
    }

    /// Puts the subtree rooted at `v` where `u` hangs; `u`'s own links are
    /// left for the caller.
    fn transplant(&mut self, u: NodeId, v: NodeId) {
        let parent = self.parent(u);
        if parent == NULL_NODE {
            self.root = v;
        } else {
            let side = self.side_in(parent, u);
            self.set_child(parent, side, v);
        }
        self.set_parent(v, parent);
    }

    /// Restores equal black-heights after a black node was spliced out above
    /// `x`, whose parent is `x_parent`. `x` carries one extra unit of black
    /// until it reaches a red node or the root.
    fn delete_fixup(&mut self, mut x: NodeId, mut x_parent: NodeId) {
        while x != self.root && self.is_black(x) {
            let side = self.side_in(x_parent, x);
            let far = side.opposite();
            // The deficit on x's side means the sibling subtree holds at least
            // one black node, so the sibling exists.
            let mut sibling = self.child(x_parent, far);

            if self.is_red(sibling) {
                self.set_color(sibling, Color::Black);
                self.set_color(x_parent, Color::Red);
                self.rotate(x_parent, side);
                sibling = self.child(x_parent, far);
            }

            let near_nephew = self.child(sibling, side);
            let far_nephew = self.child(sibling, far);
            if self.is_black(near_nephew) && self.is_black(far_nephew) {
                self.set_color(sibling, Color::Red);
                x = x_parent;
                x_parent = self.parent(x);
                continue;
            }

            if self.is_black(far_nephew) {
                self.set_color(near_nephew, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.child(x_parent, far);
            }

            let parent_color = self.color(x_parent);
            self.set_color(sibling, parent_color);
            self.set_color(x_parent, Color::Black);
            let far_nephew = self.child(sibling, far);
            self.set_color(far_nephew, Color::Black);
            self.rotate(x_parent, side);
            x = self.root;
            x_parent = NULL_NODE;
        }

        self.set_color(x, Color::Black);
    }
}

impl<K: Ord, V> RedBlackTreeMap<K, V> {
    /// Removes a key from the tree, returning the value if it existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTreeMap;
    ///
    /// let mut tree = RedBlackTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.remove(&1), Some("one"));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the tree, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.remove_by(key, &NaturalOrder)
    }

    /// Removes a key, reporting a missing key as an error.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<V> {
        self.remove(key).ok_or(RedBlackTreeError::KeyNotFound)
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let id = self.subtree_min(self.root);
        if id == NULL_NODE {
            return None;
        }
        self.remove_node(id)
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let id = self.subtree_max(self.root);
        if id == NULL_NODE {
            return None;
        }
        self.remove_node(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{DropEntries, FnDestroyer};
    use std::cell::RefCell;

    fn tree_of(keys: &[i32]) -> RedBlackTreeMap<i32, i32> {
        let mut tree = RedBlackTreeMap::new();
        for &k in keys {
            tree.insert(k, k * 10);
        }
        tree
    }

    fn shape(tree: &RedBlackTreeMap<i32, i32>) -> Vec<(i32, Color)> {
        tree.keys()
            .map(|k| (*k, tree.color_of(k).unwrap()))
            .collect()
    }

    fn root_key(tree: &RedBlackTreeMap<i32, i32>) -> i32 {
        tree.nodes[tree.root].key
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = tree_of(&[10, 20, 30]);
        assert_eq!(tree.remove(&20), Some(200));
        assert_eq!(root_key(&tree), 30);
        assert_eq!(shape(&tree), vec![(10, Color::Red), (30, Color::Black)]);
        assert_eq!(tree.height(), 2);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_until_empty() {
        let mut tree = tree_of(&[10, 20, 30]);
        tree.remove(&20);
        tree.remove(&10);
        assert_eq!(tree.remove(&30), Some(300));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root, NULL_NODE);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_black_leaf_with_red_sibling() {
        // 2B(1B, 4R(3B, 6B(5R, 7R)))
        let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
        tree.remove(&1);
        assert_eq!(root_key(&tree), 4);
        assert_eq!(
            shape(&tree),
            vec![
                (2, Color::Black),
                (3, Color::Red),
                (4, Color::Black),
                (5, Color::Red),
                (6, Color::Black),
                (7, Color::Red)
            ]
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_black_leaf_with_red_far_nephew() {
        let mut tree = tree_of(&[10, 5, 15, 20]);
        tree.remove(&5);
        assert_eq!(root_key(&tree), 15);
        assert_eq!(
            shape(&tree),
            vec![(10, Color::Black), (15, Color::Black), (20, Color::Black)]
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_black_leaf_with_red_near_nephew() {
        let mut tree = tree_of(&[10, 5, 15, 12]);
        tree.remove(&5);
        assert_eq!(root_key(&tree), 12);
        assert_eq!(
            shape(&tree),
            vec![(10, Color::Black), (12, Color::Black), (15, Color::Black)]
        );
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_mirrored_fixups() {
        let mut far = tree_of(&[10, 5, 15, 1]);
        far.remove(&15);
        assert_eq!(root_key(&far), 5);
        assert!(far.check_invariants());

        let mut near = tree_of(&[10, 5, 15, 7]);
        near.remove(&15);
        assert_eq!(root_key(&near), 7);
        assert!(near.check_invariants());
    }

    #[test]
    fn test_remove_red_leaf_needs_no_rebalancing() {
        let mut tree = tree_of(&[10, 5, 15, 20]);
        let before_root = tree.root;
        tree.remove(&20);
        assert_eq!(tree.root, before_root);
        assert_eq!(
            shape(&tree),
            vec![(5, Color::Black), (10, Color::Black), (15, Color::Black)]
        );
    }

    #[test]
    fn test_remove_successor_deep_in_right_subtree() {
        let mut tree = tree_of(&(1..=20).collect::<Vec<_>>());
        let root = root_key(&tree);
        assert_eq!(tree.remove(&root), Some(root * 10));
        assert!(!tree.contains_key(&root));
        assert_eq!(tree.len(), 19);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let mut tree = tree_of(&[1, 2, 3]);
        assert_eq!(tree.remove(&4), None);
        assert!(!tree.remove_with(&4, &NaturalOrder, &DropEntries));
        assert_eq!(tree.try_remove(&4), Err(RedBlackTreeError::KeyNotFound));
        assert_eq!(tree.len(), 3);

        let mut empty: RedBlackTreeMap<i32, i32> = RedBlackTreeMap::new();
        assert_eq!(empty.remove(&1), None);
        assert_eq!(empty.pop_first(), None);
    }

    #[test]
    fn test_remove_with_hands_entry_to_destroyer() {
        let released = RefCell::new(Vec::new());
        let destroyer = FnDestroyer {
            key: |k: i32| released.borrow_mut().push(("key", k)),
            value: |v: i32| released.borrow_mut().push(("value", v)),
        };
        let mut tree = tree_of(&[1, 2, 3]);
        assert!(tree.remove_with(&2, &NaturalOrder, &destroyer));
        assert_eq!(*released.borrow(), vec![("key", 2), ("value", 20)]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_pop_first_and_last() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.pop_first(), Some((1, 10)));
        assert_eq!(tree.pop_last(), Some((7, 70)));
        assert_eq!(tree.minimum(), Some((&2, &20)));
        assert_eq!(tree.maximum(), Some((&6, &60)));
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_slot_reused_after_remove() {
        let mut tree = tree_of(&[1, 2, 3]);
        tree.remove(&1);
        assert_eq!(tree.arena_stats().free_count, 1);
        tree.insert(4, 40);
        assert_eq!(tree.arena_stats().free_count, 0);
        assert!(tree.check_invariants());
    }
}
