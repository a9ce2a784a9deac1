//! GET operations for RedBlackTreeMap.
//!
//! This module contains the read side of the tree: key search, the
//! minimum/maximum and predecessor/successor queries, and the size and height
//! measurements.

use std::cmp::Ordering;

use crate::error::{KeyResult, RedBlackTreeError};
use crate::ordering::{KeyOrder, NaturalOrder};
use crate::types::{NodeId, Placement, RedBlackTreeMap, Side, NULL_NODE};

impl<K, V> RedBlackTreeMap<K, V> {
    // ============================================================================
    // SEARCH PRIMITIVES
    // ============================================================================

    /// Descends from the root and reports either the node holding `key` or
    /// the vacant child slot where it would be attached.
    pub(crate) fn place<O>(&self, key: &K, order: &O) -> Placement
    where
        O: KeyOrder<K> + ?Sized,
    {
        let mut parent = NULL_NODE;
        let mut side = Side::Left;
        let mut current = self.root;

        while current != NULL_NODE {
            let node = &self.nodes[current];
            parent = current;
            side = match order.compare(key, &node.key) {
                Ordering::Equal => return Placement::Occupied(current),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            current = node.child(side);
        }

        Placement::Vacant { parent, side }
    }

    /// Id of the node holding `key`, or `NULL_NODE`.
    pub(crate) fn find_node<O>(&self, key: &K, order: &O) -> NodeId
    where
        O: KeyOrder<K> + ?Sized,
    {
        match self.place(key, order) {
            Placement::Occupied(id) => id,
            Placement::Vacant { .. } => NULL_NODE,
        }
    }

    // ============================================================================
    // ORDER-PARAMETERISED QUERIES
    // ============================================================================

    /// Looks up `key` under `order` and returns a reference to its value.
    ///
    /// The value is not copied. Returns `None` when the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::{RedBlackTreeMap, ReverseOrder};
    ///
    /// let mut tree = RedBlackTreeMap::new();
    /// tree.insert_by(3, "c", &ReverseOrder).unwrap();
    /// tree.insert_by(1, "a", &ReverseOrder).unwrap();
    /// assert_eq!(tree.search_by(&3, &ReverseOrder), Some(&"c"));
    /// assert_eq!(tree.search_by(&2, &ReverseOrder), None);
    /// ```
    pub fn search_by<O>(&self, key: &K, order: &O) -> Option<&V>
    where
        O: KeyOrder<K> + ?Sized,
    {
        self.nodes
            .get(self.find_node(key, order))
            .map(|node| &node.value)
    }

    /// Mutable counterpart of [`search_by`](Self::search_by).
    pub fn search_mut_by<O>(&mut self, key: &K, order: &O) -> Option<&mut V>
    where
        O: KeyOrder<K> + ?Sized,
    {
        let id = self.find_node(key, order);
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Entry immediately before `key` in `order`.
    ///
    /// Returns `None` when `key` is not stored or is the smallest key.
    pub fn predecessor_by<O>(&self, key: &K, order: &O) -> Option<(&K, &V)>
    where
        O: KeyOrder<K> + ?Sized,
    {
        self.neighbour(key, order, Side::Left)
    }

    /// Entry immediately after `key` in `order`.
    ///
    /// Returns `None` when `key` is not stored or is the largest key.
    pub fn successor_by<O>(&self, key: &K, order: &O) -> Option<(&K, &V)>
    where
        O: KeyOrder<K> + ?Sized,
    {
        self.neighbour(key, order, Side::Right)
    }

    fn neighbour<O>(&self, key: &K, order: &O, side: Side) -> Option<(&K, &V)>
    where
        O: KeyOrder<K> + ?Sized,
    {
        let id = self.find_node(key, order);
        if id == NULL_NODE {
            return None;
        }
        self.entry(self.step(id, side))
    }

    // ============================================================================
    // ORDER-INDEPENDENT QUERIES
    // ============================================================================

    /// Returns the entry with the smallest key.
    pub fn minimum(&self) -> Option<(&K, &V)> {
        self.entry(self.subtree_min(self.root))
    }

    /// Returns the entry with the largest key.
    pub fn maximum(&self) -> Option<(&K, &V)> {
        self.entry(self.subtree_max(self.root))
    }

    /// Returns the number of entries in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NULL_NODE
    }

    /// Number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0 and a single node has height 1. The walk
    /// uses an explicit stack, so degenerate shapes cannot overflow the call
    /// stack.
    pub fn height(&self) -> usize {
        if self.root == NULL_NODE {
            return 0;
        }

        let mut deepest = 0;
        let mut stack = vec![(self.root, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id];
            for child in [node.left, node.right] {
                if child != NULL_NODE {
                    stack.push((child, depth + 1));
                }
            }
        }
        deepest
    }
}

impl<K: Ord, V> RedBlackTreeMap<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTreeMap;
    ///
    /// let mut tree = RedBlackTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search_by(key, &NaturalOrder)
    }

    /// Get a mutable reference to the value for a key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.search_mut_by(key, &NaturalOrder)
    }

    /// Check if key exists in the tree.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key, &NaturalOrder) != NULL_NODE
    }

    /// Get value for a key, returning an error if the key doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTreeMap;
    ///
    /// let mut tree = RedBlackTreeMap::new();
    /// tree.insert(1, "one");
    /// assert_eq!(tree.get_item(&1).unwrap(), &"one");
    /// assert!(tree.get_item(&2).is_err());
    /// ```
    pub fn get_item(&self, key: &K) -> KeyResult<&V> {
        self.get(key).ok_or(RedBlackTreeError::KeyNotFound)
    }

    /// Entry immediately before `key`, if `key` is stored.
    pub fn predecessor(&self, key: &K) -> Option<(&K, &V)> {
        self.predecessor_by(key, &NaturalOrder)
    }

    /// Entry immediately after `key`, if `key` is stored.
    pub fn successor(&self, key: &K) -> Option<(&K, &V)> {
        self.successor_by(key, &NaturalOrder)
    }
}
