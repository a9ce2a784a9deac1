//! INSERT operations for RedBlackTreeMap.
//!
//! This module contains the insertion entry points, the attachment of a new
//! red leaf below its BST parent, and the upward recoloring/rotation pass
//! that restores the red-black rules afterwards.

use crate::error::ModifyResult;
use crate::ordering::{EntryCloner, KeyOrder, NaturalOrder};
use crate::types::{Color, Node, NodeId, Placement, RedBlackTreeMap, Side, NULL_NODE};

impl<K, V> RedBlackTreeMap<K, V> {
    /// Inserts independent copies of `key` and `value`, made by `cloner`.
    ///
    /// Nothing is copied or allocated when `key` is already present; the
    /// stored value stays as it was and `Ok(false)` is returned. Allocation
    /// failure is reported as [`RedBlackTreeError::AllocationError`] and
    /// leaves the tree untouched.
    ///
    /// [`RedBlackTreeError::AllocationError`]: crate::RedBlackTreeError::AllocationError
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::{CloneEntries, NaturalOrder, RedBlackTreeMap};
    ///
    /// let mut tree = RedBlackTreeMap::new();
    /// let key = String::from("k");
    /// assert!(tree.insert_with(&key, &1, &NaturalOrder, &CloneEntries).unwrap());
    /// assert!(!tree.insert_with(&key, &2, &NaturalOrder, &CloneEntries).unwrap());
    /// assert_eq!(tree.get(&key), Some(&1));
    /// ```
    pub fn insert_with<O, C>(
        &mut self,
        key: &K,
        value: &V,
        order: &O,
        cloner: &C,
    ) -> ModifyResult<bool>
    where
        O: KeyOrder<K> + ?Sized,
        C: EntryCloner<K, V> + ?Sized,
    {
        let Placement::Vacant { parent, side } = self.place(key, order) else {
            return Ok(false);
        };
        let node = Node::new_red(cloner.clone_key(key), cloner.clone_value(value));
        let id = self.nodes.try_allocate(node)?;
        self.attach(id, parent, side);
        Ok(true)
    }

    /// Moves `key` and `value` into the tree, ordered by `order`.
    ///
    /// Duplicate keys are left alone and `Ok(false)` is returned; the
    /// rejected key and value are dropped.
    pub fn insert_by<O>(&mut self, key: K, value: V, order: &O) -> ModifyResult<bool>
    where
        O: KeyOrder<K> + ?Sized,
    {
        let Placement::Vacant { parent, side } = self.place(&key, order) else {
            return Ok(false);
        };
        let id = self.nodes.try_allocate(Node::new_red(key, value))?;
        self.attach(id, parent, side);
        Ok(true)
    }

    /// Links the freshly allocated red node `id` under `parent` and rebalances.
    fn attach(&mut self, id: NodeId, parent: NodeId, side: Side) {
        if parent == NULL_NODE {
            self.root = id;
            self.nodes[id].color = Color::Black;
            tracing::trace!(node = id, "inserted root");
            return;
        }

        self.set_parent(id, parent);
        self.set_child(parent, side, id);
        self.insert_fixup(id);
        tracing::trace!(node = id, parent, ?side, "inserted");
    }

    /// Restores the red-black rules after attaching the red node `z`.
    ///
    /// Only a red-red edge between `z` and its parent can be broken. A red
    /// uncle lets the violation be recolored one generation up; a black uncle
    /// ends the loop with one or two rotations.
    fn insert_fixup(&mut self, mut z: NodeId) {
        while self.is_red(self.parent(z)) {
            // A red parent is never the root, so the grandparent exists.
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            let parent_side = self.side_in(grandparent, parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if self.is_red(uncle) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if self.side_in(parent, z) != parent_side {
                // Inner child: straighten the zig-zag first.
                z = parent;
                self.rotate(z, parent_side);
            }

            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}

impl<K: Ord, V> RedBlackTreeMap<K, V> {
    /// Inserts a key-value pair into the tree.
    ///
    /// Returns `true` if the key was new. An existing key keeps its value;
    /// use [`replace`](Self::replace) to overwrite.
    ///
    /// Running out of memory aborts the process; use
    /// [`try_insert`](Self::try_insert) to observe allocation failure instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTreeMap;
    ///
    /// let mut tree = RedBlackTreeMap::new();
    /// assert!(tree.insert(1, "one"));
    /// assert!(!tree.insert(1, "uno"));
    /// assert_eq!(tree.get(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let Placement::Vacant { parent, side } = self.place(&key, &NaturalOrder) else {
            return false;
        };
        let id = self.nodes.allocate(Node::new_red(key, value));
        self.attach(id, parent, side);
        true
    }

    /// Inserts a key-value pair, reporting allocation failure as an error.
    pub fn try_insert(&mut self, key: K, value: V) -> ModifyResult<bool> {
        self.insert_by(key, value, &NaturalOrder)
    }

    /// Inserts or overwrites, returning the previous value for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use redblacktree::RedBlackTreeMap;
    ///
    /// let mut tree = RedBlackTreeMap::new();
    /// assert_eq!(tree.replace(1, "one"), None);
    /// assert_eq!(tree.replace(1, "uno"), Some("one"));
    /// assert_eq!(tree.get(&1), Some(&"uno"));
    /// ```
    pub fn replace(&mut self, key: K, value: V) -> Option<V> {
        match self.place(&key, &NaturalOrder) {
            Placement::Occupied(id) => Some(std::mem::replace(&mut self.nodes[id].value, value)),
            Placement::Vacant { parent, side } => {
                let id = self.nodes.allocate(Node::new_red(key, value));
                self.attach(id, parent, side);
                None
            }
        }
    }

    /// Inserts every pair in `items`, stopping at the first allocation failure.
    ///
    /// Returns how many pairs were new.
    pub fn batch_insert<I>(&mut self, items: I) -> ModifyResult<usize>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut inserted = 0;
        for (key, value) in items {
            if self.try_insert(key, value)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}
