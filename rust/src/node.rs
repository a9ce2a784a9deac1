//! Node construction and the link/color accessors the balancing code uses.
//!
//! Every accessor treats `NULL_NODE` as an absent, black leaf so the fixup
//! loops can ask about missing children without special cases.

use crate::types::{Color, Node, NodeId, RedBlackTreeMap, Side, NULL_NODE};

impl<K, V> Node<K, V> {
    /// Creates a detached red node, the shape every insertion starts from.
    pub(crate) fn new_red(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent: NULL_NODE,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut NodeId {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> RedBlackTreeMap<K, V> {
    #[inline]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        if id == NULL_NODE {
            Color::Black
        } else {
            self.nodes[id].color
        }
    }

    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        self.color(id) == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        self.color(id) == Color::Black
    }

    /// Recolors a concrete node; absent nodes are already black.
    #[inline]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id != NULL_NODE {
            self.nodes[id].color = color;
        }
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.nodes[id].parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        if id != NULL_NODE {
            self.nodes[id].parent = parent;
        }
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.nodes[id].child(side)
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        *self.nodes[id].child_mut(side) = child;
    }

    /// Which slot of its parent `id` occupies, decided by id identity.
    ///
    /// `id` may be `NULL_NODE` as long as `parent` is given explicitly; the
    /// delete fixup needs that for an absent replacement node.
    #[inline]
    pub(crate) fn side_in(&self, parent: NodeId, id: NodeId) -> Side {
        if self.nodes[parent].left == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn subtree_min(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.nodes[id].left != NULL_NODE {
            id = self.nodes[id].left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn subtree_max(&self, mut id: NodeId) -> NodeId {
        if id == NULL_NODE {
            return NULL_NODE;
        }
        while self.nodes[id].right != NULL_NODE {
            id = self.nodes[id].right;
        }
        id
    }

    /// In-order neighbour of `id` in direction `side` (`Right` = successor).
    pub(crate) fn step(&self, id: NodeId, side: Side) -> NodeId {
        let child = self.child(id, side);
        if child != NULL_NODE {
            return match side {
                Side::Right => self.subtree_min(child),
                Side::Left => self.subtree_max(child),
            };
        }

        let mut current = id;
        let mut parent = self.parent(current);
        while parent != NULL_NODE && self.child(parent, side) == current {
            current = parent;
            parent = self.parent(current);
        }
        parent
    }

    /// Key/value pair held by `id`, or `None` for `NULL_NODE`.
    pub(crate) fn entry(&self, id: NodeId) -> Option<(&K, &V)> {
        self.nodes.get(id).map(|node| (&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_detached_red_leaf() {
        let node = Node::new_red(5, "five");
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.child(Side::Left), NULL_NODE);
        assert_eq!(node.child(Side::Right), NULL_NODE);
        assert_eq!(node.parent, NULL_NODE);
        assert_eq!(node.into_entry(), (5, "five"));
    }

    #[test]
    fn test_absent_nodes_read_as_black() {
        let mut tree: RedBlackTreeMap<i32, i32> = RedBlackTreeMap::new();
        assert!(tree.is_black(NULL_NODE));
        assert!(!tree.is_red(NULL_NODE));
        tree.set_color(NULL_NODE, Color::Red);
        tree.set_parent(NULL_NODE, 0);
        assert_eq!(tree.subtree_min(NULL_NODE), NULL_NODE);
        assert_eq!(tree.entry(NULL_NODE), None);
    }

    #[test]
    fn test_step_walks_in_order() {
        let tree: RedBlackTreeMap<i32, ()> = (1..=15).map(|k| (k, ())).collect();
        let mut id = tree.subtree_min(tree.root);
        let mut seen = Vec::new();
        while id != NULL_NODE {
            seen.push(tree.nodes[id].key);
            id = tree.step(id, Side::Right);
        }
        assert_eq!(seen, (1..=15).collect::<Vec<_>>());

        let mut id = tree.subtree_max(tree.root);
        let mut back = Vec::new();
        while id != NULL_NODE {
            back.push(tree.nodes[id].key);
            id = tree.step(id, Side::Left);
        }
        assert_eq!(back, (1..=15).rev().collect::<Vec<_>>());
    }
}
