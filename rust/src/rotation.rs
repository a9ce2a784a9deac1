//! Rotation primitives shared by the insert and delete fixups.

use crate::types::{NodeId, RedBlackTreeMap, Side, NULL_NODE};

impl<K, V> RedBlackTreeMap<K, V> {
    /// Rotates `x` down towards `side`, promoting its child on the opposite
    /// side into `x`'s position.
    ///
    /// `rotate(x, Side::Left)` is the classic left rotation: `y = x.right`
    /// takes `x`'s place, `x` becomes `y.left`, and `y`'s former left subtree
    /// becomes `x.right`. In-order sequence and colors are unchanged.
    pub(crate) fn rotate(&mut self, x: NodeId, side: Side) {
        let promoted_side = side.opposite();
        let y = self.child(x, promoted_side);
        debug_assert!(y != NULL_NODE, "rotation requires a child to promote");

        let inner = self.child(y, side);
        self.set_child(x, promoted_side, inner);
        self.set_parent(inner, x);

        let x_parent = self.parent(x);
        self.set_parent(y, x_parent);
        if x_parent == NULL_NODE {
            self.root = y;
        } else {
            let slot = self.side_in(x_parent, x);
            self.set_child(x_parent, slot, y);
        }

        self.set_child(y, side, x);
        self.set_parent(x, y);

        tracing::trace!(pivot = x, promoted = y, ?side, "rotated");
    }
}
