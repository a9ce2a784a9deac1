//! Core types and data structures for RedBlackTreeMap.
//!
//! This module contains the node layout, the color and side enums used by the
//! balancing code, and the tree handle itself.

use crate::arena::NodeArena;

pub use crate::arena::{NodeId, NULL_NODE};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of node slots reserved by `Default`.
pub const DEFAULT_CAPACITY: usize = 16;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Ordered map backed by a red-black tree whose nodes live in an arena.
///
/// Every node is colored red or black, and the balancing code keeps the
/// following true after each public operation:
///
/// - the root is black, and absent children count as black;
/// - no red node has a red child;
/// - every path from a node down to an absent child crosses the same number
///   of black nodes.
///
/// Together these bound the height by `2 * log2(n + 1)`.
///
/// # Type Parameters
///
/// * `K` - Key type. The owning API requires `K: Ord`; the `*_by`/`*_with`
///   API takes an explicit [`KeyOrder`](crate::KeyOrder) instead.
/// * `V` - Value type, unconstrained.
///
/// # Examples
///
/// ```
/// use redblacktree::RedBlackTreeMap;
///
/// let mut tree = RedBlackTreeMap::new();
/// tree.insert(1, "one");
/// tree.insert(2, "two");
/// tree.insert(3, "three");
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.successor(&2), Some((&3, &"three")));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n), at most two rotations
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n), at most three rotations
/// - **Predecessor/successor**: O(log n)
/// - **Iteration**: O(n), no auxiliary stack
#[derive(Debug, Clone)]
pub struct RedBlackTreeMap<K, V> {
    /// Id of the root node, `NULL_NODE` when the tree is empty.
    pub(crate) root: NodeId,
    /// Storage for every node reachable from `root`.
    pub(crate) nodes: NodeArena<Node<K, V>>,
}

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// A single tree cell.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    /// Back-reference used for upward walks; never owns.
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The mirror side.
    #[inline]
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Where a key lives, or where it would be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// The key is already stored in this node.
    Occupied(NodeId),
    /// The key is absent; a new node belongs under `parent` on `side`.
    /// `parent == NULL_NODE` means the tree is empty.
    Vacant { parent: NodeId, side: Side },
}
