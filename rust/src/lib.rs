//! Red-black tree ordered map in Rust with a dict-like API.
//!
//! [`RedBlackTreeMap`] keeps its nodes in an arena and links them by id, with
//! parent back-references used for fixup and neighbour queries. Two API
//! layers are offered:
//!
//! - an owning, dict-like layer for `K: Ord` (`insert`, `get`, `remove`,
//!   `predecessor`, ...);
//! - a strategy layer (`insert_with`, `search_by`, `remove_with`, `destroy`,
//!   ...) that takes a [`KeyOrder`], an [`EntryCloner`] or an
//!   [`EntryDestroyer`] on every call.
//!
//! ```
//! use redblacktree::{CloneEntries, DropEntries, RedBlackTreeMap, ReverseOrder};
//!
//! let mut tree = RedBlackTreeMap::new();
//! for word in ["pear", "apple", "fig"] {
//!     tree.insert_with(&word.to_string(), &word.len(), &ReverseOrder, &CloneEntries)
//!         .unwrap();
//! }
//! let keys: Vec<_> = tree.keys().cloned().collect();
//! assert_eq!(keys, ["pear", "fig", "apple"]);
//!
//! assert!(tree.remove_with(&"fig".to_string(), &ReverseOrder, &DropEntries));
//! assert_eq!(tree.len(), 2);
//! assert!(tree.check_invariants_by(&ReverseOrder).is_ok());
//! ```

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod ordering;
mod rotation;
mod types;
mod validation;

pub use arena::{ArenaStats, NodeArena};
pub use error::{
    InitResult, KeyResult, ModifyResult, RedBlackTreeError, TreeMapResult, TreeResultExt,
};
pub use iteration::{ItemIterator, KeyIterator, ValueIterator};
pub use ordering::{
    CloneEntries, DropEntries, EntryCloner, EntryDestroyer, FnCloner, FnDestroyer, KeyOrder,
    NaturalOrder, ReverseOrder,
};
pub use types::{Color, NodeId, RedBlackTreeMap, DEFAULT_CAPACITY, NULL_NODE};
