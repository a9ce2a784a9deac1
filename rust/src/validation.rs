//! Validation and debugging utilities for RedBlackTreeMap.
//!
//! This module contains invariant checking, structure inspection and debug
//! printing. Every walk is iterative.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::{RedBlackTreeError, TreeMapResult, TreeResult};
use crate::ordering::{KeyOrder, NaturalOrder};
use crate::types::{Color, NodeId, RedBlackTreeMap, Side, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K, V> RedBlackTreeMap<K, V> {
    /// Check every structural and coloring rule, ordering keys with `order`.
    ///
    /// Verifies, in this order: link consistency and reachability, that the
    /// arena holds exactly the reachable nodes, the root color, the red rule,
    /// equal black-heights, and strictly increasing in-order keys.
    pub fn check_invariants_by<O>(&self, order: &O) -> TreeMapResult<()>
    where
        O: KeyOrder<K> + ?Sized,
    {
        let reachable = self.check_links()?;
        if reachable != self.nodes.len() {
            return Err(RedBlackTreeError::arena_error(
                "Arena consistency check",
                &format!(
                    "{} nodes reachable from root vs {} in arena",
                    reachable,
                    self.nodes.len()
                ),
            ));
        }

        if self.is_red(self.root) {
            return Err(RedBlackTreeError::invariant_violation(
                "Root color",
                &format!("root {} is red", self.root),
            ));
        }

        self.check_red_rule()?;
        self.check_black_height()?;
        self.check_order(order)
    }

    /// Walks the tree from the root checking that every child points back at
    /// its parent and that no id is visited twice. Returns the node count.
    fn check_links(&self) -> TreeResult<usize> {
        if self.root == NULL_NODE {
            return Ok(0);
        }

        let mut visited = 0usize;
        let mut stack = vec![(self.root, NULL_NODE)];
        while let Some((id, expected_parent)) = stack.pop() {
            let node = self.nodes.get(id).ok_or_else(|| {
                RedBlackTreeError::corrupted_tree("Links", &format!("dangling node id {}", id))
            })?;
            if node.parent != expected_parent {
                return Err(RedBlackTreeError::corrupted_tree(
                    "Links",
                    &format!(
                        "node {} records parent {} but hangs under {}",
                        id, node.parent, expected_parent
                    ),
                ));
            }

            visited += 1;
            if visited > self.nodes.len() {
                return Err(RedBlackTreeError::corrupted_tree(
                    "Links",
                    "more nodes reachable than allocated, links form a cycle",
                ));
            }

            for child in [node.left, node.right] {
                if child != NULL_NODE {
                    stack.push((child, id));
                }
            }
        }
        Ok(visited)
    }

    fn check_red_rule(&self) -> TreeResult<()> {
        for id in self.node_ids() {
            if !self.is_red(id) {
                continue;
            }
            for side in [Side::Left, Side::Right] {
                let child = self.child(id, side);
                if self.is_red(child) {
                    return Err(RedBlackTreeError::invariant_violation(
                        "Red rule",
                        &format!("red node {} has red {:?} child {}", id, side, child),
                    ));
                }
            }
        }
        Ok(())
    }

    fn check_black_height(&self) -> TreeResult<()> {
        self.black_height().map(|_| ()).ok_or_else(|| {
            RedBlackTreeError::invariant_violation(
                "Black height",
                "paths from the root cross different numbers of black nodes",
            )
        })
    }

    fn check_order<O>(&self, order: &O) -> TreeResult<()>
    where
        O: KeyOrder<K> + ?Sized,
    {
        let mut previous: Option<NodeId> = None;
        let mut id = self.subtree_min(self.root);
        while id != NULL_NODE {
            if let Some(prev) = previous {
                if order.compare(&self.nodes[prev].key, &self.nodes[id].key) != Ordering::Less {
                    return Err(RedBlackTreeError::invariant_violation(
                        "Search order",
                        &format!("node {} does not sort before its successor {}", prev, id),
                    ));
                }
            }
            previous = Some(id);
            id = self.step(id, Side::Right);
        }
        Ok(())
    }

    /// Number of black nodes on every path from the root to an absent child,
    /// counting the root itself.
    ///
    /// Returns `Some(0)` for an empty tree and `None` when paths disagree.
    pub fn black_height(&self) -> Option<usize> {
        if self.root == NULL_NODE {
            return Some(0);
        }

        let mut expected: Option<usize> = None;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, above)) = stack.pop() {
            let blacks = above + usize::from(self.is_black(id));
            for side in [Side::Left, Side::Right] {
                let child = self.child(id, side);
                if child != NULL_NODE {
                    stack.push((child, blacks));
                } else if *expected.get_or_insert(blacks) != blacks {
                    return None;
                }
            }
        }
        expected
    }

    /// Color of the root, or `None` for an empty tree.
    pub fn root_color(&self) -> Option<Color> {
        self.nodes.get(self.root).map(|node| node.color)
    }

    /// Count the nodes actually reachable from the root.
    pub fn count_nodes_in_tree(&self) -> usize {
        self.node_ids().count()
    }

    /// Pre-order ids of every reachable node.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = Vec::new();
        if self.root != NULL_NODE {
            stack.push(self.root);
        }
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let node = &self.nodes[id];
            for child in [node.right, node.left] {
                if child != NULL_NODE {
                    stack.push(child);
                }
            }
            Some(id)
        })
    }
}

impl<K: Ord, V> RedBlackTreeMap<K, V> {
    /// Check if the tree maintains red-black tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> TreeMapResult<()> {
        self.check_invariants_by(&NaturalOrder)
    }

    /// Color of the node holding `key`.
    pub fn color_of(&self, key: &K) -> Option<Color> {
        self.nodes
            .get(self.find_node(key, &NaturalOrder))
            .map(|node| node.color)
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K: Debug, V> RedBlackTreeMap<K, V> {
    /// Renders the tree sideways, one node per line, right subtree first.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.root == NULL_NODE {
            out.push_str("<empty>\n");
            return out;
        }

        // Reverse in-order so the picture reads top-down as right-to-left.
        let mut stack: Vec<(NodeId, usize, bool)> = vec![(self.root, 0, false)];
        while let Some((id, depth, expanded)) = stack.pop() {
            let node = &self.nodes[id];
            if expanded {
                let tag = match node.color {
                    Color::Red => 'R',
                    Color::Black => 'B',
                };
                out.push_str(&format!("{}{:?}{}\n", "    ".repeat(depth), node.key, tag));
                continue;
            }
            if node.left != NULL_NODE {
                stack.push((node.left, depth + 1, false));
            }
            stack.push((id, depth, true));
            if node.right != NULL_NODE {
                stack.push((node.right, depth + 1, false));
            }
        }
        out
    }

    /// Prints the tree structure for debugging.
    pub fn print_tree(&self) {
        println!("Tree structure:");
        print!("{}", self.render());
    }
}
