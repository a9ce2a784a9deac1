//! Slot arena that owns every tree node.
//!
//! Nodes refer to each other by `NodeId` instead of pointers. Released slots
//! are chained through their `Vacant` entries and handed out again before the
//! backing vector grows, so removing never allocates.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

use crate::error::{RedBlackTreeError, TreeMapResult};

pub type NodeId = u32;
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for a node arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: NodeId },
}

/// Arena allocator addressed by `NodeId`
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    /// Head of the chain of vacant slots
    free_head: NodeId,
    free_count: usize,
    allocated_count: usize,
}

impl<T> NodeArena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: NULL_NODE,
            free_count: 0,
            allocated_count: 0,
        }
    }

    /// Create a new arena with room for `capacity` items before it grows
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Like `with_capacity`, but reports a failed reservation instead of
    /// aborting.
    pub fn try_with_capacity(capacity: usize) -> TreeMapResult<Self> {
        let mut arena = Self::new();
        arena
            .slots
            .try_reserve(capacity)
            .map_err(|e| RedBlackTreeError::allocation_error("node arena", &e.to_string()))?;
        Ok(arena)
    }

    /// Allocate a slot for `item`, reporting allocation failure to the caller.
    pub fn try_allocate(&mut self, item: T) -> TreeMapResult<NodeId> {
        if self.free_head != NULL_NODE {
            let id = self.free_head;
            let slot = &mut self.slots[id as usize];
            let next_free = match slot {
                Slot::Vacant { next_free } => *next_free,
                Slot::Occupied(_) => {
                    return Err(RedBlackTreeError::arena_error(
                        "Slot reuse",
                        &format!("free chain points at occupied slot {}", id),
                    ))
                }
            };
            *slot = Slot::Occupied(item);
            self.free_head = next_free;
            self.free_count -= 1;
            self.allocated_count += 1;
            return Ok(id);
        }

        let id = NodeId::try_from(self.slots.len())
            .ok()
            .filter(|&id| id != NULL_NODE)
            .ok_or_else(|| {
                RedBlackTreeError::allocation_error("node slot", "node id space exhausted")
            })?;
        self.slots
            .try_reserve(1)
            .map_err(|e| RedBlackTreeError::allocation_error("node slot", &e.to_string()))?;
        self.slots.push(Slot::Occupied(item));
        self.allocated_count += 1;
        Ok(id)
    }

    /// Allocate a slot for `item`; allocation failure aborts the process.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        match self.try_allocate(item) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(error = %e, "node arena allocation failed, aborting");
                std::process::abort()
            }
        }
    }

    /// Release a slot and return the item it held
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = self.occupied_index(id)?;
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(item) => {
                self.free_head = id;
                self.free_count += 1;
                self.allocated_count -= 1;
                Some(item)
            }
            Slot::Vacant { .. } => None,
        }
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(usize::try_from(id).ok()?)? {
            Slot::Occupied(item) => Some(item),
            Slot::Vacant { .. } => None,
        }
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(usize::try_from(id).ok()?)? {
            Slot::Occupied(item) => Some(item),
            Slot::Vacant { .. } => None,
        }
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.occupied_index(id).is_some()
    }

    fn occupied_index(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }
        let index = usize::try_from(id).ok()?;
        match self.slots.get(index)? {
            Slot::Occupied(_) => Some(index),
            Slot::Vacant { .. } => None,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.allocated_count
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.allocated_count == 0
    }

    /// Get the total capacity
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Get the number of vacant slots waiting for reuse
    pub fn free_count(&self) -> usize {
        self.free_count
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.slots.capacity();
        let utilization = if total_capacity > 0 {
            self.allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if self.slots.is_empty() {
            0.0
        } else {
            self.free_count as f64 / self.slots.len() as f64
        };

        ArenaStats {
            total_capacity,
            allocated_count: self.allocated_count,
            free_count: self.free_count,
            utilization,
            fragmentation,
        }
    }

    /// Clear all items from the arena, keeping the backing allocation
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = NULL_NODE;
        self.free_count = 0;
        self.allocated_count = 0;
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    /// Panics if `id` does not name an occupied slot.
    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("dangling node id {}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("dangling node id {}", id),
        }
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
