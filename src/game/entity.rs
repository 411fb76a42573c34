//! Entity identifiers
//!
//! Entities are lightweight identifiers that reference game objects.
//! They carry no data of their own; everything interesting lives in
//! component storages keyed by the entity's index.
//!
//! The shooter never destroys entities, so an index is never reused and
//! no generation counter is needed to detect stale references.

use std::fmt;

/// A unique identifier for a game entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    /// Index into the component storages
    index: u32,
}

impl Entity {
    /// Create an entity with the given index.
    /// Should only be called by EntityAllocator (and tests).
    pub(crate) fn new(index: u32) -> Self {
        Self { index }
    }

    /// Get the index of this entity (for component array access).
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Hands out entity identifiers in creation order.
pub struct EntityAllocator {
    /// Next fresh index
    next_fresh: u32,
}

impl EntityAllocator {
    /// Create a new allocator with no entities.
    pub fn new() -> Self {
        Self { next_fresh: 0 }
    }

    /// Allocate a new entity.
    pub fn allocate(&mut self) -> Entity {
        let entity = Entity::new(self.next_fresh);
        self.next_fresh += 1;
        entity
    }

    /// Check if an entity was handed out by this allocator.
    pub fn is_alive(&self, entity: Entity) -> bool {
        entity.index < self.next_fresh
    }

    /// Number of entities allocated so far.
    pub fn alive_count(&self) -> u32 {
        self.next_fresh
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
