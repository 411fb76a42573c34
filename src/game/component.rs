//! Component Storage
//!
//! Components are plain data attached to entities. This module provides
//! `ComponentStorage<T>` - a sparse set that maps entity indices to
//! component data kept densely in attachment order.
//!
//! Iteration follows the order in which components were first attached,
//! not the entity index order, so systems visit entities the way the
//! scene was assembled.

use std::any::type_name;

use super::entity::Entity;

/// Sparse-set storage for a single component type.
pub struct ComponentStorage<T> {
    /// Sparse array indexed by entity.index(), pointing into `dense`
    sparse: Vec<Option<usize>>,
    /// Components in attachment order
    dense: Vec<(Entity, T)>,
}

impl<T> ComponentStorage<T> {
    /// Create empty storage.
    pub fn new() -> Self {
        Self {
            sparse: Vec::new(),
            dense: Vec::new(),
        }
    }

    /// Ensure the sparse array can hold an entity at the given index.
    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.sparse.len() {
            self.sparse.resize(index + 1, None);
        }
    }

    fn slot(&self, entity: Entity) -> Option<usize> {
        self.sparse.get(entity.index() as usize).copied().flatten()
    }

    /// Insert a component for an entity.
    /// Replaces any existing component, keeping its place in the order.
    /// Returns the replaced component if there was one.
    pub fn insert(&mut self, entity: Entity, component: T) -> Option<T> {
        if let Some(slot) = self.slot(entity) {
            return Some(std::mem::replace(&mut self.dense[slot].1, component));
        }

        let idx = entity.index() as usize;
        self.ensure_capacity(idx);
        self.sparse[idx] = Some(self.dense.len());
        self.dense.push((entity, component));
        None
    }

    /// Get a reference to an entity's component.
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.slot(entity).map(|slot| &self.dense[slot].1)
    }

    /// Get an entity's component, panicking if it has none.
    ///
    /// A system asking for a component the entity was never given is a
    /// broken scene, not something to paper over with a default.
    #[track_caller]
    pub fn expect(&self, entity: Entity) -> &T {
        match self.get(entity) {
            Some(component) => component,
            None => missing::<T>(entity),
        }
    }

    /// Mutable variant of [`ComponentStorage::expect`].
    #[track_caller]
    pub fn expect_mut(&mut self, entity: Entity) -> &mut T {
        match self.slot(entity) {
            Some(slot) => &mut self.dense[slot].1,
            None => missing::<T>(entity),
        }
    }

    /// Check if an entity has this component.
    pub fn contains(&self, entity: Entity) -> bool {
        self.slot(entity).is_some()
    }

    /// Iterate over all (entity, component) pairs in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.dense.iter().map(|(entity, component)| (*entity, component))
    }

    /// Iterate mutably over all (entity, component) pairs in attachment order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.dense.iter_mut().map(|(entity, component)| (*entity, component))
    }

    /// Entities holding this component, in attachment order.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.dense.iter().map(|(entity, _)| *entity)
    }

    /// Get the number of entities that have this component.
    pub fn count(&self) -> usize {
        self.dense.len()
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
#[track_caller]
fn missing<T>(entity: Entity) -> ! {
    panic!("entity {} has no {} component", entity, short_type_name::<T>())
}

/// `crate::game::components::Position` -> `Position`
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
