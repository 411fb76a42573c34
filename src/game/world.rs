//! Game World
//!
//! The World is the entity registry:
//! - Entity allocation
//! - Component storage for all component types
//! - Typed lookup and "every entity with component T" queries
//!
//! Components are stored in typed fields rather than a HashMap<TypeId, ...>
//! because we know exactly what components we need at compile time. The
//! [`Component`] trait maps each type to its field so callers can still
//! write `world.get::<Position>(entity)`, while systems that need two
//! storages at once borrow the fields directly.

use log::debug;

use super::component::ComponentStorage;
use super::components::*;
use super::entity::{Entity, EntityAllocator};
use crate::render::{FontId, ImageHandle};

/// A type that has a storage in the [`World`].
pub trait Component: Sized + 'static {
    fn storage(world: &World) -> &ComponentStorage<Self>;
    fn storage_mut(world: &mut World) -> &mut ComponentStorage<Self>;
}

macro_rules! impl_component {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl Component for $ty {
                fn storage(world: &World) -> &ComponentStorage<Self> {
                    &world.$field
                }

                fn storage_mut(world: &mut World) -> &mut ComponentStorage<Self> {
                    &mut world.$field
                }
            }
        )*
    };
}

impl_component! {
    Position => positions,
    Velocity => velocities,
    Controllable => controllables,
    Renderable => renderables,
    InputHandler => input_handlers,
}

/// The game world containing all entities and their components.
pub struct World {
    /// Entity allocator for creating entities
    entities: EntityAllocator,

    /// Location in normalized window coordinates
    pub positions: ComponentStorage<Position>,

    /// Velocity for moving entities
    pub velocities: ComponentStorage<Velocity>,

    /// Marks entities steered by the arrow keys
    pub controllables: ComponentStorage<Controllable>,

    /// Sprites and text labels
    pub renderables: ComponentStorage<Renderable>,

    /// Per-entity input strategies
    pub input_handlers: ComponentStorage<InputHandler>,
}

impl World {
    /// Create a new empty world.
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            positions: ComponentStorage::new(),
            velocities: ComponentStorage::new(),
            controllables: ComponentStorage::new(),
            renderables: ComponentStorage::new(),
            input_handlers: ComponentStorage::new(),
        }
    }

    // =========================================================================
    // Entity Management
    // =========================================================================

    /// Spawn a new entity with no components.
    pub fn spawn(&mut self) -> Entity {
        self.entities.allocate()
    }

    /// Check if an entity was spawned by this world.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Get the number of spawned entities.
    pub fn entity_count(&self) -> u32 {
        self.entities.alive_count()
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Attach a component to an entity, replacing any previous one of the
    /// same type.
    #[track_caller]
    pub fn attach<T: Component>(&mut self, entity: Entity, component: T) -> &mut Self {
        assert!(self.is_alive(entity), "entity {} does not belong to this world", entity);
        T::storage_mut(self).insert(entity, component);
        self
    }

    /// Get an entity's component. Panics if the entity lacks it.
    #[track_caller]
    #[allow(dead_code)]
    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        T::storage(self).expect(entity)
    }

    /// Get an entity's component mutably. Panics if the entity lacks it.
    #[track_caller]
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
        T::storage_mut(self).expect_mut(entity)
    }

    /// Get an entity's component if it has one.
    #[allow(dead_code)]
    pub fn try_get<T: Component>(&self, entity: Entity) -> Option<&T> {
        T::storage(self).get(entity)
    }

    #[allow(dead_code)]
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        T::storage(self).contains(entity)
    }

    /// Every (entity, component) pair for component type `T`, in
    /// attachment order.
    #[allow(dead_code)]
    pub fn pairs<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        T::storage(self).iter()
    }

    /// Number of entities holding component type `T`.
    #[allow(dead_code)]
    pub fn count<T: Component>(&self) -> usize {
        T::storage(self).count()
    }

    // =========================================================================
    // Convenience Spawners
    // =========================================================================

    /// Spawn an entity drawn as `image`, `proportion` of the window wide.
    pub fn spawn_sprite(&mut self, image: ImageHandle, proportion: f32, position: Position) -> Entity {
        let entity = self.spawn();
        debug!("spawned sprite {} with image {:?} at ({}, {})", entity, image.id, position.x, position.y);
        self.attach(entity, position)
            .attach(entity, Renderable::from(Sprite::new(image, proportion)));
        entity
    }

    /// Spawn a text label whose font is `proportion` of the window tall.
    pub fn spawn_label(&mut self, text: &str, font: FontId, proportion: f32, position: Position) -> Entity {
        let entity = self.spawn();
        debug!("spawned label {} {:?}", entity, text);
        self.attach(entity, position)
            .attach(entity, Renderable::from(Label::new(text, font, proportion)));
        entity
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
