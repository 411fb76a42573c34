//! Game Foundation Module
//!
//! A small ECS for a 2D arcade shooter. Entities are plain ids, components
//! are plain data, systems are per-tick transformers over the world.
//!
//! Key concepts:
//! - Entity: Opaque id handed out by the world
//! - Component: Plain data structs attached to entities
//! - World: Container for all entities and their components
//! - System: Control, Move and Render, run in that order every tick
//!
//! Design philosophy:
//! - Simple over flexible (we know what game we're making)
//! - No runtime type registration (compile-time known components)
//! - A missing component that a system needs is a bug, so it panics

pub mod clock;
pub mod component;
pub mod components;
pub mod entity;
pub mod systems;
pub mod world;

// Re-export main types
pub use clock::FixedStep;
pub use entity::Entity;
pub use world::World;
