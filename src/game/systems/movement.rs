//! Move system
//!
//! Explicit Euler integration: `position += velocity * dt`. Positions are
//! not clamped, so entities can leave the window and never come back.

use crate::game::World;
use super::{System, SystemContext};

pub struct MoveSystem;

impl System for MoveSystem {
    fn name(&self) -> &'static str {
        "move"
    }

    fn update(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        for (entity, velocity) in world.velocities.iter() {
            let position = world.positions.expect_mut(entity);
            position.x += velocity.dx * ctx.dt;
            position.y += velocity.dy * ctx.dt;
        }
    }
}
