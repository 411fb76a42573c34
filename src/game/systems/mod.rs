//! Systems and the per-tick schedule
//!
//! A system is a per-tick transformer over the [`World`]. Everything a
//! system may look at besides the world arrives through [`SystemContext`],
//! so a system can't run without a surface to read the window size from.

mod control;
mod movement;
mod render;

pub use control::{arrow_velocity, ControlSystem};
pub use movement::MoveSystem;
pub use render::RenderSystem;

use log::trace;

use super::World;
use crate::input::InputState;
use crate::render::{DrawBatch, Surface};

/// Per-tick inputs shared by every system
pub struct SystemContext<'a> {
    /// Seconds covered by this tick
    pub dt: f32,
    /// Key states for this frame
    pub input: &'a InputState,
    /// Window the scene is shown in
    pub surface: &'a dyn Surface,
    /// Draw commands for the next paint
    pub batch: &'a mut DrawBatch,
}

pub trait System {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Advance the system by one tick
    fn update(&mut self, world: &mut World, ctx: &mut SystemContext<'_>);
}

/// Systems run in the order they were added, once per tick.
#[derive(Default)]
pub struct Schedule {
    systems: Vec<Box<dyn System>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control, Move, Render: input first so movement uses this tick's
    /// velocities, render last so the batch shows this tick's positions.
    pub fn standard(control_speed: f32) -> Self {
        let mut schedule = Self::new();
        schedule.add_system(ControlSystem::new(control_speed));
        schedule.add_system(MoveSystem);
        schedule.add_system(RenderSystem);
        schedule
    }

    pub fn add_system(&mut self, system: impl System + 'static) -> &mut Self {
        self.systems.push(Box::new(system));
        self
    }

    /// Run every system once
    pub fn run(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        for system in &mut self.systems {
            trace!("running {} (dt {:.4})", system.name(), ctx.dt);
            system.update(world, ctx);
        }
    }

    #[allow(dead_code)]
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{Controllable, Position, Velocity};
    use crate::input::Key;
    use crate::render::RecordingSurface;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_order() {
        let schedule = Schedule::standard(0.2);
        assert_eq!(schedule.system_names(), vec!["control", "move", "render"]);
    }

    #[test]
    fn test_control_applies_before_move() {
        let mut world = World::new();
        let ship = world.spawn();
        world
            .attach(ship, Position::new(0.5, 0.5))
            .attach(ship, Velocity::ZERO)
            .attach(ship, Controllable);

        let surface = RecordingSurface::new(800.0, 600.0);
        let input = InputState::with_keys(&[Key::Right]);
        let mut batch = DrawBatch::new();
        let mut schedule = Schedule::standard(0.2);

        let mut ctx = SystemContext { dt: 0.5, input: &input, surface: &surface, batch: &mut batch };
        schedule.run(&mut world, &mut ctx);

        // Velocity set this tick is already integrated this tick
        assert_relative_eq!(world.get::<Position>(ship).x, 0.6);
    }
}
