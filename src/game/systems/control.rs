//! Control system
//!
//! Turns key states into velocities. `Controllable` entities get the
//! stock arrow-key steering; entities with an [`InputHandler`] bring
//! their own strategy.

use crate::game::components::{InputHandler, Velocity};
use crate::game::World;
use crate::input::{InputState, Key};
use super::{System, SystemContext};

/// Velocity for the arrow keys currently held.
///
/// Each axis is -speed, 0 or +speed. LEFT wins over RIGHT and UP wins over
/// DOWN when both are held. Diagonals are not normalized, so they are
/// faster than straight moves.
pub fn arrow_velocity(input: &InputState, speed: f32) -> Velocity {
    let dx = if input.key_down(Key::Left) {
        -speed
    } else if input.key_down(Key::Right) {
        speed
    } else {
        0.0
    };

    let dy = if input.key_down(Key::Up) {
        speed
    } else if input.key_down(Key::Down) {
        -speed
    } else {
        0.0
    };

    Velocity::new(dx, dy)
}

pub struct ControlSystem {
    /// Steering speed for `Controllable` entities
    speed: f32,
}

impl ControlSystem {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl System for ControlSystem {
    fn name(&self) -> &'static str {
        "control"
    }

    fn update(&mut self, world: &mut World, ctx: &mut SystemContext<'_>) {
        let steer = arrow_velocity(ctx.input, self.speed);
        for entity in world.controllables.entities() {
            *world.velocities.expect_mut(entity) = steer;
        }

        // Handlers get the whole world, so collect them up front
        let handlers: Vec<_> = world.input_handlers.iter().map(|(e, h)| (e, *h)).collect();
        for (entity, handler) in handlers {
            match handler {
                InputHandler::Arrows { speed } => {
                    *world.get_mut::<Velocity>(entity) = arrow_velocity(ctx.input, speed);
                }
                InputHandler::Custom(handle) => handle(entity, world, ctx.input),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{Controllable, Position};
    use crate::game::Entity;
    use crate::render::{DrawBatch, RecordingSurface};

    fn steer(keys: &[Key]) -> Velocity {
        arrow_velocity(&InputState::with_keys(keys), 0.2)
    }

    #[test]
    fn test_no_keys_stops() {
        assert_eq!(steer(&[]), Velocity::new(0.0, 0.0));
    }

    #[test]
    fn test_left_only() {
        assert_eq!(steer(&[Key::Left]), Velocity::new(-0.2, 0.0));
    }

    #[test]
    fn test_diagonal_not_normalized() {
        let v = steer(&[Key::Left, Key::Up]);
        assert_eq!(v, Velocity::new(-0.2, 0.2));
        // Faster than a straight move: |v| = 0.2 * sqrt(2)
        assert!((v.dx.hypot(v.dy) - 0.2 * 2f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_keys_priority() {
        assert_eq!(steer(&[Key::Left, Key::Right]), Velocity::new(-0.2, 0.0));
        assert_eq!(steer(&[Key::Up, Key::Down]), Velocity::new(0.0, 0.2));
        assert_eq!(steer(&[Key::Right, Key::Down]), Velocity::new(0.2, -0.2));
    }

    #[test]
    fn test_all_nine_directions() {
        let mut seen = Vec::new();
        for h in [None, Some(Key::Left), Some(Key::Right)] {
            for v in [None, Some(Key::Up), Some(Key::Down)] {
                let keys: Vec<Key> = h.into_iter().chain(v).collect();
                let vel = steer(&keys);
                if !seen.contains(&vel) {
                    seen.push(vel);
                }
            }
        }
        assert_eq!(seen.len(), 9);
    }

    fn run_control(world: &mut World, system: &mut ControlSystem, keys: &[Key]) {
        let surface = RecordingSurface::new(800.0, 600.0);
        let input = InputState::with_keys(keys);
        let mut batch = DrawBatch::new();
        let mut ctx = SystemContext { dt: 1.0 / 120.0, input: &input, surface: &surface, batch: &mut batch };
        system.update(world, &mut ctx);
    }

    #[test]
    fn test_only_controllable_entities_steered() {
        let mut world = World::new();
        let player = world.spawn();
        world.attach(player, Velocity::ZERO).attach(player, Controllable);
        let enemy = world.spawn();
        world.attach(enemy, Velocity::new(-0.1, 0.0));

        run_control(&mut world, &mut ControlSystem::new(0.2), &[Key::Up]);

        assert_eq!(*world.get::<Velocity>(player), Velocity::new(0.0, 0.2));
        assert_eq!(*world.get::<Velocity>(enemy), Velocity::new(-0.1, 0.0));
    }

    #[test]
    fn test_arrows_handler_uses_own_speed() {
        let mut world = World::new();
        let e = world.spawn();
        world.attach(e, Velocity::ZERO).attach(e, InputHandler::Arrows { speed: 0.5 });

        run_control(&mut world, &mut ControlSystem::new(0.2), &[Key::Right]);
        assert_eq!(*world.get::<Velocity>(e), Velocity::new(0.5, 0.0));
    }

    #[test]
    fn test_custom_handler_called_with_entity() {
        fn warp_on_up(entity: Entity, world: &mut World, input: &InputState) {
            if input.key_down(Key::Up) {
                world.get_mut::<Position>(entity).y = 1.0;
            }
        }

        let mut world = World::new();
        let e = world.spawn();
        world.attach(e, Position::new(0.5, 0.0)).attach(e, InputHandler::Custom(warp_on_up));

        run_control(&mut world, &mut ControlSystem::new(0.2), &[]);
        assert_eq!(world.get::<Position>(e).y, 0.0);

        run_control(&mut world, &mut ControlSystem::new(0.2), &[Key::Up]);
        assert_eq!(world.get::<Position>(e).y, 1.0);
    }

    #[test]
    #[should_panic(expected = "has no Velocity component")]
    fn test_controllable_without_velocity_panics() {
        let mut world = World::new();
        let e = world.spawn();
        world.attach(e, Controllable);
        run_control(&mut world, &mut ControlSystem::new(0.2), &[Key::Left]);
    }
}
