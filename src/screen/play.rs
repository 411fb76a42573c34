//! Game screen: the configured scene plus a controls hint

use log::{info, warn};

use crate::app::Assets;
use crate::config::{GameConfig, InputConfig, SpawnConfig};
use crate::game::components::{Controllable, InputHandler, Position};
use crate::game::systems::Schedule;
use crate::game::{Entity, World};
use super::Scene;

pub const HINT_TEXT: &str = "ARROWS move, ESC for title";

pub fn build_game(config: &GameConfig, assets: &Assets) -> Scene {
    let mut world = World::new();

    for spawn in &config.scene {
        spawn_from_config(&mut world, spawn, config.control_speed, assets);
    }
    world.spawn_label(HINT_TEXT, assets.font, 0.03, Position::new(config.center_x(), 0.03));

    info!("Game scene ready with {} entities", world.entity_count());
    Scene::new(world, Schedule::standard(config.control_speed))
}

/// Spawn one configured entity. Every sprite gets a velocity so the move
/// system can integrate it, plus its marker and input strategy if any.
fn spawn_from_config(world: &mut World, spawn: &SpawnConfig, control_speed: f32, assets: &Assets) -> Option<Entity> {
    let Some(image) = assets.image(&spawn.image) else {
        warn!("No image loaded for {:?}, skipping", spawn.image);
        return None;
    };

    let entity = world.spawn_sprite(image, spawn.size, spawn.position);
    world.attach(entity, spawn.velocity);
    if spawn.controllable {
        world.attach(entity, Controllable);
    }
    if let Some(input) = spawn.input {
        world.attach(entity, input_handler(input, control_speed));
    }
    Some(entity)
}

fn input_handler(input: InputConfig, control_speed: f32) -> InputHandler {
    match input {
        InputConfig::Arrows { speed } => InputHandler::Arrows {
            speed: speed.unwrap_or(control_speed),
        },
    }
}
