//! Screens
//!
//! A screen is a [`Scene`] (world + schedule + last draw batch) plus the
//! rules for leaving it. The title screen only renders labels; the game
//! screen runs the full control/move/render schedule.

mod play;
mod title;

pub use play::build_game;
pub use title::build_title;

use crate::game::systems::{Schedule, SystemContext};
use crate::game::World;
use crate::input::{InputState, Key};
use crate::render::{DrawBatch, Surface};

/// The available screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Title,
    Game,
}

impl ScreenId {
    pub fn label(&self) -> &'static str {
        match self {
            ScreenId::Title => "Title",
            ScreenId::Game => "Game",
        }
    }
}

/// What the app should do after a screen looked at this frame's input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Goto(ScreenId),
    Quit,
}

/// Navigation rules. Only keys that went down this frame count, so a held
/// ESCAPE leaves the game without also quitting from the title screen.
pub fn transition(screen: ScreenId, input: &InputState) -> Transition {
    match screen {
        ScreenId::Title if input.key_pressed(Key::Confirm) => Transition::Goto(ScreenId::Game),
        ScreenId::Title if input.key_pressed(Key::Back) => Transition::Quit,
        ScreenId::Game if input.key_pressed(Key::Back) => Transition::Goto(ScreenId::Title),
        _ => Transition::Stay,
    }
}

/// A world, the systems that drive it, and what it looked like last tick
pub struct Scene {
    pub world: World,
    schedule: Schedule,
    batch: DrawBatch,
}

impl Scene {
    pub fn new(world: World, schedule: Schedule) -> Self {
        Self {
            world,
            schedule,
            batch: DrawBatch::new(),
        }
    }

    /// Run the schedule once
    pub fn tick(&mut self, dt: f32, input: &InputState, surface: &dyn Surface) {
        let mut ctx = SystemContext {
            dt,
            input,
            surface,
            batch: &mut self.batch,
        };
        self.schedule.run(&mut self.world, &mut ctx);
    }

    /// Submit the latest batch to the surface
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.submit(&self.batch);
    }

    #[allow(dead_code)]
    pub fn batch(&self) -> &DrawBatch {
        &self.batch
    }
}
