//! Application state and screen management
//!
//! One screen is live at a time. Switching screens rebuilds it from the
//! config, so going back to the title and starting again gives a fresh game.

use std::collections::HashMap;

use log::info;

use crate::config::GameConfig;
use crate::game::FixedStep;
use crate::input::InputState;
use crate::render::{FontId, ImageHandle, Surface};
use crate::screen::{self, build_game, build_title, Scene, ScreenId, Transition};

/// Images and font loaded at startup, looked up by file name
#[derive(Debug, Default)]
pub struct Assets {
    images: HashMap<String, ImageHandle>,
    /// Font for every label
    pub font: FontId,
}

impl Assets {
    pub fn insert_image(&mut self, name: impl Into<String>, image: ImageHandle) {
        self.images.insert(name.into(), image);
    }

    pub fn image(&self, name: &str) -> Option<ImageHandle> {
        self.images.get(name).copied()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Whether the main loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main application state
pub struct AppState {
    /// Currently active screen
    pub active_screen: ScreenId,
    scene: Scene,
    config: GameConfig,
    assets: Assets,
    /// Keyboard state, polled once per frame
    pub input: InputState,
    clock: FixedStep,
}

impl AppState {
    /// Start on the title screen
    pub fn new(config: GameConfig, assets: Assets) -> Self {
        let scene = build_title(&assets, config.center_x());
        let clock = FixedStep::new(config.tick_rate, config.max_ticks_per_frame);
        Self {
            active_screen: ScreenId::Title,
            scene,
            config,
            assets,
            input: InputState::new(),
            clock,
        }
    }

    /// Switch to a different screen, building it from scratch
    pub fn set_active_screen(&mut self, screen: ScreenId) {
        info!(
            "Screen: {} -> {} (tick {})",
            self.active_screen.label(),
            screen.label(),
            self.clock.ticks()
        );
        self.scene = match screen {
            ScreenId::Title => build_title(&self.assets, self.config.center_x()),
            ScreenId::Game => build_game(&self.config, &self.assets),
        };
        self.active_screen = screen;
    }

    #[allow(dead_code)]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Run one frame: poll input, navigate, run the ticks that are due and
    /// submit the resulting batch.
    pub fn frame(&mut self, frame_time: f32, surface: &mut dyn Surface) -> Flow {
        self.input.poll(&*surface);

        match screen::transition(self.active_screen, &self.input) {
            Transition::Stay => {}
            Transition::Goto(next) => self.set_active_screen(next),
            Transition::Quit => {
                info!("Quit requested");
                return Flow::Quit;
            }
        }

        let ticks = self.clock.advance(frame_time);
        let dt = self.clock.step();
        for _ in 0..ticks {
            self.scene.tick(dt, &self.input, &*surface);
        }

        self.scene.draw(surface);
        Flow::Continue
    }
}
