//! SPACE SHOOTER: a small 2D arcade shooter
//!
//! A player ship steered with the arrow keys and an enemy drifting in from
//! the right, driven by a tiny ECS:
//! - Control, Move and Render systems run on a fixed 120 Hz tick
//! - Positions are normalized to the window height
//! - Sprites and labels rescale with the window

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod game;
mod input;
mod render;
mod screen;

use lazy_static::lazy_static;
use log::{error, info, warn};
use macroquad::prelude::{get_frame_time, next_frame, Conf};

use app::{AppState, Assets, Flow};
use config::{ConfigError, GameConfig};
use render::{FontId, MacroquadSurface};

lazy_static! {
    /// Read once, on first use by `window_conf`. The logger isn't up yet at
    /// that point, so `main` reports the outcome.
    static ref STARTUP_CONFIG: Result<GameConfig, ConfigError> =
        GameConfig::load_or_default(&GameConfig::default_path());
}

/// The loaded config, or the defaults if it failed to load
fn startup_config() -> GameConfig {
    STARTUP_CONFIG.as_ref().ok().cloned().unwrap_or_default()
}

fn window_conf() -> Conf {
    let config = startup_config();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: config.window.resizable,
        ..Default::default()
    }
}

/// Load every image the scene names, plus the label font
async fn load_assets(config: &GameConfig, surface: &mut MacroquadSurface) -> Assets {
    let mut assets = Assets::default();

    for spawn in &config.scene {
        if assets.image(&spawn.image).is_some() {
            continue;
        }
        let handle = surface.load_image_or_placeholder(&config.asset_path(&spawn.image)).await;
        assets.insert_image(spawn.image.clone(), handle);
    }

    assets.font = match &config.font {
        Some(name) => match surface.load_font(&config.asset_path(name)).await {
            Ok(font) => {
                info!("Loaded font {:?}", name);
                font
            }
            Err(e) => {
                warn!("{}, using built-in font", e);
                FontId::BUILTIN
            }
        },
        None => FontId::BUILTIN,
    };

    assets
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("=== SPACE SHOOTER v{} ===", VERSION);

    let path = GameConfig::default_path();
    match &*STARTUP_CONFIG {
        Ok(_) => info!("Config: {:?} (defaults if absent)", path),
        Err(e) => error!("Failed to load config {:?}: {}, using defaults", path, e),
    }
    let config = startup_config();

    let mut surface = MacroquadSurface::new();
    let assets = load_assets(&config, &mut surface).await;
    info!("Loaded {} images", assets.image_count());

    let show_fps = config.show_fps;
    let mut app = AppState::new(config, assets);

    loop {
        surface.begin_frame();

        if app.frame(get_frame_time(), &mut surface) == Flow::Quit {
            break;
        }

        if show_fps {
            surface.draw_fps();
        }

        next_frame().await;
    }

    info!("Bye");
}
