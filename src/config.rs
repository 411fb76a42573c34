//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable settings file.
//! Every field has a default, so a partial file only overrides what it
//! names and a missing file runs the stock game.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::components::{Position, Velocity};

/// Config file read when `SHOOTER_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "shooter.ron";

/// Environment variable overriding the config path
pub const CONFIG_PATH_VAR: &str = "SHOOTER_CONFIG";

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Space Shooter".to_string(),
            width: 800,
            height: 600,
            resizable: false,
        }
    }
}

/// How a spawned entity reacts to input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputConfig {
    /// Arrow-key steering; `speed` falls back to `control_speed`
    Arrows {
        #[serde(default)]
        speed: Option<f32>,
    },
}

/// One entity in the starting scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Image file name, relative to `asset_dir`
    pub image: String,
    /// Drawn width as a fraction of the window width
    pub size: f32,
    pub position: Position,
    #[serde(default)]
    pub velocity: Velocity,
    /// Steered by the control system's own arrow-key check
    #[serde(default)]
    pub controllable: bool,
    /// Per-entity input strategy
    #[serde(default)]
    pub input: Option<InputConfig>,
}

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    /// Update ticks per second
    pub tick_rate: f32,
    /// Catch-up ticks allowed in one frame before time is dropped
    pub max_ticks_per_frame: u32,
    /// Arrow-key speed in window heights per second, per axis
    pub control_speed: f32,
    /// Draw the frame rate in the corner
    pub show_fps: bool,
    pub asset_dir: PathBuf,
    /// TTF font for labels, relative to `asset_dir`; built-in font if unset
    pub font: Option<String>,
    pub scene: Vec<SpawnConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tick_rate: 120.0,
            max_ticks_per_frame: 8,
            control_speed: 0.2,
            show_fps: true,
            asset_dir: PathBuf::from("assets"),
            font: None,
            scene: vec![
                SpawnConfig {
                    image: "playerShip1_blue.png".to_string(),
                    size: 0.05,
                    position: Position::new(0.05, 0.5),
                    velocity: Velocity::ZERO,
                    controllable: false,
                    input: Some(InputConfig::Arrows { speed: None }),
                },
                SpawnConfig {
                    image: "enemyBlack1.png".to_string(),
                    size: 0.05,
                    position: Position::new(0.95, 0.5),
                    velocity: Velocity::new(-0.1, 0.0),
                    controllable: false,
                    input: None,
                },
            ],
        }
    }
}

impl GameConfig {
    /// Path named by `SHOOTER_CONFIG`, else `shooter.ron`
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Parse and validate RON text.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load config from a file, or use the defaults if there is no file.
    /// A file that exists but doesn't parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Reject settings the game can't run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ConfigError::Invalid(format!("tick_rate must be positive, got {}", self.tick_rate)));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window must have a size, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(ConfigError::Invalid("max_ticks_per_frame must be at least 1".to_string()));
        }
        if !self.control_speed.is_finite() {
            return Err(ConfigError::Invalid("control_speed must be finite".to_string()));
        }
        for (i, spawn) in self.scene.iter().enumerate() {
            if !(spawn.size.is_finite() && spawn.size > 0.0) {
                return Err(ConfigError::Invalid(format!("scene[{}]: size must be positive, got {}", i, spawn.size)));
            }
            let numbers = [spawn.position.x, spawn.position.y, spawn.velocity.dx, spawn.velocity.dy];
            if numbers.iter().any(|n| !n.is_finite()) {
                return Err(ConfigError::Invalid(format!("scene[{}]: position and velocity must be finite", i)));
            }
            if let Some(InputConfig::Arrows { speed: Some(speed) }) = spawn.input {
                if !speed.is_finite() {
                    return Err(ConfigError::Invalid(format!("scene[{}]: arrow speed must be finite", i)));
                }
            }
        }
        if self.scene.is_empty() {
            warn!("Config scene is empty, the game screen will have nothing to show");
        }
        Ok(())
    }

    /// Horizontal middle of the window in position units (window heights)
    pub fn center_x(&self) -> f32 {
        self.window.width as f32 / (2.0 * self.window.height as f32)
    }

    /// Full path of an asset named in the config
    pub fn asset_path(&self, name: &str) -> PathBuf {
        self.asset_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_default_scene() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.tick_rate, 120.0);
        assert_eq!(config.control_speed, 0.2);
        assert_eq!(config.scene.len(), 2);
        assert_eq!(config.scene[0].input, Some(InputConfig::Arrows { speed: None }));
        assert_eq!(config.scene[1].velocity, Velocity::new(-0.1, 0.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GameConfig::from_ron("(tick_rate: 60.0, window: (title: \"Test\"))").unwrap();
        assert_eq!(config.tick_rate, 60.0);
        assert_eq!(config.window.title, "Test");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.scene.len(), 2);
    }

    #[test]
    fn test_scene_from_ron() {
        let text = r#"(
            scene: [
                (image: "a.png", size: 0.1, position: (x: 0.2, y: 0.3)),
            ],
        )"#;
        let config = GameConfig::from_ron(text).unwrap();
        assert_eq!(config.scene.len(), 1);
        assert_eq!(config.scene[0].velocity, Velocity::ZERO);
        assert!(!config.scene[0].controllable);
        assert_eq!(config.scene[0].input, None);
    }

    #[test]
    fn test_spawn_input_from_ron() {
        let text = r#"(
            scene: [
                (image: "a.png", size: 0.1, position: (x: 0.2, y: 0.3), input: Some(Arrows(speed: Some(0.5)))),
                (image: "b.png", size: 0.1, position: (x: 0.2, y: 0.3), input: Some(Arrows(speed: None))),
            ],
        )"#;
        let config = GameConfig::from_ron(text).unwrap();
        assert_eq!(config.scene[0].input, Some(InputConfig::Arrows { speed: Some(0.5) }));
        assert_eq!(config.scene[1].input, Some(InputConfig::Arrows { speed: None }));
    }

    #[test]
    fn test_non_finite_arrow_speed_rejected() {
        let mut config = GameConfig::default();
        config.scene[0].input = Some(InputConfig::Arrows { speed: Some(f32::INFINITY) });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scene[0]"));
    }

    #[test]
    fn test_round_trip_through_ron() {
        let config = GameConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        assert_eq!(GameConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron("(tick_rate: \"fast\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_tick_rate() {
        let err = GameConfig::from_ron("(tick_rate: 0.0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("tick_rate"));
    }

    #[test]
    fn test_invalid_spawn_size() {
        let mut config = GameConfig::default();
        config.scene[1].size = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scene[1]"));
    }

    #[test]
    fn test_zero_max_ticks_rejected() {
        let err = GameConfig::from_ron("(max_ticks_per_frame: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("max_ticks_per_frame"));
    }

    #[test]
    fn test_non_finite_control_speed_rejected() {
        let mut config = GameConfig::default();
        config.control_speed = f32::NAN;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("control_speed"));
    }

    #[test]
    fn test_center_x_follows_window_shape() {
        let mut config = GameConfig::default();
        assert_relative_eq!(config.center_x(), 800.0 / 1200.0);
        config.window.width = 1200;
        config.window.height = 400;
        assert_relative_eq!(config.center_x(), 1.5);
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut config = GameConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(show_fps: false, control_speed: 0.4)").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert!(!config.show_fps);
        assert_eq!(config.control_speed, 0.4);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("nope.ron")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_or_default_still_reports_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not ron at all").unwrap();
        assert!(GameConfig::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(&dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_asset_path() {
        let config = GameConfig::default();
        assert_eq!(config.asset_path("ship.png"), Path::new("assets").join("ship.png"));
    }
}
