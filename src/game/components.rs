//! Game Components
//!
//! All the component types used by the shooter.
//! Components are plain data structs - behavior lives in systems.

use serde::{Serialize, Deserialize};

use crate::input::InputState;
use crate::render::{FontId, ImageHandle, TextMetrics};
use super::entity::Entity;
use super::world::World;

// =============================================================================
// Physics / Movement
// =============================================================================

/// Location in normalized window coordinates.
///
/// (0, 0) is the bottom-left corner; both axes are scaled by the window
/// height when drawn, so x can run past 1.0 on a wide window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Displacement per second, in the same units as [`Position`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

// =============================================================================
// Control
// =============================================================================

/// Marks entities steered by the arrow keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controllable;

/// Per-entity input callback.
pub type KeyHandlerFn = fn(Entity, &mut World, &InputState);

/// How an entity reacts to input each frame.
///
/// Lets entities carry their own control logic instead of the control
/// system growing a branch per kind of entity.
#[derive(Clone, Copy)]
pub enum InputHandler {
    /// Arrow-key steering at the given speed (units per second per axis)
    Arrows { speed: f32 },
    /// Arbitrary logic, called with the entity, the world and the input snapshot.
    /// Attached from code, since a function can't be named in the config.
    #[allow(dead_code)]
    Custom(KeyHandlerFn),
}

impl std::fmt::Debug for InputHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputHandler::Arrows { speed } => f.debug_struct("Arrows").field("speed", speed).finish(),
            InputHandler::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Screen placement of a sprite, refreshed by the render system every tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpriteDrawable {
    /// Pixels from the left edge to the image center
    pub x: f32,
    /// Pixels from the bottom edge to the image center
    pub y: f32,
    /// Multiplier applied to the image's native size
    pub scale: f32,
}

/// An image drawn centered on the entity's position.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub image: ImageHandle,
    /// Drawn width as a fraction of the window width
    pub proportion: f32,
    pub drawable: SpriteDrawable,
}

impl Sprite {
    pub fn new(image: ImageHandle, proportion: f32) -> Self {
        Self {
            image,
            proportion,
            drawable: SpriteDrawable::default(),
        }
    }
}

/// Laid-out text, valid for one font size
#[derive(Debug, Clone, PartialEq)]
pub struct TextDrawable {
    pub font_size: u16,
    pub metrics: TextMetrics,
    pub x: f32,
    pub y: f32,
}

/// A line of text drawn centered on the entity's position.
///
/// Measuring text is the expensive part, so the drawable is only rebuilt
/// when the pixel font size it was built for goes stale.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub font: FontId,
    /// Font size as a fraction of the window height
    pub proportion: f32,
    drawable: Option<TextDrawable>,
}

impl Label {
    pub fn new(text: impl Into<String>, font: FontId, proportion: f32) -> Self {
        Self {
            text: text.into(),
            font,
            proportion,
            drawable: None,
        }
    }

    /// The current layout, if the label has been rendered at least once
    #[allow(dead_code)]
    pub fn drawable(&self) -> Option<&TextDrawable> {
        self.drawable.as_ref()
    }

    /// Layout for `font_size`, rebuilt through `build` only when the cached
    /// one was made for a different size.
    pub fn drawable_for(
        &mut self,
        font_size: u16,
        build: impl FnOnce(&str, FontId, u16) -> TextMetrics,
    ) -> &mut TextDrawable {
        let drawable = match self.drawable.take() {
            Some(cached) if cached.font_size == font_size => cached,
            _ => TextDrawable {
                font_size,
                metrics: build(&self.text, self.font, font_size),
                x: 0.0,
                y: 0.0,
            },
        };
        self.drawable.insert(drawable)
    }
}

/// Anything the render system puts on screen
#[derive(Debug, Clone)]
pub enum Renderable {
    Sprite(Sprite),
    Text(Label),
}

impl From<Sprite> for Renderable {
    fn from(sprite: Sprite) -> Self {
        Renderable::Sprite(sprite)
    }
}

impl From<Label> for Renderable {
    fn from(label: Label) -> Self {
        Renderable::Text(label)
    }
}
