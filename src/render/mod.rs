//! Drawing surface abstraction
//!
//! The game never talks to the windowing library directly. Everything it
//! needs from the outside world goes through [`Surface`]: the window size,
//! key states, text measurement, and a place to submit a [`DrawBatch`].
//!
//! Coordinates handed to a surface are pixels with the origin in the
//! bottom-left corner and y pointing up; backends with a top-left origin
//! flip on submission.

mod batch;
mod macroquad_surface;
#[cfg(test)]
mod recording;

pub use batch::{DrawBatch, DrawCommand};
pub use macroquad_surface::MacroquadSurface;
#[cfg(test)]
pub use recording::RecordingSurface;

use crate::input::Key;

/// Index of an image loaded by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub(crate) usize);

/// A loaded image together with its native pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageHandle {
    pub id: ImageId,
    pub width: f32,
    pub height: f32,
}

impl ImageHandle {
    pub fn new(id: ImageId, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

/// Index of a font loaded by a surface, defaulting to the built-in font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FontId(pub(crate) Option<usize>);

impl FontId {
    /// The backend's built-in font
    pub const BUILTIN: FontId = FontId(None);
}

/// Size of a laid-out line of text, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Distance from the top of the text box to the baseline
    pub offset_y: f32,
}

/// Current window size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A resizable 2D surface that accepts draw submissions and polls key states.
pub trait Surface {
    /// Current size of the drawable area
    fn size(&self) -> WindowSize;

    /// Whether `key` is held right now
    fn key_down(&self, key: Key) -> bool;

    /// Lay out `text` in `font` at `font_size` pixels
    fn measure_text(&self, text: &str, font: FontId, font_size: u16) -> TextMetrics;

    /// Draw every command in `batch`, in order
    fn submit(&mut self, batch: &DrawBatch);
}
