//! Input state snapshot
//!
//! Polls the surface once per frame and keeps the result, so every system
//! in a frame sees the same key states. The previous frame's snapshot is
//! kept alongside for edge detection.

use crate::render::Surface;
use super::Key;

/// Key states for the current frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    down: [bool; Key::COUNT],
    previous: [bool; Key::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with exactly `keys` held and nothing held the frame before
    #[allow(dead_code)]
    pub fn with_keys(keys: &[Key]) -> Self {
        let mut state = Self::new();
        for key in keys {
            state.down[key.index()] = true;
        }
        state
    }

    /// Call once per frame before running systems
    pub fn poll(&mut self, surface: &dyn Surface) {
        self.previous = self.down;
        for key in Key::ALL {
            self.down[key.index()] = surface.key_down(key);
        }
    }

    /// Check if key is currently held down
    pub fn key_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }

    /// Check if key went down this frame
    pub fn key_pressed(&self, key: Key) -> bool {
        self.down[key.index()] && !self.previous[key.index()]
    }
}
