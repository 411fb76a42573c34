//! Draw batch
//!
//! Draw commands collected during a tick and handed to the surface once per
//! frame. The render system rebuilds the batch every tick, so it only ever
//! holds the latest placement of each renderable.

use super::{FontId, ImageId, TextMetrics};

/// One primitive for the surface to draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Image centered on (x, y), scaled uniformly
    Sprite {
        image: ImageId,
        x: f32,
        y: f32,
        scale: f32,
    },
    /// Text centered on (x, y)
    Text {
        text: String,
        font: FontId,
        font_size: u16,
        metrics: TextMetrics,
        x: f32,
        y: f32,
    },
}

/// Ordered list of draw commands
#[derive(Debug, Clone, Default)]
pub struct DrawBatch {
    commands: Vec<DrawCommand>,
}

impl DrawBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Drop all commands, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawBatch {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
