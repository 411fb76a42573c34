//! In-memory surface for tests
//!
//! Resizable by hand, keys pressed by hand, and it remembers what it was
//! asked to do. Text is "measured" at a fixed advance per character.

use std::cell::Cell;
use std::collections::HashSet;

use super::{DrawBatch, FontId, Surface, TextMetrics, WindowSize};
use crate::input::Key;

pub struct RecordingSurface {
    size: WindowSize,
    held: HashSet<Key>,
    measure_calls: Cell<usize>,
    /// Every batch submitted so far
    pub submitted: Vec<DrawBatch>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: WindowSize::new(width, height),
            held: HashSet::new(),
            measure_calls: Cell::new(0),
            submitted: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = WindowSize::new(width, height);
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// How many times text has been measured
    pub fn measure_calls(&self) -> usize {
        self.measure_calls.get()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> WindowSize {
        self.size
    }

    fn key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn measure_text(&self, text: &str, _font: FontId, font_size: u16) -> TextMetrics {
        self.measure_calls.set(self.measure_calls.get() + 1);
        let size = f32::from(font_size);
        TextMetrics {
            width: text.chars().count() as f32 * size * 0.5,
            height: size,
            offset_y: size * 0.8,
        }
    }

    fn submit(&mut self, batch: &DrawBatch) {
        self.submitted.push(batch.clone());
    }
}
