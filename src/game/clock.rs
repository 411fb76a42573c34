//! Fixed-step clock
//!
//! macroquad hands us a variable frame time; the schedule wants whole ticks
//! of a fixed length. The clock accumulates frame time and releases it one
//! tick at a time, carrying the remainder into the next frame.

use log::debug;

pub struct FixedStep {
    /// Length of one tick in seconds
    step: f32,
    /// Unspent time from previous frames
    accumulator: f32,
    /// Upper bound on ticks released per frame
    max_ticks: u32,
    /// Total ticks released so far
    ticks: u64,
}

impl FixedStep {
    /// Clock running at `rate` ticks per second.
    pub fn new(rate: f32, max_ticks: u32) -> Self {
        Self {
            step: 1.0 / rate,
            accumulator: 0.0,
            max_ticks: max_ticks.max(1),
            ticks: 0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed one frame's worth of time; returns how many ticks to run now.
    ///
    /// A long stall (window dragged, debugger pause) would otherwise ask
    /// for hundreds of catch-up ticks; anything past `max_ticks` is dropped.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.max(0.0);

        let mut due = 0;
        while self.accumulator >= self.step && due < self.max_ticks {
            self.accumulator -= self.step;
            due += 1;
        }

        if self.accumulator >= self.step {
            let dropped = (self.accumulator / self.step) as u32;
            debug!("clock behind, dropping {} ticks", dropped);
            self.accumulator %= self.step;
        }

        self.ticks += u64::from(due);
        due
    }
}
