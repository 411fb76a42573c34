//! Keyboard input
//!
//! Keys are polled from the [`Surface`](crate::render::Surface) rather than
//! delivered as events: each frame takes one [`InputState`] snapshot.

mod keys;
mod state;

pub use keys::Key;
pub use state::InputState;
