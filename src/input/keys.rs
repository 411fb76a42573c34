//! Keys the game listens to
//!
//! Backend-neutral names; each surface maps them to its own key codes.

/// All keys that can be polled by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Steering (arrow keys)
    Left,
    Right,
    Up,
    Down,

    // Screen navigation
    Confirm,    // Enter / Space
    Back,       // Escape
}

impl Key {
    pub const ALL: [Key; 6] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Confirm,
        Key::Back,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position in [`Key::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}
