//! Keyboard input
//!
//! The game consumes exactly four keys (the arrows). Instead of handing the
//! player a raw key map, each frame polls one `KeySnapshot` - four booleans
//! over a closed `Direction` enum - so an out-of-range key index is
//! unrepresentable.

use macroquad::prelude::*;

/// The four directions the player can be steered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit displacement for this direction (screen space, +y is down)
    pub fn unit(self) -> (f32, f32) {
        match self {
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
        }
    }
}

/// Which directional keys are held at the moment of polling.
///
/// A plain value type so game logic can be driven (and tested) without a
/// window: construct one directly instead of calling `poll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl KeySnapshot {
    /// Read the current keyboard state (arrow keys)
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
        }
    }

    pub fn is_down(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}
