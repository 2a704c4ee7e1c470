//! Player
//!
//! The one keyboard-driven rectangle. Each held direction shifts it by its
//! speed on that axis; holding two keys composes additively, so diagonals
//! move by (±speed, ±speed) with no normalization.

use crate::config::PlayerConfig;
use crate::entity::Entity;
use crate::input::{Direction, KeySnapshot};

pub struct Player {
    pub body: Entity,
    /// Pixels moved per frame per held direction
    pub speed: f32,
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            body: Entity::new(
                config.start_x,
                config.start_y,
                config.width,
                config.height,
                config.color.to_color(),
            ),
            speed: config.speed,
        }
    }

    /// Apply one frame of input. Stateless: the displacement depends only on
    /// the snapshot, never on previous frames.
    pub fn update(&mut self, keys: &KeySnapshot) {
        for direction in Direction::ALL {
            if keys.is_down(direction) {
                let (dx, dy) = direction.unit();
                self.body.shift(dx * self.speed, dy * self.speed);
            }
        }
    }

    pub fn draw(&self) {
        self.body.draw();
    }
}
