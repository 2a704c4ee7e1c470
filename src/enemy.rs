//! Enemy
//!
//! A rectangle that falls at a fixed speed and wraps to just above the top
//! edge once it leaves the bottom of the screen. The loop driver does not
//! spawn one yet; the type is complete and tested on its own.

// Allow unused - not wired into the main loop
#![allow(dead_code)]

use crate::entity::Entity;
use macroquad::color::Color;

pub struct Enemy {
    pub body: Entity,
    /// Pixels fallen per frame
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color, speed: f32) -> Self {
        Self {
            body: Entity::new(x, y, width, height, color),
            speed,
        }
    }

    /// Advance one frame: fall by `speed`, wrapping to `-height` (fully
    /// above the top edge) once y passes the bottom of the screen.
    pub fn update(&mut self, screen_height: f32) {
        self.body.shift(0.0, self.speed);
        if self.body.y > screen_height {
            self.body.y = -self.body.height;
        }
    }

    pub fn draw(&self) {
        self.body.draw();
    }
}
