//! Entity
//!
//! The shared shape of everything on screen: an axis-aligned rectangle with
//! a position, a size and a color. Entities are plain data - behavior lives
//! in the types that embed one (`Player`, `Enemy`).

use macroquad::prelude::*;

/// A drawable, movable rectangle in screen space (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Entity {
    /// Create an entity. Width and height must be positive.
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "entity size must be positive");
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    /// Move by a delta. No bounds checking - callers that want clamping or
    /// wrapping do it themselves.
    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// The rectangle the next `draw` call will fill
    pub fn draw_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Draw the entity as one filled rectangle onto the current frame
    pub fn draw(&self) {
        let rect = self.draw_rect();
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, self.color);
    }
}
