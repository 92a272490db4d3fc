//! Looping ground strip

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_TILE_RISE, GROUND_WRAP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Horizontal scroll offset, never below -GROUND_WRAP after an update
    pub x: f64,
    /// Pushed in by the game on every draw
    pub speed: f64,
    pub ground_y: f64,
}

impl Background {
    pub fn new(ground_y: f64) -> Self {
        Self {
            x: 0.0,
            speed: 0.0,
            ground_y,
        }
    }

    /// Where the ground tile's top-left corner is drawn
    pub fn tile_origin(&self) -> DVec2 {
        DVec2::new(self.x, self.ground_y - GROUND_TILE_RISE)
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
        if self.x < -GROUND_WRAP {
            // Restart one step in so the seam doesn't hold for a frame
            self.x = 0.0;
            self.x -= self.speed;
        }
    }
}
