//! Player physics and animation bookkeeping

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Vertical motion state, derived from the grounded flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    Grounded,
    Airborne,
}

/// Animation cycle selected for the current tick (one sprite sheet row each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    Run,
    Jump,
}

impl PlayerAction {
    /// Frame index past which the cycle restarts at 0
    pub fn max_frame(self) -> u32 {
        match self {
            PlayerAction::Run => 7,
            PlayerAction::Jump => 5,
        }
    }
}

/// The runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: DVec2,
    /// Vertical velocity (pixels/tick, positive is down)
    pub dy: f64,
    pub width: f64,
    pub height: f64,
    /// Jump intent, set by input and cleared on ground contact
    pub jump: bool,
    pub is_grounded: bool,
    /// Column on the sprite sheet for the current action
    pub frame_x: u32,
    pub ground_y: f64,
}

impl Player {
    /// Create a player standing on the ground line
    pub fn new(ground_y: f64) -> Self {
        Self {
            pos: DVec2::new(PLAYER_X, ground_y - PLAYER_HEIGHT),
            dy: 0.0,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            jump: false,
            is_grounded: true,
            frame_x: 0,
            ground_y,
        }
    }

    /// Highest y the player may occupy (feet on the ground line)
    #[inline]
    pub fn floor_y(&self) -> f64 {
        self.ground_y - self.height
    }

    pub fn motion_state(&self) -> MotionState {
        if self.is_grounded {
            MotionState::Grounded
        } else {
            MotionState::Airborne
        }
    }

    pub fn action(&self) -> PlayerAction {
        if self.jump {
            PlayerAction::Jump
        } else {
            PlayerAction::Run
        }
    }

    /// Raise the jump intent flag. Takes effect on the next grounded tick.
    pub fn request_jump(&mut self) {
        self.jump = true;
    }

    /// Advance one tick. `frame` is the simulation's cycling frame counter.
    pub fn update(&mut self, frame: u32) {
        // Reset is checked before the increment, so the index briefly reaches max + 1
        if self.frame_x > self.action().max_frame() {
            self.frame_x = 0;
        }
        if frame % ANIMATION_CADENCE == 0 {
            self.frame_x += 1;
        }

        // Gravity bias lands on both position and velocity
        let bias = GRAVITY * JUMP_POWER;
        self.pos.y += self.dy;
        self.pos.y += bias;
        self.dy += bias;

        if self.jump && self.is_grounded {
            self.dy = LAUNCH_FACTOR * JUMP_POWER;
        }

        let floor = self.floor_y();
        if self.pos.y >= floor {
            self.pos.y = floor;
            self.is_grounded = true;
            self.jump = false;
        } else {
            self.is_grounded = false;
        }
    }
}
