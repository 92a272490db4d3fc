//! Pixel Runner - A side-scrolling canvas runner
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player physics, ground scroll, obstacle spawns)
//! - `renderer`: Drawing surface abstraction, sprite atlas, scene layering
//! - `platform`: Browser/native host helpers (layout, input mapping, frame clock)
//! - `settings`: Persisted configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions (logical pixels)
    pub const CANVAS_WIDTH: f64 = 600.0;
    pub const CANVAS_HEIGHT: f64 = 300.0;
    /// Ground line sits this far above the canvas bottom
    pub const GROUND_INSET: f64 = 32.0;

    /// Horizontal scroll speed (pixels per frame)
    pub const SCROLL_SPEED: f64 = 1.4;

    /// Player defaults
    pub const PLAYER_X: f64 = 200.0;
    pub const PLAYER_WIDTH: f64 = 16.0;
    pub const PLAYER_HEIGHT: f64 = 32.0;
    /// On-screen sprite size (square)
    pub const PLAYER_SPRITE_SIZE: f64 = 32.0;

    /// Per-tick gravity, scaled by jump power before use
    pub const GRAVITY: f64 = 0.3;
    pub const JUMP_POWER: f64 = 0.5;
    /// Launch velocity multiplier (dy = LAUNCH_FACTOR * JUMP_POWER)
    pub const LAUNCH_FACTOR: f64 = -10.0;

    /// Sprite frame advances every N frames
    pub const ANIMATION_CADENCE: u32 = 6;
    /// Frame counter wraps back to 1 past this value
    pub const FRAME_COUNTER_MAX: u32 = 100;

    /// Ground tile width; background offset wraps past -GROUND_WRAP
    pub const GROUND_WRAP: f64 = 600.0;
    /// Ground tile is drawn this far above the ground line
    pub const GROUND_TILE_RISE: f64 = 16.0;

    /// Obstacle group starts this far left of the right edge
    pub const OBSTACLE_START_INSET: f64 = 100.0;
    /// Respawn offset past the right edge is drawn from [0, SPAWN_JITTER)
    pub const SPAWN_JITTER: f64 = 400.0;
    /// Base (small) obstacle size
    pub const OBSTACLE_BASE_WIDTH: f64 = 16.0;
    pub const OBSTACLE_BASE_HEIGHT: f64 = 32.0;
}
