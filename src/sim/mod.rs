//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One step per rendered frame, no delta time
//! - Randomness only through a caller-supplied `Rng`
//! - No rendering or platform dependencies

pub mod background;
pub mod obstacle;
pub mod player;
pub mod state;
pub mod tick;

pub use background::Background;
pub use obstacle::{ObstacleGroup, ObstacleKind, ObstacleSegment, sample_kinds, shuffle_kinds};
pub use player::{MotionState, Player, PlayerAction};
pub use state::{FrameCounter, GameEvent, RunnerState};
pub use tick::tick;
