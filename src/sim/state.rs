//! Runner world state
//!
//! Everything the simulation mutates lives here. No images, no RNG: the
//! state serializes cleanly and compares by value.

use serde::{Deserialize, Serialize};

use super::background::Background;
use super::obstacle::ObstacleGroup;
use super::player::Player;
use crate::consts::FRAME_COUNTER_MAX;
use crate::settings::Settings;

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the ground with launch velocity
    Jumped,
    /// Player touched down after being airborne
    Landed,
    /// Obstacle group recycled past the right edge
    ObstaclesRespawned { x: f64, count: usize },
}

/// Frame counter cycling through [1, FRAME_COUNTER_MAX].
///
/// Only drives sprite animation cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FrameCounter(u32);

impl TryFrom<u32> for FrameCounter {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (1..=FRAME_COUNTER_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "frame counter must be within [1, {FRAME_COUNTER_MAX}], got {value}"
            ))
        }
    }
}

impl From<FrameCounter> for u32 {
    fn from(frame: FrameCounter) -> Self {
        frame.0
    }
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self(1)
    }
}

impl FrameCounter {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 += 1;
        if self.0 > FRAME_COUNTER_MAX {
            self.0 = 1;
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerState {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Ground line (canvas height minus the ground inset)
    pub ground_y: f64,
    /// Scroll speed pushed into the background and obstacles on draw
    pub speed: f64,
    pub frame: FrameCounter,
    /// Total ticks simulated (never wraps, unlike `frame`)
    pub time_ticks: u64,
    pub player: Player,
    pub background: Background,
    pub obstacles: ObstacleGroup,
}

impl RunnerState {
    pub fn new(settings: &Settings) -> Self {
        let ground_y = settings.canvas_height - settings.ground_inset;
        Self {
            canvas_width: settings.canvas_width,
            canvas_height: settings.canvas_height,
            ground_y,
            speed: settings.scroll_speed,
            frame: FrameCounter::default(),
            time_ticks: 0,
            player: Player::new(ground_y),
            background: Background::new(ground_y),
            obstacles: ObstacleGroup::new(settings.canvas_width, ground_y, settings.spawn_jitter),
        }
    }

    /// Hand the current scroll speed to the scrolling entities
    pub fn propagate_speed_to_background(&mut self) {
        self.background.speed = self.speed;
    }

    pub fn propagate_speed_to_obstacles(&mut self) {
        self.obstacles.speed = self.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_counter_cycles() {
        let mut frame = FrameCounter::default();
        assert_eq!(frame.get(), 1);
        let mut seen = Vec::new();
        for _ in 0..250 {
            frame.advance();
            assert!((1..=FRAME_COUNTER_MAX).contains(&frame.get()));
            seen.push(frame.get());
        }
        assert_eq!(seen[98], 100);
        assert_eq!(seen[99], 1);
    }

    #[test]
    fn test_frame_counter_rejects_out_of_range() {
        assert!(serde_json::from_str::<FrameCounter>("0").is_err());
        assert!(serde_json::from_str::<FrameCounter>("101").is_err());
        let frame: FrameCounter = serde_json::from_str("50").unwrap();
        assert_eq!(frame.get(), 50);
        assert_eq!(serde_json::to_string(&frame).unwrap(), "50");

        let state = RunnerState::new(&Settings::default());
        let mut value = serde_json::to_value(&state).unwrap();
        value["frame"] = serde_json::json!(0);
        assert!(serde_json::from_value::<RunnerState>(value).is_err());
    }

    #[test]
    fn test_new_state_from_settings() {
        let state = RunnerState::new(&Settings::default());
        assert_eq!(state.ground_y, 268.0);
        assert_eq!(state.speed, 1.4);
        assert_eq!(state.player.pos.y, 236.0);
        assert_eq!(state.obstacles.x, 500.0);
        // Nothing scrolls until speed is propagated
        assert_eq!(state.background.speed, 0.0);
        assert_eq!(state.obstacles.speed, 0.0);
    }

    #[test]
    fn test_state_roundtrips_through_json() {
        let state = RunnerState::new(&Settings::default());
        let json = serde_json::to_string(&state).unwrap();
        let back: RunnerState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
