//! Frame timing
//!
//! Tracks delta time for the host loop. The simulation itself is
//! frame-stepped and never sees these numbers.

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
    delta_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp (ms, as passed to `requestAnimationFrame`).
    /// Returns the time since the previous frame.
    pub fn advance(&mut self, timestamp: f64) -> f64 {
        self.delta_ms = match self.last_time {
            Some(last) => timestamp - last,
            None => 0.0,
        };
        self.last_time = Some(timestamp);
        self.delta_ms
    }

    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }
}
