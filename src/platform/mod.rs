//! Platform abstraction layer
//!
//! Host-side helpers that stay out of the simulation:
//! - Input key mapping
//! - Responsive canvas layout
//! - Frame timing

pub mod input;
pub mod layout;
pub mod time;

pub use input::KeyAction;
pub use layout::{DisplaySize, fit_canvas};
pub use time::FrameClock;
