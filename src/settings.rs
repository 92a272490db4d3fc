//! Game settings
//!
//! Persisted as JSON in LocalStorage on the web. Missing fields fall back to
//! defaults, so older saves keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Logical canvas width in pixels
    pub canvas_width: f64,
    /// Logical canvas height in pixels
    pub canvas_height: f64,
    /// Distance from the canvas bottom to the ground line
    pub ground_inset: f64,

    // === World ===
    /// Horizontal scroll speed (pixels per frame)
    pub scroll_speed: f64,
    /// Maximum extra distance past the right edge when obstacles respawn
    pub spawn_jitter: f64,

    // === Debug ===
    /// Draw collision boxes over the sprites
    pub show_hitboxes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_inset: GROUND_INSET,
            scroll_speed: SCROLL_SPEED,
            spawn_jitter: SPAWN_JITTER,
            show_hitboxes: false,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidSettings {
        field,
        reason: reason.into(),
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Ground line y coordinate
    pub fn ground_y(&self) -> f64 {
        self.canvas_height - self.ground_inset
    }

    /// Reject settings the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return Err(invalid(
                "canvas_width",
                format!("must be positive, got {}", self.canvas_width),
            ));
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 0.0) {
            return Err(invalid(
                "canvas_height",
                format!("must be positive, got {}", self.canvas_height),
            ));
        }
        // Player stands ground_y - PLAYER_HEIGHT from the top
        if !(self.ground_inset >= 0.0 && self.ground_y() >= PLAYER_HEIGHT) {
            return Err(invalid(
                "ground_inset",
                format!(
                    "ground line at {} leaves no room for the player",
                    self.ground_y()
                ),
            ));
        }
        // Past GROUND_WRAP a single step would skip the whole ground tile
        if !(self.scroll_speed >= 0.0 && self.scroll_speed <= GROUND_WRAP) {
            return Err(invalid(
                "scroll_speed",
                format!("must be within [0, {GROUND_WRAP}], got {}", self.scroll_speed),
            ));
        }
        if !(self.spawn_jitter.is_finite() && self.spawn_jitter >= 0.0) {
            return Err(invalid(
                "spawn_jitter",
                format!("must be non-negative, got {}", self.spawn_jitter),
            ));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pixel_runner_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Settings not saved: {:?}", e),
                },
                Err(e) => log::warn!("Settings not saved: {e}"),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
