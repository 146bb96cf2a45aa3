//! Physics tuning and preferences
//!
//! Stored as JSON next to the binary; every field falls back to its default
//! so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Physics ===
    /// Tilt to velocity factor per tick
    pub sensitivity: f32,
    /// Per-tick velocity damping (0.0 - 1.0)
    pub friction: f32,
    /// Velocity kept after a bounce (0.0 - 1.0)
    pub restitution: f32,
    /// Ball radius in viewport units
    pub ball_radius: f32,

    // === Loop ===
    /// Tick period in milliseconds
    pub tick_period_ms: f32,

    // === Sensor ===
    /// Zero out non-finite tilt and clamp to +/- MAX_TILT
    pub sanitize_tilt: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sensitivity: TILT_SENSITIVITY,
            friction: FRICTION,
            restitution: RESTITUTION,
            ball_radius: BALL_RADIUS,
            tick_period_ms: TICK_PERIOD_MS,
            sanitize_tilt: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace unusable values with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.sensitivity.is_finite() {
            self.sensitivity = defaults.sensitivity;
        }
        if !self.friction.is_finite() {
            self.friction = defaults.friction;
        }
        self.friction = self.friction.clamp(0.0, 1.0);
        if !self.restitution.is_finite() {
            self.restitution = defaults.restitution;
        }
        self.restitution = self.restitution.clamp(0.0, 1.0);
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            self.ball_radius = defaults.ball_radius;
        }
        if !(self.tick_period_ms.is_finite() && self.tick_period_ms > 0.0) {
            self.tick_period_ms = defaults.tick_period_ms;
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
