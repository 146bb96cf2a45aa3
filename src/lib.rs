//! Futbolito - tilt-controlled tabletop soccer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bounds, ball physics, goals)
//! - `platform`: Tilt-sensor abstraction
//! - `game`: Fixed-rate host driver
//! - `settings`: Data-driven physics tuning
//! - `snapshot`: Read-only per-frame view for the renderer

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use game::Game;
pub use settings::Settings;
pub use snapshot::FrameSnapshot;

/// Game configuration constants
pub mod consts {
    /// Fixed tick period in milliseconds (~60 Hz)
    pub const TICK_PERIOD_MS: f32 = 16.0;
    /// Maximum ticks per host update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ball radius in viewport units
    pub const BALL_RADIUS: f32 = 20.0;
    /// Tilt to velocity factor, applied every tick
    pub const TILT_SENSITIVITY: f32 = 0.2;
    /// Per-tick velocity damping (not time-normalized)
    pub const FRICTION: f32 = 0.98;
    /// Velocity retained after a wall bounce
    pub const RESTITUTION: f32 = 0.8;

    /// Clamp for sanitized tilt samples (4 g in m/s²)
    pub const MAX_TILT: f32 = 39.2;
}
