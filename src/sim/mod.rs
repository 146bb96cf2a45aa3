//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no wall-clock time
//! - One ball, axis-aligned field
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod state;
pub mod tick;

pub use bounds::{
    DrawingBounds, GoalMarker, PhysicsBounds, Viewport, compute_drawing_bounds,
    compute_physics_bounds, goal_markers,
};
pub use collision::{EndLineOutcome, resolve_end_lines, resolve_side_walls};
pub use state::{Ball, MatchState, Score, SimPhase, Team};
pub use tick::{TickInput, TickResult, TiltSample, tick};
