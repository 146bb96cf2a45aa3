//! Read-only view of the match for the renderer
//!
//! Refreshed once per frame; holds copies, never references into the sim.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GoalMarker, MatchState, Score, SimPhase, goal_markers};

/// Everything the UI needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: SimPhase,
    pub ball_position: Vec2,
    pub ball_radius: f32,
    /// Top goal first, then bottom
    pub goal_markers: [GoalMarker; 2],
    pub score: Score,
    pub time_ticks: u64,
}

impl FrameSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        Self {
            phase: state.phase,
            ball_position: state.ball.pos,
            ball_radius: state.ball.radius,
            goal_markers: goal_markers(state.viewport),
            score: state.score,
            time_ticks: state.time_ticks,
        }
    }

    /// Whether the ball should be drawn yet
    pub fn ball_visible(&self) -> bool {
        self.phase == SimPhase::Active
    }
}
