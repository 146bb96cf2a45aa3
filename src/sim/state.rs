//! Match state and core simulation types
//!
//! Everything the renderer reads lives here; the UI only ever sees copies.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Viewport;
use crate::consts::BALL_RADIUS;

/// Simulation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimPhase {
    /// No usable viewport seen yet, ball not placed
    #[default]
    Uninitialized,
    /// Normal play
    Active,
}

/// One of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Scores on the bottom goal
    One,
    /// Scores on the top goal
    Two,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::One => "team 1",
            Team::Two => "team 2",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(BALL_RADIUS)
    }
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Place the ball at rest in the middle of the viewport
    pub fn reset_to_center(&mut self, viewport: Viewport) {
        self.pos = viewport.center();
        self.vel = Vec2::ZERO;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Goal counters for both teams (only ever go up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    team1: u32,
    team2: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team1(&self) -> u32 {
        self.team1
    }

    pub fn team2(&self) -> u32 {
        self.team2
    }

    pub fn get(&self, team: Team) -> u32 {
        match team {
            Team::One => self.team1,
            Team::Two => self.team2,
        }
    }

    /// Record a goal, returns the team's new total
    pub fn award(&mut self, team: Team) -> u32 {
        let counter = match team {
            Team::One => &mut self.team1,
            Team::Two => &mut self.team2,
        };
        *counter = counter.saturating_add(1);
        *counter
    }

    pub fn total(&self) -> u32 {
        self.team1.saturating_add(self.team2)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: SimPhase,
    pub ball: Ball,
    pub score: Score,
    /// Most recently reported viewport
    pub viewport: Viewport,
    /// Simulation tick counter (physics ticks only)
    pub time_ticks: u64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(BALL_RADIUS)
    }
}

impl MatchState {
    pub fn new(ball_radius: f32) -> Self {
        Self {
            phase: SimPhase::Uninitialized,
            ball: Ball::new(ball_radius),
            score: Score::new(),
            viewport: Viewport::ZERO,
            time_ticks: 0,
        }
    }

    /// Move to Active the first time a usable viewport shows up.
    /// Returns true on the tick the transition happens.
    pub fn activate_if_ready(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        if self.phase == SimPhase::Uninitialized && viewport.is_valid() {
            self.ball.reset_to_center(viewport);
            self.phase = SimPhase::Active;
            log::info!(
                "Ball placed at ({}, {}) for {}x{} viewport",
                self.ball.pos.x,
                self.ball.pos.y,
                viewport.width,
                viewport.height
            );
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.phase == SimPhase::Active
    }
}
