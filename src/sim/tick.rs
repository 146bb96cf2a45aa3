//! Fixed timestep simulation tick
//!
//! One call advances the ball by exactly one tick. Nothing here looks at
//! wall-clock time: friction and restitution are per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Viewport, compute_physics_bounds};
use super::collision::{EndLineOutcome, resolve_end_lines, resolve_side_walls};
use super::state::{MatchState, Team};
use crate::consts::MAX_TILT;
use crate::settings::Settings;

/// Accelerometer sample (z is reported by the sensor but unused)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltSample {
    pub ax: f32,
    pub ay: f32,
    pub az: f32,
}

impl TiltSample {
    pub const FLAT: Self = Self {
        ax: 0.0,
        ay: 0.0,
        az: 0.0,
    };

    pub fn new(ax: f32, ay: f32) -> Self {
        Self { ax, ay, az: 0.0 }
    }

    /// Zero non-finite axes and clamp the rest to +/- MAX_TILT
    pub fn sanitized(self) -> Self {
        let fix = |v: f32| {
            if v.is_finite() {
                v.clamp(-MAX_TILT, MAX_TILT)
            } else {
                0.0
            }
        };
        Self {
            ax: fix(self.ax),
            ay: fix(self.ay),
            az: fix(self.az),
        }
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Current surface size
    pub viewport: Viewport,
    /// Latest tilt sample
    pub tilt: TiltSample,
}

/// Ball state after a tick, plus the goal if one was scored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickResult {
    pub position: Vec2,
    pub velocity: Vec2,
    pub goal: Option<Team>,
}

/// Advance the match by one tick
pub fn tick(state: &mut MatchState, input: &TickInput, settings: &Settings) -> TickResult {
    state.activate_if_ready(input.viewport);

    // Nothing to simulate until the ball has a field
    if !state.is_active() {
        return result(state, None);
    }

    state.time_ticks += 1;

    let tilt = if settings.sanitize_tilt {
        input.tilt.sanitized()
    } else {
        input.tilt
    };

    let ball = &mut state.ball;

    // Device x axis points the other way from screen x
    ball.vel.x += -tilt.ax * settings.sensitivity;
    ball.vel.y += tilt.ay * settings.sensitivity;

    ball.vel *= settings.friction;
    ball.pos += ball.vel;

    let bounds = compute_physics_bounds(input.viewport);
    resolve_side_walls(ball, &bounds, settings.restitution);

    let goal = match resolve_end_lines(ball, &bounds, settings.restitution) {
        EndLineOutcome::Goal(team) => {
            state.score.award(team);
            state.ball.reset_to_center(input.viewport);
            log::info!(
                "Goal for {}! Score {} - {}",
                team,
                state.score.team1(),
                state.score.team2()
            );
            Some(team)
        }
        EndLineOutcome::Bounced | EndLineOutcome::Clear => None,
    };

    result(state, goal)
}

fn result(state: &MatchState, goal: Option<Team>) -> TickResult {
    TickResult {
        position: state.ball.pos,
        velocity: state.ball.vel,
        goal,
    }
}
