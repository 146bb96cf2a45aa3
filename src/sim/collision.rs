//! Wall collision and goal-line detection
//!
//! All walls are axis-aligned, so each response is a clamp plus a reflected,
//! damped velocity component. Only one side per axis can trigger in a tick.

use super::bounds::PhysicsBounds;
use super::state::{Ball, Team};

/// What happened at the top/bottom edge this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndLineOutcome {
    /// Ball stayed inside the field
    Clear,
    /// Ball hit an end wall outside the goal mouth
    Bounced,
    /// Ball crossed into a goal; caller resets the ball
    Goal(Team),
}

/// Resolve left/right walls. Returns true if the ball bounced.
pub fn resolve_side_walls(ball: &mut Ball, bounds: &PhysicsBounds, restitution: f32) -> bool {
    if ball.pos.x - ball.radius < bounds.left {
        ball.pos.x = bounds.left + ball.radius;
        ball.vel.x = -ball.vel.x * restitution;
        true
    } else if ball.pos.x + ball.radius > bounds.right {
        ball.pos.x = bounds.right - ball.radius;
        ball.vel.x = -ball.vel.x * restitution;
        true
    } else {
        false
    }
}

/// Resolve top/bottom walls, detecting goals.
///
/// The top goal scores for team 2 and the bottom goal for team 1. On a goal
/// the ball is left untouched.
pub fn resolve_end_lines(ball: &mut Ball, bounds: &PhysicsBounds, restitution: f32) -> EndLineOutcome {
    if ball.pos.y - ball.radius < bounds.top {
        if bounds.in_goal_mouth(ball.pos.x) {
            return EndLineOutcome::Goal(Team::Two);
        }
        ball.pos.y = bounds.top + ball.radius;
        ball.vel.y = -ball.vel.y * restitution;
        EndLineOutcome::Bounced
    } else if ball.pos.y + ball.radius > bounds.bottom {
        if bounds.in_goal_mouth(ball.pos.x) {
            return EndLineOutcome::Goal(Team::One);
        }
        ball.pos.y = bounds.bottom - ball.radius;
        ball.vel.y = -ball.vel.y * restitution;
        EndLineOutcome::Bounced
    } else {
        EndLineOutcome::Clear
    }
}
