//! Field geometry derived from the viewport
//!
//! Two rectangles are computed from the same viewport: one for collision and
//! scoring, one for drawing. The drawn goal is wider than the physics goal,
//! so the two must not be unified.

use serde::{Deserialize, Serialize};

use super::state::Team;

/// Physics field, as fractions of the viewport
const PHYSICS_LEFT: f32 = 0.02;
const PHYSICS_RIGHT: f32 = 0.98;
const PHYSICS_TOP: f32 = 0.1;
const PHYSICS_BOTTOM: f32 = 0.9;
/// Physics goal width, as a fraction of the play-area width
const PHYSICS_GOAL_WIDTH: f32 = 0.1;

/// Drawn field, as fractions of the viewport
const DRAWING_LEFT: f32 = 0.01;
const DRAWING_RIGHT: f32 = 0.99;
const DRAWING_TOP: f32 = 0.01;
const DRAWING_BOTTOM: f32 = 0.99;
const DRAWING_GOAL_WIDTH: f32 = 0.13;
/// Drawn goal height, as a fraction of the viewport height
const DRAWING_GOAL_HEIGHT: f32 = 0.025;
/// Goal markers sit this far (fraction of viewport height) inside the drawn field
const GOAL_MARKER_INSET: f32 = 0.06;

/// Size of the rendering surface, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True once the host has reported a usable size
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Playable rectangle and goal interval used for collisions and scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub goal_width: f32,
    pub goal_left_x: f32,
}

impl PhysicsBounds {
    /// Right edge of the goal interval
    #[inline]
    pub fn goal_right_x(&self) -> f32 {
        self.goal_left_x + self.goal_width
    }

    /// Whether `x` lies in the goal mouth (both ends inclusive)
    #[inline]
    pub fn in_goal_mouth(&self, x: f32) -> bool {
        (self.goal_left_x..=self.goal_right_x()).contains(&x)
    }
}

/// Rectangle and goal size used only for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub goal_left_x: f32,
}

/// A drawn goal rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalMarker {
    /// Team that scores by putting the ball in this goal
    pub scorer: Team,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute collision bounds for a viewport
pub fn compute_physics_bounds(viewport: Viewport) -> PhysicsBounds {
    let left = viewport.width * PHYSICS_LEFT;
    let right = viewport.width * PHYSICS_RIGHT;
    let top = viewport.height * PHYSICS_TOP;
    let bottom = viewport.height * PHYSICS_BOTTOM;
    let goal_width = (right - left) * PHYSICS_GOAL_WIDTH;
    let goal_left_x = left + ((right - left) - goal_width) / 2.0;
    PhysicsBounds {
        left,
        right,
        top,
        bottom,
        goal_width,
        goal_left_x,
    }
}

/// Compute drawing bounds for a viewport
pub fn compute_drawing_bounds(viewport: Viewport) -> DrawingBounds {
    let left = viewport.width * DRAWING_LEFT;
    let right = viewport.width * DRAWING_RIGHT;
    let top = viewport.height * DRAWING_TOP;
    let bottom = viewport.height * DRAWING_BOTTOM;
    let goal_width = (right - left) * DRAWING_GOAL_WIDTH;
    let goal_height = viewport.height * DRAWING_GOAL_HEIGHT;
    let goal_left_x = left + ((right - left) - goal_width) / 2.0;
    DrawingBounds {
        left,
        right,
        top,
        bottom,
        goal_width,
        goal_height,
        goal_left_x,
    }
}

/// The two goal rectangles to draw, top goal first
pub fn goal_markers(viewport: Viewport) -> [GoalMarker; 2] {
    let drawing = compute_drawing_bounds(viewport);
    let inset = viewport.height * GOAL_MARKER_INSET;
    [
        GoalMarker {
            scorer: Team::Two,
            x: drawing.goal_left_x,
            y: drawing.top + inset,
            width: drawing.goal_width,
            height: drawing.goal_height,
        },
        GoalMarker {
            scorer: Team::One,
            x: drawing.goal_left_x,
            y: drawing.bottom - drawing.goal_height - inset,
            width: drawing.goal_width,
            height: drawing.goal_height,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_bounds_1000x2000() {
        let b = compute_physics_bounds(Viewport::new(1000.0, 2000.0));
        assert!((b.left - 20.0).abs() < 1e-4);
        assert!((b.right - 980.0).abs() < 1e-3);
        assert!((b.top - 200.0).abs() < 1e-3);
        assert!((b.bottom - 1800.0).abs() < 1e-3);
        assert!((b.goal_width - 96.0).abs() < 1e-3);
        assert!((b.goal_left_x - 452.0).abs() < 1e-3);
    }

    #[test]
    fn test_drawing_bounds_1000x2000() {
        let d = compute_drawing_bounds(Viewport::new(1000.0, 2000.0));
        assert!((d.left - 10.0).abs() < 1e-4);
        assert!((d.right - 990.0).abs() < 1e-3);
        assert!((d.top - 20.0).abs() < 1e-3);
        assert!((d.bottom - 1980.0).abs() < 1e-3);
        assert!((d.goal_width - 127.4).abs() < 1e-3);
        assert!((d.goal_height - 50.0).abs() < 1e-3);
        assert!((d.goal_left_x - 436.3).abs() < 1e-3);
    }

    #[test]
    fn test_drawn_goal_wider_than_physics_goal() {
        let viewport = Viewport::new(720.0, 1280.0);
        let physics = compute_physics_bounds(viewport);
        let drawing = compute_drawing_bounds(viewport);
        assert!(drawing.goal_width > physics.goal_width);
        assert!(drawing.goal_left_x < physics.goal_left_x);
    }

    #[test]
    fn test_goal_markers_placement() {
        let viewport = Viewport::new(1000.0, 2000.0);
        let [top, bottom] = goal_markers(viewport);
        assert_eq!(top.scorer, Team::Two);
        assert_eq!(bottom.scorer, Team::One);
        // 20 + 0.06 * 2000
        assert!((top.y - 140.0).abs() < 1e-3);
        // 1980 - 50 - 120
        assert!((bottom.y - 1810.0).abs() < 1e-3);
        assert_eq!(top.x, bottom.x);
        assert_eq!(top.width, bottom.width);
    }

    #[test]
    fn test_goal_mouth_inclusive() {
        let b = compute_physics_bounds(Viewport::new(1000.0, 2000.0));
        assert!(b.in_goal_mouth(b.goal_left_x));
        assert!(b.in_goal_mouth(b.goal_right_x()));
        assert!(!b.in_goal_mouth(b.goal_left_x - 0.01));
        assert!(!b.in_goal_mouth(b.goal_right_x() + 0.01));
    }

    #[test]
    fn test_degenerate_viewport() {
        let b = compute_physics_bounds(Viewport::ZERO);
        assert_eq!(b.left, 0.0);
        assert_eq!(b.right, 0.0);
        assert!(!Viewport::ZERO.is_valid());
        assert!(!Viewport::new(-10.0, 100.0).is_valid());
    }
}
