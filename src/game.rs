//! Fixed-rate host driver
//!
//! The host calls [`Game::update`] with however much time has passed; the
//! driver turns that into whole ticks. Ticks never see the elapsed time.

use crate::consts::MAX_SUBSTEPS;
use crate::platform::TiltSource;
use crate::settings::Settings;
use crate::sim::{MatchState, Team, TickInput, Viewport, tick};
use crate::snapshot::FrameSnapshot;

/// Game instance holding all session state
pub struct Game<S: TiltSource> {
    state: MatchState,
    settings: Settings,
    tilt: S,
    viewport: Viewport,
    /// Unspent time in milliseconds
    accumulator: f32,
}

impl<S: TiltSource> Game<S> {
    pub fn new(settings: Settings, tilt: S) -> Self {
        let settings = settings.sanitized();
        Self {
            state: MatchState::new(settings.ball_radius),
            settings,
            tilt,
            viewport: Viewport::ZERO,
            accumulator: 0.0,
        }
    }

    /// Surface size changed. Takes effect for physics on the next tick and
    /// for snapshots immediately.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.state.viewport = viewport;
    }

    /// Run as many ticks as `elapsed_ms` covers. Returns goals scored, in order.
    pub fn update(&mut self, elapsed_ms: f32) -> Vec<Team> {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.accumulator += elapsed_ms;
        }

        let period = self.settings.tick_period_ms;
        let mut goals = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= period && substeps < MAX_SUBSTEPS {
            if let Some(team) = self.step() {
                goals.push(team);
            }
            self.accumulator -= period;
            substeps += 1;
        }

        // Drop backlog instead of catching up
        if self.accumulator >= period {
            log::debug!(
                "Dropping {:.1} ms of backlog after {} ticks",
                self.accumulator,
                substeps
            );
            self.accumulator %= period;
        }

        goals
    }

    /// Run exactly one tick with the newest tilt sample
    pub fn step(&mut self) -> Option<Team> {
        let input = TickInput {
            viewport: self.viewport,
            tilt: self.tilt.latest(),
        };
        tick(&mut self.state, &input, &self.settings).goal
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
