//! Platform abstraction layer
//!
//! The sensor side writes tilt samples whenever it likes; the simulation
//! reads whatever is newest at tick time. There is no queue.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::TiltSample;

/// Source of the most recent accelerometer sample
pub trait TiltSource {
    /// Newest known sample. Called once per tick.
    fn latest(&mut self) -> TiltSample;
}

/// Shared cell the sensor callback writes into (most recent wins)
#[derive(Debug, Clone, Default)]
pub struct LatestTilt {
    sample: Rc<Cell<TiltSample>>,
}

impl LatestTilt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new reading, replacing the previous one
    pub fn report(&self, sample: TiltSample) {
        self.sample.set(sample);
    }
}

impl TiltSource for LatestTilt {
    fn latest(&mut self) -> TiltSample {
        self.sample.get()
    }
}

/// Replays a fixed sequence, then holds the last sample forever
#[derive(Debug, Clone)]
pub struct ScriptedTilt {
    samples: Vec<TiltSample>,
    cursor: usize,
}

impl ScriptedTilt {
    pub fn new(samples: Vec<TiltSample>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Same sample every tick
    pub fn constant(sample: TiltSample) -> Self {
        Self::new(vec![sample])
    }
}

impl TiltSource for ScriptedTilt {
    fn latest(&mut self) -> TiltSample {
        let Some(last) = self.samples.len().checked_sub(1) else {
            return TiltSample::FLAT;
        };
        let sample = self.samples[self.cursor.min(last)];
        if self.cursor < last {
            self.cursor += 1;
        }
        sample
    }
}
