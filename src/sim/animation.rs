//! Bird flap animation clock
//!
//! Accumulates real frame time separately from physics and steps the bird's
//! frame index on a fixed cadence. At most one frame advances per call, no
//! matter how far the counter overshoots the interval.

use crate::consts::{FRAME_COUNT, FRAME_INTERVAL};

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    /// Seconds since the last frame change
    pub counter: f32,
    pub interval: f32,
    pub frame_count: u32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL, FRAME_COUNT)
    }
}

impl AnimationClock {
    pub fn new(interval: f32, frame_count: u32) -> Self {
        Self {
            counter: 0.0,
            interval,
            frame_count: frame_count.max(1),
        }
    }

    /// Add `dt` and advance `frame` by one (wrapping) once the interval is reached.
    ///
    /// Returns true if the frame changed.
    pub fn accumulate(&mut self, dt: f32, frame: &mut u32) -> bool {
        self.counter += dt;
        if self.counter >= self.interval {
            *frame = (*frame + 1) % self.frame_count;
            self.counter = 0.0;
            return true;
        }
        false
    }
}
