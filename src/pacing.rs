//! Frame pacing
//!
//! Each simulation step waits until at least `FRAME_TARGET_MS` have passed
//! since the previous one, then measures the real elapsed time. The measured
//! delta is capped at `MAX_DELTA_SECS` so a stall (debugger, scheduler hiccup)
//! can't turn into one huge integration step that tunnels a ball through a
//! paddle.

use crate::consts::{FRAME_TARGET_MS, MAX_DELTA_SECS};
use crate::platform::Clock;

/// Owns the timestamp of the last processed tick
#[derive(Debug, Clone)]
pub struct FramePacer {
    last_tick_ms: u64,
}

impl FramePacer {
    pub fn new(start_ms: u64) -> Self {
        Self {
            last_tick_ms: start_ms,
        }
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    /// Wait out the frame budget and return the clamped step length in seconds
    pub fn next_delta(&mut self, clock: &mut impl Clock) -> f32 {
        clock.wait_until(self.last_tick_ms + FRAME_TARGET_MS);

        let now = clock.ticks_ms();
        let dt = delta_secs(self.last_tick_ms, now);
        self.last_tick_ms = now;
        dt
    }
}

/// Elapsed seconds between two tick readings, capped at `MAX_DELTA_SECS`
pub fn delta_secs(last_ms: u64, now_ms: u64) -> f32 {
    let elapsed = now_ms.saturating_sub(last_ms) as f32 / 1000.0;
    elapsed.min(MAX_DELTA_SECS)
}
