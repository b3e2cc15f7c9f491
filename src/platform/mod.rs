//! Platform abstraction layer
//!
//! The game loop only needs four things from the outside world:
//! - Input: drainable events and the currently held keys
//! - Time: a monotonic millisecond counter
//! - Drawing: see [`crate::renderer::DrawSink`]
//! - A window to draw into, owned by the backend
//!
//! `native` provides all of them with winit + wgpu.

pub mod native;

pub use native::{NativeClock, NativePlatform};

use crate::input::{InputEvent, KeyboardState};
use crate::renderer::DrawSink;

/// Source of discrete events and held-key state
pub trait InputSource {
    /// Next pending event, `None` once the queue is drained
    fn poll_event(&mut self) -> Option<InputEvent>;
    /// Keys held at the time of the call
    fn keyboard(&self) -> KeyboardState;
}

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin; never decreases
    fn ticks_ms(&mut self) -> u64;

    /// Block until `ticks_ms() >= deadline_ms`
    fn wait_until(&mut self, deadline_ms: u64) {
        while self.ticks_ms() < deadline_ms {
            std::hint::spin_loop();
        }
    }
}

/// Everything the game loop drives
pub trait Platform: InputSource + Clock + DrawSink {}

impl<T: InputSource + Clock + DrawSink> Platform for T {}
