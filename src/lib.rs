//! Pong - two paddles, several balls, one fixed-timestep loop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle movement, ball physics, collisions)
//! - `input`: Keyboard state to paddle directions / quit flag
//! - `renderer`: World to draw commands, plus the WebGPU rectangle backend
//! - `platform`: Window, event pump and clock abstraction
//! - `pacing`: Frame pacing and delta-time clamping
//! - `game`: The Input -> Update -> Render loop

pub mod error;
pub mod game;
pub mod input;
pub mod pacing;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use error::{InitStage, InitializationError};
pub use game::{GameLoop, LoopState, TerminationReason};

/// Game configuration constants
pub mod consts {
    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: u32 = 1024;
    pub const WINDOW_HEIGHT: u32 = 768;
    pub const WINDOW_TITLE: &str = "Pong";
    /// Initial top-left window position on the desktop
    pub const WINDOW_POSITION: (i32, i32) = (100, 100);

    /// Wall thickness, paddle width and ball side length
    pub const THICKNESS: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Paddle vertical speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 300.0;

    /// Lowest and highest y a paddle center may occupy
    pub const PADDLE_MIN_Y: f32 = PADDLE_HEIGHT / 2.0 + THICKNESS;
    pub const PADDLE_MAX_Y: f32 = WINDOW_HEIGHT as f32 - PADDLE_HEIGHT / 2.0 - THICKNESS;

    /// Minimum wall-clock time between simulation steps (~60 Hz)
    pub const FRAME_TARGET_MS: u64 = 16;
    /// Upper bound on a single integration step, guards against tunneling after a stall
    pub const MAX_DELTA_SECS: f32 = 0.05;

    /// Clear color (r, g, b, a)
    pub const BACKGROUND_COLOR: (u8, u8, u8, u8) = (15, 15, 15, 255);
    /// Walls and paddles
    pub const FOREGROUND_COLOR: (u8, u8, u8, u8) = (0, 225, 225, 255);
}
