//! Deterministic simulation module
//!
//! All gameplay logic lives here. No rendering, platform or timing
//! dependencies: the loop hands in an already-clamped `dt`.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_paddle, bounce_off_paddle, bounce_off_walls, side_exit};
pub use state::{Ball, Paddle, Side, World};
pub use tick::{TickOutcome, tick};
