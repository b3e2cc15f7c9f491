//! Collision predicates for axis-aligned paddles and walls
//!
//! Every check is edge-triggered by direction of travel: a ball only bounces
//! while it is still moving into the surface, so once its velocity has been
//! flipped it can overlap the surface for several frames without re-triggering.
//! Positions are never corrected.

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Horizontal thresholds past which a ball has left the arena
pub const LEFT_EXIT_X: f32 = THICKNESS / 2.0;
pub const RIGHT_EXIT_X: f32 = WINDOW_WIDTH as f32 - THICKNESS / 2.0;

/// Vertical thresholds where the top and bottom walls bounce a ball
pub const TOP_BOUNCE_Y: f32 = THICKNESS + THICKNESS / 2.0;
pub const BOTTOM_BOUNCE_Y: f32 = WINDOW_HEIGHT as f32 - (THICKNESS + THICKNESS / 2.0);

/// Whether `ball` is hitting `paddle` on the given side this frame.
///
/// Requires vertical overlap with the paddle's span, the ball's leading edge
/// at or beyond the paddle's near face, and motion toward that paddle.
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let dy = (ball.pos.y - paddle.pos.y).abs();
    if dy >= PADDLE_HEIGHT / 2.0 {
        return false;
    }

    let half = THICKNESS / 2.0;
    match side {
        Side::Right => ball.pos.x + half >= paddle.pos.x - half && ball.vel.x > 0.0,
        Side::Left => ball.pos.x - half <= paddle.pos.x + half && ball.vel.x < 0.0,
    }
}

/// Reverse horizontal travel if the ball is hitting the paddle. Returns true on a bounce.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if ball_hits_paddle(ball, paddle, side) {
        ball.vel.x = -ball.vel.x;
        true
    } else {
        false
    }
}

/// Side the ball has escaped through, if any
pub fn side_exit(ball: &Ball) -> Option<Side> {
    if ball.pos.x > RIGHT_EXIT_X {
        Some(Side::Right)
    } else if ball.pos.x < LEFT_EXIT_X {
        Some(Side::Left)
    } else {
        None
    }
}

/// Reverse vertical travel against the top or bottom wall. Returns true on a bounce.
pub fn bounce_off_walls(ball: &mut Ball) -> bool {
    let hit_top = ball.pos.y < TOP_BOUNCE_Y && ball.vel.y < 0.0;
    let hit_bottom = ball.pos.y > BOTTOM_BOUNCE_Y && ball.vel.y > 0.0;
    if hit_top || hit_bottom {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}
