//! World state and core simulation types
//!
//! Everything the update step reads or writes lives here. Timing state does not;
//! it belongs to the loop's frame pacer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which side of the arena something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A vertically moving paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center of the paddle
    pub pos: Vec2,
    /// Intended vertical movement: -1 (up), 0, or 1 (down)
    pub direction: i32,
}

impl Paddle {
    /// Paddle resting at the vertical center of its side
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => THICKNESS,
            Side::Right => WINDOW_WIDTH as f32 - THICKNESS,
        };
        Self {
            pos: Vec2::new(x, WINDOW_HEIGHT as f32 / 2.0),
            direction: 0,
        }
    }

    /// Move by `direction * PADDLE_SPEED * dt` and clamp into the playable band.
    ///
    /// A stationary paddle is left untouched.
    pub fn advance(&mut self, dt: f32) {
        if self.direction == 0 {
            return;
        }
        self.pos.y += self.direction as f32 * PADDLE_SPEED * dt;
        self.pos.y = self.pos.y.clamp(PADDLE_MIN_Y, PADDLE_MAX_Y);
    }
}

/// A square ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Packed 0xRRGGBBAA
    pub color: u32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, color: u32) -> Self {
        Self { pos, vel, color }
    }

    /// Integrate position over `dt` seconds
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    /// Draw order only; the simulation treats balls independently
    pub balls: Vec<Ball>,
}

impl World {
    /// The starting arena: both paddles centered, three balls launched from
    /// the middle in different directions.
    pub fn new() -> Self {
        let center = Vec2::new(WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 2.0);
        Self {
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            balls: vec![
                Ball::new(center, Vec2::new(100.0, 120.0), 0x0000_ffff),
                Ball::new(center, Vec2::new(-120.0, 92.0), 0x00ff_00ff),
                Ball::new(center, Vec2::new(-70.0, 220.0), 0xff00_00ff),
            ],
        }
    }

    /// World with both paddles centered and the given balls
    pub fn with_balls(balls: Vec<Ball>) -> Self {
        Self {
            balls,
            ..Self::new()
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_world_layout() {
        let world = World::new();
        assert_eq!(world.left_paddle.pos, Vec2::new(15.0, 384.0));
        assert_eq!(world.right_paddle.pos, Vec2::new(1009.0, 384.0));
        assert_eq!(world.left_paddle.direction, 0);
        assert_eq!(world.right_paddle.direction, 0);
        assert_eq!(world.balls.len(), 3);
        assert!(world.balls.iter().all(|b| b.pos == Vec2::new(512.0, 384.0)));
    }

    #[test]
    fn test_paddle_stationary_does_not_move() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.pos.y = 10.0; // deliberately outside the band
        paddle.advance(0.05);
        assert_eq!(paddle.pos.y, 10.0);
    }

    #[test]
    fn test_paddle_clamps_at_top_and_bottom() {
        let mut paddle = Paddle::new(Side::Right);
        paddle.pos.y = PADDLE_MIN_Y + 1.0;
        paddle.direction = -1;
        paddle.advance(0.05);
        assert_eq!(paddle.pos.y, PADDLE_MIN_Y);

        paddle.pos.y = PADDLE_MAX_Y - 1.0;
        paddle.direction = 1;
        paddle.advance(0.05);
        assert_eq!(paddle.pos.y, PADDLE_MAX_Y);
    }

    #[test]
    fn test_world_snapshot_serializes() {
        let world = World::new();
        let json = serde_json::to_string(&world).unwrap();
        let back: World = serde_json::from_str(&json).unwrap();
        assert_eq!(back, world);
    }
}
