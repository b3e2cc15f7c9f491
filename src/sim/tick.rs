//! Simulation update
//!
//! Advances the world by one variable-length step. The caller (the frame
//! pacer) guarantees `dt` never exceeds `MAX_DELTA_SECS`.

use super::collision::{bounce_off_paddle, bounce_off_walls, side_exit};
use super::state::{Side, World};

/// What a tick observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// A ball crossed a side wall; the match is over
    BallExited { index: usize, side: Side },
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::BallExited { .. })
    }
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, dt: f32) -> TickOutcome {
    world.right_paddle.advance(dt);
    world.left_paddle.advance(dt);

    let mut outcome = TickOutcome::Continue;

    for (index, ball) in world.balls.iter_mut().enumerate() {
        ball.integrate(dt);

        bounce_off_paddle(ball, &world.right_paddle, Side::Right);
        bounce_off_paddle(ball, &world.left_paddle, Side::Left);

        // First exit wins, but every ball still finishes its step
        if let Some(side) = side_exit(ball) {
            if outcome == TickOutcome::Continue {
                log::debug!("ball {index} left the arena on the {side:?} side at {:?}", ball.pos);
                outcome = TickOutcome::BallExited { index, side };
            }
        }

        bounce_off_walls(ball);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::{BOTTOM_BOUNCE_Y, RIGHT_EXIT_X, TOP_BOUNCE_Y};
    use crate::sim::state::Ball;
    use glam::Vec2;
    use proptest::prelude::*;

    fn single_ball(pos: Vec2, vel: Vec2) -> World {
        World::with_balls(vec![Ball::new(pos, vel, 0x0000_ffff)])
    }

    #[test]
    fn test_ball_integrates_without_collision() {
        let mut world = single_ball(Vec2::new(512.0, 384.0), Vec2::new(100.0, 120.0));
        let outcome = tick(&mut world, 0.016);

        assert_eq!(outcome, TickOutcome::Continue);
        let ball = &world.balls[0];
        assert!((ball.pos.x - 513.6).abs() < 1e-3);
        assert!((ball.pos.y - 385.92).abs() < 1e-3);
        assert_eq!(ball.vel, Vec2::new(100.0, 120.0));
    }

    #[test]
    fn test_ball_crossing_right_wall_terminates() {
        let mut world = single_ball(Vec2::new(512.0, 100.0), Vec2::new(100.0, 0.0));
        // Keep the ball clear of the right paddle's vertical span
        world.right_paddle.pos.y = PADDLE_MAX_Y;
        world.balls[0].pos.x = RIGHT_EXIT_X - 1.0;

        let outcome = tick(&mut world, 0.02);
        assert!(world.balls[0].pos.x > RIGHT_EXIT_X);
        assert_eq!(
            outcome,
            TickOutcome::BallExited {
                index: 0,
                side: Side::Right
            }
        );
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_exit_reported_regardless_of_other_balls() {
        let mut world = World::with_balls(vec![
            Ball::new(Vec2::new(512.0, 384.0), Vec2::new(10.0, 10.0), 0xffff_ffff),
            Ball::new(Vec2::new(8.0, 200.0), Vec2::new(-100.0, 0.0), 0xffff_ffff),
            Ball::new(Vec2::new(512.0, 300.0), Vec2::new(-10.0, 10.0), 0xffff_ffff),
        ]);
        world.left_paddle.pos.y = PADDLE_MAX_Y;

        let outcome = tick(&mut world, 0.016);
        assert_eq!(
            outcome,
            TickOutcome::BallExited {
                index: 1,
                side: Side::Left
            }
        );
        // The remaining balls were still integrated
        assert!((world.balls[2].pos.x - 511.84).abs() < 1e-3);
    }

    #[test]
    fn test_first_exiting_ball_is_reported() {
        let mut world = World::with_balls(vec![
            Ball::new(Vec2::new(1016.0, 200.0), Vec2::new(100.0, 0.0), 0xffff_ffff),
            Ball::new(Vec2::new(8.0, 200.0), Vec2::new(-100.0, 0.0), 0xffff_ffff),
        ]);
        world.left_paddle.pos.y = PADDLE_MAX_Y;
        world.right_paddle.pos.y = PADDLE_MAX_Y;

        let outcome = tick(&mut world, 0.016);
        assert_eq!(
            outcome,
            TickOutcome::BallExited {
                index: 0,
                side: Side::Right
            }
        );
    }

    #[test]
    fn test_paddle_flips_ball_once_per_approach() {
        let mut world = single_ball(Vec2::new(990.0, 384.0), Vec2::new(200.0, 0.0));
        let mut flips = 0;
        let mut last_sign = 1.0_f32;

        for _ in 0..6 {
            tick(&mut world, 0.016);
            let sign = world.balls[0].vel.x.signum();
            if sign != last_sign {
                flips += 1;
                last_sign = sign;
            }
        }

        assert_eq!(flips, 1);
        assert!(world.balls[0].vel.x < 0.0);
    }

    #[test]
    fn test_top_wall_flips_upward_ball() {
        let mut world = single_ball(Vec2::new(500.0, TOP_BOUNCE_Y - 0.5), Vec2::new(10.0, -100.0));
        tick(&mut world, 0.001);
        assert!(world.balls[0].vel.y > 0.0);
    }

    #[test]
    fn test_bottom_wall_flips_downward_ball() {
        let mut world = single_ball(
            Vec2::new(500.0, BOTTOM_BOUNCE_Y + 0.5),
            Vec2::new(10.0, 100.0),
        );
        tick(&mut world, 0.001);
        assert!(world.balls[0].vel.y < 0.0);
    }

    #[test]
    fn test_paddles_move_before_collision_check() {
        // Ball sits just outside the right paddle's span; moving the paddle down
        // this tick brings it into range.
        let mut world = single_ball(Vec2::new(1000.0, 436.0), Vec2::new(50.0, 0.0));
        world.right_paddle.direction = 1;
        tick(&mut world, 0.016);
        assert!(world.right_paddle.pos.y > 384.0);
        assert!(world.balls[0].vel.x < 0.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_band(
            start in PADDLE_MIN_Y..=PADDLE_MAX_Y,
            direction in -1i32..=1,
            dt in 0.0001f32..=MAX_DELTA_SECS,
        ) {
            let mut world = World::with_balls(Vec::new());
            world.left_paddle.pos.y = start;
            world.left_paddle.direction = direction;
            world.right_paddle.pos.y = start;
            world.right_paddle.direction = -direction;

            tick(&mut world, dt);

            for paddle in [&world.left_paddle, &world.right_paddle] {
                prop_assert!(paddle.pos.y >= PADDLE_MIN_Y);
                prop_assert!(paddle.pos.y <= PADDLE_MAX_Y);
            }
        }
    }
}
