//! The game loop
//!
//! Input -> Update -> Render, once per iteration, until something ends the
//! match. All three phases always run; the iteration that notices the end
//! still renders its frame before the loop stops.

use crate::input::{InputEvent, map_input};
use crate::pacing::FramePacer;
use crate::platform::Platform;
use crate::renderer::render;
use crate::sim::{Side, TickOutcome, World, tick};

/// Loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated(TerminationReason),
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Window closed or Escape held
    QuitRequested,
    /// A ball crossed a side wall
    BallExited(Side),
}

/// Owns the world and the tick clock for the lifetime of a match
pub struct GameLoop {
    world: World,
    pacer: FramePacer,
    state: LoopState,
    frames: u64,
    events: Vec<InputEvent>,
}

impl GameLoop {
    /// Fresh match with the standard starting world
    pub fn new(start_ms: u64) -> Self {
        Self::with_world(World::new(), start_ms)
    }

    pub fn with_world(world: World, start_ms: u64) -> Self {
        Self {
            world,
            pacer: FramePacer::new(start_ms),
            state: LoopState::Running,
            frames: 0,
            events: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Completed iterations so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one Input -> Update -> Render iteration.
    ///
    /// Once terminated, further calls do nothing.
    pub fn step(&mut self, platform: &mut impl Platform) -> LoopState {
        if self.state != LoopState::Running {
            return self.state;
        }

        // Input
        self.events.clear();
        while let Some(event) = platform.poll_event() {
            self.events.push(event);
        }
        let commands = map_input(&self.events, &platform.keyboard());
        commands.apply(&mut self.world);
        if commands.quit {
            self.terminate(TerminationReason::QuitRequested);
        }

        // Update
        let dt = self.pacer.next_delta(platform);
        if let TickOutcome::BallExited { side, .. } = tick(&mut self.world, dt) {
            self.terminate(TerminationReason::BallExited(side));
        }

        // Render
        render(&self.world, platform);

        self.frames += 1;
        self.state
    }

    /// Step until the match ends
    pub fn run(&mut self, platform: &mut impl Platform) -> TerminationReason {
        loop {
            if let LoopState::Terminated(reason) = self.step(platform) {
                log::info!("Game over after {} frames: {:?}", self.frames, reason);
                match serde_json::to_string(&self.world) {
                    Ok(json) => log::debug!("Final world: {json}"),
                    Err(e) => log::warn!("Could not serialize final world: {e}"),
                }
                return reason;
            }
        }
    }

    /// Keep the first reason if several arrive in one iteration
    fn terminate(&mut self, reason: TerminationReason) {
        if self.state == LoopState::Running {
            self.state = LoopState::Terminated(reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyboardState};
    use crate::platform::{Clock, InputSource};
    use crate::renderer::{CommandList, DrawCommand, DrawSink, Rect, Rgba};
    use glam::Vec2;

    /// Headless platform: fixed keys, manual clock, recording sink
    #[derive(Default)]
    struct Headless {
        events: Vec<InputEvent>,
        keys: KeyboardState,
        now: u64,
        sink: CommandList,
    }

    impl InputSource for Headless {
        fn poll_event(&mut self) -> Option<InputEvent> {
            if self.events.is_empty() {
                None
            } else {
                Some(self.events.remove(0))
            }
        }

        fn keyboard(&self) -> KeyboardState {
            self.keys
        }
    }

    impl Clock for Headless {
        fn ticks_ms(&mut self) -> u64 {
            self.now
        }

        fn wait_until(&mut self, deadline_ms: u64) {
            self.now = self.now.max(deadline_ms);
        }
    }

    impl DrawSink for Headless {
        fn set_draw_color(&mut self, color: Rgba) {
            self.sink.set_draw_color(color);
        }
        fn clear(&mut self) {
            self.sink.clear();
        }
        fn fill_rect(&mut self, rect: Rect) {
            self.sink.fill_rect(rect);
        }
        fn present(&mut self) {
            self.sink.present();
        }
    }

    #[test]
    fn test_step_runs_all_phases() {
        let mut platform = Headless::default();
        let mut game = GameLoop::new(0);

        assert_eq!(game.step(&mut platform), LoopState::Running);
        assert_eq!(game.frames(), 1);
        assert_eq!(platform.sink.frames_presented(), 1);
        // First ball moved by one 16 ms step
        let ball = &game.world().balls[0];
        assert!((ball.pos - Vec2::new(513.6, 385.92)).length() < 1e-3);
    }

    #[test]
    fn test_quit_event_still_renders_final_frame() {
        let mut platform = Headless {
            events: vec![InputEvent::Quit],
            ..Default::default()
        };
        let mut game = GameLoop::new(0);

        let state = game.step(&mut platform);
        assert_eq!(state, LoopState::Terminated(TerminationReason::QuitRequested));
        assert_eq!(platform.sink.frames_presented(), 1);
        assert_eq!(platform.sink.commands.last(), Some(&DrawCommand::Present));
    }

    #[test]
    fn test_escape_terminates() {
        let mut platform = Headless {
            keys: KeyboardState::with_held(&[Key::Escape]),
            ..Default::default()
        };
        let mut game = GameLoop::new(0);
        assert_eq!(game.run(&mut platform), TerminationReason::QuitRequested);
        assert_eq!(game.frames(), 1);
    }

    #[test]
    fn test_terminated_loop_ignores_further_steps() {
        let mut platform = Headless {
            events: vec![InputEvent::Quit],
            ..Default::default()
        };
        let mut game = GameLoop::new(0);
        game.step(&mut platform);
        let before = platform.sink.commands.len();

        game.step(&mut platform);
        assert_eq!(game.frames(), 1);
        assert_eq!(platform.sink.commands.len(), before);
    }

    #[test]
    fn test_held_keys_move_paddles() {
        let mut platform = Headless {
            keys: KeyboardState::with_held(&[Key::W, Key::K]),
            ..Default::default()
        };
        let mut game = GameLoop::new(0);
        game.step(&mut platform);

        let world = game.world();
        assert_eq!(world.left_paddle.direction, -1);
        assert_eq!(world.right_paddle.direction, 1);
        assert!((world.left_paddle.pos.y - (384.0 - 4.8)).abs() < 1e-3);
        assert!((world.right_paddle.pos.y - (384.0 + 4.8)).abs() < 1e-3);
    }
}
