//! Keyboard to paddle commands
//!
//! W/S drive the left paddle, I/K drive the right paddle, Escape quits.
//! Nothing latches between frames: every sample recomputes both directions
//! from the keys held right now.

use crate::sim::World;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    W,
    S,
    I,
    K,
}

impl Key {
    pub const ALL: [Key; 5] = [Key::Escape, Key::W, Key::S, Key::I, Key::K];

    fn index(self) -> usize {
        self as usize
    }
}

/// Discrete events drained from the platform each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / OS quit request
    Quit,
    Key { key: Key, pressed: bool },
}

/// Snapshot of which keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: [bool; Key::ALL.len()],
}

impl KeyboardState {
    /// State with exactly the given keys held
    pub fn with_held(keys: &[Key]) -> Self {
        let mut state = Self::default();
        for &key in keys {
            state.set(key, true);
        }
        state
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.held[key.index()] = down;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

/// Result of one input sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCommands {
    pub quit: bool,
    pub left_direction: i32,
    pub right_direction: i32,
}

impl InputCommands {
    /// Overwrite both paddles' direction
    pub fn apply(&self, world: &mut World) {
        world.left_paddle.direction = self.left_direction;
        world.right_paddle.direction = self.right_direction;
    }
}

/// Net direction from an up/down key pair; both held cancels out
fn axis(keys: &KeyboardState, up: Key, down: Key) -> i32 {
    let mut direction = 0;
    if keys.is_down(up) {
        direction -= 1;
    }
    if keys.is_down(down) {
        direction += 1;
    }
    direction
}

/// Map this frame's events and held keys to paddle directions and a quit flag
pub fn map_input(events: &[InputEvent], keys: &KeyboardState) -> InputCommands {
    let mut quit = false;
    for event in events {
        match event {
            InputEvent::Quit => quit = true,
            InputEvent::Key { key, pressed } => {
                log::trace!("key {key:?} pressed={pressed}");
            }
        }
    }

    if keys.is_down(Key::Escape) {
        quit = true;
    }

    InputCommands {
        quit,
        left_direction: axis(keys, Key::W, Key::S),
        right_direction: axis(keys, Key::I, Key::K),
    }
}
