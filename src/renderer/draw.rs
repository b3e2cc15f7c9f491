//! World to draw commands
//!
//! The scene is nothing but filled rectangles, so the renderer speaks a
//! four-command vocabulary and any backend that understands it can present a
//! frame. `render` is a pure function of the world: the same world always
//! yields the same command sequence.

use crate::consts::*;
use crate::sim::World;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a 0xRRGGBBAA value
    pub const fn from_packed(color: u32) -> Self {
        Self {
            r: (color >> 24) as u8,
            g: (color >> 16) as u8,
            b: (color >> 8) as u8,
            a: color as u8,
        }
    }

    const fn from_tuple((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }

    /// Normalized channels for the GPU
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Pixel rectangle, origin top-left, y down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// `w` x `h` rectangle centered on (x, y), truncating the center to whole pixels
    fn centered(x: f32, y: f32, w: u32, h: u32) -> Self {
        Self::new(x as i32 - w as i32 / 2, y as i32 - h as i32 / 2, w, h)
    }
}

/// A drawing backend
pub trait DrawSink {
    fn set_draw_color(&mut self, color: Rgba);
    /// Fill the whole frame with the current draw color
    fn clear(&mut self);
    /// Fill `rect` with the current draw color
    fn fill_rect(&mut self, rect: Rect);
    /// Show the completed frame
    fn present(&mut self);
}

/// One recorded call on a [`DrawSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    SetColor(Rgba),
    Clear,
    FillRect(Rect),
    Present,
}

/// Sink that records commands instead of drawing them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed frames recorded so far
    pub fn frames_presented(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }
}

impl DrawSink for CommandList {
    fn set_draw_color(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}

const BACKGROUND: Rgba = Rgba::from_tuple(BACKGROUND_COLOR);
const FOREGROUND: Rgba = Rgba::from_tuple(FOREGROUND_COLOR);
const THICKNESS_PX: u32 = THICKNESS as u32;
const PADDLE_HEIGHT_PX: u32 = PADDLE_HEIGHT as u32;

/// Draw one complete frame of `world` into `sink`
pub fn render(world: &World, sink: &mut impl DrawSink) {
    sink.set_draw_color(BACKGROUND);
    sink.clear();

    // Walls
    sink.set_draw_color(FOREGROUND);
    sink.fill_rect(Rect::new(0, 0, WINDOW_WIDTH, THICKNESS_PX));
    sink.fill_rect(Rect::new(
        0,
        (WINDOW_HEIGHT - THICKNESS_PX) as i32,
        WINDOW_WIDTH,
        THICKNESS_PX,
    ));

    // Paddles
    for paddle in [&world.right_paddle, &world.left_paddle] {
        sink.fill_rect(Rect::centered(
            paddle.pos.x,
            paddle.pos.y,
            THICKNESS_PX,
            PADDLE_HEIGHT_PX,
        ));
    }

    for ball in &world.balls {
        sink.set_draw_color(Rgba::from_packed(ball.color));
        sink.fill_rect(Rect::centered(
            ball.pos.x,
            ball.pos.y,
            THICKNESS_PX,
            THICKNESS_PX,
        ));
    }

    sink.present();
}
