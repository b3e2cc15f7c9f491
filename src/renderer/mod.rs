//! Rendering module
//!
//! `draw` turns the world into rectangle commands; `pipeline` executes them
//! with WebGPU.

pub mod draw;
pub mod pipeline;
pub mod vertex;

pub use draw::{CommandList, DrawCommand, DrawSink, Rect, Rgba, render};
pub use pipeline::RectRenderer;
