//! Startup errors
//!
//! Once the loop is running nothing can fail; quitting and a ball leaving the
//! arena are ordinary state transitions. Only acquiring platform resources can
//! go wrong.

use std::fmt;

/// Which acquisition step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStage {
    EventLoop,
    Window,
    Surface,
    Adapter,
    Device,
}

impl fmt::Display for InitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InitStage::EventLoop => "event loop",
            InitStage::Window => "window",
            InitStage::Surface => "surface",
            InitStage::Adapter => "graphics adapter",
            InitStage::Device => "graphics device",
        };
        f.write_str(name)
    }
}

/// A platform resource could not be acquired during startup
#[derive(Debug, Clone, thiserror::Error)]
#[error("failed to initialize {stage}: {message}")]
pub struct InitializationError {
    pub stage: InitStage,
    /// Diagnostic text from the platform layer
    pub message: String,
}

impl InitializationError {
    pub fn new(stage: InitStage, message: impl fmt::Display) -> Self {
        Self {
            stage,
            message: message.to_string(),
        }
    }
}
