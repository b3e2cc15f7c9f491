//! Pong entry point
//!
//! Brings up the native platform, runs one match, and tears everything down.

use std::process::ExitCode;

use pong::GameLoop;
use pong::platform::{Clock, NativePlatform};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pong v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut platform = match NativePlatform::new() {
        Ok(platform) => platform,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut game = GameLoop::new(platform.ticks_ms());
    let reason = game.run(&mut platform);
    log::info!("Exiting: {reason:?}");

    ExitCode::SUCCESS
}
