//! Native desktop backend: winit window, wgpu drawing, `Instant` clock
//!
//! winit normally owns the main loop and calls back into the application.
//! The game loop wants to pull instead, so events are pumped with a zero
//! timeout once per frame and buffered until the loop drains them.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use super::{Clock, InputSource};
use crate::consts::*;
use crate::error::{InitStage, InitializationError};
use crate::input::{InputEvent, Key, KeyboardState};
use crate::renderer::{DrawSink, RectRenderer, Rect, Rgba};

/// Startup pumps allowed before giving up on the window appearing
const WINDOW_CREATE_PUMPS: usize = 16;

/// Monotonic clock anchored at construction
#[derive(Debug, Clone, Copy)]
pub struct NativeClock {
    origin: Instant,
}

impl NativeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for NativeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for NativeClock {
    fn ticks_ms(&mut self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    /// Sleep instead of spinning; oversleeping only lengthens the next `dt`
    fn wait_until(&mut self, deadline_ms: u64) {
        let now = self.ticks_ms();
        if deadline_ms > now {
            std::thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyI => Some(Key::I),
        KeyCode::KeyK => Some(Key::K),
        _ => None,
    }
}

/// Receives winit callbacks and buffers them for the game loop
#[derive(Default)]
struct EventCollector {
    /// Only populated between creation in `resumed` and hand-off to the platform
    created_window: Option<Arc<Window>>,
    create_error: Option<String>,
    keys: KeyboardState,
    events: VecDeque<InputEvent>,
}

impl ApplicationHandler for EventCollector {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.created_window.is_some() || self.create_error.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_position(PhysicalPosition::new(WINDOW_POSITION.0, WINDOW_POSITION.1))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => self.created_window = Some(Arc::new(window)),
            Err(e) => self.create_error = Some(e.to_string()),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.events.push_back(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(key) = map_key(code) else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                self.keys.set(key, pressed);
                if !event.repeat {
                    self.events.push_back(InputEvent::Key { key, pressed });
                }
            }
            // Key releases are not delivered to an unfocused window
            WindowEvent::Focused(false) => self.keys = KeyboardState::default(),
            _ => {}
        }
    }
}

/// Window, GPU renderer and clock for a desktop run.
///
/// Resources are acquired in the order event loop, window, renderer and
/// released in the reverse order when dropped.
pub struct NativePlatform {
    renderer: Option<RectRenderer>,
    window: Option<Arc<Window>>,
    event_loop: Option<EventLoop<()>>,
    collector: EventCollector,
    clock: NativeClock,
    pumped: bool,
}

impl NativePlatform {
    pub fn new() -> Result<Self, InitializationError> {
        let clock = NativeClock::new();

        let mut event_loop =
            EventLoop::new().map_err(|e| InitializationError::new(InitStage::EventLoop, e))?;
        let mut collector = EventCollector::default();

        // The window is created from `resumed`, which fires during the first pumps
        for _ in 0..WINDOW_CREATE_PUMPS {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(Duration::ZERO), &mut collector)
            {
                return Err(InitializationError::new(
                    InitStage::Window,
                    format!("event loop exited during startup (code {code})"),
                ));
            }
            if collector.created_window.is_some() || collector.create_error.is_some() {
                break;
            }
        }

        if let Some(message) = collector.create_error.take() {
            return Err(InitializationError::new(InitStage::Window, message));
        }
        let window = collector
            .created_window
            .take()
            .ok_or_else(|| InitializationError::new(InitStage::Window, "window was never created"))?;
        log::info!("Window created: {:?}", window.inner_size());

        let renderer = pollster::block_on(RectRenderer::new(
            window.clone(),
            (WINDOW_WIDTH, WINDOW_HEIGHT),
        ))?;
        log::info!("Renderer ready");

        Ok(Self {
            renderer: Some(renderer),
            window: Some(window),
            event_loop: Some(event_loop),
            collector,
            clock,
            pumped: false,
        })
    }

    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };
        if let PumpStatus::Exit(code) =
            event_loop.pump_app_events(Some(Duration::ZERO), &mut self.collector)
        {
            log::info!("Event loop exited (code {code})");
            self.collector.events.push_back(InputEvent::Quit);
        }
    }
}

impl Drop for NativePlatform {
    fn drop(&mut self) {
        // Reverse acquisition order: GPU resources, then the window they
        // render into, then the event loop that owns the window
        drop(self.renderer.take());
        drop(self.window.take());
        drop(self.event_loop.take());
        log::info!("Platform shut down");
    }
}

impl InputSource for NativePlatform {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if !self.pumped {
            self.pump();
            self.pumped = true;
        }
        let event = self.collector.events.pop_front();
        if event.is_none() {
            // Drained; pump again on the next frame
            self.pumped = false;
        }
        event
    }

    fn keyboard(&self) -> KeyboardState {
        self.collector.keys
    }
}

impl Clock for NativePlatform {
    fn ticks_ms(&mut self) -> u64 {
        self.clock.ticks_ms()
    }

    fn wait_until(&mut self, deadline_ms: u64) {
        self.clock.wait_until(deadline_ms);
    }
}

impl DrawSink for NativePlatform {
    fn set_draw_color(&mut self, color: Rgba) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_draw_color(color);
        }
    }

    fn clear(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.clear();
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.fill_rect(rect);
        }
    }

    fn present(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.present();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_game_keys_are_mapped() {
        assert_eq!(map_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(map_key(KeyCode::KeyK), Some(Key::K));
        assert_eq!(map_key(KeyCode::Escape), Some(Key::Escape));
        assert_eq!(map_key(KeyCode::ArrowUp), None);
    }

    #[test]
    fn test_native_clock_is_monotonic_and_waits() {
        let mut clock = NativeClock::new();
        let start = clock.ticks_ms();
        clock.wait_until(start + 5);
        assert!(clock.ticks_ms() >= start + 5);
    }
}
