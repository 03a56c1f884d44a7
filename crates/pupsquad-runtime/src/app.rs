// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The winit application shell that drives the game loop.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use pupsquad_core::event::EventBus;
use pupsquad_core::frame::FramePacket;
use pupsquad_core::input::InputEvent;
use pupsquad_core::math::LinearRgba;
use pupsquad_core::time::{FrameClock, FrameStats};
use pupsquad_game::level_scene::LevelScene;
use pupsquad_game::scene::Director;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::Config;
use crate::input::translate_winit_input;
use crate::render::Renderer;

/// Everything that only exists once a window does.
struct RunningState {
    window: Arc<Window>,
    renderer: Renderer,
    director: Director,
    input_bus: EventBus<InputEvent>,
    clock: FrameClock,
    stats: FrameStats,
    packet: FramePacket,
}

/// The winit application state.
///
/// Window and GPU resources cannot exist before the event loop hands us an
/// [`ActiveEventLoop`], so everything lives behind an `Option` that is filled
/// in by `resumed`.
pub struct App {
    config: Config,
    state: Option<RunningState>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Creates the event loop and runs the game until it exits.
    pub fn run(config: Config) -> Result<()> {
        let event_loop = EventLoop::new()?;
        let mut app = App::new(config);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if self.state.take().is_some() {
            log::info!("Shutting down window and renderer.");
        }
    }
}

impl ApplicationHandler for App {
    /// Called when the event loop is ready to start processing events.
    /// This is the place to initialize everything that requires a window.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return; // Avoid re-initializing if the app is resumed multiple times.
        }

        log::info!("Application resumed. Creating window and renderer...");

        let window_config = &self.config.window;
        let attributes = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(window_config.width, window_config.height));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone(), self.config.vsync)) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let first_scene = match LevelScene::level_one() {
            Ok(scene) => scene,
            Err(e) => {
                log::error!("Failed to load the first level: {e}");
                event_loop.exit();
                return;
            }
        };

        self.state = Some(RunningState {
            window,
            renderer,
            director: Director::new(Box::new(first_scene)),
            input_bus: EventBus::new(),
            clock: FrameClock::new(),
            stats: FrameStats::new(Duration::from_secs(1)),
            packet: FramePacket::new(LinearRgba::BLACK),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if state.window.id() != id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Shutdown requested, exiting event loop...");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                state.renderer.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                // Drain the input collected since the previous frame.
                for input in state.input_bus.receiver().drain() {
                    state.director.handle_input(&input);
                }

                let dt = state.clock.tick();
                state.director.update(dt);
                if !state.director.running() {
                    event_loop.exit();
                    return;
                }

                state.director.render(&mut state.packet);
                if let Err(e) = state.renderer.render(&state.packet) {
                    log::error!("Rendering error: {e}");
                }
                state.stats.record_frame();
            }
            _ => {
                // Translate raw winit events into game input for the scenes.
                if let Some(input) = translate_winit_input(&event) {
                    log::debug!("Input event: {input:?}");
                    state.input_bus.publish(input);
                }
            }
        }
    }

    /// Request another frame once all pending events are processed; this is
    /// what turns the event loop into a continuous game loop.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}
