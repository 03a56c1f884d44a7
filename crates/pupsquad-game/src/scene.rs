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

//! Game scenes and the director that runs them.
//!
//! A [`Scene`] is one screen of the game (a level, a menu, ...). Scenes
//! request transitions by *returning* a [`SceneTransition`] from `update`
//! rather than holding a reference back to their owner, which keeps the
//! ownership graph a tree.

use pupsquad_core::frame::FramePacket;
use pupsquad_core::input::InputEvent;

/// What a scene wants to happen after its update.
pub enum SceneTransition {
    /// Keep running this scene.
    Continue,
    /// Replace this scene with another one.
    Switch(Box<dyn Scene>),
    /// Quit the game.
    Quit,
}

/// One screen of the game.
pub trait Scene {
    /// Handles a single input event.
    fn handle_input(&mut self, event: &InputEvent);

    /// Advances the scene by `dt` seconds.
    fn update(&mut self, dt: f32) -> SceneTransition;

    /// Fills the frame packet with everything the scene wants drawn.
    fn render(&self, packet: &mut FramePacket);
}

/// Owns the current scene and applies the transitions it requests.
pub struct Director {
    scene: Box<dyn Scene>,
    running: bool,
}

impl Director {
    /// Creates a director running `initial` as its first scene.
    pub fn new(initial: Box<dyn Scene>) -> Self {
        Self {
            scene: initial,
            running: true,
        }
    }

    /// Whether the game should keep running.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Forwards one input event to the current scene.
    pub fn handle_input(&mut self, event: &InputEvent) {
        self.scene.handle_input(event);
    }

    /// Updates the current scene and applies any requested transition.
    pub fn update(&mut self, dt: f32) {
        match self.scene.update(dt) {
            SceneTransition::Continue => {}
            SceneTransition::Switch(next) => {
                log::info!("Switching scene.");
                self.scene = next;
            }
            SceneTransition::Quit => {
                log::info!("Scene requested quit.");
                self.running = false;
            }
        }
    }

    /// Renders the current scene into `packet`.
    pub fn render(&self, packet: &mut FramePacket) {
        self.scene.render(packet);
    }
}
