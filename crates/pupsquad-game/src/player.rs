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

//! The player character.

use pupsquad_core::input::{InputEvent, Key};
use pupsquad_core::math::Vec2;
use pupsquad_core::physics::{Body, Contacts};
use pupsquad_core::units::{GRAVITY, METERS};

use crate::animation::AnimationController;
use crate::map::TileMap;

/// The player's collision size: a pup is wider than it is tall.
const PLAYER_SIZE: Vec2 = Vec2::new(1.07 * METERS, 0.74 * METERS);
/// The player's mass in kilograms.
const PLAYER_MASS: f32 = 35.0;
/// Horizontal run speed in pixels/s.
const RUN_SPEED: f32 = 3.0 * METERS;

/// The player character: a kinematic body plus run/jump control state and
/// the sprite animation machine.
#[derive(Debug)]
pub struct Player {
    body: Body,
    run_speed: f32,
    jump_height: f32,
    animation: AnimationController,
}

impl Player {
    /// Creates the player centered at `position` (pixels).
    pub fn new(position: Vec2) -> Self {
        Self {
            body: Body::new(PLAYER_SIZE, PLAYER_MASS, position),
            run_speed: RUN_SPEED,
            jump_height: 2.0 * PLAYER_SIZE.y,
            animation: AnimationController::new(),
        }
    }

    /// The player's kinematic body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The player's animation state.
    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    /// Applies one input event to the control state.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyPressed { key } => match key {
                Key::Space => self.jump(),
                Key::A => self.start_run_left(),
                Key::D => self.start_run_right(),
                _ => {}
            },
            InputEvent::KeyReleased { key } => match key {
                Key::A => self.stop_run_left(),
                Key::D => self.stop_run_right(),
                _ => {}
            },
        }
    }

    /// Advances physics by `dt` seconds against the map, then updates the
    /// animation from the resulting velocity.
    pub fn update(&mut self, dt: f32, map: &TileMap) -> Contacts {
        let contacts = self.body.step(dt, map.solid_rects());
        self.animation.advance(self.body.velocity);
        contacts
    }

    /// Starts a jump: an upward impulse sized so the apex of the arc is
    /// exactly `jump_height` above the takeoff point. Refused while a jump
    /// is already in flight.
    pub fn jump(&mut self) {
        if self.body.jumping {
            return;
        }
        let jump_velocity = (2.0 * GRAVITY * self.jump_height).sqrt();
        self.body.velocity.y -= jump_velocity;
        self.body.jumping = true;
    }

    /// Adds leftward run velocity (held key).
    pub fn start_run_left(&mut self) {
        self.body.velocity.x -= self.run_speed;
    }

    /// Removes the leftward run velocity (key released).
    ///
    /// Start/stop are symmetric additions, so holding both direction keys
    /// nets to zero and releasing one restores the other's motion.
    pub fn stop_run_left(&mut self) {
        self.body.velocity.x += self.run_speed;
    }

    /// Adds rightward run velocity (held key).
    pub fn start_run_right(&mut self) {
        self.body.velocity.x += self.run_speed;
    }

    /// Removes the rightward run velocity (key released).
    pub fn stop_run_right(&mut self) {
        self.body.velocity.x -= self.run_speed;
    }
}
