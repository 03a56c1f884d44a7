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

//! The playable level scene: one player in one tile map.

use pupsquad_core::frame::FramePacket;
use pupsquad_core::input::{InputEvent, Key};
use pupsquad_core::math::LinearRgba;

use crate::level::{self, LevelError};
use crate::map::TileMap;
use crate::player::Player;
use crate::scene::{Scene, SceneTransition};

use crate::animation::Pose;

/// Background fill, the CSS "grey".
const BACKGROUND: LinearRgba = LinearRgba::rgb(0.5, 0.5, 0.5);
/// Solid tiles are drawn black.
const TILE_COLOR: LinearRgba = LinearRgba::BLACK;

/// Flat fill color per pose, standing in for sprites. The shades make the
/// animation state machine visible on screen.
fn pose_color(pose: Pose) -> LinearRgba {
    match pose {
        Pose::Idle => LinearRgba::RED,
        Pose::Run => LinearRgba::from_srgb_u8(255, 69, 0),
        Pose::Jump => LinearRgba::from_srgb_u8(255, 99, 71),
        Pose::Fall => LinearRgba::from_srgb_u8(178, 34, 34),
    }
}

/// A level being played.
pub struct LevelScene {
    player: Player,
    map: TileMap,
    quit_requested: bool,
}

impl LevelScene {
    /// Creates a scene from a level definition.
    pub fn new(def: &level::LevelDef) -> Result<Self, LevelError> {
        let map = def.build_map()?;
        Ok(Self {
            player: Player::new(def.player_spawn),
            map,
            quit_requested: false,
        })
    }

    /// Creates the first level.
    pub fn level_one() -> Result<Self, LevelError> {
        Self::new(&level::level_one()?)
    }

    /// The player entity, for inspection.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The level's tile map.
    pub fn map(&self) -> &TileMap {
        &self.map
    }
}

impl Scene for LevelScene {
    fn handle_input(&mut self, event: &InputEvent) {
        if matches!(event, InputEvent::KeyPressed { key: Key::Escape }) {
            self.quit_requested = true;
            return;
        }
        self.player.handle_input(event);
    }

    fn update(&mut self, dt: f32) -> SceneTransition {
        if self.quit_requested {
            return SceneTransition::Quit;
        }
        self.player.update(dt, &self.map);
        SceneTransition::Continue
    }

    fn render(&self, packet: &mut FramePacket) {
        packet.reset(BACKGROUND);
        for rect in self.map.solid_rects() {
            packet.push_quad(rect, TILE_COLOR);
        }
        packet.push_quad(
            self.player.body().rect(),
            pose_color(self.player.animation().pose()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pupsquad_core::math::Vec2;

    fn scene() -> LevelScene {
        LevelScene::level_one().unwrap()
    }

    #[test]
    fn test_player_starts_at_level_spawn() {
        let scene = scene();
        assert_eq!(scene.player().body().position, Vec2::new(200.0, 580.0));
    }

    #[test]
    fn test_escape_requests_quit_on_next_update() {
        let mut scene = scene();
        assert!(matches!(scene.update(0.016), SceneTransition::Continue));

        scene.handle_input(&InputEvent::KeyPressed { key: Key::Escape });
        assert!(matches!(scene.update(0.016), SceneTransition::Quit));
    }

    #[test]
    fn test_movement_keys_reach_the_player() {
        let mut scene = scene();
        scene.handle_input(&InputEvent::KeyPressed { key: Key::D });
        assert!(scene.player().body().velocity.x > 0.0);
        scene.handle_input(&InputEvent::KeyReleased { key: Key::D });
        assert_eq!(scene.player().body().velocity.x, 0.0);
    }

    #[test]
    fn test_render_emits_tiles_and_player() {
        let scene = scene();
        let mut packet = FramePacket::new(LinearRgba::BLACK);
        scene.render(&mut packet);

        let solid_count = scene.map().solid_rects().count();
        assert_eq!(packet.quads.len(), solid_count + 1);
        assert_eq!(packet.clear_color, BACKGROUND);
        // The player is the last quad so it draws over the decor.
        let last = packet.quads.last().unwrap();
        assert_eq!(last.rect, scene.player().body().rect());
        assert_eq!(last.color, pose_color(scene.player().animation().pose()));
    }

    #[test]
    fn test_player_settles_on_the_floor() {
        let mut scene = scene();
        for _ in 0..300 {
            scene.update(1.0 / 60.0);
        }
        let body = scene.player().body();
        assert_eq!(body.velocity.y, 0.0);
        // Resting flush on top of the floor at row 28.
        let floor_top = 28.0 * 25.0 - 12.5;
        assert!((body.rect().bottom() - floor_top).abs() < 1.0);
    }
}
