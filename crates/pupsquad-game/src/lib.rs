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

//! # Pup Squad Game
//!
//! Game semantics for the Pup Squad platformer: the tile map, the player
//! character and its animation state machine, scenes, and level
//! definitions. Everything here is backend-free and driven by the runtime
//! through [`scene::Director`].

#![warn(missing_docs)]

pub mod animation;
pub mod level;
pub mod level_scene;
pub mod map;
pub mod player;
pub mod scene;

pub use level::{LevelDef, LevelError};
pub use level_scene::LevelScene;
pub use map::{Tile, TileKind, TileMap};
pub use player::Player;
pub use scene::{Director, Scene, SceneTransition};
