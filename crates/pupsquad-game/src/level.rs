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

//! Level definitions: RON documents with a glyph grid per tile row.
//!
//! `'.'` is open space and `'#'` a solid tile. Use RON for human-readable,
//! hand-editable level data.

use pupsquad_core::math::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::map::{TileKind, TileMap};

/// The first (and so far only) level, embedded in the binary.
pub const LEVEL_ONE_RON: &str = include_str!("../assets/level_one.ron");

/// An error produced while loading or validating a level definition.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The RON document could not be parsed.
    #[error("failed to parse level definition: {0}")]
    Parse(String),
    /// The grid has no rows or no columns.
    #[error("level '{name}' has an empty tile grid")]
    EmptyGrid {
        /// The level's name.
        name: String,
    },
    /// A row's length differs from the first row's.
    #[error("level '{name}' row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        /// The level's name.
        name: String,
        /// The offending row index.
        row: usize,
        /// Tiles found in that row.
        found: usize,
        /// Tiles every row must have.
        expected: usize,
    },
    /// The grid contains a character that is not a tile glyph.
    #[error("level '{name}' has unknown tile glyph '{glyph}' at row {row}, column {column}")]
    UnknownGlyph {
        /// The level's name.
        name: String,
        /// The unrecognized character.
        glyph: char,
        /// Row of the glyph.
        row: usize,
        /// Column of the glyph.
        column: usize,
    },
    /// The player spawn point lies outside the map.
    #[error("level '{name}' spawn point ({x}, {y}) lies outside the tile grid")]
    SpawnOutOfBounds {
        /// The level's name.
        name: String,
        /// Spawn x in pixels.
        x: f32,
        /// Spawn y in pixels.
        y: f32,
    },
}

/// A level as authored: a name, a spawn point, and a glyph grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    /// Display name of the level.
    pub name: String,
    /// Where the player's center starts, in pixels.
    pub player_spawn: Vec2,
    /// Tile rows, top to bottom; one glyph per tile.
    pub rows: Vec<String>,
}

impl LevelDef {
    /// Parses a level definition from RON text.
    pub fn from_ron(source: &str) -> Result<Self, LevelError> {
        ron::de::from_str(source).map_err(|e| LevelError::Parse(e.to_string()))
    }

    /// Validates the glyph grid and builds the collision/decor map.
    pub fn build_map(&self) -> Result<TileMap, LevelError> {
        // Glyph count, not byte length: rows must agree even when a stray
        // multi-byte character sneaks into hand-edited level data.
        let expected = self.rows.first().map_or(0, |row| row.chars().count());
        if self.rows.is_empty() || expected == 0 {
            return Err(LevelError::EmptyGrid {
                name: self.name.clone(),
            });
        }

        let mut grid = Vec::with_capacity(self.rows.len());
        for (row_index, row) in self.rows.iter().enumerate() {
            let glyphs: Vec<char> = row.chars().collect();
            if glyphs.len() != expected {
                return Err(LevelError::RaggedRow {
                    name: self.name.clone(),
                    row: row_index,
                    found: glyphs.len(),
                    expected,
                });
            }

            let mut kinds = Vec::with_capacity(expected);
            for (column, glyph) in glyphs.into_iter().enumerate() {
                kinds.push(match glyph {
                    '.' => TileKind::Open,
                    '#' => TileKind::Solid,
                    other => {
                        return Err(LevelError::UnknownGlyph {
                            name: self.name.clone(),
                            glyph: other,
                            row: row_index,
                            column,
                        })
                    }
                });
            }
            grid.push(kinds);
        }

        let map = TileMap::from_grid(&grid);
        if !map.bounds().contains_point(self.player_spawn) {
            return Err(LevelError::SpawnOutOfBounds {
                name: self.name.clone(),
                x: self.player_spawn.x,
                y: self.player_spawn.y,
            });
        }

        log::info!(
            "Loaded level '{}' ({}x{} tiles)",
            self.name,
            map.columns(),
            map.rows()
        );
        Ok(map)
    }
}

/// Loads the embedded first level.
pub fn level_one() -> Result<LevelDef, LevelError> {
    LevelDef::from_ron(LEVEL_ONE_RON)
}
