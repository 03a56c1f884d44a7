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

//! The tile map: a level's decor and collision geometry.

use pupsquad_core::math::{Rect, Vec2};
use pupsquad_core::units::TILE_SIZE;

/// What a single map tile is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Background; bodies pass through freely.
    Open,
    /// Solid decor; bodies collide with it.
    Solid,
}

impl TileKind {
    /// Whether bodies can move through this tile.
    #[inline]
    pub fn passable(self) -> bool {
        matches!(self, TileKind::Open)
    }
}

/// A single tile in the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// The tile's material.
    pub kind: TileKind,
    /// The tile's square footprint in pixels.
    pub rect: Rect,
}

impl Tile {
    /// Creates the tile at grid column `x`, row `y`.
    ///
    /// Tiles are `TILE_SIZE` squares *centered* at `(x, y) * TILE_SIZE`,
    /// so the map's visual origin is half a tile up and left of (0, 0).
    pub fn new(kind: TileKind, x: usize, y: usize) -> Self {
        let center = Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE);
        Self {
            kind,
            rect: Rect::from_center_size(center, Vec2::new(TILE_SIZE, TILE_SIZE)),
        }
    }
}

/// A collection of tiles forming a level's decor.
#[derive(Debug, Clone)]
pub struct TileMap {
    columns: usize,
    rows: usize,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Builds a map from a row-major grid of tile kinds.
    ///
    /// The grid must be rectangular; the level loader validates that before
    /// calling this.
    pub fn from_grid(grid: &[Vec<TileKind>]) -> Self {
        let rows = grid.len();
        let columns = grid.first().map_or(0, Vec::len);
        let mut tiles = Vec::with_capacity(rows * columns);
        for (y, row) in grid.iter().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                tiles.push(Tile::new(kind, x, y));
            }
        }
        Self {
            columns,
            rows,
            tiles,
        }
    }

    /// Number of tile columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of tile rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// All tiles, row-major.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The rectangles of every solid tile, for the collision sweep.
    pub fn solid_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.tiles
            .iter()
            .filter(|tile| !tile.kind.passable())
            .map(|tile| tile.rect)
    }

    /// The pixel-space bounding rectangle of the whole map.
    pub fn bounds(&self) -> Rect {
        let half = TILE_SIZE * 0.5;
        Rect::from_min_max(
            Vec2::new(-half, -half),
            Vec2::new(
                self.columns.saturating_sub(1) as f32 * TILE_SIZE + half,
                self.rows.saturating_sub(1) as f32 * TILE_SIZE + half,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_by_two() -> TileMap {
        TileMap::from_grid(&[
            vec![TileKind::Open, TileKind::Solid],
            vec![TileKind::Solid, TileKind::Open],
        ])
    }

    #[test]
    fn test_tile_is_centered_on_grid_point() {
        let tile = Tile::new(TileKind::Solid, 2, 3);
        assert_eq!(
            tile.rect.center(),
            Vec2::new(2.0 * TILE_SIZE, 3.0 * TILE_SIZE)
        );
        assert_relative_eq!(tile.rect.size().x, TILE_SIZE);
        assert_relative_eq!(tile.rect.size().y, TILE_SIZE);
    }

    #[test]
    fn test_from_grid_dimensions_and_order() {
        let map = two_by_two();
        assert_eq!(map.columns(), 2);
        assert_eq!(map.rows(), 2);
        assert_eq!(map.tiles().len(), 4);
        // Row-major: tile 1 is (x=1, y=0).
        assert_eq!(map.tiles()[1].kind, TileKind::Solid);
        assert_eq!(map.tiles()[1].rect.center(), Vec2::new(TILE_SIZE, 0.0));
    }

    #[test]
    fn test_solid_rects_filters_passable_tiles() {
        let map = two_by_two();
        let solids: Vec<_> = map.solid_rects().collect();
        assert_eq!(solids.len(), 2);
    }

    #[test]
    fn test_bounds_covers_all_tiles() {
        let map = two_by_two();
        let bounds = map.bounds();
        for tile in map.tiles() {
            assert!(bounds.contains_point(tile.rect.min));
            assert!(bounds.contains_point(tile.rect.max));
        }
    }
}
