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

//! Provides the axis-aligned rectangle used for sprites and collision.
//!
//! All rectangles live in screen-space pixel coordinates: x grows to the
//! right, y grows downward, so `top() < bottom()`.

use serde::{Deserialize, Serialize};

use super::Vec2;

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// This is the 2D collision and placement primitive for every entity and
/// tile in the game. It is a simple but efficient volume for overlap tests
/// and the axis-separated collision sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Rect {
    /// The corner with the smallest coordinates (top-left on screen).
    pub min: Vec2,
    /// The corner with the largest coordinates (bottom-right on screen).
    pub max: Vec2,
}

impl Rect {
    /// Creates a new `Rect` from two corner points.
    ///
    /// The corners may be passed in any order; `min` always ends up holding
    /// the component-wise minimum and `max` the maximum.
    #[inline]
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates a new `Rect` from a center point and its full size.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Calculates the center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Calculates the full size (width, height) of the rectangle.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// The x coordinate of the left edge.
    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    /// The x coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    /// The y coordinate of the top edge (smallest y, screen space).
    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// The y coordinate of the bottom edge (largest y, screen space).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Returns a copy of the rectangle moved by `delta`.
    #[inline]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Checks if a point is contained within or on the boundary of the rectangle.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks if this rectangle overlaps another with positive area.
    ///
    /// Rectangles that merely touch along an edge do **not** overlap. The
    /// collision sweep depends on this: a body resting exactly on a floor
    /// tile is in contact but not colliding, and only penetrating motion
    /// gets clamped.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_min_max_orders_corners() {
        let r = Rect::from_min_max(Vec2::new(4.0, 5.0), Vec2::new(1.0, 2.0));
        assert_eq!(r.min, Vec2::new(1.0, 2.0));
        assert_eq!(r.max, Vec2::new(4.0, 5.0));
    }

    #[test]
    fn test_rect_from_center_size() {
        let r = Rect::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(r.min, Vec2::new(8.0, 17.0));
        assert_eq!(r.max, Vec2::new(12.0, 23.0));
        assert_eq!(r.center(), Vec2::new(10.0, 20.0));
        assert_eq!(r.size(), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_rect_edges_screen_space() {
        let r = Rect::from_min_max(Vec2::new(0.0, 0.0), Vec2::new(2.0, 3.0));
        assert_eq!(r.left(), 0.0);
        assert_eq!(r.right(), 2.0);
        assert_eq!(r.top(), 0.0);
        assert_eq!(r.bottom(), 3.0);
        assert!(r.top() < r.bottom());
    }

    #[test]
    fn test_rect_translated() {
        let r = Rect::from_min_max(Vec2::ZERO, Vec2::ONE);
        let moved = r.translated(Vec2::new(5.0, -1.0));
        assert_eq!(moved.min, Vec2::new(5.0, -1.0));
        assert_eq!(moved.max, Vec2::new(6.0, 0.0));
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::from_min_max(Vec2::ZERO, Vec2::ONE);
        assert!(r.contains_point(Vec2::new(0.5, 0.5)));
        assert!(r.contains_point(Vec2::ZERO));
        assert!(r.contains_point(Vec2::ONE));
        assert!(!r.contains_point(Vec2::new(1.1, 0.5)));
        assert!(!r.contains_point(Vec2::new(0.5, -0.1)));
    }

    #[test]
    fn test_rect_overlaps_requires_positive_area() {
        let a = Rect::from_min_max(Vec2::ZERO, Vec2::new(2.0, 2.0));

        // Penetrating.
        let b = Rect::from_min_max(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Contained.
        let c = Rect::from_min_max(Vec2::new(0.5, 0.5), Vec2::new(1.5, 1.5));
        assert!(a.overlaps(&c));

        // Touching along an edge is contact, not overlap.
        let d = Rect::from_min_max(Vec2::new(2.0, 0.0), Vec2::new(3.0, 2.0));
        assert!(!a.overlaps(&d));

        // Disjoint.
        let e = Rect::from_min_max(Vec2::new(2.1, 0.0), Vec2::new(3.0, 2.0));
        assert!(!a.overlaps(&e));
    }
}
