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

//! The renderer-agnostic frame packet.
//!
//! Scenes extract what they want drawn into a [`FramePacket`] of colored
//! quads; the runtime's renderer consumes the packet without the game crates
//! ever touching a GPU type. Quad coordinates are design-resolution pixels
//! (see [`crate::units`]); the renderer maps them to the actual surface.

use crate::math::{LinearRgba, Rect};

/// One flat-colored quad to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadInstance {
    /// Placement in design-resolution pixels.
    pub rect: Rect,
    /// Fill color.
    pub color: LinearRgba,
}

/// Everything the renderer needs to draw one frame.
///
/// Quads are drawn in submission order (painter's algorithm), which is all a
/// flat 2D scene needs.
#[derive(Debug)]
pub struct FramePacket {
    /// Color the surface is cleared to before any quads are drawn.
    pub clear_color: LinearRgba,
    /// The quads to draw, back to front.
    pub quads: Vec<QuadInstance>,
}

impl FramePacket {
    /// Creates an empty packet with the given clear color.
    pub fn new(clear_color: LinearRgba) -> Self {
        Self {
            clear_color,
            quads: Vec::new(),
        }
    }

    /// Queues one quad.
    #[inline]
    pub fn push_quad(&mut self, rect: Rect, color: LinearRgba) {
        self.quads.push(QuadInstance { rect, color });
    }

    /// Clears the quad list for reuse, keeping the allocation.
    pub fn reset(&mut self, clear_color: LinearRgba) {
        self.clear_color = clear_color;
        self.quads.clear();
    }
}
