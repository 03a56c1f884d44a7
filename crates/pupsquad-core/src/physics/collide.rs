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

//! Axis-separated collision sweep against solid tiles.

use super::Body;
use crate::math::{Rect, Vec2};

/// The contacts produced by one motion resolution pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Contacts {
    /// The body was stopped by a tile below it (landed or resting).
    pub ground: bool,
    /// The body was stopped by a tile above it (head bump).
    pub ceiling: bool,
    /// The body was stopped by a tile on either side.
    pub wall: bool,
}

impl Contacts {
    /// Whether any vertical contact occurred this pass.
    #[inline]
    pub fn vertical(&self) -> bool {
        self.ground || self.ceiling
    }
}

/// Clamps a proposed motion delta so `rect` never penetrates a solid.
///
/// Each axis is tested independently against every solid: first the x
/// component of the delta is shrunk so the horizontally-moved rectangle
/// abuts the solid, then the y component likewise. This is the classic
/// platformer sweep; testing axes separately is what lets a body slide
/// along a floor while being blocked by a wall.
///
/// Delta components only ever shrink toward the contact surface, so a body
/// wedged between tiles cannot tunnel through either of them.
pub fn resolve_motion<I>(rect: Rect, delta: Vec2, solids: I) -> (Vec2, Contacts)
where
    I: IntoIterator<Item = Rect>,
{
    let mut delta = delta;
    let mut contacts = Contacts::default();

    for solid in solids {
        if solid.overlaps(&rect.translated(Vec2::new(delta.x, 0.0))) {
            if delta.x >= 0.0 {
                delta.x = solid.left() - rect.right();
            } else {
                delta.x = solid.right() - rect.left();
            }
            contacts.wall = true;
        }
        if solid.overlaps(&rect.translated(Vec2::new(0.0, delta.y))) {
            if delta.y >= 0.0 {
                delta.y = solid.top() - rect.bottom();
                contacts.ground = true;
            } else {
                delta.y = solid.bottom() - rect.top();
                contacts.ceiling = true;
            }
        }
    }

    (delta, contacts)
}

impl Body {
    /// Advances the body by `dt` seconds through the given solid tiles.
    ///
    /// Integrates force and gravity, clamps the resulting motion with
    /// [`resolve_motion`], and applies the contact rules: any vertical
    /// contact zeroes the vertical velocity, and a ground contact ends the
    /// current jump.
    pub fn step<I>(&mut self, dt: f32, solids: I) -> Contacts
    where
        I: IntoIterator<Item = Rect>,
    {
        let proposed = self.integrate(dt);
        let (delta, contacts) = resolve_motion(self.rect(), proposed, solids);

        if contacts.ground {
            self.jumping = false;
        }
        if contacts.vertical() {
            self.velocity.y = 0.0;
        }

        self.position += delta;
        contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{GRAVITY, METERS, TILE_SIZE};
    use approx::assert_relative_eq;

    /// A 4-tile-wide floor whose top edge sits at y = 0.
    fn floor() -> Vec<Rect> {
        (0..4)
            .map(|i| {
                Rect::from_min_max(
                    Vec2::new(i as f32 * TILE_SIZE, 0.0),
                    Vec2::new((i + 1) as f32 * TILE_SIZE, TILE_SIZE),
                )
            })
            .collect()
    }

    fn body_above_floor() -> Body {
        // 50x50 px body centered at x = 50, hovering 75 px above the floor.
        Body::new(
            Vec2::new(50.0, 50.0),
            35.0,
            Vec2::new(TILE_SIZE * 2.0, -100.0),
        )
    }

    #[test]
    fn test_free_fall_without_solids() {
        let mut body = body_above_floor();
        body.step(0.1, []);
        assert_relative_eq!(body.velocity.y, GRAVITY * 0.1, epsilon = 1e-3);
        assert!(body.position.y > -100.0);
    }

    #[test]
    fn test_body_lands_flush_on_floor() {
        let mut body = body_above_floor();
        let solids = floor();

        // Step until the body has come to rest.
        let mut landed = false;
        for _ in 0..120 {
            let contacts = body.step(1.0 / 60.0, solids.iter().copied());
            if contacts.ground {
                landed = true;
            }
        }
        assert!(landed);
        assert_relative_eq!(body.rect().bottom(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(body.velocity.y, 0.0);
        assert!(!body.jumping);
    }

    #[test]
    fn test_resting_body_stays_put() {
        let mut body = body_above_floor();
        // Place the body exactly on the floor.
        body.position.y = -body.size.y * 0.5;
        let solids = floor();

        for _ in 0..60 {
            body.step(1.0 / 60.0, solids.iter().copied());
        }
        assert_relative_eq!(body.rect().bottom(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        // A wall to the right of the body at x = 200.
        let wall = Rect::from_min_max(Vec2::new(200.0, -100.0), Vec2::new(225.0, 100.0));
        let mut body = Body::new(Vec2::new(50.0, 50.0), 35.0, Vec2::new(100.0, 0.0));
        body.velocity.x = 10.0 * METERS;

        let (delta, contacts) =
            resolve_motion(body.rect(), Vec2::new(body.velocity.x * 0.1, 0.0), [wall]);
        // 100 px of free space between body.right() (125) and the wall (200):
        // the delta gets clamped to exactly that gap.
        assert_relative_eq!(delta.x, 75.0, epsilon = 1e-3);
        assert!(contacts.wall);
        assert!(!contacts.vertical());
    }

    #[test]
    fn test_sliding_along_floor_while_blocked_by_wall() {
        let mut solids = floor();
        // Wall at the right end of the floor, rising above it.
        solids.push(Rect::from_min_max(
            Vec2::new(4.0 * TILE_SIZE, -100.0),
            Vec2::new(5.0 * TILE_SIZE, 0.0),
        ));

        let mut body = body_above_floor();
        body.position.y = -body.size.y * 0.5; // resting on the floor
        body.velocity.x = 3.0 * METERS;

        for _ in 0..60 {
            body.step(1.0 / 60.0, solids.iter().copied());
        }

        // Pinned against the wall, still resting on the floor.
        assert_relative_eq!(body.rect().right(), 4.0 * TILE_SIZE, epsilon = 1e-3);
        assert_relative_eq!(body.rect().bottom(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_ceiling_bump_zeroes_upward_velocity() {
        let ceiling = Rect::from_min_max(Vec2::new(0.0, -300.0), Vec2::new(100.0, -275.0));
        let mut body = Body::new(Vec2::new(50.0, 50.0), 35.0, Vec2::new(50.0, -100.0));
        body.velocity.y = -20.0 * METERS;

        let contacts = body.step(0.1, [ceiling]);
        assert!(contacts.ceiling);
        assert_relative_eq!(body.velocity.y, 0.0);
        assert_relative_eq!(body.rect().top(), -275.0, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_dt_against_solids_is_noop() {
        let solids = floor();
        let mut body = body_above_floor();
        let before = body.position;
        body.step(0.0, solids.iter().copied());
        assert_eq!(body.position, before);
        assert_eq!(body.velocity, Vec2::ZERO);
    }
}
