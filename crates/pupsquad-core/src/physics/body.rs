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

use crate::math::{Rect, Vec2};
use crate::units::GRAVITY;

/// The kinematic state of a character body.
///
/// Positions and sizes are in pixels, velocities in pixels/s, with the y
/// axis pointing downward. `position` is the center of the body's rectangle.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    /// Full size (width, height) of the body's collision rectangle.
    pub size: Vec2,
    /// Mass in kilograms, used to turn the applied force into acceleration.
    pub mass: f32,
    /// Center position.
    pub position: Vec2,
    /// Current velocity.
    pub velocity: Vec2,
    /// Externally applied force. Gravity is added on top of this.
    pub force: Vec2,
    /// Whether the body is airborne due to a jump.
    ///
    /// Cleared when the body lands on top of a tile. While set, further
    /// jump impulses are refused.
    pub jumping: bool,
}

impl Body {
    /// Creates a new body at rest at `position`.
    pub fn new(size: Vec2, mass: f32, position: Vec2) -> Self {
        Self {
            size,
            mass,
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            jumping: false,
        }
    }

    /// The body's collision rectangle at its current position.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }

    /// Integrates force and gravity over `dt`, returning the proposed
    /// position delta.
    ///
    /// The delta is *proposed* because it has not been checked against the
    /// level geometry yet; [`resolve_motion`](super::resolve_motion) clamps
    /// it before it is applied.
    pub fn integrate(&mut self, dt: f32) -> Vec2 {
        let acceleration = self.force / self.mass + Vec2::new(0.0, GRAVITY);
        self.velocity += acceleration * dt;
        self.velocity * dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::METERS;
    use approx::assert_relative_eq;

    fn test_body() -> Body {
        Body::new(Vec2::new(1.0 * METERS, 1.0 * METERS), 35.0, Vec2::ZERO)
    }

    #[test]
    fn test_rect_is_centered_on_position() {
        let mut body = test_body();
        body.position = Vec2::new(200.0, 300.0);
        let rect = body.rect();
        assert_eq!(rect.center(), body.position);
        assert_eq!(rect.size(), body.size);
    }

    #[test]
    fn test_integrate_zero_dt_is_noop() {
        let mut body = test_body();
        let delta = body.integrate(0.0);
        assert_eq!(delta, Vec2::ZERO);
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_free_fall_matches_gravity() {
        let mut body = test_body();
        body.integrate(1.0);
        assert_relative_eq!(body.velocity.y, GRAVITY, epsilon = 1e-3);
        assert_relative_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_integrate_applied_force_accelerates() {
        let mut body = test_body();
        body.force = Vec2::new(35.0 * 2.0, 0.0); // 2 px/s² worth of force
        body.integrate(0.5);
        assert_relative_eq!(body.velocity.x, 1.0, epsilon = 1e-5);
    }
}
