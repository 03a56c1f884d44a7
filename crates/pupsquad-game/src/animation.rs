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

//! The sprite animation state machine.
//!
//! Poses are driven entirely by the body's velocity, evaluated once per
//! frame after the physics step. Each pose owns a short frame sequence that
//! cycles on a per-pose tick delay; switching pose restarts its sequence.

use pupsquad_core::math::Vec2;
use pupsquad_core::units::METERS;

/// Vertical speed above which a descending body reads as falling rather
/// than walking down a slope of clamp jitter.
const FALL_THRESHOLD: f32 = 0.5 * METERS;

/// The animated pose of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    /// Standing still.
    Idle,
    /// Running along the ground.
    Run,
    /// Ascending after a jump.
    Jump,
    /// Descending.
    Fall,
}

impl Pose {
    /// Number of frames in this pose's sprite sequence.
    pub fn frame_count(self) -> usize {
        match self {
            Pose::Idle => 2,
            Pose::Run => 5,
            Pose::Jump => 1,
            Pose::Fall => 1,
        }
    }

    /// Animation ticks each frame is held for.
    pub fn frame_delay(self) -> u32 {
        match self {
            Pose::Idle => 10,
            Pose::Run => 5,
            Pose::Jump => 10,
            Pose::Fall => 10,
        }
    }
}

/// Which way the character sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Facing left (negative x).
    Left,
    /// Facing right (positive x).
    Right,
}

/// Tracks the current pose, facing, and frame of a character sprite.
#[derive(Debug, Clone)]
pub struct AnimationController {
    pose: Pose,
    facing: Facing,
    frame: usize,
    ticks: u32,
}

impl AnimationController {
    /// Creates a controller in the idle pose, facing right.
    pub fn new() -> Self {
        Self {
            pose: Pose::Idle,
            facing: Facing::Right,
            frame: 0,
            ticks: 0,
        }
    }

    /// The current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The current facing.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// The index of the current frame within the pose's sequence.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advances the animation one tick: cycles the frame of the current
    /// pose, then applies the velocity-driven pose transitions.
    pub fn advance(&mut self, velocity: Vec2) {
        self.ticks += 1;
        if self.ticks >= self.pose.frame_delay() {
            self.ticks = 0;
            self.frame = (self.frame + 1) % self.pose.frame_count();
        }

        let (pose, facing) = self.next_state(velocity);
        if pose != self.pose {
            self.frame = 0;
            self.ticks = 0;
        }
        self.pose = pose;
        self.facing = facing;
    }

    /// The velocity-driven transition table.
    ///
    /// Airborne motion wins over ground motion: a running character that
    /// leaves the ground switches to jump/fall regardless of its horizontal
    /// speed. Facing only changes when there is horizontal motion, so a
    /// character that stops keeps looking the way it last moved.
    fn next_state(&self, velocity: Vec2) -> (Pose, Facing) {
        match self.pose {
            Pose::Idle | Pose::Run => {
                if velocity.y > FALL_THRESHOLD {
                    (Pose::Fall, self.facing)
                } else if velocity.y < 0.0 {
                    (Pose::Jump, self.facing)
                } else if velocity.x < 0.0 {
                    (Pose::Run, Facing::Left)
                } else if velocity.x > 0.0 {
                    (Pose::Run, Facing::Right)
                } else {
                    (Pose::Idle, self.facing)
                }
            }
            Pose::Jump => {
                if velocity.y > 0.0 {
                    (Pose::Fall, self.facing)
                } else if velocity.x < 0.0 {
                    (Pose::Jump, Facing::Left)
                } else if velocity.x > 0.0 {
                    (Pose::Jump, Facing::Right)
                } else {
                    (Pose::Jump, self.facing)
                }
            }
            Pose::Fall => {
                if velocity.y == 0.0 {
                    (Pose::Idle, self.facing)
                } else if velocity.x < 0.0 {
                    (Pose::Fall, Facing::Left)
                } else if velocity.x > 0.0 {
                    (Pose::Fall, Facing::Right)
                } else {
                    (Pose::Fall, self.facing)
                }
            }
        }
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded(vx: f32) -> Vec2 {
        Vec2::new(vx, 0.0)
    }

    #[test]
    fn test_starts_idle_facing_right() {
        let anim = AnimationController::new();
        assert_eq!(anim.pose(), Pose::Idle);
        assert_eq!(anim.facing(), Facing::Right);
        assert_eq!(anim.frame(), 0);
    }

    #[test]
    fn test_idle_to_run_and_back() {
        let mut anim = AnimationController::new();

        anim.advance(grounded(-1.0));
        assert_eq!(anim.pose(), Pose::Run);
        assert_eq!(anim.facing(), Facing::Left);

        anim.advance(grounded(0.0));
        assert_eq!(anim.pose(), Pose::Idle);
        // Facing is retained when coming to rest.
        assert_eq!(anim.facing(), Facing::Left);
    }

    #[test]
    fn test_jump_arc_transitions() {
        let mut anim = AnimationController::new();

        // Takeoff: upward velocity.
        anim.advance(Vec2::new(0.0, -300.0));
        assert_eq!(anim.pose(), Pose::Jump);

        // Past the apex: descending.
        anim.advance(Vec2::new(0.0, 100.0));
        assert_eq!(anim.pose(), Pose::Fall);

        // Landed.
        anim.advance(Vec2::ZERO);
        assert_eq!(anim.pose(), Pose::Idle);
    }

    #[test]
    fn test_slow_descent_does_not_read_as_falling() {
        let mut anim = AnimationController::new();
        anim.advance(Vec2::new(0.0, FALL_THRESHOLD * 0.5));
        assert_eq!(anim.pose(), Pose::Idle);
    }

    #[test]
    fn test_airborne_facing_flips_with_horizontal_motion() {
        let mut anim = AnimationController::new();
        anim.advance(Vec2::new(0.0, -300.0));
        assert_eq!(anim.pose(), Pose::Jump);

        anim.advance(Vec2::new(-100.0, -200.0));
        assert_eq!(anim.pose(), Pose::Jump);
        assert_eq!(anim.facing(), Facing::Left);

        anim.advance(Vec2::new(100.0, 50.0));
        assert_eq!(anim.pose(), Pose::Fall);
        // The fall transition keeps the facing it had at the frame of the
        // transition; the horizontal flip applies on the next advance.
        anim.advance(Vec2::new(100.0, 50.0));
        assert_eq!(anim.facing(), Facing::Right);
    }

    #[test]
    fn test_frame_cycles_with_pose_delay() {
        let mut anim = AnimationController::new();

        // Idle holds each of its 2 frames for 10 ticks.
        for _ in 0..9 {
            anim.advance(grounded(0.0));
            assert_eq!(anim.frame(), 0);
        }
        anim.advance(grounded(0.0));
        assert_eq!(anim.frame(), 1);
        for _ in 0..10 {
            anim.advance(grounded(0.0));
        }
        assert_eq!(anim.frame(), 0);
    }

    #[test]
    fn test_pose_change_resets_frame() {
        let mut anim = AnimationController::new();
        for _ in 0..10 {
            anim.advance(grounded(1.0));
        }
        assert_eq!(anim.pose(), Pose::Run);
        assert!(anim.frame() > 0);

        anim.advance(Vec2::new(1.0, -300.0));
        assert_eq!(anim.pose(), Pose::Jump);
        assert_eq!(anim.frame(), 0);
    }
}
