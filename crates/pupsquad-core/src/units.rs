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

//! World-unit constants shared by physics, levels, and the renderer.
//!
//! The world is measured in pixels; `METERS` is the conversion factor, so
//! gameplay tuning values (run speed, jump height) can be written in meters.
//! The y axis points downward, which is why `GRAVITY` is positive.

/// Amount of pixels per meter.
pub const METERS: f32 = 100.0;

/// Gravitational acceleration in pixels/s², downward (+y).
pub const GRAVITY: f32 = 9.81 * METERS;

/// The edge length of a map tile in pixels.
pub const TILE_SIZE: f32 = 0.25 * METERS;

/// Design-resolution screen width in pixels.
pub const SCREEN_WIDTH: u32 = 1280;

/// Design-resolution screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 720;
