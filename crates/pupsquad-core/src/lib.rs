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

//! # Pup Squad Core
//!
//! Foundational crate for the Pup Squad platformer: 2D math, world units,
//! kinematic physics, event channels, input events, frame timing, and the
//! renderer-agnostic frame packet.
//!
//! Nothing in this crate touches a windowing or graphics backend; the
//! runtime crate owns those and feeds this crate plain data.

#![warn(missing_docs)]

pub mod event;
pub mod frame;
pub mod input;
pub mod math;
pub mod physics;
pub mod time;
pub mod units;

pub use frame::{FramePacket, QuadInstance};
pub use input::{InputEvent, Key};
pub use time::{FrameClock, FrameStats};
