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

//! Backend-agnostic input events.
//!
//! The runtime translates raw windowing-backend events into these types, so
//! game code never sees the windowing crate. Only the keys the game actually
//! binds are represented; everything else is `Key::Other`.

/// A physical key relevant to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `A` — run left.
    A,
    /// `D` — run right.
    D,
    /// `Space` — jump.
    Space,
    /// `Escape` — quit the current scene.
    Escape,
    /// Any key the game has no binding for.
    Other,
}

/// An engine-internal representation of a user input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A keyboard key was pressed. Key-repeat presses are filtered out by
    /// the translation layer.
    KeyPressed {
        /// The physical key.
        key: Key,
    },
    /// A keyboard key was released.
    KeyReleased {
        /// The physical key.
        key: Key,
    },
}
