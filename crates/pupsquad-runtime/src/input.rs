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

//! Translation from the concrete windowing backend (`winit`) to the game's
//! abstract input events.
//!
//! This module acts as an adapter layer, decoupling the game crates from the
//! specific input event format of the `winit` crate.

use pupsquad_core::input::{InputEvent, Key};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Translates a `winit::event::WindowEvent` into the game's `InputEvent`.
///
/// Non-keyboard events, logical-only keys, and key-repeat presses translate
/// to `None`; the game only reacts to discrete press/release edges.
pub fn translate_winit_input(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            if let PhysicalKey::Code(keycode) = key_event.physical_key {
                let key = map_keycode(keycode);
                match key_event.state {
                    ElementState::Pressed if !key_event.repeat => {
                        Some(InputEvent::KeyPressed { key })
                    }
                    ElementState::Released => Some(InputEvent::KeyReleased { key }),
                    _ => None,
                }
            } else {
                None
            }
        }
        _ => None,
    }
}

/// (Internal) Maps a `winit::keyboard::KeyCode` to the game's `Key` enum.
fn map_keycode(keycode: KeyCode) -> Key {
    match keycode {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyD => Key::D,
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keycode_bindings() {
        assert_eq!(map_keycode(KeyCode::KeyA), Key::A);
        assert_eq!(map_keycode(KeyCode::KeyD), Key::D);
        assert_eq!(map_keycode(KeyCode::Space), Key::Space);
        assert_eq!(map_keycode(KeyCode::Escape), Key::Escape);
        assert_eq!(map_keycode(KeyCode::KeyQ), Key::Other);
    }

    #[test]
    fn test_translate_non_input_returns_none() {
        let winit_event_resize = WindowEvent::Resized(winit::dpi::PhysicalSize::new(100, 100));
        let winit_event_focus = WindowEvent::Focused(true);
        let winit_event_close = WindowEvent::CloseRequested;
        assert_eq!(translate_winit_input(&winit_event_resize), None);
        assert_eq!(translate_winit_input(&winit_event_focus), None);
        assert_eq!(translate_winit_input(&winit_event_close), None);
    }
}
