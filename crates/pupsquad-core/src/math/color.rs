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

//! Defines the `LinearRgba` color type and associated operations.

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// `#[repr(C)]` and the bytemuck derives ensure the layout is suitable for
/// passing color data straight into a vertex stream.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

impl LinearRgba {
    /// Opaque red (`[1.0, 0.0, 0.0, 1.0]`).
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green (`[0.0, 1.0, 0.0, 1.0]`).
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue (`[0.0, 0.0, 1.0, 1.0]`).
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque white (`[1.0, 1.0, 1.0, 1.0]`).
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black (`[0.0, 0.0, 0.0, 1.0]`).
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Fully transparent black (`[0.0, 0.0, 0.0, 0.0]`).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a `LinearRgba` from 8-bit sRGB components.
    ///
    /// This is the constructor for authoring colors the way an artist reads
    /// them; the components are converted to linear space.
    pub fn from_srgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: srgb_to_linear(r as f32 / 255.0),
            g: srgb_to_linear(g as f32 / 255.0),
            b: srgb_to_linear(b as f32 / 255.0),
            a: 1.0,
        }
    }
}

/// Converts an sRGB component to linear space.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_color_constants() {
        assert_eq!(LinearRgba::RED, LinearRgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(LinearRgba::TRANSPARENT.a, 0.0);
        assert_eq!(LinearRgba::rgb(0.2, 0.4, 0.6).a, 1.0);
    }

    #[test]
    fn test_srgb_conversion_endpoints() {
        let black = LinearRgba::from_srgb_u8(0, 0, 0);
        assert_relative_eq!(black.r, 0.0);

        let white = LinearRgba::from_srgb_u8(255, 255, 255);
        assert_relative_eq!(white.r, 1.0, epsilon = 1e-5);
        assert_relative_eq!(white.g, 1.0, epsilon = 1e-5);
        assert_relative_eq!(white.b, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_srgb_conversion_midtone_is_darker_in_linear() {
        // Linear mid-grey is darker than sRGB mid-grey.
        let grey = LinearRgba::from_srgb_u8(128, 128, 128);
        assert!(grey.r < 0.5);
        assert!(grey.r > 0.2);
    }
}
