//! Particle palette

use serde::{Serialize, Deserialize};

/// An sRGB color with components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// RGBA array with full opacity
    #[inline]
    pub fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Reds, blacks, whites and greys; each particle draws one uniformly.
pub const PALETTE: [Color; 8] = [
    Color::rgb(1.0, 0.0, 0.0),        // #ff0000
    Color::rgb(1.0, 0.2, 0.0),        // #ff3300
    Color::rgb(0.8, 0.0, 0.0),        // #cc0000
    Color::rgb(0.0, 0.0, 0.0),        // #000000
    Color::rgb(1.0, 1.0, 1.0),        // #ffffff
    Color::rgb(0.2, 0.2, 0.2),        // #333333
    Color::rgb(26.0 / 255.0, 0.0, 0.0), // #1a0000
    Color::rgb(1.0, 0.4, 0.0),        // #ff6600
];
