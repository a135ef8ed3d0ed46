//! Shape kinds and the packed-integer color derivation used at spawn time.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Ellipse,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Ellipse, ShapeKind::Rectangle];

    /// Map an arbitrary draw onto a kind (uniform when `n` is uniform)
    pub fn from_draw(n: u32) -> Self {
        Self::ALL[(n as usize) % Self::ALL.len()]
    }
}

/// RGBA color, 8 bits per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed as 0xAARRGGBB
    pub fn to_argb(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Derive a fully opaque color from a packed integer.
///
/// Every channel is reduced modulo 255, so it never reaches 255:
/// `r = (v >> 16) % 255`, `g = ((v >> 8) % 255) & 0xFF`, `b = v % 255`.
pub fn derive_color(v: u64) -> Color {
    let r = (v >> 16) % 255;
    let g = ((v >> 8) % 255) & 0xFF;
    let b = v % 255;
    Color::new(r as u8, g as u8, b as u8, 255)
}
