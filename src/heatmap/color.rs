//! RGBA color with linear per-channel interpolation. Channels are f64 in
//! [0,1] so blending stays bit-for-bit reproducible.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const GRAY: Color = Color::gray(0.5);

    // Body-map fill shades.
    pub const DEFAULT_FILL: Color = Color::gray(0.78);
    pub const LIGHT_FILL: Color = Color::gray(0.85);
    pub const LIGHTER_FILL: Color = Color::gray(0.88);
    pub const MEDIUM_FILL: Color = Color::gray(0.7);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }

    pub const fn gray(white: f64) -> Self {
        Color::rgb(white, white, white)
    }

    /// Linearly interpolates each channel toward `other`. The fraction is
    /// clamped to [0,1].
    pub fn interpolate(&self, other: &Color, fraction: f64) -> Color {
        let f = fraction.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * f,
            g: self.g + (other.g - self.g) * f,
            b: self.b + (other.b - self.b) * f,
            a: self.a + (other.a - self.a) * f,
        }
    }

    /// This color with its alpha multiplied by `opacity` (clamped).
    pub fn with_opacity(&self, opacity: f64) -> Color {
        Color {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..*self
        }
    }
}
