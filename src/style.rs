//! Visual style configuration for a rendered body: fills, strokes,
//! selection emphasis, and the fixed colors for cosmetic parts. Read-only
//! during a render; deserializable so hosts can ship styles as data.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::heatmap::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyViewStyle {
    pub default_fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub selection_color: Color,
    pub selection_stroke_color: Color,
    pub selection_stroke_width: f64,
    pub head_color: Color,
    pub hair_color: Color,
    /// Shadow parameters are carried for the presentation layer; the core
    /// renderer does not emit shadow ops.
    pub shadow_color: Color,
    pub shadow_radius: f64,
    pub shadow_offset: Size,
}

impl Default for BodyViewStyle {
    fn default() -> Self {
        BodyViewStyle {
            default_fill_color: Color::DEFAULT_FILL,
            stroke_color: Color::CLEAR,
            stroke_width: 0.0,
            selection_color: Color::GREEN,
            selection_stroke_color: Color::GREEN,
            selection_stroke_width: 2.0,
            head_color: Color::gray(0.75),
            hair_color: Color::gray(0.25),
            shadow_color: Color::CLEAR,
            shadow_radius: 0.0,
            shadow_offset: Size::ZERO,
        }
    }
}

impl BodyViewStyle {
    /// Minimal style with thin strokes and subtle fill.
    pub fn minimal() -> Self {
        BodyViewStyle {
            default_fill_color: Color::LIGHTER_FILL,
            stroke_color: Color::MEDIUM_FILL,
            stroke_width: 0.5,
            selection_stroke_width: 1.5,
            ..Default::default()
        }
    }

    /// Neon style with dark tones and a glow shadow.
    pub fn neon() -> Self {
        BodyViewStyle {
            default_fill_color: Color::gray(0.15),
            stroke_color: Color::gray(0.3),
            stroke_width: 0.5,
            selection_color: Color::CYAN,
            selection_stroke_color: Color::CYAN,
            selection_stroke_width: 2.0,
            head_color: Color::gray(0.2),
            hair_color: Color::gray(0.1),
            shadow_color: Color::CYAN.with_opacity(0.6),
            shadow_radius: 8.0,
            ..Default::default()
        }
    }

    /// Medical/clinical style.
    pub fn medical() -> Self {
        BodyViewStyle {
            default_fill_color: Color::rgb(0.9, 0.92, 0.95),
            stroke_color: Color::rgb(0.7, 0.75, 0.8),
            stroke_width: 0.5,
            selection_color: Color::BLUE,
            selection_stroke_color: Color::BLUE,
            selection_stroke_width: 2.0,
            head_color: Color::rgb(0.85, 0.87, 0.9),
            hair_color: Color::rgb(0.3, 0.32, 0.35),
            ..Default::default()
        }
    }
}
