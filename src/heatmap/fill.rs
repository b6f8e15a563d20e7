//! Fill descriptions and their resolution into concrete shading.
//!
//! A [`MuscleFill`] is abstract: gradients are anchored to unit-square
//! coordinates. [`MuscleFill::shading`] resolves those against a path's
//! bounding box, producing a [`Shading`] with absolute coordinates that any
//! drawing surface can consume directly.

use super::color::Color;
use crate::geometry::{Point, Rect, UnitPoint};

/// The direction of an intra-region gradient fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl GradientDirection {
    pub fn start_point(self) -> UnitPoint {
        match self {
            GradientDirection::TopToBottom => UnitPoint::TOP,
            GradientDirection::BottomToTop => UnitPoint::BOTTOM,
            GradientDirection::LeftToRight => UnitPoint::LEADING,
            GradientDirection::RightToLeft => UnitPoint::TRAILING,
        }
    }

    pub fn end_point(self) -> UnitPoint {
        match self {
            GradientDirection::TopToBottom => UnitPoint::BOTTOM,
            GradientDirection::BottomToTop => UnitPoint::TOP,
            GradientDirection::LeftToRight => UnitPoint::TRAILING,
            GradientDirection::RightToLeft => UnitPoint::LEADING,
        }
    }
}

/// Describes how a region's interior should be shaded.
#[derive(Debug, Clone, PartialEq)]
pub enum MuscleFill {
    /// A solid color fill.
    Color(Color),
    /// A linear gradient between two unit-square anchors.
    LinearGradient {
        colors: Vec<Color>,
        start: UnitPoint,
        end: UnitPoint,
    },
    /// A radial gradient around a unit-square center.
    RadialGradient {
        colors: Vec<Color>,
        center: UnitPoint,
        start_radius: f64,
        end_radius: f64,
    },
}

impl MuscleFill {
    /// The representative solid color: the color itself, or the first
    /// gradient stop (transparent when a gradient has no stops).
    pub fn primary_color(&self) -> Color {
        match self {
            MuscleFill::Color(color) => *color,
            MuscleFill::LinearGradient { colors, .. }
            | MuscleFill::RadialGradient { colors, .. } => {
                colors.first().copied().unwrap_or(Color::CLEAR)
            }
        }
    }

    /// Resolves the fill against a concrete bounding rectangle.
    pub fn shading(&self, rect: &Rect) -> Shading {
        match self {
            MuscleFill::Color(color) => Shading::Solid(*color),
            MuscleFill::LinearGradient { colors, start, end } => Shading::LinearGradient {
                colors: colors.clone(),
                start: start.resolve(rect),
                end: end.resolve(rect),
            },
            MuscleFill::RadialGradient {
                colors,
                center,
                start_radius,
                end_radius,
            } => Shading::RadialGradient {
                colors: colors.clone(),
                center: center.resolve(rect),
                start_radius: *start_radius,
                end_radius: *end_radius,
            },
        }
    }
}

impl From<Color> for MuscleFill {
    fn from(color: Color) -> Self {
        MuscleFill::Color(color)
    }
}

/// A fully resolved fill in target coordinates, ready for a drawing
/// surface that supports solid, linear, and radial fills.
#[derive(Debug, Clone, PartialEq)]
pub enum Shading {
    Solid(Color),
    LinearGradient {
        colors: Vec<Color>,
        start: Point,
        end: Point,
    },
    RadialGradient {
        colors: Vec<Color>,
        center: Point,
        start_radius: f64,
        end_radius: f64,
    },
}

impl Shading {
    /// The shading with every color's alpha multiplied by `opacity`.
    pub fn with_opacity(self, opacity: f64) -> Shading {
        let fade = |colors: Vec<Color>| {
            colors
                .into_iter()
                .map(|c| c.with_opacity(opacity))
                .collect()
        };
        match self {
            Shading::Solid(color) => Shading::Solid(color.with_opacity(opacity)),
            Shading::LinearGradient { colors, start, end } => Shading::LinearGradient {
                colors: fade(colors),
                start,
                end,
            },
            Shading::RadialGradient {
                colors,
                center,
                start_radius,
                end_radius,
            } => Shading::RadialGradient {
                colors: fade(colors),
                center,
                start_radius,
                end_radius,
            },
        }
    }
}
