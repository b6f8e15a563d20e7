//! # Heatmap Engine
//!
//! Turns normalized per-muscle intensities into concrete fills. The numeric
//! half lives in [`interpolation`] and [`scale`]; this module holds the
//! value types the presentation layer constructs per call — intensities,
//! highlights — and the configuration that resolves one into the other.

pub mod color;
pub mod fill;
pub mod interpolation;
pub mod scale;

pub use color::Color;
pub use fill::{GradientDirection, MuscleFill, Shading};
pub use interpolation::ColorInterpolation;
pub use scale::HeatmapColorScale;

use crate::data::{Muscle, MuscleSide};

/// The intensity level for a specific muscle. Intensity is clamped to
/// [0,1] at construction; out-of-range values never propagate.
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleIntensity {
    pub muscle: Muscle,
    intensity: f64,
    pub side: MuscleSide,
    /// Optional override color. When set, the color scale is bypassed.
    pub color: Option<Color>,
}

impl MuscleIntensity {
    pub fn new(muscle: Muscle, intensity: f64) -> Self {
        MuscleIntensity {
            muscle,
            intensity: intensity.clamp(0.0, 1.0),
            side: MuscleSide::Both,
            color: None,
        }
    }

    /// Workout-tracker style input: an integer level on a 0–4 scale,
    /// normalized to [0,1].
    pub fn from_level(muscle: Muscle, level: u32) -> Self {
        MuscleIntensity::new(muscle, f64::from(level.min(4)) / 4.0)
    }

    pub fn with_side(mut self, side: MuscleSide) -> Self {
        self.side = side;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }
}

/// A resolved highlight: how one muscle should be filled, and how opaque.
/// Opacity is clamped to [0,1] at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleHighlight {
    pub fill: MuscleFill,
    opacity: f64,
}

impl MuscleHighlight {
    /// A solid-color highlight at full opacity.
    pub fn new(color: Color) -> Self {
        MuscleHighlight::with_fill(MuscleFill::Color(color), 1.0)
    }

    pub fn with_fill(fill: MuscleFill, opacity: f64) -> Self {
        MuscleHighlight {
            fill,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// The highlight's representative solid color.
    pub fn primary_color(&self) -> Color {
        self.fill.primary_color()
    }
}

/// Highlights keyed by muscle. Backed by a fixed array indexed by the
/// muscle discriminant — the domain is closed, so no hashing.
#[derive(Debug, Clone)]
pub struct MuscleHighlights {
    entries: [Option<MuscleHighlight>; Muscle::COUNT],
}

impl Default for MuscleHighlights {
    fn default() -> Self {
        MuscleHighlights::new()
    }
}

impl MuscleHighlights {
    pub fn new() -> Self {
        MuscleHighlights {
            entries: std::array::from_fn(|_| None),
        }
    }

    pub fn insert(&mut self, muscle: Muscle, highlight: MuscleHighlight) {
        self.entries[muscle.index()] = Some(highlight);
    }

    pub fn remove(&mut self, muscle: Muscle) {
        self.entries[muscle.index()] = None;
    }

    pub fn get(&self, muscle: Muscle) -> Option<&MuscleHighlight> {
        self.entries[muscle.index()].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Muscle, &MuscleHighlight)> {
        Muscle::ALL
            .into_iter()
            .filter_map(|m| self.get(m).map(|h| (m, h)))
    }
}

/// Configuration for resolving intensities into highlights.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapConfiguration {
    /// The palette intensities map through.
    pub color_scale: HeatmapColorScale,
    /// Curve applied to intensities, overriding the scale's own.
    pub interpolation: ColorInterpolation,
    /// Minimum intensity; entries below it produce no highlight.
    pub threshold: Option<f64>,
    /// Fill each region with an intra-region gradient instead of a solid.
    pub gradient_fill: bool,
    /// Direction of the intra-region gradient.
    pub gradient_direction: GradientDirection,
    /// Where the gradient's low end samples the scale, as a fraction of
    /// the entry's intensity.
    pub gradient_low_intensity_factor: f64,
}

impl Default for HeatmapConfiguration {
    fn default() -> Self {
        HeatmapConfiguration {
            color_scale: HeatmapColorScale::workout(),
            interpolation: ColorInterpolation::Linear,
            threshold: None,
            gradient_fill: false,
            gradient_direction: GradientDirection::TopToBottom,
            gradient_low_intensity_factor: 0.3,
        }
    }
}

impl HeatmapConfiguration {
    /// The scale color for an intensity, with this configuration's
    /// interpolation curve applied.
    pub fn color_for(&self, intensity: f64) -> Color {
        let scale = HeatmapColorScale {
            colors: self.color_scale.colors.clone(),
            interpolation: self.interpolation.clone(),
        };
        scale.color_for(intensity)
    }

    /// Resolves intensity entries into a highlight map. Override colors
    /// bypass the scale; the threshold filters entries out entirely.
    pub fn resolve(&self, entries: &[MuscleIntensity]) -> MuscleHighlights {
        let mut highlights = MuscleHighlights::new();
        for entry in entries {
            if let Some(threshold) = self.threshold {
                if entry.intensity() < threshold {
                    continue;
                }
            }
            let high = match entry.color {
                Some(color) => color,
                None => self.color_for(entry.intensity()),
            };
            let fill = if self.gradient_fill && entry.color.is_none() {
                let low = self
                    .color_for(entry.intensity() * self.gradient_low_intensity_factor);
                MuscleFill::LinearGradient {
                    colors: vec![low, high],
                    start: self.gradient_direction.start_point(),
                    end: self.gradient_direction.end_point(),
                }
            } else {
                MuscleFill::Color(high)
            };
            highlights.insert(entry.muscle, MuscleHighlight::with_fill(fill, 1.0));
        }
        highlights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_clamping() {
        assert_eq!(MuscleIntensity::new(Muscle::Chest, 1.5).intensity(), 1.0);
        assert_eq!(MuscleIntensity::new(Muscle::Chest, -0.5).intensity(), 0.0);
        assert_eq!(MuscleIntensity::new(Muscle::Chest, 0.5).intensity(), 0.5);
    }

    #[test]
    fn test_intensity_defaults() {
        let entry = MuscleIntensity::new(Muscle::Abs, 0.7);
        assert_eq!(entry.side, MuscleSide::Both);
        assert!(entry.color.is_none());
    }

    #[test]
    fn test_intensity_from_level() {
        assert_eq!(MuscleIntensity::from_level(Muscle::Abs, 0).intensity(), 0.0);
        assert_eq!(MuscleIntensity::from_level(Muscle::Abs, 2).intensity(), 0.5);
        assert_eq!(MuscleIntensity::from_level(Muscle::Abs, 4).intensity(), 1.0);
        // Levels above the scale clamp.
        assert_eq!(MuscleIntensity::from_level(Muscle::Abs, 9).intensity(), 1.0);
    }

    #[test]
    fn test_highlight_opacity_clamped() {
        assert_eq!(MuscleHighlight::with_fill(Color::RED.into(), 1.5).opacity(), 1.0);
        assert_eq!(MuscleHighlight::with_fill(Color::RED.into(), -0.2).opacity(), 0.0);
        assert_eq!(MuscleHighlight::new(Color::RED).opacity(), 1.0);
    }

    #[test]
    fn test_highlight_primary_color() {
        let highlight = MuscleHighlight::with_fill(
            MuscleFill::LinearGradient {
                colors: vec![Color::RED, Color::ORANGE],
                start: crate::geometry::UnitPoint::TOP,
                end: crate::geometry::UnitPoint::BOTTOM,
            },
            0.8,
        );
        assert_eq!(highlight.primary_color(), Color::RED);
    }

    #[test]
    fn test_highlights_default_is_empty() {
        let highlights = MuscleHighlights::default();
        assert!(highlights.is_empty());
        // Every slot in the closed domain starts unset.
        for muscle in Muscle::ALL {
            assert!(highlights.get(muscle).is_none());
        }
    }

    #[test]
    fn test_highlights_map() {
        let mut highlights = MuscleHighlights::new();
        assert!(highlights.is_empty());
        highlights.insert(Muscle::Chest, MuscleHighlight::new(Color::RED));
        highlights.insert(Muscle::Biceps, MuscleHighlight::new(Color::ORANGE));
        assert_eq!(highlights.iter().count(), 2);
        assert!(highlights.get(Muscle::Chest).is_some());
        highlights.remove(Muscle::Chest);
        assert!(highlights.get(Muscle::Chest).is_none());
    }

    #[test]
    fn test_resolve_uses_scale() {
        let config = HeatmapConfiguration::default();
        let highlights = config.resolve(&[MuscleIntensity::new(Muscle::Chest, 1.0)]);
        let highlight = highlights.get(Muscle::Chest).unwrap();
        assert_eq!(highlight.primary_color(), Color::RED);
    }

    #[test]
    fn test_resolve_override_color_bypasses_scale() {
        let config = HeatmapConfiguration::default();
        let entry = MuscleIntensity::new(Muscle::Chest, 0.1).with_color(Color::BLUE);
        let highlights = config.resolve(&[entry]);
        assert_eq!(
            highlights.get(Muscle::Chest).unwrap().primary_color(),
            Color::BLUE
        );
    }

    #[test]
    fn test_resolve_threshold_filters() {
        let config = HeatmapConfiguration {
            threshold: Some(0.5),
            ..Default::default()
        };
        let highlights = config.resolve(&[
            MuscleIntensity::new(Muscle::Chest, 0.4),
            MuscleIntensity::new(Muscle::Biceps, 0.6),
        ]);
        assert!(highlights.get(Muscle::Chest).is_none());
        assert!(highlights.get(Muscle::Biceps).is_some());
    }

    #[test]
    fn test_resolve_gradient_fill() {
        let config = HeatmapConfiguration {
            gradient_fill: true,
            ..Default::default()
        };
        let highlights = config.resolve(&[MuscleIntensity::new(Muscle::Chest, 1.0)]);
        match &highlights.get(Muscle::Chest).unwrap().fill {
            MuscleFill::LinearGradient { colors, .. } => {
                assert_eq!(colors.len(), 2);
                assert_eq!(colors[1], Color::RED);
                assert_ne!(colors[0], colors[1]);
            }
            other => panic!("expected gradient fill, got {other:?}"),
        }
    }

    #[test]
    fn test_configuration_interpolation_override() {
        let config = HeatmapConfiguration {
            color_scale: HeatmapColorScale::new(vec![Color::BLACK, Color::WHITE]),
            interpolation: ColorInterpolation::Step(2),
            ..Default::default()
        };
        // Stepped: 0.4 quantizes to 0.
        assert_eq!(config.color_for(0.4), Color::BLACK);
    }
}
