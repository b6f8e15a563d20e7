//! Color scales: an ordered palette plus an interpolation curve, mapping a
//! normalized intensity to a concrete color.

use super::color::Color;
use super::interpolation::ColorInterpolation;

/// An ordered color list from low to high intensity, with the curve
/// applied to intensities before lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapColorScale {
    pub colors: Vec<Color>,
    pub interpolation: ColorInterpolation,
}

impl HeatmapColorScale {
    pub fn new(colors: Vec<Color>) -> Self {
        HeatmapColorScale {
            colors,
            interpolation: ColorInterpolation::Linear,
        }
    }

    pub fn with_interpolation(colors: Vec<Color>, interpolation: ColorInterpolation) -> Self {
        HeatmapColorScale {
            colors,
            interpolation,
        }
    }

    /// Maps an intensity in [0,1] (clamped) to a color. An empty scale
    /// falls back to mid-gray; a single color covers the whole range.
    /// Fractional positions within 0.01 of a stop return that stop
    /// exactly, avoiding needless blending at boundaries.
    pub fn color_for(&self, intensity: f64) -> Color {
        if self.colors.is_empty() {
            return Color::GRAY;
        }
        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let curved = self.interpolation.apply(intensity.clamp(0.0, 1.0));
        let scaled_index = curved * (self.colors.len() - 1) as f64;
        let lower = scaled_index.floor() as usize;
        let upper = (lower + 1).min(self.colors.len() - 1);
        let fraction = scaled_index - lower as f64;

        if fraction < 0.01 {
            return self.colors[lower];
        }
        self.colors[lower].interpolate(&self.colors[upper], fraction)
    }

    // ── Presets ────────────────────────────────────────────────

    /// Default workout intensity: default fill → yellow → orange → red.
    pub fn workout() -> Self {
        HeatmapColorScale::new(vec![
            Color::DEFAULT_FILL,
            Color::YELLOW,
            Color::ORANGE,
            Color::RED,
        ])
    }

    /// Cool to warm: blue → green → yellow → red.
    pub fn thermal() -> Self {
        HeatmapColorScale::new(vec![Color::BLUE, Color::GREEN, Color::YELLOW, Color::RED])
    }

    /// Medical style: green → yellow → red.
    pub fn medical() -> Self {
        HeatmapColorScale::new(vec![Color::GREEN, Color::YELLOW, Color::RED])
    }

    /// Monochrome: light gray → dark.
    pub fn monochrome() -> Self {
        HeatmapColorScale::new(vec![Color::gray(0.85), Color::gray(0.15)])
    }

    /// Workout palette with 5 discrete steps instead of a smooth ramp.
    pub fn workout_stepped() -> Self {
        HeatmapColorScale::with_interpolation(
            vec![Color::DEFAULT_FILL, Color::YELLOW, Color::ORANGE, Color::RED],
            ColorInterpolation::Step(5),
        )
    }

    /// Thermal palette with a smooth ease-in-out curve.
    pub fn thermal_smooth() -> Self {
        HeatmapColorScale::with_interpolation(
            vec![Color::BLUE, Color::GREEN, Color::YELLOW, Color::RED],
            ColorInterpolation::EaseInOut,
        )
    }
}

impl Default for HeatmapColorScale {
    fn default() -> Self {
        HeatmapColorScale::workout()
    }
}
