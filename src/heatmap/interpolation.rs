//! Curves reshaping a [0,1] fraction before color blending. Input is
//! clamped before evaluation and output after, so a curve can never push a
//! value out of range.

use std::fmt;
use std::sync::Arc;

/// How intensity fractions are reshaped across a color scale.
#[derive(Clone)]
pub enum ColorInterpolation {
    /// Linear interpolation (default).
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end.
    EaseOut,
    /// Slow start and end.
    EaseInOut,
    /// Quantization into `count` discrete levels. A count of zero
    /// degenerates to linear.
    Step(usize),
    /// Caller-supplied curve; output is clamped like the built-ins.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl ColorInterpolation {
    /// Applies the curve to a fraction in [0,1].
    pub fn apply(&self, t: f64) -> f64 {
        let clamped = t.clamp(0.0, 1.0);
        match self {
            ColorInterpolation::Linear => clamped,
            ColorInterpolation::EaseIn => clamped * clamped,
            ColorInterpolation::EaseOut => 1.0 - (1.0 - clamped) * (1.0 - clamped),
            ColorInterpolation::EaseInOut => {
                if clamped < 0.5 {
                    2.0 * clamped * clamped
                } else {
                    1.0 - (-2.0 * clamped + 2.0).powi(2) / 2.0
                }
            }
            ColorInterpolation::Step(count) => {
                if *count == 0 {
                    return clamped;
                }
                let n = *count as f64;
                ((clamped * n).floor() / n).min(1.0)
            }
            ColorInterpolation::Custom(curve) => curve(clamped).clamp(0.0, 1.0),
        }
    }
}

impl Default for ColorInterpolation {
    fn default() -> Self {
        ColorInterpolation::Linear
    }
}

impl fmt::Debug for ColorInterpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorInterpolation::Linear => write!(f, "Linear"),
            ColorInterpolation::EaseIn => write!(f, "EaseIn"),
            ColorInterpolation::EaseOut => write!(f, "EaseOut"),
            ColorInterpolation::EaseInOut => write!(f, "EaseInOut"),
            ColorInterpolation::Step(count) => write!(f, "Step({count})"),
            ColorInterpolation::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl PartialEq for ColorInterpolation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ColorInterpolation::Linear, ColorInterpolation::Linear)
            | (ColorInterpolation::EaseIn, ColorInterpolation::EaseIn)
            | (ColorInterpolation::EaseOut, ColorInterpolation::EaseOut)
            | (ColorInterpolation::EaseInOut, ColorInterpolation::EaseInOut) => true,
            (ColorInterpolation::Step(a), ColorInterpolation::Step(b)) => a == b,
            // Opaque functions are never comparable.
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_identities() {
        assert_eq!(ColorInterpolation::Linear.apply(0.0), 0.0);
        assert_eq!(ColorInterpolation::Linear.apply(1.0), 1.0);
        assert_eq!(ColorInterpolation::Linear.apply(0.37), 0.37);
    }

    #[test]
    fn test_input_clamping() {
        assert_eq!(ColorInterpolation::Linear.apply(1.5), 1.0);
        assert_eq!(ColorInterpolation::Linear.apply(-0.5), 0.0);
    }

    #[test]
    fn test_ease_in_slow_start() {
        assert!(ColorInterpolation::EaseIn.apply(0.5) < 0.5);
        assert_eq!(ColorInterpolation::EaseIn.apply(0.5), 0.25);
    }

    #[test]
    fn test_ease_out_fast_start() {
        assert!(ColorInterpolation::EaseOut.apply(0.5) > 0.5);
        assert_eq!(ColorInterpolation::EaseOut.apply(0.5), 0.75);
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        assert_eq!(ColorInterpolation::EaseInOut.apply(0.5), 0.5);
        assert!(ColorInterpolation::EaseInOut.apply(0.25) < 0.25);
        assert!(ColorInterpolation::EaseInOut.apply(0.75) > 0.75);
        assert_eq!(ColorInterpolation::EaseInOut.apply(0.0), 0.0);
        assert_eq!(ColorInterpolation::EaseInOut.apply(1.0), 1.0);
    }

    #[test]
    fn test_step_quantization() {
        let step = ColorInterpolation::Step(4);
        assert_eq!(step.apply(0.26), 0.25);
        assert_eq!(step.apply(0.74), 0.5);
        assert_eq!(step.apply(1.0), 1.0);
        assert_eq!(step.apply(0.0), 0.0);
    }

    #[test]
    fn test_step_zero_degenerates_to_linear() {
        assert_eq!(ColorInterpolation::Step(0).apply(0.42), 0.42);
    }

    #[test]
    fn test_custom_output_clamped() {
        let curve = ColorInterpolation::Custom(Arc::new(|t| t * 3.0 - 0.5));
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(1.0), 1.0);
        assert!((curve.apply(0.3) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_equality() {
        assert_eq!(ColorInterpolation::Linear, ColorInterpolation::Linear);
        assert_eq!(ColorInterpolation::Step(3), ColorInterpolation::Step(3));
        assert_ne!(ColorInterpolation::Step(3), ColorInterpolation::Step(4));
        let a = ColorInterpolation::Custom(Arc::new(|t| t));
        let b = a.clone();
        // Custom curves never compare equal, even to themselves.
        assert_ne!(a, b);
    }
}
