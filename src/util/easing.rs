//! Easing functions for animation interpolation.
//!
//! Provides the easing curves used by the mode hand-off tweens. Options name
//! them in snake_case (`easing = "quartic_in_out"`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic ease-in-out (slow start and end).
    CubicInOut,
    /// Quartic ease-in-out: a steeper middle than cubic. Matches GSAP's
    /// `power3.inOut`.
    QuarticInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing function: the quartic in-out used for camera
    /// hand-offs.
    pub const DEFAULT: EasingFunction = EasingFunction::QuarticInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        // Clamp input to [0, 1]
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            EasingFunction::QuarticInOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u * u / 2.0
                }
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                // f(t) = c0(1-t)³ + c1·3t(1-t)² + c2·3(1-t)t² + c3·t³
                // where c0=0.0, c3=1.0
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_in_out_curves_are_symmetric() {
        for easing in [EasingFunction::CubicInOut, EasingFunction::QuarticInOut] {
            assert_eq!(easing.evaluate(0.0), 0.0);
            assert_eq!(easing.evaluate(1.0), 1.0);
            assert!((easing.evaluate(0.5) - 0.5).abs() < 1e-6);
            let early = easing.evaluate(0.2);
            let late = easing.evaluate(0.8);
            assert!((early + late - 1.0).abs() < 1e-5);
            assert!(early < 0.2, "{easing:?} should start slow");
        }
    }

    #[test]
    fn test_quartic_is_steeper_than_cubic() {
        let cubic = EasingFunction::CubicInOut.evaluate(0.25);
        let quartic = EasingFunction::QuarticInOut.evaluate(0.25);
        assert!(quartic < cubic);
        assert!((quartic - 0.03125).abs() < 1e-6); // 8 * 0.25^4
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let quartic = EasingFunction::QuarticInOut;
        assert_eq!(quartic.evaluate(-0.5), 0.0);
        assert_eq!(quartic.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_names_in_options() {
        #[derive(Deserialize)]
        struct Holder {
            easing: EasingFunction,
        }
        let holder: Holder = toml::from_str("easing = \"quartic_in_out\"").unwrap();
        assert_eq!(holder.easing, EasingFunction::QuarticInOut);
        let holder: Holder =
            toml::from_str("easing = { cubic_hermite = { c1 = 0.33, c2 = 1.0 } }")
                .unwrap();
        assert_eq!(
            holder.easing,
            EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 }
        );
    }
}
