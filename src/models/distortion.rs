//! Radial lens-distortion models.
//!
//! One model per color channel; the three channel slots of a
//! [`HeadMountMetrics`](crate::models::HeadMountMetrics) share instances
//! through `Arc` handles. Models are immutable after construction.

use serde::{Deserialize, Serialize};

/// Radial distortion model for a single color channel.
///
/// The compositor samples each channel through its own model to correct
/// chromatic aberration at the lens edge.
pub trait ColorChannelDistortion: std::fmt::Debug + Send + Sync {
    /// Maps a radial distance from the optical center to its distorted
    /// distance.
    fn distort(&self, radius: f32) -> f32;

    /// Human-readable model name for diagnostics.
    fn model_name(&self) -> &'static str;
}

/// Polynomial radial distortion.
///
/// Coefficients are highest order first; the final element is the constant
/// term. The distorted radius is `r * p(r)` where `p` is the coefficient
/// polynomial. `offset` is the per-channel radial offset applied by the
/// consuming compositor and is carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolynomialRadialDistortion {
    offset: f32,
    coefficients: Vec<f32>,
}

impl PolynomialRadialDistortion {
    /// Creates a new `PolynomialRadialDistortion`.
    #[must_use]
    pub const fn new(offset: f32, coefficients: Vec<f32>) -> Self {
        Self {
            offset,
            coefficients,
        }
    }

    /// Per-channel radial offset.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Polynomial coefficients, highest order first.
    #[must_use]
    pub fn coefficients(&self) -> &[f32] {
        &self.coefficients
    }

    /// Evaluates the coefficient polynomial at `x` with Horner's rule.
    #[must_use]
    pub fn factor(&self, x: f32) -> f32 {
        self.coefficients.iter().fold(0.0, |acc, c| acc * x + c)
    }
}

impl ColorChannelDistortion for PolynomialRadialDistortion {
    fn distort(&self, radius: f32) -> f32 {
        radius * self.factor(radius)
    }

    fn model_name(&self) -> &'static str {
        "polynomial"
    }
}

/// Identity distortion: a no-op model used when correction is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdentityDistortion;

impl IdentityDistortion {
    /// Creates a new `IdentityDistortion`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ColorChannelDistortion for IdentityDistortion {
    fn distort(&self, radius: f32) -> f32 {
        radius
    }

    fn model_name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_stores_parameters() {
        let model = PolynomialRadialDistortion::new(0.21, vec![2.0, -1.0, 1.0]);
        assert_eq!(model.offset(), 0.21);
        assert_eq!(model.coefficients(), &[2.0, -1.0, 1.0]);
    }

    #[test]
    fn test_polynomial_factor_horner() {
        // p(x) = 2x^2 - x + 1
        let model = PolynomialRadialDistortion::new(0.0, vec![2.0, -1.0, 1.0]);
        assert!((model.factor(0.0) - 1.0).abs() < 1e-6);
        assert!((model.factor(1.0) - 2.0).abs() < 1e-6);
        assert!((model.factor(2.0) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_polynomial_distort_scales_radius() {
        let model = PolynomialRadialDistortion::new(0.0, vec![2.0, -1.0, 1.0]);
        assert!((model.distort(1.0) - 2.0).abs() < 1e-6);
        assert!(model.distort(0.0).abs() < 1e-6);
    }

    #[test]
    fn test_constant_polynomial_is_pure_scale() {
        let model = PolynomialRadialDistortion::new(0.0, vec![1.5]);
        assert!((model.distort(2.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_polynomial_collapses_to_zero() {
        let model = PolynomialRadialDistortion::new(0.0, Vec::new());
        assert_eq!(model.distort(1.0), 0.0);
    }

    #[test]
    fn test_identity_is_noop() {
        let model = IdentityDistortion::new();
        assert_eq!(model.distort(0.0), 0.0);
        assert_eq!(model.distort(0.73), 0.73);
        assert_eq!(model.model_name(), "identity");
    }
}
