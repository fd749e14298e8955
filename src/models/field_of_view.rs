//! Per-eye field-of-view bounds.

use serde::{Deserialize, Serialize};

/// Field of view of one eye, as four half-angles from the view axis.
///
/// All angles are in radians. `left`/`right` are relative to the eye's view
/// direction, so the two eyes of a symmetric headset mirror each other's
/// horizontal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
}

impl FieldOfView {
    /// Creates a new `FieldOfView` from half-angles in radians.
    #[must_use]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Creates a new `FieldOfView` from half-angles in degrees.
    #[must_use]
    pub fn from_degrees(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self::new(
            left.to_radians(),
            right.to_radians(),
            bottom.to_radians(),
            top.to_radians(),
        )
    }

    /// Half-angle toward the left of the view axis, in radians.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.left
    }

    /// Half-angle toward the right of the view axis, in radians.
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.right
    }

    /// Half-angle below the view axis, in radians.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Half-angle above the view axis, in radians.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.top
    }

    /// Total horizontal field of view, in radians.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical field of view, in radians.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.bottom + self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_field_of_view_new() {
        let fov = FieldOfView::new(0.8, 0.75, 0.9, 0.9);
        assert_eq!(fov.left(), 0.8);
        assert_eq!(fov.right(), 0.75);
        assert_eq!(fov.bottom(), 0.9);
        assert_eq!(fov.top(), 0.9);
    }

    #[test]
    fn test_field_of_view_from_degrees() {
        let fov = FieldOfView::from_degrees(90.0, 45.0, 180.0, 0.0);
        assert!((fov.left() - PI / 2.0).abs() < 1e-6);
        assert!((fov.right() - PI / 4.0).abs() < 1e-6);
        assert!((fov.bottom() - PI).abs() < 1e-6);
        assert!(fov.top().abs() < 1e-6);
    }

    #[test]
    fn test_field_of_view_totals() {
        let fov = FieldOfView::new(0.5, 0.25, 0.5, 0.75);
        assert!((fov.horizontal() - 0.75).abs() < 1e-6);
        assert!((fov.vertical() - 1.25).abs() < 1e-6);
    }
}
