//! Head-mount optical metrics.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{ColorChannelDistortion, FieldOfView};

/// Vertical alignment of the display relative to the lens centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VerticalAlignment {
    /// Lenses aligned with the bottom edge of the display
    Bottom,
    /// Lenses centered on the display
    #[default]
    Center,
    /// Lenses aligned with the top edge of the display
    Top,
}

/// Rotation of an eye's display region, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EyeOrientation {
    /// No rotation
    #[default]
    Ccw0Degrees,
    /// Rotated 90 degrees counter-clockwise
    Ccw90Degrees,
    /// Rotated 180 degrees counter-clockwise
    Ccw180Degrees,
    /// Rotated 270 degrees counter-clockwise
    Ccw270Degrees,
}

/// Physical and optical characteristics of a head mount.
///
/// Immutable after construction. The three color-channel distortion models
/// are shared handles: copies of this object (and the consuming compositor)
/// keep the models alive for as long as any handle persists.
#[derive(Debug, Clone)]
pub struct HeadMountMetrics {
    inter_lens_distance: f32,
    left_eye_to_display: f32,
    right_eye_to_display: f32,
    vertical_alignment: VerticalAlignment,
    left_fov: FieldOfView,
    right_fov: FieldOfView,
    red_distortion: Arc<dyn ColorChannelDistortion>,
    green_distortion: Arc<dyn ColorChannelDistortion>,
    blue_distortion: Arc<dyn ColorChannelDistortion>,
    left_eye_orientation: EyeOrientation,
    right_eye_orientation: EyeOrientation,
    tray_to_lens_distance: f32,
}

impl HeadMountMetrics {
    /// Creates a new `HeadMountMetrics`.
    ///
    /// The parameter order is the construction contract expected by the
    /// rendering subsystem and must not be reordered.
    #[must_use]
    pub fn new(
        inter_lens_distance: f32,
        left_eye_to_display: f32,
        right_eye_to_display: f32,
        vertical_alignment: VerticalAlignment,
        left_fov: FieldOfView,
        right_fov: FieldOfView,
        red_distortion: Arc<dyn ColorChannelDistortion>,
        green_distortion: Arc<dyn ColorChannelDistortion>,
        blue_distortion: Arc<dyn ColorChannelDistortion>,
        left_eye_orientation: EyeOrientation,
        right_eye_orientation: EyeOrientation,
        tray_to_lens_distance: f32,
    ) -> Self {
        Self {
            inter_lens_distance,
            left_eye_to_display,
            right_eye_to_display,
            vertical_alignment,
            left_fov,
            right_fov,
            red_distortion,
            green_distortion,
            blue_distortion,
            left_eye_orientation,
            right_eye_orientation,
            tray_to_lens_distance,
        }
    }

    /// Distance between the lens centers in meters.
    #[must_use]
    pub const fn inter_lens_distance(&self) -> f32 {
        self.inter_lens_distance
    }

    /// Left eye-to-display distance in meters.
    #[must_use]
    pub const fn left_eye_to_display(&self) -> f32 {
        self.left_eye_to_display
    }

    /// Right eye-to-display distance in meters.
    #[must_use]
    pub const fn right_eye_to_display(&self) -> f32 {
        self.right_eye_to_display
    }

    /// Vertical alignment of the display behind the lenses.
    #[must_use]
    pub const fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    /// Left eye field of view.
    #[must_use]
    pub const fn left_fov(&self) -> &FieldOfView {
        &self.left_fov
    }

    /// Right eye field of view.
    #[must_use]
    pub const fn right_fov(&self) -> &FieldOfView {
        &self.right_fov
    }

    /// Red-channel distortion model.
    #[must_use]
    pub const fn red_distortion(&self) -> &Arc<dyn ColorChannelDistortion> {
        &self.red_distortion
    }

    /// Green-channel distortion model.
    #[must_use]
    pub const fn green_distortion(&self) -> &Arc<dyn ColorChannelDistortion> {
        &self.green_distortion
    }

    /// Blue-channel distortion model.
    #[must_use]
    pub const fn blue_distortion(&self) -> &Arc<dyn ColorChannelDistortion> {
        &self.blue_distortion
    }

    /// Left eye display-region orientation.
    #[must_use]
    pub const fn left_eye_orientation(&self) -> EyeOrientation {
        self.left_eye_orientation
    }

    /// Right eye display-region orientation.
    #[must_use]
    pub const fn right_eye_orientation(&self) -> EyeOrientation {
        self.right_eye_orientation
    }

    /// Distance from the device tray to the lens plane in meters.
    #[must_use]
    pub const fn tray_to_lens_distance(&self) -> f32 {
        self.tray_to_lens_distance
    }
}
