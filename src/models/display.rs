//! Display pixel metrics.

// Allow i32 -> f32 casts for pixel counts (well within f32 precision)
#![allow(clippy::cast_precision_loss)]

use serde::{Deserialize, Serialize};

use crate::models::{Vec2, Vec2i};

/// Orientation of the physical display panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayOrientation {
    /// Panel is taller than wide
    #[default]
    Portrait,
    /// Panel is wider than tall
    Landscape,
}

/// Pixel and timing characteristics of the display panel.
///
/// Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    resolution: Vec2i,
    meters_per_pixel: Vec2,
    border_size: f32,
    frame_period_ms: f32,
    orientation: DisplayOrientation,
}

impl DisplayMetrics {
    /// Creates a new `DisplayMetrics`.
    ///
    /// The parameter order is the construction contract expected by the
    /// rendering subsystem and must not be reordered.
    #[must_use]
    pub const fn new(
        resolution: Vec2i,
        meters_per_pixel: Vec2,
        border_size: f32,
        frame_period_ms: f32,
        orientation: DisplayOrientation,
    ) -> Self {
        Self {
            resolution,
            meters_per_pixel,
            border_size,
            frame_period_ms,
            orientation,
        }
    }

    /// Panel resolution in pixels.
    #[must_use]
    pub const fn resolution(&self) -> Vec2i {
        self.resolution
    }

    /// Physical pixel pitch in meters per pixel, per axis.
    #[must_use]
    pub const fn meters_per_pixel(&self) -> Vec2 {
        self.meters_per_pixel
    }

    /// Border size around the panel in meters.
    #[must_use]
    pub const fn border_size(&self) -> f32 {
        self.border_size
    }

    /// Frame period in milliseconds.
    #[must_use]
    pub const fn frame_period_ms(&self) -> f32 {
        self.frame_period_ms
    }

    /// Refresh rate in Hz, derived from the frame period.
    #[must_use]
    pub fn refresh_rate(&self) -> f32 {
        1000.0 / self.frame_period_ms
    }

    /// Panel orientation.
    #[must_use]
    pub const fn orientation(&self) -> DisplayOrientation {
        self.orientation
    }

    /// Physical panel size in meters, per axis.
    #[must_use]
    pub fn size_in_meters(&self) -> Vec2 {
        Vec2::new(
            self.meters_per_pixel.x * self.resolution.x as f32,
            self.meters_per_pixel.y * self.resolution.y as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_metrics_accessors() {
        let metrics = DisplayMetrics::new(
            Vec2i::new(1080, 1920),
            Vec2::new(6.0e-5, 6.0e-5),
            0.004,
            1000.0 / 60.0,
            DisplayOrientation::Portrait,
        );

        assert_eq!(metrics.resolution(), Vec2i::new(1080, 1920));
        assert_eq!(metrics.border_size(), 0.004);
        assert_eq!(metrics.orientation(), DisplayOrientation::Portrait);
        assert!((metrics.refresh_rate() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_display_metrics_size_in_meters() {
        let metrics = DisplayMetrics::new(
            Vec2i::new(1000, 1000),
            Vec2::new(7.0e-5, 1.3e-4),
            0.004,
            1000.0 / 60.0,
            DisplayOrientation::Portrait,
        );

        let size = metrics.size_in_meters();
        assert!((size.x - 0.07).abs() < 1e-6);
        assert!((size.y - 0.13).abs() < 1e-6);
    }

    #[test]
    fn test_default_orientation_is_portrait() {
        assert_eq!(DisplayOrientation::default(), DisplayOrientation::Portrait);
    }
}
