//! Centralized metric factory service.
//!
//! This module assembles the two immutable configuration objects consumed by
//! the rendering subsystem: head-mount optical metrics and display pixel
//! metrics. Every value is re-read from the property source on each call;
//! malformed or wrong-arity properties silently fall back to the compiled-in
//! defaults and never surface an error.

// Allow i32 -> f32 casts for pixel counts (well within f32 precision)
#![allow(clippy::cast_precision_loss)]

use std::sync::Arc;

use crate::constants::{
    DEFAULT_B_POLY, DEFAULT_DISPLAY_GAP, DEFAULT_G_POLY, DEFAULT_INTER_LENS_DISTANCE,
    DEFAULT_MAX_FOV_DEGREES, DEFAULT_RGB_POLY_OFFSETS, DEFAULT_R_POLY, DEFAULT_SCREEN_SIZE,
    DEFAULT_V_EYE_TO_DISPLAY, PROP_B_POLY, PROP_DISPLAY_GAP, PROP_FOV_IOBT, PROP_G_POLY,
    PROP_LENS_DISTANCE, PROP_RGB_POLY_OFFSET, PROP_R_POLY, PROP_SCREEN_SIZE,
    PROP_V_EYE_TO_DISPLAY, SCREEN_BORDER_SIZE, SCREEN_REFRESH_RATE,
};
use crate::models::{
    ColorChannelDistortion, DisplayMetrics, DisplayOrientation, EyeOrientation, FieldOfView,
    HeadMountMetrics, IdentityDistortion, PolynomialRadialDistortion, Vec2, Vec2i,
    VerticalAlignment,
};
use crate::properties::{float_property, vec_property, PropertySource};

/// Reads the inter-lens distance in meters.
pub fn inter_lens_distance<P: PropertySource + ?Sized>(props: &P) -> f32 {
    float_property(props, PROP_LENS_DISTANCE, DEFAULT_INTER_LENS_DISTANCE)
}

/// Reads the gap between the display halves in meters.
pub fn display_gap<P: PropertySource + ?Sized>(props: &P) -> f32 {
    float_property(props, PROP_DISPLAY_GAP, DEFAULT_DISPLAY_GAP)
}

/// Reads the vertical eye-to-display distance in meters.
pub fn v_eye_to_display<P: PropertySource + ?Sized>(props: &P) -> f32 {
    float_property(props, PROP_V_EYE_TO_DISPLAY, DEFAULT_V_EYE_TO_DISPLAY)
}

/// Reads the physical screen size in meters.
///
/// The property must have exactly 2 components (width, height); any other
/// arity substitutes the default size as a whole.
pub fn display_size<P: PropertySource + ?Sized>(props: &P) -> Vec2 {
    let mut sizes = vec_property(props, PROP_SCREEN_SIZE, &DEFAULT_SCREEN_SIZE);
    if sizes.len() != 2 {
        sizes = DEFAULT_SCREEN_SIZE.to_vec();
    }
    Vec2::new(sizes[0], sizes[1])
}

/// Reads the maximum per-eye field of view, converted to radians.
///
/// The property carries `inner, outer, bottom, top` in degrees and must have
/// exactly 4 components; any other arity substitutes the default as a whole.
pub fn max_fovs<P: PropertySource + ?Sized>(props: &P) -> [f32; 4] {
    let fovs = vec_property(props, PROP_FOV_IOBT, &DEFAULT_MAX_FOV_DEGREES);
    let fovs: [f32; 4] = match fovs.try_into() {
        Ok(values) => values,
        Err(_) => DEFAULT_MAX_FOV_DEGREES,
    };
    fovs.map(f32::to_radians)
}

/// Builds the mirrored per-eye fields of view from the max-FOV property.
///
/// The eyes are assumed symmetric: the inner and outer bounds swap sides
/// between the left and right eye.
fn symmetric_fovs<P: PropertySource + ?Sized>(props: &P) -> (FieldOfView, FieldOfView) {
    let fovs = max_fovs(props);
    let left = FieldOfView::new(fovs[1], fovs[0], fovs[2], fovs[3]);
    let right = FieldOfView::new(fovs[0], fovs[1], fovs[2], fovs[3]);
    (left, right)
}

/// Assembles head-mount metrics around the given distortion models.
///
/// Vertical alignment and eye orientations are fixed hardware constants;
/// the tray-to-lens distance is derived as
/// `(inter-lens distance - display gap) / 2`.
fn assemble_head_mount_metrics<P: PropertySource + ?Sized>(
    props: &P,
    left_fov: FieldOfView,
    right_fov: FieldOfView,
    red: Arc<dyn ColorChannelDistortion>,
    green: Arc<dyn ColorChannelDistortion>,
    blue: Arc<dyn ColorChannelDistortion>,
) -> HeadMountMetrics {
    let inter_lens = inter_lens_distance(props);
    let eye_to_display = v_eye_to_display(props);
    let tray_to_lens = (inter_lens - display_gap(props)) / 2.0;

    HeadMountMetrics::new(
        inter_lens,
        eye_to_display,
        eye_to_display,
        VerticalAlignment::Center,
        left_fov,
        right_fov,
        red,
        green,
        blue,
        EyeOrientation::Ccw0Degrees,
        EyeOrientation::Ccw0Degrees,
        tray_to_lens,
    )
}

/// Creates head-mount metrics with symmetric per-eye fields of view derived
/// from the max-FOV property.
pub fn create_head_mount_metrics<P: PropertySource + ?Sized>(props: &P) -> HeadMountMetrics {
    let (left_fov, right_fov) = symmetric_fovs(props);
    create_head_mount_metrics_with_fov(props, left_fov, right_fov)
}

/// Creates head-mount metrics with explicit per-eye fields of view.
///
/// Builds one polynomial distortion model per color channel from the `r_poly`,
/// `g_poly`, and `b_poly` coefficient properties and the shared 3-component
/// offset property. Each coefficient vector defaults independently; the
/// offset vector defaults as a whole when its arity is not 3.
pub fn create_head_mount_metrics_with_fov<P: PropertySource + ?Sized>(
    props: &P,
    left_fov: FieldOfView,
    right_fov: FieldOfView,
) -> HeadMountMetrics {
    let mut offsets = vec_property(props, PROP_RGB_POLY_OFFSET, &DEFAULT_RGB_POLY_OFFSETS);
    let poly_r = vec_property(props, PROP_R_POLY, &DEFAULT_R_POLY);
    let poly_g = vec_property(props, PROP_G_POLY, &DEFAULT_G_POLY);
    let poly_b = vec_property(props, PROP_B_POLY, &DEFAULT_B_POLY);
    if offsets.len() != 3 {
        offsets = DEFAULT_RGB_POLY_OFFSETS.to_vec();
    }

    let red: Arc<dyn ColorChannelDistortion> =
        Arc::new(PolynomialRadialDistortion::new(offsets[0], poly_r));
    let green: Arc<dyn ColorChannelDistortion> =
        Arc::new(PolynomialRadialDistortion::new(offsets[1], poly_g));
    let blue: Arc<dyn ColorChannelDistortion> =
        Arc::new(PolynomialRadialDistortion::new(offsets[2], poly_b));

    assemble_head_mount_metrics(props, left_fov, right_fov, red, green, blue)
}

/// Creates head-mount metrics with a no-op distortion model, symmetric FOV.
pub fn create_undistorted_head_mount_metrics<P: PropertySource + ?Sized>(
    props: &P,
) -> HeadMountMetrics {
    let (left_fov, right_fov) = symmetric_fovs(props);
    create_undistorted_head_mount_metrics_with_fov(props, left_fov, right_fov)
}

/// Creates head-mount metrics with a no-op distortion model.
///
/// All three color channels share a single identity instance, so correction
/// becomes a pass-through.
pub fn create_undistorted_head_mount_metrics_with_fov<P: PropertySource + ?Sized>(
    props: &P,
    left_fov: FieldOfView,
    right_fov: FieldOfView,
) -> HeadMountMetrics {
    let shared: Arc<dyn ColorChannelDistortion> = Arc::new(IdentityDistortion::new());

    assemble_head_mount_metrics(
        props,
        left_fov,
        right_fov,
        Arc::clone(&shared),
        Arc::clone(&shared),
        shared,
    )
}

/// Creates display metrics for the given panel resolution.
///
/// The configured physical screen size is divided by the resolution to get
/// the per-axis pixel pitch; border size, refresh rate, and portrait
/// orientation are fixed hardware constants.
pub fn create_display_metrics<P: PropertySource + ?Sized>(
    props: &P,
    resolution: Vec2i,
) -> DisplayMetrics {
    let size_in_meters = display_size(props);
    let meters_per_pixel = Vec2::new(
        size_in_meters.x / resolution.x as f32,
        size_in_meters.y / resolution.y as f32,
    );

    DisplayMetrics::new(
        resolution,
        meters_per_pixel,
        SCREEN_BORDER_SIZE,
        1000.0 / SCREEN_REFRESH_RATE,
        DisplayOrientation::Portrait,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyStore;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn test_scalar_getters_use_defaults_when_unset() {
        let store = PropertyStore::new();
        assert_eq!(inter_lens_distance(&store), 0.064);
        assert_eq!(display_gap(&store), 0.0);
        assert_eq!(v_eye_to_display(&store), 0.035);
    }

    #[test]
    fn test_scalar_getters_read_configured_values() {
        let store: PropertyStore = [
            ("lens_distance", "0.07"),
            ("display_gap", "0.002"),
            ("v_eye_to_display", "0.04"),
        ]
        .into_iter()
        .collect();

        assert_eq!(inter_lens_distance(&store), 0.07);
        assert_eq!(display_gap(&store), 0.002);
        assert_eq!(v_eye_to_display(&store), 0.04);
    }

    #[test]
    fn test_max_fovs_default_in_radians() {
        let store = PropertyStore::new();
        let fovs = max_fovs(&store);
        let expected = [43.7_f32, 47.8, 54.2, 54.2].map(f32::to_radians);
        for (got, want) in fovs.iter().zip(expected.iter()) {
            assert!((got - want).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_max_fovs_wrong_arity_defaults_as_a_whole() {
        let store: PropertyStore = [("fov_iobt", "40,44,50")].into_iter().collect();
        let fovs = max_fovs(&store);
        let expected = [43.7_f32, 47.8, 54.2, 54.2].map(f32::to_radians);
        for (got, want) in fovs.iter().zip(expected.iter()) {
            assert!((got - want).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_symmetric_fovs_mirror_horizontal_bounds() {
        let store: PropertyStore = [("fov_iobt", "40,48,50,52")].into_iter().collect();
        let metrics = create_head_mount_metrics(&store);

        // Left eye: outer bound on the left side; right eye mirrors it.
        assert!((metrics.left_fov().left() - 48.0_f32.to_radians()).abs() < TOLERANCE);
        assert!((metrics.left_fov().right() - 40.0_f32.to_radians()).abs() < TOLERANCE);
        assert!((metrics.right_fov().left() - 40.0_f32.to_radians()).abs() < TOLERANCE);
        assert!((metrics.right_fov().right() - 48.0_f32.to_radians()).abs() < TOLERANCE);

        // Vertical bounds are shared.
        assert!((metrics.left_fov().bottom() - 50.0_f32.to_radians()).abs() < TOLERANCE);
        assert!((metrics.right_fov().top() - 52.0_f32.to_radians()).abs() < TOLERANCE);
    }

    #[test]
    fn test_display_size_requires_exactly_two_components() {
        let store: PropertyStore = [("screen_size", "0.08,0.14,0.2")].into_iter().collect();
        let size = display_size(&store);
        assert!((size.x - 0.074_217_7).abs() < TOLERANCE);
        assert!((size.y - 0.131_943).abs() < TOLERANCE);

        let store: PropertyStore = [("screen_size", "0.08,0.14")].into_iter().collect();
        let size = display_size(&store);
        assert!((size.x - 0.08).abs() < TOLERANCE);
        assert!((size.y - 0.14).abs() < TOLERANCE);
    }

    #[test]
    fn test_tray_to_lens_distance() {
        let store: PropertyStore = [("lens_distance", "0.07"), ("display_gap", "0.004")]
            .into_iter()
            .collect();
        let metrics = create_head_mount_metrics(&store);
        assert!((metrics.tray_to_lens_distance() - 0.033).abs() < TOLERANCE);
    }

    #[test]
    fn test_fixed_hardware_constants() {
        let store = PropertyStore::new();
        let metrics = create_head_mount_metrics(&store);
        assert_eq!(metrics.vertical_alignment(), VerticalAlignment::Center);
        assert_eq!(metrics.left_eye_orientation(), EyeOrientation::Ccw0Degrees);
        assert_eq!(metrics.right_eye_orientation(), EyeOrientation::Ccw0Degrees);
        assert_eq!(metrics.left_eye_to_display(), metrics.right_eye_to_display());
    }

    #[test]
    fn test_standard_factory_builds_three_distinct_models() {
        let store = PropertyStore::new();
        let metrics = create_head_mount_metrics(&store);
        assert!(!Arc::ptr_eq(
            metrics.red_distortion(),
            metrics.green_distortion()
        ));
        assert!(!Arc::ptr_eq(
            metrics.green_distortion(),
            metrics.blue_distortion()
        ));
        assert!(!Arc::ptr_eq(
            metrics.red_distortion(),
            metrics.blue_distortion()
        ));
        assert_eq!(metrics.red_distortion().model_name(), "polynomial");
    }

    #[test]
    fn test_undistorted_factory_shares_one_model() {
        let store = PropertyStore::new();
        let metrics = create_undistorted_head_mount_metrics(&store);
        assert!(Arc::ptr_eq(
            metrics.red_distortion(),
            metrics.green_distortion()
        ));
        assert!(Arc::ptr_eq(
            metrics.green_distortion(),
            metrics.blue_distortion()
        ));
        assert_eq!(metrics.red_distortion().model_name(), "identity");
        assert_eq!(metrics.red_distortion().distort(0.5), 0.5);
    }

    #[test]
    fn test_undistorted_factory_keeps_lens_geometry() {
        let store: PropertyStore = [("lens_distance", "0.066")].into_iter().collect();
        let metrics = create_undistorted_head_mount_metrics(&store);
        assert_eq!(metrics.inter_lens_distance(), 0.066);
        assert!((metrics.tray_to_lens_distance() - 0.033).abs() < TOLERANCE);
    }

    #[test]
    fn test_offset_vector_wrong_arity_defaults_as_a_whole() {
        let store: PropertyStore = [("rgb_poly_offset", "0.5,0.5")].into_iter().collect();
        let metrics = create_head_mount_metrics(&store);

        // Defaults restored for every channel, not just the missing slot.
        let debug = format!("{:?}", metrics.red_distortion());
        assert!(debug.contains("0.209"), "unexpected red offset: {debug}");
        assert!(!debug.contains("offset: 0.5"), "partial offsets applied: {debug}");
    }

    #[test]
    fn test_malformed_coefficient_vectors_default_independently() {
        let store: PropertyStore = [("r_poly", "1.0,2.0"), ("g_poly", "garbage")]
            .into_iter()
            .collect();
        let metrics = create_head_mount_metrics(&store);

        // Red kept its configured coefficients: p(x) = x + 2, distort(1) = 3.
        assert!((metrics.red_distortion().distort(1.0) - 3.0).abs() < TOLERANCE);

        // Green fell back to its 7-coefficient default.
        let green = format!("{:?}", metrics.green_distortion());
        assert!(green.contains("4.43"), "unexpected green model: {green}");
    }

    #[test]
    fn test_display_metrics_meters_per_pixel() {
        let store = PropertyStore::new();
        let metrics = create_display_metrics(&store, Vec2i::new(1000, 1000));

        let mpp = metrics.meters_per_pixel();
        assert!((mpp.x - 7.42177e-5).abs() < 1e-9);
        assert!((mpp.y - 1.31943e-4).abs() < 1e-9);
        assert_eq!(metrics.resolution(), Vec2i::new(1000, 1000));
        assert_eq!(metrics.border_size(), SCREEN_BORDER_SIZE);
        assert!((metrics.frame_period_ms() - 1000.0 / 60.0).abs() < TOLERANCE);
        assert_eq!(metrics.orientation(), DisplayOrientation::Portrait);
    }
}
