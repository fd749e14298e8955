//! Application-wide constants.
//!
//! This module defines the persisted property keys and every compiled-in
//! default the metric factories fall back to when a property is absent,
//! malformed, or has the wrong number of components.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "HMD Metrics";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "hmdmetrics";

/// Maximum length in bytes of a raw property value. Longer values are
/// truncated before parsing, mirroring the bounded read buffer of the
/// persisted property store.
pub const PROP_VALUE_MAX: usize = 92;

// Property keys. Each value is a decimal float or a comma-separated list
// of decimal floats.

/// Shared per-channel radial offsets, 3 components (red, green, blue).
pub const PROP_RGB_POLY_OFFSET: &str = "rgb_poly_offset";
/// Red-channel polynomial coefficients, highest order first.
pub const PROP_R_POLY: &str = "r_poly";
/// Green-channel polynomial coefficients, highest order first.
pub const PROP_G_POLY: &str = "g_poly";
/// Blue-channel polynomial coefficients, highest order first.
pub const PROP_B_POLY: &str = "b_poly";
/// Distance between the lens centers in meters.
pub const PROP_LENS_DISTANCE: &str = "lens_distance";
/// Gap between the two display halves in meters.
pub const PROP_DISPLAY_GAP: &str = "display_gap";
/// Vertical eye-to-display distance in meters.
pub const PROP_V_EYE_TO_DISPLAY: &str = "v_eye_to_display";
/// Maximum field of view in degrees: inner, outer, bottom, top.
pub const PROP_FOV_IOBT: &str = "fov_iobt";
/// Physical screen size in meters, 2 components (width, height).
pub const PROP_SCREEN_SIZE: &str = "screen_size";

/// All property keys recognized by the metric factories, in documentation order.
pub const ALL_PROPERTY_KEYS: [&str; 9] = [
    PROP_RGB_POLY_OFFSET,
    PROP_R_POLY,
    PROP_G_POLY,
    PROP_B_POLY,
    PROP_LENS_DISTANCE,
    PROP_DISPLAY_GAP,
    PROP_V_EYE_TO_DISPLAY,
    PROP_FOV_IOBT,
    PROP_SCREEN_SIZE,
];

// Optics defaults.

/// Default inter-lens distance in meters.
pub const DEFAULT_INTER_LENS_DISTANCE: f32 = 0.064;

/// Default gap between the display halves in meters.
pub const DEFAULT_DISPLAY_GAP: f32 = 0.0;

/// Default vertical eye-to-display distance in meters.
pub const DEFAULT_V_EYE_TO_DISPLAY: f32 = 0.035;

/// Default physical screen size in meters (width, height).
pub const DEFAULT_SCREEN_SIZE: [f32; 2] = [0.074_217_7, 0.131_943];

/// Default maximum field of view in degrees: inner, outer, bottom, top.
pub const DEFAULT_MAX_FOV_DEGREES: [f32; 4] = [43.7, 47.8, 54.2, 54.2];

// Per-channel distortion defaults. Coefficients are highest order first;
// the last element is the constant term.

/// Default red-channel polynomial coefficients.
pub const DEFAULT_R_POLY: [f32; 7] = [
    -4.085_190_04,
    34.702_820_75,
    -67.377_812_49,
    56.973_042_35,
    -23.357_686_85,
    4.719_959_7,
    0.631_980_82,
];

/// Default green-channel polynomial coefficients.
pub const DEFAULT_G_POLY: [f32; 7] = [
    4.430_783_18,
    3.478_066_17,
    -20.580_173_98,
    20.858_804_14,
    -8.404_650_4,
    1.612_846_85,
    0.888_176_1,
];

/// Default blue-channel polynomial coefficients.
pub const DEFAULT_B_POLY: [f32; 7] = [
    12.041_412_65,
    -21.981_124_91,
    14.067_583_89,
    -3.152_456_29,
    0.365_491_02,
    0.052_527_05,
    0.998_442_79,
];

/// Default per-channel radial offsets (red, green, blue).
pub const DEFAULT_RGB_POLY_OFFSETS: [f32; 3] = [0.209_716_452_38, 0.151_894_5, 1.000_969_582_78];

// Display defaults.

/// Screen border size in meters.
pub const SCREEN_BORDER_SIZE: f32 = 0.004;

/// Screen refresh rate in Hz.
pub const SCREEN_REFRESH_RATE: f32 = 60.0;
