//! Data models for head-mount optics and display characteristics.
//!
//! This module contains the immutable value objects assembled by the
//! metric factories. Models are independent of the property layer.

pub mod display;
pub mod distortion;
pub mod field_of_view;
pub mod head_mount;
pub mod vec;

// Re-export all model types
pub use display::{DisplayMetrics, DisplayOrientation};
pub use distortion::{ColorChannelDistortion, IdentityDistortion, PolynomialRadialDistortion};
pub use field_of_view::FieldOfView;
pub use head_mount::{EyeOrientation, HeadMountMetrics, VerticalAlignment};
pub use vec::{Vec2, Vec2i};
