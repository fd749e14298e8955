//! Small 2D vector types for physical and pixel dimensions.

use serde::{Deserialize, Serialize};

/// 2D vector of floats, used for physical sizes in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new `Vec2`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// 2D vector of integers, used for pixel resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2i {
    /// X component
    pub x: i32,
    /// Y component
    pub y: i32,
}

impl Vec2i {
    /// Creates a new `Vec2i`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_new() {
        let v = Vec2::new(0.074, 0.131);
        assert_eq!(v.x, 0.074);
        assert_eq!(v.y, 0.131);
    }

    #[test]
    fn test_vec2_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_vec2i_new() {
        let v = Vec2i::new(1080, 1920);
        assert_eq!(v.x, 1080);
        assert_eq!(v.y, 1920);
    }
}
