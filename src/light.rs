//! Point lights used by the direct-light background policy.

use glam::Vec3A;

use crate::math::Color;

/// Infinitely small light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3A,
    /// Emitted color.
    pub color: Color,
}

impl PointLight {
    /// Create a light at `position` emitting `color`.
    pub fn new(position: Vec3A, color: Color) -> Self {
        Self { position, color }
    }
}
