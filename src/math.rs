//! Vector helpers layered on top of glam.
//!
//! glam happily returns NaN or infinity when asked to normalize a zero vector or
//! divide by zero. Color math downstream would silently corrupt the image, so
//! every such operation in the tracer goes through the checked helpers here.

use glam::Vec3A;

use crate::error::{RenderError, Result};

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Normalize `v`, failing on a zero (or non-finite) length.
pub fn checked_normalize(v: Vec3A, context: &'static str) -> Result<Vec3A> {
    v.try_normalize().ok_or(RenderError::DivisionByZero(context))
}

/// Divide every component of `v` by the scalar `s`.
pub fn checked_div(v: Vec3A, s: f32, context: &'static str) -> Result<Vec3A> {
    if s == 0.0 {
        return Err(RenderError::DivisionByZero(context));
    }
    Ok(v / s)
}

/// Reflect `v` about the surface normal `n`: `v - 2 (v . n) n`.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `v` through a surface with unit normal `n`.
///
/// `ratio` is eta_in / eta_out. When Snell's law has no solution (total internal
/// reflection) the mirrored direction is returned instead.
pub fn refract(v: Vec3A, n: Vec3A, ratio: f32) -> Vec3A {
    let cos_theta1 = v.dot(-n);
    let sin_theta2 = ratio * (1.0 - cos_theta1 * cos_theta1).max(0.0).sqrt();

    if sin_theta2 > 1.0 {
        return reflect(v, n);
    }

    let cos_theta2 = (1.0 - sin_theta2 * sin_theta2).sqrt();
    ratio * v + (ratio * cos_theta1 - cos_theta2) * n
}

/// Linear blend from `a` (at t = 0) to `b` (at t = 1).
pub fn lerp(a: Vec3A, b: Vec3A, t: f32) -> Vec3A {
    (1.0 - t) * a + t * b
}
