//! Sphere primitive for ray tracing.
//!
//! Solves |origin + t*dir - center|^2 = radius^2 with the textbook quadratic.
//! Tangent rays (zero discriminant) count as misses.

use glam::Vec3A;

use crate::error::Result;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Result<Option<HitRecord>> {
        let diff = r.origin - self.center;
        let a = r.direction.dot(r.direction);
        let b = 2.0 * diff.dot(r.direction);
        let c = diff.dot(diff) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return Ok(None);
        }

        // a > 0 here: a zero direction makes the discriminant zero
        let sqrtd = discriminant.sqrt();
        let near = (-b - sqrtd) / (2.0 * a);
        let far = (-b + sqrtd) / (2.0 * a);

        let t = if ray_t.contains(near) {
            near
        } else if ray_t.contains(far) {
            far
        } else {
            return Ok(None);
        };

        let outward_normal = r.at(t) - self.center;
        HitRecord::from_outward_normal(r, t, outward_normal, self.material).map(Some)
    }
}
