//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized. Materials and the sky gradient normalize
    /// it themselves where the math needs a unit vector.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
