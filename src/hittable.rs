//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and HitRecord for
//! storing intersection data.

use glam::Vec3A;

use crate::error::Result;
use crate::interval::Interval;
use crate::material::Material;
use crate::math::checked_normalize;
use crate::ray::Ray;

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Unit surface normal, always facing against the incoming ray
    pub normal: Vec3A,
    /// Ray parameter of the intersection point
    pub t: f32,
    /// True if the geometric outward normal already faced the ray (ray entering the volume)
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: Material,
}

impl HitRecord {
    /// Build a record from a geometric hit, orienting the normal against the ray.
    ///
    /// `outward_normal` need not be unit length; a zero vector is an error.
    pub fn from_outward_normal(
        r: &Ray,
        t: f32,
        outward_normal: Vec3A,
        material: Material,
    ) -> Result<Self> {
        let outward_normal = checked_normalize(outward_normal, "normalizing a surface normal")?;
        let front_face = outward_normal.dot(r.direction) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Ok(Self {
            p: r.at(t),
            normal,
            t,
            front_face,
            material,
        })
    }
}

/// Trait for objects that can be intersected by rays.
///
/// `Sync + Send` keeps a finished scene shareable across threads if a parallel
/// driver is ever layered on top.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter window.
    ///
    /// `Ok(None)` is a miss; errors only come from degenerate geometry.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Result<Option<HitRecord>>;
}
