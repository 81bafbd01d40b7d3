//! Collection of objects and lights forming a scene.
//!
//! Intersection is a linear scan over every sphere. The window's upper bound
//! shrinks to the closest hit found so far, so insertion order never decides
//! which surface wins.

use crate::error::Result;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::light::PointLight;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Spheres plus the optional point lights used by the direct-light policy.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Primitives tested by every ray
    pub objects: Vec<Sphere>,
    /// Lights sampled when the integrator runs the direct-light policy
    pub lights: Vec<PointLight>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Sphere) {
        self.objects.push(object);
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Closest hit among all objects with `t` inside `ray_t`.
    pub fn ray_has_hit_any(&self, r: &Ray, ray_t: Interval) -> Result<Option<HitRecord>> {
        let mut closest: Option<HitRecord> = None;
        let mut window = ray_t;

        for object in &self.objects {
            if let Some(rec) = object.hit(r, window)? {
                window = window.with_max(rec.t);
                closest = Some(rec);
            }
        }

        Ok(closest)
    }
}

impl Hittable for Scene {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Result<Option<HitRecord>> {
        self.ray_has_hit_any(r, ray_t)
    }
}
