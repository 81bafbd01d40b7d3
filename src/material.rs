//! Material system for ray tracing.
//!
//! Three surface models: Diffuse (Lambertian-like), Metal (perfect mirror), and
//! Dielectric (glass). Materials are small `Copy` values, so every sphere keeps its
//! own copy instead of sharing a handle.

use crate::error::Result;
use crate::hittable::HitRecord;
use crate::math::{checked_normalize, reflect, refract, Color};
use crate::random;
use crate::ray::Ray;

/// Surface material, dispatched by pattern match in [`Material::scatter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Matte surface scattering around the normal.
    Diffuse {
        /// Surface color/reflectance.
        albedo: Color,
    },

    /// Mirror reflection.
    Metal {
        /// Metal color.
        albedo: Color,
    },

    /// Transparent material that refracts, or reflects past the critical angle.
    Dielectric {
        /// Attenuation applied to transmitted and reflected light, usually near white.
        tint: Color,
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f32,
    },
}

/// Outgoing ray and color filter produced by one bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Ray leaving the hit point.
    pub scattered: Ray,
    /// Per-channel multiplier for light gathered along `scattered`.
    pub attenuation: Color,
}

impl Material {
    /// Compute ray scattering for this material.
    ///
    /// Every material scatters; the only error is a zero-length incoming
    /// direction reaching the dielectric, which has to normalize it.
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord) -> Result<Scatter> {
        match *self {
            Material::Diffuse { albedo } => Ok(scatter_diffuse(albedo, rec)),
            Material::Metal { albedo } => Ok(scatter_metal(albedo, r_in, rec)),
            Material::Dielectric { tint, refraction_index } => {
                scatter_dielectric(tint, refraction_index, r_in, rec)
            }
        }
    }
}

fn scatter_diffuse(albedo: Color, rec: &HitRecord) -> Scatter {
    let mut scatter_direction = rec.normal + random::random_unit_vector();

    // Catch degenerate scatter direction (very close to zero)
    if scatter_direction.length_squared() < 1e-8 {
        scatter_direction = rec.normal;
    }

    Scatter {
        scattered: Ray::new(rec.p, scatter_direction),
        attenuation: albedo,
    }
}

fn scatter_metal(albedo: Color, r_in: &Ray, rec: &HitRecord) -> Scatter {
    Scatter {
        scattered: Ray::new(rec.p, reflect(r_in.direction, rec.normal)),
        attenuation: albedo,
    }
}

fn scatter_dielectric(
    tint: Color,
    refraction_index: f32,
    r_in: &Ray,
    rec: &HitRecord,
) -> Result<Scatter> {
    let ratio = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = checked_normalize(r_in.direction, "normalizing a ray entering glass")?;
    Ok(Scatter {
        scattered: Ray::new(rec.p, refract(unit_direction, rec.normal, ratio)),
        attenuation: tint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use glam::Vec3A;

    fn record(normal: Vec3A, front_face: bool, material: Material) -> HitRecord {
        HitRecord {
            p: Vec3A::new(0.0, 1.0, 0.0),
            normal,
            t: 1.0,
            front_face,
            material,
        }
    }

    #[test]
    fn test_diffuse_scatters_into_normal_hemisphere() {
        random::seed(11);
        let albedo = Color::new(0.8, 0.3, 0.3);
        let material = Material::Diffuse { albedo };
        let rec = record(Vec3A::Y, true, material);
        let incoming = Ray::new(Vec3A::new(0.0, 5.0, 0.0), Vec3A::NEG_Y);

        for _ in 0..200 {
            let scatter = material.scatter(&incoming, &rec).unwrap();
            assert_eq!(scatter.attenuation, albedo);
            assert_eq!(scatter.scattered.origin, rec.p);
            assert!(scatter.scattered.direction.dot(rec.normal) >= -1e-5);
        }
    }

    #[test]
    fn test_metal_mirrors_incoming_direction() {
        let albedo = Color::new(0.0, 1.0, 1.0);
        let material = Material::Metal { albedo };
        let rec = record(Vec3A::Y, true, material);
        let incoming = Ray::new(Vec3A::new(-1.0, 2.0, 0.0), Vec3A::new(1.0, -1.0, 0.0));

        let scatter = material.scatter(&incoming, &rec).unwrap();
        assert_eq!(scatter.scattered.direction, Vec3A::new(1.0, 1.0, 0.0));
        assert_eq!(scatter.scattered.origin, rec.p);
        assert_eq!(scatter.attenuation, albedo);
    }

    #[test]
    fn test_dielectric_entering_passes_straight_at_normal_incidence() {
        let material = Material::Dielectric { tint: Color::ONE, refraction_index: 1.5 };
        let rec = record(Vec3A::Y, true, material);
        let incoming = Ray::new(Vec3A::new(0.0, 3.0, 0.0), Vec3A::new(0.0, -2.0, 0.0));

        let scatter = material.scatter(&incoming, &rec).unwrap();
        assert!(scatter.scattered.direction.abs_diff_eq(Vec3A::NEG_Y, 1e-6));
        assert_eq!(scatter.attenuation, Color::ONE);
    }

    #[test]
    fn test_dielectric_uses_inverse_index_on_front_face() {
        let material = Material::Dielectric { tint: Color::ONE, refraction_index: 1.5 };
        let incoming = Ray::new(Vec3A::new(-1.0, 1.0, 0.0), Vec3A::new(1.0, -1.0, 0.0));
        let unit = incoming.direction.normalize();

        let entering = material.scatter(&incoming, &record(Vec3A::Y, true, material)).unwrap();
        assert!(entering
            .scattered
            .direction
            .abs_diff_eq(refract(unit, Vec3A::Y, 1.0 / 1.5), 1e-6));

        // 45 degrees from inside glass is past the critical angle
        let exiting = material.scatter(&incoming, &record(Vec3A::Y, false, material)).unwrap();
        assert!(exiting.scattered.direction.abs_diff_eq(reflect(unit, Vec3A::Y), 1e-6));
    }

    #[test]
    fn test_dielectric_rejects_zero_direction() {
        let material = Material::Dielectric { tint: Color::ONE, refraction_index: 1.5 };
        let rec = record(Vec3A::Y, true, material);
        let incoming = Ray::new(Vec3A::ZERO, Vec3A::ZERO);

        assert!(matches!(
            material.scatter(&incoming, &rec),
            Err(RenderError::DivisionByZero(_))
        ));
    }
}
