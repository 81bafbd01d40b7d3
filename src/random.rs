//! Random number generation for ray tracing.
//!
//! Every sampling routine draws from a thread-local ChaCha20 PRNG. It is seeded
//! from the OS by default and can be reseeded with [`seed`] for reproducible
//! renders. Points inside the unit sphere and disk are rejection sampled from
//! the bounding cube/square with a hard attempt cap.

use glam::Vec3A;
use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

use crate::math::checked_normalize;

/// Maximum candidates drawn by the rejection samplers before giving up.
///
/// A uniform draw from the cube lands in the unit ball with probability ~0.52,
/// so hitting this cap means the generator is broken, not unlucky.
pub const MAX_REJECTION_ATTEMPTS: usize = 64;

thread_local! {
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Reseed the calling thread's generator.
pub fn seed(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = ChaCha20Rng::seed_from_u64(seed));
}

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32() -> f32 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f32 in [min, max)
pub fn random_f32_range(min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32()
}

/// Generate random Vec3A with components in [min, max).
pub fn random_vec3a_range(min: f32, max: f32) -> Vec3A {
    Vec3A::new(
        random_f32_range(min, max),
        random_f32_range(min, max),
        random_f32_range(min, max),
    )
}

/// Generate random RGB color with components in [0.0, 1.0).
pub fn random_color() -> Vec3A {
    random_vec3a_range(0.0, 1.0)
}

/// Random point strictly inside the unit sphere.
///
/// Falls back to the origin if [`MAX_REJECTION_ATTEMPTS`] candidates are rejected.
pub fn random_in_unit_sphere() -> Vec3A {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = random_vec3a_range(-1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    Vec3A::ZERO
}

/// Random direction uniformly distributed on the unit sphere.
///
/// Projects a [`random_in_unit_sphere`] point onto the surface, redrawing points
/// too close to the origin to normalize. Falls back to +Y once the attempt cap
/// is reached.
pub fn random_unit_vector() -> Vec3A {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let candidate = random_in_unit_sphere();
        if let Ok(direction) = checked_normalize(candidate, "projecting onto the unit sphere") {
            return direction;
        }
    }
    Vec3A::Y
}

/// Random point strictly inside the unit disk in the XY plane.
///
/// Falls back to the origin if [`MAX_REJECTION_ATTEMPTS`] candidates are rejected.
pub fn random_in_unit_disk() -> Vec3A {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let p = Vec3A::new(random_f32_range(-1.0, 1.0), random_f32_range(-1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
    Vec3A::ZERO
}
