//! Ready-made scenes for the command line renderer.

use glam::Vec3A;

use crate::light::PointLight;
use crate::material::Material;
use crate::math::Color;
use crate::random;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Positions of the two large feature spheres in [`random_scene`].
const FEATURE_CENTERS: [Vec3A; 2] = [Vec3A::new(1.0, 0.0, -3.0), Vec3A::new(-1.0, 0.0, -7.0)];

/// Sum of a feature sphere radius and a small sphere radius.
const MIN_FEATURE_CLEARANCE: f32 = 1.2;

/// Placement attempts for each small sphere before the grid cell is left empty.
///
/// A countdown from 10 that drops the cell when it reaches zero, so the tenth
/// candidate is never kept.
const PLACEMENT_ATTEMPTS: usize = 9;

/// First candidate from `sample` that clears both feature spheres.
fn place_small_sphere(mut sample: impl FnMut() -> Vec3A) -> Option<Vec3A> {
    (0..PLACEMENT_ATTEMPTS).map(|_| sample()).find(|candidate| {
        FEATURE_CENTERS
            .iter()
            .all(|feature| candidate.distance(*feature) >= MIN_FEATURE_CLEARANCE)
    })
}

fn glass() -> Material {
    Material::Dielectric { tint: Color::ONE, refraction_index: 1.5 }
}

/// Grey ground, a cyan mirror ball, a glass ball, and a field of small random spheres.
pub fn random_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add(Sphere::new(
        Vec3A::new(0.0, -2000.0, 0.0),
        1999.0,
        Material::Diffuse { albedo: Color::splat(0.5) },
    ));
    scene.add(Sphere::new(FEATURE_CENTERS[0], 1.0, Material::Metal { albedo: Color::new(0.0, 1.0, 1.0) }));
    scene.add(Sphere::new(FEATURE_CENTERS[1], 1.0, glass()));

    for i in -5..5 {
        for j in -15..5 {
            let choose_mat = random::random_f32();
            let color = random::random_color();
            let material = if choose_mat < 0.5 {
                Material::Diffuse { albedo: color }
            } else if choose_mat < 0.8 {
                Material::Metal { albedo: color }
            } else {
                glass()
            };

            let center = place_small_sphere(|| {
                Vec3A::new(
                    i as f32 + random::random_f32_range(0.0, 0.5),
                    -0.8,
                    j as f32 + random::random_f32_range(0.0, 0.5),
                )
            });

            if let Some(center) = center {
                scene.add(Sphere::new(center, 0.2, material));
            }
        }
    }

    scene
}

/// Ground plus one sphere of each material, side by side.
pub fn simple_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        Material::Diffuse { albedo: Color::new(0.8, 0.8, 0.0) },
    ));
    scene.add(Sphere::new(
        Vec3A::new(0.0, 0.0, -1.2),
        0.5,
        Material::Diffuse { albedo: Color::new(0.1, 0.2, 0.5) },
    ));
    scene.add(Sphere::new(Vec3A::new(-1.0, 0.0, -1.0), 0.5, glass()));
    scene.add(Sphere::new(
        Vec3A::new(1.0, 0.0, -1.0),
        0.5,
        Material::Metal { albedo: Color::new(0.8, 0.6, 0.2) },
    ));
    scene
}

/// A warm key light and a cool fill light above the scenes' origin.
pub fn demo_lights() -> Vec<PointLight> {
    vec![
        PointLight::new(Vec3A::new(-4.0, 8.0, 2.0), Color::new(1.0, 0.9, 0.8)),
        PointLight::new(Vec3A::new(5.0, 4.0, -6.0), Color::new(0.6, 0.7, 1.0)),
    ]
}
