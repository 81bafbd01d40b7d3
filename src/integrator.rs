//! Recursive light transport.
//!
//! [`Integrator::compute_color`] follows one path through the scene: every hit
//! asks the surface material for a scattered ray and an attenuation, recurses,
//! and multiplies the result by the attenuation. When a ray escapes or the depth
//! budget runs out, the configured [`Background`] policy supplies the terminal
//! color. Exactly one policy is active per integrator.

use glam::Vec3A;

use crate::error::Result;
use crate::interval::Interval;
use crate::light::PointLight;
use crate::math::{checked_div, checked_normalize, lerp, Color};
use crate::ray::Ray;
use crate::scene::Scene;

/// Lower bound of the hit window, keeping bounced rays off their own surface.
pub const SELF_INTERSECTION_EPSILON: f32 = 0.01;

/// Vertical sky gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyGradient {
    /// Color for rays pointing straight down
    pub horizon: Color,
    /// Color for rays pointing straight up
    pub zenith: Color,
}

impl Default for SkyGradient {
    fn default() -> Self {
        Self {
            horizon: Color::new(0.5, 0.7, 1.0),
            zenith: Color::new(1.0, 1.0, 1.0),
        }
    }
}

impl SkyGradient {
    /// Blend by the normalized direction's y component mapped from [-1, 1] to [0, 1].
    pub fn color(&self, direction: Vec3A) -> Result<Color> {
        let unit_direction = checked_normalize(direction, "normalizing a ray that escaped to the sky")?;
        let a = 0.5 * (unit_direction.y + 1.0);
        Ok(lerp(self.horizon, self.zenith, a))
    }
}

/// Direct lighting estimate from the scene's point lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectLight {
    /// Floor on the cosine between the ray and the light direction
    pub min_factor: f32,
    /// Scale applied after dividing by the light distance
    pub brightness: f32,
    /// Returned for primary rays that hit nothing
    pub ambient: Color,
}

impl Default for DirectLight {
    fn default() -> Self {
        Self {
            min_factor: 0.1,
            brightness: 8.0,
            ambient: Color::new(0.05, 0.05, 0.08),
        }
    }
}

impl DirectLight {
    /// Average clamped contribution of every light as seen along `r`.
    ///
    /// A scene without lights is black. A light sitting exactly on the ray
    /// origin is a division by zero.
    pub fn color(&self, r: &Ray, lights: &[PointLight]) -> Result<Color> {
        if lights.is_empty() {
            return Ok(Color::ZERO);
        }

        let direction = checked_normalize(r.direction, "normalizing a ray for light estimation")?;
        let mut sum = Color::ZERO;
        for light in lights {
            let to_light = light.position - r.origin;
            let distance = to_light.length();
            let dir_to_light = checked_normalize(to_light, "aiming at a light on the ray origin")?;

            let facing = direction.dot(dir_to_light).max(self.min_factor);
            let intensity = (facing / distance * self.brightness).min(1.0);
            sum += light.color * intensity;
        }

        checked_div(sum, lights.len() as f32, "averaging light contributions")
    }
}

/// Terminal color policy for escaped or exhausted paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Gradient between two sky colors
    SkyGradient(SkyGradient),
    /// Point light estimate with an ambient floor
    DirectLight(DirectLight),
}

impl Default for Background {
    fn default() -> Self {
        Background::SkyGradient(SkyGradient::default())
    }
}

/// Recursive path integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    /// Maximum number of bounces (recursion depth limit)
    pub max_depth: u32,
    /// Terminal color policy
    pub background: Background,
}

impl Integrator {
    /// Create an integrator with the given depth budget and terminal policy.
    pub fn new(max_depth: u32, background: Background) -> Self {
        Self { max_depth, background }
    }

    /// Color of a primary ray, spending the full depth budget.
    pub fn ray_color(&self, r: &Ray, scene: &Scene) -> Result<Color> {
        self.compute_color(r, scene, self.max_depth)
    }

    /// Color carried back along `r` with `depth` bounces remaining.
    ///
    /// The result is linear and unclamped.
    pub fn compute_color(&self, r: &Ray, scene: &Scene, depth: u32) -> Result<Color> {
        let hit = scene.ray_has_hit_any(r, Interval::from_min(SELF_INTERSECTION_EPSILON))?;

        match hit {
            Some(rec) if depth > 0 => {
                let scatter = rec.material.scatter(r, &rec)?;
                let incoming = self.compute_color(&scatter.scattered, scene, depth - 1)?;
                Ok(scatter.attenuation * incoming)
            }
            _ => self.terminal_color(r, scene, depth, hit.is_some()),
        }
    }

    fn terminal_color(&self, r: &Ray, scene: &Scene, depth: u32, hit: bool) -> Result<Color> {
        match &self.background {
            Background::SkyGradient(sky) => sky.color(r.direction),
            Background::DirectLight(direct) => {
                if depth == self.max_depth && !hit {
                    Ok(direct.ambient)
                } else {
                    direct.color(r, &scene.lights)
                }
            }
        }
    }
}
