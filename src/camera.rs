//! Camera for primary ray generation.
//!
//! The camera frame and image plane are derived once in [`Camera::new`]; after
//! that [`Camera::get_ray`] maps normalized plane coordinates to world rays.
//! Without a lens the plane sits one unit in front of the eye. With a
//! [`ThinLens`] it moves out to the focus distance and ray origins are jittered
//! across the aperture, so only geometry on the focus plane stays sharp.

use glam::Vec3A;
use log::debug;

use crate::error::{RenderError, Result};
use crate::math::checked_normalize;
use crate::random;
use crate::ray::Ray;

/// World "up" used to build the camera frame.
const WORLD_UP: Vec3A = Vec3A::Y;

/// Finite-aperture lens parameters for depth of field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThinLens {
    /// Lens diameter. Zero keeps every ray origin at the eye.
    pub aperture: f32,
    /// Distance from the eye to the plane of perfect focus.
    pub focus_dist: f32,
}

/// User-facing camera parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Point camera is looking from (camera position)
    pub lookfrom: Vec3A,
    /// Point camera is looking at (look target)
    pub lookat: Vec3A,
    /// Vertical field of view in degrees, exclusive range (0, 180)
    pub vfov: f32,
    /// Image width divided by image height
    pub aspect_ratio: f32,
    /// Thin lens model; `None` is a pinhole
    pub lens: Option<ThinLens>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            lookfrom: Vec3A::ZERO,
            lookat: Vec3A::NEG_Z,
            vfov: 90.0,
            aspect_ratio: 16.0 / 9.0,
            lens: None,
        }
    }
}

/// Immutable camera with a precomputed frame and image plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position in world space
    origin: Vec3A,
    /// World position of the image plane's bottom-left corner
    lower_left_corner: Vec3A,
    /// Full horizontal span of the image plane
    horizontal: Vec3A,
    /// Full vertical span of the image plane
    vertical: Vec3A,
    /// Camera frame basis vector pointing right
    side: Vec3A,
    /// Camera frame basis vector pointing up
    relative_up: Vec3A,
    /// Half the aperture; zero for a pinhole
    lens_radius: f32,
    /// Whether the thin lens ray model (normalized directions) is used
    has_lens: bool,
}

impl Camera {
    /// Validate `settings` and derive the camera frame.
    pub fn new(settings: &CameraSettings) -> Result<Self> {
        let vfov = settings.vfov;
        if !(vfov > 0.0 && vfov < 180.0) {
            return Err(RenderError::InvalidFieldOfView(vfov));
        }
        if !(settings.aspect_ratio > 0.0 && settings.aspect_ratio.is_finite()) {
            return Err(RenderError::InvalidAspectRatio(settings.aspect_ratio));
        }
        if let Some(lens) = settings.lens {
            if !(lens.aperture >= 0.0) {
                return Err(RenderError::InvalidAperture(lens.aperture));
            }
            if !(lens.focus_dist > 0.0) {
                return Err(RenderError::InvalidFocusDistance(lens.focus_dist));
            }
        }

        let h = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * settings.aspect_ratio;

        let forward = checked_normalize(
            settings.lookfrom - settings.lookat,
            "building the camera frame from coincident lookfrom and lookat",
        )?;
        let side = checked_normalize(
            WORLD_UP.cross(forward),
            "building the camera frame looking straight up or down",
        )?;
        let relative_up = forward.cross(side);

        let plane_dist = settings.lens.map_or(1.0, |lens| lens.focus_dist);
        let vertical = relative_up * viewport_height * plane_dist;
        let horizontal = side * viewport_width * plane_dist;
        let lower_left_corner =
            settings.lookfrom - 0.5 * horizontal - 0.5 * vertical - forward * plane_dist;

        let lens_radius = settings.lens.map_or(0.0, |lens| lens.aperture / 2.0);

        debug!(
            "Camera at {:?} looking at {:?}, viewport {:.3}x{:.3}, lens radius {}",
            settings.lookfrom, settings.lookat, viewport_width, viewport_height, lens_radius
        );

        Ok(Self {
            origin: settings.lookfrom,
            lower_left_corner,
            horizontal,
            vertical,
            side,
            relative_up,
            lens_radius,
            has_lens: settings.lens.is_some(),
        })
    }

    /// Ray through image plane coordinates `(u, v)`, where `(0, 0)` is the bottom-left
    /// corner and `(1, 1)` the top-right.
    ///
    /// Pinhole rays keep their unnormalized direction; thin lens rays are normalized.
    pub fn get_ray(&self, u: f32, v: f32) -> Result<Ray> {
        let target = self.lower_left_corner + self.horizontal * u + self.vertical * v;

        if !self.has_lens {
            return Ok(Ray::new(self.origin, target - self.origin));
        }

        let offset = self.defocus_offset();
        let origin = self.origin + offset;
        let direction = checked_normalize(target - origin, "aiming a lens ray")?;
        Ok(Ray::new(origin, direction))
    }

    /// Random offset within the lens disk, spanned by the camera's side and up axes.
    fn defocus_offset(&self) -> Vec3A {
        if self.lens_radius == 0.0 {
            return Vec3A::ZERO;
        }
        let p = random::random_in_unit_disk() * self.lens_radius;
        self.side * p.x + self.relative_up * p.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn pinhole() -> Camera {
        Camera::new(&CameraSettings {
            lookfrom: Vec3A::new(0.0, 3.0, 10.0),
            lookat: Vec3A::new(0.0, 0.0, -2.0),
            vfov: 20.0,
            aspect_ratio: 16.0 / 9.0,
            lens: None,
        })
        .unwrap()
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let settings = CameraSettings {
            lookfrom: Vec3A::new(0.0, 3.0, 10.0),
            lookat: Vec3A::new(0.0, 0.0, -2.0),
            ..Default::default()
        };
        let camera = Camera::new(&settings).unwrap();
        let r = camera.get_ray(0.5, 0.5).unwrap();

        let expected = (settings.lookat - settings.lookfrom).normalize();
        assert_eq!(r.origin, settings.lookfrom);
        assert!(r.direction.normalize().abs_diff_eq(expected, EPS));
        // Pinhole plane sits one unit away
        assert!((r.direction.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_corners_span_field_of_view() {
        let camera = Camera::new(&CameraSettings {
            vfov: 90.0,
            aspect_ratio: 2.0,
            ..Default::default()
        })
        .unwrap();

        let bottom_left = camera.get_ray(0.0, 0.0).unwrap();
        assert!(bottom_left.direction.abs_diff_eq(Vec3A::new(-2.0, -1.0, -1.0), EPS));

        let top_right = camera.get_ray(1.0, 1.0).unwrap();
        assert!(top_right.direction.abs_diff_eq(Vec3A::new(2.0, 1.0, -1.0), EPS));
    }

    #[test]
    fn test_zero_aperture_lens_behaves_like_pinhole() {
        let settings = CameraSettings {
            lookfrom: Vec3A::new(0.0, 3.0, 10.0),
            lookat: Vec3A::new(0.0, 0.0, -2.0),
            vfov: 20.0,
            aspect_ratio: 16.0 / 9.0,
            lens: Some(ThinLens { aperture: 0.0, focus_dist: 4.0 }),
        };
        let lens = Camera::new(&settings).unwrap();
        let pinhole = pinhole();

        for (u, v) in [(0.0, 0.0), (0.25, 0.8), (1.0, 1.0)] {
            let a = lens.get_ray(u, v).unwrap();
            let b = pinhole.get_ray(u, v).unwrap();
            assert_eq!(a.origin, settings.lookfrom);
            assert!((a.direction.length() - 1.0).abs() < EPS);
            assert!(a.direction.abs_diff_eq(b.direction.normalize(), EPS));
        }
    }

    #[test]
    fn test_lens_rays_converge_on_focus_plane() {
        random::seed(3);
        let lookfrom = Vec3A::new(0.0, 0.0, 0.0);
        let camera = Camera::new(&CameraSettings {
            lookfrom,
            lookat: Vec3A::new(0.0, 0.0, -1.0),
            vfov: 60.0,
            aspect_ratio: 1.0,
            lens: Some(ThinLens { aperture: 0.5, focus_dist: 5.0 }),
        })
        .unwrap();

        let focus_point = camera.lower_left_corner + camera.horizontal * 0.3 + camera.vertical * 0.6;
        let mut saw_offset = false;
        for _ in 0..50 {
            let r = camera.get_ray(0.3, 0.6).unwrap();
            let offset = r.origin - lookfrom;
            assert!(offset.length() <= 0.25 + EPS);
            assert!(offset.z.abs() < EPS);
            saw_offset |= offset.length() > 1e-3;

            let to_focus = focus_point - r.origin;
            assert!(r.direction.cross(to_focus).length() < 1e-3);
        }
        assert!(saw_offset);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        for vfov in [0.0, 180.0, -5.0, 200.0, f32::NAN] {
            let settings = CameraSettings { vfov, ..Default::default() };
            assert!(matches!(Camera::new(&settings), Err(RenderError::InvalidFieldOfView(_))));
        }

        let settings = CameraSettings { aspect_ratio: 0.0, ..Default::default() };
        assert_eq!(Camera::new(&settings), Err(RenderError::InvalidAspectRatio(0.0)));

        let settings = CameraSettings {
            lens: Some(ThinLens { aperture: -1.0, focus_dist: 1.0 }),
            ..Default::default()
        };
        assert_eq!(Camera::new(&settings), Err(RenderError::InvalidAperture(-1.0)));

        let settings = CameraSettings {
            lens: Some(ThinLens { aperture: 0.1, focus_dist: 0.0 }),
            ..Default::default()
        };
        assert_eq!(Camera::new(&settings), Err(RenderError::InvalidFocusDistance(0.0)));
    }

    #[test]
    fn test_degenerate_frames_are_rejected() {
        let coincident = CameraSettings { lookat: Vec3A::ZERO, ..Default::default() };
        assert!(matches!(Camera::new(&coincident), Err(RenderError::DivisionByZero(_))));

        let straight_up = CameraSettings { lookat: Vec3A::Y, ..Default::default() };
        assert!(matches!(Camera::new(&straight_up), Err(RenderError::DivisionByZero(_))));
    }
}
