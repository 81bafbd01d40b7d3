//! Pixel loop driving the camera and integrator.
//!
//! Single-threaded scan from the top row down. Each pixel averages
//! `samples_per_pixel` jittered rays. A sample that fails aborts its whole
//! pixel, which is left black and counted in the end-of-render summary.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use crate::camera::Camera;
use crate::error::{RenderError, Result};
use crate::integrator::Integrator;
use crate::math::{checked_div, Color};
use crate::random;
use crate::scene::Scene;

/// HDR image with linear f32 RGB values.
pub type HdrImage = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Image dimensions and sampling rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Number of random samples for each pixel (for anti-aliasing)
    pub samples_per_pixel: u32,
}

impl RenderSettings {
    /// Width over height, as expected by the camera.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    fn validate(&self) -> Result<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidImageSize {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSampleCount);
        }
        Ok(())
    }
}

/// Render `scene` through `camera`.
///
/// Row 0 of the returned image is the top of the picture.
pub fn render(
    settings: &RenderSettings,
    camera: &Camera,
    scene: &Scene,
    integrator: &Integrator,
) -> Result<HdrImage> {
    settings.validate()?;

    let width = settings.image_width;
    let height = settings.image_height;
    let mut image: HdrImage = ImageBuffer::new(width, height);

    info!(
        "Rendering {}x{} with {} samples per pixel, max depth {}",
        width, height, settings.samples_per_pixel, integrator.max_depth
    );
    let generation_start = std::time::Instant::now();
    let pb = ProgressBar::new(height as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
        pb.set_style(style);
    }

    let mut failed_pixels = 0u64;
    for y in 0..height {
        // Image row 0 is the top of the plane (v = 1)
        let j = height - 1 - y;
        for i in 0..width {
            let color = match sample_pixel(settings, camera, scene, integrator, i, j) {
                Ok(color) => color,
                Err(e) => {
                    debug!("Pixel ({}, {}) aborted: {}", i, y, e);
                    failed_pixels += 1;
                    Color::ZERO
                }
            };
            image.put_pixel(i, y, Rgb([color.x, color.y, color.z]));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!("Image generated in {:.2?}", generation_start.elapsed());
    if failed_pixels > 0 {
        warn!("{} pixels failed and were left black", failed_pixels);
    }

    Ok(image)
}

/// Average of `samples_per_pixel` jittered samples for plane pixel `(i, j)`,
/// where `j` counts up from the bottom row.
fn sample_pixel(
    settings: &RenderSettings,
    camera: &Camera,
    scene: &Scene,
    integrator: &Integrator,
    i: u32,
    j: u32,
) -> Result<Color> {
    let u_span = settings.image_width.saturating_sub(1).max(1) as f32;
    let v_span = settings.image_height.saturating_sub(1).max(1) as f32;

    let mut pixel_color = Color::ZERO;
    for _sample in 0..settings.samples_per_pixel {
        let u = (i as f32 + random::random_f32()) / u_span;
        let v = (j as f32 + random::random_f32()) / v_span;
        let r = camera.get_ray(u, v)?;
        pixel_color += integrator.ray_color(&r, scene)?;
    }

    checked_div(pixel_color, settings.samples_per_pixel as f32, "averaging pixel samples")
}
