//! # Output Module
//!
//! Writes rendered HDR images to disk:
//! - Plain-text PPM (`P3`), linear values clamped and quantized to 8 bits
//! - PNG with HDR to LDR conversion and sRGB gamma
//! - OpenEXR with full linear f32 precision
//!
//! The `save_*` functions log successful writes and hand failures back to the
//! caller, which decides the process exit status.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::info;
use spherecast::HdrImage;

/// Outcome of saving an image to disk.
pub type SaveResult = Result<(), Box<dyn Error>>;

/// Largest channel value written to PPM files.
pub const PPM_MAXVAL: u32 = 255;

/// Quantize one linear channel to `[0, maxval]`.
///
/// Out of range values are clamped so the file never holds samples above maxval.
fn quantize(linear: f32, maxval: u32) -> u32 {
    (linear.clamp(0.0, 1.0) * maxval as f32).round() as u32
}

/// Write `image` as plain-text PPM to any writer.
///
/// Header `P3\n<width> <height>\n<maxval>\n`, then one `"<r> <g> <b>"` line per
/// pixel, rows from the top of the picture down.
pub fn write_ppm<W: Write>(image: &HdrImage, mut out: W) -> io::Result<()> {
    let (width, height) = image.dimensions();
    write!(out, "P3\n{} {}\n{}\n", width, height, PPM_MAXVAL)?;
    for pixel in image.pixels() {
        writeln!(
            out,
            "{} {} {}",
            quantize(pixel[0], PPM_MAXVAL),
            quantize(pixel[1], PPM_MAXVAL),
            quantize(pixel[2], PPM_MAXVAL)
        )?;
    }
    out.flush()
}

/// Save an f32 RGB image as plain-text PPM.
pub fn save_image_as_ppm(image: &HdrImage, output_path: &str) -> SaveResult {
    let file = File::create(output_path)?;
    write_ppm(image, BufWriter::new(file))?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// Apply sRGB gamma correction for proper PNG display.
///
/// Linear portion for very dark values, then `1.055 * linear^(1/2.4) - 0.055`.
fn linear_to_gamma(linear: f32) -> f32 {
    if linear <= 0.0 {
        0.0
    } else if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Save an f32 RGB image as PNG with HDR to LDR tone mapping and gamma correction
///
/// Values are clamped to [0.0, 1.0], gamma corrected, then scaled to 8 bits.
pub fn save_image_as_png(image: &HdrImage, output_path: &str) -> SaveResult {
    let (width, height) = image.dimensions();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([
            (linear_to_gamma(pixel[0].clamp(0.0, 1.0)) * 255.0) as u8,
            (linear_to_gamma(pixel[1].clamp(0.0, 1.0)) * 255.0) as u8,
            (linear_to_gamma(pixel[2].clamp(0.0, 1.0)) * 255.0) as u8,
        ])
    });

    u8_image.save(output_path)?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// Save an f32 RGB image as EXR with full HDR precision
///
/// Linear light values are written untouched, with no tone mapping or gamma.
pub fn save_image_as_exr(image: &HdrImage, output_path: &str) -> SaveResult {
    let (width, height) = image.dimensions();
    write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        let pixel = image.get_pixel(x as u32, y as u32);
        (pixel[0], pixel[1], pixel[2])
    })?;
    info!("HDR image saved as EXR: {}", output_path);
    Ok(())
}
