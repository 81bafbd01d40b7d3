use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Color returned when a path escapes or runs out of bounces
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum BackgroundKind {
    /// Vertical sky gradient
    Sky,
    /// Point light estimate with an ambient floor
    Lights,
}

/// Built-in scene to render
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum SceneKind {
    /// Ground, two feature spheres and a field of small random spheres
    Random,
    /// Ground and one sphere per material
    Simple,
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "spherecast")]
#[command(about = "A recursive sphere ray tracer in Rust")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "400", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "225", help = "Image height in pixels")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "10", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value = "10", help = "Maximum number of bounces per path")]
    pub max_depth: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "20", help = "Vertical field of view in degrees")]
    pub fov: f32,

    /// Lens aperture; 0 renders with a pinhole camera
    #[arg(long, default_value = "0", help = "Lens aperture (0 = pinhole, no depth of field)")]
    pub aperture: f32,

    /// Focus distance for the lens (defaults to the distance to the look-at point)
    #[arg(long, help = "Focus distance for the lens (defaults to the distance to the look-at point)")]
    pub focus_dist: Option<f32>,

    /// Terminal color policy
    #[arg(long, value_enum, default_value = "sky", help = "Terminal color policy")]
    pub background: BackgroundKind,

    /// Built-in scene
    #[arg(long, value_enum, default_value = "random", help = "Built-in scene")]
    pub scene: SceneKind,

    /// Seed for a reproducible render
    #[arg(long, help = "Seed for a reproducible render")]
    pub seed: Option<u64>,

    /// Output file path (.ppm plain text, .png 8-bit with gamma correction, .exr HDR linear)
    #[arg(short, long, default_value = "output.ppm", help = "Output file path (.ppm plain text, .png 8-bit with gamma correction, .exr HDR linear)")]
    pub output: String,
}
