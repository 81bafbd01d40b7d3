//! Spherecast sphere ray tracer
//!
//! Recursive, single-sample-per-call path tracing over a linear list of
//! spheres with diffuse, metal and glass materials.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod error;
pub mod hittable;
pub mod integrator;
pub mod interval;
pub mod light;
pub mod material;
pub mod math;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod sphere;

pub use camera::{Camera, CameraSettings, ThinLens};
pub use error::RenderError;
pub use integrator::{Background, DirectLight, Integrator, SkyGradient};
pub use math::Color;
pub use ray::Ray;
pub use renderer::{render, HdrImage, RenderSettings};
pub use scene::Scene;
