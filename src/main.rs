use clap::Parser;
use glam::Vec3A;
use log::{error, info};

mod cli;
mod logger;
mod output;

use cli::{Args, BackgroundKind, SceneKind};
use logger::init_logger;
use output::{save_image_as_exr, save_image_as_png, save_image_as_ppm};
use spherecast::{
    random, render, scenes, Background, Camera, CameraSettings, DirectLight, HdrImage, Integrator,
    RenderError, RenderSettings, Scene, SkyGradient, ThinLens,
};

/// Camera placement shared by the built-in scenes
const LOOKFROM: Vec3A = Vec3A::new(0.0, 3.0, 10.0);
const LOOKAT: Vec3A = Vec3A::new(0.0, 0.0, -2.0);

/// Build the requested scene, adding lights when the direct-light policy needs them
fn create_scene(kind: SceneKind, background: BackgroundKind) -> Scene {
    let mut scene = match kind {
        SceneKind::Random => scenes::random_scene(),
        SceneKind::Simple => scenes::simple_scene(),
    };
    if background == BackgroundKind::Lights {
        scene.lights.extend(scenes::demo_lights());
    }
    info!(
        "Scene has {} spheres and {} lights",
        scene.objects.len(),
        scene.lights.len()
    );
    scene
}

/// Create camera from the command line settings
fn create_camera(args: &Args, settings: &RenderSettings) -> Result<Camera, RenderError> {
    let lens = if args.aperture > 0.0 || args.focus_dist.is_some() {
        Some(ThinLens {
            aperture: args.aperture,
            focus_dist: args.focus_dist.unwrap_or_else(|| LOOKFROM.distance(LOOKAT)),
        })
    } else {
        None
    };

    Camera::new(&CameraSettings {
        lookfrom: LOOKFROM,
        lookat: LOOKAT,
        vfov: args.fov,
        aspect_ratio: settings.aspect_ratio(),
        lens,
    })
}

fn create_integrator(args: &Args) -> Integrator {
    let background = match args.background {
        BackgroundKind::Sky => Background::SkyGradient(SkyGradient::default()),
        BackgroundKind::Lights => Background::DirectLight(DirectLight::default()),
    };
    Integrator::new(args.max_depth, background)
}

fn run(args: &Args) -> Result<HdrImage, RenderError> {
    let settings = RenderSettings {
        image_width: args.width,
        image_height: args.height,
        samples_per_pixel: args.samples_per_pixel,
    };

    if let Some(seed) = args.seed {
        info!("Seeding random generator with {}", seed);
        random::seed(seed);
    }

    let camera = create_camera(args, &settings)?;
    let scene = create_scene(args.scene, args.background);
    let integrator = create_integrator(args);

    render(&settings, &camera, &scene, &integrator)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let extension = std::path::Path::new(&args.output)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !matches!(extension.as_str(), "ppm" | "png" | "exr") {
        error!(
            "Unsupported file extension '{}'. Only .ppm, .png and .exr formats are supported.",
            extension
        );
        std::process::exit(1);
    }

    let image = match run(&args) {
        Ok(image) => image,
        Err(e) => {
            error!("Render failed: {}", e);
            std::process::exit(1);
        }
    };

    let saved = match extension.as_str() {
        "exr" => save_image_as_exr(&image, &args.output),
        "png" => save_image_as_png(&image, &args.output),
        _ => save_image_as_ppm(&image, &args.output),
    };
    if let Err(e) = saved {
        error!("Failed to save {}: {}", args.output, e);
        std::process::exit(1);
    }
}
