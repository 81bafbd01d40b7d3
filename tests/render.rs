use glam::Vec3A;
use spherecast::material::Material;
use spherecast::sphere::Sphere;
use spherecast::{
    random, render, Background, Camera, CameraSettings, Color, DirectLight, Integrator,
    RenderSettings, Scene, SkyGradient,
};

const ALBEDO: Color = Color::new(0.8, 0.3, 0.3);

/// One large diffuse sphere filling the lower half of the view.
fn ground_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        Material::Diffuse { albedo: ALBEDO },
    ));
    scene
}

fn camera(settings: &RenderSettings) -> Camera {
    Camera::new(&CameraSettings {
        lookfrom: Vec3A::ZERO,
        lookat: Vec3A::NEG_Z,
        vfov: 90.0,
        aspect_ratio: settings.aspect_ratio(),
        lens: None,
    })
    .unwrap()
}

#[test]
fn test_sky_above_horizon_and_darkened_ground_below() {
    random::seed(1234);
    let settings = RenderSettings { image_width: 16, image_height: 16, samples_per_pixel: 8 };
    let integrator = Integrator::new(1, Background::SkyGradient(SkyGradient::default()));

    let image = render(&settings, &camera(&settings), &ground_scene(), &integrator).unwrap();

    // Top row looks well above the horizon: between level sky and the white zenith
    let sky = SkyGradient::default();
    for x in 0..16 {
        let top = image.get_pixel(x, 0);
        assert!(top[0] > 0.75 && top[0] <= sky.zenith.x + 1e-4);
        assert!(top[1] > 0.85 && top[1] <= sky.zenith.y + 1e-4);
        assert!((top[2] - 1.0).abs() < 1e-4);
    }

    // Bottom row hits the ground once, then sees the sky
    for x in 0..16 {
        let bottom = image.get_pixel(x, 15);
        let color = Color::new(bottom[0], bottom[1], bottom[2]);
        assert!(color.cmple(ALBEDO + 1e-4).all(), "{color:?} brighter than albedo");
        assert!(color.cmpge(ALBEDO * 0.5 - 1e-4).all(), "{color:?} darker than half albedo");
        assert!(color.x > color.y && color.x > color.z);
    }
}

#[test]
fn test_zero_depth_renders_background_only() {
    random::seed(99);
    let settings = RenderSettings { image_width: 4, image_height: 4, samples_per_pixel: 2 };
    let with_ground = render(
        &settings,
        &camera(&settings),
        &ground_scene(),
        &Integrator::new(0, Background::default()),
    )
    .unwrap();

    random::seed(99);
    let empty = render(
        &settings,
        &camera(&settings),
        &Scene::new(),
        &Integrator::new(0, Background::default()),
    )
    .unwrap();

    assert_eq!(with_ground.as_raw(), empty.as_raw());
}

#[test]
fn test_direct_light_policy_uses_ambient_for_empty_sky() {
    random::seed(7);
    let direct = DirectLight::default();
    let settings = RenderSettings { image_width: 4, image_height: 4, samples_per_pixel: 1 };
    let integrator = Integrator::new(3, Background::DirectLight(direct));

    let image = render(&settings, &camera(&settings), &Scene::new(), &integrator).unwrap();
    for pixel in image.pixels() {
        assert_eq!(pixel.0, [direct.ambient.x, direct.ambient.y, direct.ambient.z]);
    }
}
