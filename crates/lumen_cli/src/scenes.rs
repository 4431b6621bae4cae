//! Built-in demo scenes.

use lumen_math::sampling::{gen_f32, gen_range_f32, random_vec3, random_vec3_range};
use lumen_renderer::{Color, Dielectric, Lambertian, Metal, Scene, Vec3};
use rand::RngCore;
use serde::Deserialize;

/// Which built-in scene to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Ground, three large spheres and a field of small random ones
    #[default]
    Random,
    /// Ground and three spheres, one per material
    ThreeSpheres,
}

impl SceneKind {
    pub fn build(&self, rng: &mut dyn RngCore) -> Scene {
        match self {
            SceneKind::Random => random_scene(rng),
            SceneKind::ThreeSpheres => three_spheres(),
        }
    }
}

/// The classic cover scene: a 22x22 grid of small spheres around three
/// large ones.
pub fn random_scene(rng: &mut dyn RngCore) -> Scene {
    let mut scene = Scene::new();

    let ground = scene.add_material(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    // All glass spheres share one material.
    let glass = scene.add_material(Dielectric::new(1.5));
    let keep_clear = Vec3::new(4.0, 0.2, 0.0);

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - keep_clear).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                // Diffuse
                let albedo = random_vec3(rng) * random_vec3(rng);
                scene.add_material(Lambertian::new(albedo))
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = random_vec3_range(rng, 0.5, 1.0);
                let fuzz = gen_range_f32(rng, 0.0, 0.5);
                scene.add_material(Metal::new(albedo, fuzz))
            } else {
                glass
            };
            scene.add_sphere(center, 0.2, material);
        }
    }

    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, glass);

    let brown = scene.add_material(Lambertian::new(Color::new(0.4, 0.2, 0.1)));
    scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, brown);

    let mirror = scene.add_material(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0));
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, mirror);

    log::info!(
        "Created {} spheres sharing {} materials",
        scene.len(),
        scene.material_count()
    );
    scene
}

/// A small scene for quick previews.
pub fn three_spheres() -> Scene {
    let mut scene = Scene::new();

    let ground = scene.add_material(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let matte = scene.add_material(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let glass = scene.add_material(Dielectric::new(1.5));
    let gold = scene.add_material(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    scene.add_sphere(Vec3::new(0.0, -100.5, -1.0), 100.0, ground);
    scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, matte);
    scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass);
    // Hollow glass: a negative radius flips the normals of the inner shell
    scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), -0.45, glass);
    scene.add_sphere(Vec3::new(1.0, 0.0, -1.0), 0.5, gold);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_renderer::{Hittable, Interval, Ray};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_scene_is_seeded() {
        let a = random_scene(&mut StdRng::seed_from_u64(3));
        let b = random_scene(&mut StdRng::seed_from_u64(3));
        assert_eq!(a.len(), b.len());
        assert_eq!(a.material_count(), b.material_count());
    }

    #[test]
    fn test_random_scene_layout() {
        let scene = random_scene(&mut StdRng::seed_from_u64(42));
        // Ground + three large spheres + at most 22 * 22 small ones
        assert!(scene.len() > 4);
        assert!(scene.len() <= 4 + 22 * 22);
        // Glass is shared, so there are fewer materials than spheres
        assert!(scene.material_count() < scene.len());

        // Straight down from above the origin lands on the glass sphere top.
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);
        let rec = scene
            .hit(&ray, Interval::new(0.001, f32::INFINITY))
            .expect("hits the center sphere");
        assert!((rec.p.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_three_spheres() {
        let scene = three_spheres();
        assert_eq!(scene.len(), 5);
        assert_eq!(scene.material_count(), 4);
    }

    #[test]
    fn test_scene_kind_from_json() {
        let kind: SceneKind = serde_json::from_str(r#""three_spheres""#).expect("valid kind");
        assert_eq!(kind, SceneKind::ThreeSpheres);
        assert_eq!(SceneKind::default(), SceneKind::Random);
    }
}
