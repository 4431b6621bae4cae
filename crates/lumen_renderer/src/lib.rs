//! Lumen Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for sphere scenes with diffuse, metal and
//! glass materials. Frames are rendered in parallel row bands and can be
//! chained into camera sweeps.

mod camera;
mod error;
mod frame;
mod hittable;
mod material;
mod partition;
mod progress;
mod renderer;
mod scene;
mod sphere;
mod sweep;

pub use camera::{Camera, CameraSettings};
pub use error::{
    ConfigError, ConfigResult, OutputError, OutputResult, RenderError, RenderResult,
};
pub use frame::{Frame, ImageFormat, Rgb};
pub use hittable::{face_normal, HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, MaterialId, Metal, Scatter, ScatterResult};
pub use partition::{partition_rows, RowRange};
pub use progress::{LogProgress, NoProgress, Progress};
pub use renderer::{
    linear_to_gamma, quantize, ray_color, render_frame, render_pixel, scanline_rng, sky_gradient,
    RenderConfig, HIT_EPSILON,
};
pub use scene::Scene;
pub use sphere::Sphere;
pub use sweep::{render_sweep, SweepConfig};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Interval, Ray, Vec3};

#[cfg(test)]
pub(crate) mod test_util {
    use crate::{Dielectric, Lambertian, Metal, Scene};
    use lumen_math::{Color, Vec3};
    use rand::RngCore;

    /// Generator returning the same word forever.
    pub struct FixedRng(u32);

    impl FixedRng {
        /// `gen::<f32>()` yields just below 1.0.
        pub fn high() -> Self {
            Self(u32::MAX)
        }

        /// `gen::<f32>()` yields 0.0.
        pub fn low() -> Self {
            Self(0)
        }
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            (u64::from(self.0) << 32) | u64::from(self.0)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0 as u8);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// Route `log` output through the test harness.
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Ground plus one sphere of each material.
    pub fn three_spheres() -> Scene {
        let mut scene = Scene::new();
        let ground = scene.add_material(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
        let center = scene.add_material(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
        let left = scene.add_material(Dielectric::new(1.5));
        let right = scene.add_material(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3));

        scene.add_sphere(Vec3::new(0.0, -100.5, -1.0), 100.0, ground);
        scene.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, center);
        scene.add_sphere(Vec3::new(-1.0, 0.0, -1.0), 0.5, left);
        scene.add_sphere(Vec3::new(1.0, 0.0, -1.0), 0.5, right);
        scene
    }
}
