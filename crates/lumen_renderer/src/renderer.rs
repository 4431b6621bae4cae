//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction and 8-bit quantization
//! - Row-band parallelism on a rayon thread pool

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use lumen_math::sampling::gen_f32;
use lumen_math::{Color, Interval};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult, RenderResult};
use crate::frame::{Frame, Rgb};
use crate::partition::{partition_rows, RowRange};
use crate::{Camera, Hittable, Progress, Ray, Scatter, Scene};

/// Lower bound of the hit window; keeps bounced rays from re-hitting the
/// surface they start on (shadow acne).
pub const HIT_EPSILON: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub image_width: u32,
    /// Width over height; the image height is derived from it
    pub aspect_ratio: f32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Worker threads; `None` uses the available hardware parallelism
    pub threads: Option<usize>,
    /// Base seed of the per-scanline random streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 1280,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            threads: None,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Image height derived from width and aspect ratio.
    pub fn image_height(&self) -> u32 {
        (self.image_width as f32 / self.aspect_ratio) as u32
    }

    /// Check that a frame can be rendered with these settings.
    ///
    /// Both dimensions must be at least 2 because sample coordinates are
    /// normalized by `width - 1` and `height - 1`.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigError::AspectRatio(self.aspect_ratio));
        }
        if self.image_width < 2 {
            return Err(ConfigError::ImageWidth(self.image_width));
        }
        if self.image_height() < 2 {
            return Err(ConfigError::ImageHeight(self.image_height()));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::NoSamples);
        }
        if self.threads == Some(0) {
            return Err(ConfigError::NoThreads);
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and multiplying in each attenuation,
/// until the ray escapes to the sky, is absorbed, or `depth` runs out.
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = scene.hit(ray, Interval::new(HIT_EPSILON, f32::INFINITY)) else {
        return sky_gradient(ray);
    };

    match scene.material(rec.material).scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, scene, depth - 1, rng),
        // Ray was absorbed
        None => Color::ZERO,
    }
}

/// Compute sky gradient background: white at the horizon below, blue above.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - t) + blue * t
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Tone-map a sum of `samples` radiance samples to 8-bit RGB.
///
/// Averages, applies gamma 2, clamps to `[0, 0.999]` and scales by 256, so
/// full white lands on 255.
pub fn quantize(sum: Color, samples: u32) -> Rgb {
    let scale = 1.0 / samples as f32;
    let channel = |c: f32| (256.0 * Interval::INTENSITY.clamp(linear_to_gamma(scale * c))) as u8;
    [channel(sum.x), channel(sum.y), channel(sum.z)]
}

/// Sum `samples_per_pixel` jittered samples for pixel `(i, j)`.
///
/// `j` counts from the bottom of the image. The result is the raw sum;
/// [`quantize`] divides by the sample count. `config` must pass
/// [`RenderConfig::validate`].
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    i: u32,
    j: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width_span = (config.image_width - 1) as f32;
    let height_span = (config.image_height() - 1) as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = (i as f32 + gen_f32(rng)) / width_span;
        let v = (j as f32 + gen_f32(rng)) / height_span;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, scene, config.max_depth, rng);
    }

    pixel_color
}

/// Random stream owned by logical scanline `j`.
///
/// Streams depend only on the seed and the scanline, so the image does not
/// change with the number of workers or the order they run in.
pub fn scanline_rng(seed: u64, j: u32) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ u64::from(j))
}

/// Render one band of raster rows into its slice of the frame.
fn render_rows(
    range: RowRange,
    band: &mut [Rgb],
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    finished: &AtomicU32,
    progress: &dyn Progress,
) {
    let width = config.image_width;
    let height = config.image_height();

    for (row, pixels) in range.rows().zip(band.chunks_mut(width as usize)) {
        // Raster row 0 is the top; logical row 0 is the bottom.
        let j = height - 1 - row;
        let mut rng = scanline_rng(config.seed, j);

        for (i, pixel) in (0..width).zip(pixels.iter_mut()) {
            let sum = render_pixel(camera, scene, i, j, config, &mut rng);
            *pixel = quantize(sum, config.samples_per_pixel);
        }

        let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
        progress.scanline_done(done, height);
    }
}

/// Render the entire scene to a frame.
///
/// Rows are split into one contiguous band per worker; every band is
/// rendered independently straight into its own part of the frame buffer.
/// Returns once all workers are done.
pub fn render_frame(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    progress: &dyn Progress,
) -> RenderResult<Frame> {
    config.validate()?;

    let width = config.image_width;
    let height = config.image_height();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.unwrap_or(0))
        .build()?;
    let workers = pool.current_num_threads();
    if workers > height as usize {
        log::warn!(
            "{} workers requested but the image only has {} rows; using {}",
            workers,
            height,
            height
        );
    }

    let ranges = partition_rows(height, workers);
    log::debug!("Rendering {} row bands on {} threads", ranges.len(), workers);

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth
    );
    let start = Instant::now();

    let mut frame = Frame::new(width, height);
    let finished = AtomicU32::new(0);

    pool.install(|| {
        frame
            .split_rows_mut(&ranges)
            .into_par_iter()
            .for_each(|(range, band)| {
                render_rows(range, band, camera, scene, config, &finished, progress)
            });
    });

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(frame)
}
