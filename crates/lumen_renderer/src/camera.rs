//! Thin-lens camera for ray generation.

use crate::Ray;
use lumen_math::sampling::random_in_unit_disk;
use lumen_math::{Quat, Vec3};
use rand::RngCore;
use serde::Deserialize;

/// Camera placement and lens, as configured by the user.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub view_up: Vec3,
    /// Vertical field of view in degrees
    pub vertical_fov: f32,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f32,
    /// Distance from the lens to the plane of perfect focus
    pub focus_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::new(13.0, 2.0, 3.0),
            look_at: Vec3::ZERO,
            view_up: Vec3::Y,
            vertical_fov: 20.0,
            aperture: 0.1,
            focus_distance: 10.0,
        }
    }
}

impl CameraSettings {
    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, view_up: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.view_up = view_up;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vertical_fov: f32, aperture: f32, focus_distance: f32) -> Self {
        self.vertical_fov = vertical_fov;
        self.aperture = aperture;
        self.focus_distance = focus_distance;
        self
    }

    /// Same settings with `look_from` rotated by `angle` radians about the
    /// world Y axis through the origin.
    pub fn orbit(&self, angle: f32) -> Self {
        Self {
            look_from: Quat::from_rotation_y(angle) * self.look_from,
            ..*self
        }
    }
}

/// Camera for generating rays into the scene.
///
/// Immutable once built; a new camera is built for every frame.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Derive the camera basis and viewport from `settings`.
    pub fn new(settings: &CameraSettings, aspect_ratio: f32) -> Self {
        let theta = settings.vertical_fov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // w points backwards, from the target to the eye
        let w = (settings.look_from - settings.look_at).normalize();
        let u = settings.view_up.cross(w).normalize();
        let v = w.cross(u);

        let origin = settings.look_from;
        let horizontal = settings.focus_distance * viewport_width * u;
        let vertical = settings.focus_distance * viewport_height * v;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - settings.focus_distance * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: settings.aperture / 2.0,
        }
    }

    /// Generate a ray through image-plane coordinates `(s, t)` in `[0, 1]`,
    /// `(0, 0)` being the lower-left corner, jittered over the lens.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.u * rd.x + self.v * rd.y
        } else {
            Vec3::ZERO
        };

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Orthonormal camera basis `(u, v, w)`.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}
