//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    MaterialId, Ray,
};
use lumen_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// A zero radius is a precondition violation left to scene construction;
    /// it is not rejected here.
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        // Tangent rays (discriminant == 0) count as hits.
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range. A zero-length
        // direction yields NaN/inf roots, which `surrounds` rejects.
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(ray, root, outward_normal, self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_interval() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId(3));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, unit_interval()).expect("should hit");
        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!((rec.p - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-6);
        assert_eq!(rec.material, MaterialId(3));
    }

    #[test]
    fn test_sphere_front_face_normal_points_outward() {
        let center = Vec3::new(0.0, 0.0, -3.0);
        let sphere = Sphere::new(center, 1.0, MaterialId(0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere.hit(&ray, unit_interval()).expect("should hit");
        assert!(rec.front_face);
        assert!((rec.normal.length() - 1.0).abs() < 1e-6);
        // Normal points away from the center, back towards the ray origin.
        assert!((rec.p - center).dot(rec.normal) > 0.0);
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, MaterialId(0));
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, unit_interval()).expect("should hit");
        // Near root is behind the origin, so the far root is used.
        assert!((rec.t - 2.0).abs() < 1e-6);
        assert!(!rec.front_face);
        assert!((rec.normal - Vec3::NEG_X).length() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, MaterialId(0));

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, unit_interval()).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, MaterialId(0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(sphere.hit(&ray, unit_interval()).is_none());
    }

    #[test]
    fn test_sphere_tangent_counts_as_hit() {
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, -5.0), 1.0, MaterialId(0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere.hit(&ray, unit_interval()).expect("tangent ray should hit");
        assert!((rec.t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_interval_excludes_roots() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, MaterialId(0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Both roots (2 and 4) lie outside (0.001, 1.5).
        assert!(sphere.hit(&ray, Interval::new(0.001, 1.5)).is_none());
        // Only the far root lies inside (3, 10).
        let rec = sphere.hit(&ray, Interval::new(3.0, 10.0)).expect("far root");
        assert!((rec.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_length_direction_does_not_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, MaterialId(0));
        let ray = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(sphere.hit(&ray, unit_interval()).is_none());
    }
}
