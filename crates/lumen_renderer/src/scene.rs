//! Scene: the material arena plus the aggregate of primitives.

use crate::{HitRecord, Hittable, HittableList, Material, MaterialId, Ray, Sphere};
use lumen_math::{Interval, Vec3};

/// Everything a render pass reads.
///
/// Built up front, then shared immutably by all render workers.
#[derive(Default)]
pub struct Scene {
    materials: Vec<Material>,
    objects: HittableList,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a material and return its handle.
    pub fn add_material(&mut self, material: impl Into<Material>) -> MaterialId {
        self.materials.push(material.into());
        MaterialId(self.materials.len() - 1)
    }

    /// Add a sphere referencing an existing material.
    ///
    /// Panics if `material` was not returned by this scene's
    /// [`Scene::add_material`].
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: MaterialId) {
        assert!(
            material.0 < self.materials.len(),
            "unknown material {:?}; scene has {} materials",
            material,
            self.materials.len()
        );
        self.objects.add(Box::new(Sphere::new(center, radius, material)));
    }

    /// Look up a material by handle.
    ///
    /// Every handle stored in the scene is checked by [`Scene::add_sphere`].
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        self.objects.hit(ray, ray_t)
    }
}
