use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::render::intersection::Intersection;

pub trait SceneObject {

    /// Nearest root of the ray/surface equation. Callers filter out roots that are not in front of the ray.
    fn check_intersection(&self, ray: &Ray) -> Option<Intersection>;

    fn normal_at(&self, point: &Vector3) -> Vector3;

    /// Whether the ray starts inside this volume and leaves it through the surface.
    fn is_ray_inside(&self, ray: &Ray) -> bool;

    fn material(&self) -> &Material;

    fn set_material(&mut self, material: Material);
}
