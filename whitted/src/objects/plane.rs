use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::render::intersection::{Intersection, EPSILON};
use crate::scene::scene_object::SceneObject;

#[derive(Clone, Debug)]
pub struct Plane {

    point: Vector3,
    normal: Vector3,
    material: Material,
}

impl Plane {

    pub fn new(point: Vector3, normal: Vector3) -> Self {
        Self {
            point,
            normal: normal.normalized(),
            material: Material::default(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn point(&self) -> &Vector3 {
        &self.point
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    pub fn on_plane(&self, point: &Vector3) -> bool {
        (point - &self.point).dot_product(&self.normal).abs() < EPSILON
    }
}

impl SceneObject for Plane {

    fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        let angle = self.normal.dot_product(ray.direction());
        if angle.abs() < EPSILON {
            return None;
        }

        let offset = (ray.origin() - &self.point).dot_product(&self.normal);
        Some(Intersection::new(-offset / angle))
    }

    fn normal_at(&self, _point: &Vector3) -> Vector3 {
        self.normal
    }

    fn is_ray_inside(&self, _ray: &Ray) -> bool {
        false
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn set_material(&mut self, material: Material) {
        self.material = material;
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn random_vector(rng: &mut impl Rng) -> Vector3 {
        Vector3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn test_intersection() {
        let plane = Plane::new(Vector3::zero(), Vector3::new(0.0, 2.0, 0.0));
        let ray = Ray::between(Vector3::new(1.0, 3.0, 1.0), Vector3::new(1.0, 0.0, 1.0));

        let intersection = plane.check_intersection(&ray).expect("expected ray to hit the plane");
        assert!((intersection.ray_distance() - 3.0).abs() < EPSILON);
        assert!(plane.on_plane(&ray.point(intersection.ray_distance())));
    }

    #[test]
    fn test_intersection_behind_origin() {
        let plane = Plane::new(Vector3::zero(), Vector3::up());
        let ray = Ray::new(Vector3::new(0.0, 2.0, 0.0), Vector3::up());

        let intersection = plane.check_intersection(&ray).expect("expected a root behind the ray");
        assert!((intersection.ray_distance() + 2.0).abs() < EPSILON);
        assert!(!intersection.is_in_front());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let mut rng = rand::thread_rng();

        for _ in 0..1000 {
            let normal = random_vector(&mut rng).normalized();
            if normal.length() < 0.5 {
                continue;
            }
            let plane = Plane::new(random_vector(&mut rng), normal);

            let direction = normal.cross_product(&random_vector(&mut rng));
            if direction.length() < 1e-3 {
                continue;
            }

            let ray = Ray::new(random_vector(&mut rng), direction);
            assert!(plane.check_intersection(&ray).is_none());
        }
    }

    #[test]
    fn test_constant_normal() {
        let plane = Plane::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 5.0));

        assert_eq!(plane.normal_at(&Vector3::new(3.0, -1.0, 0.0)), Vector3::new(0.0, 0.0, 1.0));
        assert!(!plane.is_ray_inside(&Ray::new(Vector3::zero(), Vector3::up())));
    }

    #[test]
    fn test_on_plane() {
        let plane = Plane::new(Vector3::new(0.0, 1.0, 0.0), Vector3::up());

        assert!(plane.on_plane(&Vector3::new(12.0, 1.0, -3.0)));
        assert!(!plane.on_plane(&Vector3::new(12.0, 1.1, -3.0)));
    }
}
