use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::render::intersection::{Intersection, EPSILON};
use crate::scene::scene_object::SceneObject;

#[derive(Clone, Debug)]
pub struct Sphere {

    center: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {

    pub fn new(center: Vector3, radius: f64) -> Self {
        Self {
            center,
            radius,
            material: Material::default(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn center(&self) -> &Vector3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn contains(&self, point: &Vector3) -> bool {
        point.distance_to(&self.center) < self.radius + EPSILON
    }
}

impl SceneObject for Sphere {

    fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        // |origin + t * direction - center|**2 = radius**2 expands to a * t**2 + b * t + c = 0 with
        // a = |direction|**2
        // b = 2 * dot(origin - center, direction)
        // c = |origin - center|**2 - radius**2
        let to_origin = ray.origin() - &self.center;

        let a = ray.direction().length_squared();
        let b = 2.0 * to_origin.dot_product(ray.direction());
        let mut c = to_origin.length_squared() - self.radius.powi(2);
        if c.abs() < EPSILON {
            // origin is on the surface, keep the root at zero exact
            c = 0.0;
        }

        let discriminant = b.powi(2) - 4.0 * a * c;
        if discriminant < EPSILON {
            return None;
        }

        let discriminant = discriminant.sqrt();
        let far = (-b + discriminant) / (2.0 * a);
        let near = (-b - discriminant) / (2.0 * a);

        if far < EPSILON && near < EPSILON {
            None
        } else if near > EPSILON {
            Some(Intersection::new(near))
        } else {
            Some(Intersection::new(far))
        }
    }

    fn normal_at(&self, point: &Vector3) -> Vector3 {
        (point - &self.center).normalized()
    }

    fn is_ray_inside(&self, ray: &Ray) -> bool {
        self.contains(ray.origin()) && self.check_intersection(ray).map(|v| v.is_in_front()).unwrap_or(false)
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

    #[test]
    fn test_intersection_towards_center() {
        let mut rng = rand::thread_rng();

        for _ in 0..1000 {
            let center = Vector3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            let radius = rng.gen_range(0.1..5.0);
            let sphere = Sphere::new(center, radius);

            let direction = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if direction.length() < 0.1 {
                continue;
            }
            let distance = radius + rng.gen_range(0.5..20.0);
            let origin = center + direction.normalized() * distance;

            let ray = Ray::between(origin, center);
            let intersection = sphere.check_intersection(&ray).expect("expected ray to hit the sphere");

            assert!((intersection.ray_distance() - (distance - radius)).abs() < EPSILON);
            assert!((ray.point(intersection.ray_distance()).distance_to(&center) - radius).abs() < EPSILON);
        }
    }

    #[test]
    fn test_miss() {
        let sphere = Sphere::new(Vector3::zero(), 1.0);
        let ray = Ray::new(Vector3::new(0.0, 2.0, 5.0), Vector3::new(0.0, 0.0, -1.0));

        assert!(sphere.check_intersection(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new(Vector3::zero(), 1.0);
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));

        assert!(sphere.check_intersection(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let sphere = Sphere::new(Vector3::zero(), 2.0);
        let ray = Ray::new(Vector3::new(0.0, 0.5, 0.0), Vector3::up());

        let intersection = sphere.check_intersection(&ray).expect("expected ray to leave the sphere");
        assert!((intersection.ray_distance() - 1.5).abs() < EPSILON);
        assert!(sphere.is_ray_inside(&ray));
    }

    #[test]
    fn test_ray_from_surface() {
        let sphere = Sphere::new(Vector3::new(0.0, 1.0, 0.0), 1.0);
        let entry = Vector3::new(0.0, 1.0, 1.0);

        let inwards = Ray::new(entry, Vector3::new(0.0, 0.0, -1.0));
        let intersection = sphere.check_intersection(&inwards).expect("expected ray to cross the sphere");
        assert!((intersection.ray_distance() - 2.0).abs() < EPSILON);
        assert!(sphere.is_ray_inside(&inwards));

        let outwards = Ray::new(entry, Vector3::new(0.0, 0.0, 1.0));
        assert!(sphere.check_intersection(&outwards).is_none());
        assert!(!sphere.is_ray_inside(&outwards));
    }

    #[test]
    fn test_normal_points_outwards() {
        let sphere = Sphere::new(Vector3::new(1.0, 1.0, 1.0), 2.0);

        assert_eq!(sphere.normal_at(&Vector3::new(1.0, 3.0, 1.0)), Vector3::up());
        assert_eq!(sphere.normal_at(&Vector3::new(-1.0, 1.0, 1.0)), Vector3::new(-1.0, 0.0, 0.0));
    }
}
