use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::objects::plane::Plane;
use crate::render::intersection::{Intersection, EPSILON};
use crate::scene::scene_object::SceneObject;

/// Vertex order defines the facing: the normal is `(v1 - v0) x (v2 - v0)`.
#[derive(Clone, Debug)]
pub struct Triangle {

    vertices: [Vector3; 3],
    plane: Plane,
    material: Material,
}

impl Triangle {

    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3) -> Self {
        let normal = (v1 - v0).cross_product(&(v2 - v0)).normalized();

        Self {
            vertices: [v0, v1, v2],
            plane: Plane::new(v0, normal),
            material: Material::default(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn vertices(&self) -> &[Vector3; 3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn normal(&self) -> &Vector3 {
        self.plane.normal()
    }

    /// A point is inside when the winding around it agrees for all three edges.
    pub fn in_triangle(&self, point: &Vector3) -> bool {
        if !self.plane.on_plane(point) {
            return false;
        }

        let to_vertices = [
            self.vertices[0] - *point,
            self.vertices[1] - *point,
            self.vertices[2] - *point,
        ];

        let mut crosses = [Vector3::zero(); 3];
        for i in 0..3 {
            crosses[i] = to_vertices[i].cross_product(&to_vertices[(i + 1) % 3]).normalized();
        }

        crosses[0].distance_to(&crosses[1]) < EPSILON && crosses[1].distance_to(&crosses[2]) < EPSILON
    }
}

impl SceneObject for Triangle {

    fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        let intersection = self.plane.check_intersection(ray)?;
        if !intersection.is_in_front() {
            return None;
        }

        if self.in_triangle(&ray.point(intersection.ray_distance())) {
            Some(intersection)
        } else {
            None
        }
    }

    fn normal_at(&self, _point: &Vector3) -> Vector3 {
        *self.plane.normal()
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
