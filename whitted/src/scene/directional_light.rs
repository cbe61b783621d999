use crate::geometry::vector3::Vector3;
use crate::materials::material::{Color, Material};
use crate::scene::light::Light;

/// Light arriving from infinitely far away along `direction`.
#[derive(Clone, Debug)]
pub struct DirectionalLight {

    ambient: Color,
    diffuse: Color,
    specular: Color,
    direction: Vector3,
}

impl DirectionalLight {

    pub fn new(ambient: Color, diffuse: Color, specular: Color, direction: Vector3) -> Self {
        DirectionalLight {
            ambient,
            diffuse,
            specular,
            direction,
        }
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }
}

impl Light for DirectionalLight {

    fn illuminate(&self, material: &Material, point: &Vector3, normal: &Vector3, view_direction: &Vector3) -> Color {
        let ambient = self.ambient * material.ambient(point);

        let to_light = (-self.direction).normalized();
        let diffuse_factor = normal.dot_product(&to_light).max(0.0);
        let diffuse = self.diffuse * material.diffuse(point) * diffuse_factor;

        // halfway between the reversed view direction and the light
        let halfway = (-*view_direction + to_light).normalized();
        let specular_factor = halfway.dot_product(normal).max(0.0).powf(material.shininess(point));
        let specular = self.specular * material.specular(point) * specular_factor;

        ambient + diffuse + specular
    }
}
