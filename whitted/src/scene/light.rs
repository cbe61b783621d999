use crate::geometry::vector3::Vector3;
use crate::materials::material::{Color, Material};

pub trait Light {

    /// Local contribution of this light at `point`. `view_direction` is the direction of the incoming ray.
    fn illuminate(&self, material: &Material, point: &Vector3, normal: &Vector3, view_direction: &Vector3) -> Color;
}
