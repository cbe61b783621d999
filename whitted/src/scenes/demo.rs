use crate::geometry::vector3::Vector3;
use crate::materials::material::{Color, Material};
use crate::materials::texture::Checkerboard;
use crate::objects::{plane::Plane, sphere::Sphere};
use crate::scene::{directional_light::DirectionalLight, scene::Scene};
use crate::scenes::provider::SceneProvider;

/// Glass ball resting on a checkerboard floor.
pub struct DemoSceneProvider;

impl SceneProvider for DemoSceneProvider {

    fn scene(&self) -> Scene {
        let mut scene = Scene::new();

        scene.add_light(Box::new(DirectionalLight::new(
            Color::new(0.2, 0.2, 0.2),
            Color::new(0.6, 0.6, 0.6),
            Color::one(),
            Vector3::new(-0.5, -1.0, -1.0),
        )));

        let floor = Material::default()
            .with_texture(Checkerboard::new(Color::one(), Color::zero()))
            .with_shininess(|_| 32.0)
            .with_weights(0.7, 0.3, 0.0);
        scene.add_object(Box::new(Plane::new(Vector3::zero(), Vector3::up()).with_material(floor)));

        let glass = Material::solid(Color::one(), Color::one(), Color::new(0.6, 0.6, 0.6), 32.0)
            .with_weights(0.6, 0.2, 0.2)
            .with_refractive_index(1.5);
        scene.add_object(Box::new(Sphere::new(Vector3::new(0.0, 1.0, 0.0), 1.0).with_material(glass)));

        scene
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::geometry::ray::Ray;

    #[test]
    fn test_demo_scene() {
        let scene = DemoSceneProvider.scene();

        assert_eq!(scene.objects().len(), 2);
        assert_eq!(scene.lights().len(), 1);
    }

    #[test]
    fn test_floor_pattern_is_visible() {
        let scene = DemoSceneProvider.scene();
        let origin = Vector3::new(0.0, 2.0, 3.0);

        let white = scene.trace_ray(&Ray::between(origin, Vector3::new(2.5, 0.0, 2.5)));
        let black = scene.trace_ray(&Ray::between(origin, Vector3::new(1.5, 0.0, 2.5)));

        assert!(white.x > black.x);
    }
}
