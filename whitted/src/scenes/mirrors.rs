use crate::geometry::vector3::Vector3;
use crate::materials::material::{Color, Material};
use crate::materials::texture::Checkerboard;
use crate::objects::{plane::Plane, sphere::Sphere, triangle::Triangle};
use crate::scene::{directional_light::DirectionalLight, scene::Scene};
use crate::scenes::provider::SceneProvider;

/// Mirror ball and a mirror triangle over a reflective floor. Most rays here run into the depth limit.
pub struct MirrorsSceneProvider;

impl SceneProvider for MirrorsSceneProvider {

    fn scene(&self) -> Scene {
        let mut scene = Scene::new();

        scene.add_light(Box::new(DirectionalLight::new(
            Color::new(0.15, 0.15, 0.15),
            Color::new(0.7, 0.7, 0.7),
            Color::new(0.8, 0.8, 0.8),
            Vector3::new(0.3, -1.0, -0.6),
        )));

        let floor = Material::default()
            .with_texture(Checkerboard::new(Color::new(0.9, 0.9, 0.9), Color::new(0.1, 0.1, 0.3)))
            .with_shininess(|_| 16.0)
            .with_weights(0.5, 0.5, 0.0);
        scene.add_object(Box::new(Plane::new(Vector3::zero(), Vector3::up()).with_material(floor)));

        let mirror = Material::solid(Color::new(0.1, 0.1, 0.1), Color::new(0.2, 0.2, 0.2), Color::one(), 64.0)
            .with_weights(0.1, 0.9, 0.0);
        scene.add_object(Box::new(
            Sphere::new(Vector3::new(-1.2, 1.0, -1.0), 1.0).with_material(mirror.clone())
        ));
        scene.add_object(Box::new(
            Triangle::new(Vector3::new(0.5, 0.0, -3.0), Vector3::new(3.5, 0.0, -2.0), Vector3::new(1.5, 3.0, -2.5))
                .with_material(mirror)
        ));

        let glass = Material::solid(Color::new(0.8, 0.9, 1.0), Color::new(0.8, 0.9, 1.0), Color::one(), 32.0)
            .with_weights(0.2, 0.1, 0.7)
            .with_refractive_index(1.33);
        scene.add_object(Box::new(Sphere::new(Vector3::new(1.0, 0.6, 0.5), 0.6).with_material(glass)));

        scene
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::render::tracer::MAX_DEPTH;
    use crate::scene::camera::Camera;

    #[test]
    fn test_mirrors_scene_stays_bounded() {
        let scene = MirrorsSceneProvider.scene();
        let camera = Camera::default();

        for y in 0..8 {
            for x in 0..8 {
                let (_, stats) = scene.trace_ray_with_stats(&camera.ray_for_pixel(x * 8, y * 8, 64, 64));
                assert!(stats.rays_cast < 1 << MAX_DEPTH);
            }
        }
    }
}
