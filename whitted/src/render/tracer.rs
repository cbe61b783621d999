use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::{reflect, refract, Color, Material};
use crate::render::intersection::{Intersection, EPSILON};
use crate::scene::{scene::Scene, scene_object::SceneObject};

/// Number of recursion levels a primary ray may spawn before it stops contributing.
pub const MAX_DEPTH: u32 = 5;

const AIR_REFRACTIVE_INDEX: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceStats {
    /// Rays that were tested against the scene.
    pub rays_cast: usize,
    pub deepest_level: u32,
    /// Branches dropped because they reached `MAX_DEPTH`.
    pub depth_cutoffs: usize,
}

pub fn trace_ray(scene: &Scene, ray: &Ray) -> Color {
    trace_ray_with_stats(scene, ray).0
}

pub fn trace_ray_with_stats(scene: &Scene, ray: &Ray) -> (Color, TraceStats) {
    let mut stats = TraceStats::default();
    let color = trace_ray_with_depth(ray, scene, 0, &mut stats);
    (color, stats)
}

fn trace_ray_with_depth(ray: &Ray, scene: &Scene, depth: u32, stats: &mut TraceStats) -> Color {
    if depth >= MAX_DEPTH {
        stats.depth_cutoffs += 1;
        trace!("ray reached max depth at {:?}", ray.origin());
        return Color::zero();
    }

    stats.rays_cast += 1;
    stats.deepest_level = stats.deepest_level.max(depth);

    let (object, intersection) = match find_intersection(ray, scene) {
        Some(v) => v,
        None => return Color::zero(),
    };

    let hit_point = ray.point(intersection.ray_distance());
    let material = object.material();

    // leaving the volume: the normal has to face the ray
    let exiting = object.is_ray_inside(ray);
    let mut hit_normal = object.normal_at(&hit_point).normalized();
    if exiting {
        hit_normal = -hit_normal;
    }

    let mut color = Color::zero();

    if !exiting {
        color += shade(scene, material, &hit_point, &hit_normal, ray) * material.local_weight();
    }

    if material.reflect_weight() > EPSILON {
        let direction = reflect(ray.direction(), &hit_normal);
        let reflected = Ray::between(hit_point, hit_point + direction);

        color += trace_ray_with_depth(&reflected, scene, depth + 1, stats) * material.reflect_weight();
    }

    if material.refract_weight() > EPSILON {
        let (current_index, next_index) = if exiting {
            (material.refractive_index(), AIR_REFRACTIVE_INDEX)
        } else {
            (AIR_REFRACTIVE_INDEX, material.refractive_index())
        };

        match refract(ray.direction(), &hit_normal, current_index / next_index) {
            Some(direction) => {
                let refracted = Ray::between(hit_point, hit_point + direction);
                color += trace_ray_with_depth(&refracted, scene, depth + 1, stats) * material.refract_weight();
            },
            None => trace!("total internal reflection at {:?}", hit_point),
        }
    }

    color
}

/// Nearest object strictly in front of the ray origin.
pub fn find_intersection<'a>(ray: &Ray, scene: &'a Scene) -> Option<(&'a (dyn SceneObject + Sync + Send), Intersection)> {
    let mut result = None;
    let mut min_distance = f64::MAX;

    for object in scene.objects() {
        if let Some(intersection) = object.check_intersection(ray) {
            if intersection.is_in_front() && intersection.ray_distance() < min_distance {
                min_distance = intersection.ray_distance();
                result = Some((&**object, intersection));
            }
        }
    }

    result
}

/// Sum of all lights at the point.
pub fn shade(scene: &Scene, material: &Material, point: &Vector3, normal: &Vector3, ray: &Ray) -> Color {
    let mut color = Color::zero();

    for light in scene.lights() {
        color += light.illuminate(material, point, normal, ray.direction());
    }

    color
}
