use super::scene_object::SceneObject;
use crate::geometry::ray::Ray;
use crate::materials::material::Color;
use crate::render::tracer::{self, TraceStats};
use crate::scene::light::Light;

/// Owns every object and light. Built up front, then only read while tracing.
pub struct Scene {
    objects: Vec<Box<dyn SceneObject + Sync + Send>>,
    lights: Vec<Box<dyn Light + Sync + Send>>,
}

impl Scene {

    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn add_object(&mut self, obj: Box<dyn SceneObject + Sync + Send>) {
        self.objects.push(obj)
    }

    pub fn objects(&self) -> &Vec<Box<dyn SceneObject + Sync + Send>> {
        &self.objects
    }

    pub fn add_light(&mut self, light: Box<dyn Light + Sync + Send>) {
        self.lights.push(light)
    }

    pub fn lights(&self) -> &Vec<Box<dyn Light + Sync + Send>> {
        &self.lights
    }

    pub fn trace_ray(&self, ray: &Ray) -> Color {
        tracer::trace_ray(self, ray)
    }

    pub fn trace_ray_with_stats(&self, ray: &Ray) -> (Color, TraceStats) {
        tracer::trace_ray_with_stats(self, ray)
    }
}

impl Default for Scene {

    fn default() -> Self {
        Self::new()
    }
}
