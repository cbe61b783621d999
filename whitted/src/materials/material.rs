use std::fmt;
use std::sync::Arc;

use crate::geometry::vector3::Vector3;
use crate::materials::texture::Texture;

pub type Color = Vector3;

pub type ColorFn = Arc<dyn Fn(&Vector3) -> Color + Send + Sync>;
pub type ScalarFn = Arc<dyn Fn(&Vector3) -> f64 + Send + Sync>;

/// Surface appearance. Color channels and shininess are evaluated per hit point,
/// which is how procedural textures are expressed.
#[derive(Clone)]
pub struct Material {
    ambient: ColorFn,
    diffuse: ColorFn,
    specular: ColorFn,
    shininess: ScalarFn,

    local_weight: f64,
    reflect_weight: f64,
    refract_weight: f64,
    refractive_index: f64,
}

impl Material {

    pub fn solid(ambient: Color, diffuse: Color, specular: Color, shininess: f64) -> Self {
        Self::default()
            .with_ambient(move |_| ambient)
            .with_diffuse(move |_| diffuse)
            .with_specular(move |_| specular)
            .with_shininess(move |_| shininess)
    }

    pub fn with_ambient<F: Fn(&Vector3) -> Color + Send + Sync + 'static>(mut self, ambient: F) -> Self {
        self.ambient = Arc::new(ambient);
        self
    }

    pub fn with_diffuse<F: Fn(&Vector3) -> Color + Send + Sync + 'static>(mut self, diffuse: F) -> Self {
        self.diffuse = Arc::new(diffuse);
        self
    }

    pub fn with_specular<F: Fn(&Vector3) -> Color + Send + Sync + 'static>(mut self, specular: F) -> Self {
        self.specular = Arc::new(specular);
        self
    }

    pub fn with_shininess<F: Fn(&Vector3) -> f64 + Send + Sync + 'static>(mut self, shininess: F) -> Self {
        self.shininess = Arc::new(shininess);
        self
    }

    /// Uses the same texture for the ambient, diffuse and specular channels.
    pub fn with_texture<T: Texture + Send + Sync + 'static>(mut self, texture: T) -> Self {
        let texture = Arc::new(texture);

        let ambient = texture.clone();
        self.ambient = Arc::new(move |point: &Vector3| ambient.color_at(point));
        let diffuse = texture.clone();
        self.diffuse = Arc::new(move |point: &Vector3| diffuse.color_at(point));
        self.specular = Arc::new(move |point: &Vector3| texture.color_at(point));

        self
    }

    pub fn with_weights(mut self, local_weight: f64, reflect_weight: f64, refract_weight: f64) -> Self {
        self.local_weight = local_weight;
        self.reflect_weight = reflect_weight;
        self.refract_weight = refract_weight;
        self
    }

    pub fn with_refractive_index(mut self, refractive_index: f64) -> Self {
        self.refractive_index = refractive_index;
        self
    }

    pub fn ambient(&self, point: &Vector3) -> Color {
        (self.ambient)(point)
    }

    pub fn diffuse(&self, point: &Vector3) -> Color {
        (self.diffuse)(point)
    }

    pub fn specular(&self, point: &Vector3) -> Color {
        (self.specular)(point)
    }

    pub fn shininess(&self, point: &Vector3) -> f64 {
        (self.shininess)(point)
    }

    pub fn local_weight(&self) -> f64 {
        self.local_weight
    }

    pub fn reflect_weight(&self) -> f64 {
        self.reflect_weight
    }

    pub fn refract_weight(&self) -> f64 {
        self.refract_weight
    }

    pub fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
}

impl Default for Material {

    fn default() -> Self {
        Self {
            ambient: Arc::new(|_: &Vector3| Color::zero()),
            diffuse: Arc::new(|_: &Vector3| Color::zero()),
            specular: Arc::new(|_: &Vector3| Color::zero()),
            shininess: Arc::new(|_: &Vector3| 1.0),

            local_weight: 1.0,
            reflect_weight: 0.0,
            refract_weight: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl fmt::Debug for Material {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("local_weight", &self.local_weight)
            .field("reflect_weight", &self.reflect_weight)
            .field("refract_weight", &self.refract_weight)
            .field("refractive_index", &self.refractive_index)
            .finish()
    }
}

pub fn reflect(i: &Vector3, n: &Vector3) -> Vector3 {
    *i - *n * (2.0 * i.dot_product(n))
}

/// Snell's law for a unit incident vector `i` and a unit normal `n` facing against it.
/// `eta` is the ratio of the refractive indices. Returns `None` on total internal reflection.
pub fn refract(i: &Vector3, n: &Vector3, eta: f64) -> Option<Vector3> {
    let cos_i = n.dot_product(i);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);

    if k < 0.0 {
        return None;
    }

    Some(*i * eta - *n * (eta * cos_i + k.sqrt()))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::materials::texture::Checkerboard;

    #[test]
    fn test_solid() {
        let material = Material::solid(
            Color::new(0.1, 0.2, 0.3),
            Color::one(),
            Color::new(0.6, 0.6, 0.6),
            32.0,
        );
        let point = Vector3::new(4.0, -2.0, 1.0);

        assert_eq!(material.ambient(&point), Color::new(0.1, 0.2, 0.3));
        assert_eq!(material.diffuse(&point), Color::one());
        assert_eq!(material.specular(&point), Color::new(0.6, 0.6, 0.6));
        assert_eq!(material.shininess(&point), 32.0);
    }

    #[test]
    fn test_default_is_defined() {
        let material = Material::default();
        let point = Vector3::zero();

        assert_eq!(material.ambient(&point), Color::zero());
        assert_eq!(material.local_weight(), 1.0);
        assert_eq!(material.reflect_weight(), 0.0);
        assert_eq!(material.refract_weight(), 0.0);
        assert_eq!(material.refractive_index(), 1.0);
    }

    #[test]
    fn test_with_texture() {
        let material = Material::default().with_texture(Checkerboard::new(Color::one(), Color::zero()));

        assert_eq!(material.diffuse(&Vector3::new(0.5, 0.0, 0.5)), Color::one());
        assert_eq!(material.specular(&Vector3::new(1.5, 0.0, 0.5)), Color::zero());
    }

    #[test]
    fn test_reflect() {
        let incident = Vector3::new(1.0, -1.0, 0.0).normalized();
        let reflected = reflect(&incident, &Vector3::up());

        assert_eq!(reflected, Vector3::new(1.0, 1.0, 0.0).normalized());
    }

    #[test]
    fn test_refract_same_medium_keeps_direction() {
        let incident = Vector3::new(1.0, -2.0, 0.5).normalized();
        let refracted = refract(&incident, &Vector3::up(), 1.0).expect("expected refraction");

        assert_eq!(refracted, incident);
    }

    #[test]
    fn test_refract_bends_towards_normal() {
        let incident = Vector3::new(1.0, -1.0, 0.0).normalized();
        let refracted = refract(&incident, &Vector3::up(), 1.0 / 1.5).expect("expected refraction");

        // sin(45°) / 1.5
        let sin_t = (0.5f64).sqrt() / 1.5;
        assert_eq!(refracted, Vector3::new(sin_t, -(1.0 - sin_t * sin_t).sqrt(), 0.0));
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        let incident = Vector3::new(1.0, -0.1, 0.0).normalized();
        assert!(refract(&incident, &Vector3::up(), 1.5).is_none());
    }
}
