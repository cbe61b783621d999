use crate::geometry::{ray::Ray, vector3::Vector3};

/// Pinhole camera. The image plane sits one unit in front of `position`, spans
/// `[-1, 1]` vertically and is stretched horizontally by the aspect ratio.
#[derive(Clone, Debug)]
pub struct Camera {

    position: Vector3,
    front: Vector3,
    up: Vector3,
}

impl Camera {

    pub fn new(position: Vector3, front: Vector3, up: Vector3) -> Self {
        Self {
            position,
            front: front.normalized(),
            up: up.normalized(),
        }
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn right(&self) -> Vector3 {
        self.front.cross_product(&self.up).normalized()
    }

    /// `y` counts from the bottom row.
    pub fn ray_for_pixel(&self, x: usize, y: usize, width: usize, height: usize) -> Ray {
        let aspect_ratio = width as f64 / height as f64;
        let screen_x = 2.0 * x as f64 / width as f64 - 1.0;
        let screen_y = 2.0 * y as f64 / height as f64 - 1.0;

        let target = self.position + self.front + self.right() * (screen_x * aspect_ratio) + self.up * screen_y;

        Ray::between(self.position, target)
    }
}

impl Default for Camera {

    fn default() -> Self {
        Self::new(Vector3::new(0.0, 2.0, 3.0), Vector3::new(0.0, 0.0, -1.0), Vector3::up())
    }
}
