/// Hits closer than this are rejected, which keeps rays spawned on a surface
/// from hitting that surface again.
pub const EPSILON: f64 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    ray_distance: f64,
}

impl Intersection {

    pub fn new(ray_distance: f64) -> Self {
        Self {
            ray_distance,
        }
    }

    pub fn ray_distance(&self) -> f64 {
        self.ray_distance
    }

    pub fn is_in_front(&self) -> bool {
        self.ray_distance > EPSILON
    }
}
