use super::vector3::Vector3;

/// Half-line `origin + t * direction`, direction always has unit length.
#[derive(Clone, Debug)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {

    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Ray starting at `source` and passing through `destination`. The two points must differ.
    pub fn between(source: Vector3, destination: Vector3) -> Self {
        Self::new(source, destination - source)
    }

    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn point(&self, distance: f64) -> Vector3 {
        self.origin + self.direction * distance
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn random_point(rng: &mut impl Rng) -> Vector3 {
        Vector3::new(
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
        )
    }

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::between(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, -7.0));
        assert_eq!(*ray.direction(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_point() {
        let ray = Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.point(0.0), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(ray.point(2.5), Vector3::new(2.5, 1.0, 0.0));
    }

    #[test]
    fn test_point_at_distance_reaches_destination() {
        let mut rng = rand::thread_rng();

        for _ in 0..1000 {
            let source = random_point(&mut rng);
            let destination = random_point(&mut rng);
            if source.distance_to(&destination) < 1e-3 {
                continue;
            }

            let ray = Ray::between(source, destination);
            assert_eq!(ray.point(source.distance_to(&destination)), destination);
        }
    }
}
