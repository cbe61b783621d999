use crate::geometry::vector3::Vector3;
use crate::materials::material::Color;

pub trait Texture {

    fn color_at(&self, point: &Vector3) -> Color;
}

/// Unit squares on the xz plane, alternating between two colors.
#[derive(Clone, Debug)]
pub struct Checkerboard {
    even: Color,
    odd: Color,
}

impl Checkerboard {

    pub fn new(even: Color, odd: Color) -> Self {
        Self {
            even,
            odd,
        }
    }
}

impl Texture for Checkerboard {

    fn color_at(&self, point: &Vector3) -> Color {
        if (point.x.floor() + point.z.floor()) % 2.0 == 0.0 {
            self.even
        } else {
            self.odd
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_checkerboard() {
        let texture = Checkerboard::new(Color::one(), Color::zero());

        assert_eq!(texture.color_at(&Vector3::new(0.2, 5.0, 0.7)), Color::one());
        assert_eq!(texture.color_at(&Vector3::new(1.2, 0.0, 0.7)), Color::zero());
        assert_eq!(texture.color_at(&Vector3::new(1.2, 0.0, 1.7)), Color::one());
        assert_eq!(texture.color_at(&Vector3::new(-0.5, 0.0, 0.5)), Color::zero());
        assert_eq!(texture.color_at(&Vector3::new(-0.5, 0.0, -0.5)), Color::one());
    }
}
