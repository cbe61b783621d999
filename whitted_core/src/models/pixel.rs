#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {

    pub fn zero() -> Self {
        Self::black()
    }

    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
        }
    }

    /// Channels are expected in `[0, 1]`; anything outside is clamped.
    pub fn from_intensity(red: f64, green: f64, blue: f64) -> Self {
        Self::from_rgb(
            intensity_to_channel(red),
            intensity_to_channel(green),
            intensity_to_channel(blue),
        )
    }
}

fn intensity_to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    (value.max(0.0).min(1.0) * 255.0).round() as u8
}
