/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    #[inline]
    pub const fn from_srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Cheap fit of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    pub const fn from_srgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgba(r, g, b, 255)
    }

    pub fn from_catppuccin(color: &catppuccin::Color) -> Self {
        Self::from_srgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

/// Scene colors
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::from_srgb(0, 0, 0);
    pub const WHITE: Color = Color::from_srgb(255, 255, 255);
    pub const RED: Color = Color::from_srgb(255, 0, 0);
    pub const CYAN: Color = Color::from_srgb(0, 255, 255);

    /// String particles in the refraction and tension demos
    pub const SAND: Color = Color::from_srgb(0xb5, 0x9a, 0x51);
    pub const WATER: Color = Color::from_srgb(0x49, 0xba, 0xd1);
    pub const SEABED: Color = Color::from_srgb(0xe6, 0xbd, 0x5e);

    /// Window area outside the scene viewport
    pub fn letterbox() -> Color {
        Color::from_catppuccin(&catppuccin::PALETTE.mocha.colors.crust)
    }

    pub fn axis() -> Color {
        Color::from_catppuccin(&catppuccin::PALETTE.mocha.colors.surface0)
    }

    pub fn trajectory() -> Color {
        Color::from_catppuccin(&catppuccin::PALETTE.mocha.colors.overlay0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(palette::BLACK, Color::new(0.0, 0.0, 0.0, 1.0));
        let white = palette::WHITE;
        assert!((white.r - 1.0).abs() < 1e-3);
        assert_eq!(white.a, 1.0);
    }

    #[test]
    fn test_linear_is_darker_than_srgb() {
        let mid = Color::from_srgb(128, 128, 128);
        assert!(mid.r < 128.0 / 255.0);
        assert!(mid.r > 0.0);
    }

    #[test]
    fn test_with_alpha() {
        let faded = palette::CYAN.with_alpha(0.25);
        assert_eq!(faded.a, 0.25);
        assert_eq!(faded.g, palette::CYAN.g);
    }
}
