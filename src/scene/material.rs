// material.rs - Colours and surface descriptions
//
// Colours are linear 0..1 floats, converted to CSS strings at paint time.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn scale(self, k: f32) -> Self {
        Self { r: self.r * k, g: self.g * k, b: self.b * k }
    }

    /// Component-wise product (surface colour lit by light colour)
    pub fn modulate(self, other: Rgb) -> Self {
        Self { r: self.r * other.r, g: self.g * other.g, b: self.b * other.b }
    }

    pub fn clamp(self) -> Self {
        Self { r: self.r.clamp(0.0, 1.0), g: self.g.clamp(0.0, 1.0), b: self.b.clamp(0.0, 1.0) }
    }

    pub fn css(self, alpha: f32) -> String {
        let c = self.clamp();
        format!(
            "rgba({}, {}, {}, {})",
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            alpha.clamp(0.0, 1.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blending {
    Normal,
    Additive,
}

/// Screen-facing square sprites; `size` is in world units and shrinks with depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsMaterial {
    pub size: f32,
    pub color: Rgb,
    pub opacity: f32,
    pub blending: Blending,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeMaterial {
    pub color: Rgb,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_css() {
        assert_eq!(Rgb::from_hex(0x6366f1).css(0.8), "rgba(99, 102, 241, 0.8)");
        assert_eq!(Rgb::from_hex(0x8b5cf6).css(1.0), "rgba(139, 92, 246, 1)");
    }

    #[test]
    fn css_clamps_overbright() {
        assert_eq!(Rgb::WHITE.scale(2.0).css(3.0), "rgba(255, 255, 255, 1)");
    }
}
