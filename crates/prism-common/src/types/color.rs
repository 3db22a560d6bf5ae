use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when the color is translucent.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// CSS functional notation: `rgb(r, g, b)` or `rgba(r, g, b, alpha)`
    /// with alpha as a 0-1 fraction rounded to two decimals.
    pub fn to_rgb_string(&self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let alpha = (f64::from(self.a) / 255.0 * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
        }
    }
}
