//! Color parsing and validation.
//!
//! Gradient stops are validated through the [`ColorParser`] trait so callers
//! can swap in their own color grammar. The default, [`CssColorParser`],
//! understands everything `csscolorparser` does: hex (`#rgb`, `#rgba`,
//! `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()`,
//! named colors and `transparent`.


use prism_common::{Color, ColorError};

/// A source of truth for "is this string a color, and which one".
pub trait ColorParser {
    fn parse_color(&self, input: &str) -> Result<Color, ColorError>;

    fn is_valid(&self, input: &str) -> bool {
        self.parse_color(input).is_ok()
    }
}

/// CSS color parser backed by `csscolorparser`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorParser;

impl ColorParser for CssColorParser {
    fn parse_color(&self, input: &str) -> Result<Color, ColorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorError::Invalid("empty color".into()));
        }
        // csscolorparser reads `ff0000` as hex; CSS requires the `#`.
        if input.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Invalid(format!("{input}: hex color without `#`")));
        }
        let parsed: csscolorparser::Color = input
            .parse()
            .map_err(|e| ColorError::Invalid(format!("{input}: {e}")))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Color::from_rgba(r, g, b, a))
    }
}

/// Parse a color string with the default [`CssColorParser`].
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    CssColorParser.parse_color(s)
}

/// Validate that a string is a color the default parser accepts.
pub fn validate_color(s: &str) -> bool {
    CssColorParser.is_valid(s)
}
