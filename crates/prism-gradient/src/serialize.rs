//! Writing parsed gradients back out as CSS.

use std::fmt;

use prism_common::{Color, ColorFormat};

use crate::types::{GradientKind, GradientStop, ParseGradientResult};

pub fn format_color(color: &Color, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => color.to_hex(),
        ColorFormat::Rgb => color.to_rgb_string(),
    }
}

fn format_stops(stops: &[GradientStop], format: ColorFormat) -> String {
    stops
        .iter()
        .map(|stop| format!("{} {}%", format_color(&stop.color, format), stop.percentage))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ParseGradientResult {
    /// Render as a CSS gradient function, stops in their stored order.
    pub fn to_css(&self, format: ColorFormat) -> String {
        let stops = format_stops(&self.config.stops, format);
        match self.mode {
            GradientKind::LinearGradient => {
                format!("linear-gradient({}deg, {stops})", self.config.angle)
            }
            GradientKind::RadialGradient => format!(
                "radial-gradient(circle at {}% {}%, {stops})",
                self.config.position_x, self.config.position_y
            ),
        }
    }
}

impl fmt::Display for ParseGradientResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(ColorFormat::Hex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_gradient;

    #[test]
    fn linear_round_trip_is_byte_exact() {
        let inputs = [
            "linear-gradient(90deg, #e7000b 0%, #496adc 100%)",
            "linear-gradient(45deg, #ff0000 0%, #0000ff 100%)",
            "linear-gradient(180deg, #496adc 100%, #e7000b 0%)",
            "linear-gradient(0deg, #000000 10%, #ffffff80 90%)",
        ];
        for input in inputs {
            let parsed = parse_gradient(input).unwrap();
            assert_eq!(parsed.to_string(), input);
        }
    }

    #[test]
    fn radial_round_trip_is_byte_exact() {
        let input = "radial-gradient(circle at 30% 70%, #e7000b 0%, #496adc 100%)";
        let parsed = parse_gradient(input).unwrap();
        assert_eq!(parsed.to_css(ColorFormat::Hex), input);
    }

    #[test]
    fn normalizes_colors_and_defaults() {
        let parsed = parse_gradient("linear-gradient(red, rgb(0, 0, 255))").unwrap();
        assert_eq!(
            parsed.to_css(ColorFormat::Hex),
            "linear-gradient(90deg, #ff0000 0%, #0000ff 100%)"
        );
    }

    #[test]
    fn rgb_format() {
        let parsed = parse_gradient("linear-gradient(90deg, #ff0000 0%, #0000ff80 100%)").unwrap();
        assert_eq!(
            parsed.to_css(ColorFormat::Rgb),
            "linear-gradient(90deg, rgb(255, 0, 0) 0%, rgba(0, 0, 255, 0.5) 100%)"
        );
    }

    #[test]
    fn sorted_regeneration() {
        let mut parsed =
            parse_gradient("linear-gradient(90deg, #496adc 100%, #e7000b 0%)").unwrap();
        parsed.config.sort_stops();
        assert_eq!(
            parsed.to_string(),
            "linear-gradient(90deg, #e7000b 0%, #496adc 100%)"
        );
        let ids: Vec<u32> = parsed.config.stops.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
