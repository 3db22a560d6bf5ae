//! Color mode detection.

use prism_common::ColorMode;

/// Strip a single trailing `;` and surrounding whitespace.
pub fn clean_value(value: &str) -> &str {
    value.strip_suffix(';').unwrap_or(value).trim()
}

/// Classify a CSS color value by substring containment.
///
/// This is a loose check: a string that merely contains `linear-gradient`
/// anywhere is reported as a linear gradient. Empty input is monochrome.
pub fn detect_color_mode(value: &str) -> ColorMode {
    if value.is_empty() {
        return ColorMode::Monochrome;
    }

    let clean = clean_value(value);
    if clean.contains("linear-gradient") {
        ColorMode::LinearGradient
    } else if clean.contains("radial-gradient") {
        ColorMode::RadialGradient
    } else {
        ColorMode::Monochrome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_linear_gradient() {
        assert_eq!(
            detect_color_mode("linear-gradient(90deg, red, blue)"),
            ColorMode::LinearGradient
        );
    }

    #[test]
    fn detects_radial_gradient() {
        assert_eq!(
            detect_color_mode("radial-gradient(circle at 50% 50%, red, blue)"),
            ColorMode::RadialGradient
        );
    }

    #[test]
    fn non_gradients_are_monochrome() {
        assert_eq!(detect_color_mode("#ff0000"), ColorMode::Monochrome);
        assert_eq!(detect_color_mode("rgb(255, 0, 0)"), ColorMode::Monochrome);
        assert_eq!(detect_color_mode(""), ColorMode::Monochrome);
        assert_eq!(detect_color_mode("   ;"), ColorMode::Monochrome);
        assert_eq!(
            detect_color_mode("conic-gradient(red, blue)"),
            ColorMode::Monochrome
        );
    }

    #[test]
    fn detection_is_not_anchored() {
        assert_eq!(
            detect_color_mode("background: repeating-linear-gradient(red, blue);"),
            ColorMode::LinearGradient
        );
    }

    #[test]
    fn linear_wins_when_both_present() {
        assert_eq!(
            detect_color_mode("radial-gradient(red, blue), linear-gradient(red, blue)"),
            ColorMode::LinearGradient
        );
    }

    #[test]
    fn clean_value_strips_one_semicolon_then_trims() {
        assert_eq!(clean_value(" red ;"), "red");
        assert_eq!(clean_value("red;;"), "red;");
        assert_eq!(clean_value("red; "), "red;");
    }
}
