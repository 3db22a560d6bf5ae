//! Gradient string parsing.
//!
//! `value` → clean → detect mode → split arguments → strip directive →
//! parse stops. Every failure along the way collapses to `None`.

mod directive;
mod stops;


use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use prism_common::ColorMode;

use crate::colors::{ColorParser, CssColorParser};
use crate::mode::{clean_value, detect_color_mode};
use crate::tokenize::split_gradient_parts;
use crate::types::{GradientConfig, GradientKind, ParseGradientResult};

use directive::{extract_angle, extract_position};
use stops::parse_stops;

// Arguments may not span a line terminator (`\n`, `\r`, U+2028, U+2029).
static LINEAR_GRADIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^linear-gradient\(([^\n\r\x{2028}\x{2029}]*)\)$").unwrap()
});

static RADIAL_GRADIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^radial-gradient\(([^\n\r\x{2028}\x{2029}]*)\)$").unwrap()
});

/// Parse a CSS gradient using the default [`CssColorParser`].
///
/// Returns `None` for empty input, monochrome values, strings that are not a
/// single whole `linear-gradient(...)` / `radial-gradient(...)` call, and
/// gradients without a single usable color stop. A trailing `;` is ignored.
pub fn parse_gradient(value: &str) -> Option<ParseGradientResult> {
    parse_gradient_with(value, &CssColorParser)
}

/// Parse a CSS gradient, validating stop colors with `parser`.
pub fn parse_gradient_with<P>(value: &str, parser: &P) -> Option<ParseGradientResult>
where
    P: ColorParser + ?Sized,
{
    if value.is_empty() {
        return None;
    }

    let clean = clean_value(value);
    match detect_color_mode(clean) {
        ColorMode::LinearGradient => parse_linear_gradient(clean, parser),
        ColorMode::RadialGradient => parse_radial_gradient(clean, parser),
        ColorMode::Monochrome => None,
    }
}

/// Read a `[0-9]+` capture, saturating at `u32::MAX` instead of failing.
fn parse_digits(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn function_arguments<'a>(re: &Regex, value: &'a str) -> Option<&'a str> {
    let caps = re.captures(value)?;
    caps.get(1).map(|m| m.as_str())
}

fn parse_linear_gradient<P>(value: &str, parser: &P) -> Option<ParseGradientResult>
where
    P: ColorParser + ?Sized,
{
    let content = function_arguments(&LINEAR_GRADIENT_RE, value)?;
    let (angle, stop_parts) = extract_angle(split_gradient_parts(content));

    let stops = parse_stops(&stop_parts, parser);
    if stops.is_empty() {
        debug!("linear gradient has no usable stops: {value}");
        return None;
    }

    Some(ParseGradientResult {
        mode: GradientKind::LinearGradient,
        config: GradientConfig::linear(angle, stops),
    })
}

fn parse_radial_gradient<P>(value: &str, parser: &P) -> Option<ParseGradientResult>
where
    P: ColorParser + ?Sized,
{
    let content = function_arguments(&RADIAL_GRADIENT_RE, value)?;
    let ((position_x, position_y), stop_parts) = extract_position(split_gradient_parts(content));

    let stops = parse_stops(&stop_parts, parser);
    if stops.is_empty() {
        debug!("radial gradient has no usable stops: {value}");
        return None;
    }

    Some(ParseGradientResult {
        mode: GradientKind::RadialGradient,
        config: GradientConfig::radial(position_x, position_y, stops),
    })
}
