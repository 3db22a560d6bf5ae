//! Subcommand handlers. Each returns the text to print on stdout.

use prism_common::{Color, ColorFormat, ColorMode, PrismError, Result};
use prism_config::PickerConfig;
use prism_gradient::mode::clean_value;
use prism_gradient::serialize::format_color;
use prism_gradient::{detect_color_mode, parse_color, parse_gradient, ParseGradientResult};
use tracing::debug;

use crate::cli::Command;

enum Parsed {
    Color(Color),
    Gradient(ParseGradientResult),
}

/// Parse `value` in whatever mode it is written in, if the picker allows it.
fn parse_value(value: &str, picker: &PickerConfig) -> Result<Parsed> {
    let mode = detect_color_mode(value);
    debug!("detected {mode} for {value:?}");

    if !picker.allows(mode) {
        return Err(PrismError::ModeDisabled(mode));
    }

    if mode.is_gradient() {
        parse_gradient(value)
            .map(Parsed::Gradient)
            .ok_or_else(|| PrismError::Parse(value.to_string()))
    } else {
        Ok(Parsed::Color(parse_color(clean_value(value))?))
    }
}

fn describe_gradient(result: &ParseGradientResult) -> String {
    let mut lines = vec![format!("mode: {}", result.color_mode())];
    match result.color_mode() {
        ColorMode::RadialGradient => lines.push(format!(
            "position: {}% {}%",
            result.config.position_x, result.config.position_y
        )),
        _ => lines.push(format!("angle: {}deg", result.config.angle)),
    }
    lines.push("stops:".into());
    for stop in &result.config.stops {
        lines.push(format!(
            "  {}  {}  {}%",
            stop.id,
            stop.color.to_hex(),
            stop.percentage
        ));
    }
    lines.join("\n")
}

fn describe_color(color: &Color) -> String {
    format!("mode: {}\ncolor: {}", ColorMode::Monochrome, color.to_hex())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| PrismError::Serialize(e.to_string()))
}

pub fn run(command: &Command, picker: &PickerConfig) -> Result<String> {
    match command {
        Command::Detect { value } => Ok(detect_color_mode(value).to_string()),

        Command::Parse { value, json } => match (parse_value(value, picker)?, *json) {
            (Parsed::Gradient(result), true) => to_json(&result),
            (Parsed::Gradient(result), false) => Ok(describe_gradient(&result)),
            (Parsed::Color(color), true) => to_json(&serde_json::json!({
                "mode": ColorMode::Monochrome,
                "color": color,
            })),
            (Parsed::Color(color), false) => Ok(describe_color(&color)),
        },

        Command::Format {
            value,
            format,
            sort,
        } => {
            let format: ColorFormat = (*format).unwrap_or(picker.format);
            match parse_value(value, picker)? {
                Parsed::Gradient(mut result) => {
                    if *sort {
                        result.config.sort_stops();
                    }
                    Ok(result.to_css(format))
                }
                Parsed::Color(color) => Ok(format_color(&color, format)),
            }
        }
    }
}
