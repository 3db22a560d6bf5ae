//! Picker sub-config validation.

use crate::schema::PrismConfig;
use prism_gradient::mode::clean_value;
use prism_gradient::{detect_color_mode, parse_gradient, validate_color};

pub(crate) fn validate_color_modes(errors: &mut Vec<String>, config: &PrismConfig) {
    let modes = &config.picker.color_modes;
    if modes.is_empty() {
        errors.push("picker.color_modes must enable at least one mode".into());
        return;
    }
    for (i, mode) in modes.iter().enumerate() {
        if modes[..i].contains(mode) {
            errors.push(format!("picker.color_modes lists `{mode}` more than once"));
        }
    }
}

pub(crate) fn validate_swatches(errors: &mut Vec<String>, config: &PrismConfig) {
    for (i, color) in config.picker.swatch_colors.iter().enumerate() {
        if !validate_color(color) {
            errors.push(format!(
                "picker.swatch_colors[{i}] = {color:?} is not a valid color"
            ));
        }
    }
}

/// The default value must parse in its own mode, and that mode must be enabled.
/// A trailing `;` is ignored.
pub(crate) fn validate_default_value(errors: &mut Vec<String>, config: &PrismConfig) {
    let value = clean_value(&config.picker.default_value);
    let mode = detect_color_mode(value);

    if !config.picker.allows(mode) {
        errors.push(format!(
            "picker.default_value uses disabled color mode `{mode}`"
        ));
    }

    let valid = if mode.is_gradient() {
        parse_gradient(value).is_some()
    } else {
        validate_color(value)
    };
    if !valid {
        errors.push(format!(
            "picker.default_value = {value:?} is not a valid {mode} value"
        ));
    }
}
