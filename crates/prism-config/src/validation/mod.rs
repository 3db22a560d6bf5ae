//! Full configuration validation.
//!
//! Collects every problem into a single `ConfigError` instead of stopping
//! at the first one.

mod picker;


use crate::schema::PrismConfig;
use prism_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PrismConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    picker::validate_color_modes(&mut errors, config);
    picker::validate_swatches(&mut errors, config);
    picker::validate_default_value(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
