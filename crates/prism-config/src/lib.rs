//! prism configuration system.
//!
//! Provides TOML-based picker preferences with validation. All config
//! sections use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use prism_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{PickerConfig, PrismConfig};
pub use toml_loader::{load_default, load_from_path};

use prism_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<PrismConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PrismConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_picker() {
        let config = PrismConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"picker\""));
        assert!(json.contains("\"linear-gradient\""));
        assert!(json.contains("\"format\": \"hex\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = PrismConfig::default();
        let json = config_to_json(&config);
        let parsed: PrismConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.picker.color_modes, config.picker.color_modes);
        assert_eq!(parsed.picker.default_value, config.picker.default_value);
    }

    #[test]
    fn picker_allows_only_listed_modes() {
        let mut picker = PickerConfig::default();
        picker.color_modes = vec![prism_common::ColorMode::Monochrome];
        assert!(picker.allows(prism_common::ColorMode::Monochrome));
        assert!(!picker.allows(prism_common::ColorMode::LinearGradient));
    }
}
