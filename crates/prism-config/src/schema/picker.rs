//! Color picker preferences.

use prism_common::{ColorFormat, ColorMode};
use serde::{Deserialize, Serialize};

/// How the picker treats incoming and outgoing color values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Modes the picker accepts. Values in other modes are rejected.
    pub color_modes: Vec<ColorMode>,
    /// Color notation used when writing values back out.
    pub format: ColorFormat,
    /// Value shown when nothing else is supplied.
    pub default_value: String,
    pub swatch_colors: Vec<String>,
}

impl PickerConfig {
    pub fn allows(&self, mode: ColorMode) -> bool {
        self.color_modes.contains(&mode)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            color_modes: ColorMode::ALL.to_vec(),
            format: ColorFormat::Hex,
            default_value: "linear-gradient(90deg, #e7000b 0%, #496adc 100%)".into(),
            swatch_colors: vec![
                "#e7000b".into(),
                "#f54900".into(),
                "#e17100".into(),
                "#d08700".into(),
                "#5ea500".into(),
                "#00a63e".into(),
                "#009689".into(),
                "#0092b8".into(),
                "#155dfc".into(),
                "#496adc".into(),
                "#7f22fe".into(),
                "#c800de".into(),
            ],
        }
    }
}
