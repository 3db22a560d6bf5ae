use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level classification of a color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    Monochrome,
    LinearGradient,
    RadialGradient,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [
        ColorMode::Monochrome,
        ColorMode::LinearGradient,
        ColorMode::RadialGradient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Monochrome => "monochrome",
            ColorMode::LinearGradient => "linear-gradient",
            ColorMode::RadialGradient => "radial-gradient",
        }
    }

    pub fn is_gradient(&self) -> bool {
        !matches!(self, ColorMode::Monochrome)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown color mode: {s}"))
    }
}

/// How colors are written back out as CSS text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
}

impl ColorFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            other => Err(format!("unknown color format: {other}")),
        }
    }
}
