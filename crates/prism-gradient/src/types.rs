//! Structured gradient values.

use prism_common::{Color, ColorMode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ANGLE: u32 = 90;
pub const DEFAULT_POSITION_X: u32 = 0;
pub const DEFAULT_POSITION_Y: u32 = 50;

/// The gradient flavours a parse can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientKind {
    LinearGradient,
    RadialGradient,
}

impl From<GradientKind> for ColorMode {
    fn from(kind: GradientKind) -> Self {
        match kind {
            GradientKind::LinearGradient => ColorMode::LinearGradient,
            GradientKind::RadialGradient => ColorMode::RadialGradient,
        }
    }
}

/// One color transition point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientStop {
    /// 1-based, assigned in parse order.
    pub id: u32,
    /// Not clamped to 0-100.
    pub percentage: u32,
    pub color: Color,
}

/// Gradient geometry plus its stops.
///
/// Linear gradients only use `angle`; radial gradients only use the
/// position. The unused fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientConfig {
    pub angle: u32,
    pub position_x: u32,
    pub position_y: u32,
    pub stops: Vec<GradientStop>,
}

impl GradientConfig {
    pub fn linear(angle: u32, stops: Vec<GradientStop>) -> Self {
        Self {
            angle,
            position_x: DEFAULT_POSITION_X,
            position_y: DEFAULT_POSITION_Y,
            stops,
        }
    }

    pub fn radial(position_x: u32, position_y: u32, stops: Vec<GradientStop>) -> Self {
        Self {
            angle: DEFAULT_ANGLE,
            position_x,
            position_y,
            stops,
        }
    }

    /// Order stops by percentage, keeping input order for ties.
    pub fn sort_stops(&mut self) {
        self.stops.sort_by_key(|stop| stop.percentage);
    }
}

/// A successfully parsed gradient. Always holds at least one stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseGradientResult {
    pub mode: GradientKind,
    pub config: GradientConfig,
}

impl ParseGradientResult {
    pub fn color_mode(&self) -> ColorMode {
        self.mode.into()
    }
}
