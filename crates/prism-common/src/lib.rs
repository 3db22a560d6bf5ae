//! Shared types for the prism workspace.
//!
//! Holds the color value produced by color parsing, the color mode and
//! output format enums, and the error types used by the outer layers.

pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, PrismError};
pub use types::{Color, ColorFormat, ColorMode};

pub type Result<T> = std::result::Result<T, PrismError>;
