//! CSS gradient parsing for the prism color picker.
//!
//! Turns `linear-gradient(...)` and `radial-gradient(...)` strings into a
//! [`ParseGradientResult`] (angle, position and ordered color stops), and
//! classifies arbitrary color values into a [`ColorMode`].
//!
//! Parsing never fails loudly: malformed input yields `None`, and individual
//! stops whose color cannot be understood are dropped.
//!
//! ```rust
//! use prism_gradient::{detect_color_mode, parse_gradient, ColorMode};
//!
//! assert_eq!(detect_color_mode("#ff0000"), ColorMode::Monochrome);
//!
//! let parsed = parse_gradient("linear-gradient(45deg, #ff0000 0%, #0000ff 100%)").unwrap();
//! assert_eq!(parsed.config.angle, 45);
//! assert_eq!(parsed.config.stops.len(), 2);
//! ```

pub mod colors;
pub mod mode;
pub mod parser;
pub mod serialize;
pub mod tokenize;
pub mod types;

pub use colors::{parse_color, validate_color, ColorParser, CssColorParser};
pub use mode::detect_color_mode;
pub use parser::{parse_gradient, parse_gradient_with};
pub use tokenize::split_gradient_parts;
pub use types::{GradientConfig, GradientKind, GradientStop, ParseGradientResult};

pub use prism_common::{Color, ColorFormat, ColorMode};
