//! Configuration schema types for prism.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod picker;

pub use picker::*;

use serde::{Deserialize, Serialize};

/// Root configuration for prism.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrismConfig {
    pub picker: PickerConfig,
}
