//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# prism configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[picker]
# Modes accepted by the picker: monochrome, linear-gradient, radial-gradient
# color_modes = ["monochrome", "linear-gradient", "radial-gradient"]

# Color notation used when writing values: hex, rgb
# format = "hex"

# default_value = "linear-gradient(90deg, #e7000b 0%, #496adc 100%)"

# swatch_colors = [
#     "#e7000b", "#f54900", "#e17100", "#d08700",
#     "#5ea500", "#00a63e", "#009689", "#0092b8",
#     "#155dfc", "#496adc", "#7f22fe", "#c800de",
# ]
"##
}
