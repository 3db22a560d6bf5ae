use clap::{Parser, Subcommand};
use prism_common::ColorFormat;

/// prism — inspect and normalize CSS colors and gradients.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (e.g. `prism=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the color mode of a value.
    Detect { value: String },

    /// Parse a value and print its structure.
    Parse {
        value: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Parse a value and print it back as normalized CSS.
    Format {
        value: String,

        /// Color notation (hex, rgb). Defaults to the configured format.
        #[arg(long)]
        format: Option<ColorFormat>,

        /// Order gradient stops by percentage.
        #[arg(long)]
        sort: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
