mod cli;
mod commands;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use prism_config::PrismConfig;
use tracing_subscriber::EnvFilter;

/// An explicit `--config` must load; the platform default falls back to
/// built-in defaults.
fn load_config(path: Option<&str>) -> prism_common::Result<PrismConfig> {
    if let Some(path) = path {
        tracing::info!("Using config override: {path}");
        let config = prism_config::load_from_path(Path::new(path))?;
        prism_config::validation::validate(&config)?;
        return Ok(config);
    }

    Ok(prism_config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PrismConfig::default()
    }))
}

fn run(args: &cli::Args) -> prism_common::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let output = commands::run(&args.command, &config.picker)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr so stdout stays clean for piping.
    let log_directive = args.log_level.as_deref().unwrap_or("prism=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "prism=info".parse().unwrap()),
            ),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
