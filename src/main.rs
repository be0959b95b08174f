//! seo-assets - favicons, app icons and the social preview for a static site.

mod cli;
mod config;
mod image;
mod logger;
mod manifest;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::AssetsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = AssetsConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    // Job failures only show up in the summary; the exit code stays 0.
    match cli.command {
        Commands::Convert => {
            cli::convert::convert_assets(&config);
        }
        Commands::Generate => {
            cli::generate::generate_assets(&config)?;
        }
    }

    Ok(())
}
