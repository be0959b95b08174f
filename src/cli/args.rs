//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Favicon, app icon and social preview generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root directory (default: directory of the found config, or cwd)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Config file path (default: assets.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print per-job details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Rasterize the SVG sources into PNG/JPEG assets
    #[command(visible_alias = "c")]
    Convert,

    /// Draw placeholder icons and the social preview, keeping existing files
    #[command(visible_alias = "g")]
    Generate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_with_globals() {
        let cli = Cli::parse_from([
            "seo-assets",
            "generate",
            "--root",
            "site",
            "--color",
            "never",
            "-v",
        ]);
        assert_eq!(cli.command, Commands::Generate);
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_alias() {
        let cli = Cli::parse_from(["seo-assets", "c", "-C", "custom.toml"]);
        assert_eq!(cli.command, Commands::Convert);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_version_flag_kept() {
        let err = Cli::try_parse_from(["seo-assets", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["seo-assets"]).is_err());
    }
}
