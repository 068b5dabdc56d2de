//! Folio - page-behavior engine for the catalogue web UI.

use anyhow::Result;
use clap::{ColorChoice, Parser};

use folio::cli::{self, Cli, Commands};
use folio::config::FolioConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = FolioConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Enhance { args } => cli::enhance::run_enhance(args, &config),
        Commands::Check { args } => cli::check::run_check(args, &config),
    }
}
