//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folio catalogue page-behavior CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Apply the page enhancements to rendered HTML files
    #[command(visible_alias = "e")]
    Enhance {
        #[command(flatten)]
        args: EnhanceArgs,
    },

    /// Verify the markup contract the enhancements depend on
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Enhance command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct EnhanceArgs {
    /// Files or directories to enhance.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Write enhanced pages under this directory instead of rewriting in place
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Files or directories to check.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Emit the report as JSON on stdout
    #[arg(short, long)]
    pub json: bool,

    /// Treat contract violations as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_enhance(&self) -> bool {
        matches!(self.command, Commands::Enhance { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
}
