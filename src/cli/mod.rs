//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod enhance;

pub use args::{CheckArgs, Cli, Commands, EnhanceArgs};
