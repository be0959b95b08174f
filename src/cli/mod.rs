//! Command-line interface module.

mod args;
pub mod common;
pub mod convert;
pub mod generate;

pub use args::{Cli, Commands};
