//! Command-line interface module.

mod args;
pub mod env;
pub mod export;
pub mod validate;

pub use args::{Cli, Commands, ExportArgs};
