//! Configuration for the starnav tools.
//!
//! Settings persist to disk as a RON file, fill in defaults for anything
//! missing, and can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, OutputConfig, OutputFormat, default_config_dir};
pub use error::ConfigError;
