//! Command-line arguments for the `starnav` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, ConfigError, OutputFormat, default_config_dir};

/// Resolve typed navigation commands into coordinates.
///
/// CLI values override settings loaded from `starnav.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "starnav", about = "Parse solar-system navigation coordinates")]
pub struct CliArgs {
    /// Inputs to parse. Reads one input per stdin line when empty.
    #[arg(allow_hyphen_values = true)]
    pub inputs: Vec<String>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print where the camera would be placed for targets with a bearing.
    #[arg(long)]
    pub camera: bool,

    /// Log the parser's intermediate state.
    #[arg(long)]
    pub trace: bool,

    /// Log level filter (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// Boolean flags can only switch features on; an unset flag keeps the
    /// configured value.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(format) = args.format {
            self.output.format = format;
        }
        if args.camera {
            self.output.show_camera = true;
        }
        if args.trace {
            self.debug.trace_parser = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

impl Config {
    /// Resolve the config for a run: load (or create) `starnav.ron` from
    /// `--config` or the platform directory, then apply the CLI overrides.
    ///
    /// A config that cannot be located, read or parsed is replaced by the
    /// defaults. The error is handed back so the caller can report it once
    /// logging is up.
    #[must_use]
    pub fn resolve(args: &CliArgs) -> (Self, Option<ConfigError>) {
        let loaded = args
            .config
            .clone()
            .map_or_else(default_config_dir, Ok)
            .and_then(|dir| Config::load_or_create(&dir));

        let (mut config, error) = match loaded {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };
        config.apply_cli_overrides(args);
        (config, error)
    }
}
