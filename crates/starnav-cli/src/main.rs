//! `starnav`: resolve typed navigation commands into coordinates.
//!
//! Configuration is loaded from `starnav.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p starnav-cli -- "x:0 y:1500 z:3500 d:3808 n:S.180"`,
//! or pipe one input per line on stdin.

mod output;

use std::error::Error;
use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use starnav_config::{CliArgs, Config};
use starnav_coords::{DiagnosticLevel, DiagnosticSink, TracingSink, parse_with};
use tracing::{debug, warn};

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    // Load or create config, then apply CLI overrides
    let (config, load_error) = Config::resolve(&args);

    starnav_log::init_logging(Some(&config), cfg!(debug_assertions));
    if let Some(e) = load_error {
        warn!("{e}; using default config");
    }
    debug!(format = ?config.output.format, trace = config.debug.trace_parser, "starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            resolve(&line, &config, &mut out)?;
        }
    } else {
        for input in &args.inputs {
            resolve(input, &config, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Parse one input and write its rendered line.
fn resolve(input: &str, config: &Config, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let target = if config.debug.trace_parser {
        parse_with(input, &mut TracingSink)
    } else {
        parse_with(input, &mut WarningsOnly)
    };
    debug!(%input, %target, "resolved");

    let line = output::render(&target, config.output.format, config.output.show_camera)?;
    writeln!(out, "{line}")?;
    Ok(())
}

/// Surfaces parse failures without the per-grammar chatter.
struct WarningsOnly;

impl DiagnosticSink for WarningsOnly {
    fn emit(&mut self, level: DiagnosticLevel, message: &str) {
        if level == DiagnosticLevel::Warn {
            warn!("{message}");
        }
    }
}
