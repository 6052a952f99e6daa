//! Structured logging for the starnav tools.
//!
//! Console output goes to stderr so that parsed results on stdout stay
//! machine-readable. Debug builds can additionally write JSON logs to a
//! directory for later inspection.

use std::path::Path;

use starnav_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "info";

/// Name of the JSON log file written inside the log directory.
pub const LOG_FILE: &str = "starnav.log";

/// Initialize the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` if set, else from `debug.log_level` in
/// `config`, else [`DEFAULT_FILTER`]. When `debug_build` is true and the
/// config names a `debug.log_dir`, a JSON file layer is added as well.
///
/// # Examples
///
/// ```no_run
/// use starnav_config::Config;
///
/// let config = Config::default();
/// starnav_log::init_logging(Some(&config), cfg!(debug_assertions));
/// ```
pub fn init_logging(config: Option<&Config>, debug_build: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_from_config(config)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let log_dir = config.and_then(|c| c.debug.log_dir.as_deref());
    if debug_build
        && let Some(log_dir) = log_dir
        && let Some(log_file) = open_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Directive enabling the parser's intermediate-state events.
pub const PARSER_TRACE_DIRECTIVE: &str = "starnav_coords::parser=debug";

/// The filter string `init_logging` falls back to when `RUST_LOG` is unset.
///
/// With `debug.trace_parser` on, the parser's events are enabled on top of
/// the configured level.
#[must_use]
pub fn filter_from_config(config: Option<&Config>) -> String {
    let level = config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER);

    if config.is_some_and(|c| c.debug.trace_parser) {
        format!("{level},{PARSER_TRACE_DIRECTIVE}")
    } else {
        level.to_string()
    }
}

/// Create `log_dir` and open a fresh log file in it.
fn open_log_file(log_dir: &Path) -> Option<std::fs::File> {
    std::fs::create_dir_all(log_dir).ok()?;
    std::fs::File::create(log_dir.join(LOG_FILE)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_without_config() {
        assert_eq!(filter_from_config(None), "info");
    }

    #[test]
    fn test_filter_from_config_level() {
        let mut config = Config::default();
        config.debug.log_level = "debug,starnav_coords=trace".to_string();
        assert_eq!(filter_from_config(Some(&config)), "debug,starnav_coords=trace");
    }

    #[test]
    fn test_blank_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_from_config(Some(&config)), DEFAULT_FILTER);
    }

    #[test]
    fn test_trace_parser_enables_parser_events() {
        let mut config = Config::default();
        config.debug.trace_parser = true;

        let filter = filter_from_config(Some(&config));
        assert_eq!(filter, "info,starnav_coords::parser=debug");
        assert!(EnvFilter::try_new(&filter).is_ok());
    }

    #[test]
    fn test_trace_parser_keeps_configured_level() {
        let mut config = Config::default();
        config.debug.log_level = "warn".to_string();
        config.debug.trace_parser = true;
        assert_eq!(
            filter_from_config(Some(&config)),
            format!("warn,{PARSER_TRACE_DIRECTIVE}")
        );
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = ["info", "debug,starnav_coords::parser=trace", "warn", "error"];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");

        let file = open_log_file(&log_dir);
        assert!(file.is_some());
        assert!(log_dir.join(LOG_FILE).exists());
    }
}
