//! Injectable sinks for the parser's intermediate state.
//!
//! The parser never writes to a global logger on its own. Callers choose where
//! its diagnostics go: nowhere ([`NoopSink`]), into `tracing` ([`TracingSink`]),
//! or into any closure taking `(DiagnosticLevel, &str)`.

use std::fmt;

/// Severity of a parser diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Intermediate parse state (tokens, matched grammar).
    Trace,
    /// Input could not be interpreted; the default result was returned.
    Warn,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Trace => f.write_str("trace"),
            DiagnosticLevel::Warn => f.write_str("warn"),
        }
    }
}

/// Receiver of parser diagnostics.
pub trait DiagnosticSink {
    /// Record one diagnostic message.
    fn emit(&mut self, level: DiagnosticLevel, message: &str);
}

/// Discards everything. Used by [`crate::parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&mut self, _level: DiagnosticLevel, _message: &str) {}
}

/// Forwards diagnostics as `tracing` events.
///
/// Trace-level diagnostics become `debug!` events so they show up under a
/// normal `debug` filter; warnings stay warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Trace => {
                tracing::debug!(target: "starnav_coords::parser", "{message}")
            }
            DiagnosticLevel::Warn => {
                tracing::warn!(target: "starnav_coords::parser", "{message}")
            }
        }
    }
}

impl<F> DiagnosticSink for F
where
    F: FnMut(DiagnosticLevel, &str),
{
    fn emit(&mut self, level: DiagnosticLevel, message: &str) {
        self(level, message)
    }
}
