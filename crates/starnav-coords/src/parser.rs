//! Text-to-target parser for typed "go to" commands.
//!
//! Three grammars are tried in strict priority order and the first that
//! produces x, y and z wins:
//!
//! 1. key-value: `x:0 y:1500 z:3500 d:3808 n:S.180`
//! 2. dotted: `0.1500.3500.3808.S.180`
//! 3. loose tokens split on commas, dots and whitespace: `10, 20, 30 400 NE`
//!
//! If none match, the default result (origin, distance 1000, no direction)
//! is returned. Parsing never fails outward.

use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostics::{DiagnosticLevel, DiagnosticSink, NoopSink};
use crate::result::CoordinateResult;

static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([xyzd]):\s*(-?[0-9]+(?:\.[0-9]+)?)").expect("key-value pattern is valid")
});

static DIRECTION_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"n:\s*([A-Za-z0-9.]+)").expect("direction pattern is valid"));

static INTEGER_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"));

static DECIMAL_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+\.[0-9]+$").expect("decimal pattern is valid"));

static TOKEN_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,.\s]+").expect("separator pattern is valid"));

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("leading number pattern is valid")
});

/// One interpretation strategy. Returns `None` to pass the input on.
type Grammar = fn(&str, &mut dyn DiagnosticSink) -> Option<CoordinateResult>;

/// Grammars in priority order.
const GRAMMARS: [(&str, Grammar); 3] = [
    ("key-value", parse_key_value),
    ("dotted", parse_dotted),
    ("token-split", parse_token_split),
];

/// Parse a typed coordinate command, discarding diagnostics.
///
/// ```
/// use starnav_coords::{CoordinateResult, parse};
///
/// let target = parse("-1160.729.1189.961.SE.121");
/// assert_eq!((target.x, target.y, target.z), (-1160.0, 729.0, 1189.0));
/// assert_eq!(target.distance, 961.0);
/// assert_eq!(target.direction.as_deref(), Some("SE.121"));
///
/// // anything unrecognisable resolves to the default target
/// assert_eq!(parse("take me home"), CoordinateResult::default());
/// ```
#[must_use]
pub fn parse(input: &str) -> CoordinateResult {
    parse_with(input, &mut NoopSink)
}

/// Parse a typed coordinate command, reporting intermediate state to `sink`.
pub fn parse_with(input: &str, sink: &mut dyn DiagnosticSink) -> CoordinateResult {
    sink.emit(DiagnosticLevel::Trace, &format!("parsing input {input:?}"));

    for (name, grammar) in GRAMMARS {
        if let Some(result) = grammar(input, sink) {
            sink.emit(
                DiagnosticLevel::Trace,
                &format!("{name} grammar matched: {result}"),
            );
            return result;
        }
    }

    sink.emit(
        DiagnosticLevel::Warn,
        &format!("could not parse coordinates from {input:?}, using defaults"),
    );
    CoordinateResult::default()
}

// ── Grammar 1: key-value ────────────────────────────────────────────

fn parse_key_value(input: &str, sink: &mut dyn DiagnosticSink) -> Option<CoordinateResult> {
    let (mut x, mut y, mut z, mut d) = (None, None, None, None);

    // Later matches overwrite earlier ones.
    for caps in KEY_VALUE.captures_iter(input) {
        let Some(value) = finite(&caps[2]) else {
            continue;
        };
        match &caps[1] {
            "x" => x = Some(value),
            "y" => y = Some(value),
            "z" => z = Some(value),
            "d" => d = Some(value),
            _ => {}
        }
    }

    let direction = DIRECTION_KEY
        .captures(input)
        .map(|caps| caps[1].to_string());

    sink.emit(
        DiagnosticLevel::Trace,
        &format!("key-value parts: x={x:?} y={y:?} z={z:?} d={d:?} n={direction:?}"),
    );

    let mut result = CoordinateResult::at(x?, y?, z?);
    if let Some(distance) = d {
        result.distance = distance;
    }
    result.direction = direction;
    Some(result)
}

// ── Grammar 2: dot-separated positional ─────────────────────────────

fn parse_dotted(input: &str, sink: &mut dyn DiagnosticSink) -> Option<CoordinateResult> {
    let mut numbers = Vec::new();
    let mut labels = Vec::new();

    for segment in input.split('.').map(str::trim).filter(|s| !s.is_empty()) {
        if INTEGER_SEGMENT.is_match(segment) || DECIMAL_SEGMENT.is_match(segment) {
            // Dropping an unreadable number would shift every later position.
            let Some(value) = finite(segment) else {
                sink.emit(
                    DiagnosticLevel::Trace,
                    &format!("dotted segment {segment:?} is out of range"),
                );
                return None;
            };
            numbers.push(value);
        } else if segment.starts_with(|c: char| c.is_ascii_alphabetic()) {
            labels.push(segment);
        }
    }

    sink.emit(
        DiagnosticLevel::Trace,
        &format!("dotted parts: numbers={numbers:?} labels={labels:?}"),
    );

    let [x, y, z, rest @ ..] = numbers.as_slice() else {
        return None;
    };

    let mut result = CoordinateResult::at(*x, *y, *z);
    if let Some(distance) = rest.first() {
        result.distance = *distance;
    }
    // A label and its angle arrive as separate segments ("ne", "80").
    if let Some(label) = labels.first() {
        result.direction = Some(match rest.get(1) {
            Some(angle) => format!("{label}.{angle}"),
            None => (*label).to_string(),
        });
    }
    Some(result)
}

// ── Grammar 3: loose token split ────────────────────────────────────

fn parse_token_split(input: &str, sink: &mut dyn DiagnosticSink) -> Option<CoordinateResult> {
    let tokens: Vec<&str> = TOKEN_SEPARATORS
        .split(input)
        .filter(|t| !t.is_empty())
        .collect();

    sink.emit(DiagnosticLevel::Trace, &format!("split tokens: {tokens:?}"));

    let [x, y, z, rest @ ..] = tokens.as_slice() else {
        return None;
    };

    let mut result = CoordinateResult::at(
        leading_number(x)?,
        leading_number(y)?,
        leading_number(z)?,
    );
    if let Some(distance) = rest.first().and_then(|t| leading_number(t)) {
        result.distance = distance;
    }
    // Copied verbatim: no label/angle recombination in this grammar.
    if let Some(direction) = rest.get(1) {
        result.direction = Some((*direction).to_string());
    }
    Some(result)
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Strict parse of an already-validated numeric string.
fn finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lenient parse: the longest numeric prefix, ignoring trailing characters
/// (`"50km"` reads as 50). `None` if there is no prefix or it overflows.
fn leading_number(text: &str) -> Option<f64> {
    let caps = LEADING_NUMBER.captures(text)?;
    finite(&caps[1])
}
