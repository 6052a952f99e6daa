//! Navigation targets typed as text, and the compass math around them.
//!
//! The viewer's "go to" box accepts positions in several shapes:
//!
//! - key-value: `x:-115 y:-1546 z:3248 d:3 n:sw.215`
//! - dotted shorthand: `-734.700.1370.10.ne.80`
//! - loose tokens: `10, 20, 30 400 NE`
//!
//! [`parse`] resolves any of them to a [`CoordinateResult`]; unrecognisable
//! input yields the default target instead of an error. [`CoordinateResult`]
//! formats back to the canonical key-value form, and its direction token can
//! be decoded into a [`Bearing`] to place the camera.
//!
//! ```rust
//! use starnav_coords::{CompassPoint, parse};
//!
//! let target = parse("x:0 y:1500 z:3500 d:3808 n:S.180");
//! assert_eq!(target.to_string(), "x:0 y:1500 z:3500 d:3808 n:S.180");
//!
//! let bearing = target.bearing().unwrap();
//! assert_eq!(bearing.point, CompassPoint::S);
//! assert_eq!(bearing.degrees(), 360.0);
//! ```

mod compass;
mod diagnostics;
mod parser;
mod result;

pub use compass::{Bearing, CompassPoint, DirectionError, compass_heading};
pub use diagnostics::{DiagnosticLevel, DiagnosticSink, NoopSink, TracingSink};
pub use parser::{parse, parse_with};
pub use result::{CoordinateResult, DEFAULT_DISTANCE};
