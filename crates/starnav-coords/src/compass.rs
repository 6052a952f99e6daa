//! Compass points, bearing tokens, and heading math on the horizontal XZ plane.
//!
//! Bearings are measured clockwise from north, where north is the scene's +Z
//! axis and east is +X. A direction token such as `SE.121` names a compass
//! point plus a fine offset in degrees added on top of that point's bearing.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Errors produced when decoding a direction token.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DirectionError {
    /// The label before the first dot is not one of the eight compass points.
    #[error("unknown compass point: {0:?}")]
    UnknownCompassPoint(String),

    /// The part after the first dot is not a finite, non-negative number.
    #[error("invalid bearing offset: {0:?}")]
    InvalidAngle(String),
}

/// One of the eight principal compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// All points in clockwise order starting at north.
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];

    /// Bearing of this point in degrees, clockwise from north.
    #[must_use]
    pub fn base_degrees(self) -> f64 {
        match self {
            CompassPoint::N => 0.0,
            CompassPoint::NE => 45.0,
            CompassPoint::E => 90.0,
            CompassPoint::SE => 135.0,
            CompassPoint::S => 180.0,
            CompassPoint::SW => 225.0,
            CompassPoint::W => 270.0,
            CompassPoint::NW => 315.0,
        }
    }

    /// Upper-case abbreviation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }

    /// The point closest to `degrees` (any value, wrapped into `[0, 360)`).
    #[must_use]
    pub fn nearest(degrees: f64) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        let index = (wrapped / 45.0).round() as usize % 8;
        Self::ALL[index]
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompassPoint {
    type Err = DirectionError;

    /// Case-insensitive: `"se"`, `"Se"` and `"SE"` all decode to [`CompassPoint::SE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|point| point.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DirectionError::UnknownCompassPoint(s.to_string()))
    }
}

/// A decoded direction token: compass point plus fine offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bearing {
    pub point: CompassPoint,
    /// Degrees added clockwise to the point's base bearing.
    pub offset_deg: f64,
}

impl Bearing {
    /// Decode `<Label>.<Angle>` or a bare `<Label>` (offset 0).
    ///
    /// Only the first dot separates label from angle, so `"S.12.5"` has an
    /// offset of 12.5 degrees.
    ///
    /// # Errors
    /// Returns [`DirectionError`] if the label is not a compass point or the
    /// angle is not a finite non-negative number.
    pub fn parse(token: &str) -> Result<Self, DirectionError> {
        let token = token.trim();
        let (label, angle) = match token.split_once('.') {
            Some((label, angle)) => (label, Some(angle)),
            None => (token, None),
        };

        let point: CompassPoint = label.parse()?;
        let offset_deg = match angle {
            None | Some("") => 0.0,
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| DirectionError::InvalidAngle(raw.to_string()))?,
        };

        Ok(Self { point, offset_deg })
    }

    /// Total bearing in degrees clockwise from north. Not wrapped.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.point.base_degrees() + self.offset_deg
    }

    /// Horizontal unit vector pointing along this bearing.
    #[must_use]
    pub fn unit_vector(&self) -> DVec3 {
        let radians = self.degrees().to_radians();
        DVec3::new(radians.sin(), 0.0, radians.cos())
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.point, self.offset_deg)
    }
}

impl FromStr for Bearing {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bearing::parse(s)
    }
}

/// Compass heading of a view direction.
///
/// Projects `forward` onto the XZ plane and returns the nearest compass point
/// together with the exact bearing in `[0, 360)`. Returns `None` when the
/// vector has no horizontal component (looking straight up or down).
#[must_use]
pub fn compass_heading(forward: DVec3) -> Option<(CompassPoint, f64)> {
    let flat = DVec2::new(forward.x, forward.z).try_normalize()?;
    let mut degrees = flat.x.atan2(flat.y).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    // atan2 can land exactly on 360 after the shift for tiny negative angles
    if degrees >= 360.0 {
        degrees -= 360.0;
    }
    Some((CompassPoint::nearest(degrees), degrees))
}
