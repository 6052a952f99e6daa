//! The structured navigation target produced by the parser.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::compass::Bearing;

/// Camera distance used whenever the input does not name one.
pub const DEFAULT_DISTANCE: f64 = 1000.0;

/// Fraction of the distance the camera is raised above a directed target.
const VIEW_LIFT: f64 = 0.1;

/// A parsed navigation target.
///
/// `x`, `y` and `z` are scene-space coordinates of the point to look at,
/// `distance` is how far the camera should sit from it, and `direction` is an
/// optional bearing token such as `"SE.121"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateResult {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub distance: f64,
    pub direction: Option<String>,
}

impl Default for CoordinateResult {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            distance: DEFAULT_DISTANCE,
            direction: None,
        }
    }
}

impl CoordinateResult {
    /// Target at `(x, y, z)` with the default distance and no direction.
    #[must_use]
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            ..Self::default()
        }
    }

    /// Builder-style distance override.
    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Builder-style direction override.
    #[must_use]
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// The target point as a vector.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Decode the direction token, if there is one and it is well formed.
    #[must_use]
    pub fn bearing(&self) -> Option<Bearing> {
        self.direction
            .as_deref()
            .and_then(|token| Bearing::parse(token).ok())
    }

    /// Where the camera should end up to view this target.
    ///
    /// The camera sits `distance` units behind the target along the bearing
    /// and is lifted by a tenth of the distance. Returns `None` without a
    /// decodable bearing; the caller then keeps its current viewing offset.
    #[must_use]
    pub fn camera_position(&self) -> Option<DVec3> {
        let bearing = self.bearing()?;
        let mut position = self.target() - bearing.unit_vector() * self.distance;
        position.y += self.distance * VIEW_LIFT;
        Some(position)
    }

    /// Dotted shorthand `x.y.z.distance[.direction]`.
    ///
    /// Dots double as separators, so this only works for whole-number values;
    /// returns `None` if any of them has a fractional part.
    #[must_use]
    pub fn to_dotted(&self) -> Option<String> {
        let values = [self.x, self.y, self.z, self.distance];
        if values.iter().any(|v| v.fract() != 0.0) {
            return None;
        }
        let mut out = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(".");
        if let Some(direction) = &self.direction {
            out.push('.');
            out.push_str(direction);
        }
        Some(out)
    }
}

/// Canonical key-value form, the same shape the viewer copies to the clipboard.
///
/// Parsing this string gives back an equal result only when the direction
/// consists of ASCII letters, digits and dots: the `n:` key reads no other
/// characters, so a direction such as `-5` or `S.-5` does not survive.
impl fmt::Display for CoordinateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x:{} y:{} z:{} d:{}",
            self.x, self.y, self.z, self.distance
        )?;
        if let Some(direction) = &self.direction {
            write!(f, " n:{direction}")?;
        }
        Ok(())
    }
}
