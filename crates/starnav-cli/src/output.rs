//! Rendering of parsed targets for stdout.

use serde::Serialize;
use starnav_config::OutputFormat;
use starnav_coords::CoordinateResult;

/// JSON line shape: the target's own fields plus an optional camera placement.
#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    target: &'a CoordinateResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    camera: Option<[f64; 3]>,
}

/// Render one parsed target as a single output line.
///
/// The canonical format never carries the camera so that its output can be
/// fed straight back into the parser.
pub fn render(
    target: &CoordinateResult,
    format: OutputFormat,
    show_camera: bool,
) -> Result<String, serde_json::Error> {
    let camera = if show_camera {
        target.camera_position().map(|p| p.to_array())
    } else {
        None
    };

    match format {
        OutputFormat::Canonical => Ok(target.to_string()),
        OutputFormat::Json => serde_json::to_string(&JsonLine { target, camera }),
        OutputFormat::Text => Ok(render_text(target, camera)),
    }
}

fn render_text(target: &CoordinateResult, camera: Option<[f64; 3]>) -> String {
    let mut line = format!(
        "target ({}, {}, {}) distance {}",
        target.x, target.y, target.z, target.distance
    );

    match (&target.direction, target.bearing()) {
        (Some(token), Some(bearing)) => {
            line.push_str(&format!(" bearing {token} ({}°)", bearing.degrees()));
        }
        (Some(token), None) => line.push_str(&format!(" bearing {token} (unrecognised)")),
        (None, _) => line.push_str(" bearing none"),
    }

    if let Some([x, y, z]) = camera {
        line.push_str(&format!(" camera ({x:.2}, {y:.2}, {z:.2})"));
    }
    line
}
