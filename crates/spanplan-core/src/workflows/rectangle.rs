//! Rectangular plan: one symmetric span per axis, four outer faces.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::core::edge::{Axis, Edge};
use crate::engine::config::{SpanParams, ensure_positive};
use crate::engine::error::LayoutError;
use crate::engine::optimizer::{SpanSolution, optimize_clearance};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RectangleInput {
    /// Building width along X (mm).
    pub width_x: f64,
    /// Building depth along Y (mm).
    pub depth_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectanglePlan {
    pub width_x: f64,
    pub depth_y: f64,
    pub x_axis: SpanSolution,
    pub y_axis: SpanSolution,
    pub north: Edge,
    pub east: Edge,
    pub south: Edge,
    pub west: Edge,
}

impl RectanglePlan {
    pub fn summary(&self) -> String {
        format!(
            "Rectangle {}mm x {}mm: rows {}mm (X) and {}mm (Y), \
             clearances {}mm on the north/south faces and {}mm on the east/west faces.",
            self.width_x,
            self.depth_y,
            self.x_axis.total_length,
            self.y_axis.total_length,
            self.north.clearance,
            self.east.clearance,
        )
    }
}

/// Plans a plain rectangular footprint. An eave overhang or minimum clearance
/// set on `params` applies to all four faces.
#[instrument(skip_all, name = "rectangle_workflow")]
pub fn plan_rectangle(
    input: &RectangleInput,
    params: &SpanParams,
) -> Result<RectanglePlan, LayoutError> {
    ensure_positive("width_x", input.width_x)?;
    ensure_positive("depth_y", input.depth_y)?;

    let x_axis = optimize_clearance(input.width_x, params)?;
    let y_axis = optimize_clearance(input.depth_y, params)?;

    // A face running along X stands off the building in Y, so it carries the
    // Y-axis clearance; the row itself spans the full X total.
    let north = Edge::outer(input.width_x, y_axis.clearance, x_axis.total_length, Axis::X);
    let south = north;
    let east = Edge::outer(input.depth_y, x_axis.clearance, y_axis.total_length, Axis::Y);
    let west = east;

    info!(
        total_x = x_axis.total_length,
        total_y = y_axis.total_length,
        "Rectangle plan complete."
    );

    Ok(RectanglePlan {
        width_x: input.width_x,
        depth_y: input.depth_y,
        x_axis,
        y_axis,
        north,
        east,
        south,
        west,
    })
}
