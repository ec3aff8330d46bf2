//! Two-level plans: a rectangular footprint whose roofline steps down over a
//! protruding lower section (a shed roof or a balcony).
//!
//! The outer perimeter is planned as a plain rectangle. The internal
//! roofline boundary gets its clearance by corner propagation from the face
//! it parallels, and the same derivation's unit run splits the long-axis row
//! into its lower and upper sections.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::verify_face_closure;
use crate::core::edge::{Axis, Edge};
use crate::core::units::MM_TOLERANCE;
use crate::engine::config::{SpanParams, ensure_positive, ensure_row_fits};
use crate::engine::error::LayoutError;
use crate::engine::optimizer::{SpanSolution, optimize_clearance};
use crate::engine::propagator::derive_corner_clearance;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtrusionInput {
    /// Building width along X (mm).
    pub width_x: f64,
    /// Overall depth along Y (mm); must equal the two sections combined.
    pub total_depth: f64,
    /// Depth of the full-height main section (mm).
    pub main_depth: f64,
    /// Depth of the protruding lower section on the south side (mm).
    pub protrusion_depth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtrusionPlan {
    pub width_x: f64,
    pub total_depth: f64,
    pub main_depth: f64,
    pub protrusion_depth: f64,
    pub x_axis: SpanSolution,
    pub y_axis: SpanSolution,
    pub north: Edge,
    pub east: Edge,
    pub south: Edge,
    pub west: Edge,
    /// Roofline boundary between the two levels, running the full width.
    pub internal_boundary: Edge,
    /// Side-row length serving the lower section (mm).
    pub lower_row_length: f64,
    /// Side-row length serving the main section (mm).
    pub upper_row_length: f64,
    /// Overhang of the upper side row beyond the main section, per end (mm).
    pub upper_level_clearance: f64,
}

impl ProtrusionPlan {
    pub fn summary(&self) -> String {
        format!(
            "Protrusion plan {}mm x {}mm ({}mm main + {}mm lower): rows {}mm (X) \
             and {}mm (Y); roofline boundary at {}mm clearance, side rows split \
             {}mm lower / {}mm upper.",
            self.width_x,
            self.total_depth,
            self.main_depth,
            self.protrusion_depth,
            self.x_axis.total_length,
            self.y_axis.total_length,
            self.internal_boundary.clearance,
            self.lower_row_length,
            self.upper_row_length,
        )
    }
}

#[instrument(skip_all, name = "protrusion_workflow")]
pub fn plan_protrusion(
    input: &ProtrusionInput,
    params: &SpanParams,
) -> Result<ProtrusionPlan, LayoutError> {
    ensure_positive("width_x", input.width_x)?;
    ensure_positive("total_depth", input.total_depth)?;
    ensure_positive("main_depth", input.main_depth)?;
    ensure_positive("protrusion_depth", input.protrusion_depth)?;
    let parts = input.main_depth + input.protrusion_depth;
    if (input.total_depth - parts).abs() > MM_TOLERANCE {
        return Err(LayoutError::DimensionMismatch {
            whole_name: "total_depth",
            whole: input.total_depth,
            parts_name: "main_depth + protrusion_depth",
            parts,
        });
    }

    let x_axis = optimize_clearance(input.width_x, params)?;
    let y_axis = optimize_clearance(input.total_depth, params)?;

    // The roofline boundary parallels the south face; its clearance crosses
    // the protrusion depth, and the unit run it consumes is the lower side
    // row.
    let boundary = derive_corner_clearance(y_axis.clearance, input.protrusion_depth, params)?;
    let lower_row_length = boundary.scaffold_length;
    let upper_row_length = y_axis.total_length - lower_row_length;
    let upper_level_clearance = (upper_row_length - input.main_depth) / 2.0;

    verify_face_closure(
        "east",
        &[lower_row_length, upper_row_length],
        y_axis.total_length,
    )?;

    let north = Edge::outer(input.width_x, y_axis.clearance, x_axis.total_length, Axis::X);
    let south = north;
    let east = Edge::outer(
        input.total_depth,
        x_axis.clearance,
        y_axis.total_length,
        Axis::Y,
    );
    let west = east;
    let internal_boundary = Edge::internal_boundary(
        input.width_x,
        boundary.clearance,
        x_axis.total_length,
        Axis::X,
    );

    info!(
        boundary_clearance = internal_boundary.clearance,
        lower_row_length, upper_row_length, "Protrusion plan complete."
    );

    Ok(ProtrusionPlan {
        width_x: input.width_x,
        total_depth: input.total_depth,
        main_depth: input.main_depth,
        protrusion_depth: input.protrusion_depth,
        x_axis,
        y_axis,
        north,
        east,
        south,
        west,
        internal_boundary,
        lower_row_length,
        upper_row_length,
        upper_level_clearance,
    })
}

/// A shed roof is the protrusion plan under its traditional name.
pub fn plan_shed(input: &ProtrusionInput, params: &SpanParams) -> Result<ProtrusionPlan, LayoutError> {
    plan_protrusion(input, params)
}

/// A balcony is the protrusion plan under its traditional name.
pub fn plan_balcony(
    input: &ProtrusionInput,
    params: &SpanParams,
) -> Result<ProtrusionPlan, LayoutError> {
    plan_protrusion(input, params)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotchedProtrusionInput {
    /// Building width along X (mm).
    pub width_x: f64,
    /// Overall depth along Y (mm).
    pub total_depth: f64,
    /// X position where the roofline steps, from the west face (mm).
    pub corner_x: f64,
    /// Depth of the lower section west of the step (mm).
    pub west_lower_depth: f64,
    /// Depth of the lower section east of the step (mm); deeper than the
    /// west side.
    pub east_lower_depth: f64,
}

/// Protrusion plan whose roofline boundary carries its own inside corner:
/// the lower section is deeper on the east side of `corner_x` than on the
/// west side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotchedProtrusionPlan {
    pub width_x: f64,
    pub total_depth: f64,
    pub corner_x: f64,
    pub x_axis: SpanSolution,
    pub y_axis: SpanSolution,
    pub north: Edge,
    pub east: Edge,
    pub south: Edge,
    pub west: Edge,
    /// Roofline segment west of the step.
    pub boundary_west: Edge,
    /// Roofline segment east of the step.
    pub boundary_east: Edge,
    /// The step itself, running north-south between the two segments.
    pub boundary_riser: Edge,
    /// Lower-section side row on the west face (mm).
    pub west_lower_row: f64,
    /// Lower-section side row on the east face (mm).
    pub east_lower_row: f64,
}

impl NotchedProtrusionPlan {
    pub fn summary(&self) -> String {
        format!(
            "Notched protrusion {}mm x {}mm, step at x={}mm: roofline segments at \
             {}mm / {}mm clearance, step row {}mm, lower side rows {}mm (west) and \
             {}mm (east).",
            self.width_x,
            self.total_depth,
            self.corner_x,
            self.boundary_west.clearance,
            self.boundary_east.clearance,
            self.boundary_riser.scaffold_length,
            self.west_lower_row,
            self.east_lower_row,
        )
    }
}

#[instrument(skip_all, name = "notched_protrusion_workflow")]
pub fn plan_notched_protrusion(
    input: &NotchedProtrusionInput,
    params: &SpanParams,
) -> Result<NotchedProtrusionPlan, LayoutError> {
    ensure_positive("width_x", input.width_x)?;
    ensure_positive("total_depth", input.total_depth)?;
    ensure_positive("corner_x", input.corner_x)?;
    ensure_positive("west_lower_depth", input.west_lower_depth)?;
    if input.corner_x >= input.width_x {
        return Err(LayoutError::DimensionOutOfRange {
            name: "corner_x",
            value: input.corner_x,
            bound_name: "width_x",
            bound: input.width_x,
        });
    }
    if input.east_lower_depth <= input.west_lower_depth {
        return Err(LayoutError::DimensionOutOfRange {
            name: "west_lower_depth",
            value: input.west_lower_depth,
            bound_name: "east_lower_depth",
            bound: input.east_lower_depth,
        });
    }
    if input.east_lower_depth >= input.total_depth {
        return Err(LayoutError::DimensionOutOfRange {
            name: "east_lower_depth",
            value: input.east_lower_depth,
            bound_name: "total_depth",
            bound: input.total_depth,
        });
    }

    let x_axis = optimize_clearance(input.width_x, params)?;
    let y_axis = optimize_clearance(input.total_depth, params)?;

    // All three internal segments reference the south face clearance; each
    // crosses its own depth. The two lower side rows are the unit runs of the
    // flanking derivations, and the step row is their difference.
    let west = derive_corner_clearance(y_axis.clearance, input.west_lower_depth, params)?;
    let riser_length = input.east_lower_depth - input.west_lower_depth;
    let step = derive_corner_clearance(y_axis.clearance, riser_length, params)?;
    let east = derive_corner_clearance(y_axis.clearance, input.east_lower_depth, params)?;

    let west_lower_row = west.scaffold_length;
    let east_lower_row = east.scaffold_length;
    let riser_row = east_lower_row - west_lower_row;
    ensure_row_fits("roofline_step_row", riser_row)?;

    // The flanking rows must leave room for the upper sections on both side
    // faces.
    verify_face_closure(
        "east",
        &[west_lower_row, riser_row, y_axis.total_length - east_lower_row],
        y_axis.total_length,
    )?;

    let boundary_west = Edge::internal_boundary(
        input.corner_x,
        west.clearance,
        west.scaffold_length,
        Axis::X,
    );
    let boundary_east = Edge::internal_boundary(
        input.width_x - input.corner_x,
        step.clearance,
        step.scaffold_length,
        Axis::X,
    );
    let boundary_riser =
        Edge::internal_boundary(riser_length, x_axis.clearance, riser_row, Axis::Y);

    let north_edge = Edge::outer(input.width_x, y_axis.clearance, x_axis.total_length, Axis::X);
    let south_edge = north_edge;
    let east_edge = Edge::outer(
        input.total_depth,
        x_axis.clearance,
        y_axis.total_length,
        Axis::Y,
    );
    let west_edge = east_edge;

    info!(
        west_clearance = boundary_west.clearance,
        east_clearance = boundary_east.clearance,
        step_row = boundary_riser.scaffold_length,
        "Notched protrusion plan complete."
    );

    Ok(NotchedProtrusionPlan {
        width_x: input.width_x,
        total_depth: input.total_depth,
        corner_x: input.corner_x,
        x_axis,
        y_axis,
        north: north_edge,
        east: east_edge,
        south: south_edge,
        west: west_edge,
        boundary_west,
        boundary_east,
        boundary_riser,
        west_lower_row,
        east_lower_row,
    })
}
