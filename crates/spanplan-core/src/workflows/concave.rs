//! Concave (U-shaped) plan: a bounding rectangle with a notch centered on
//! the north face.
//!
//! The two wing rows flanking the notch are sized by the partial-span
//! optimizer: their outer ends are fixed at the bounding clearance, and the
//! free ends become the notch rim clearances. The notch bottom row falls out
//! of the north face total by subtraction.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::verify_face_closure;
use crate::core::edge::{Axis, Edge};
use crate::engine::config::{ExtendedSpanParams, SpanParams, ensure_positive, ensure_row_fits};
use crate::engine::error::LayoutError;
use crate::engine::optimizer::{SpanSolution, optimize_clearance, optimize_partial_span};
use crate::engine::propagator::derive_corner_clearance;
use crate::engine::resolver::{ExtendedSpanSolution, resolve_extended_span};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConcaveInput {
    /// Bounding width along X (mm).
    pub width_x: f64,
    /// Bounding depth along Y (mm).
    pub depth_y: f64,
    /// Notch extent along X, centered on the north face (mm).
    pub notch_width: f64,
    /// Notch extent along Y (mm).
    pub notch_depth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcavePlan {
    pub width_x: f64,
    pub depth_y: f64,
    pub x_axis: SpanSolution,
    pub y_axis: SpanSolution,
    /// North-face row west of the notch.
    pub west_wing: Edge,
    /// West flank of the notch, clearance from the wing row's free end.
    pub notch_west_side: Edge,
    /// Notch bottom, clearance derived across the corner.
    pub notch_bottom: Edge,
    /// East flank of the notch.
    pub notch_east_side: Edge,
    /// North-face row east of the notch.
    pub east_wing: Edge,
    pub east: Edge,
    pub south: Edge,
    pub west: Edge,
}

impl ConcavePlan {
    pub fn summary(&self) -> String {
        format!(
            "Concave {}mm x {}mm with a {}mm x {}mm notch: wing rows {}mm, \
             notch rim clearance {}mm, notch bottom at {}mm over a {}mm row.",
            self.width_x,
            self.depth_y,
            self.notch_bottom.building_length,
            self.notch_west_side.building_length,
            self.west_wing.scaffold_length,
            self.notch_west_side.clearance,
            self.notch_bottom.clearance,
            self.notch_bottom.scaffold_length,
        )
    }
}

#[instrument(skip_all, name = "concave_workflow")]
pub fn plan_concave(input: &ConcaveInput, params: &SpanParams) -> Result<ConcavePlan, LayoutError> {
    ensure_positive("width_x", input.width_x)?;
    ensure_positive("depth_y", input.depth_y)?;
    ensure_positive("notch_width", input.notch_width)?;
    ensure_positive("notch_depth", input.notch_depth)?;
    if input.notch_width >= input.width_x {
        return Err(LayoutError::DimensionOutOfRange {
            name: "notch_width",
            value: input.notch_width,
            bound_name: "width_x",
            bound: input.width_x,
        });
    }
    if input.notch_depth >= input.depth_y {
        return Err(LayoutError::DimensionOutOfRange {
            name: "notch_depth",
            value: input.notch_depth,
            bound_name: "depth_y",
            bound: input.depth_y,
        });
    }

    let x_axis = optimize_clearance(input.width_x, params)?;
    let y_axis = optimize_clearance(input.depth_y, params)?;

    let wing_length = (input.width_x - input.notch_width) / 2.0;

    // Wing rows: outer end pinned at the bounding clearance, free end at the
    // notch rim.
    let wing_row = optimize_partial_span(x_axis.clearance, wing_length, params)?;

    let west_wing = Edge::outer(
        wing_length,
        y_axis.clearance,
        wing_row.row_length,
        Axis::X,
    );
    let east_wing = west_wing;

    let notch_west_side = Edge::notch(
        input.notch_depth,
        wing_row.free_clearance,
        input.notch_depth,
        Axis::Y,
    );
    let notch_east_side = notch_west_side;

    // Bottom clearance propagates across the corner; its row is whatever the
    // north face total leaves after the two wings.
    let bottom = derive_corner_clearance(y_axis.clearance, input.notch_depth, params)?;
    let bottom_row = x_axis.total_length - 2.0 * wing_row.row_length;
    ensure_row_fits("notch_bottom_row", bottom_row)?;
    let notch_bottom = Edge::notch(input.notch_width, bottom.clearance, bottom_row, Axis::X);

    verify_face_closure(
        "north",
        &[
            west_wing.scaffold_length,
            notch_bottom.scaffold_length,
            east_wing.scaffold_length,
        ],
        x_axis.total_length,
    )?;

    let east = Edge::outer(input.depth_y, x_axis.clearance, y_axis.total_length, Axis::Y);
    let west = east;
    let south = Edge::outer(input.width_x, y_axis.clearance, x_axis.total_length, Axis::X);

    info!(
        rim_clearance = notch_west_side.clearance,
        bottom_clearance = notch_bottom.clearance,
        "Concave plan complete."
    );

    Ok(ConcavePlan {
        width_x: input.width_x,
        depth_y: input.depth_y,
        x_axis,
        y_axis,
        west_wing,
        notch_west_side,
        notch_bottom,
        notch_east_side,
        east_wing,
        east,
        south,
        west,
    })
}

/// Notch bottom hung off a resolver-seeded outer frame.
///
/// The window and adjacency gate constrain the outer frame; the bottom then
/// derives across the corner from the resolved clearance on the standard
/// grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedNotchBottom {
    /// Resolver solution for the outer frame.
    pub outer: ExtendedSpanSolution,
    pub bottom_clearance: f64,
    pub bottom_row_length: f64,
    /// Whether any 355mm/150mm span ended up in the outer frame.
    pub extended_spans_used: bool,
}

#[instrument(skip_all, name = "concave_extended_workflow")]
pub fn derive_notch_bottom_extended(
    outer_dimension: f64,
    notch_depth: f64,
    params: &ExtendedSpanParams,
) -> Result<ExtendedNotchBottom, LayoutError> {
    ensure_positive("outer_dimension", outer_dimension)?;
    ensure_positive("notch_depth", notch_depth)?;

    let outer = resolve_extended_span(outer_dimension, params)?;
    let corner_params = SpanParams::default()
        .with_target_clearance(params.span.target_clearance)
        .with_span_unit(params.span.span_unit);
    let bottom = derive_corner_clearance(outer.clearance, notch_depth, &corner_params)?;
    let extended_spans_used = outer.long_span_count > 0 || outer.short_span_count > 0;

    info!(
        outer_clearance = outer.clearance,
        bottom_clearance = bottom.clearance,
        extended_spans_used,
        "Extended notch bottom derived."
    );

    Ok(ExtendedNotchBottom {
        outer,
        bottom_clearance: bottom.clearance,
        bottom_row_length: bottom.scaffold_length,
        extended_spans_used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn base_input() -> ConcaveInput {
        ConcaveInput {
            width_x: 10000.0,
            depth_y: 10000.0,
            notch_width: 4000.0,
            notch_depth: 2000.0,
        }
    }

    #[test]
    fn wing_rows_settle_at_4800_with_a_950_rim() {
        let plan = plan_concave(&base_input(), &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(plan.west_wing.scaffold_length, 4800.0));
        assert!(f64_approx_equal(plan.west_wing.building_length, 3000.0));
        assert!(f64_approx_equal(plan.notch_west_side.clearance, 950.0));
        assert!(f64_approx_equal(plan.notch_east_side.clearance, 950.0));
    }

    #[test]
    fn notch_bottom_falls_out_by_subtraction() {
        let plan = plan_concave(&base_input(), &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(plan.notch_bottom.clearance, 1050.0));
        assert!(f64_approx_equal(plan.notch_bottom.scaffold_length, 2100.0));
    }

    #[test]
    fn notched_face_closes_against_the_axis_total() {
        let plan = plan_concave(&base_input(), &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(
            plan.west_wing.scaffold_length
                + plan.notch_bottom.scaffold_length
                + plan.east_wing.scaffold_length,
            plan.x_axis.total_length
        ));
    }

    #[test]
    fn full_faces_use_the_bounding_solution() {
        let plan = plan_concave(&base_input(), &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(plan.south.scaffold_length, 11700.0));
        assert!(f64_approx_equal(plan.south.clearance, 850.0));
        assert!(f64_approx_equal(plan.east.scaffold_length, 11700.0));
    }

    #[test]
    fn extended_notch_bottom_matches_the_standard_derivation_without_a_window() {
        let params = ExtendedSpanParams::default();
        let result = derive_notch_bottom_extended(10000.0, 2000.0, &params).unwrap();
        assert!(f64_approx_equal(result.outer.clearance, 850.0));
        assert!(f64_approx_equal(result.outer.total_length, 11700.0));
        assert!(f64_approx_equal(result.bottom_clearance, 1050.0));
        assert!(f64_approx_equal(result.bottom_row_length, 1800.0));
        assert!(!result.extended_spans_used);
    }

    #[test]
    fn unreachable_window_flows_through_as_unsatisfied() {
        let params = ExtendedSpanParams::default().with_window(960.0, 970.0);
        let result = derive_notch_bottom_extended(10000.0, 2000.0, &params).unwrap();
        assert!(!result.outer.satisfied);
        assert!(f64_approx_equal(result.outer.clearance, 1000.0));
        assert!(f64_approx_equal(result.bottom_clearance, 900.0));
        assert!(f64_approx_equal(result.bottom_row_length, 2100.0));
    }

    #[test]
    fn wings_overrunning_the_face_total_leave_no_bottom_row() {
        // Wings of 4500mm each need 6300mm rows; two of them exceed the
        // 11700mm face total, leaving a negative bottom row.
        let input = ConcaveInput {
            width_x: 10000.0,
            depth_y: 10000.0,
            notch_width: 1000.0,
            notch_depth: 2000.0,
        };
        let result = plan_concave(&input, &SpanParams::default());
        assert!(matches!(
            result,
            Err(LayoutError::NegativeDerivedRow { .. })
        ));
    }

    #[test]
    fn notch_deeper_than_the_building_is_rejected() {
        let mut input = base_input();
        input.notch_depth = 10000.0;
        let result = plan_concave(&input, &SpanParams::default());
        assert!(matches!(
            result,
            Err(LayoutError::DimensionOutOfRange { .. })
        ));
    }
}
