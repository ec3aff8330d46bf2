//! L-shaped plan: a bounding rectangle with one corner notch.
//!
//! The notch is cut from the southwest corner. The north and east faces run
//! the full bounding totals; the south and west faces each split into an
//! outer remainder row and a corner-derived notch edge.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::verify_face_closure;
use crate::core::edge::{Axis, Edge};
use crate::engine::config::{ExtendedSpanParams, SpanParams, ensure_positive, ensure_row_fits};
use crate::engine::error::LayoutError;
use crate::engine::optimizer::{SpanSolution, optimize_clearance};
use crate::engine::propagator::derive_corner_clearance;
use crate::engine::resolver::{ExtendedSpanSolution, resolve_extended_span};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LShapeInput {
    /// Bounding width along X (mm).
    pub width_x: f64,
    /// Bounding depth along Y (mm).
    pub depth_y: f64,
    /// Notch extent along X (mm), strictly smaller than the width.
    pub notch_width: f64,
    /// Notch extent along Y (mm), strictly smaller than the depth.
    pub notch_depth: f64,
    /// Eave overhang above the vertical notch edge, if any (mm).
    #[serde(default)]
    pub notch_eave_overhang: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LShapePlan {
    pub width_x: f64,
    pub depth_y: f64,
    pub x_axis: SpanSolution,
    pub y_axis: SpanSolution,
    pub north: Edge,
    pub east: Edge,
    /// Remainder of the south face east of the notch.
    pub south_outer: Edge,
    /// X-running notch edge, clearance derived across the corner.
    pub notch_horizontal: Edge,
    /// Y-running notch edge, clearance derived across the corner.
    pub notch_vertical: Edge,
    /// Remainder of the west face north of the notch.
    pub west_outer: Edge,
}

impl LShapePlan {
    pub fn summary(&self) -> String {
        format!(
            "L-shape {}mm x {}mm with a {}mm x {}mm notch: rows {}mm (X) and {}mm (Y); \
             notch edges at {}mm and {}mm clearance.",
            self.width_x,
            self.depth_y,
            self.notch_horizontal.building_length,
            self.notch_vertical.building_length,
            self.x_axis.total_length,
            self.y_axis.total_length,
            self.notch_horizontal.clearance,
            self.notch_vertical.clearance,
        )
    }
}

#[instrument(skip_all, name = "l_shape_workflow")]
pub fn plan_l_shape(input: &LShapeInput, params: &SpanParams) -> Result<LShapePlan, LayoutError> {
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

    let north = Edge::outer(input.width_x, y_axis.clearance, x_axis.total_length, Axis::X);
    let east = Edge::outer(input.depth_y, x_axis.clearance, y_axis.total_length, Axis::Y);

    // The X-running notch edge references the south face clearance across the
    // notch depth.
    let horizontal =
        derive_corner_clearance(y_axis.clearance, input.notch_depth, params)?;

    // The Y-running notch edge references the west face clearance across the
    // notch width, with its own eave if one is declared.
    let vertical_params = match input.notch_eave_overhang {
        Some(overhang) => params.clone().with_eave_overhang(overhang),
        None => params.clone(),
    };
    let vertical =
        derive_corner_clearance(x_axis.clearance, input.notch_width, &vertical_params)?;

    let notch_horizontal = Edge::corner_derived(
        input.notch_width,
        horizontal.clearance,
        horizontal.scaffold_length,
        Axis::X,
    );
    let notch_vertical = Edge::corner_derived(
        input.notch_depth,
        vertical.clearance,
        vertical.scaffold_length,
        Axis::Y,
    );

    // Remainder rows on the two split faces, by subtraction from the totals.
    ensure_row_fits(
        "south_remainder_row",
        x_axis.total_length - notch_horizontal.scaffold_length,
    )?;
    ensure_row_fits(
        "west_remainder_row",
        y_axis.total_length - notch_vertical.scaffold_length,
    )?;
    let south_outer = Edge::outer(
        input.width_x - input.notch_width,
        y_axis.clearance,
        x_axis.total_length - notch_horizontal.scaffold_length,
        Axis::X,
    );
    let west_outer = Edge::outer(
        input.depth_y - input.notch_depth,
        x_axis.clearance,
        y_axis.total_length - notch_vertical.scaffold_length,
        Axis::Y,
    );

    verify_face_closure(
        "south",
        &[south_outer.scaffold_length, notch_horizontal.scaffold_length],
        x_axis.total_length,
    )?;
    verify_face_closure(
        "west",
        &[west_outer.scaffold_length, notch_vertical.scaffold_length],
        y_axis.total_length,
    )?;

    info!(
        notch_horizontal_clearance = notch_horizontal.clearance,
        notch_vertical_clearance = notch_vertical.clearance,
        "L-shape plan complete."
    );

    Ok(LShapePlan {
        width_x: input.width_x,
        depth_y: input.depth_y,
        x_axis,
        y_axis,
        north,
        east,
        south_outer,
        notch_horizontal,
        notch_vertical,
        west_outer,
    })
}

/// Notch edge hung off a resolver-seeded outer face.
///
/// The clearance window and the adjacent-clearance gate apply to the outer
/// face only; the corner derivation then runs on the standard grid from
/// whatever clearance the resolver settled on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedNotchEdge {
    /// Resolver solution for the outer face.
    pub outer: ExtendedSpanSolution,
    pub edge_clearance: f64,
    pub edge_row_length: f64,
    /// Whether any 355mm/150mm span ended up in the outer face.
    pub extended_spans_used: bool,
}

#[instrument(skip_all, name = "l_shape_extended_workflow")]
pub fn derive_notch_edge_extended(
    outer_dimension: f64,
    notch_depth: f64,
    params: &ExtendedSpanParams,
) -> Result<ExtendedNotchEdge, LayoutError> {
    ensure_positive("outer_dimension", outer_dimension)?;
    ensure_positive("notch_depth", notch_depth)?;

    let outer = resolve_extended_span(outer_dimension, params)?;
    let corner_params = SpanParams::default()
        .with_target_clearance(params.span.target_clearance)
        .with_span_unit(params.span.span_unit);
    let edge = derive_corner_clearance(outer.clearance, notch_depth, &corner_params)?;
    let extended_spans_used = outer.long_span_count > 0 || outer.short_span_count > 0;

    info!(
        outer_clearance = outer.clearance,
        edge_clearance = edge.clearance,
        extended_spans_used,
        "Extended notch edge derived."
    );

    Ok(ExtendedNotchEdge {
        outer,
        edge_clearance: edge.clearance,
        edge_row_length: edge.scaffold_length,
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

    fn base_input() -> LShapeInput {
        LShapeInput {
            width_x: 7000.0,
            depth_y: 10000.0,
            notch_width: 4000.0,
            notch_depth: 4000.0,
            notch_eave_overhang: None,
        }
    }

    #[test]
    fn notch_edges_settle_at_950_over_3900() {
        let plan = plan_l_shape(&base_input(), &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(plan.x_axis.total_length, 8700.0));
        assert!(f64_approx_equal(plan.y_axis.total_length, 11700.0));
        assert!(f64_approx_equal(plan.notch_vertical.clearance, 950.0));
        assert!(f64_approx_equal(plan.notch_vertical.scaffold_length, 3900.0));
        assert!(f64_approx_equal(plan.notch_horizontal.clearance, 950.0));
        assert!(f64_approx_equal(plan.notch_horizontal.scaffold_length, 3900.0));
    }

    #[test]
    fn split_faces_close_against_the_axis_totals() {
        let plan = plan_l_shape(&base_input(), &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(plan.south_outer.scaffold_length, 4800.0));
        assert!(f64_approx_equal(plan.west_outer.scaffold_length, 7800.0));
        assert!(f64_approx_equal(
            plan.south_outer.scaffold_length + plan.notch_horizontal.scaffold_length,
            plan.x_axis.total_length
        ));
        assert!(f64_approx_equal(
            plan.west_outer.scaffold_length + plan.notch_vertical.scaffold_length,
            plan.y_axis.total_length
        ));
    }

    #[test]
    fn eave_over_the_vertical_notch_edge_raises_only_that_edge() {
        let mut input = base_input();
        input.notch_eave_overhang = Some(1000.0);
        let plan = plan_l_shape(&input, &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(plan.notch_vertical.clearance, 1250.0));
        assert!(f64_approx_equal(plan.notch_vertical.scaffold_length, 3600.0));
        assert!(f64_approx_equal(plan.notch_horizontal.clearance, 950.0));
        assert!(f64_approx_equal(plan.west_outer.scaffold_length, 8100.0));
    }

    #[test]
    fn extended_notch_edge_follows_the_standard_baseline_without_a_window() {
        let params = ExtendedSpanParams::default();
        let result = derive_notch_edge_extended(7000.0, 4000.0, &params).unwrap();
        assert!(f64_approx_equal(result.outer.clearance, 850.0));
        assert!(f64_approx_equal(result.edge_clearance, 950.0));
        assert!(f64_approx_equal(result.edge_row_length, 3900.0));
        assert!(!result.extended_spans_used);
        assert!(result.outer.satisfied);
    }

    #[test]
    fn extended_notch_edge_carries_the_short_span_through_the_corner() {
        // The 150mm span lifts the outer face to 925mm; the notch edge then
        // derives from that lifted clearance.
        let params = ExtendedSpanParams::default()
            .with_window(880.0, 990.0)
            .with_adjacent_clearances(vec![880.0]);
        let result = derive_notch_edge_extended(10000.0, 3000.0, &params).unwrap();
        assert_eq!(result.outer.short_span_count, 1);
        assert!(result.extended_spans_used);
        assert!(f64_approx_equal(result.outer.clearance, 925.0));
        assert!(f64_approx_equal(result.edge_clearance, 925.0));
        assert!(f64_approx_equal(result.edge_row_length, 3000.0));
    }

    #[test]
    fn notch_row_overrunning_the_face_total_is_rejected() {
        // A 9000mm-deep notch on a 3000mm-wide building: the derived notch
        // row (9000mm) exceeds the 4800mm X total.
        let input = LShapeInput {
            width_x: 3000.0,
            depth_y: 10000.0,
            notch_width: 1000.0,
            notch_depth: 9000.0,
            notch_eave_overhang: None,
        };
        let result = plan_l_shape(&input, &SpanParams::default());
        assert!(matches!(
            result,
            Err(LayoutError::NegativeDerivedRow { .. })
        ));
    }

    #[test]
    fn notch_as_wide_as_the_building_is_rejected() {
        let mut input = base_input();
        input.notch_width = 7000.0;
        let result = plan_l_shape(&input, &SpanParams::default());
        assert!(matches!(
            result,
            Err(LayoutError::DimensionOutOfRange { .. })
        ));
    }
}
