//! Boundary-constrained rectangles: thin wrappers presenting the engine's
//! clamp results as plans with a readable summary.

use serde::Serialize;
use tracing::{info, instrument};

use crate::engine::boundary::{
    BoundaryAdjustedSpan, DualBoundarySpan, ExtendedBoundarySpan, ExtendedDualBoundarySpan,
    clamp_to_boundary, clamp_to_boundary_extended, clamp_to_dual_boundary,
    clamp_to_dual_boundary_extended,
};
use crate::engine::config::BoundaryParams;
use crate::engine::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryPlan {
    pub span: BoundaryAdjustedSpan,
}

impl BoundaryPlan {
    pub fn summary(&self) -> String {
        format!(
            "Boundary plan for {}mm: {}mm on the boundary side, {}mm on the open \
             side, total {}mm (shift {}mm).",
            self.span.building_dimension,
            self.span.boundary_clearance,
            self.span.open_clearance,
            self.span.total_length,
            self.span.shift,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DualBoundaryPlan {
    pub span: DualBoundarySpan,
}

impl DualBoundaryPlan {
    pub fn summary(&self) -> String {
        let outcome = match (self.span.adjusted, self.span.satisfied) {
            (false, _) => "limits met by shifting".to_string(),
            (true, true) => format!("total shrunk by {}mm and split evenly", self.span.adjustment),
            (true, false) => format!(
                "total shrunk by {}mm, limits still not met",
                self.span.adjustment
            ),
        };
        format!(
            "Dual boundary plan for {}mm: {}mm / {}mm, total {}mm ({outcome}).",
            self.span.building_dimension,
            self.span.clearance_a,
            self.span.clearance_b,
            self.span.total_length,
        )
    }
}

#[instrument(skip(params), name = "boundary_workflow")]
pub fn plan_boundary(
    building_dimension: f64,
    boundary_distance: f64,
    params: &BoundaryParams,
) -> Result<BoundaryPlan, LayoutError> {
    let span = clamp_to_boundary(building_dimension, boundary_distance, params)?;
    info!(shift = span.shift, "Boundary plan complete.");
    Ok(BoundaryPlan { span })
}

#[instrument(skip(params), name = "dual_boundary_workflow")]
pub fn plan_dual_boundary(
    building_dimension: f64,
    boundary_distance_a: f64,
    boundary_distance_b: f64,
    params: &BoundaryParams,
) -> Result<DualBoundaryPlan, LayoutError> {
    let span = clamp_to_dual_boundary(
        building_dimension,
        boundary_distance_a,
        boundary_distance_b,
        params,
    )?;
    info!(
        adjusted = span.adjusted,
        satisfied = span.satisfied,
        "Dual boundary plan complete."
    );
    Ok(DualBoundaryPlan { span })
}

/// Single-boundary plan that lets the extended spans try the window first.
pub fn plan_boundary_extended(
    building_dimension: f64,
    boundary_distance: f64,
    params: &BoundaryParams,
    adjacent_clearances: &[f64],
) -> Result<ExtendedBoundarySpan, LayoutError> {
    clamp_to_boundary_extended(
        building_dimension,
        boundary_distance,
        params,
        adjacent_clearances,
    )
}

/// Dual-boundary plan that lets the extended spans try the window first.
pub fn plan_dual_boundary_extended(
    building_dimension: f64,
    boundary_distance_a: f64,
    boundary_distance_b: f64,
    params: &BoundaryParams,
    adjacent_clearances: &[f64],
) -> Result<ExtendedDualBoundarySpan, LayoutError> {
    clamp_to_dual_boundary_extended(
        building_dimension,
        boundary_distance_a,
        boundary_distance_b,
        params,
        adjacent_clearances,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn boundary_plan_carries_the_clamped_span() {
        let plan = plan_boundary(10000.0, 900.0, &BoundaryParams::default()).unwrap();
        assert!(f64_approx_equal(plan.span.boundary_clearance, 840.0));
        assert!(plan.summary().contains("840"));
    }

    #[test]
    fn dual_boundary_summary_reports_the_shrink() {
        let plan =
            plan_dual_boundary(10000.0, 900.0, 800.0, &BoundaryParams::default()).unwrap();
        assert!(plan.span.adjusted);
        assert!(plan.summary().contains("shrunk by 300mm"));
    }

    #[test]
    fn extended_wrapper_delegates_to_the_resolver() {
        let span =
            plan_boundary_extended(10000.0, 1000.0, &BoundaryParams::default(), &[]).unwrap();
        assert!(span.satisfied);
        assert!(f64_approx_equal(span.boundary_clearance, 850.0));
    }
}
