use serde::Serialize;
use tracing::{debug, instrument};

use super::config::{BoundaryParams, ExtendedSpanParams, ensure_positive};
use super::error::LayoutError;
use super::optimizer::optimize_clearance;
use super::resolver::resolve_extended_span;

/// A symmetric span re-balanced against a single site boundary.
///
/// The total length never changes here: whatever the boundary side gives up
/// is handed to the open side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryAdjustedSpan {
    pub building_dimension: f64,
    /// Clearance on the boundary side, capped at distance minus margin (mm).
    pub boundary_clearance: f64,
    /// Clearance on the open side, absorbing the shift (mm).
    pub open_clearance: f64,
    pub total_length: f64,
    /// Amount moved from the boundary side to the open side (mm).
    pub shift: f64,
    /// The cap that was applied: boundary distance minus safety margin (mm).
    pub max_clearance: f64,
}

/// A span squeezed between two site boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DualBoundarySpan {
    pub building_dimension: f64,
    pub clearance_a: f64,
    pub clearance_b: f64,
    pub total_length: f64,
    /// True when the total had to shrink by one span unit.
    pub adjusted: bool,
    /// Length removed from the total, zero when `adjusted` is false (mm).
    pub adjustment: f64,
    /// Whether both clearances respect their limits after adjustment.
    pub satisfied: bool,
}

/// Single-boundary variant driven off the extended-span resolver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedBoundarySpan {
    pub building_dimension: f64,
    pub boundary_clearance: f64,
    pub open_clearance: f64,
    pub total_length: f64,
    pub long_span_count: usize,
    pub short_span_count: usize,
    pub shift: f64,
    pub satisfied: bool,
    pub note: String,
}

/// Dual-boundary variant driven off the extended-span resolver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedDualBoundarySpan {
    pub building_dimension: f64,
    pub clearance_a: f64,
    pub clearance_b: f64,
    pub total_length: f64,
    pub long_span_count: usize,
    pub short_span_count: usize,
    pub adjusted: bool,
    pub satisfied: bool,
    pub note: String,
}

/// Re-balances the symmetric optimum against one site boundary.
///
/// The boundary side is capped at the boundary distance minus the safety
/// margin; the difference shifts to the open side so the total length is
/// preserved exactly.
#[instrument(level = "debug", skip(params))]
pub fn clamp_to_boundary(
    building_dimension: f64,
    boundary_distance: f64,
    params: &BoundaryParams,
) -> Result<BoundaryAdjustedSpan, LayoutError> {
    ensure_positive("boundary_distance", boundary_distance)?;

    let base = optimize_clearance(building_dimension, &params.span_params())?;
    let max_clearance = boundary_distance - params.safety_margin;

    let boundary_clearance = base.clearance.min(max_clearance);
    let shift = base.clearance - boundary_clearance;
    let open_clearance = base.clearance + shift;

    debug!(boundary_clearance, open_clearance, shift, "Boundary clamp settled.");

    Ok(BoundaryAdjustedSpan {
        building_dimension,
        boundary_clearance,
        open_clearance,
        total_length: base.total_length,
        shift,
        max_clearance,
    })
}

/// Re-balances the symmetric optimum between two site boundaries.
///
/// The tighter boundary is clamped first and its deficit shifted across. If
/// the opposite side then breaks its own limit, the total shrinks by one span
/// unit and the remaining width is split evenly; `satisfied` reports whether
/// the even split clears both limits.
#[instrument(level = "debug", skip(params))]
pub fn clamp_to_dual_boundary(
    building_dimension: f64,
    boundary_distance_a: f64,
    boundary_distance_b: f64,
    params: &BoundaryParams,
) -> Result<DualBoundarySpan, LayoutError> {
    ensure_positive("boundary_distance_a", boundary_distance_a)?;
    ensure_positive("boundary_distance_b", boundary_distance_b)?;

    let base = optimize_clearance(building_dimension, &params.span_params())?;
    let limit_a = boundary_distance_a - params.safety_margin;
    let limit_b = boundary_distance_b - params.safety_margin;

    let a_is_priority = boundary_distance_a <= boundary_distance_b;
    let (priority_limit, opposite_limit) = if a_is_priority {
        (limit_a, limit_b)
    } else {
        (limit_b, limit_a)
    };

    let priority_clearance = base.clearance.min(priority_limit);
    let shift = base.clearance - priority_clearance;
    let opposite_clearance = base.clearance + shift;

    if opposite_clearance > opposite_limit {
        // Both limits unreachable by shifting: drop one unit and split evenly.
        let total_length = base.total_length - params.span_unit;
        let even = (total_length - building_dimension) / 2.0;
        let satisfied = even <= limit_a && even <= limit_b;
        debug!(total_length, even, satisfied, "Dual boundary shrunk and split.");
        return Ok(DualBoundarySpan {
            building_dimension,
            clearance_a: even,
            clearance_b: even,
            total_length,
            adjusted: true,
            adjustment: params.span_unit,
            satisfied,
        });
    }

    let (clearance_a, clearance_b) = if a_is_priority {
        (priority_clearance, opposite_clearance)
    } else {
        (opposite_clearance, priority_clearance)
    };

    Ok(DualBoundarySpan {
        building_dimension,
        clearance_a,
        clearance_b,
        total_length: base.total_length,
        adjusted: false,
        adjustment: 0.0,
        satisfied: true,
    })
}

/// Single-boundary clamp on top of an extended-span resolution.
///
/// The boundary cap becomes the resolver's window maximum, so the 355mm and
/// 150mm units get a chance to land inside it before any shifting happens.
#[instrument(level = "debug", skip(params))]
pub fn clamp_to_boundary_extended(
    building_dimension: f64,
    boundary_distance: f64,
    params: &BoundaryParams,
    adjacent_clearances: &[f64],
) -> Result<ExtendedBoundarySpan, LayoutError> {
    ensure_positive("boundary_distance", boundary_distance)?;

    let max_clearance = boundary_distance - params.safety_margin;
    let extended = ExtendedSpanParams {
        span: params.span_params(),
        max_clearance: Some(max_clearance),
        adjacent_clearances: adjacent_clearances.to_vec(),
    };

    let resolved = resolve_extended_span(building_dimension, &extended)?;

    let boundary_clearance = resolved.clearance.min(max_clearance);
    let shift = resolved.clearance - boundary_clearance;
    let open_clearance = resolved.clearance + shift;

    Ok(ExtendedBoundarySpan {
        building_dimension,
        boundary_clearance,
        open_clearance,
        total_length: resolved.total_length,
        long_span_count: resolved.long_span_count,
        short_span_count: resolved.short_span_count,
        shift,
        satisfied: resolved.satisfied,
        note: resolved.note,
    })
}

/// Dual-boundary clamp on top of an extended-span resolution.
///
/// The resolver window maximum is the tighter of the two limits. When the
/// shift breaks the opposite limit the resolved total is split evenly; the
/// total is not shrunk further, the resolver already chose it.
#[instrument(level = "debug", skip(params))]
pub fn clamp_to_dual_boundary_extended(
    building_dimension: f64,
    boundary_distance_a: f64,
    boundary_distance_b: f64,
    params: &BoundaryParams,
    adjacent_clearances: &[f64],
) -> Result<ExtendedDualBoundarySpan, LayoutError> {
    ensure_positive("boundary_distance_a", boundary_distance_a)?;
    ensure_positive("boundary_distance_b", boundary_distance_b)?;

    let limit_a = boundary_distance_a - params.safety_margin;
    let limit_b = boundary_distance_b - params.safety_margin;

    let extended = ExtendedSpanParams {
        span: params.span_params(),
        max_clearance: Some(limit_a.min(limit_b)),
        adjacent_clearances: adjacent_clearances.to_vec(),
    };

    let resolved = resolve_extended_span(building_dimension, &extended)?;

    let a_is_priority = boundary_distance_a <= boundary_distance_b;
    let (priority_limit, opposite_limit) = if a_is_priority {
        (limit_a, limit_b)
    } else {
        (limit_b, limit_a)
    };

    let priority_clearance = resolved.clearance.min(priority_limit);
    let shift = resolved.clearance - priority_clearance;
    let opposite_clearance = resolved.clearance + shift;

    let (clearance_a, clearance_b, adjusted, satisfied) =
        if opposite_clearance > opposite_limit {
            let even = (resolved.total_length - building_dimension) / 2.0;
            let fits = even <= limit_a && even <= limit_b;
            (even, even, true, fits && resolved.satisfied)
        } else if a_is_priority {
            (priority_clearance, opposite_clearance, false, resolved.satisfied)
        } else {
            (opposite_clearance, priority_clearance, false, resolved.satisfied)
        };

    Ok(ExtendedDualBoundarySpan {
        building_dimension,
        clearance_a,
        clearance_b,
        total_length: resolved.total_length,
        long_span_count: resolved.long_span_count,
        short_span_count: resolved.short_span_count,
        adjusted,
        satisfied,
        note: resolved.note,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn boundary_at_900_shifts_10mm_to_the_open_side() {
        let span = clamp_to_boundary(10000.0, 900.0, &BoundaryParams::default()).unwrap();
        assert!(f64_approx_equal(span.boundary_clearance, 840.0));
        assert!(f64_approx_equal(span.open_clearance, 860.0));
        assert!(f64_approx_equal(span.shift, 10.0));
        assert!(f64_approx_equal(span.total_length, 11700.0));
    }

    #[test]
    fn generous_boundary_leaves_the_symmetric_optimum_alone() {
        let span = clamp_to_boundary(10000.0, 1000.0, &BoundaryParams::default()).unwrap();
        assert!(f64_approx_equal(span.boundary_clearance, 850.0));
        assert!(f64_approx_equal(span.open_clearance, 850.0));
        assert!(f64_approx_equal(span.shift, 0.0));
    }

    #[test]
    fn clamped_sides_still_sum_to_the_total() {
        let span = clamp_to_boundary(10000.0, 900.0, &BoundaryParams::default()).unwrap();
        assert!(f64_approx_equal(
            span.boundary_clearance + span.building_dimension + span.open_clearance,
            span.total_length
        ));
    }

    #[test]
    fn tight_dual_boundaries_shrink_the_total_and_split_evenly() {
        let span =
            clamp_to_dual_boundary(10000.0, 900.0, 800.0, &BoundaryParams::default()).unwrap();
        assert!(span.adjusted);
        assert!(span.satisfied);
        assert!(f64_approx_equal(span.clearance_a, 700.0));
        assert!(f64_approx_equal(span.clearance_b, 700.0));
        assert!(f64_approx_equal(span.total_length, 11400.0));
        assert!(f64_approx_equal(span.adjustment, 300.0));
    }

    #[test]
    fn generous_dual_boundaries_change_nothing() {
        let span =
            clamp_to_dual_boundary(10000.0, 1000.0, 1000.0, &BoundaryParams::default()).unwrap();
        assert!(!span.adjusted);
        assert!(span.satisfied);
        assert!(f64_approx_equal(span.clearance_a, 850.0));
        assert!(f64_approx_equal(span.clearance_b, 850.0));
        assert!(f64_approx_equal(span.total_length, 11700.0));
    }

    #[test]
    fn one_tight_boundary_shifts_onto_the_roomier_side() {
        let span =
            clamp_to_dual_boundary(10000.0, 850.0, 1100.0, &BoundaryParams::default()).unwrap();
        assert!(!span.adjusted);
        assert!(f64_approx_equal(span.clearance_a, 790.0));
        assert!(f64_approx_equal(span.clearance_b, 910.0));
        assert!(f64_approx_equal(span.total_length, 11700.0));
    }

    #[test]
    fn unsatisfiable_dual_boundaries_still_split_evenly_but_report_failure() {
        let span =
            clamp_to_dual_boundary(10000.0, 700.0, 700.0, &BoundaryParams::default()).unwrap();
        assert!(span.adjusted);
        assert!(!span.satisfied);
        assert!(f64_approx_equal(span.clearance_a, 700.0));
        assert!(f64_approx_equal(span.clearance_b, 700.0));
        assert!(f64_approx_equal(span.total_length, 11400.0));
    }

    #[test]
    fn dual_split_preserves_the_closure_identity() {
        let span =
            clamp_to_dual_boundary(10000.0, 900.0, 800.0, &BoundaryParams::default()).unwrap();
        assert!(f64_approx_equal(
            span.clearance_a + span.building_dimension + span.clearance_b,
            span.total_length
        ));
    }

    #[test]
    fn extended_boundary_reports_failure_when_only_growth_is_available() {
        // The resolver can only add units, so a cap below the symmetric
        // optimum cannot be met. Best effort is reported, not an error.
        let span =
            clamp_to_boundary_extended(10000.0, 900.0, &BoundaryParams::default(), &[]).unwrap();
        assert!(!span.satisfied);
        assert!(f64_approx_equal(span.boundary_clearance, 840.0));
        assert!(f64_approx_equal(span.open_clearance, 1160.0));
        assert!(f64_approx_equal(span.total_length, 12000.0));
    }

    #[test]
    fn extended_boundary_with_room_matches_the_plain_clamp() {
        let span =
            clamp_to_boundary_extended(10000.0, 1000.0, &BoundaryParams::default(), &[]).unwrap();
        assert!(span.satisfied);
        assert_eq!(span.long_span_count, 0);
        assert_eq!(span.short_span_count, 0);
        assert!(f64_approx_equal(span.boundary_clearance, 850.0));
        assert!(f64_approx_equal(span.open_clearance, 850.0));
    }

    #[test]
    fn extended_dual_boundary_with_room_changes_nothing() {
        let span = clamp_to_dual_boundary_extended(
            10000.0,
            1000.0,
            1060.0,
            &BoundaryParams::default(),
            &[],
        )
        .unwrap();
        assert!(!span.adjusted);
        assert!(span.satisfied);
        assert!(f64_approx_equal(span.clearance_a, 850.0));
        assert!(f64_approx_equal(span.clearance_b, 850.0));
        assert!(f64_approx_equal(span.total_length, 11700.0));
    }

    #[test]
    fn extended_dual_boundary_falls_back_to_an_even_split() {
        let span = clamp_to_dual_boundary_extended(
            10000.0,
            900.0,
            800.0,
            &BoundaryParams::default(),
            &[],
        )
        .unwrap();
        assert!(span.adjusted);
        assert!(!span.satisfied);
        assert!(f64_approx_equal(span.clearance_a, span.clearance_b));
        assert!(f64_approx_equal(
            span.clearance_a + span.building_dimension + span.clearance_b,
            span.total_length
        ));
    }

    #[test]
    fn non_positive_boundary_distance_is_rejected() {
        let result = clamp_to_boundary(10000.0, 0.0, &BoundaryParams::default());
        assert!(matches!(
            result,
            Err(LayoutError::NonPositiveDimension { .. })
        ));
    }
}
