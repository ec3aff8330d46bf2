use serde::Serialize;
use tracing::{debug, instrument};

use super::config::{ExtendedSpanParams, SpanParams};
use super::error::LayoutError;
use super::optimizer::optimize_clearance;
use crate::core::units::{
    LONG_EXTENDED_SPAN_MM, LONG_SPAN_ADJACENT_MAX_MM, LONG_SPAN_ADJACENT_MIN_MM,
    SHORT_EXTENDED_SPAN_MM,
};

/// Result of an extended-span resolution against a clearance window.
///
/// `satisfied` is the soft-failure channel: when even the extended units
/// cannot land inside the window, the best-effort candidate is returned with
/// `satisfied = false` and the caller decides whether to relax constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedSpanSolution {
    pub building_dimension: f64,
    pub clearance: f64,
    pub total_length: f64,
    /// Number of 355mm spans added to the baseline.
    pub long_span_count: usize,
    /// Number of 150mm spans added to the baseline.
    pub short_span_count: usize,
    /// Total length added to the standard baseline (mm).
    pub adjustment: f64,
    pub satisfied: bool,
    pub note: String,
}

/// Whether the 355mm extended span may be used: every adjacent edge
/// clearance must lie within the admissible window, and an empty list is
/// ineligible.
pub fn long_span_eligible(adjacent_clearances: &[f64]) -> bool {
    if adjacent_clearances.is_empty() {
        return false;
    }
    adjacent_clearances
        .iter()
        .all(|&clearance| (LONG_SPAN_ADJACENT_MIN_MM..=LONG_SPAN_ADJACENT_MAX_MM).contains(&clearance))
}

/// Resolves a clearance inside a [min, max] window, reaching for the 355mm
/// and 150mm extended spans when the standard-unit baseline falls outside.
///
/// Trials run in priority order (larger, fewer pieces first); the first
/// combination landing inside the window wins. If none does, a single
/// standard-unit increment is applied as a last resort and `satisfied`
/// reports whether that cleared the window.
#[instrument(level = "debug", skip(params))]
pub fn resolve_extended_span(
    building_dimension: f64,
    params: &ExtendedSpanParams,
) -> Result<ExtendedSpanSolution, LayoutError> {
    // Baseline on the standard grid, unconstrained.
    let baseline_params = SpanParams::default()
        .with_target_clearance(params.span.target_clearance)
        .with_span_unit(params.span.span_unit);
    let baseline = optimize_clearance(building_dimension, &baseline_params)?;

    let min_clearance = params.span.effective_min_clearance();
    let max_clearance = params.max_clearance.unwrap_or(f64::INFINITY);

    if (min_clearance..=max_clearance).contains(&baseline.clearance) {
        return Ok(ExtendedSpanSolution {
            building_dimension,
            clearance: baseline.clearance,
            total_length: baseline.total_length,
            long_span_count: 0,
            short_span_count: 0,
            adjustment: 0.0,
            satisfied: true,
            note: format!(
                "Standard spans satisfy the window: clearance {}mm, total {}mm.",
                baseline.clearance, baseline.total_length
            ),
        });
    }

    let eligible = long_span_eligible(&params.adjacent_clearances);
    debug!(eligible, "Baseline outside window, trying extended spans.");

    // (355mm count, 150mm count), larger pieces first.
    let trials: &[(usize, usize)] = if eligible {
        &[(1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
    } else {
        &[(0, 1)]
    };

    for &(long_count, short_count) in trials {
        let adjustment =
            long_count as f64 * LONG_EXTENDED_SPAN_MM + short_count as f64 * SHORT_EXTENDED_SPAN_MM;
        let total_length = baseline.total_length + adjustment;
        let clearance = (total_length - building_dimension) / 2.0;

        if (min_clearance..=max_clearance).contains(&clearance) {
            return Ok(ExtendedSpanSolution {
                building_dimension,
                clearance,
                total_length,
                long_span_count: long_count,
                short_span_count: short_count,
                adjustment,
                satisfied: true,
                note: format!(
                    "Extended spans used: 355mm x {long_count}, 150mm x {short_count}; \
                     +{adjustment}mm brings the clearance to {clearance}mm."
                ),
            });
        }
    }

    // Last resort: one standard unit. Never an error; the caller branches on
    // `satisfied`.
    let adjustment = params.span.span_unit;
    let total_length = baseline.total_length + adjustment;
    let clearance = (total_length - building_dimension) / 2.0;
    let satisfied = (min_clearance..=max_clearance).contains(&clearance);

    Ok(ExtendedSpanSolution {
        building_dimension,
        clearance,
        total_length,
        long_span_count: 0,
        short_span_count: 0,
        adjustment,
        satisfied,
        note: format!(
            "No extended-span combination fits the window; fell back to one \
             standard {adjustment}mm span (clearance {clearance}mm, window {}).",
            if satisfied { "satisfied" } else { "not satisfied" }
        ),
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
    fn adjacent_clearances_inside_window_enable_the_long_span() {
        assert!(long_span_eligible(&[600.0, 650.0]));
    }

    #[test]
    fn adjacent_clearances_outside_window_disable_the_long_span() {
        assert!(!long_span_eligible(&[850.0, 900.0]));
        assert!(!long_span_eligible(&[600.0, 900.0]));
    }

    #[test]
    fn empty_adjacency_list_disables_the_long_span() {
        assert!(!long_span_eligible(&[]));
    }

    #[test]
    fn baseline_inside_window_is_returned_without_extended_spans() {
        let params = ExtendedSpanParams::default();
        let solution = resolve_extended_span(10000.0, &params).unwrap();
        assert!(f64_approx_equal(solution.clearance, 850.0));
        assert!(f64_approx_equal(solution.total_length, 11700.0));
        assert_eq!(solution.long_span_count, 0);
        assert_eq!(solution.short_span_count, 0);
        assert!(solution.satisfied);
    }

    #[test]
    fn short_span_bridges_a_window_the_standard_grid_misses() {
        // Eave 800mm (min 880) against a boundary at 1050mm (max 990): the
        // 850mm baseline misses low, one 150mm span lands at 925mm.
        let params = ExtendedSpanParams::default()
            .with_window(880.0, 990.0)
            .with_adjacent_clearances(vec![880.0]);
        let solution = resolve_extended_span(10000.0, &params).unwrap();
        assert!(f64_approx_equal(solution.clearance, 925.0));
        assert!(f64_approx_equal(solution.total_length, 11850.0));
        assert_eq!(solution.long_span_count, 0);
        assert_eq!(solution.short_span_count, 1);
        assert!(solution.satisfied);
    }

    #[test]
    fn eligible_neighbors_still_fall_through_to_the_short_span_when_needed() {
        // 355mm overshoots the window, the lower-priority 150mm trial lands.
        let params = ExtendedSpanParams::default()
            .with_window(880.0, 990.0)
            .with_adjacent_clearances(vec![600.0, 650.0]);
        let solution = resolve_extended_span(10000.0, &params).unwrap();
        assert_eq!(solution.long_span_count, 0);
        assert_eq!(solution.short_span_count, 1);
        assert!(f64_approx_equal(solution.clearance, 925.0));
        assert!(solution.satisfied);
    }

    #[test]
    fn long_span_is_preferred_when_it_fits_the_window() {
        let params = ExtendedSpanParams::default()
            .with_window(1000.0, 1100.0)
            .with_adjacent_clearances(vec![600.0, 650.0]);
        let solution = resolve_extended_span(10000.0, &params).unwrap();
        assert_eq!(solution.long_span_count, 1);
        assert_eq!(solution.short_span_count, 0);
        assert!(f64_approx_equal(solution.clearance, 1027.5));
        assert!(f64_approx_equal(solution.adjustment, 355.0));
        assert!(solution.satisfied);
    }

    #[test]
    fn unreachable_window_reports_best_effort_with_satisfied_false() {
        let params = ExtendedSpanParams::default().with_window(960.0, 970.0);
        let solution = resolve_extended_span(10000.0, &params).unwrap();
        assert!(!solution.satisfied);
        assert!(f64_approx_equal(solution.adjustment, 300.0));
        assert!(f64_approx_equal(solution.clearance, 1000.0));
        assert!(!solution.note.is_empty());
    }
}
