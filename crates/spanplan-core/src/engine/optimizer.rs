use serde::Serialize;
use tracing::{debug, instrument};

use super::config::{SpanParams, ensure_positive};
use super::error::LayoutError;
use crate::core::units::{MM_TOLERANCE, align_up};

/// Result of a symmetric span optimization along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpanSolution {
    pub building_dimension: f64,
    /// Clearance on each of the two sides (mm).
    pub clearance: f64,
    /// building_dimension + 2 x clearance, a multiple of the span unit (mm).
    pub total_length: f64,
    pub target_clearance: f64,
}

/// Result of a partial-span optimization where one end of the row is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartialSpanSolution {
    pub building_length: f64,
    pub fixed_clearance: f64,
    /// Clearance at the free end of the row (mm).
    pub free_clearance: f64,
    /// fixed_clearance + building_length + free_clearance, unit-aligned (mm).
    pub row_length: f64,
}

/// Finds the clearance closest to the target such that the total scaffold
/// length stays a multiple of the span unit and the clearance respects the
/// effective minimum.
///
/// Candidates are enumerated ascending from the smallest unit multiple that
/// admits the minimum clearance; ties in |clearance - target| resolve to the
/// smaller total because the scan is ascending and the comparison strict.
#[instrument(level = "debug", skip(params))]
pub fn optimize_clearance(
    building_dimension: f64,
    params: &SpanParams,
) -> Result<SpanSolution, LayoutError> {
    params.validate()?;
    ensure_positive("building_dimension", building_dimension)?;

    let unit = params.span_unit;
    let min_clearance = params.effective_min_clearance();

    let scan_base = align_up(building_dimension + 2.0 * min_clearance, unit);
    let scan_limit = align_up(building_dimension + 4.0 * params.target_clearance, unit);

    let mut best: Option<(f64, f64)> = None;
    let mut best_diff = f64::INFINITY;

    let mut total = scan_base;
    while total <= scan_limit + MM_TOLERANCE {
        let clearance = (total - building_dimension) / 2.0;
        if clearance >= min_clearance {
            let diff = (clearance - params.target_clearance).abs();
            if diff < best_diff {
                best_diff = diff;
                best = Some((clearance, total));
            }
        }
        total += unit;
    }

    // The scan base already admits the minimum clearance, so this only fires
    // for degenerate windows.
    let (clearance, total_length) = best.unwrap_or_else(|| {
        let clearance = (scan_base - building_dimension) / 2.0;
        (clearance, scan_base)
    });

    debug!(clearance, total_length, "Span optimization settled.");

    Ok(SpanSolution {
        building_dimension,
        clearance,
        total_length,
        target_clearance: params.target_clearance,
    })
}

/// Sizes a scaffold row whose far end is already fixed at `fixed_clearance`
/// beyond the building segment, picking the unit-aligned row length whose
/// free-end clearance is closest to the target.
///
/// Used by composers for rows that terminate against a notch rim rather than
/// running the full face symmetrically.
#[instrument(level = "debug", skip(params))]
pub fn optimize_partial_span(
    fixed_clearance: f64,
    building_length: f64,
    params: &SpanParams,
) -> Result<PartialSpanSolution, LayoutError> {
    params.validate()?;
    ensure_positive("building_length", building_length)?;
    if fixed_clearance < 0.0 {
        return Err(LayoutError::NonPositiveDimension {
            name: "fixed_clearance",
            value: fixed_clearance,
        });
    }

    let unit = params.span_unit;
    let min_clearance = params.effective_min_clearance();
    let occupied = fixed_clearance + building_length;

    let scan_base = align_up(occupied + min_clearance, unit);
    let scan_limit = align_up(occupied + 4.0 * params.target_clearance, unit);

    let mut best: Option<(f64, f64)> = None;
    let mut best_diff = f64::INFINITY;

    let mut row = scan_base;
    while row <= scan_limit + MM_TOLERANCE {
        let free = row - occupied;
        if free >= min_clearance {
            let diff = (free - params.target_clearance).abs();
            if diff < best_diff {
                best_diff = diff;
                best = Some((free, row));
            }
        }
        row += unit;
    }

    let (free_clearance, row_length) = best.unwrap_or_else(|| (scan_base - occupied, scan_base));

    debug!(free_clearance, row_length, "Partial span settled.");

    Ok(PartialSpanSolution {
        building_length,
        fixed_clearance,
        free_clearance,
        row_length,
    })
}
