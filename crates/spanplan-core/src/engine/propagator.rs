use serde::Serialize;
use tracing::{debug, instrument};

use super::config::{SpanParams, ensure_positive};
use super::error::LayoutError;

/// A dependent edge's clearance derived across a concave corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerDerivation {
    /// Clearance carried over from the already-settled reference edge (mm).
    pub reference_clearance: f64,
    /// Building length of the dependent segment (mm).
    pub building_length: f64,
    /// Clearance assigned to the dependent edge (mm).
    pub clearance: f64,
    /// Scaffold run along the dependent segment (mm). Unit-aligned whenever
    /// `aligned` is true.
    pub scaffold_length: f64,
    /// False when the minimum clearance forced the result off the unit grid.
    pub aligned: bool,
}

/// Derives the clearance of an edge that meets an already-settled edge at a
/// concave corner.
///
/// The settled edge's clearance plus the dependent segment's building length
/// is a fixed budget; the scaffold run along the segment must stay a multiple
/// of the span unit, and whatever the run does not consume becomes the
/// dependent clearance. Among the unit multiples the one whose clearance is
/// closest to the target wins; ties resolve to the shorter run.
#[instrument(level = "debug", skip(params))]
pub fn derive_corner_clearance(
    reference_clearance: f64,
    building_length: f64,
    params: &SpanParams,
) -> Result<CornerDerivation, LayoutError> {
    params.validate()?;
    ensure_positive("building_length", building_length)?;
    ensure_positive("reference_clearance", reference_clearance)?;

    let unit = params.span_unit;
    let min_clearance = params.effective_min_clearance();
    let budget = reference_clearance + building_length;

    if min_clearance > budget {
        // Even a zero-length run cannot admit the minimum. Clamp to the
        // minimum and flag the loss of alignment; the run takes whatever
        // the budget has left.
        debug!(budget, min_clearance, "Corner budget below minimum, clamping.");
        return Ok(CornerDerivation {
            reference_clearance,
            building_length,
            clearance: min_clearance,
            scaffold_length: budget - min_clearance,
            aligned: false,
        });
    }

    let mut best = (budget, 0.0);
    let mut best_diff = f64::INFINITY;

    let mut scaffold = 0.0;
    while scaffold <= budget {
        let clearance = budget - scaffold;
        if clearance >= min_clearance {
            let diff = (clearance - params.target_clearance).abs();
            if diff < best_diff {
                best_diff = diff;
                best = (clearance, scaffold);
            }
        }
        scaffold += unit;
    }

    let (clearance, scaffold_length) = best;
    debug!(clearance, scaffold_length, "Corner derivation settled.");

    Ok(CornerDerivation {
        reference_clearance,
        building_length,
        clearance,
        scaffold_length,
        aligned: true,
    })
}

/// Propagates a clearance through a run of concave corners, feeding each
/// derived clearance into the next segment.
///
/// Returns one derivation per segment, in order.
pub fn derive_corner_chain(
    reference_clearance: f64,
    building_lengths: &[f64],
    params: &SpanParams,
) -> Result<Vec<CornerDerivation>, LayoutError> {
    let mut clearance = reference_clearance;
    let mut derivations = Vec::with_capacity(building_lengths.len());
    for &length in building_lengths {
        let derivation = derive_corner_clearance(clearance, length, params)?;
        clearance = derivation.clearance;
        derivations.push(derivation);
    }
    Ok(derivations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn wing_of_4000_after_an_850_clearance_settles_at_950() {
        let derivation =
            derive_corner_clearance(850.0, 4000.0, &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(derivation.clearance, 950.0));
        assert!(f64_approx_equal(derivation.scaffold_length, 3900.0));
        assert!(derivation.aligned);
    }

    #[test]
    fn clearance_plus_run_always_equals_the_corner_budget() {
        for (reference, length) in [(850.0, 4000.0), (900.0, 910.0), (850.0, 2000.0)] {
            let derivation =
                derive_corner_clearance(reference, length, &SpanParams::default()).unwrap();
            assert!(f64_approx_equal(
                derivation.clearance + derivation.scaffold_length,
                reference + length
            ));
        }
    }

    #[test]
    fn equidistant_candidates_resolve_to_the_shorter_run() {
        // Budget 2850mm: runs of 1800mm and 2100mm leave 1050mm and 750mm,
        // both 150mm from the target. The shorter run wins.
        let derivation =
            derive_corner_clearance(850.0, 2000.0, &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(derivation.clearance, 1050.0));
        assert!(f64_approx_equal(derivation.scaffold_length, 1800.0));
    }

    #[test]
    fn short_segment_keeps_most_of_the_reference_clearance() {
        let derivation =
            derive_corner_clearance(900.0, 910.0, &SpanParams::default()).unwrap();
        assert!(f64_approx_equal(derivation.clearance, 910.0));
        assert!(f64_approx_equal(derivation.scaffold_length, 900.0));
    }

    #[test]
    fn eave_minimum_shifts_the_derived_clearance_up() {
        let params = SpanParams::default().with_eave_overhang(1000.0);
        let derivation = derive_corner_clearance(850.0, 4000.0, &params).unwrap();
        assert!(derivation.clearance >= 1080.0);
        assert!(f64_approx_equal(derivation.clearance, 1250.0));
        assert!(f64_approx_equal(derivation.scaffold_length, 3600.0));
        assert!(derivation.aligned);
    }

    #[test]
    fn minimum_above_the_budget_clamps_and_drops_alignment() {
        let params = SpanParams::default().with_min_clearance(5000.0);
        let derivation = derive_corner_clearance(850.0, 2000.0, &params).unwrap();
        assert!(!derivation.aligned);
        assert!(f64_approx_equal(derivation.clearance, 5000.0));
        assert!(f64_approx_equal(derivation.scaffold_length, -2150.0));
    }

    #[test]
    fn chain_feeds_each_derived_clearance_into_the_next_segment() {
        let chain =
            derive_corner_chain(900.0, &[3000.0, 3000.0], &SpanParams::default()).unwrap();
        assert_eq!(chain.len(), 2);
        assert!(f64_approx_equal(chain[0].clearance, 900.0));
        assert!(f64_approx_equal(chain[0].scaffold_length, 3000.0));
        assert!(f64_approx_equal(chain[1].clearance, 900.0));
        assert!(f64_approx_equal(chain[1].scaffold_length, 3000.0));
    }

    #[test]
    fn empty_chain_yields_no_derivations() {
        let chain = derive_corner_chain(900.0, &[], &SpanParams::default()).unwrap();
        assert!(chain.is_empty());
    }

    #[test]
    fn non_positive_segment_is_a_validation_fault() {
        let result = derive_corner_clearance(850.0, 0.0, &SpanParams::default());
        assert!(matches!(
            result,
            Err(LayoutError::NonPositiveDimension { .. })
        ));
    }
}
