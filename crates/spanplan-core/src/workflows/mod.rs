//! # Workflows Module
//!
//! High-level shape composers. Each submodule turns the plan-view description
//! of one building shape into a complete set of per-edge scaffold rows, built
//! from the engine primitives:
//!
//! - **Rectangle** ([`rectangle`]) - one symmetric span per axis.
//! - **L-shape** ([`l_shape`]) - a bounding rectangle with one corner notch,
//!   the notch edges derived by corner propagation.
//! - **Concave** ([`concave`]) - a U-shaped plan with a centered notch, wing
//!   rows sized by the partial-span optimizer.
//! - **Stair** ([`stair`]) - a staircase of inside corners, riser and tread
//!   clearances chained from the outer faces.
//! - **Protrusion** ([`protrusion`]) - a rectangular plan with a lower
//!   roofline section (shed or balcony), including the variant whose internal
//!   roofline carries its own inside corner.
//! - **Boundary** ([`boundary`]) - the single- and dual-boundary constrained
//!   rectangles.
//!
//! Composers are fixed pipelines: they never search, they only call into the
//! engine and assemble edges. Every face that a composer splits into segments
//! is checked to close against the axis total; a mismatch is a programming
//! fault surfaced as [`LayoutError::Internal`].

use crate::core::units::MM_TOLERANCE;
use crate::engine::error::LayoutError;

pub mod boundary;
pub mod concave;
pub mod l_shape;
pub mod protrusion;
pub mod rectangle;
pub mod stair;

/// Checks that the scaffold segments composing one physical face sum to the
/// face's axis total.
pub(crate) fn verify_face_closure(
    face: &'static str,
    segments: &[f64],
    face_total: f64,
) -> Result<(), LayoutError> {
    let sum: f64 = segments.iter().sum();
    if (sum - face_total).abs() > MM_TOLERANCE {
        return Err(LayoutError::Internal(format!(
            "{face} face does not close: segments sum to {sum}mm, axis total is {face_total}mm"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_face_passes() {
        assert!(verify_face_closure("north", &[4800.0, 2100.0, 4800.0], 11700.0).is_ok());
    }

    #[test]
    fn open_face_is_an_internal_fault() {
        let result = verify_face_closure("north", &[4800.0, 4800.0], 11700.0);
        assert!(matches!(result, Err(LayoutError::Internal(_))));
    }
}
