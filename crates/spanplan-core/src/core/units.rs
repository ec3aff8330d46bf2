//! Assembly-unit constants and unit-alignment arithmetic.
//!
//! All dimensions are millimeters. The total scaffold length along a face can
//! only change in discrete increments: the standard 300mm span, plus two
//! extended spans (355mm and 150mm) that are admissible only under the
//! adjacency eligibility rule enforced by the extended-span resolver.

/// Standard span unit: the default increment of total scaffold length.
pub const STANDARD_SPAN_MM: f64 = 300.0;

/// Long extended span, usable only when every adjacent edge clearance lies
/// within [`LONG_SPAN_ADJACENT_MIN_MM`, `LONG_SPAN_ADJACENT_MAX_MM`].
pub const LONG_EXTENDED_SPAN_MM: f64 = 355.0;

/// Short extended span, usable without an adjacency precondition.
pub const SHORT_EXTENDED_SPAN_MM: f64 = 150.0;

/// Lower bound of the adjacent-clearance window gating the 355mm span.
pub const LONG_SPAN_ADJACENT_MIN_MM: f64 = 450.0;

/// Upper bound of the adjacent-clearance window gating the 355mm span.
pub const LONG_SPAN_ADJACENT_MAX_MM: f64 = 700.0;

/// An eave overhang imposes a minimum clearance of overhang + this margin.
pub const EAVE_CLEARANCE_MARGIN_MM: f64 = 80.0;

/// Default offset subtracted from a site-boundary distance to obtain the
/// maximum permissible clearance on that side.
pub const DEFAULT_SAFETY_MARGIN_MM: f64 = 60.0;

/// Default target clearance between a building face and the scaffold line.
pub const DEFAULT_TARGET_CLEARANCE_MM: f64 = 900.0;

/// Tolerance for comparing millimeter quantities assembled from f64 sums.
pub const MM_TOLERANCE: f64 = 1e-6;

/// Rounds `length` up to the next multiple of `unit` (identity if already
/// aligned).
#[inline]
pub fn align_up(length: f64, unit: f64) -> f64 {
    (length / unit).ceil() * unit
}

/// Whether `length` is a whole multiple of `unit`, within [`MM_TOLERANCE`].
#[inline]
pub fn is_unit_aligned(length: f64, unit: f64) -> bool {
    let remainder = (length / unit).round() * unit - length;
    remainder.abs() < MM_TOLERANCE
}
