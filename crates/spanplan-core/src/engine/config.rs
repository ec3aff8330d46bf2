use serde::Deserialize;

use super::error::LayoutError;
use crate::core::units::{
    DEFAULT_SAFETY_MARGIN_MM, DEFAULT_TARGET_CLEARANCE_MM, EAVE_CLEARANCE_MARGIN_MM,
    STANDARD_SPAN_MM,
};

/// Parameters for a single span optimization or corner derivation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpanParams {
    /// Clearance the search steers toward (mm).
    pub target_clearance: f64,
    /// Hard lower bound on the clearance, if any (mm).
    pub min_clearance: Option<f64>,
    /// Roof projection beyond the wall face (mm). Imposes a minimum
    /// clearance of overhang + 80mm, merged with `min_clearance`.
    pub eave_overhang: Option<f64>,
    /// Increment of total scaffold length (mm).
    pub span_unit: f64,
}

impl Default for SpanParams {
    fn default() -> Self {
        Self {
            target_clearance: DEFAULT_TARGET_CLEARANCE_MM,
            min_clearance: None,
            eave_overhang: None,
            span_unit: STANDARD_SPAN_MM,
        }
    }
}

impl SpanParams {
    pub fn with_target_clearance(mut self, target: f64) -> Self {
        self.target_clearance = target;
        self
    }

    pub fn with_min_clearance(mut self, min: f64) -> Self {
        self.min_clearance = Some(min);
        self
    }

    pub fn with_eave_overhang(mut self, overhang: f64) -> Self {
        self.eave_overhang = Some(overhang);
        self
    }

    pub fn with_span_unit(mut self, unit: f64) -> Self {
        self.span_unit = unit;
        self
    }

    /// The binding lower bound on the clearance: the explicit minimum merged
    /// with the eave-derived minimum (overhang + 80mm), defaulting to zero.
    pub fn effective_min_clearance(&self) -> f64 {
        let eave_min = self
            .eave_overhang
            .map(|overhang| overhang + EAVE_CLEARANCE_MARGIN_MM);
        match (self.min_clearance, eave_min) {
            (Some(min), Some(eave)) => min.max(eave),
            (Some(min), None) => min,
            (None, Some(eave)) => eave,
            (None, None) => 0.0,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        if self.span_unit <= 0.0 {
            return Err(LayoutError::InvalidSpanUnit(self.span_unit));
        }
        Ok(())
    }
}

/// Parameters for the extended-span resolver: a [min, max] clearance window
/// plus the adjacent clearances that gate the 355mm unit.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtendedSpanParams {
    pub span: SpanParams,
    /// Hard upper bound on the clearance, if any (mm).
    pub max_clearance: Option<f64>,
    /// Clearances of the neighboring edges, consulted only to decide whether
    /// the 355mm unit may be used.
    pub adjacent_clearances: Vec<f64>,
}

impl ExtendedSpanParams {
    pub fn with_window(mut self, min: f64, max: f64) -> Self {
        self.span.min_clearance = Some(min);
        self.max_clearance = Some(max);
        self
    }

    pub fn with_adjacent_clearances(mut self, clearances: Vec<f64>) -> Self {
        self.adjacent_clearances = clearances;
        self
    }
}

/// Parameters for the boundary-constrained variants.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryParams {
    pub target_clearance: f64,
    /// Offset subtracted from a boundary distance to obtain the maximum
    /// permissible clearance on that side (mm).
    pub safety_margin: f64,
    pub span_unit: f64,
}

impl Default for BoundaryParams {
    fn default() -> Self {
        Self {
            target_clearance: DEFAULT_TARGET_CLEARANCE_MM,
            safety_margin: DEFAULT_SAFETY_MARGIN_MM,
            span_unit: STANDARD_SPAN_MM,
        }
    }
}

impl BoundaryParams {
    pub(crate) fn span_params(&self) -> SpanParams {
        SpanParams::default()
            .with_target_clearance(self.target_clearance)
            .with_span_unit(self.span_unit)
    }
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), LayoutError> {
    if value <= 0.0 {
        return Err(LayoutError::NonPositiveDimension { name, value });
    }
    Ok(())
}

pub(crate) fn ensure_row_fits(name: &'static str, value: f64) -> Result<(), LayoutError> {
    if value < 0.0 {
        return Err(LayoutError::NegativeDerivedRow { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_planning_values() {
        let params = SpanParams::default();
        assert_eq!(params.target_clearance, 900.0);
        assert_eq!(params.span_unit, 300.0);
        assert_eq!(params.effective_min_clearance(), 0.0);
    }

    #[test]
    fn eave_overhang_raises_effective_minimum() {
        let params = SpanParams::default().with_eave_overhang(600.0);
        assert_eq!(params.effective_min_clearance(), 680.0);
    }

    #[test]
    fn explicit_minimum_wins_over_smaller_eave_minimum() {
        let params = SpanParams::default()
            .with_min_clearance(1000.0)
            .with_eave_overhang(600.0);
        assert_eq!(params.effective_min_clearance(), 1000.0);
    }

    #[test]
    fn eave_minimum_wins_over_smaller_explicit_minimum() {
        let params = SpanParams::default()
            .with_min_clearance(200.0)
            .with_eave_overhang(1000.0);
        assert_eq!(params.effective_min_clearance(), 1080.0);
    }

    #[test]
    fn non_positive_span_unit_is_rejected() {
        let params = SpanParams::default().with_span_unit(0.0);
        assert_eq!(params.validate(), Err(LayoutError::InvalidSpanUnit(0.0)));
    }
}
