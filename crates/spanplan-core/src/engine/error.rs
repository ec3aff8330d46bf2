use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Dimension '{name}' must be positive, got {value}mm")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("Span unit must be positive, got {0}mm")]
    InvalidSpanUnit(f64),

    #[error(
        "Decomposed dimension mismatch: {whole_name} ({whole}mm) does not equal {parts_name} ({parts}mm)"
    )]
    DimensionMismatch {
        whole_name: &'static str,
        whole: f64,
        parts_name: &'static str,
        parts: f64,
    },

    #[error("Derived row '{name}' is negative ({value}mm); the unit rows cannot close the face")]
    NegativeDerivedRow { name: &'static str, value: f64 },

    #[error("Dimension '{name}' ({value}mm) must lie strictly inside '{bound_name}' ({bound}mm)")]
    DimensionOutOfRange {
        name: &'static str,
        value: f64,
        bound_name: &'static str,
        bound: f64,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
