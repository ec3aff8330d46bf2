//! The immutable edge record produced by every layout calculation.

use serde::Serialize;

/// Axis along which an edge runs in plan view.
///
/// An edge running along X belongs to a north/south face and its clearance is
/// measured along Y; an edge running along Y belongs to an east/west face and
/// its clearance is measured along X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
}

/// How an edge's clearance was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeRole {
    /// Independently solved outer face (span optimizer).
    Outer,
    /// Derived from an adjoining face's clearance at a concave corner.
    CornerDerived,
    /// Rim of a notch whose clearance falls out of a partial-span row.
    Notch,
    /// Boundary between two height levels of the same footprint.
    InternalBoundary,
}

/// One computed edge: a building face segment, the clearance in front of it,
/// and the scaffold row length allocated to it. Constructed once per request
/// and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub building_length: f64,
    pub clearance: f64,
    pub scaffold_length: f64,
    pub axis: Axis,
    pub role: EdgeRole,
}

impl Edge {
    pub fn outer(building_length: f64, clearance: f64, scaffold_length: f64, axis: Axis) -> Self {
        Self {
            building_length,
            clearance,
            scaffold_length,
            axis,
            role: EdgeRole::Outer,
        }
    }

    pub fn corner_derived(
        building_length: f64,
        clearance: f64,
        scaffold_length: f64,
        axis: Axis,
    ) -> Self {
        Self {
            building_length,
            clearance,
            scaffold_length,
            axis,
            role: EdgeRole::CornerDerived,
        }
    }

    pub fn notch(building_length: f64, clearance: f64, scaffold_length: f64, axis: Axis) -> Self {
        Self {
            building_length,
            clearance,
            scaffold_length,
            axis,
            role: EdgeRole::Notch,
        }
    }

    pub fn internal_boundary(
        building_length: f64,
        clearance: f64,
        scaffold_length: f64,
        axis: Axis,
    ) -> Self {
        Self {
            building_length,
            clearance,
            scaffold_length,
            axis,
            role: EdgeRole::InternalBoundary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_constructor_sets_role() {
        let edge = Edge::outer(7000.0, 850.0, 8700.0, Axis::X);
        assert_eq!(edge.role, EdgeRole::Outer);
        assert_eq!(edge.axis, Axis::X);
        assert_eq!(edge.scaffold_length, 8700.0);
    }

    #[test]
    fn corner_derived_constructor_sets_role() {
        let edge = Edge::corner_derived(4000.0, 950.0, 3900.0, Axis::Y);
        assert_eq!(edge.role, EdgeRole::CornerDerived);
    }
}
