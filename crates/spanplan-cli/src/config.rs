//! TOML plan-file model for the `plan` subcommand.
//!
//! A plan file carries an optional `[span]` table of shared span parameters
//! and exactly one `[shape.*]` table naming the footprint to plan.

use serde::Deserialize;
use spanplan::engine::config::SpanParams;
use spanplan::workflows::concave::ConcaveInput;
use spanplan::workflows::l_shape::LShapeInput;
use spanplan::workflows::protrusion::{NotchedProtrusionInput, ProtrusionInput};
use spanplan::workflows::rectangle::RectangleInput;
use spanplan::workflows::stair::StairInput;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    /// Shared span parameters; defaults apply when the table is absent.
    #[serde(default)]
    pub span: SpanParams,
    pub shape: ShapeSection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeSection {
    Rect(RectangleInput),
    LShape(LShapeInput),
    Concave(ConcaveInput),
    Stair(StairInput),
    Protrusion(ProtrusionInput),
    NotchedProtrusion(NotchedProtrusionInput),
    Boundary(BoundaryRequest),
    DualBoundary(DualBoundaryRequest),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundaryRequest {
    pub building_dimension: f64,
    pub boundary_distance: f64,
    #[serde(default = "default_safety_margin")]
    pub safety_margin: f64,
    #[serde(default)]
    pub extended: bool,
    #[serde(default)]
    pub adjacent_clearances: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DualBoundaryRequest {
    pub building_dimension: f64,
    pub boundary_distance_a: f64,
    pub boundary_distance_b: f64,
    #[serde(default = "default_safety_margin")]
    pub safety_margin: f64,
    #[serde(default)]
    pub extended: bool,
    #[serde(default)]
    pub adjacent_clearances: Vec<f64>,
}

fn default_safety_margin() -> f64 {
    60.0
}
