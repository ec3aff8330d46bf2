//! Stair-shaped plan: a staircase of inside corners descending from the
//! northwest toward the southeast.
//!
//! Riser clearances chain inward from the east face, tread clearances from
//! the north face; each derived clearance seeds the next corner. The east
//! face remainder falls out of the Y total by subtraction.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::verify_face_closure;
use crate::core::edge::{Axis, Edge};
use crate::engine::config::{ExtendedSpanParams, SpanParams, ensure_positive, ensure_row_fits};
use crate::engine::error::LayoutError;
use crate::engine::optimizer::{SpanSolution, optimize_clearance};
use crate::engine::propagator::{CornerDerivation, derive_corner_chain};
use crate::engine::resolver::{ExtendedSpanSolution, resolve_extended_span};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StairStep {
    /// Horizontal extent of the step (mm).
    pub run_x: f64,
    /// Vertical extent of the step (mm).
    pub rise_y: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StairInput {
    /// Bounding width along X (mm).
    pub width_x: f64,
    /// Bounding depth along Y (mm).
    pub depth_y: f64,
    /// Steps ordered from the outermost corner inward.
    pub steps: Vec<StairStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StairPlan {
    pub width_x: f64,
    pub depth_y: f64,
    pub x_axis: SpanSolution,
    pub y_axis: SpanSolution,
    /// Topmost X-running face, west of the staircase.
    pub top: Edge,
    /// Y-running riser edges, outermost first.
    pub risers: Vec<Edge>,
    /// X-running tread edges, outermost first.
    pub treads: Vec<Edge>,
    /// East face remainder below the staircase.
    pub east_outer: Edge,
    pub south: Edge,
    pub west: Edge,
}

impl StairPlan {
    pub fn summary(&self) -> String {
        let riser_clearances: Vec<String> = self
            .risers
            .iter()
            .map(|edge| format!("{}mm", edge.clearance))
            .collect();
        format!(
            "Stair {}mm x {}mm with {} step(s): rows {}mm (X) and {}mm (Y); \
             riser clearances {}, east remainder {}mm.",
            self.width_x,
            self.depth_y,
            self.risers.len(),
            self.x_axis.total_length,
            self.y_axis.total_length,
            riser_clearances.join(", "),
            self.east_outer.scaffold_length,
        )
    }
}

#[instrument(skip_all, name = "stair_workflow")]
pub fn plan_stair(input: &StairInput, params: &SpanParams) -> Result<StairPlan, LayoutError> {
    ensure_positive("width_x", input.width_x)?;
    ensure_positive("depth_y", input.depth_y)?;
    if input.steps.is_empty() {
        return Err(LayoutError::NonPositiveDimension {
            name: "step_count",
            value: 0.0,
        });
    }
    for step in &input.steps {
        ensure_positive("step_run_x", step.run_x)?;
        ensure_positive("step_rise_y", step.rise_y)?;
    }
    let runs_total: f64 = input.steps.iter().map(|step| step.run_x).sum();
    let rises_total: f64 = input.steps.iter().map(|step| step.rise_y).sum();
    if runs_total >= input.width_x {
        return Err(LayoutError::DimensionOutOfRange {
            name: "step_runs_total",
            value: runs_total,
            bound_name: "width_x",
            bound: input.width_x,
        });
    }
    if rises_total >= input.depth_y {
        return Err(LayoutError::DimensionOutOfRange {
            name: "step_rises_total",
            value: rises_total,
            bound_name: "depth_y",
            bound: input.depth_y,
        });
    }

    let x_axis = optimize_clearance(input.width_x, params)?;
    let y_axis = optimize_clearance(input.depth_y, params)?;

    // Risers stand off in X and chain from the east face clearance; each
    // derivation crosses the adjacent tread's run. Treads stand off in Y and
    // chain from the north face clearance across the adjacent rise.
    let runs: Vec<f64> = input.steps.iter().map(|step| step.run_x).collect();
    let rises: Vec<f64> = input.steps.iter().map(|step| step.rise_y).collect();
    let riser_chain = derive_corner_chain(x_axis.clearance, &runs, params)?;
    let tread_chain = derive_corner_chain(y_axis.clearance, &rises, params)?;

    let risers: Vec<Edge> = input
        .steps
        .iter()
        .zip(&riser_chain)
        .map(|(step, derivation)| {
            Edge::corner_derived(
                step.rise_y,
                derivation.clearance,
                derivation.scaffold_length,
                Axis::Y,
            )
        })
        .collect();
    let treads: Vec<Edge> = input
        .steps
        .iter()
        .zip(&tread_chain)
        .map(|(step, derivation)| {
            Edge::corner_derived(
                step.run_x,
                derivation.clearance,
                derivation.scaffold_length,
                Axis::X,
            )
        })
        .collect();

    let riser_rows: f64 = risers.iter().map(|edge| edge.scaffold_length).sum();
    ensure_row_fits("east_remainder_row", y_axis.total_length - riser_rows)?;
    let east_outer = Edge::outer(
        input.depth_y - rises_total,
        x_axis.clearance,
        y_axis.total_length - riser_rows,
        Axis::Y,
    );

    let mut east_segments: Vec<f64> = risers.iter().map(|edge| edge.scaffold_length).collect();
    east_segments.push(east_outer.scaffold_length);
    verify_face_closure("east", &east_segments, y_axis.total_length)?;

    let top = Edge::outer(
        input.width_x - runs_total,
        y_axis.clearance,
        x_axis.total_length,
        Axis::X,
    );
    let south = Edge::outer(input.width_x, y_axis.clearance, x_axis.total_length, Axis::X);
    let west = Edge::outer(input.depth_y, x_axis.clearance, y_axis.total_length, Axis::Y);

    info!(
        steps = input.steps.len(),
        east_remainder = east_outer.scaffold_length,
        "Stair plan complete."
    );

    Ok(StairPlan {
        width_x: input.width_x,
        depth_y: input.depth_y,
        x_axis,
        y_axis,
        top,
        risers,
        treads,
        east_outer,
        south,
        west,
    })
}

/// Step chain seeded from a resolver-solved outer face.
///
/// The window and adjacency gate constrain the outer face; each derived
/// clearance then feeds the next corner on the standard grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedStepChain {
    /// Resolver solution for the outer face the chain hangs off.
    pub outer: ExtendedSpanSolution,
    /// One derivation per step, outermost first.
    pub steps: Vec<CornerDerivation>,
    /// Whether any 355mm/150mm span ended up in the outer face.
    pub extended_spans_used: bool,
}

#[instrument(skip_all, name = "stair_extended_workflow")]
pub fn derive_step_chain_extended(
    outer_dimension: f64,
    step_lengths: &[f64],
    params: &ExtendedSpanParams,
) -> Result<ExtendedStepChain, LayoutError> {
    ensure_positive("outer_dimension", outer_dimension)?;
    if step_lengths.is_empty() {
        return Err(LayoutError::NonPositiveDimension {
            name: "step_count",
            value: 0.0,
        });
    }

    let outer = resolve_extended_span(outer_dimension, params)?;
    let corner_params = SpanParams::default()
        .with_target_clearance(params.span.target_clearance)
        .with_span_unit(params.span.span_unit);
    let steps = derive_corner_chain(outer.clearance, step_lengths, &corner_params)?;
    let extended_spans_used = outer.long_span_count > 0 || outer.short_span_count > 0;

    info!(
        outer_clearance = outer.clearance,
        steps = steps.len(),
        extended_spans_used,
        "Extended step chain derived."
    );

    Ok(ExtendedStepChain {
        outer,
        steps,
        extended_spans_used,
    })
}
