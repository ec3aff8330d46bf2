use crate::cli::BoundaryArgs;
use crate::config::BoundaryRequest;
use crate::error::Result;
use spanplan::engine::config::BoundaryParams;
use spanplan::workflows::boundary::{plan_boundary, plan_boundary_extended};

pub fn run(args: BoundaryArgs) -> Result<()> {
    let params = BoundaryParams {
        target_clearance: args.target_clearance,
        safety_margin: args.safety_margin,
        span_unit: args.span_unit,
    };
    let request = BoundaryRequest {
        building_dimension: args.dimension,
        boundary_distance: args.distance,
        safety_margin: args.safety_margin,
        extended: args.extended,
        adjacent_clearances: args.adjacent_clearances,
    };
    execute(&request, &params)
}

pub fn execute(request: &BoundaryRequest, params: &BoundaryParams) -> Result<()> {
    if request.extended {
        let span = plan_boundary_extended(
            request.building_dimension,
            request.boundary_distance,
            params,
            &request.adjacent_clearances,
        )?;
        println!(
            "Extended boundary plan for {}mm: {}mm boundary side / {}mm open side, \
             total {}mm (355mm x {}, 150mm x {}).",
            span.building_dimension,
            span.boundary_clearance,
            span.open_clearance,
            span.total_length,
            span.long_span_count,
            span.short_span_count,
        );
        println!("  {}", span.note);
        if !span.satisfied {
            println!("  warning: the boundary limit could not be met.");
        }
    } else {
        let plan = plan_boundary(request.building_dimension, request.boundary_distance, params)?;
        println!("{}", plan.summary());
    }
    Ok(())
}
