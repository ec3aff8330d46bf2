use crate::cli::DualBoundaryArgs;
use crate::config::DualBoundaryRequest;
use crate::error::Result;
use spanplan::engine::config::BoundaryParams;
use spanplan::workflows::boundary::{plan_dual_boundary, plan_dual_boundary_extended};

pub fn run(args: DualBoundaryArgs) -> Result<()> {
    let params = BoundaryParams {
        target_clearance: args.target_clearance,
        safety_margin: args.safety_margin,
        span_unit: args.span_unit,
    };
    let request = DualBoundaryRequest {
        building_dimension: args.dimension,
        boundary_distance_a: args.distance_a,
        boundary_distance_b: args.distance_b,
        safety_margin: args.safety_margin,
        extended: args.extended,
        adjacent_clearances: args.adjacent_clearances,
    };
    execute(&request, &params)
}

pub fn execute(request: &DualBoundaryRequest, params: &BoundaryParams) -> Result<()> {
    if request.extended {
        let span = plan_dual_boundary_extended(
            request.building_dimension,
            request.boundary_distance_a,
            request.boundary_distance_b,
            params,
            &request.adjacent_clearances,
        )?;
        println!(
            "Extended dual boundary plan for {}mm: {}mm / {}mm, total {}mm \
             (355mm x {}, 150mm x {}).",
            span.building_dimension,
            span.clearance_a,
            span.clearance_b,
            span.total_length,
            span.long_span_count,
            span.short_span_count,
        );
        println!("  {}", span.note);
        if !span.satisfied {
            println!("  warning: the boundary limits could not be met.");
        }
    } else {
        let plan = plan_dual_boundary(
            request.building_dimension,
            request.boundary_distance_a,
            request.boundary_distance_b,
            params,
        )?;
        println!("{}", plan.summary());
        if !plan.span.satisfied {
            println!("  warning: the boundary limits could not be met.");
        }
    }
    Ok(())
}
