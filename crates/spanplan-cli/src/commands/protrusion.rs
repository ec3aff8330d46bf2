use super::print_edge;
use crate::cli::ProtrusionArgs;
use crate::error::Result;
use spanplan::engine::config::SpanParams;
use spanplan::workflows::protrusion::{
    NotchedProtrusionInput, ProtrusionInput, plan_notched_protrusion, plan_protrusion,
};

pub fn run(args: ProtrusionArgs) -> Result<()> {
    let input = ProtrusionInput {
        width_x: args.width,
        total_depth: args.total_depth,
        main_depth: args.main_depth,
        protrusion_depth: args.protrusion_depth,
    };
    execute(&input, &args.span.to_params())
}

pub fn execute(input: &ProtrusionInput, params: &SpanParams) -> Result<()> {
    let plan = plan_protrusion(input, params)?;
    println!("{}", plan.summary());
    print_edge("north", &plan.north);
    print_edge("east", &plan.east);
    print_edge("south", &plan.south);
    print_edge("west", &plan.west);
    print_edge("roofline boundary", &plan.internal_boundary);
    println!(
        "  side rows: lower {:.1}mm, upper {:.1}mm (upper-level clearance {:.1}mm)",
        plan.lower_row_length, plan.upper_row_length, plan.upper_level_clearance
    );
    Ok(())
}

pub fn execute_notched(input: &NotchedProtrusionInput, params: &SpanParams) -> Result<()> {
    let plan = plan_notched_protrusion(input, params)?;
    println!("{}", plan.summary());
    print_edge("north", &plan.north);
    print_edge("east", &plan.east);
    print_edge("south", &plan.south);
    print_edge("west", &plan.west);
    print_edge("roofline west", &plan.boundary_west);
    print_edge("roofline east", &plan.boundary_east);
    print_edge("roofline step", &plan.boundary_riser);
    println!(
        "  lower side rows: west {:.1}mm, east {:.1}mm",
        plan.west_lower_row, plan.east_lower_row
    );
    Ok(())
}
