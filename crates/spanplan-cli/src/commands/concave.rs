use super::print_edge;
use crate::cli::ConcaveArgs;
use crate::error::Result;
use spanplan::engine::config::SpanParams;
use spanplan::workflows::concave::{ConcaveInput, plan_concave};

pub fn run(args: ConcaveArgs) -> Result<()> {
    let input = ConcaveInput {
        width_x: args.width,
        depth_y: args.depth,
        notch_width: args.notch_width,
        notch_depth: args.notch_depth,
    };
    execute(&input, &args.span.to_params())
}

pub fn execute(input: &ConcaveInput, params: &SpanParams) -> Result<()> {
    let plan = plan_concave(input, params)?;
    println!("{}", plan.summary());
    print_edge("west wing", &plan.west_wing);
    print_edge("notch west side", &plan.notch_west_side);
    print_edge("notch bottom", &plan.notch_bottom);
    print_edge("notch east side", &plan.notch_east_side);
    print_edge("east wing", &plan.east_wing);
    print_edge("east", &plan.east);
    print_edge("south", &plan.south);
    print_edge("west", &plan.west);
    Ok(())
}
