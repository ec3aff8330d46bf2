use super::print_edge;
use crate::cli::LShapeArgs;
use crate::error::Result;
use spanplan::engine::config::SpanParams;
use spanplan::workflows::l_shape::{LShapeInput, plan_l_shape};

pub fn run(args: LShapeArgs) -> Result<()> {
    let input = LShapeInput {
        width_x: args.width,
        depth_y: args.depth,
        notch_width: args.notch_width,
        notch_depth: args.notch_depth,
        notch_eave_overhang: args.notch_eave,
    };
    execute(&input, &args.span.to_params())
}

pub fn execute(input: &LShapeInput, params: &SpanParams) -> Result<()> {
    let plan = plan_l_shape(input, params)?;
    println!("{}", plan.summary());
    print_edge("north", &plan.north);
    print_edge("east", &plan.east);
    print_edge("south (outer)", &plan.south_outer);
    print_edge("notch horizontal", &plan.notch_horizontal);
    print_edge("notch vertical", &plan.notch_vertical);
    print_edge("west (outer)", &plan.west_outer);
    Ok(())
}
