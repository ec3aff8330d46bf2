use super::print_edge;
use crate::cli::RectArgs;
use crate::error::Result;
use spanplan::engine::config::SpanParams;
use spanplan::workflows::rectangle::{RectangleInput, plan_rectangle};

pub fn run(args: RectArgs) -> Result<()> {
    let input = RectangleInput {
        width_x: args.width,
        depth_y: args.depth,
    };
    execute(&input, &args.span.to_params())
}

pub fn execute(input: &RectangleInput, params: &SpanParams) -> Result<()> {
    let plan = plan_rectangle(input, params)?;
    println!("{}", plan.summary());
    print_edge("north", &plan.north);
    print_edge("east", &plan.east);
    print_edge("south", &plan.south);
    print_edge("west", &plan.west);
    Ok(())
}
