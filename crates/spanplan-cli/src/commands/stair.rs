use super::print_edge;
use crate::cli::StairArgs;
use crate::error::Result;
use spanplan::engine::config::SpanParams;
use spanplan::workflows::stair::{StairInput, StairStep, plan_stair};

pub fn run(args: StairArgs) -> Result<()> {
    let input = StairInput {
        width_x: args.width,
        depth_y: args.depth,
        steps: args
            .steps
            .iter()
            .map(|&(run_x, rise_y)| StairStep { run_x, rise_y })
            .collect(),
    };
    execute(&input, &args.span.to_params())
}

pub fn execute(input: &StairInput, params: &SpanParams) -> Result<()> {
    let plan = plan_stair(input, params)?;
    println!("{}", plan.summary());
    print_edge("top", &plan.top);
    for (index, (riser, tread)) in plan.risers.iter().zip(&plan.treads).enumerate() {
        print_edge(&format!("riser {}", index + 1), riser);
        print_edge(&format!("tread {}", index + 1), tread);
    }
    print_edge("east (outer)", &plan.east_outer);
    print_edge("south", &plan.south);
    print_edge("west", &plan.west);
    Ok(())
}
