mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("spanplan CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Rect(args) => commands::rect::run(args),
        Commands::LShape(args) => commands::l_shape::run(args),
        Commands::Concave(args) => commands::concave::run(args),
        Commands::Stair(args) => commands::stair::run(args),
        Commands::Protrusion(args) => commands::protrusion::run(args),
        Commands::Boundary(args) => commands::boundary::run(args),
        Commands::DualBoundary(args) => commands::dual_boundary::run(args),
        Commands::Plan(args) => commands::plan::run(args),
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }

    command_result
}
