use crate::cli::PlanArgs;
use crate::commands;
use crate::config::{PlanFile, ShapeSection};
use crate::error::{CliError, Result};
use spanplan::engine::config::BoundaryParams;
use std::fs;
use tracing::info;

pub fn run(args: PlanArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)?;
    let plan: PlanFile = toml::from_str(&raw).map_err(|e| CliError::FileParsing {
        path: args.file.clone(),
        source: e.into(),
    })?;

    info!(path = %args.file.display(), "Plan file loaded, dispatching.");

    let params = plan.span.clone();
    match plan.shape {
        ShapeSection::Rect(input) => commands::rect::execute(&input, &params),
        ShapeSection::LShape(input) => commands::l_shape::execute(&input, &params),
        ShapeSection::Concave(input) => commands::concave::execute(&input, &params),
        ShapeSection::Stair(input) => commands::stair::execute(&input, &params),
        ShapeSection::Protrusion(input) => commands::protrusion::execute(&input, &params),
        ShapeSection::NotchedProtrusion(input) => {
            commands::protrusion::execute_notched(&input, &params)
        }
        ShapeSection::Boundary(request) => {
            let boundary_params = BoundaryParams {
                target_clearance: params.target_clearance,
                safety_margin: request.safety_margin,
                span_unit: params.span_unit,
            };
            commands::boundary::execute(&request, &boundary_params)
        }
        ShapeSection::DualBoundary(request) => {
            let boundary_params = BoundaryParams {
                target_clearance: params.target_clearance,
                safety_margin: request.safety_margin,
                span_unit: params.span_unit,
            };
            commands::dual_boundary::execute(&request, &boundary_params)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PlanArgs;
    use std::io::Write;

    #[test]
    fn rect_plan_file_round_trips_through_the_dispatcher() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("plan.toml");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            "[shape.rect]\nwidth_x = 6000.0\ndepth_y = 10000.0\n"
        )
        .unwrap();

        let result = run(PlanArgs { file: path });
        assert!(result.is_ok());
    }

    #[test]
    fn missing_plan_file_is_an_io_error() {
        let result = run(PlanArgs {
            file: "/nonexistent/plan.toml".into(),
        });
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn malformed_plan_file_is_a_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("plan.toml");
        fs::write(&path, "not toml at all [[[").unwrap();

        let result = run(PlanArgs { file: path });
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
