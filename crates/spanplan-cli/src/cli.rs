use clap::{Args, Parser, Subcommand};
use spanplan::engine::config::SpanParams;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "spanplan - scaffold layout planning for common building footprints, \
             computing unit-aligned row lengths and clearances per face.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan a plain rectangular footprint.
    Rect(RectArgs),
    /// Plan an L-shaped footprint with one corner notch.
    LShape(LShapeArgs),
    /// Plan a concave (U-shaped) footprint with a centered notch.
    Concave(ConcaveArgs),
    /// Plan a stair-shaped footprint with chained inside corners.
    Stair(StairArgs),
    /// Plan a two-level footprint with a protruding lower section.
    Protrusion(ProtrusionArgs),
    /// Plan a rectangle constrained by one site boundary.
    Boundary(BoundaryArgs),
    /// Plan a rectangle squeezed between two site boundaries.
    DualBoundary(DualBoundaryArgs),
    /// Plan a shape described in a TOML file.
    Plan(PlanArgs),
}

/// Span options shared by every shape subcommand.
#[derive(Args, Debug, Clone)]
pub struct SpanOptions {
    /// Clearance to steer toward (mm)
    #[arg(long, default_value_t = 900.0, value_name = "MM")]
    pub target_clearance: f64,

    /// Hard lower bound on the clearance (mm)
    #[arg(long, value_name = "MM")]
    pub min_clearance: Option<f64>,

    /// Roof projection beyond the wall face (mm); raises the minimum
    /// clearance to overhang + 80mm
    #[arg(long, value_name = "MM")]
    pub eave_overhang: Option<f64>,

    /// Increment of total row length (mm)
    #[arg(long, default_value_t = 300.0, value_name = "MM")]
    pub span_unit: f64,
}

impl SpanOptions {
    pub fn to_params(&self) -> SpanParams {
        let mut params = SpanParams::default()
            .with_target_clearance(self.target_clearance)
            .with_span_unit(self.span_unit);
        if let Some(min) = self.min_clearance {
            params = params.with_min_clearance(min);
        }
        if let Some(overhang) = self.eave_overhang {
            params = params.with_eave_overhang(overhang);
        }
        params
    }
}

#[derive(Args, Debug)]
pub struct RectArgs {
    /// Building width along X (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub width: f64,

    /// Building depth along Y (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub depth: f64,

    #[command(flatten)]
    pub span: SpanOptions,
}

#[derive(Args, Debug)]
pub struct LShapeArgs {
    /// Bounding width along X (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub width: f64,

    /// Bounding depth along Y (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub depth: f64,

    /// Notch extent along X (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub notch_width: f64,

    /// Notch extent along Y (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub notch_depth: f64,

    /// Eave overhang above the vertical notch edge (mm)
    #[arg(long, value_name = "MM")]
    pub notch_eave: Option<f64>,

    #[command(flatten)]
    pub span: SpanOptions,
}

#[derive(Args, Debug)]
pub struct ConcaveArgs {
    /// Bounding width along X (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub width: f64,

    /// Bounding depth along Y (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub depth: f64,

    /// Notch extent along X, centered on the north face (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub notch_width: f64,

    /// Notch extent along Y (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub notch_depth: f64,

    #[command(flatten)]
    pub span: SpanOptions,
}

#[derive(Args, Debug)]
pub struct StairArgs {
    /// Bounding width along X (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub width: f64,

    /// Bounding depth along Y (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub depth: f64,

    /// Step as RUNxRISE in mm (repeatable, outermost first), e.g. 3000x3000
    #[arg(long = "step", required = true, value_name = "RUNxRISE", value_parser = parse_step)]
    pub steps: Vec<(f64, f64)>,

    #[command(flatten)]
    pub span: SpanOptions,
}

#[derive(Args, Debug)]
pub struct ProtrusionArgs {
    /// Building width along X (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub width: f64,

    /// Overall depth along Y (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub total_depth: f64,

    /// Depth of the full-height main section (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub main_depth: f64,

    /// Depth of the protruding lower section (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub protrusion_depth: f64,

    #[command(flatten)]
    pub span: SpanOptions,
}

#[derive(Args, Debug)]
pub struct BoundaryArgs {
    /// Building dimension along the constrained axis (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub dimension: f64,

    /// Distance from the building to the site boundary (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub distance: f64,

    /// Safety margin subtracted from the boundary distance (mm)
    #[arg(long, default_value_t = 60.0, value_name = "MM")]
    pub safety_margin: f64,

    /// Let the 355mm/150mm extended spans try the window first
    #[arg(long)]
    pub extended: bool,

    /// Adjacent edge clearance, gates the 355mm span (repeatable, mm)
    #[arg(long = "adjacent", value_name = "MM")]
    pub adjacent_clearances: Vec<f64>,

    /// Clearance to steer toward (mm)
    #[arg(long, default_value_t = 900.0, value_name = "MM")]
    pub target_clearance: f64,

    /// Increment of total row length (mm)
    #[arg(long, default_value_t = 300.0, value_name = "MM")]
    pub span_unit: f64,
}

#[derive(Args, Debug)]
pub struct DualBoundaryArgs {
    /// Building dimension along the constrained axis (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub dimension: f64,

    /// Distance to the boundary on side A (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub distance_a: f64,

    /// Distance to the boundary on side B (mm)
    #[arg(long, required = true, value_name = "MM")]
    pub distance_b: f64,

    /// Safety margin subtracted from each boundary distance (mm)
    #[arg(long, default_value_t = 60.0, value_name = "MM")]
    pub safety_margin: f64,

    /// Let the 355mm/150mm extended spans try the window first
    #[arg(long)]
    pub extended: bool,

    /// Adjacent edge clearance, gates the 355mm span (repeatable, mm)
    #[arg(long = "adjacent", value_name = "MM")]
    pub adjacent_clearances: Vec<f64>,

    /// Clearance to steer toward (mm)
    #[arg(long, default_value_t = 900.0, value_name = "MM")]
    pub target_clearance: f64,

    /// Increment of total row length (mm)
    #[arg(long, default_value_t = 300.0, value_name = "MM")]
    pub span_unit: f64,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to a TOML plan file describing the shape and constraints
    #[arg(value_name = "PATH")]
    pub file: PathBuf,
}

fn parse_step(raw: &str) -> Result<(f64, f64), String> {
    let (run, rise) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected RUNxRISE, got '{raw}'"))?;
    let run: f64 = run
        .trim()
        .parse()
        .map_err(|_| format!("invalid step run '{run}'"))?;
    let rise: f64 = rise
        .trim()
        .parse()
        .map_err(|_| format!("invalid step rise '{rise}'"))?;
    Ok((run, rise))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_parser_accepts_run_x_rise() {
        assert_eq!(parse_step("3000x3000").unwrap(), (3000.0, 3000.0));
        assert_eq!(parse_step("1500X900").unwrap(), (1500.0, 900.0));
    }

    #[test]
    fn step_parser_rejects_malformed_input() {
        assert!(parse_step("3000").is_err());
        assert!(parse_step("axb").is_err());
    }

    #[test]
    fn span_options_fold_into_params() {
        let options = SpanOptions {
            target_clearance: 900.0,
            min_clearance: Some(700.0),
            eave_overhang: None,
            span_unit: 300.0,
        };
        let params = options.to_params();
        assert_eq!(params.effective_min_clearance(), 700.0);
        assert_eq!(params.span_unit, 300.0);
    }
}
