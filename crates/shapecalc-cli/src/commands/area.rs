//! Implementation of the `shapecalc area` command.

use serde::Serialize;
use tracing::{info, instrument};

use shapecalc_core::application::AreaCalculator;

use crate::{
    cli::{AreaArgs, OutputFormat, ShapeArg},
    error::CliResult,
    output::OutputManager,
};

/// JSON document for a single computed area.
#[derive(Debug, Serialize)]
pub struct AreaReport<'a> {
    pub kind: &'static str,
    pub shape: &'a ShapeArg,
    pub area: f64,
}

impl<'a> AreaReport<'a> {
    pub fn new(shape: &'a ShapeArg, area: f64) -> Self {
        Self {
            kind: shape.kind(),
            shape,
            area,
        }
    }
}

#[instrument(skip_all)]
pub fn execute(args: AreaArgs, calculator: AreaCalculator, output: OutputManager) -> CliResult<()> {
    let shape = args.shape.build()?;
    let area = calculator.calculate_area(shape.as_shape());
    info!(kind = shape.kind(), area, "Area calculated");

    match output.format() {
        OutputFormat::Json => output.json(&AreaReport::new(&shape, area))?,
        OutputFormat::Plain => output.value(&output.format_area(area))?,
        OutputFormat::Human | OutputFormat::Auto => {
            output.success(&format!("Area of {shape}: {}", output.format_area(area)))?
        }
    }

    Ok(())
}
