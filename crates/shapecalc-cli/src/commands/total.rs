//! Implementation of the `shapecalc total` command.

use serde::Serialize;
use tracing::{debug, info, instrument};

use shapecalc_core::application::AreaCalculator;

use crate::{
    cli::{OutputFormat, TotalArgs},
    commands::area::AreaReport,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON document for a summed area.
#[derive(Debug, Serialize)]
struct TotalReport<'a> {
    shapes: Vec<AreaReport<'a>>,
    total_area: f64,
}

#[instrument(skip_all, fields(count = args.shapes.len()))]
pub fn execute(args: TotalArgs, calculator: AreaCalculator, output: OutputManager) -> CliResult<()> {
    let total = calculator.total_area(args.shapes.iter().map(|s| s.as_shape()));
    info!(total, "Total area calculated");

    // Each area is finite, but enough of them can still sum past f64::MAX.
    if !total.is_finite() {
        return Err(CliError::InvalidInput {
            message: format!(
                "the total area of {} shapes exceeds the largest representable number",
                args.shapes.len()
            ),
        });
    }

    match output.format() {
        OutputFormat::Json => {
            let shapes = args
                .shapes
                .iter()
                .map(|s| AreaReport::new(s, calculator.calculate_area(s.as_shape())))
                .collect();
            output.json(&TotalReport {
                shapes,
                total_area: total,
            })?;
        }
        OutputFormat::Plain => output.value(&output.format_area(total))?,
        OutputFormat::Human | OutputFormat::Auto => {
            output.header(&shape_count_header(args.shapes.len()))?;
            for shape in &args.shapes {
                let area = calculator.calculate_area(shape.as_shape());
                debug!(kind = shape.kind(), area, "Shape area");
                output.print(&format!("  {shape}: {}", output.format_area(area)))?;
            }
            output.success(&format!("Total area: {}", output.format_area(total)))?;
        }
    }

    Ok(())
}

fn shape_count_header(count: usize) -> String {
    match count {
        1 => "1 shape:".to_string(),
        n => format!("{n} shapes:"),
    }
}
