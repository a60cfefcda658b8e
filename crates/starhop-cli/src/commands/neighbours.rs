//! Neighbours command handler.

use anyhow::Result;

use starhop_cli::output::{render_json, render_neighbours_text, NeighbourReport, OutputFormat};

use super::GlobalOptions;

pub fn handle_neighbours_command(
    options: &GlobalOptions,
    system: &str,
    radius: f64,
    limit: Option<usize>,
) -> Result<()> {
    let navigator = options.navigator()?;
    let mut neighbours = navigator.systems_within(system, radius)?;
    if let Some(limit) = limit {
        neighbours.truncate(limit);
    }

    let report = NeighbourReport {
        system: system.to_string(),
        radius_ly: radius,
        neighbours,
    };

    match options.format {
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Basic => {
            for neighbour in &report.neighbours {
                println!("{}", neighbour.name);
            }
        }
        OutputFormat::Text => print!("{}", render_neighbours_text(&report, &options.palette())),
    }
    Ok(())
}
