//! Route command handler.

use anyhow::{Context, Result};

use starhop_cli::output::{render_json, render_route_basic, render_route_text, OutputFormat};
use starhop_lib::RouteSummary;

use super::GlobalOptions;

/// Compute and print a minimum-hop route.
pub fn handle_route_command(
    options: &GlobalOptions,
    from: &str,
    to: &str,
    jump_range: f64,
) -> Result<()> {
    let navigator = options.navigator()?;
    let route = navigator
        .calculate_route(from, to, jump_range)
        .with_context(|| format!("failed to route from {from} to {to}"))?;
    let summary = RouteSummary::from_route(&route);

    let rendered = match options.format {
        OutputFormat::Text => render_route_text(&summary, &options.palette()),
        OutputFormat::Basic => render_route_basic(&summary),
        OutputFormat::Json => render_json(&summary)?,
    };
    print!("{rendered}");
    if options.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
