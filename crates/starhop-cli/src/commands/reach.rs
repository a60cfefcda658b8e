//! Reach command handler.

use anyhow::Result;

use starhop_cli::output::{render_json, render_reach_text, OutputFormat, ReachReport};

use super::GlobalOptions;

pub fn handle_reach_command(options: &GlobalOptions, system: &str, jump_range: f64) -> Result<()> {
    let navigator = options.navigator()?;
    let reached = navigator.reachable_from(system, jump_range)?;
    let max_hops = reached
        .reached()
        .filter_map(|id| reached.depth(id))
        .max()
        .unwrap_or(0);

    let report = ReachReport {
        system: system.to_string(),
        jump_range_ly: jump_range,
        reachable: reached.len(),
        max_hops,
    };

    match options.format {
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Basic => println!("{}", report.reachable),
        OutputFormat::Text => print!("{}", render_reach_text(&report, &options.palette())),
    }
    Ok(())
}
