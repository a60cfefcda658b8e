//! Output formatting for command results.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;
use starhop_lib::{Neighbour, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Plain text without colors or decorations, one system name per line.
    Basic,
    /// JSON document on stdout.
    Json,
}

/// Serialise any result to pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a route in text form.
pub fn render_route_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route from {wb}{}{r} to {wb}{}{r} ({g}{} hops{r}, jump range {} ly):",
        summary.start,
        summary.goal,
        summary.hops,
        summary.jump_range_ly,
        wb = palette.white_bold,
        g = palette.green,
        r = palette.reset,
    );
    for step in &summary.steps {
        let _ = writeln!(
            buffer,
            "{:>3}. {wb}{}{r} {gray}({}){r}",
            step.index,
            step.name,
            step.id,
            wb = palette.white_bold,
            gray = palette.gray,
            r = palette.reset,
        );
    }
    buffer
}

/// Render a route as bare system names.
pub fn render_route_basic(summary: &RouteSummary) -> String {
    let mut buffer = String::new();
    for step in &summary.steps {
        let _ = writeln!(buffer, "{}", step.name);
    }
    buffer
}

/// Neighbours of a system, as printed by the `neighbours` command.
#[derive(Debug, Clone, Serialize)]
pub struct NeighbourReport {
    pub system: String,
    pub radius_ly: f64,
    pub neighbours: Vec<Neighbour>,
}

/// Render a neighbour report in text form.
pub fn render_neighbours_text(report: &NeighbourReport, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Systems within {} ly of {wb}{}{r}: {}",
        report.radius_ly,
        report.system,
        report.neighbours.len(),
        wb = palette.white_bold,
        r = palette.reset,
    );
    for neighbour in &report.neighbours {
        let _ = writeln!(
            buffer,
            " - {wb}{}{r} {cyan}{:.2} ly{r} {gray}({}){r}",
            neighbour.name,
            neighbour.distance_ly,
            neighbour.id,
            wb = palette.white_bold,
            cyan = palette.cyan,
            gray = palette.gray,
            r = palette.reset,
        );
    }
    buffer
}

/// Size of a reachable component, as printed by the `reach` command.
#[derive(Debug, Clone, Serialize)]
pub struct ReachReport {
    pub system: String,
    pub jump_range_ly: f64,
    pub reachable: usize,
    pub max_hops: usize,
}

/// Render a reach report in text form.
pub fn render_reach_text(report: &ReachReport, palette: &ColorPalette) -> String {
    format!(
        "{wb}{}{r} reaches {g}{}{r} systems with {} ly jumps (farthest {} hops)\n",
        report.system,
        report.reachable,
        report.jump_range_ly,
        report.max_hops,
        wb = palette.white_bold,
        g = palette.green,
        r = palette.reset,
    )
}
