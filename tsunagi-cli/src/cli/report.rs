//! Rendering of [`ExecutionSummary`] values as text or JSON.

use std::io::{self, Write};

use serde::Serialize;
use tsunagi_core::{DirectedEdge, MstEdge};

use super::commands::{ExecutionSummary, OutputFormat};

/// Renders `summary` to `writer` in the format it was requested in.
///
/// Advisory stalls appear as `warning:` lines in text output and as the
/// `warnings` array in JSON output.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// use tsunagi_cli::cli::{Cli, Command, GenerateCommand, GraphArgs, OutputArgs, OutputFormat, render_summary, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         graph: GraphArgs {
///             nodes: 1,
///             probability: 0.3,
///             seed: Some(1),
///             max_attempts: tsunagi_core::DEFAULT_MAX_ATTEMPTS,
///         },
///         output: OutputArgs { format: OutputFormat::Text, show_edges: false },
///     }),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&run_cli(cli)?, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("nodes: 1\nedges: 0\ndensity: 0.000\nconnected: true\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => render_text(summary, writer),
        OutputFormat::Json => render_json(summary, writer),
    }
}

fn render_text(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let stats = &summary.stats;
    writeln!(writer, "nodes: {}", stats.node_count())?;
    writeln!(writer, "edges: {}", stats.edge_count())?;
    writeln!(writer, "density: {:.3}", stats.density())?;
    writeln!(writer, "connected: {}", stats.is_connected())?;
    writeln!(writer, "attempts: {}", summary.attempts)?;
    writeln!(writer, "edge probability: {:.2}", summary.edge_probability)?;
    for warning in &summary.warnings {
        writeln!(writer, "warning: {warning}")?;
    }

    if let Some(edges) = &summary.edges {
        writeln!(writer, "directed edges:")?;
        for edge in edges {
            writeln!(writer, "{} -> {}\t{}", edge.source, edge.target, edge.weight)?;
        }
    }

    if let Some(tree) = &summary.tree {
        writeln!(
            writer,
            "spanning tree ({}): {} edges, total weight {}",
            tree.algorithm(),
            tree.len(),
            tree.total_weight()
        )?;
        for edge in tree.edges() {
            writeln!(
                writer,
                "{} - {}\t{}",
                edge.source(),
                edge.target(),
                edge.weight()
            )?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    nodes: usize,
    edges: usize,
    density: f64,
    connected: bool,
    attempts: usize,
    edge_probability: f64,
    warnings: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    directed_edges: Option<Vec<JsonEdge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spanning_tree: Option<JsonTree>,
}

#[derive(Serialize)]
struct JsonEdge {
    source: usize,
    target: usize,
    weight: u32,
}

impl From<&DirectedEdge> for JsonEdge {
    fn from(edge: &DirectedEdge) -> Self {
        Self {
            source: edge.source,
            target: edge.target,
            weight: edge.weight,
        }
    }
}

impl From<&MstEdge> for JsonEdge {
    fn from(edge: &MstEdge) -> Self {
        Self {
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
        }
    }
}

#[derive(Serialize)]
struct JsonTree {
    algorithm: &'static str,
    total_weight: u64,
    edges: Vec<JsonEdge>,
}

fn render_json(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let stats = &summary.stats;
    let report = JsonReport {
        nodes: stats.node_count(),
        edges: stats.edge_count(),
        density: stats.density(),
        connected: stats.is_connected(),
        attempts: summary.attempts,
        edge_probability: summary.edge_probability,
        warnings: &summary.warnings,
        directed_edges: summary
            .edges
            .as_ref()
            .map(|edges| edges.iter().map(JsonEdge::from).collect()),
        spanning_tree: summary.tree.as_ref().map(|tree| JsonTree {
            algorithm: tree.algorithm().as_str(),
            total_weight: tree.total_weight(),
            edges: tree.edges().iter().map(JsonEdge::from).collect(),
        }),
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writeln!(writer)
}
