//! Command implementations and argument parsing for the tsunagi CLI.

use std::num::NonZeroUsize;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};
use tsunagi_core::{
    DEFAULT_MAX_ATTEMPTS, DirectedEdge, Generation, GeneratorParams, GraphGenerator, GraphStats,
    MstAlgorithm, SpanningTree, TsunagiError, compute_mst,
};

const DEFAULT_NODES: usize = 10;
const DEFAULT_PROBABILITY: f64 = 0.3;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "tsunagi",
    about = "Generate random connected weighted graphs and their minimum spanning trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a connected graph and print its statistics.
    Generate(GenerateCommand),
    /// Generate a connected graph and compute a spanning tree of it.
    Mst(MstCommand),
}

/// Graph generation options shared by every command.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Initial probability of including each node pair.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub probability: f64,

    /// Seed for reproducible graphs; system entropy is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of candidate graphs to sample before giving up.
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: NonZeroUsize,
}

/// Options shared by every command that control how results are printed.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include every directed edge of the graph in the output.
    #[arg(long = "show-edges")]
    pub show_edges: bool,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Graph generation options.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Output options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Graph generation options.
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Spanning tree algorithm: kruskal, prim, or boruvka.
    #[arg(long, default_value_t = MstAlgorithm::Kruskal)]
    pub algorithm: MstAlgorithm,

    /// Output options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output formats understood by [`render_summary`](super::render_summary).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// Graph generation or spanning tree computation failed.
    #[error(transparent)]
    Core(#[from] TsunagiError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Format requested for rendering.
    pub format: OutputFormat,
    /// Statistics of the generated graph, including the tree summary for
    /// `mst`.
    pub stats: GraphStats,
    /// Number of candidate graphs sampled.
    pub attempts: usize,
    /// Edge probability of the accepted candidate.
    pub edge_probability: f64,
    /// Advisory messages raised during generation.
    pub warnings: Vec<String>,
    /// Directed edges, present when `--show-edges` was given.
    pub edges: Option<Vec<DirectedEdge>>,
    /// Spanning tree computed by the `mst` command.
    pub tree: Option<SpanningTree>,
}

impl ExecutionSummary {
    fn from_generation(generation: &Generation, output: &OutputArgs) -> Self {
        let graph = generation.graph();
        Self {
            format: output.format,
            stats: GraphStats::from_graph(graph),
            attempts: generation.attempts(),
            edge_probability: generation.edge_probability(),
            warnings: generation
                .stalls()
                .iter()
                .map(ToString::to_string)
                .collect(),
            edges: output
                .show_edges
                .then(|| graph.directed_edges().collect()),
            tree: None,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the parameters are invalid, generation exhausts
/// its attempts, or no spanning tree exists.
///
/// # Examples
/// ```
/// use tsunagi_cli::cli::{Cli, Command, GenerateCommand, GraphArgs, OutputArgs, OutputFormat, run_cli};
///
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         graph: GraphArgs {
///             nodes: 6,
///             probability: 0.5,
///             seed: Some(11),
///             max_attempts: tsunagi_core::DEFAULT_MAX_ATTEMPTS,
///         },
///         output: OutputArgs { format: OutputFormat::Text, show_edges: false },
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.stats.node_count(), 6);
/// assert!(summary.stats.is_connected());
/// # Ok::<(), tsunagi_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(command) => {
            Span::current().record("command", field::display("generate"));
            run_generate(command)
        }
        Command::Mst(command) => {
            Span::current().record("command", field::display("mst"));
            run_mst(command)
        }
    }
}

pub(super) fn run_generate(command: GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let generation = generate_graph(&command.graph)?;
    Ok(ExecutionSummary::from_generation(&generation, &command.output))
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(algorithm = %command.algorithm, total_weight = field::Empty),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<ExecutionSummary, CliError> {
    let generation = generate_graph(&command.graph)?;
    let tree = compute_mst(generation.graph(), command.algorithm).map_err(TsunagiError::from)?;
    Span::current().record("total_weight", tree.total_weight());

    let mut summary = ExecutionSummary::from_generation(&generation, &command.output);
    summary.stats = summary.stats.with_spanning_tree(&tree);
    summary.tree = Some(tree);
    Ok(summary)
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(
        nodes = args.nodes,
        probability = args.probability,
        seed = field::Empty,
        max_attempts = args.max_attempts.get(),
    ),
)]
pub(super) fn generate_graph(args: &GraphArgs) -> Result<Generation, CliError> {
    let mut params =
        GeneratorParams::new(args.nodes, args.probability)?.with_max_attempts(args.max_attempts);
    if let Some(seed) = args.seed {
        Span::current().record("seed", seed);
        params = params.with_rng_seed(seed);
    }

    let generation = GraphGenerator::new(params).generate()?;
    for stall in generation.stalls() {
        warn!(attempt = stall.attempt, "{stall}");
    }
    info!(
        attempts = generation.attempts(),
        pairs = generation.graph().undirected_edges().len(),
        "graph ready"
    );
    Ok(generation)
}
