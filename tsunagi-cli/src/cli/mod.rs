//! Command-line interface orchestration for tsunagi.
//!
//! `generate` samples a connected graph and prints its statistics; `mst`
//! does the same and adds the spanning tree chosen by the selected
//! algorithm.

mod commands;
mod report;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, GraphArgs, MstCommand, OutputArgs,
    OutputFormat, run_cli,
};
pub use report::render_summary;
