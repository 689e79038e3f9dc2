//! `hls-sched` — emits a CPLEX-LP operation schedule from a data-flow
//! edgelist, and optionally solves it with `glpsol`.

#![warn(missing_docs)]

mod error;
mod schedule;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

/// `hls-sched` — an HLS operation scheduler front-end.
#[derive(Parser, Debug)]
#[command(name = "hls-sched", version, about = "HLS operation scheduler")]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit (and optionally solve) an ILP schedule for a data-flow graph.
    Schedule(ScheduleArgs),
}

/// Arguments for the `hls-sched schedule` subcommand.
#[derive(Parser, Debug)]
pub struct ScheduleArgs {
    /// Path to the input edgelist file.
    #[arg(long)]
    pub graph: PathBuf,

    /// Latency bound (selects or contributes to MR-LC).
    #[arg(long)]
    pub latency: Option<u32>,

    /// Area-cost / fixed resource-count vector, ascending by interior unit
    /// id (selects or contributes to ML-RC).
    #[arg(long = "area-cost", num_args = 1..)]
    pub area_cost: Vec<u32>,

    /// Path to a `sched.toml` configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to write `.lp` files (and solver output) into.
    #[arg(long)]
    pub solver_out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Schedule(ref args) => schedule::run(args),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
