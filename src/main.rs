//! Mastermind Solver - CLI
//!
//! Play the classic 6x4 code-breaking game, watch a solver work, or
//! evaluate the solver family statistically in parallel.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mastermind_minimax::{
    commands::{print_watch_result, run_eval_sweep, run_play, run_watch},
    core::{Code, CodeSpace},
    output::print_evaluation_chart,
    solver::SolverKind,
};

#[derive(Parser)]
#[command(
    name = "mastermind_minimax",
    about = "Mastermind solver family with a parallel statistical evaluation harness",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one interactive game (default)
    Play {
        /// Your name, for the greeting
        #[arg(short, long, default_value = "player")]
        name: String,
    },

    /// Watch a solver work through one secret, round by round
    Watch {
        /// Solver: exhaustive, color-probe, consistency, minimax
        #[arg(short, long, default_value = "minimax")]
        solver: String,

        /// Secret as four color aliases (e.g. rrgb); random if omitted
        #[arg(long)]
        secret: Option<String>,
    },

    /// Evaluate solvers over many games and chart the mean attempt counts
    Eval {
        /// Number of games per solver
        #[arg(short = 'n', long, default_value = "100")]
        runs: usize,

        /// Solver to evaluate, or 'all' for the whole family
        #[arg(short, long, default_value = "all")]
        solver: String,

        /// Worker count (defaults to the number of CPU threads)
        #[arg(short, long)]
        workers: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let space = CodeSpace::standard();

    // Default to an interactive game, like the original table-top flow
    let command = cli.command.unwrap_or(Commands::Play {
        name: "player".to_string(),
    });

    match command {
        Commands::Play { name } => {
            run_play(&space, &name);
            Ok(())
        }
        Commands::Watch { solver, secret } => run_watch_command(&solver, secret.as_deref(), &space),
        Commands::Eval {
            runs,
            solver,
            workers,
        } => run_eval_command(runs, &solver, workers, &space),
    }
}

fn parse_solver(name: &str) -> Result<SolverKind> {
    match SolverKind::from_name(name) {
        Some(kind) => Ok(kind),
        None => bail!("unknown solver '{name}' (expected exhaustive, color-probe, consistency, or minimax)"),
    }
}

fn run_watch_command(solver: &str, secret: Option<&str>, space: &CodeSpace) -> Result<()> {
    let kind = parse_solver(solver)?;
    let secret = secret
        .map(Code::parse)
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid secret: {e}"))?;

    let result = run_watch(kind, space, secret);
    print_watch_result(&result);
    Ok(())
}

fn run_eval_command(
    runs: usize,
    solver: &str,
    workers: Option<usize>,
    space: &CodeSpace,
) -> Result<()> {
    let kinds: Vec<SolverKind> = if solver == "all" {
        SolverKind::ALL.to_vec()
    } else {
        vec![parse_solver(solver)?]
    };

    let workers = workers.unwrap_or_else(rayon::current_num_threads);

    println!(
        "Evaluating {} solver(s), {runs} games each, {workers} workers...\n",
        kinds.len()
    );

    let reports = run_eval_sweep(&kinds, space, runs, workers);
    print_evaluation_chart(&reports, runs);
    Ok(())
}
