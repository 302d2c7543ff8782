//! Terminal driver for the stepwise N-Queens solvers.
//!
//! Seeds one solver with a preferred-row vector and steps it to a
//! terminal event, printing events along the way. This is the in-repo
//! stand-in for a visual frontend: anything it prints, a GUI would
//! render instead.
//!
//! # Usage
//!
//! Solve the default 8×8 board with the backtracking solver:
//!
//! ```sh
//! cargo run
//! ```
//!
//! Watch the greedy probe give up on a hard seed:
//!
//! ```sh
//! cargo run -- --strategy probe -n 4 --rows 1,1,1,1 --verbose
//! ```
//!
//! Exit status is 0 when a solution was found, 1 when the search ended
//! in a proven dead end, and 2 on invalid input.

use std::{process, time::Instant};

use clap::{Parser, ValueEnum};
use queenstep_solver::{
    BoxedStepSolver, CspSolver, DEFAULT_BOARD_SIZE, ProbeSolver, StepEvent, StepSolver,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Greedy per-column row probing; fast, but gives up at the first
    /// dead end.
    Probe,
    /// Backtracking with forward checking; always reaches a verdict.
    Csp,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size n.
    #[arg(short = 'n', long, value_name = "SIZE", default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Solving strategy.
    #[arg(long, value_name = "STRATEGY", default_value = "csp")]
    strategy: Strategy,

    /// Preferred row per column, 1-based, comma separated. Defaults to
    /// row 1 everywhere.
    #[arg(long, value_name = "ROWS", value_delimiter = ',', num_args = 1..)]
    rows: Option<Vec<usize>>,

    /// Stop after this many steps even without a terminal event.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000_000)]
    max_steps: u64,

    /// Print every intermediate event, not just commits and terminals.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.size == 0 {
        eprintln!("error: board size must be positive");
        process::exit(2);
    }

    let mut solver: BoxedStepSolver = match args.strategy {
        Strategy::Probe => Box::new(ProbeSolver::new(args.size)),
        Strategy::Csp => Box::new(CspSolver::new(args.size)),
    };

    let rows = args.rows.unwrap_or_else(|| vec![1; args.size]);
    if let Err(err) = solver.set_initial(&rows) {
        eprintln!("error: {err}");
        process::exit(2);
    }

    log::info!(
        "running {name} on a {size}x{size} board, preferred rows {rows:?}",
        name = solver.name(),
        size = args.size,
    );

    let started = Instant::now();
    let outcome = drive(solver.as_mut(), args.max_steps, args.verbose);
    let elapsed = started.elapsed();

    println!(
        "{}: {} steps in {elapsed:.2?}",
        solver.name(),
        solver.nodes()
    );
    match outcome {
        Some(StepEvent::Solution { placement }) => {
            println!("solution (1-based rows): {placement}");
            print_board(args.size, placement.rows());
        }
        Some(StepEvent::Invalid { col }) => {
            println!("no solution from this preference, stuck at column {}", col + 1);
            process::exit(1);
        }
        Some(event) => {
            // Only solution/invalid terminate a fresh run.
            unreachable!("unexpected terminal event {event:?}");
        }
        None => {
            eprintln!("gave up after {} steps without a terminal event", args.max_steps);
            process::exit(1);
        }
    }
}

/// Steps the solver until a terminal event or the step cap.
fn drive(solver: &mut dyn StepSolver, max_steps: u64, verbose: bool) -> Option<StepEvent> {
    for _ in 0..max_steps {
        let event = solver.step();
        match &event {
            StepEvent::Fixed { .. } => println!("  {event}"),
            StepEvent::Searching { .. } | StepEvent::Backtracking { .. } if verbose => {
                println!("  {event}");
            }
            _ => log::debug!("{event}"),
        }
        if event.is_terminal() {
            return Some(event);
        }
    }
    None
}

/// Renders the solved board as an ASCII grid, row 1 at the top.
fn print_board(size: usize, rows: &[usize]) {
    for row in 0..size {
        let line: String = (0..size)
            .map(|col| if rows[col] == row { " Q" } else { " ." })
            .collect();
        println!("{line}");
    }
}
