//! Command-line interface for loading, solving and rendering puzzle files

use crate::analysis::adjacency::check_adjacencies;
use crate::io::configuration::DEFAULT_CELL_SIZE_PX;
use crate::io::error::Result;
use crate::io::image::export_solution_as_png;
use crate::io::progress::SolveProgress;
use crate::io::puzzle_file::{load_puzzle, parse_dimensions};
use crate::io::render::{render_adjacency_report, render_grid, summarize_adjacencies};
use crate::solver::backtrack::{SolveOutcome, Solver};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "edgematch")]
#[command(
    author,
    version,
    about = "Solve edge-matching tile puzzles by backtracking"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Puzzle file: one tile per line, edges top right bottom left
    #[arg(value_name = "PUZZLE")]
    pub puzzle: PathBuf,

    /// Grid dimensions as N or RxC, overriding the file's size directive
    #[arg(short = 'n', long, value_parser = dimensions_arg)]
    pub size: Option<(usize, usize)>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the match status of every interior adjacency
    #[arg(short, long)]
    pub check: bool,

    /// Write the solved grid as a PNG image
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Edge length of one cell in the PNG output
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE_PX)]
    pub cell_size: u32,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

fn dimensions_arg(value: &str) -> std::result::Result<(usize, usize), String> {
    parse_dimensions(value).map_err(|error| error.to_string())
}

/// Drives one puzzle file through load, solve and output
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, solve and report the puzzle, returning the search outcome
    ///
    /// An unsolvable puzzle is reported on stdout and is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle file cannot be read or parsed, or if
    /// the PNG export fails
    // Allow print for the rendered solution, which is the program's output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<SolveOutcome<String>> {
        let puzzle = load_puzzle(&self.cli.puzzle, self.cli.size)?;
        let dimensions = puzzle.dimensions();

        let progress = self
            .cli
            .should_show_progress()
            .then(|| SolveProgress::start(&self.cli.puzzle, dimensions));
        let start_time = Instant::now();

        let mut solver = Solver::new(puzzle);
        let outcome = match solver.solve() {
            Ok(outcome) => outcome,
            Err(error) => {
                if let Some(progress) = &progress {
                    progress.abandon();
                }
                return Err(error);
            }
        };

        if let Some(progress) = &progress {
            progress.finish(outcome.is_solved(), solver.stats(), start_time.elapsed());
        }

        match &outcome {
            SolveOutcome::Solved(solution) => {
                println!("{}", render_grid(solution.grid()));

                if self.cli.check {
                    let checks = check_adjacencies(solution.grid());
                    print!("{}", render_adjacency_report(&checks));
                    println!("{}", summarize_adjacencies(&checks));
                }

                if let Some(output_path) = &self.cli.output {
                    export_solution_as_png(solution, self.cli.cell_size, output_path)?;
                }
            }
            SolveOutcome::Unsolvable | SolveOutcome::Cancelled => {
                println!("No solution found for this puzzle.");
            }
        }

        Ok(outcome)
    }
}
