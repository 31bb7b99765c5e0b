//! Maze CLI - find the cheapest route through a weighted maze
//!
//! Reads a maze (`#` wall, `.` open, `S` start, `E` end) from a file or
//! stdin, then reports the minimum traversal cost (part 1) and the number
//! of tiles lying on some minimum-cost path (part 2).

mod cli;
mod error;
mod output;

use clap::Parser;
use cli::Args;
use error::CliError;
use maze_search::{Maze, shortest_cost, shortest_cost_and_cells};
use output::OutputFormatter;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if args.map && args.part == Some(1) {
        return Err(CliError::Config(
            "--map needs the part 2 tile set; drop --part 1 or pass --part 2".to_string(),
        ));
    }

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;
    }

    let text = read_input(args.input.as_deref())?;

    let parse_start = Instant::now();
    let maze: Maze = text.parse()?;
    let parse_duration = parse_start.elapsed();

    let formatter = OutputFormatter::new(args.quiet);

    match args.part {
        Some(1) => {
            let solve_start = Instant::now();
            let cost = shortest_cost(&maze.grid, maze.start, maze.end)?;
            formatter.print_answer(1, cost, Some(parse_duration), solve_start.elapsed());
        }
        part => {
            // Part 2 needs the full best-path enumeration, which yields
            // the part 1 answer as a byproduct.
            let solve_start = Instant::now();
            let (cost, cells) = shortest_cost_and_cells(&maze.grid, maze.start, maze.end)?;
            let solve_duration = solve_start.elapsed();

            if part.is_none() {
                formatter.print_answer(1, cost, Some(parse_duration), solve_duration);
                formatter.print_answer(2, cells.len(), None, solve_duration);
            } else {
                formatter.print_answer(2, cells.len(), Some(parse_duration), solve_duration);
            }

            if args.map {
                formatter.print_map(&maze, &cells);
            }
        }
    }

    Ok(())
}

/// Read the maze text from a file, or from stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<String, std::io::Error> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
