//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Weighted maze runner
#[derive(Parser, Debug)]
#[command(name = "maze", about = "Find cheapest routes through a weighted maze", version)]
pub struct Args {
    /// Maze file to solve (reads stdin if omitted)
    pub input: Option<PathBuf>,

    /// Part to run: 1 = minimum cost, 2 = best-path tile count (runs both if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Number of threads for the alternate-path probe phase
    #[arg(long)]
    pub threads: Option<usize>,

    /// Render the maze with best-path tiles marked as O (needs part 2)
    #[arg(short, long)]
    pub map: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
