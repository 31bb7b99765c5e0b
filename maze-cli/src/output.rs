//! Output formatting for answers, timings and map rendering

use itertools::Itertools;
use maze_search::{Cell, Maze, Position};
use std::collections::HashSet;
use std::fmt::Display;
use std::time::Duration;

/// Output formatter for answers
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print one part's answer
    ///
    /// The parse duration is printed alongside the first answer only.
    pub fn print_answer(
        &self,
        part: u8,
        answer: impl Display,
        parse_duration: Option<Duration>,
        solve_duration: Duration,
    ) {
        if self.quiet {
            println!("{}", answer);
            return;
        }

        let parse_timing = parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        println!(
            "Part {}: {} ({}solve: {})",
            part,
            answer,
            parse_timing,
            format_duration(solve_duration)
        );
    }

    /// Render the maze with every best-path tile overlaid as `O`
    pub fn print_map(&self, maze: &Maze, best_tiles: &HashSet<Position>) {
        if self.quiet {
            return;
        }
        println!("{}", render_map(maze, best_tiles));
    }
}

/// Text rendering of a maze: walls as `#`, best-path tiles as `O`, the
/// start and end tiles as `S`/`E` unless they are overlaid, everything
/// else as `.`
pub fn render_map(maze: &Maze, best_tiles: &HashSet<Position>) -> String {
    (0..maze.grid.height())
        .map(|row| {
            (0..maze.grid.width())
                .map(|col| {
                    let tile = Position::new(row, col);
                    if best_tiles.contains(&tile) {
                        'O'
                    } else if tile == maze.start {
                        'S'
                    } else if tile == maze.end {
                        'E'
                    } else {
                        match maze.grid.cell(tile) {
                            Some(Cell::Wall) => '#',
                            _ => '.',
                        }
                    }
                })
                .collect::<String>()
        })
        .join("\n")
}

/// Format a duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_pick_a_readable_unit() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
    }

    #[test]
    fn map_overlays_best_tiles() {
        let maze: Maze = "#####\n#S.E#\n#####".parse().unwrap();
        let best = HashSet::from([maze.start, Position::new(1, 2), maze.end]);
        assert_eq!(render_map(&maze, &best), "#####\n#OOO#\n#####");
        assert_eq!(render_map(&maze, &HashSet::new()), "#####\n#S.E#\n#####");
    }
}
