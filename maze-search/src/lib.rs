//! Weighted Maze Search Library
//!
//! Shortest-path search over a rectangular grid of open and wall tiles,
//! under a cost model where a runner has a facing direction: stepping
//! forward costs 1, turning 90 degrees and then stepping costs 1001.
//! Because future cost depends on facing, the unit of visitation is a
//! `(Position, Direction)` state, not a bare position.
//!
//! # Overview
//!
//! This library provides:
//! - A [`Grid`]/[`Maze`] data model with text parsing (`#` wall, `.` open,
//!   `S` start, `E` end)
//! - [`shortest_cost`]: uniform-cost (Dijkstra) search for the minimum
//!   cost from start (facing East) to end (any facing)
//! - [`shortest_cost_and_cells`]: the minimum cost together with the union
//!   of every tile lying on at least one minimum-cost path
//!
//! # Quick Example
//!
//! ```
//! use maze_search::{Maze, shortest_cost_and_cells};
//!
//! // Rows are concatenated rather than written with line continuations so
//! // no source line starts with `#`, which rustdoc would treat as a
//! // hidden-line escape and strip.
//! let maze: Maze = concat!(
//!     "######\n",
//!     "#...E#\n",
//!     "#S..##\n",
//!     "######\n",
//! )
//! .parse()
//! .unwrap();
//!
//! let (cost, cells) = shortest_cost_and_cells(&maze.grid, maze.start, maze.end).unwrap();
//! assert_eq!(cost, 2004);
//! // Turning north at the first, second or third column all takes two
//! // turns and two plain steps, so the routes tie and every open tile is
//! // on some best path.
//! assert_eq!(cells.len(), 7);
//! ```
//!
//! # Cost model
//!
//! Every explored transition corresponds to one grid step in some
//! direction: 1 if it continues the current facing, 1001 if the facing
//! changes by 90 degrees first. There is no turn-without-step transition
//! and no backward step; a full reversal is two successive turn-then-step
//! transitions through an intermediate heading.
//!
//! # Failure semantics
//!
//! A search call either completes or fails; nothing persists between
//! calls. [`SearchError::NoPathFound`] is raised when the priority queue
//! drains without reaching the end tile. Start and end tiles are validated
//! up front and rejected if out of bounds or on a wall.

mod best_paths;
mod direction;
mod error;
mod grid;
mod search;

pub use best_paths::{best_path_cells, shortest_cost_and_cells};
pub use direction::Direction;
pub use error::{ParseError, SearchError};
pub use grid::{Cell, Grid, Maze, Position};
pub use search::{STEP_COST, TURN_STEP_COST, shortest_cost};
