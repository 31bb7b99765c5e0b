//! Enumeration of every tile on some minimum-cost path
//!
//! Multiple distinct paths can share the minimum cost; callers usually
//! want the union of their tiles, not just one path. The strategy here is
//! the exhaustive probe: find one best path, then for each interior tile
//! on any best path discovered so far, wall that tile off on a private
//! grid clone and rerun the search capped at the known minimum. An
//! equal-cost alternate forced around the blocked tile contributes its
//! tiles to the union, and its own interior tiles become new probe
//! candidates. The tile set is finite, so the fixed point terminates.
//!
//! Worst case this reruns the search once per best-path tile, but each
//! rerun is capped and the probes of a batch are independent, so they run
//! in parallel, one private grid clone per probe.

use crate::error::SearchError;
use crate::grid::{Grid, Position};
use crate::search::dijkstra;
use rayon::prelude::*;
use std::collections::HashSet;

/// Minimum cost from `start` (facing East) to `end`, together with every
/// tile lying on at least one minimum-cost path.
///
/// Start and end tiles are always members of the returned set when a path
/// exists. Fails like [`shortest_cost`](crate::shortest_cost) when no
/// path exists or an endpoint is invalid.
pub fn shortest_cost_and_cells(
    grid: &Grid,
    start: Position,
    end: Position,
) -> Result<(u32, HashSet<Position>), SearchError> {
    let first = dijkstra(grid, start, end, None)?;
    let min_cost = first.cost;

    let mut cells: HashSet<Position> = first.path.iter().copied().collect();
    let mut pending: Vec<Position> = interior(&first.path, start, end).collect();
    let mut probed: HashSet<Position> = HashSet::new();

    while !pending.is_empty() {
        let batch: Vec<Position> = pending
            .drain(..)
            .filter(|&tile| probed.insert(tile))
            .collect();

        // A probe that fails only means no equal-cost alternate avoids
        // that tile; endpoint validation cannot fail here because probes
        // never wall off start or end.
        let alternates: Vec<Vec<Position>> = batch
            .par_iter()
            .filter_map(|&blocked| {
                let mut probe_grid = grid.clone();
                probe_grid.set_wall(blocked);
                dijkstra(&probe_grid, start, end, Some(min_cost))
                    .ok()
                    .filter(|outcome| outcome.cost == min_cost)
                    .map(|outcome| outcome.path)
            })
            .collect();

        for path in alternates {
            for tile in interior(&path, start, end) {
                if cells.insert(tile) {
                    pending.push(tile);
                }
            }
        }
    }

    Ok((min_cost, cells))
}

/// The union of tiles on every minimum-cost path from `start` to `end`
pub fn best_path_cells(
    grid: &Grid,
    start: Position,
    end: Position,
) -> Result<HashSet<Position>, SearchError> {
    shortest_cost_and_cells(grid, start, end).map(|(_, cells)| cells)
}

fn interior<'a>(
    path: &'a [Position],
    start: Position,
    end: Position,
) -> impl Iterator<Item = Position> + 'a {
    path.iter()
        .copied()
        .filter(move |&tile| tile != start && tile != end)
}
