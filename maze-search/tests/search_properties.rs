//! Property-based tests for the weighted maze search

use maze_search::{
    Cell, Grid, Position, STEP_COST, SearchError, shortest_cost, shortest_cost_and_cells,
};
use proptest::prelude::*;

/// Random rectangular grid with open corners, searched corner to corner.
/// Roughly one tile in four is a wall, so both reachable and unreachable
/// layouts come up.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (3usize..=9, 3usize..=9).prop_flat_map(|(height, width)| {
        proptest::collection::vec(
            proptest::collection::vec(
                prop_oneof![3 => Just(Cell::Open), 1 => Just(Cell::Wall)],
                width,
            ),
            height,
        )
        .prop_map(move |mut rows| {
            rows[0][0] = Cell::Open;
            rows[height - 1][width - 1] = Cell::Open;
            Grid::from_rows(rows).unwrap()
        })
    })
}

fn corners(grid: &Grid) -> (Position, Position) {
    (
        Position::new(0, 0),
        Position::new(grid.height() - 1, grid.width() - 1),
    )
}

proptest! {
    /// Same grid, same endpoints: identical cost and identical cell set
    /// on every call.
    #[test]
    fn search_is_deterministic(grid in arb_grid()) {
        let (start, end) = corners(&grid);
        let first = shortest_cost_and_cells(&grid, start, end);
        let second = shortest_cost_and_cells(&grid, start, end);
        prop_assert_eq!(first, second);
    }

    /// Whenever a path exists, start and end belong to the best-path set
    /// and the cost is at least the Manhattan distance (every transition
    /// advances one tile and costs at least STEP_COST).
    #[test]
    fn cost_and_cells_are_consistent(grid in arb_grid()) {
        let (start, end) = corners(&grid);
        if let Ok((cost, cells)) = shortest_cost_and_cells(&grid, start, end) {
            prop_assert!(cells.contains(&start));
            prop_assert!(cells.contains(&end));
            let manhattan = (end.row - start.row + end.col - start.col) as u32;
            prop_assert!(cost >= manhattan * STEP_COST);
            prop_assert!(cells.len() as u32 >= manhattan + 1);
        }
    }

    /// Walling off any open tile outside the best-path set leaves the
    /// minimum cost unchanged; walling off any tile at all never lowers
    /// it.
    #[test]
    fn obstructions_never_lower_the_minimum(grid in arb_grid()) {
        let (start, end) = corners(&grid);
        let Ok((cost, cells)) = shortest_cost_and_cells(&grid, start, end) else {
            return Ok(());
        };

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let tile = Position::new(row, col);
                if tile == start || tile == end || !grid.is_open(tile) {
                    continue;
                }
                let mut obstructed = grid.clone();
                obstructed.set_wall(tile);
                match shortest_cost(&obstructed, start, end) {
                    Ok(new_cost) if cells.contains(&tile) => prop_assert!(new_cost >= cost),
                    Ok(new_cost) => prop_assert_eq!(new_cost, cost),
                    Err(SearchError::NoPathFound) => {
                        prop_assert!(cells.contains(&tile));
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {}", other),
                }
            }
        }
    }

    /// The search never reports a path on a grid whose end tile is fully
    /// enclosed by walls.
    #[test]
    fn enclosed_end_always_fails(grid in arb_grid()) {
        let (start, end) = corners(&grid);
        let mut enclosed = grid.clone();
        for row in 0..enclosed.height() {
            for col in 0..enclosed.width() {
                let tile = Position::new(row, col);
                if tile != start && tile != end {
                    enclosed.set_wall(tile);
                }
            }
        }
        // Start and end are opposite corners of a grid at least 3x3, so
        // walling everything else disconnects them.
        prop_assert_eq!(
            shortest_cost(&enclosed, start, end),
            Err(SearchError::NoPathFound)
        );
    }
}
