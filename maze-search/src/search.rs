//! Uniform-cost search over `(Position, Direction)` states

use crate::direction::Direction;
use crate::error::SearchError;
use crate::grid::{Grid, Position};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Cost of stepping forward one tile without changing facing
pub const STEP_COST: u32 = 1;

/// Cost of a quarter turn followed by one step in the new facing
pub const TURN_STEP_COST: u32 = 1001;

/// The unit of visitation: the same position reached with two different
/// facings is two distinct states, because the future cost differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct State {
    position: Position,
    facing: Direction,
}

impl State {
    fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }
}

/// Entry on the priority queue. Ordered by cost (reversed, so the binary
/// max-heap pops the cheapest entry), with the state as a tie-breaker to
/// keep the ordering total; the parent pointer does not participate.
#[derive(Debug)]
struct QueueEntry {
    cost: u32,
    state: State,
    parent: Option<State>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (Reverse(self.cost), self.state).cmp(&(Reverse(other.cost), other.state))
    }
}

/// A completed search: the minimum cost and one minimum-cost path from
/// start to end, start and end tiles included.
#[derive(Debug, Clone)]
pub(crate) struct SearchOutcome {
    pub cost: u32,
    pub path: Vec<Position>,
}

/// Minimum cost from `start` (facing East) to `end` (any facing).
///
/// Moving one tile forward costs [`STEP_COST`]; turning 90 degrees and
/// stepping costs [`TURN_STEP_COST`]. Fails with
/// [`SearchError::NoPathFound`] when `end` is unreachable, and rejects
/// endpoints that are out of bounds or on walls before searching.
pub fn shortest_cost(grid: &Grid, start: Position, end: Position) -> Result<u32, SearchError> {
    dijkstra(grid, start, end, None).map(|outcome| outcome.cost)
}

/// Dijkstra over the `(position, facing)` state graph.
///
/// With `cost_cap` set, successors whose accumulated cost would exceed
/// the cap are pruned; the probe phase uses this to look only for paths
/// matching an already-known minimum.
pub(crate) fn dijkstra(
    grid: &Grid,
    start: Position,
    end: Position,
    cost_cap: Option<u32>,
) -> Result<SearchOutcome, SearchError> {
    validate_endpoint(grid, start)?;
    validate_endpoint(grid, end)?;

    let mut queue = BinaryHeap::new();
    let mut parents: HashMap<State, Option<State>> = HashMap::new();
    let mut settled: HashSet<State> = HashSet::new();
    queue.push(QueueEntry {
        cost: 0,
        state: State::new(start, Direction::East),
        parent: None,
    });

    while let Some(QueueEntry {
        cost,
        state,
        parent,
    }) = queue.pop()
    {
        // First pop of a state is its minimal cost; later pops are stale.
        if !settled.insert(state) {
            continue;
        }
        parents.insert(state, parent);

        if state.position == end {
            return Ok(SearchOutcome {
                cost,
                path: reconstruct_path(&parents, state),
            });
        }

        for (next, step_cost) in successors(grid, state) {
            let next_cost = cost + step_cost;
            if cost_cap.is_some_and(|cap| next_cost > cap) {
                continue;
            }
            if settled.contains(&next) {
                continue;
            }
            queue.push(QueueEntry {
                cost: next_cost,
                state: next,
                parent: Some(state),
            });
        }
    }

    Err(SearchError::NoPathFound)
}

/// The up-to-three transitions out of a state: forward, turn-left-step and
/// turn-right-step, each gated on the target tile being in bounds and open.
fn successors(grid: &Grid, state: State) -> impl Iterator<Item = (State, u32)> {
    [
        (state.facing, STEP_COST),
        (state.facing.turn_left(), TURN_STEP_COST),
        (state.facing.turn_right(), TURN_STEP_COST),
    ]
    .into_iter()
    .filter_map(move |(facing, step_cost)| {
        grid.step(state.position, facing)
            .filter(|&next| grid.is_open(next))
            .map(|next| (State::new(next, facing), step_cost))
    })
}

fn validate_endpoint(grid: &Grid, position: Position) -> Result<(), SearchError> {
    if !grid.contains(position) {
        return Err(SearchError::OutOfBounds {
            position,
            height: grid.height(),
            width: grid.width(),
        });
    }
    if !grid.is_open(position) {
        return Err(SearchError::Blocked { position });
    }
    Ok(())
}

/// Walk the settled parent pointers back from the final state and collect
/// the tiles along the way, start tile included.
fn reconstruct_path(parents: &HashMap<State, Option<State>>, last: State) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = Some(last);
    while let Some(state) = current {
        path.push(state.position);
        current = parents.get(&state).copied().flatten();
    }
    path.reverse();
    path
}
