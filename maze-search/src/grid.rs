//! Grid and maze data model with text parsing

use crate::direction::Direction;
use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// A `(row, col)` pair, 0-indexed with row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single maze tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Open,
    Wall,
}

/// Rectangular matrix of tiles, stored flat in row-major order.
///
/// The grid is immutable for the duration of a search call; the probe
/// phase of the best-path enumeration clones it before walling tiles off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from rows of cells.
    ///
    /// Fails if there are no rows or any row's width differs from the
    /// first row's.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ParseError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::EmptyInput);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, tiles) in rows.into_iter().enumerate() {
            if tiles.len() != width {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
            cells.extend(tiles);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the position lies inside the grid bounds
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    /// The tile at the position, or `None` if out of bounds
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.contains(position)
            .then(|| self.cells[position.row * self.width + position.col])
    }

    /// Whether the position is in bounds and not a wall
    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Open)
    }

    /// Replace the tile at the position with a wall.
    ///
    /// Returns `false` (and changes nothing) if the position is out of
    /// bounds. Used by the probe phase on private grid clones, and handy
    /// for building obstruction scenarios in tests.
    pub fn set_wall(&mut self, position: Position) -> bool {
        if !self.contains(position) {
            return false;
        }
        self.cells[position.row * self.width + position.col] = Cell::Wall;
        true
    }

    /// The in-bounds neighbor one step in the given direction, if any
    pub fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = position.row.checked_add_signed(dr)?;
        let col = position.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }
}

/// A parsed maze: the grid plus its two distinguished tiles.
///
/// Text format: `#` wall, `.` open, `S` start (exactly one), `E` end
/// (exactly one), one row per line. Start and end tiles are open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
}

impl Maze {
    /// Parse a maze from its text form
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut end = None;
        for (row, line) in input.lines().enumerate() {
            let mut tiles = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::Wall,
                    '.' => Cell::Open,
                    'S' => {
                        if start.replace(Position::new(row, col)).is_some() {
                            return Err(ParseError::DuplicateStart);
                        }
                        Cell::Open
                    }
                    'E' => {
                        if end.replace(Position::new(row, col)).is_some() {
                            return Err(ParseError::DuplicateEnd);
                        }
                        Cell::Open
                    }
                    found => return Err(ParseError::UnexpectedCharacter { row, col, found }),
                };
                tiles.push(cell);
            }
            rows.push(tiles);
        }
        let grid = Grid::from_rows(rows)?;
        let start = start.ok_or(ParseError::MissingStart)?;
        let end = end.ok_or(ParseError::MissingEnd)?;
        Ok(Self { grid, start, end })
    }
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}
