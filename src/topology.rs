//! This module defines the constraint topology of a puzzle: the fixed set of
//! 81 cells, the units in which each digit must appear exactly once, and the
//! peer sets derived from unit membership.
//!
//! A [Topology] is built once, either with [Topology::standard] for the 27
//! classic units (rows, columns, and boxes) or with [Topology::diagonal] for
//! the 29 units of diagonal Sudoku, which additionally constrain the two main
//! diagonals. It is immutable afterwards and shared by reference into every
//! board and solver operation.

use crate::Board;
use crate::util::{DigitSet, MAX_DIGIT, MIN_DIGIT};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of the grid, as well as the number of cells
/// in each unit.
pub const SIZE: usize = 9;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

const BOX_SIZE: usize = 3;

/// One of the 81 positions of the grid, identified by its row (displayed as
/// the letters `A` to `I`, top to bottom) and its column (displayed as the
/// numbers `1` to `9`, left to right). The derived ordering is row-major,
/// which is also the order in which puzzle lines list the cells.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq,
    PartialOrd, Serialize)]
pub struct Cell {
    row: usize,
    column: usize
}

impl Cell {

    /// Creates a new cell at the given position. Both `row` and `column` are
    /// zero-based, i.e. must be in the range `[0, 9[`, where row 0 is
    /// displayed as `A` and column 0 is displayed as `1`.
    ///
    /// # Panics
    ///
    /// If `row` or `column` is 9 or greater.
    pub fn new(row: usize, column: usize) -> Cell {
        assert!(row < SIZE && column < SIZE);

        Cell {
            row,
            column
        }
    }

    /// Creates the cell with the given row-major index, which must be in the
    /// range `[0, 81[`. This is the inverse of [Cell::index].
    ///
    /// # Panics
    ///
    /// If `index` is 81 or greater.
    pub fn from_index(index: usize) -> Cell {
        assert!(index < CELL_COUNT);

        Cell {
            row: index / SIZE,
            column: index % SIZE
        }
    }

    /// Gets the zero-based row of this cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the zero-based column of this cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the row-major index of this cell, in the range `[0, 81[`.
    pub fn index(&self) -> usize {
        self.row * SIZE + self.column
    }

    /// Returns an iterator over all 81 cells in row-major order, i.e. `A1`,
    /// `A2`, ..., `A9`, `B1`, ..., `I9`.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell::from_index)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row as u8) as char;
        let column = (b'1' + self.column as u8) as char;
        write!(f, "{}{}", row, column)
    }
}

/// A unit of 9 cells which must collectively contain each digit exactly once,
/// such as a row, a column, a box, or a diagonal.
pub type Unit = Vec<Cell>;

/// The complete constraint topology of a puzzle: the list of [Unit]s and, for
/// every cell, the set of its peers, i.e. all cells which share at least one
/// unit with it. Once constructed, a topology is immutable; all solver
/// operations borrow it read-only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Topology {
    units: Vec<Unit>,
    peers: Vec<Vec<Cell>>
}

fn row_unit(row: usize) -> Unit {
    (0..SIZE).map(|column| Cell::new(row, column)).collect()
}

fn column_unit(column: usize) -> Unit {
    (0..SIZE).map(|row| Cell::new(row, column)).collect()
}

fn box_unit(box_row: usize, box_column: usize) -> Unit {
    let mut unit = Unit::new();

    for row_offset in 0..BOX_SIZE {
        for column_offset in 0..BOX_SIZE {
            unit.push(Cell::new(box_row * BOX_SIZE + row_offset,
                box_column * BOX_SIZE + column_offset));
        }
    }

    unit
}

fn main_diagonal_unit() -> Unit {
    (0..SIZE).map(|i| Cell::new(i, i)).collect()
}

fn anti_diagonal_unit() -> Unit {
    (0..SIZE).map(|i| Cell::new(i, SIZE - 1 - i)).collect()
}

fn base_units() -> Vec<Unit> {
    let mut units = Vec::new();

    for row in 0..SIZE {
        units.push(row_unit(row));
    }

    for column in 0..SIZE {
        units.push(column_unit(column));
    }

    for box_row in 0..BOX_SIZE {
        for box_column in 0..BOX_SIZE {
            units.push(box_unit(box_row, box_column));
        }
    }

    units
}

impl Topology {

    fn from_units(units: Vec<Unit>) -> Topology {
        let mut peers: Vec<Vec<Cell>> = vec![Vec::new(); CELL_COUNT];

        for unit in &units {
            for &cell in unit {
                for &other in unit {
                    if other != cell {
                        peers[cell.index()].push(other);
                    }
                }
            }
        }

        for cell_peers in &mut peers {
            cell_peers.sort();
            cell_peers.dedup();
        }

        Topology {
            units,
            peers
        }
    }

    /// Creates the topology of classic Sudoku, consisting of 27 units: 9
    /// rows, 9 columns, and 9 boxes. Every cell has 20 peers.
    pub fn standard() -> Topology {
        Topology::from_units(base_units())
    }

    /// Creates the topology of diagonal Sudoku, consisting of the 27 classic
    /// units plus 2 diagonal units: the main diagonal from the top-left to
    /// the bottom-right corner and the anti-diagonal from the top-right to
    /// the bottom-left corner.
    pub fn diagonal() -> Topology {
        let mut units = base_units();
        units.push(main_diagonal_unit());
        units.push(anti_diagonal_unit());
        Topology::from_units(units)
    }

    /// Gets the list of all units of this topology, each a group of 9 cells
    /// which must contain every digit exactly once.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Gets the peers of the given cell, i.e. all cells which share at least
    /// one unit with it, excluding the cell itself. The peers are sorted in
    /// row-major order.
    pub fn peers(&self, cell: Cell) -> &[Cell] {
        &self.peers[cell.index()]
    }

    /// Indicates whether the two given cells are peers, i.e. share at least
    /// one unit. No cell is a peer of itself.
    pub fn are_peers(&self, a: Cell, b: Cell) -> bool {
        self.peers[a.index()].binary_search(&b).is_ok()
    }

    /// Gets all cells which are peers of both given cells, in row-major
    /// order.
    pub fn common_peers(&self, a: Cell, b: Cell) -> Vec<Cell> {
        self.peers(a).iter()
            .cloned()
            .filter(|&cell| self.are_peers(cell, b))
            .collect()
    }

    /// Indicates whether the given [Board] is a valid solution under this
    /// topology, that is, every cell is solved and every unit contains each
    /// digit exactly once.
    pub fn check(&self, board: &Board) -> bool {
        if !board.is_solved() {
            return false;
        }

        self.units.iter().all(|unit| {
            let mut seen = DigitSet::empty();

            for &cell in unit {
                for digit in board.candidates(cell).iter() {
                    if !seen.insert(digit).unwrap() {
                        return false;
                    }
                }
            }

            (MIN_DIGIT..=MAX_DIGIT).all(|digit| seen.contains(digit))
        })
    }
}
