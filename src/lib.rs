// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand Sudoku solving engine based on
//! constraint propagation. It supports the following key features:
//!
//! * Parsing and printing puzzles in the common 81-character line format
//! * Solving classic as well as diagonal Sudoku, where the two main diagonals
//! must also contain every digit exactly once
//! * Constraint propagation with the elimination, only-choice, and
//! naked-twins deduction rules
//! * Depth-first backtracking search which branches on the unsolved cell with
//! the fewest remaining candidates
//! * Optionally recording a snapshot of the board every time a cell is
//! solved, for auditing or visualization
//!
//! # Parsing and printing puzzles
//!
//! See [Board::parse] for the exact format of a puzzle line.
//!
//! Puzzle lines can be used to exchange puzzles, while pretty prints can be
//! used to inspect the candidates of a partially solved board. An example of
//! how to parse and display a board is provided below.
//!
//! ```
//! use sudoku_propagation::Board;
//!
//! let board = Board::parse("\
//!     4...8.3..\
//!     .5.34....\
//!     ....6.7..\
//!     ..39...2.\
//!     .8.....9.\
//!     .1...52..\
//!     ..2.9....\
//!     ....12.8.\
//!     ..8.3...1").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Solving puzzles
//!
//! Solving requires a [Topology](topology::Topology), which describes the
//! units and peers of the grid and thereby the rules of the puzzle:
//! [Topology::standard](topology::Topology::standard) for classic Sudoku and
//! [Topology::diagonal](topology::Topology::diagonal) for diagonal Sudoku.
//! The topology is built once and shared by reference into every solver
//! call. The [solve] function parses a puzzle line and runs the
//! [PropagatingSolver](solver::PropagatingSolver) on it.
//!
//! ```
//! use sudoku_propagation::solve;
//! use sudoku_propagation::solver::Solution;
//! use sudoku_propagation::topology::Topology;
//!
//! let topology = Topology::diagonal();
//! let puzzle = "2.............62....1....7...6..8...3...9...7...6..\
//!     4...4....8....52.............3";
//!
//! match solve(puzzle, &topology).unwrap() {
//!     Solution::Solved(board) => assert!(topology.check(&board)),
//!     Solution::Impossible => panic!("this puzzle has a solution")
//! }
//! ```
//!
//! If the puzzle has no solution, [Solution::Impossible](solver::Solution) is
//! returned. This is an ordinary value, not an error: search exhausting all
//! branches is an expected outcome.
//!
//! # Recording assignments
//!
//! An [AssignmentLog] can be passed into [solve_with_log] to capture a
//! snapshot of the whole board every time a cell is newly solved. The solver
//! behaves identically whether or not a log is attached; the log is only
//! intended for consumers such as visualizations, which can serialize the
//! snapshots using [serde](https://serde.rs/).
//!
//! ```
//! use sudoku_propagation::{AssignmentLog, solve_with_log};
//! use sudoku_propagation::topology::Topology;
//!
//! let topology = Topology::standard();
//! let puzzle = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.\
//!     82....26.95..8..2.3..9..5.1.3..";
//! let mut log = AssignmentLog::new();
//!
//! solve_with_log(puzzle, &topology, &mut log).unwrap();
//! assert!(!log.is_empty());
//! ```

pub mod error;
pub mod solver;
pub mod topology;
pub mod util;

#[cfg(test)]
mod random_tests;

use crate::error::{PuzzleParseError, PuzzleParseResult};
use crate::solver::{PropagatingSolver, Solution, Solver};
use crate::topology::{CELL_COUNT, Cell, SIZE, Topology};
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// An ordered sequence of [Board] snapshots, one for each time a cell was
/// newly solved by [Board::assign]. The log exists purely for auditing and
/// visualization; the solver produces identical results whether or not one is
/// attached.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct AssignmentLog {
    snapshots: Vec<Board>
}

impl AssignmentLog {

    /// Creates a new, empty assignment log.
    pub fn new() -> AssignmentLog {
        AssignmentLog {
            snapshots: Vec::new()
        }
    }

    /// Gets the recorded snapshots in the order in which they were taken.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Indicates whether this log contains no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn record(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
    }
}

/// A Sudoku board in candidate form: a mapping from every [Cell] to the
/// [DigitSet] of digits still considered possible for it. A cell whose
/// candidate set has exactly one element is solved; an empty candidate set
/// signals a contradiction.
///
/// All candidate mutation goes through [Board::assign], which is the only
/// operation that records snapshots into an [AssignmentLog]. Boards are
/// deep-copied whenever the search branches, so a failed branch can simply be
/// discarded.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Board {
    cells: Vec<DigitSet>
}

fn centered(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.chars().count());
    let left = padding / 2;
    let right = padding - left;
    let mut result = String::new();

    for _ in 0..left {
        result.push(' ');
    }

    result.push_str(text);

    for _ in 0..right {
        result.push(' ');
    }

    result
}

fn candidate_string(candidates: DigitSet) -> String {
    candidates.iter()
        .map(|digit| digit.to_string())
        .collect()
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = 1 + Cell::all()
            .map(|cell| self.candidates(cell).len())
            .max()
            .unwrap();
        let separator =
            vec!["-".repeat(width * 3); 3].join("+");

        for row in 0..SIZE {
            for column in 0..SIZE {
                let candidates = self.candidates(Cell::new(row, column));
                f.write_str(&centered(&candidate_string(candidates), width))?;

                if column == 2 || column == 5 {
                    f.write_str("|")?;
                }
            }

            if row < SIZE - 1 {
                f.write_str("\n")?;
            }

            if row == 2 || row == 5 {
                f.write_str(&separator)?;
                f.write_str("\n")?;
            }
        }

        Ok(())
    }
}

impl Board {

    /// Creates a new board on which nothing is known, i.e. every cell has the
    /// full nine-digit candidate set.
    pub fn empty() -> Board {
        Board {
            cells: vec![DigitSet::full(); CELL_COUNT]
        }
    }

    /// Parses a puzzle line into a board. The line must consist of exactly 81
    /// characters, one per cell in row-major order, each of which is either a
    /// digit `'1'` to `'9'` for a given or `'.'` for an unknown cell. Givens
    /// become singleton candidate sets, unknown cells receive the full
    /// nine-digit set.
    ///
    /// # Errors
    ///
    /// * `PuzzleParseError::InvalidCharacter` if the line contains any
    /// character outside the alphabet described above.
    /// * `PuzzleParseError::WrongLength` if the line does not contain exactly
    /// 81 characters.
    pub fn parse(code: &str) -> PuzzleParseResult<Board> {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for character in code.chars() {
            match character {
                '1'..='9' => {
                    let digit = character as usize - '0' as usize;
                    cells.push(DigitSet::singleton(digit).unwrap());
                },
                '.' => cells.push(DigitSet::full()),
                _ => return Err(PuzzleParseError::InvalidCharacter)
            }
        }

        if cells.len() != CELL_COUNT {
            return Err(PuzzleParseError::WrongLength);
        }

        Ok(Board {
            cells
        })
    }

    /// Converts this board into a puzzle line in a way that is consistent
    /// with [Board::parse]. Solved cells are rendered as their digit, all
    /// other cells as `'.'`. Note that candidate sets with more than one
    /// element cannot be represented in this format, so for partially reduced
    /// boards the conversion is lossy.
    pub fn to_line(&self) -> String {
        self.cells.iter()
            .map(|candidates| match candidates.single() {
                Some(digit) => (b'0' + digit as u8) as char,
                None => '.'
            })
            .collect()
    }

    /// Gets the candidate set of the given cell.
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cells[cell.index()]
    }

    /// If the given cell is solved, returns its digit, and `None` otherwise.
    pub fn value(&self, cell: Cell) -> Option<usize> {
        self.candidates(cell).single()
    }

    /// Returns the number of solved cells, i.e. cells whose candidate set has
    /// exactly one element.
    pub fn solved_count(&self) -> usize {
        self.cells.iter()
            .filter(|candidates| candidates.len() == 1)
            .count()
    }

    /// Indicates whether this board is completely solved, i.e. every cell's
    /// candidate set has exactly one element. Note that this does not imply
    /// the board is a valid solution; use
    /// [Topology::check](crate::topology::Topology::check) for that.
    pub fn is_solved(&self) -> bool {
        self.solved_count() == CELL_COUNT
    }

    /// Indicates whether any cell of this board has an empty candidate set,
    /// which means the board cannot be completed and the current search
    /// branch has failed.
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|candidates| candidates.is_empty())
    }

    /// Sets the candidate set of the given cell. This is the only way any
    /// component of this crate mutates a board.
    ///
    /// If `candidates` equals the cell's current candidate set, nothing
    /// happens and `false` is returned. This is not merely an optimization:
    /// the propagation engine's stalling detection relies on actual changes
    /// being the only ones reported, and no-op assignments must not reach the
    /// log. Otherwise the set is stored, `true` is returned, and, if the new
    /// set has exactly one element, a snapshot of the whole board is appended
    /// to `log` (if one is attached).
    pub fn assign(&mut self, cell: Cell, candidates: DigitSet,
            log: Option<&mut AssignmentLog>) -> bool {
        let index = cell.index();

        if self.cells[index] == candidates {
            return false;
        }

        self.cells[index] = candidates;

        if candidates.len() == 1 {
            if let Some(log) = log {
                log.record(self);
            }
        }

        true
    }
}

/// Parses the given puzzle line and solves it under the given [Topology]
/// using the [PropagatingSolver]. This is the top-level entry point of this
/// crate.
///
/// # Errors
///
/// If the puzzle line is malformed. See [Board::parse] for further
/// information. An unsolvable puzzle is *not* an error; it is reported as
/// [Solution::Impossible].
pub fn solve(code: &str, topology: &Topology) -> PuzzleParseResult<Solution> {
    let board = Board::parse(code)?;
    Ok(PropagatingSolver.solve(topology, &board))
}

/// Like [solve], but additionally records a snapshot into `log` every time a
/// cell is newly solved, including during discarded search branches. The
/// solution is identical to the one [solve] returns.
///
/// # Errors
///
/// If the puzzle line is malformed. See [Board::parse] for further
/// information.
pub fn solve_with_log(code: &str, topology: &Topology,
        log: &mut AssignmentLog) -> PuzzleParseResult<Solution> {
    let board = Board::parse(code)?;
    Ok(PropagatingSolver.solve_with_log(topology, &board, log))
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digits;

    #[test]
    fn parse_ok() {
        let mut code = String::from("4");
        code.push_str(&".".repeat(79));
        code.push('9');
        let board = Board::parse(&code).unwrap();

        assert_eq!(Some(4), board.value(Cell::new(0, 0)));
        assert_eq!(None, board.value(Cell::new(0, 1)));
        assert_eq!(DigitSet::full(), board.candidates(Cell::new(4, 4)));
        assert_eq!(Some(9), board.value(Cell::new(8, 8)));
        assert_eq!(2, board.solved_count());
    }

    #[test]
    fn parse_too_short() {
        assert_eq!(Err(PuzzleParseError::WrongLength),
            Board::parse(&".".repeat(80)));
    }

    #[test]
    fn parse_too_long() {
        assert_eq!(Err(PuzzleParseError::WrongLength),
            Board::parse(&".".repeat(82)));
    }

    #[test]
    fn parse_invalid_character() {
        let mut code = ".".repeat(40);
        code.push('0');
        code.push_str(&".".repeat(40));

        assert_eq!(Err(PuzzleParseError::InvalidCharacter),
            Board::parse(&code));
        assert_eq!(Err(PuzzleParseError::InvalidCharacter),
            Board::parse(&"x".repeat(81)));
    }

    #[test]
    fn parse_rejects_whitespace() {
        let mut code = ".".repeat(80);
        code.push(' ');

        assert_eq!(Err(PuzzleParseError::InvalidCharacter),
            Board::parse(&code));
    }

    #[test]
    fn to_line_round_trip() {
        let mut code = String::from("17");
        code.push_str(&".".repeat(78));
        code.push('3');
        let board = Board::parse(&code).unwrap();

        assert_eq!(code, board.to_line());
        assert_eq!(board, Board::parse(&board.to_line()).unwrap());
    }

    #[test]
    fn empty_board_is_unknown_everywhere() {
        let board = Board::empty();

        assert_eq!(0, board.solved_count());
        assert!(!board.is_solved());
        assert!(!board.has_contradiction());
        assert_eq!(".".repeat(81), board.to_line());
    }

    #[test]
    fn assign_changes_candidates() {
        let mut board = Board::empty();
        let cell = Cell::new(3, 4);

        assert!(board.assign(cell, digits!(2, 5), None));
        assert_eq!(digits!(2, 5), board.candidates(cell));
    }

    #[test]
    fn assign_same_candidates_is_no_op() {
        let mut board = Board::empty();
        let cell = Cell::new(3, 4);
        board.assign(cell, digits!(2, 5), None);
        let mut log = AssignmentLog::new();
        let before = board.clone();

        assert!(!board.assign(cell, digits!(2, 5), Some(&mut log)));
        assert_eq!(before, board);
        assert!(log.is_empty());
    }

    #[test]
    fn assign_records_newly_solved_cells() {
        let mut board = Board::empty();
        let mut log = AssignmentLog::new();

        board.assign(Cell::new(0, 0), digits!(2, 5), Some(&mut log));
        assert!(log.is_empty());

        board.assign(Cell::new(0, 0), digits!(5), Some(&mut log));
        assert_eq!(1, log.len());
        assert_eq!(&board, &log.snapshots()[0]);

        board.assign(Cell::new(1, 1), digits!(3, 7), Some(&mut log));
        assert_eq!(1, log.len());

        board.assign(Cell::new(1, 1), digits!(7), Some(&mut log));
        assert_eq!(2, log.len());
        assert_eq!(&board, &log.snapshots()[1]);
    }

    #[test]
    fn assign_without_log_does_not_record() {
        let mut board = Board::empty();

        assert!(board.assign(Cell::new(0, 0), digits!(5), None));
        assert_eq!(Some(5), board.value(Cell::new(0, 0)));
    }

    #[test]
    fn contradiction_is_detected() {
        let mut board = Board::empty();
        board.assign(Cell::new(7, 7), DigitSet::empty(), None);

        assert!(board.has_contradiction());
    }

    #[test]
    fn board_serde_round_trip() {
        let mut board = Board::empty();
        board.assign(Cell::new(0, 0), digits!(5), None);
        board.assign(Cell::new(4, 4), digits!(2, 8), None);

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }

    #[test]
    fn assignment_log_serde_round_trip() {
        let mut board = Board::empty();
        let mut log = AssignmentLog::new();
        board.assign(Cell::new(0, 0), digits!(5), Some(&mut log));
        board.assign(Cell::new(0, 1), digits!(6), Some(&mut log));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: AssignmentLog = serde_json::from_str(&json).unwrap();

        assert_eq!(log, deserialized);
        assert_eq!(2, deserialized.len());
    }
}
