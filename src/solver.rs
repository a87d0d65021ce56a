//! This module contains the solver infrastructure: the [Solution] type, the
//! [Solver] trait, and the [PropagatingSolver], which interleaves the
//! deduction rules from the [rules] module with depth-first backtracking
//! search.

pub mod rules;

use crate::{AssignmentLog, Board};
use crate::topology::{Cell, Topology};
use crate::util::DigitSet;

/// An enumeration of the results a [Solver] can return for a given board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the board has no solution, i.e. the search exhausted
    /// every branch without completing the board.
    Impossible,

    /// Indicates that the solver found the wrapped, fully solved [Board].
    Solved(Board)
}

/// A trait for structs which can solve Sudoku boards under a given
/// [Topology].
pub trait Solver {

    /// Attempts to solve the given board. All units and peers are taken from
    /// the given topology, so the same board may have different solutions
    /// under different topologies.
    fn solve(&self, topology: &Topology, board: &Board) -> Solution;
}

/// Among all unsolved cells, finds the one with the fewest remaining
/// candidates, breaking ties in favor of the first cell in row-major order.
/// Returns `None` if every cell is solved.
fn branch_cell(board: &Board) -> Option<Cell> {
    let mut best: Option<(usize, Cell)> = None;

    for cell in Cell::all() {
        let len = board.candidates(cell).len();

        if len < 2 {
            continue;
        }

        match best {
            Some((best_len, _)) if best_len <= len => { },
            _ => best = Some((len, cell))
        }
    }

    best.map(|(_, cell)| cell)
}

fn search(topology: &Topology, mut board: Board,
        mut log: Option<&mut AssignmentLog>) -> Solution {
    if !rules::propagate(&mut board, topology, log.as_deref_mut()) {
        return Solution::Impossible;
    }

    let cell = match branch_cell(&board) {
        Some(cell) => cell,
        None => return Solution::Solved(board)
    };

    for digit in board.candidates(cell).iter() {
        let mut branch = board.clone();
        branch.assign(cell, DigitSet::singleton(digit).unwrap(),
            log.as_deref_mut());

        if let Solution::Solved(solved) =
                search(topology, branch, log.as_deref_mut()) {
            return Solution::Solved(solved);
        }
    }

    Solution::Impossible
}

/// A [Solver] which first reduces the board by running the deduction rules
/// from the [rules] module to a fixpoint and then, if the board is neither
/// solved nor contradictory, branches on the unsolved cell with the fewest
/// remaining candidates, trying its candidates in ascending order on a copy
/// of the board each. The first branch which leads to a solution wins, so the
/// solver is fully deterministic.
#[derive(Clone, Copy, Debug)]
pub struct PropagatingSolver;

impl PropagatingSolver {

    /// Like [Solver::solve], but additionally records a snapshot into `log`
    /// every time a cell is newly solved. Snapshots made in search branches
    /// which are later discarded remain in the log, so it is a trace of the
    /// entire search, not only of the winning branch.
    pub fn solve_with_log(&self, topology: &Topology, board: &Board,
            log: &mut AssignmentLog) -> Solution {
        search(topology, board.clone(), Some(log))
    }
}

impl Solver for PropagatingSolver {
    fn solve(&self, topology: &Topology, board: &Board) -> Solution {
        search(topology, board.clone(), None)
    }
}
