//! This module contains the deduction rules applied by the
//! [PropagatingSolver](crate::solver::PropagatingSolver) as well as
//! [propagate], which runs all rules to a fixpoint.
//!
//! Every rule is monotone: it only ever shrinks candidate sets, never grows
//! them. A rule reports via its return value whether it actually changed the
//! board, which is what the fixpoint detection in [propagate] relies on.

use crate::{AssignmentLog, Board};
use crate::topology::{Cell, Topology};
use crate::util::{DigitSet, MAX_DIGIT, MIN_DIGIT};

/// A trait for deduction rules, which shrink candidate sets of a [Board] by
/// logical inference under a given [Topology].
pub trait Rule {

    /// Applies this rule once to the entire board. Returns `true` if and only
    /// if the candidate set of at least one cell changed. All mutation goes
    /// through [Board::assign], so newly solved cells are recorded in `log`
    /// if one is attached.
    fn apply(&self, board: &mut Board, topology: &Topology,
        log: Option<&mut AssignmentLog>) -> bool;
}

/// A [Rule] which removes the digit of every solved cell from the candidate
/// sets of all its peers. Only the cells which were already solved when the
/// application started are processed; cells which become solved during the
/// application are picked up by the next round of [propagate].
#[derive(Clone, Copy, Debug)]
pub struct Eliminate;

impl Rule for Eliminate {
    fn apply(&self, board: &mut Board, topology: &Topology,
            mut log: Option<&mut AssignmentLog>) -> bool {
        let solved: Vec<(Cell, usize)> = Cell::all()
            .filter_map(|cell| board.value(cell).map(|digit| (cell, digit)))
            .collect();
        let mut changed = false;

        for (cell, digit) in solved {
            for &peer in topology.peers(cell) {
                let mut candidates = board.candidates(peer);

                if candidates.remove(digit).unwrap() {
                    changed |= board.assign(peer, candidates,
                        log.as_deref_mut());
                }
            }
        }

        changed
    }
}

#[derive(Clone, Copy)]
enum Placement {
    Nowhere,
    Single(Cell),
    Multiple
}

/// A [Rule] which solves every cell that is the only possible place for some
/// digit within one of its units, even if the cell itself still has further
/// candidates.
#[derive(Clone, Copy, Debug)]
pub struct OnlyChoice;

impl Rule for OnlyChoice {
    fn apply(&self, board: &mut Board, topology: &Topology,
            mut log: Option<&mut AssignmentLog>) -> bool {
        let mut changed = false;

        for unit in topology.units() {
            for digit in MIN_DIGIT..=MAX_DIGIT {
                let mut placement = Placement::Nowhere;

                for &cell in unit {
                    if board.candidates(cell).contains(digit) {
                        placement = match placement {
                            Placement::Nowhere => Placement::Single(cell),
                            _ => Placement::Multiple
                        };
                    }
                }

                if let Placement::Single(cell) = placement {
                    changed |= board.assign(cell,
                        DigitSet::singleton(digit).unwrap(),
                        log.as_deref_mut());
                }
            }
        }

        changed
    }
}

/// A [Rule] which searches for naked twins: two peer cells which share the
/// same two-element candidate set. Those two digits must go into the two twin
/// cells, so they can be removed from every cell which is a peer of both
/// twins. Cells whose candidate set equals the twin set as well as solved
/// cells are left alone.
#[derive(Clone, Copy, Debug)]
pub struct NakedTwins;

impl Rule for NakedTwins {
    fn apply(&self, board: &mut Board, topology: &Topology,
            mut log: Option<&mut AssignmentLog>) -> bool {
        let mut changed = false;

        for a in Cell::all() {
            let twins = board.candidates(a);

            if twins.len() != 2 {
                continue;
            }

            // Each twin pair is visited once, from its lower cell.
            let partners: Vec<Cell> = topology.peers(a).iter()
                .cloned()
                .filter(|&b| b > a && board.candidates(b) == twins)
                .collect();

            for b in partners {
                for c in topology.common_peers(a, b) {
                    let candidates = board.candidates(c);

                    if candidates == twins || candidates.len() < 2 {
                        continue;
                    }

                    let reduced = candidates - twins;

                    if reduced != candidates {
                        changed |= board.assign(c, reduced,
                            log.as_deref_mut());
                    }
                }
            }
        }

        changed
    }
}

/// Applies [Eliminate], [OnlyChoice], and [NakedTwins] in rounds until none
/// of them changes the board anymore, i.e. until a fixpoint is reached.
/// Returns `false` as soon as any cell's candidate set becomes empty, which
/// means the board has no solution, and `true` otherwise.
pub fn propagate(board: &mut Board, topology: &Topology,
        mut log: Option<&mut AssignmentLog>) -> bool {
    let rules: [&dyn Rule; 3] = [&Eliminate, &OnlyChoice, &NakedTwins];

    loop {
        let mut changed = false;

        for rule in rules.iter() {
            changed |= rule.apply(board, topology, log.as_deref_mut());

            if board.has_contradiction() {
                return false;
            }
        }

        if !changed {
            return true;
        }
    }
}
