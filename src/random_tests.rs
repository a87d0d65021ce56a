//! Randomized tests which solve relabeled variants of fixed puzzles. A
//! relabeling applies a permutation of the digits 1 to 9 to every given,
//! which preserves the structure of the puzzle under every topology, so each
//! variant must remain solvable. The RNG is seeded for reproducibility.

use crate::{Board, solve};
use crate::solver::Solution;
use crate::topology::{Cell, Topology};

use rand::SeedableRng;
use rand::seq::SliceRandom;

use rand_chacha::ChaCha8Rng;

const EASY_PUZZLE: &str = "..3.2.6..9..3.5..1..18.64....81.29..7......\
    .8..67.82....26.95..8..2.3..9..5.1.3..";

const DIAGONAL_PUZZLE: &str = "2.............62....1....7...6..8...3...9..\
    .7...6..4...4....8....52.............3";

fn random_permutation(rng: &mut ChaCha8Rng) -> Vec<char> {
    let mut digits: Vec<char> = ('1'..='9').collect();
    digits.shuffle(rng);
    digits
}

fn relabel(code: &str, permutation: &[char]) -> String {
    code.chars()
        .map(|character| match character.to_digit(10) {
            Some(digit) => permutation[digit as usize - 1],
            None => '.'
        })
        .collect()
}

fn expect_solved(solution: Solution) -> Board {
    match solution {
        Solution::Solved(board) => board,
        Solution::Impossible => panic!("expected a solution")
    }
}

fn assert_givens_preserved(code: &str, board: &Board) {
    for (index, character) in code.chars().enumerate() {
        if let Some(digit) = character.to_digit(10) {
            assert_eq!(Some(digit as usize),
                board.value(Cell::from_index(index)));
        }
    }
}

#[test]
fn relabeled_easy_puzzles_remain_solvable() {
    let topology = Topology::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(117);

    for _ in 0..10 {
        let permutation = random_permutation(&mut rng);
        let code = relabel(EASY_PUZZLE, &permutation);
        let board = expect_solved(solve(&code, &topology).unwrap());

        assert!(topology.check(&board));
        assert_givens_preserved(&code, &board);
    }
}

#[test]
fn relabeled_diagonal_puzzles_remain_solvable() {
    let topology = Topology::diagonal();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..10 {
        let permutation = random_permutation(&mut rng);
        let code = relabel(DIAGONAL_PUZZLE, &permutation);
        let board = expect_solved(solve(&code, &topology).unwrap());

        assert!(topology.check(&board));
        assert_givens_preserved(&code, &board);
    }
}

#[test]
fn relabeling_commutes_with_solving_unique_puzzles() {
    // The easy puzzle has a unique solution, so relabeling the givens must
    // relabel the solution in the same way.
    let topology = Topology::standard();
    let mut rng = ChaCha8Rng::seed_from_u64(4711);
    let solution = expect_solved(solve(EASY_PUZZLE, &topology).unwrap());
    let solution_line = solution.to_line();

    for _ in 0..5 {
        let permutation = random_permutation(&mut rng);
        let code = relabel(EASY_PUZZLE, &permutation);
        let board = expect_solved(solve(&code, &topology).unwrap());

        assert_eq!(relabel(&solution_line, &permutation), board.to_line());
    }
}
