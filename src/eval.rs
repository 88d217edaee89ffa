/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{Board, Color, Score, Square};

/// Encapsulates the logic of scoring a position.
///
/// Generally, a high score is good for White, and a low score is good for
/// Black. Only the two terminal rows contribute: each White piece that has
/// reached the last row is worth +1, each Black piece that has reached row
/// 0 is worth -1. A piece anywhere else is worth nothing until it arrives.
#[derive(Debug, Clone)]
pub struct Evaluator<'a> {
    /// The board whose position to evaluate.
    board: &'a Board,
}

impl<'a> Evaluator<'a> {
    /// Construct a new [`Evaluator`] for the provided board.
    #[inline(always)]
    pub const fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Evaluate this position.
    #[inline(always)]
    pub fn eval(self) -> Score {
        let last_row = self.board.rows() - 1;
        let mut score = Score::ZERO;

        for col in 0..self.board.cols() {
            if self.board.get(Square::new(last_row, col)) == Some(Color::White) {
                score += 1;
            }

            if self.board.get(Square::new(0, col)) == Some(Color::Black) {
                score -= 1;
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(csv: &str) -> Score {
        let board: Board = csv.parse().unwrap();
        Evaluator::new(&board).eval()
    }

    #[test]
    fn test_terminal_rows_score_symmetrically() {
        assert_eq!(eval("0,0,0\n0,0,0\n0,1,0\n"), Score(1));
        assert_eq!(eval("0,-1,0\n0,0,0\n0,0,0\n"), Score(-1));
        assert_eq!(eval("0,-1,0\n0,0,0\n0,1,0\n"), Score::ZERO);
        assert_eq!(eval("1,1,1\n0,0,0\n1,1,1\n"), Score(3));
        assert_eq!(eval("-1,-1,-1\n0,0,0\n-1,-1,-1\n"), Score(-3));
    }

    #[test]
    fn test_wrong_color_on_a_terminal_row_is_ignored() {
        // A Black piece on White's far row scores nothing, and vice versa.
        assert_eq!(eval("0,0,0\n0,0,0\n0,-1,0\n"), Score::ZERO);
        assert_eq!(eval("0,1,0\n0,0,0\n0,0,0\n"), Score::ZERO);
    }

    #[test]
    fn test_interior_rows_never_affect_the_score() {
        let empty_middle = eval("1,0,-1\n0,0,0\n-1,0,1\n");
        let full_middle = eval("1,0,-1\n1,-1,1\n-1,0,1\n");

        assert_eq!(empty_middle, full_middle);
    }

    #[test]
    fn test_single_row_board_scores_both_bands() {
        // With one row, that row is both row 0 and the last row.
        assert_eq!(eval("1,0,-1\n"), Score::ZERO);
        assert_eq!(eval("1,1,0\n"), Score(2));
        assert_eq!(eval("0,-1,-1\n"), Score(-2));
    }
}
