/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{Board, Color, Square};

/// Relocation of a single piece from one square to another.
///
/// Displays in the move-log form `[srcRow,srcCol]->[dstRow,dstCol]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Constructs a new [`Move`] from `from` to `to`.
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Enumerates every legal move for `color` on `board`.
///
/// Pieces are visited in row-major order (top-to-bottom, left-to-right) and
/// each piece emits up to three moves, in order:
///
/// 1. The straight advance, if the cell directly ahead is empty.
/// 2. The forward-right diagonal, if that cell holds an enemy piece.
/// 3. The forward-left diagonal, if that cell holds an enemy piece.
///
/// "Ahead" is one row toward the far side: down the board for White, up for
/// Black. A piece standing on its terminal row has no moves. Diagonal moves
/// land only on interior columns (`0 < col < cols - 1`); the outermost
/// column on either side is never a diagonal destination, even when an
/// enemy piece stands there.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    let enemy = color.opponent();

    for from in board.squares() {
        if board.get(from) != Some(color) {
            continue;
        }

        // One row closer to this color's far side, if still on the board.
        let next_row = match color {
            Color::White => from.row + 1,
            Color::Black => match from.row.checked_sub(1) {
                Some(row) => row,
                None => continue,
            },
        };
        if next_row >= board.rows() {
            continue;
        }

        let ahead = Square::new(next_row, from.col);
        if board.get(ahead).is_none() {
            moves.push(Move::new(from, ahead));
        }

        // Forward-right, then forward-left.
        for target_col in [from.col.checked_add(1), from.col.checked_sub(1)]
            .into_iter()
            .flatten()
        {
            // Diagonal destinations must lie strictly inside the column range.
            if target_col == 0 || target_col + 1 >= board.cols() {
                continue;
            }

            let target = Square::new(next_row, target_col);
            if board.get(target) == Some(enemy) {
                moves.push(Move::new(from, target));
            }
        }
    }

    moves
}

/// Returns `true` if `color` has no legal moves on `board`.
///
/// Running out of moves is the game's only terminal condition.
#[inline(always)]
pub fn game_over(board: &Board, color: Color) -> bool {
    generate_moves(board, color).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves_on(csv: &str, color: Color) -> Vec<Move> {
        let board: Board = csv.parse().unwrap();
        generate_moves(&board, color)
    }

    fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
        Move::new(Square::new(from.0, from.1), Square::new(to.0, to.1))
    }

    #[test]
    fn test_white_advances_down_black_advances_up() {
        let csv = "0,1,0\n0,0,0\n0,-1,0\n";

        assert_eq!(moves_on(csv, Color::White), [mv((0, 1), (1, 1))]);
        assert_eq!(moves_on(csv, Color::Black), [mv((2, 1), (1, 1))]);
    }

    #[test]
    fn test_straight_advance_blocked_by_any_piece() {
        // Blocked by a friendly piece, and by an enemy piece: a piece
        // directly ahead is never captured, only diagonals are.
        assert_eq!(moves_on("0,1,0\n0,1,0\n0,0,0\n", Color::White), [mv((1, 1), (2, 1))]);
        assert!(moves_on("0,1,0\n0,-1,0\n", Color::White).is_empty());
    }

    #[test]
    fn test_piece_on_terminal_row_has_no_moves() {
        assert!(moves_on("0,0,0\n0,0,0\n0,1,0\n", Color::White).is_empty());
        assert!(moves_on("0,-1,0\n0,0,0\n0,0,0\n", Color::Black).is_empty());
    }

    #[test]
    fn test_diagonal_captures_emitted_right_then_left() {
        // White on (0,2) with enemies on both forward diagonals, plus an
        // empty cell ahead: straight, then right, then left.
        let csv = "0,0,1,0,0\n0,-1,0,-1,0\n";

        assert_eq!(
            moves_on(csv, Color::White),
            [mv((0, 2), (1, 2)), mv((0, 2), (1, 3)), mv((0, 2), (1, 1))]
        );
    }

    #[test]
    fn test_diagonal_requires_enemy_piece() {
        // Both forward diagonals are empty; only the straight advance remains.
        assert_eq!(
            moves_on("0,0,1,0,0\n0,0,0,0,0\n", Color::White),
            [mv((0, 2), (1, 2))]
        );

        // A friendly piece on the diagonal is not a target either.
        assert_eq!(
            moves_on("0,0,1,0,0\n0,1,0,0,0\n0,0,0,0,0\n", Color::White),
            [mv((0, 2), (1, 2)), mv((1, 1), (2, 1))]
        );
    }

    #[test]
    fn test_outermost_columns_are_never_diagonal_destinations() {
        // Enemies sit on both forward diagonals, but those diagonals are the
        // first and last columns, so only the straight advance is legal.
        let csv = "0,1,0\n-1,0,-1\n";

        assert_eq!(moves_on(csv, Color::White), [mv((0, 1), (1, 1))]);

        // On a wider board the same enemy placement is capturable.
        let csv = "0,0,1,0,0\n0,-1,0,-1,0\n";
        assert_eq!(moves_on(csv, Color::White).len(), 3);
    }

    #[test]
    fn test_pieces_visited_in_row_major_order() {
        let csv = "1,0,1\n0,0,0\n0,0,0\n";

        assert_eq!(
            moves_on(csv, Color::White),
            [mv((0, 0), (1, 0)), mv((0, 2), (1, 2))]
        );
    }

    #[test]
    fn test_game_over_iff_no_moves() {
        let board: Board = "0,1,0\n0,0,0\n".parse().unwrap();

        assert!(!game_over(&board, Color::White));
        // Black has no pieces at all, so Black is out of moves.
        assert!(game_over(&board, Color::Black));

        // White's only piece is stuck on its terminal row.
        let board: Board = "0,0,0\n0,1,0\n".parse().unwrap();
        assert!(game_over(&board, Color::White));
    }

    #[test]
    fn test_straight_advance_preserves_piece_count() {
        let board: Board = "1,0,1\n0,0,0\n0,-1,0\n".parse().unwrap();
        let before = board.count_pieces();

        for mv in generate_moves(&board, Color::White) {
            let mut next = board.clone();
            next.apply_move(mv);
            assert_eq!(next.count_pieces(), before, "move {mv} changed the piece count");
        }
    }

    #[test]
    fn test_capture_removes_exactly_one_piece() {
        let board: Board = "0,1,0,0\n0,0,-1,0\n".parse().unwrap();
        let moves = generate_moves(&board, Color::White);
        let capture = mv((0, 1), (1, 2));
        assert!(moves.contains(&capture));

        let mut next = board.clone();
        next.apply_move(capture);
        assert_eq!(next.count_pieces(), board.count_pieces() - 1);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(mv((2, 1), (1, 1)).to_string(), "[2,1]->[1,1]");
    }
}
