/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use crate::{Move, ParseBoardError};

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The `+1` player. Advances down the board, toward the highest row index.
    White,

    /// The `-1` player. Advances up the board, toward row 0.
    Black,
}

impl Color {
    /// Returns the opposing color.
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Returns `true` if this color is White.
    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        matches!(self, Self::White)
    }

    /// The signed cell value of this color's pieces: `1` for White, `-1` for Black.
    #[inline(always)]
    pub const fn multiplier(&self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A single `(row, column)` coordinate on a [`Board`].
///
/// Displays in the move-log form `[row,col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Constructs a new [`Square`] at the provided coordinates.
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

/// The game board: a rectangular grid of cells, stored row-major.
///
/// Row 0 is the top of the board. Each cell holds at most one piece.
/// Dimensions are fixed when the board is parsed; only cell contents change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Number of rows on this board.
    #[inline(always)]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns on this board.
    #[inline(always)]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    const fn index(&self, square: Square) -> usize {
        square.row * self.cols + square.col
    }

    /// Fetches the cell at `square`.
    ///
    /// Panics if `square` is off the board. Callers are expected to have
    /// bounds-checked their coordinates already; the move generator never
    /// produces an out-of-range square.
    #[inline(always)]
    pub fn get(&self, square: Square) -> Option<Color> {
        self.cells[self.index(square)]
    }

    /// Overwrites the cell at `square`.
    #[inline(always)]
    pub fn set(&mut self, square: Square, cell: Option<Color>) {
        let index = self.index(square);
        self.cells[index] = cell;
    }

    /// Iterates over all squares in row-major order (top-to-bottom, left-to-right).
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Square::new(row, col)))
    }

    /// Total number of occupied cells, regardless of color.
    pub fn count_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Moves the piece at `mv.from` onto `mv.to`, clearing the source.
    ///
    /// The destination is overwritten unconditionally: landing on an enemy
    /// piece removes it by replacement, not by a separate capture step.
    /// Legality is the move generator's responsibility and is not re-checked
    /// here.
    pub fn apply_move(&mut self, mv: Move) {
        let piece = self.get(mv.from);
        self.set(mv.to, piece);
        self.set(mv.from, None);
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from comma-separated integer rows, one row per line.
    ///
    /// `1` is a White piece, `-1` a Black piece, `0` an empty cell. Every
    /// row must have the same number of columns as the first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = 0;
        let mut cols = 0;
        let mut cells = Vec::new();

        for (row, line) in s.lines().enumerate() {
            let mut width = 0;

            for (col, token) in line.split(',').enumerate() {
                let value: i32 = token
                    .trim()
                    .parse()
                    .map_err(|source| ParseBoardError::BadCell { row, col, source })?;

                let cell = match value {
                    0 => None,
                    1 => Some(Color::White),
                    -1 => Some(Color::Black),
                    value => return Err(ParseBoardError::UnknownValue { row, col, value }),
                };

                cells.push(cell);
                width += 1;
            }

            if row == 0 {
                cols = width;
            } else if width != cols {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    expected: cols,
                    found: width,
                });
            }

            rows += 1;
        }

        if rows == 0 {
            return Err(ParseBoardError::Empty);
        }

        Ok(Self { rows, cols, cells })
    }
}

impl fmt::Display for Board {
    /// Writes the board in the same form it is parsed from: comma-separated
    /// cell values, one newline-terminated line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ",")?;
                }

                let value = match self.get(Square::new(row, col)) {
                    Some(color) => color.multiplier(),
                    None => 0,
                };
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
