/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::Color;

/// Errors raised while parsing a board file.
#[derive(Debug, thiserror::Error)]
pub enum ParseBoardError {
    /// The input contained no rows at all.
    #[error("board file contains no rows")]
    Empty,

    /// A row's column count differs from the first row's.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell token failed to parse as an integer.
    #[error("cell at row {row}, column {col} is not an integer: {source}")]
    BadCell {
        row: usize,
        col: usize,
        source: std::num::ParseIntError,
    },

    /// A cell held an integer that does not denote a piece or an empty square.
    #[error("cell at row {row}, column {col} holds {value}; cells must be -1, 0, or 1")]
    UnknownValue { row: usize, col: usize, value: i32 },
}

/// Errors raised when driving a search from the engine surface.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The root position was already terminal, so the search produced no
    /// move. Applying an absent move is refused rather than silently
    /// skipped.
    #[error("no legal moves for {side}; there is no move to apply")]
    NoMoveToApply { side: Color },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_error_display() {
        let err = ParseBoardError::RaggedRow {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 columns, expected 4");

        let err = ParseBoardError::UnknownValue {
            row: 0,
            col: 1,
            value: 7,
        };
        assert_eq!(
            err.to_string(),
            "cell at row 0, column 1 holds 7; cells must be -1, 0, or 1"
        );
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::NoMoveToApply { side: Color::White };
        assert_eq!(
            err.to_string(),
            "no legal moves for white; there is no move to apply"
        );
    }
}
