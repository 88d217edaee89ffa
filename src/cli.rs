/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

use clap::{builder::PossibleValue, Parser, ValueEnum};

use crate::{Color, Depth};

/// Compute and record the best move for one side of the game.
///
/// The board file is read, the chosen move is applied to it in place, and
/// one move line is appended to the log file.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the board file: comma-separated cell values, one row per line.
    pub board: PathBuf,

    /// Path to the move log; one `[srcRow,srcCol]->[dstRow,dstCol]` line is
    /// appended per run.
    pub log: PathBuf,

    /// Maximum number of plies to search before falling back to static
    /// evaluation.
    #[arg(short, long, default_value_t = Depth::Unlimited)]
    pub depth: Depth,

    /// The side to find a move for.
    #[arg(short, long, default_value = "white")]
    pub side: Color,
}

impl ValueEnum for Color {
    fn value_variants<'a>() -> &'a [Self] {
        &[Color::White, Color::Black]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            Color::White => PossibleValue::new("white").alias("w"),
            Color::Black => PossibleValue::new("black").alias("b"),
        };

        Some(value)
    }
}
