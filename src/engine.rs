/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};

use crate::{Board, Cli, EngineError, Move, Search, SearchResult};

/// Runs one full engine cycle over the provided arguments.
///
/// Loads the board, searches for the requested side at the requested depth,
/// prints a summary, applies the chosen move to the board file in place,
/// and appends the move to the log file.
pub fn run(cli: &Cli) -> Result<()> {
    let text = fs::read_to_string(&cli.board)
        .with_context(|| format!("failed to read board file {}", cli.board.display()))?;

    let mut board: Board = text
        .parse()
        .with_context(|| format!("malformed board in {}", cli.board.display()))?;

    let result = Search::new().start(&board, cli.depth, cli.side);
    report(&result);

    // A terminal root position yields no move; refuse to pretend otherwise.
    let mv = result
        .bestmove
        .ok_or(EngineError::NoMoveToApply { side: cli.side })?;

    board.apply_move(mv);
    fs::write(&cli.board, board.to_string())
        .with_context(|| format!("failed to rewrite board file {}", cli.board.display()))?;

    append_move(&cli.log, mv)
}

/// Prints the search summary to stdout.
fn report(result: &SearchResult) {
    println!(
        "Finished with score {} ({} nodes)",
        result.score, result.nodes
    );

    match result.bestmove {
        Some(mv) => println!("Last Move: {mv}"),
        None => println!("Last Move: (none)"),
    }
}

/// Appends the chosen move to the log file as one `[r,c]->[r,c]` line.
///
/// The log is created if missing and never truncated; each run adds a line.
fn append_move(path: &Path, mv: Move) -> Result<()> {
    let mut log = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open move log {}", path.display()))?;

    writeln!(log, "{mv}").with_context(|| format!("failed to append to move log {}", path.display()))
}
