/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Board representation: colors, squares, and the cell grid.
mod board;

/// The command surface of the engine binary.
mod cli;

/// Remaining search depth, with an explicit unlimited mode.
mod depth;

/// Ties the pieces together: load a board, search it, record the move.
mod engine;

/// Error types raised at the engine's boundaries.
mod error;

/// Evaluation of positions.
mod eval;

/// Legal move enumeration.
mod moves;

/// Numerical position scores.
mod score;

/// Main engine logic; all search related code.
mod search;

pub use board::*;
pub use cli::*;
pub use depth::*;
pub use engine::*;
pub use error::*;
pub use eval::*;
pub use moves::*;
pub use score::*;
pub use search::*;
