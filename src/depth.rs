/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

/// Remaining search depth, in plies.
///
/// The usual mode for this engine is to search until every line reaches a
/// terminal position, so "no limit" is an explicit variant rather than a
/// large magic number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Search until the game ends on every line.
    #[default]
    Unlimited,

    /// Search at most this many plies before falling back to static
    /// evaluation.
    Limit(u32),
}

impl Depth {
    /// Returns `true` if the search must stop here and evaluate statically.
    #[inline(always)]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Limit(0))
    }

    /// The depth remaining after descending one ply.
    ///
    /// Saturates at zero; an unlimited depth stays unlimited.
    #[inline(always)]
    pub const fn next(self) -> Self {
        match self {
            Self::Unlimited => Self::Unlimited,
            Self::Limit(n) => Self::Limit(n.saturating_sub(1)),
        }
    }
}

impl FromStr for Depth {
    type Err = std::num::ParseIntError;

    /// Parses either the word `unlimited` (case-insensitive) or a ply count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unlimited") {
            Ok(Self::Unlimited)
        } else {
            s.parse().map(Self::Limit)
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::Limit(n) => n.fmt(f),
        }
    }
}
