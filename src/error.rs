// Copyright (c) 2026 The orlib developers
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! The error type shared by all algorithms.

use std::error;
use std::fmt;

/// An error returned by one of the algorithms of this crate.
///
/// Note that "no path found" is *not* an error. Operations that may
/// legitimately fail to find a connecting structure return `Ok(None)`
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or domain-violating input, e.g. a node id out of range, a
    /// negative weight passed to an algorithm requiring non-negative
    /// weights, or a directed graph passed to an undirected-only algorithm.
    InvalidInput(String),
    /// A transportation problem whose total supply differs from its total
    /// demand.
    Unbalanced,
    /// A negative cycle reachable from the start node was detected.
    NegativeCycle,
    /// An explicitly requested iteration limit was exceeded before the
    /// algorithm terminated.
    ResourceExhausted { limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            InvalidInput(msg) => write!(fmt, "invalid input: {}", msg),
            Unbalanced => write!(fmt, "total supply does not equal total demand"),
            NegativeCycle => write!(fmt, "negative cycle reachable from the start node"),
            ResourceExhausted { limit } => write!(fmt, "iteration limit of {} exceeded", limit),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
