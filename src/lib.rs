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

//! A library of classic graph algorithms and transportation-problem solvers.
//!
//! The crate provides two families of algorithms, both operating on plain
//! in-memory data and returning plain results:
//!
//! - graph algorithms over a weighted [`Graph`]: shortest paths
//!   ([`shortestpath::dijkstra`], [`shortestpath::bellmanford`]), maximum
//!   flow ([`maxflow::fordfulkerson`]), minimum spanning trees
//!   ([`mst::kruskal`]) and vertex coloring ([`coloring::welsh_powell`]);
//! - solvers for the classical transportation problem ([`transport`]):
//!   the North-West Corner, Least-Cost and Vogel initial-solution
//!   heuristics and the stepping-stone exchange method.
//!
//! All computations are synchronous and deterministic. Algorithms never
//! perform I/O and never mutate their inputs; failures are reported through
//! the crate-wide [`Error`] type.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod graph;
pub use self::graph::{Graph, GraphBuilder};

pub mod error;
pub use self::error::{Error, Result};

// # Algorithms

pub mod coloring;
pub mod maxflow;
pub mod mst;
pub mod shortestpath;
pub mod transport;
