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

//! Shortest-path algorithms.
//!
//! [`dijkstra`] handles non-negative edge weights and finalizes each node at
//! most once. [`bellmanford`] also accepts negative weights and detects
//! negative cycles reachable from the start node.

pub mod bellmanford;
pub mod dijkstra;

/// Walk a predecessor table back from `end` to `start`.
///
/// `pred[u]` must hold the predecessor node of `u` on a shortest path; the
/// caller guarantees that `end` has been reached from `start`.
pub(crate) fn extract_path(pred: &[usize], start: usize, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut u = end;
    while u != start {
        u = pred[u];
        path.push(u);
    }
    path.reverse();
    path
}
