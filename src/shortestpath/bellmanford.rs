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

//! The Bellman-Ford shortest path algorithm.
//!
//! Unlike Dijkstra's algorithm this handles negative edge weights. It
//! performs `|V|-1` rounds of relaxations over the edge list (stopping
//! early once a round changes nothing) followed by one verification round;
//! a relaxation still possible in the verification round proves a negative
//! cycle reachable from the start node.
//!
//! On an undirected graph every edge is relaxed in both directions, so a
//! negative undirected edge is itself a negative cycle and is reported as
//! such.
//!
//! # Example
//!
//! ```
//! use orlib::graph::GraphBuilder;
//! use orlib::shortestpath::bellmanford;
//!
//! let mut b = GraphBuilder::directed(4);
//! b.add_edge(0, 1, 4);
//! b.add_edge(0, 2, 2);
//! b.add_edge(1, 3, 2);
//! b.add_edge(2, 1, -1);
//! b.add_edge(2, 3, 5);
//! let g = b.into_graph();
//!
//! let dist = bellmanford::distances(&g, 0).unwrap();
//! assert_eq!(dist, vec![Some(0), Some(1), Some(2), Some(3)]);
//! ```

use either::Either;

use crate::num::traits::NumAssign;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Compute the shortest distances from `start` to all nodes.
///
/// Unreachable nodes are reported as `None`. Fails with
/// [`Error::NegativeCycle`] if a negative cycle is reachable from `start`
/// and with [`Error::InvalidInput`] if `start` is out of range.
pub fn distances<W>(g: &Graph<W>, start: usize) -> Result<Vec<Option<W>>>
where
    W: NumAssign + Ord + Copy,
{
    let (dist, _) = run(g, start)?;
    Ok(dist)
}

/// Find a shortest path from `start` to `end`.
///
/// Returns the path as a node sequence together with its total weight, or
/// `Ok(None)` if `end` is not reachable. Fails with
/// [`Error::NegativeCycle`] if a negative cycle is reachable from `start`.
pub fn find_path<W>(g: &Graph<W>, start: usize, end: usize) -> Result<Option<(Vec<usize>, W)>>
where
    W: NumAssign + Ord + Copy,
{
    if end >= g.num_nodes() {
        return Err(Error::InvalidInput(format!("node {} out of range", end)));
    }
    let (dist, pred) = run(g, start)?;
    Ok(dist[end].map(|d| (super::extract_path(&pred, start, end), d)))
}

/// Return the arcs to be relaxed: edges as stored for a directed graph,
/// both orientations for an undirected one.
fn arcs<W: Copy>(g: &Graph<W>) -> impl Iterator<Item = (usize, usize, W)> + '_ {
    g.edges().iter().flat_map(move |e| {
        let fwd = (e.source, e.target, e.weight);
        if g.is_directed() {
            Either::Left(std::iter::once(fwd))
        } else {
            let bwd = (e.target, e.source, e.weight);
            Either::Right(std::iter::once(fwd).chain(std::iter::once(bwd)))
        }
    })
}

fn run<W>(g: &Graph<W>, start: usize) -> Result<(Vec<Option<W>>, Vec<usize>)>
where
    W: NumAssign + Ord + Copy,
{
    let n = g.num_nodes();
    if start >= n {
        return Err(Error::InvalidInput(format!("node {} out of range", start)));
    }

    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut pred = vec![usize::max_value(); n];
    dist[start] = Some(W::zero());

    for _round in 1..n {
        let mut changed = false;
        for (u, v, w) in arcs(g) {
            if let Some(du) = dist[u] {
                let newdist = du + w;
                if dist[v].map_or(true, |dv| newdist < dv) {
                    dist[v] = Some(newdist);
                    pred[v] = u;
                    changed = true;
                }
            }
        }
        if !changed {
            return Ok((dist, pred));
        }
    }

    // verification round
    for (u, v, w) in arcs(g) {
        if let Some(du) = dist[u] {
            if dist[v].map_or(true, |dv| du + w < dv) {
                return Err(Error::NegativeCycle);
            }
        }
    }

    Ok((dist, pred))
}
