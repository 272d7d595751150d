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

//! Dijkstra's shortest path algorithm.
//!
//! Computes shortest paths from a start node in a graph with non-negative
//! edge weights using a binary heap for the candidate nodes. Each node is
//! finalized at most once; stale heap entries are skipped.
//!
//! # Example
//!
//! ```
//! use orlib::graph::GraphBuilder;
//! use orlib::shortestpath::dijkstra;
//!
//! let mut b = GraphBuilder::undirected(6);
//! for &(u, v, w) in &[
//!     (0, 1, 9),
//!     (0, 2, 2),
//!     (0, 4, 14),
//!     (1, 3, 6),
//!     (2, 3, 8),
//!     (2, 4, 9),
//!     (2, 5, 10),
//!     (3, 5, 15),
//!     (4, 5, 7),
//! ] {
//!     b.add_edge(u, v, w);
//! }
//! let g = b.into_graph();
//!
//! let (path, dist) = dijkstra::find_path(&g, 4, 1).unwrap().unwrap();
//! assert_eq!(dist, 20);
//! assert_eq!(path, vec![4, 2, 0, 1]);
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::num::traits::NumAssign;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Find a shortest path from `start` to `end`.
///
/// Returns the path as a node sequence (including both endpoints) together
/// with its total weight, or `Ok(None)` if `end` is not reachable from
/// `start`. If `start == end` the path consists of the single node and has
/// weight zero.
///
/// Fails with [`Error::InvalidInput`] if a node is out of range or the
/// graph contains a negative edge weight.
pub fn find_path<W>(g: &Graph<W>, start: usize, end: usize) -> Result<Option<(Vec<usize>, W)>>
where
    W: NumAssign + Ord + Copy,
{
    validate(g, &[start, end])?;
    let (dist, pred) = run(g, start, Some(end));
    Ok(dist[end].map(|d| (super::extract_path(&pred, start, end), d)))
}

/// Compute the shortest distances from `start` to all nodes.
///
/// Unreachable nodes are reported as `None`.
///
/// Fails with [`Error::InvalidInput`] if `start` is out of range or the
/// graph contains a negative edge weight.
pub fn distances<W>(g: &Graph<W>, start: usize) -> Result<Vec<Option<W>>>
where
    W: NumAssign + Ord + Copy,
{
    validate(g, &[start])?;
    let (dist, _) = run(g, start, None);
    Ok(dist)
}

fn validate<W>(g: &Graph<W>, nodes: &[usize]) -> Result<()>
where
    W: NumAssign + Ord + Copy,
{
    for &u in nodes {
        if u >= g.num_nodes() {
            return Err(Error::InvalidInput(format!("node {} out of range", u)));
        }
    }
    if g.edges().iter().any(|e| e.weight < W::zero()) {
        return Err(Error::InvalidInput(
            "Dijkstra requires non-negative edge weights".into(),
        ));
    }
    Ok(())
}

fn run<W>(g: &Graph<W>, start: usize, target: Option<usize>) -> (Vec<Option<W>>, Vec<usize>)
where
    W: NumAssign + Ord + Copy,
{
    let mut dist = vec![None; g.num_nodes()];
    let mut pred = vec![usize::max_value(); g.num_nodes()];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((W::zero(), start, start)));

    while let Some(Reverse((d, u, p))) = heap.pop() {
        if dist[u].is_some() {
            continue;
        }
        dist[u] = Some(d);
        pred[u] = p;
        if Some(u) == target {
            break;
        }
        for (e, v) in g.outedges(u) {
            if dist[v].is_none() {
                heap.push(Reverse((d + *g.weight(e), v, u)));
            }
        }
    }

    (dist, pred)
}

#[cfg(test)]
mod tests {
    use super::{distances, find_path};
    use crate::error::Error;
    use crate::graph::GraphBuilder;

    #[test]
    fn start_equals_end() {
        let mut b = GraphBuilder::undirected(2);
        b.add_edge(0, 1, 3);
        let g = b.into_graph();
        assert_eq!(find_path(&g, 1, 1), Ok(Some((vec![1], 0))));
    }

    #[test]
    fn unreachable_end_is_none() {
        let mut b = GraphBuilder::directed(3);
        b.add_edge(0, 1, 1);
        let g = b.into_graph();
        assert_eq!(find_path(&g, 0, 2), Ok(None));
        assert_eq!(distances(&g, 0), Ok(vec![Some(0), Some(1), None]));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut b = GraphBuilder::directed(2);
        b.add_edge(0, 1, -1);
        let g = b.into_graph();
        assert!(matches!(find_path(&g, 0, 1), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_node_is_rejected() {
        let g = GraphBuilder::<i32>::undirected(2).into_graph();
        assert!(matches!(find_path(&g, 0, 5), Err(Error::InvalidInput(_))));
    }
}
