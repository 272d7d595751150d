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

//! The Ford-Fulkerson method with breadth-first augmenting path search.
//!
//! Augmenting paths are found by a BFS over the residual network (the
//! Edmonds-Karp rule), which bounds the number of augmentations
//! polynomially. Edge weights are interpreted as capacities. The residual
//! network consists of a forward arc with residual capacity
//! `capacity - flow` and a reverse arc with residual capacity `flow` per
//! edge; arc ids are the edge id shifted left once, with the lowest bit
//! marking the reverse arc.
//!
//! # Example
//!
//! ```
//! use orlib::graph::GraphBuilder;
//! use orlib::maxflow::max_flow;
//!
//! let mut b = GraphBuilder::directed(4);
//! b.add_edge(0, 1, 3);
//! b.add_edge(0, 2, 2);
//! b.add_edge(1, 3, 2);
//! b.add_edge(2, 3, 3);
//! let g = b.into_graph();
//!
//! let result = max_flow(&g, 0, 3).unwrap();
//! assert_eq!(result.value, 4);
//! assert_eq!(result.flow, vec![2, 2, 2, 2]);
//! assert_eq!(result.mincut, vec![0, 1]);
//! ```

use std::collections::VecDeque;

use log::debug;

use crate::num::traits::NumAssign;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// The result of a maximum-flow computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaxFlow<W> {
    /// The value of the maximum flow.
    pub value: W,
    /// The flow on each edge, indexed by edge id.
    pub flow: Vec<W>,
    /// The source side of a minimum cut: all nodes still reachable from the
    /// source in the final residual network, in ascending order.
    pub mincut: Vec<usize>,
}

/// Compute a maximum flow from `source` to `sink`.
///
/// Fails with [`Error::InvalidInput`] if the graph is undirected, a node is
/// out of range, `source == sink`, or an edge has negative capacity.
pub fn max_flow<W>(g: &Graph<W>, source: usize, sink: usize) -> Result<MaxFlow<W>>
where
    W: NumAssign + Ord + Copy,
{
    solve(g, source, sink, None)
}

/// Compute a maximum flow, giving up after `limit` augmentations.
///
/// Fails with [`Error::ResourceExhausted`] if an augmenting path still
/// exists after `limit` augmentations have been applied.
pub fn max_flow_with_limit<W>(g: &Graph<W>, source: usize, sink: usize, limit: usize) -> Result<MaxFlow<W>>
where
    W: NumAssign + Ord + Copy,
{
    solve(g, source, sink, Some(limit))
}

fn solve<W>(g: &Graph<W>, source: usize, sink: usize, limit: Option<usize>) -> Result<MaxFlow<W>>
where
    W: NumAssign + Ord + Copy,
{
    let n = g.num_nodes();
    if !g.is_directed() {
        return Err(Error::InvalidInput("flow networks must be directed".into()));
    }
    for &u in &[source, sink] {
        if u >= n {
            return Err(Error::InvalidInput(format!("node {} out of range", u)));
        }
    }
    if source == sink {
        return Err(Error::InvalidInput("source and sink must differ".into()));
    }
    if g.edges().iter().any(|e| e.weight < W::zero()) {
        return Err(Error::InvalidInput("capacities must be non-negative".into()));
    }

    // Residual adjacency. Arc `e << 1` runs along edge `e`, arc
    // `e << 1 | 1` against it.
    let mut neighs: Vec<Vec<(usize, usize)>> = vec![vec![]; n];
    for (e, edge) in g.edges().iter().enumerate() {
        neighs[edge.source].push((e << 1, edge.target));
        neighs[edge.target].push(((e << 1) | 1, edge.source));
    }

    let residual = |flow: &[W], arc: usize| {
        let e = arc >> 1;
        if arc & 1 == 0 {
            *g.weight(e) - flow[e]
        } else {
            flow[e]
        }
    };

    let mut flow = vec![W::zero(); g.num_edges()];
    let mut value = W::zero();
    let mut pred: Vec<Option<usize>> = vec![None; n];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);
    let mut rounds = 0;

    loop {
        // BFS for an augmenting path in the residual network.
        for s in seen.iter_mut() {
            *s = false;
        }
        for p in pred.iter_mut() {
            *p = None;
        }
        queue.clear();
        seen[source] = true;
        queue.push_back(source);
        while let Some(u) = queue.pop_front() {
            if u == sink {
                break;
            }
            for &(arc, v) in &neighs[u] {
                if !seen[v] && residual(&flow, arc) > W::zero() {
                    seen[v] = true;
                    pred[v] = Some(arc);
                    queue.push_back(v);
                }
            }
        }

        if !seen[sink] {
            break;
        }
        if let Some(l) = limit {
            if rounds >= l {
                return Err(Error::ResourceExhausted { limit: l });
            }
        }

        // bottleneck residual capacity along the path
        let mut delta: Option<W> = None;
        let mut len = 0;
        let mut u = sink;
        while let Some(arc) = pred[u] {
            let r = residual(&flow, arc);
            delta = Some(delta.map_or(r, |d| if r < d { r } else { d }));
            len += 1;
            let e = arc >> 1;
            let (src, snk) = g.enodes(e);
            u = if arc & 1 == 0 { src } else { snk };
        }
        let delta = match delta {
            Some(d) => d,
            None => break,
        };

        // augment
        let mut u = sink;
        while let Some(arc) = pred[u] {
            let e = arc >> 1;
            if arc & 1 == 0 {
                flow[e] += delta;
            } else {
                flow[e] -= delta;
            }
            let (src, snk) = g.enodes(e);
            u = if arc & 1 == 0 { src } else { snk };
        }
        value += delta;
        rounds += 1;
        debug!("augmented along a path of {} arcs", len);
    }

    debug!("maximum flow found after {} augmentations", rounds);

    let mincut = (0..n).filter(|&u| seen[u]).collect();
    Ok(MaxFlow { value, flow, mincut })
}

#[cfg(test)]
mod tests {
    use super::{max_flow, max_flow_with_limit};
    use crate::error::Error;
    use crate::graph::GraphBuilder;

    fn diamond() -> crate::graph::Graph<i32> {
        let mut b = GraphBuilder::directed(4);
        b.add_edge(0, 1, 3);
        b.add_edge(0, 2, 2);
        b.add_edge(1, 3, 2);
        b.add_edge(2, 3, 3);
        b.into_graph()
    }

    #[test]
    fn source_equals_sink_is_rejected() {
        let g = diamond();
        assert!(matches!(max_flow(&g, 1, 1), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn undirected_graph_is_rejected() {
        let mut b = GraphBuilder::undirected(2);
        b.add_edge(0, 1, 1);
        let g = b.into_graph();
        assert!(matches!(max_flow(&g, 0, 1), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn limit_is_honored() {
        let g = diamond();
        assert_eq!(
            max_flow_with_limit(&g, 0, 3, 0),
            Err(Error::ResourceExhausted { limit: 0 })
        );
        assert!(max_flow_with_limit(&g, 0, 3, 2).is_ok());
    }

    #[test]
    fn disconnected_sink_has_zero_flow() {
        let mut b = GraphBuilder::directed(3);
        b.add_edge(0, 1, 5);
        let g = b.into_graph();
        let result = max_flow(&g, 0, 2).unwrap();
        assert_eq!(result.value, 0);
        assert_eq!(result.mincut, vec![0, 1]);
    }
}
