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

//! Implementation of Kruskal's algorithm.

use crate::num::traits::NumAssign;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Run Kruskal's algorithm to solve the *Minimum Spanning Tree* problem.
///
/// Returns the ids of the selected edges together with their total weight.
/// Edges are considered in order of ascending weight; equal weights keep
/// their insertion order (the sort is stable), so the result is
/// deterministic.
///
/// The algorithm actually computes a minimum spanning *forest* if the graph
/// is not connected. This can be verified by checking that the number of
/// returned edges is `num_nodes() - 1`.
///
/// Fails with [`Error::InvalidInput`] if the graph is directed.
///
/// # Example
///
/// ```
/// use orlib::graph::GraphBuilder;
/// use orlib::mst::kruskal;
///
/// let mut b = GraphBuilder::undirected(4);
/// b.add_edge(0, 1, 1);
/// b.add_edge(1, 2, 2);
/// b.add_edge(2, 3, 1);
/// b.add_edge(0, 3, 5);
/// b.add_edge(0, 2, 4);
/// let g = b.into_graph();
///
/// let (tree, total) = kruskal(&g).unwrap();
/// assert_eq!(tree, vec![0, 2, 1]);
/// assert_eq!(total, 4);
/// ```
pub fn kruskal<W>(g: &Graph<W>) -> Result<(Vec<usize>, W)>
where
    W: NumAssign + Ord + Copy,
{
    if g.is_directed() {
        return Err(Error::InvalidInput("Kruskal requires an undirected graph".into()));
    }

    let n = g.num_nodes();
    let mut order: Vec<usize> = (0..g.num_edges()).collect();
    order.sort_by_key(|&e| *g.weight(e));

    let mut parent: Vec<usize> = (0..n).collect();
    let mut rank = vec![0u32; n];
    let mut tree = Vec::new();
    let mut total = W::zero();

    for e in order {
        let (u, v) = g.enodes(e);
        let uroot = find(&mut parent, u);
        let vroot = find(&mut parent, v);
        if uroot != vroot {
            if rank[uroot] < rank[vroot] {
                parent[uroot] = vroot;
            } else {
                parent[vroot] = uroot;
                if rank[uroot] == rank[vroot] {
                    rank[uroot] += 1;
                }
            }
            total += *g.weight(e);
            tree.push(e);
            if tree.len() + 1 == n {
                break;
            }
        }
    }

    Ok((tree, total))
}

/// Find the component root of `u` with path halving.
fn find(parent: &mut [usize], mut u: usize) -> usize {
    while parent[u] != u {
        parent[u] = parent[parent[u]];
        u = parent[u];
    }
    u
}
