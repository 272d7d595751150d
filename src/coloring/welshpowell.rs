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

//! The Welsh-Powell greedy coloring heuristic.

use crate::error::{Error, Result};
use crate::graph::Graph;

/// A proper vertex coloring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    /// The color index assigned to each node.
    pub colors: Vec<usize>,
    /// The number of distinct colors used.
    pub num_colors: usize,
}

/// Color the nodes of an undirected graph with the Welsh-Powell heuristic.
///
/// Nodes are ordered by descending degree (ties broken by ascending node
/// id). For each color in turn, the first uncolored node in that order
/// receives the color, followed by every later uncolored node none of
/// whose neighbors holds it. The number of colors used never exceeds the
/// maximum degree plus one.
///
/// Fails with [`Error::InvalidInput`] if the graph is directed.
///
/// # Example
///
/// ```
/// use orlib::graph::GraphBuilder;
/// use orlib::coloring::welsh_powell;
///
/// // a 5-cycle needs three colors
/// let mut b = GraphBuilder::undirected(5);
/// for u in 0..5 {
///     b.add_edge(u, (u + 1) % 5, ());
/// }
/// let g = b.into_graph();
///
/// let coloring = welsh_powell(&g).unwrap();
/// assert_eq!(coloring.num_colors, 3);
/// assert_eq!(coloring.colors, vec![0, 1, 0, 1, 2]);
/// ```
pub fn welsh_powell<W>(g: &Graph<W>) -> Result<Coloring> {
    if g.is_directed() {
        return Err(Error::InvalidInput(
            "Welsh-Powell requires an undirected graph".into(),
        ));
    }

    let n = g.num_nodes();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&u, &v| g.degree(v).cmp(&g.degree(u)).then(u.cmp(&v)));

    const UNCOLORED: usize = usize::max_value();
    let mut colors = vec![UNCOLORED; n];
    let mut next_color = 0;

    for i in 0..n {
        let u = order[i];
        if colors[u] != UNCOLORED {
            continue;
        }
        colors[u] = next_color;
        for &v in &order[i + 1..] {
            if colors[v] == UNCOLORED && g.neighbors(v).all(|w| colors[w] != next_color) {
                colors[v] = next_color;
            }
        }
        next_color += 1;
    }

    Ok(Coloring {
        colors,
        num_colors: next_color,
    })
}

#[cfg(test)]
mod tests {
    use super::welsh_powell;
    use crate::graph::{Graph, GraphBuilder};

    fn assert_proper(g: &Graph<i32>, colors: &[usize]) {
        for e in 0..g.num_edges() {
            let (u, v) = g.enodes(e);
            assert_ne!(colors[u], colors[v], "edge ({}, {}) is monochromatic", u, v);
        }
    }

    #[test]
    fn complete_graph_uses_all_colors() {
        let mut b = GraphBuilder::undirected(4);
        for u in 0..4 {
            for v in u + 1..4 {
                b.add_edge(u, v, 1);
            }
        }
        let g = b.into_graph();
        let coloring = welsh_powell(&g).unwrap();
        assert_proper(&g, &coloring.colors);
        assert_eq!(coloring.num_colors, 4);
    }

    #[test]
    fn star_graph_uses_two_colors() {
        let mut b = GraphBuilder::undirected(5);
        for v in 1..5 {
            b.add_edge(0, v, 1);
        }
        let g = b.into_graph();
        let coloring = welsh_powell(&g).unwrap();
        assert_proper(&g, &coloring.colors);
        assert_eq!(coloring.num_colors, 2);
        assert_eq!(coloring.colors[0], 0);
    }

    #[test]
    fn isolated_nodes_share_one_color() {
        let g = GraphBuilder::<i32>::undirected(3).into_graph();
        let coloring = welsh_powell(&g).unwrap();
        assert_eq!(coloring.colors, vec![0, 0, 0]);
        assert_eq!(coloring.num_colors, 1);
    }
}
