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

//! The graph data structure used by all graph algorithms.
//!
//! Nodes are the integers `0..n`. Edges are kept in a side table indexed by
//! edge id in insertion order; each node additionally carries an adjacency
//! list of `(edge id, neighbor)` pairs, so the hot loops of the algorithms
//! never touch a hash map.
//!
//! Graphs are static. They are constructed through a [`GraphBuilder`] and
//! never modified afterwards:
//!
//! ```
//! use orlib::graph::GraphBuilder;
//!
//! let mut b = GraphBuilder::undirected(3);
//! b.add_edge(0, 1, 4);
//! b.add_edge(1, 2, 2);
//! let g = b.into_graph();
//!
//! assert_eq!(g.num_nodes(), 3);
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.degree(1), 2);
//! assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
//! ```

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A single edge of a [`Graph`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<W> {
    /// The source node (one endpoint for undirected graphs).
    pub source: usize,
    /// The target node (the other endpoint for undirected graphs).
    pub target: usize,
    /// The edge weight. Max-flow algorithms interpret it as a capacity.
    pub weight: W,
}

/// A weighted graph over the integer nodes `0..n`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Graph<W> {
    directed: bool,
    edges: Vec<Edge<W>>,
    adj: Vec<Vec<(usize, usize)>>,
}

impl<W> Graph<W> {
    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return `true` if this is a directed graph.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Return the edge side table, indexed by edge id.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Return the endpoints of edge `e`.
    pub fn enodes(&self, e: usize) -> (usize, usize) {
        (self.edges[e].source, self.edges[e].target)
    }

    /// Return the weight of edge `e`.
    pub fn weight(&self, e: usize) -> &W {
        &self.edges[e].weight
    }

    /// Return an iterator over the `(edge id, neighbor)` pairs leaving `u`.
    ///
    /// For an undirected graph every incident edge is reported, for a
    /// directed graph only the outgoing ones.
    pub fn outedges(&self, u: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj[u].iter().copied()
    }

    /// Return an iterator over the neighbors of `u`.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[u].iter().map(|&(_, v)| v)
    }

    /// Return the degree (number of incident edges) of `u`.
    ///
    /// For a directed graph this is the out-degree.
    pub fn degree(&self, u: usize) -> usize {
        self.adj[u].len()
    }
}

/// A builder for [`Graph`]s.
///
/// Graphs are built by adding all nodes and edges up front and calling
/// [`GraphBuilder::into_graph`]. This keeps the graph itself immutable and
/// its edge ids stable.
pub struct GraphBuilder<W> {
    directed: bool,
    num_nodes: usize,
    edges: Vec<Edge<W>>,
}

impl<W> GraphBuilder<W> {
    /// Create a builder for a directed graph with `num_nodes` nodes.
    pub fn directed(num_nodes: usize) -> Self {
        GraphBuilder {
            directed: true,
            num_nodes,
            edges: vec![],
        }
    }

    /// Create a builder for an undirected graph with `num_nodes` nodes.
    pub fn undirected(num_nodes: usize) -> Self {
        GraphBuilder {
            directed: false,
            num_nodes,
            edges: vec![],
        }
    }

    /// Add a new node and return its id.
    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    /// Add an edge from `u` to `v` and return its id.
    ///
    /// Edge ids are assigned in insertion order starting from 0.
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a node of the graph.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> usize {
        assert!(u < self.num_nodes, "source node {} out of range", u);
        assert!(v < self.num_nodes, "target node {} out of range", v);
        self.edges.push(Edge {
            source: u,
            target: v,
            weight,
        });
        self.edges.len() - 1
    }

    /// Turn the builder into a graph.
    pub fn into_graph(self) -> Graph<W> {
        let mut adj = vec![vec![]; self.num_nodes];
        for (e, edge) in self.edges.iter().enumerate() {
            adj[edge.source].push((e, edge.target));
            if !self.directed && edge.source != edge.target {
                adj[edge.target].push((e, edge.source));
            }
        }
        Graph {
            directed: self.directed,
            edges: self.edges,
            adj,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphBuilder;

    #[test]
    fn undirected_adjacency_is_symmetric() {
        let mut b = GraphBuilder::undirected(4);
        b.add_edge(0, 1, 1);
        b.add_edge(1, 2, 2);
        b.add_edge(2, 0, 3);
        let g = b.into_graph();

        for u in 0..4 {
            for v in g.neighbors(u).collect::<Vec<_>>() {
                assert!(g.neighbors(v).any(|w| w == u));
            }
        }
        assert_eq!(g.degree(3), 0);
    }

    #[test]
    fn directed_adjacency_is_out_only() {
        let mut b = GraphBuilder::directed(3);
        b.add_edge(0, 1, 1);
        b.add_edge(1, 2, 1);
        let g = b.into_graph();

        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(g.neighbors(2).count(), 0);
        assert_eq!(g.enodes(1), (1, 2));
    }

    #[test]
    fn builder_grows_nodes() {
        let mut b = GraphBuilder::<i32>::directed(0);
        let u = b.add_node();
        let v = b.add_node();
        b.add_edge(u, v, 7);
        let g = b.into_graph();
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(*g.weight(0), 7);
    }

    #[test]
    #[should_panic]
    fn add_edge_rejects_unknown_node() {
        let mut b = GraphBuilder::undirected(2);
        b.add_edge(0, 2, 1);
    }
}
