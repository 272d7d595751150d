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

use orlib::coloring::welsh_powell;
use orlib::graph::{Graph, GraphBuilder};
use orlib::maxflow::max_flow;
use orlib::mst::kruskal;
use orlib::shortestpath::{bellmanford, dijkstra};

fn undirected(n: usize, edges: &[(usize, usize, i64)]) -> Graph<i64> {
    let mut b = GraphBuilder::undirected(n);
    for &(u, v, w) in edges {
        b.add_edge(u, v, w);
    }
    b.into_graph()
}

fn directed(n: usize, edges: &[(usize, usize, i64)]) -> Graph<i64> {
    let mut b = GraphBuilder::directed(n);
    for &(u, v, w) in edges {
        b.add_edge(u, v, w);
    }
    b.into_graph()
}

/// Enumerate all simple paths from `u` to `end` and return the cheapest
/// total weight.
fn brute_force_shortest(g: &Graph<i64>, u: usize, end: usize, seen: &mut Vec<bool>) -> Option<i64> {
    if u == end {
        return Some(0);
    }
    seen[u] = true;
    let mut best = None;
    for (e, v) in g.outedges(u) {
        if seen[v] {
            continue;
        }
        if let Some(rest) = brute_force_shortest(g, v, end, seen) {
            let total = g.weight(e) + rest;
            if best.map_or(true, |b| total < b) {
                best = Some(total);
            }
        }
    }
    seen[u] = false;
    best
}

#[test]
fn dijkstra_matches_brute_force() {
    let g = undirected(
        6,
        &[
            (0, 1, 9),
            (0, 2, 2),
            (0, 4, 14),
            (1, 3, 6),
            (2, 3, 8),
            (2, 4, 9),
            (2, 5, 10),
            (3, 5, 15),
            (4, 5, 7),
        ],
    );
    for start in 0..6 {
        for end in 0..6 {
            let expected = brute_force_shortest(&g, start, end, &mut vec![false; 6]);
            let found = dijkstra::find_path(&g, start, end).unwrap();
            assert_eq!(found.map(|(_, d)| d), expected, "{} -> {}", start, end);
        }
    }
}

#[test]
fn dijkstra_path_endpoints_and_weight_are_consistent() {
    let g = undirected(5, &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (3, 4, 1), (0, 4, 10)]);
    let (path, dist) = dijkstra::find_path(&g, 0, 4).unwrap().unwrap();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&4));
    assert_eq!(dist, 7);
    assert_eq!(path, vec![0, 1, 2, 3, 4]);
}

#[test]
fn bellmanford_agrees_with_dijkstra_on_nonnegative_weights() {
    let g = directed(
        5,
        &[
            (0, 1, 10),
            (0, 3, 5),
            (1, 2, 1),
            (3, 1, 3),
            (3, 2, 9),
            (3, 4, 2),
            (4, 2, 6),
            (4, 0, 7),
        ],
    );
    for start in 0..5 {
        assert_eq!(
            bellmanford::distances(&g, start).unwrap(),
            dijkstra::distances(&g, start).unwrap(),
            "start {}",
            start
        );
    }
}

#[test]
fn bellmanford_reports_reachable_negative_cycle() {
    let g = directed(4, &[(0, 1, 2), (1, 2, -2), (2, 3, 1), (3, 1, -1)]);
    assert_eq!(bellmanford::distances(&g, 0), Err(orlib::Error::NegativeCycle));
}

#[test]
fn max_flow_satisfies_conservation_and_min_cut() {
    // the classic 6-node network with maximum flow 23
    let g = directed(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 3, 12),
            (2, 1, 4),
            (3, 2, 9),
            (2, 4, 14),
            (4, 3, 7),
            (3, 5, 20),
            (4, 5, 4),
        ],
    );
    let result = max_flow(&g, 0, 5).unwrap();
    assert_eq!(result.value, 23);

    // flow conservation at the inner nodes
    for u in 1..5 {
        let mut balance = 0;
        for (e, edge) in g.edges().iter().enumerate() {
            if edge.source == u {
                balance -= result.flow[e];
            }
            if edge.target == u {
                balance += result.flow[e];
            }
        }
        assert_eq!(balance, 0, "node {}", u);
    }

    // capacity constraints
    for (e, edge) in g.edges().iter().enumerate() {
        assert!(result.flow[e] >= 0 && result.flow[e] <= edge.weight);
    }

    // the capacity of the reported cut equals the flow value
    let cut: i64 = g
        .edges()
        .iter()
        .filter(|e| result.mincut.contains(&e.source) && !result.mincut.contains(&e.target))
        .map(|e| e.weight)
        .sum();
    assert_eq!(cut, result.value);
}

fn find(parent: &mut Vec<usize>, mut u: usize) -> usize {
    while parent[u] != u {
        u = parent[u];
    }
    u
}

/// The weight of a cheapest spanning tree, by enumerating all edge subsets
/// of size `n - 1` and keeping the connected ones.
fn brute_force_mst(g: &Graph<i64>) -> i64 {
    let n = g.num_nodes();
    let m = g.num_edges();
    let mut best = i64::max_value();
    for mask in 0u32..1 << m {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }
        let mut parent: Vec<usize> = (0..n).collect();
        let mut weight = 0;
        for e in 0..m {
            if mask & (1 << e) != 0 {
                let (u, v) = g.enodes(e);
                let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
                parent[ru] = rv;
                weight += g.weight(e);
            }
        }
        let root = find(&mut parent, 0);
        if (0..n).all(|u| find(&mut parent, u) == root) && weight < best {
            best = weight;
        }
    }
    best
}

#[test]
fn kruskal_matches_brute_force() {
    let g = undirected(
        5,
        &[
            (0, 1, 4),
            (0, 2, 8),
            (1, 2, 2),
            (1, 3, 5),
            (2, 3, 5),
            (2, 4, 9),
            (3, 4, 4),
        ],
    );
    let (tree, total) = kruskal(&g).unwrap();
    assert_eq!(tree.len(), 4);
    assert_eq!(total, brute_force_mst(&g));

    // the selected edges never close a cycle
    let mut parent: Vec<usize> = (0..5).collect();
    for &e in &tree {
        let (u, v) = g.enodes(e);
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        assert_ne!(ru, rv, "edge {} closes a cycle", e);
        parent[ru] = rv;
    }
}

#[test]
fn welsh_powell_is_proper_and_bounded() {
    // the Petersen graph: 3-regular, chromatic number 3
    let outer: Vec<_> = (0..5).map(|u| (u, (u + 1) % 5, 1)).collect();
    let spokes: Vec<_> = (0..5).map(|u| (u, u + 5, 1)).collect();
    let inner: Vec<_> = (0..5).map(|u| (u + 5, (u + 2) % 5 + 5, 1)).collect();
    let edges: Vec<_> = outer.into_iter().chain(spokes).chain(inner).collect();
    let g = undirected(10, &edges);

    let coloring = welsh_powell(&g).unwrap();
    for e in 0..g.num_edges() {
        let (u, v) = g.enodes(e);
        assert_ne!(coloring.colors[u], coloring.colors[v]);
    }
    let max_degree = (0..10).map(|u| g.degree(u)).max().unwrap();
    assert!(coloring.num_colors <= max_degree + 1);
}
