//! Shortest-path backends for the centrality sweep.
//!
//! Two collaborators behind one boundary: binary-heap Dijkstra for graphs
//! with non-negative weights (one run per source), and Floyd–Warshall for
//! graphs with negative weights (one table for all pairs, with
//! negative-cycle detection). `f64::INFINITY` marks unreachable throughout.

use crate::graph::WeightedGraph;
use crate::{Error, Result};
use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Out-edge lists `(target, weight)`, snapshotted once per computation.
///
/// Building with `reversed = true` swaps every edge's endpoints, which is how
/// "distances to" (incoming) queries reuse the same forward algorithms.
#[derive(Debug, Clone)]
pub struct Adjacency {
    out: Vec<Vec<(usize, f64)>>,
}

impl Adjacency {
    pub fn from_graph<G: WeightedGraph>(graph: &G, reversed: bool) -> Self {
        let n = graph.node_count();
        let mut out: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        for u in 0..n {
            for v in graph.neighbors(u) {
                if v >= n {
                    // Out-of-range neighbors are ignored (adapter bug, but be robust).
                    continue;
                }
                let w = graph.edge_weight(u, v);
                if reversed {
                    out[v].push((u, w));
                } else {
                    out[u].push((v, w));
                }
            }
        }
        Self { out }
    }

    pub fn node_count(&self) -> usize {
        self.out.len()
    }

    pub fn has_negative_edge(&self) -> bool {
        self.out.iter().flatten().any(|&(_, w)| w < 0.0)
    }

    pub(crate) fn out_edges(&self, node: usize) -> &[(usize, f64)] {
        &self.out[node]
    }
}

/// Single-source shortest distances via Dijkstra with a lazy-deletion heap.
///
/// Requires non-negative edge weights; `dist[source] == 0.0` and unreachable
/// nodes stay at `f64::INFINITY`. One run is `O(m log n)`.
pub fn dijkstra(adj: &Adjacency, source: usize) -> Vec<f64> {
    let n = adj.node_count();
    let mut dist = vec![f64::INFINITY; n];
    if source >= n {
        return dist;
    }
    dist[source] = 0.0;

    // Reverse ordering turns the max-heap into a min-heap on (distance, node).
    let mut heap: BinaryHeap<Reverse<(NotNan<f64>, usize)>> = BinaryHeap::new();
    heap.push(Reverse((NotNan::new(0.0).unwrap(), source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        let d = d.into_inner();
        if d > dist[u] {
            continue; // stale heap entry
        }
        for &(v, w) in adj.out_edges(u) {
            let next = d + w;
            // `next < dist[v]` is false for NaN, so the NotNan below holds.
            if next < dist[v] {
                dist[v] = next;
                heap.push(Reverse((NotNan::new(next).unwrap(), v)));
            }
        }
    }
    dist
}

/// All-pairs shortest distances via Floyd–Warshall.
///
/// Handles negative edge weights. A negative self-distance after relaxation
/// means a negative-weight cycle, for which no shortest distances exist;
/// that surfaces as [`Error::NegativeCycle`].
pub fn floyd_warshall(adj: &Adjacency) -> Result<Vec<Vec<f64>>> {
    let n = adj.node_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for u in 0..n {
        for &(v, w) in adj.out_edges(u) {
            // Parallel edges collapse to the lightest one.
            if w < dist[u][v] {
                dist[u][v] = w;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i][k];
            if dik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let through = dik + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    if (0..n).any(|i| dist[i][i] < 0.0) {
        return Err(Error::NegativeCycle);
    }
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeList;

    fn diamond() -> Adjacency {
        // 0 -> 1 (1), 0 -> 2 (4), 1 -> 2 (2), 2 -> 3 (1), and 4 isolated
        let g = EdgeList::new(5, &[(0, 1, 1.0), (0, 2, 4.0), (1, 2, 2.0), (2, 3, 1.0)]);
        Adjacency::from_graph(&g, false)
    }

    #[test]
    fn dijkstra_finds_lighter_indirect_path() {
        let dist = dijkstra(&diamond(), 0);
        assert_eq!(dist[0], 0.0);
        assert_eq!(dist[1], 1.0);
        assert_eq!(dist[2], 3.0); // via 1, not the direct 4.0 edge
        assert_eq!(dist[3], 4.0);
        assert!(dist[4].is_infinite());
    }

    #[test]
    fn dijkstra_reversed_walks_incoming_edges() {
        let g = EdgeList::new(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        let rev = Adjacency::from_graph(&g, true);
        let dist = dijkstra(&rev, 2);
        assert_eq!(dist[2], 0.0);
        assert_eq!(dist[1], 1.0);
        assert_eq!(dist[0], 2.0);
    }

    #[test]
    fn floyd_warshall_matches_dijkstra_on_nonnegative() {
        let adj = diamond();
        let table = floyd_warshall(&adj).unwrap();
        for v in 0..adj.node_count() {
            assert_eq!(table[v], dijkstra(&adj, v), "row {v}");
        }
    }

    #[test]
    fn floyd_warshall_relaxes_through_negative_edge() {
        // 0 -> 1 (2), 0 -> 2 (3), 2 -> 1 (-2): d(0, 1) should be 1.
        let g = EdgeList::new(3, &[(0, 1, 2.0), (0, 2, 3.0), (2, 1, -2.0)]);
        let table = floyd_warshall(&Adjacency::from_graph(&g, false)).unwrap();
        assert_eq!(table[0][1], 1.0);
        assert_eq!(table[0][2], 3.0);
    }

    #[test]
    fn floyd_warshall_reports_negative_cycle() {
        let g = EdgeList::new(2, &[(0, 1, 1.0), (1, 0, -2.0)]);
        let err = floyd_warshall(&Adjacency::from_graph(&g, false)).unwrap_err();
        assert!(matches!(err, Error::NegativeCycle));
    }

    #[test]
    fn negative_self_loop_is_a_negative_cycle() {
        let g = EdgeList::new(2, &[(0, 0, -1.0), (0, 1, 1.0)]);
        let err = floyd_warshall(&Adjacency::from_graph(&g, false)).unwrap_err();
        assert!(matches!(err, Error::NegativeCycle));
    }

    #[test]
    fn zero_weight_edge_yields_zero_distance() {
        let g = EdgeList::new(2, &[(0, 1, 0.0)]);
        let adj = Adjacency::from_graph(&g, false);
        assert_eq!(dijkstra(&adj, 0)[1], 0.0);
        assert_eq!(floyd_warshall(&adj).unwrap()[0][1], 0.0);
    }

    #[test]
    fn negative_edge_detection() {
        let pos = Adjacency::from_graph(&EdgeList::new(2, &[(0, 1, 1.0)]), false);
        let neg = Adjacency::from_graph(&EdgeList::new(2, &[(0, 1, -0.5)]), false);
        assert!(!pos.has_negative_edge());
        assert!(neg.has_negative_edge());
    }
}
