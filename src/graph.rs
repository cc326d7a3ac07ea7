//! Graph adapter traits.
//!
//! Node ids are `usize` in `0..node_count()`. The centrality sweep only ever
//! reads a graph through these traits; it never mutates one.

pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// A graph whose edges carry `f64` weights.
///
/// `edge_weight(u, v)` is only queried for `v` in `neighbors(u)`; weights may
/// be zero or negative (negative weights switch the distance backend, see
/// [`crate::centrality::AlgorithmKind`]).
pub trait WeightedGraph: Graph {
    fn edge_weight(&self, source: usize, target: usize) -> f64;
}

/// Dense adjacency-matrix view: any nonzero entry is an edge.
///
/// Zero-weight edges are inexpressible here; use [`EdgeList`] when they
/// matter.
pub struct AdjacencyMatrix<'a>(pub &'a [Vec<f64>]);

impl<'a> Graph for AdjacencyMatrix<'a> {
    fn node_count(&self) -> usize {
        self.0.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.0[node].iter().enumerate().filter(|(_, &w)| w != 0.0).map(|(i, _)| i).collect()
    }
}

impl<'a> WeightedGraph for AdjacencyMatrix<'a> {
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        self.0[source][target]
    }
}

/// Directed weighted graph stored as out-edge lists, built from an edge list.
///
/// This is the adapter to reach for in tests and small call sites: it can
/// carry zero-weight and negative-weight edges, and `undirected` mirrors
/// every edge.
#[derive(Debug, Clone)]
pub struct EdgeList {
    adj: Vec<Vec<(usize, f64)>>,
}

impl EdgeList {
    /// Build from directed `(source, target, weight)` edges.
    ///
    /// Out-of-range endpoints are ignored (callers should validate, but be
    /// robust).
    pub fn new(n: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut adj: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        for &(u, v, w) in edges {
            if u >= n || v >= n {
                continue;
            }
            adj[u].push((v, w));
        }
        Self { adj }
    }

    /// Build from undirected edges: every `(u, v, w)` is mirrored as `(v, u, w)`.
    pub fn undirected(n: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut adj: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        for &(u, v, w) in edges {
            if u >= n || v >= n {
                continue;
            }
            adj[u].push((v, w));
            adj[v].push((u, w));
        }
        Self { adj }
    }
}

impl Graph for EdgeList {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj[node].iter().map(|&(v, _)| v).collect()
    }
    fn out_degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }
}

impl WeightedGraph for EdgeList {
    /// Parallel edges between the same pair resolve to the lightest weight.
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        self.adj[source]
            .iter()
            .filter(|&&(v, _)| v == target)
            .map(|&(_, w)| w)
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(feature = "petgraph")]
impl<N, Ty, Ix> Graph for petgraph::Graph<N, f64, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
}

#[cfg(feature = "petgraph")]
impl<N, Ty, Ix> WeightedGraph for petgraph::Graph<N, f64, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn edge_weight(&self, source: usize, target: usize) -> f64 {
        let s = petgraph::graph::NodeIndex::new(source);
        let t = petgraph::graph::NodeIndex::new(target);
        self.find_edge(s, t).map(|e| self[e]).unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_list_keeps_zero_and_negative_weights() {
        let g = EdgeList::new(3, &[(0, 1, 0.0), (1, 2, -1.5)]);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.edge_weight(0, 1), 0.0);
        assert_eq!(g.edge_weight(1, 2), -1.5);
        assert!(g.edge_weight(0, 2).is_infinite());
    }

    #[test]
    fn edge_list_ignores_out_of_range_edges() {
        let g = EdgeList::new(2, &[(0, 1, 1.0), (0, 7, 1.0), (9, 1, 1.0)]);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.out_degree(0), 1);
    }

    #[test]
    fn parallel_edges_resolve_to_lightest() {
        let g = EdgeList::new(2, &[(0, 1, 5.0), (0, 1, 1.0), (0, 1, 3.0)]);
        assert_eq!(g.edge_weight(0, 1), 1.0);
        // Duplicates still show up as neighbors; only the weight collapses.
        assert_eq!(g.out_degree(0), 3);
    }

    #[test]
    fn undirected_mirrors_edges() {
        let g = EdgeList::undirected(2, &[(0, 1, 2.0)]);
        assert_eq!(g.neighbors(0), vec![1]);
        assert_eq!(g.neighbors(1), vec![0]);
        assert_eq!(g.edge_weight(1, 0), 2.0);
    }

    #[test]
    fn adjacency_matrix_nonzero_entries_are_edges() {
        let m = vec![vec![0.0, 1.0, -2.0], vec![0.0, 0.0, 0.0], vec![0.0, 3.0, 0.0]];
        let g = AdjacencyMatrix(&m);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.neighbors(0), vec![1, 2]);
        assert_eq!(g.neighbors(1), Vec::<usize>::new());
        assert_eq!(g.edge_weight(0, 2), -2.0);
    }

    #[cfg(feature = "petgraph")]
    #[test]
    fn petgraph_adapter_reads_weights() {
        use petgraph::graph::DiGraph;
        let mut g: DiGraph<(), f64> = DiGraph::new();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, 2.5);
        assert_eq!(Graph::node_count(&g), 2);
        assert_eq!(Graph::neighbors(&g, a.index()), vec![b.index()]);
        assert_eq!(WeightedGraph::edge_weight(&g, a.index(), b.index()), 2.5);
    }
}
