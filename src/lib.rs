//! `pathscore`: distance-based centrality over weighted graphs.
//!
//! The crate computes harmonic and closeness centrality: per-vertex scores
//! folded from full shortest-path distance maps, with direction and
//! normalization options.
//!
//! Public invariants (must not drift):
//! - **Node order**: outputs are indexed by node id \(0..n-1\) consistent with
//!   the input graph's adapter semantics (e.g. `petgraph::NodeIndex::index()`
//!   when using the `petgraph` feature), one entry per vertex.
//! - **Determinism**: identical graph + config always produce identical
//!   scores; the `parallel` feature changes scheduling, never results.
//! - **Uniform backend**: the shortest-path algorithm (Dijkstra vs
//!   Floyd–Warshall) is selected once per computation from the edge-weight
//!   profile and never mixed per vertex.
//! - **No partial results**: a failing computation (negative cycle) yields an
//!   `Err`, never a half-filled score vector.
//!
//! Swappable (allowed to change without breaking the contract):
//! - iteration strategy (serial vs parallel)
//! - internal data structures (so long as invariants hold)

pub mod centrality;
pub mod graph;
pub mod shortest_path;
pub mod topk;

pub use centrality::{
    centrality, closeness_centrality, harmonic_centrality, AlgorithmKind, Centrality,
    CentralityConfig, Closeness, Harmonic, Measure,
};
pub use graph::{AdjacencyMatrix, EdgeList, Graph, WeightedGraph};
pub use shortest_path::{dijkstra, floyd_warshall, Adjacency};
pub use topk::{normalize, top_k};

#[cfg(feature = "parallel")]
pub use centrality::{
    centrality_parallel, closeness_centrality_parallel, harmonic_centrality_parallel,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vertex not in graph: {0}")]
    InvalidVertex(usize),
    #[error("graph contains a negative-weight cycle")]
    NegativeCycle,
}

pub type Result<T> = std::result::Result<T, Error>;
