//! Distance-based centrality (harmonic, closeness).
//!
//! Harmonic centrality of a vertex `v` is `sum over u != v of 1 / d(v, u)`,
//! where unreachable vertices contribute 0. Closeness centrality is
//! `1 / sum of d(v, u)` over the reachable `u`. Both run on the same sweep:
//! one full distance map per vertex, folded by a [`Measure`] policy, then
//! optionally divided by `n - 1`.
//!
//! Public invariants:
//! - The output has exactly one score per node, indexed by node id; isolated
//!   vertices score 0.
//! - The shortest-path backend is chosen once per computation from the graph's
//!   edge-weight profile and never mixed per vertex.
//! - No partial results: any backend failure (negative cycle) fails the whole
//!   computation.

use crate::graph::WeightedGraph;
use crate::shortest_path::{dijkstra, floyd_warshall, Adjacency};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CentralityConfig {
    /// Score over incoming paths (distances *to* each vertex) instead of
    /// outgoing. Irrelevant for undirected graphs.
    pub incoming: bool,
    /// Divide each raw score by `n - 1`; a no-op when `n <= 1`.
    pub normalize: bool,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self { incoming: false, normalize: true }
    }
}

/// Which shortest-path backend drives the sweep.
///
/// Dijkstra is only correct for non-negative weights, so a single negative
/// edge anywhere switches the whole sweep to the all-pairs table. The choice
/// is made once, before any distance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    /// One Dijkstra run per vertex, `O(m log n)` each (lazy-deletion binary
    /// heap), `O(n m log n)` for the whole sweep.
    SingleSource,
    /// One Floyd–Warshall table up front, `O(n^3)`, rows served per vertex.
    AllPairs,
}

impl AlgorithmKind {
    /// Inspect a graph's edge weights and pick the backend.
    pub fn for_graph<G: WeightedGraph>(graph: &G) -> Self {
        let negative = (0..graph.node_count())
            .any(|u| graph.neighbors(u).into_iter().any(|v| graph.edge_weight(u, v) < 0.0));
        if negative {
            AlgorithmKind::AllPairs
        } else {
            AlgorithmKind::SingleSource
        }
    }
}

/// Aggregation policy: how one vertex's distance row becomes a score.
///
/// The sweep calls `fold` once per *finite* distance to another vertex
/// (unreachable vertices and the zero self-distance are skipped), then
/// `finish` once on the accumulated value.
pub trait Measure {
    fn fold(&self, acc: f64, distance: f64) -> f64;
    fn finish(&self, acc: f64) -> f64 {
        acc
    }
}

/// Harmonic centrality: each reachable vertex contributes `1 / d`.
///
/// Zero-distance policy: a finite distance of exactly `0.0` to a *distinct*
/// vertex (possible via zero-weight edges) contributes `f64::INFINITY`, so
/// the affected score is `+inf` rather than a NaN or a panic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Harmonic;

impl Measure for Harmonic {
    fn fold(&self, acc: f64, distance: f64) -> f64 {
        if distance == 0.0 {
            acc + f64::INFINITY
        } else {
            acc + distance.recip()
        }
    }
}

/// Closeness centrality: the raw score is `1 / sum of distances` over the
/// reachable vertices; a vertex that reaches nothing scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Closeness;

impl Measure for Closeness {
    fn fold(&self, acc: f64, distance: f64) -> f64 {
        acc + distance
    }
    fn finish(&self, acc: f64) -> f64 {
        if acc > 0.0 {
            acc.recip()
        } else {
            0.0
        }
    }
}

/// The bound distance backend: either an adjacency to run Dijkstra over per
/// vertex, or the precomputed all-pairs table. Read-only once built, so rows
/// can be served to any vertex in any order (or in parallel).
enum DistanceSource {
    SingleSource(Adjacency),
    AllPairs(Vec<Vec<f64>>),
}

impl DistanceSource {
    fn bind(adj: Adjacency, algorithm: AlgorithmKind) -> Result<Self> {
        match algorithm {
            AlgorithmKind::SingleSource => Ok(DistanceSource::SingleSource(adj)),
            AlgorithmKind::AllPairs => Ok(DistanceSource::AllPairs(floyd_warshall(&adj)?)),
        }
    }

    fn node_count(&self) -> usize {
        match self {
            DistanceSource::SingleSource(adj) => adj.node_count(),
            DistanceSource::AllPairs(table) => table.len(),
        }
    }
}

fn score_one<M: Measure>(
    source: &DistanceSource,
    v: usize,
    n: usize,
    config: CentralityConfig,
    measure: &M,
) -> f64 {
    let owned;
    let dist: &[f64] = match source {
        DistanceSource::SingleSource(adj) => {
            owned = dijkstra(adj, v);
            &owned
        }
        DistanceSource::AllPairs(table) => &table[v],
    };

    let mut acc = 0.0;
    for (u, &d) in dist.iter().enumerate() {
        if u == v || d.is_infinite() {
            continue;
        }
        acc = measure.fold(acc, d);
    }
    let raw = measure.finish(acc);

    if config.normalize && n > 1 {
        raw / (n - 1) as f64
    } else {
        raw
    }
}

fn compute<G, M>(
    graph: &G,
    config: CentralityConfig,
    measure: &M,
    algorithm: AlgorithmKind,
) -> Result<Vec<f64>>
where
    G: WeightedGraph,
    M: Measure,
{
    let adj = Adjacency::from_graph(graph, config.incoming);
    let source = DistanceSource::bind(adj, algorithm)?;
    let n = source.node_count();
    Ok((0..n).map(|v| score_one(&source, v, n, config, measure)).collect())
}

/// Centrality scores for every vertex under an arbitrary [`Measure`].
///
/// The backend is selected from the edge weights (see [`AlgorithmKind`]) and
/// used uniformly for the whole sweep.
pub fn centrality<G, M>(graph: &G, config: CentralityConfig, measure: &M) -> Result<Vec<f64>>
where
    G: WeightedGraph,
    M: Measure,
{
    compute(graph, config, measure, AlgorithmKind::for_graph(graph))
}

/// Harmonic centrality for every vertex.
pub fn harmonic_centrality<G: WeightedGraph>(
    graph: &G,
    config: CentralityConfig,
) -> Result<Vec<f64>> {
    centrality(graph, config, &Harmonic)
}

/// Closeness centrality for every vertex.
pub fn closeness_centrality<G: WeightedGraph>(
    graph: &G,
    config: CentralityConfig,
) -> Result<Vec<f64>> {
    centrality(graph, config, &Closeness)
}

/// Parallel fan-out of the per-vertex sweep.
///
/// Per-vertex scores are independent (each owns its distance query and its
/// fold; the all-pairs table is only read), so this produces results
/// identical to [`centrality`].
#[cfg(feature = "parallel")]
pub fn centrality_parallel<G, M>(
    graph: &G,
    config: CentralityConfig,
    measure: &M,
) -> Result<Vec<f64>>
where
    G: WeightedGraph,
    M: Measure + Sync,
{
    use rayon::prelude::*;

    let adj = Adjacency::from_graph(graph, config.incoming);
    let source = DistanceSource::bind(adj, AlgorithmKind::for_graph(graph))?;
    let n = source.node_count();
    Ok((0..n).into_par_iter().map(|v| score_one(&source, v, n, config, measure)).collect())
}

#[cfg(feature = "parallel")]
pub fn harmonic_centrality_parallel<G: WeightedGraph>(
    graph: &G,
    config: CentralityConfig,
) -> Result<Vec<f64>> {
    centrality_parallel(graph, config, &Harmonic)
}

#[cfg(feature = "parallel")]
pub fn closeness_centrality_parallel<G: WeightedGraph>(
    graph: &G,
    config: CentralityConfig,
) -> Result<Vec<f64>> {
    centrality_parallel(graph, config, &Closeness)
}

/// Compute-once handle around a graph and a measure.
///
/// Scores are computed lazily on the first `scores`/`score` call and cached
/// for the handle's lifetime. The backend choice is made at construction and
/// observable via [`Centrality::algorithm`] before any computation runs.
pub struct Centrality<'g, G, M> {
    graph: &'g G,
    config: CentralityConfig,
    measure: M,
    algorithm: AlgorithmKind,
    scores: Option<Vec<f64>>,
}

impl<'g, G, M> Centrality<'g, G, M>
where
    G: WeightedGraph,
    M: Measure,
{
    pub fn new(graph: &'g G, config: CentralityConfig, measure: M) -> Self {
        let algorithm = AlgorithmKind::for_graph(graph);
        Self { graph, config, measure, algorithm, scores: None }
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn config(&self) -> CentralityConfig {
        self.config
    }

    /// All scores, computed on first access.
    pub fn scores(&mut self) -> Result<&[f64]> {
        if self.scores.is_none() {
            self.scores = Some(compute(self.graph, self.config, &self.measure, self.algorithm)?);
        }
        // Populated just above; a compute error has already returned.
        Ok(self.scores.as_deref().unwrap())
    }

    /// One vertex's score; `Error::InvalidVertex` if it is not in the graph.
    pub fn score(&mut self, vertex: usize) -> Result<f64> {
        if vertex >= self.graph.node_count() {
            return Err(Error::InvalidVertex(vertex));
        }
        Ok(self.scores()?[vertex])
    }
}

impl<'g, G: WeightedGraph> Centrality<'g, G, Harmonic> {
    /// Harmonic centrality with the defaults of the family: outgoing paths,
    /// normalized.
    pub fn harmonic(graph: &'g G) -> Self {
        Self::new(graph, CentralityConfig::default(), Harmonic)
    }
}

impl<'g, G: WeightedGraph> Centrality<'g, G, Closeness> {
    /// Closeness centrality with the defaults of the family: outgoing paths,
    /// normalized.
    pub fn closeness(graph: &'g G) -> Self {
        Self::new(graph, CentralityConfig::default(), Closeness)
    }
}
