//! Ranking helpers over score vectors.
//!
//! Centrality callers usually want "the k most central vertices" rather than
//! the raw vector, so this stays in the crate even though it is not part of
//! the sweep itself.

use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` highest-scoring vertices as `(node, score)`, best first.
///
/// Ranking rules, in order:
/// - `+inf` scores (the harmonic zero-distance policy) outrank every finite
///   score; among themselves they rank by node id.
/// - Finite positive scores rank descending; equal scores break ties by
///   lower node id, so the ranking is deterministic.
/// - Zero and negative scores (isolated or sink vertices, negative-weight
///   artifacts) and NaN never rank.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == f64::INFINITY)
        .map(|(i, &s)| (i, s))
        .take(k)
        .collect();
    if ranked.len() == k {
        return ranked;
    }

    // Min-heap of the `budget` best finite entries; the entry ordering makes
    // a higher score better, and a lower node id better on equal scores.
    let budget = k - ranked.len();
    let mut heap = BinaryHeap::with_capacity(budget + 1);
    for (i, &score) in scores.iter().enumerate() {
        if !score.is_finite() || score <= 0.0 {
            continue;
        }
        let entry = (NotNan::new(score).unwrap(), Reverse(i));
        if heap.len() < budget {
            heap.push(Reverse(entry));
        } else if let Some(&Reverse(worst)) = heap.peek() {
            if entry > worst {
                heap.pop();
                heap.push(Reverse(entry));
            }
        }
    }

    let mut finite: Vec<(usize, f64)> =
        heap.into_iter().map(|Reverse((s, Reverse(i)))| (i, s.into_inner())).collect();
    finite.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0))
    });
    ranked.extend(finite);
    ranked
}

/// Scale scores in place so they sum to 1.
///
/// A no-op when the sum is not a positive finite value — in particular when
/// any score is `+inf`, since dividing by an infinite sum would zero the
/// whole vector.
pub fn normalize(scores: &mut [f64]) {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 && sum.is_finite() {
        for s in scores {
            *s /= sum;
        }
    }
}
