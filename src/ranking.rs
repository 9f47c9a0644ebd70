//! Result projection
//!
//! Pairs the solver's raw score vector back with page names, preserving
//! the canonical input order end-to-end. A presentation collaborator
//! consumes [`RankedPages`] as-is; no formatting or rounding happens here.

use serde::Serialize;

use crate::graph::adjacency::AdjacencyGraph;
use crate::pagerank::RankResult;

/// One page's final rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPage {
    /// Page name, exactly as ingested.
    pub name: String,
    /// Converged (or best-effort) PageRank score.
    pub score: f64,
    /// Outbound link count, fixed at graph construction.
    pub out_degree: usize,
}

/// Final ranking in canonical page order, plus convergence metadata.
///
/// `pages` has the same length and order as the input document sequence:
/// document order became name order, name order became matrix and rank
/// indices, and those indices surface here unchanged. Sorting is opt-in
/// via [`top_n`](Self::top_n), which works on a copy.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPages {
    /// Per-page results in input order.
    pub pages: Vec<RankedPage>,
    /// Number of sweeps the solver performed.
    pub iterations: usize,
    /// Final L1 distance between the last two sweeps.
    pub delta: f64,
    /// Whether the solver converged before its iteration cap.
    pub converged: bool,
}

impl RankedPages {
    /// Join graph names and out-degrees with the solver's scores.
    pub fn from_result(graph: &AdjacencyGraph, result: RankResult) -> Self {
        debug_assert_eq!(graph.node_count(), result.scores.len());

        let pages = graph
            .names()
            .iter()
            .zip(result.scores.iter())
            .enumerate()
            .map(|(i, (name, &score))| RankedPage {
                name: name.clone(),
                score,
                out_degree: graph.out_degree(i),
            })
            .collect();

        Self {
            pages,
            iterations: result.iterations,
            delta: result.delta,
            converged: result.converged,
        }
    }

    /// Number of ranked pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check whether the ranking is empty.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over `(name, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.pages.iter().map(|p| (p.name.as_str(), p.score))
    }

    /// Scores alone, in canonical order.
    pub fn scores(&self) -> Vec<f64> {
        self.pages.iter().map(|p| p.score).collect()
    }

    /// The `n` highest-scoring pages, best first.
    ///
    /// Ties keep canonical order. The canonical `pages` sequence itself is
    /// left untouched.
    pub fn top_n(&self, n: usize) -> Vec<&RankedPage> {
        let mut indexed: Vec<&RankedPage> = self.pages.iter().collect();
        indexed.sort_by(|a, b| b.score.total_cmp(&a.score));
        indexed.truncate(n);
        indexed
    }
}
