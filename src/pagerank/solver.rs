//! Damped power iteration
//!
//! Implements the classic PageRank update with snapshot sweeps, an
//! explicit dangling-node policy, and an iteration cap.

use super::RankResult;
use crate::graph::adjacency::AdjacencyGraph;
use crate::types::{DanglingPolicy, RankConfig};

/// PageRank solver over a frozen [`AdjacencyGraph`].
///
/// Every page starts at score `1.0`. One sweep computes, for each target
/// page `j`:
///
/// ```text
/// new[j] = (1 - d) + d * Σ over sources i linking to j of prev[i] / out_degree[i]
/// ```
///
/// where `prev` is an immutable snapshot of the previous sweep — the whole
/// new vector is computed from the snapshot and then swapped in, so no
/// column can observe a partially updated value from its own sweep.
/// Sweeps repeat until the L1 distance between consecutive vectors drops
/// to the configured threshold or the iteration cap is hit. The first
/// sweep always runs.
///
/// Out-degrees are read from the graph, where they were computed once at
/// freeze time; they are never recomputed during iteration.
#[derive(Debug, Clone, Default)]
pub struct PageRank {
    /// Damping factor, threshold, cap, and dangling policy.
    pub config: RankConfig,
}

impl PageRank {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with an explicit configuration.
    pub fn with_config(config: RankConfig) -> Self {
        Self { config }
    }

    /// Run the solver, returning scores indexed like the graph.
    ///
    /// An empty graph yields an empty result with zero iterations. When
    /// the iteration cap stops the loop first, the result carries the
    /// partial scores with `converged = false`.
    pub fn run(&self, graph: &AdjacencyGraph) -> RankResult {
        let n = graph.node_count();
        if n == 0 {
            return RankResult::new(Vec::new(), 0, 0.0, true);
        }

        let damping = self.config.damping;
        let base = 1.0 - damping;

        let mut scores = vec![1.0; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.config.max_iterations && delta > self.config.epsilon {
            iterations += 1;

            // Each page keeps the base mass; under the redistribute policy
            // the damped mass of every dangling page is spread uniformly
            // on top of it.
            let floor = match self.config.dangling {
                DanglingPolicy::Redistribute => {
                    let dangling_mass: f64 =
                        dangling_nodes.iter().map(|&i| scores[i]).sum();
                    base + damping * dangling_mass / n as f64
                }
                DanglingPolicy::Ignore => base,
            };
            new_scores.fill(floor);

            // Propagate: each source splits its damped score evenly across
            // its outbound links.
            for (i, &source_score) in scores.iter().enumerate() {
                let out_degree = graph.out_degree(i);
                if out_degree == 0 {
                    continue;
                }
                let contribution = damping * source_score / out_degree as f64;
                for (j, &cell) in graph.row(i).iter().enumerate() {
                    if cell == 1 {
                        new_scores[j] += contribution;
                    }
                }
            }

            // L1 distance between sweeps is the stopping criterion.
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let converged = delta <= self.config.epsilon;
        RankResult::new(scores, iterations, delta, converged)
    }
}
