//! PageRank solver
//!
//! This module provides the damped power-iteration solver and its raw
//! per-index result.

pub mod solver;

pub use solver::PageRank;

/// Result of a PageRank computation, indexed like the graph it was run on.
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Converged (or best-effort) score for each page.
    pub scores: Vec<f64>,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Final L1 distance between the last two sweeps.
    pub delta: f64,
    /// Whether `delta` reached the convergence threshold before the
    /// iteration cap.
    pub converged: bool,
}

impl RankResult {
    /// Create a new rank result.
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get the score for page index `i`.
    ///
    /// Indices share the graph's canonical space; an out-of-range index
    /// panics, like the graph accessors do.
    pub fn score(&self, i: usize) -> f64 {
        self.scores[i]
    }
}
