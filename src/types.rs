//! Core data types shared across the crate.
//!
//! [`Document`] is the ingestion-side record: one page plus the names it
//! links to. [`RankConfig`] carries every tunable the solver reads, with
//! builder-style setters and defaults matching classic PageRank.

use serde::{Deserialize, Serialize};

/// One page and its outbound references.
///
/// `name` is the canonical page identifier. `references` is the ordered
/// list of names this page links to; duplicates and self-references are
/// permitted and are not deduplicated here. Reference resolution (and the
/// decision to ignore names that match no page) happens in
/// [`GraphBuilder`](crate::graph::builder::GraphBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Canonical page name. Expected non-empty by the ingestion contract.
    pub name: String,
    /// Names this page links to, in document order.
    pub references: Vec<String>,
}

impl Document {
    /// Create a document from a name and its outbound reference names.
    pub fn new(name: impl Into<String>, references: Vec<String>) -> Self {
        Self {
            name: name.into(),
            references,
        }
    }

    /// Create a document with no outbound references.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            references: Vec::new(),
        }
    }
}

/// How the solver treats a page with zero outbound references.
///
/// A dangling page has no out-degree to divide by, so its contribution to
/// other pages is undefined without an explicit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingPolicy {
    /// Spread a dangling page's damped mass uniformly across all pages.
    ///
    /// This keeps the total rank mass at N across sweeps and is the
    /// default.
    #[default]
    Redistribute,
    /// Drop a dangling page's contribution entirely.
    ///
    /// Total rank mass leaks out of the system each sweep, but every score
    /// stays finite and defined.
    Ignore,
}

/// Solver configuration.
///
/// Defaults are the classic PageRank constants: damping `0.85`, L1
/// convergence threshold `1e-4`, and a defensive cap of 100 sweeps so a
/// pathological damping/threshold combination cannot loop forever.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability mass retained when following outbound links; the
    /// remaining `1 - damping` is the uniform base mass every page keeps.
    pub damping: f64,
    /// L1 distance between consecutive sweeps at or below which the
    /// solver stops.
    pub epsilon: f64,
    /// Upper bound on sweeps. The solver reports `converged = false` when
    /// the cap is hit first.
    pub max_iterations: usize,
    /// Treatment of pages with no outbound references.
    pub dangling: DanglingPolicy,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 1e-4,
            max_iterations: 100,
            dangling: DanglingPolicy::default(),
        }
    }
}

impl RankConfig {
    /// Create a config with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the L1 convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the sweep cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the dangling-node policy.
    pub fn with_dangling(mut self, dangling: DanglingPolicy) -> Self {
        self.dangling = dangling;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let cfg = RankConfig::default();
        assert!((cfg.damping - 0.85).abs() < 1e-12);
        assert!((cfg.epsilon - 1e-4).abs() < 1e-12);
        assert_eq!(cfg.max_iterations, 100);
        assert_eq!(cfg.dangling, DanglingPolicy::Redistribute);
    }

    #[test]
    fn test_builder_setters() {
        let cfg = RankConfig::new()
            .with_damping(0.5)
            .with_epsilon(1e-8)
            .with_max_iterations(10)
            .with_dangling(DanglingPolicy::Ignore);

        assert!((cfg.damping - 0.5).abs() < 1e-12);
        assert!((cfg.epsilon - 1e-8).abs() < 1e-12);
        assert_eq!(cfg.max_iterations, 10);
        assert_eq!(cfg.dangling, DanglingPolicy::Ignore);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let cfg = RankConfig::new().with_dangling(DanglingPolicy::Ignore);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"ignore\""));

        let back: RankConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_document_constructors() {
        let doc = Document::new("Rust", vec!["Cargo".to_string()]);
        assert_eq!(doc.name, "Rust");
        assert_eq!(doc.references, vec!["Cargo"]);

        let leaf = Document::leaf("Cargo");
        assert!(leaf.references.is_empty());
    }
}
