//! # linkrank
//!
//! PageRank over named, linked documents.
//!
//! The crate ingests an ordered sequence of [`Document`]s — each a page
//! name plus the names it links to — builds a directed 0/1 adjacency
//! matrix with case-insensitive reference resolution, and runs damped
//! power iteration until the rank vector stabilizes. Results come back as
//! [`RankedPages`]: `(name, score)` pairs in the same order the documents
//! arrived, ready for a presentation layer to format.
//!
//! Extraction from raw formats (markup scraping) and output formatting are
//! deliberately out of scope; the boundary on both sides is plain
//! in-memory data.
//!
//! # Quick start
//!
//! ```
//! use linkrank::{rank_documents, Document};
//!
//! let docs = vec![
//!     Document::new("A", vec!["B".into()]),
//!     Document::new("B", vec!["C".into()]),
//!     Document::new("C", vec!["A".into()]),
//! ];
//!
//! let ranking = rank_documents(&docs);
//! assert!(ranking.converged);
//! for (name, score) in ranking.iter() {
//!     println!("{name}: {score:.3}");
//! }
//! ```
//!
//! # Tuning
//!
//! [`rank_documents_with`] takes a [`RankConfig`] (damping, convergence
//! threshold, iteration cap, dangling-node policy) and validates it before
//! solving, reporting every problem at once via [`InvalidConfig`].

pub mod graph;
pub mod pagerank;
pub mod ranking;
pub mod types;
pub mod validation;

pub use graph::{AdjacencyGraph, GraphBuilder};
pub use pagerank::{PageRank, RankResult};
pub use ranking::{RankedPage, RankedPages};
pub use types::{DanglingPolicy, Document, RankConfig};
pub use validation::{InvalidConfig, ValidationReport};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a processing stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates
/// it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("rank_stage", stage = $name).entered();
    };
}

/// Rank documents with the default configuration.
///
/// The defaults (damping `0.85`, L1 threshold `1e-4`, 100-sweep cap,
/// dangling mass redistributed) always pass validation, so this cannot
/// fail; a zero-document input yields an empty ranking with zero sweeps.
pub fn rank_documents(documents: &[Document]) -> RankedPages {
    let graph = {
        trace_stage!("build_graph");
        AdjacencyGraph::from_documents(documents)
    };
    let result = {
        trace_stage!("solve");
        PageRank::new().run(&graph)
    };
    RankedPages::from_result(&graph, result)
}

/// Rank documents with an explicit configuration.
///
/// The configuration is validated first; error-level findings abort with
/// [`InvalidConfig`] carrying the full report, while warnings are kept in
/// the report but do not block.
pub fn rank_documents_with(
    documents: &[Document],
    config: RankConfig,
) -> Result<RankedPages, InvalidConfig> {
    let report = validation::validate(&config);
    if report.has_errors() {
        return Err(InvalidConfig { report });
    }

    let graph = {
        trace_stage!("build_graph");
        AdjacencyGraph::from_documents(documents)
    };
    let result = {
        trace_stage!("solve");
        PageRank::with_config(config).run(&graph)
    };
    Ok(RankedPages::from_result(&graph, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, refs: &[&str]) -> Document {
        Document::new(name, refs.iter().map(|r| r.to_string()).collect())
    }

    #[test]
    fn test_cycle_ranks_equal_near_one() {
        let docs = vec![doc("A", &["B"]), doc("B", &["C"]), doc("C", &["A"])];
        let ranking = rank_documents(&docs);

        assert!(ranking.converged);
        assert_eq!(ranking.len(), 3);
        for (_, score) in ranking.iter() {
            assert!((score - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_zero_documents() {
        let ranking = rank_documents(&[]);

        assert!(ranking.is_empty());
        assert_eq!(ranking.iterations, 0);
        assert!(ranking.converged);
    }

    #[test]
    fn test_case_differing_links_resolve_end_to_end() {
        let docs = vec![doc("Rust", &["cargo", "CRATES"]), doc("Cargo", &["rust"]), doc("crates", &[])];
        let ranking = rank_documents(&docs);

        assert!(ranking.converged);
        assert_eq!(ranking.pages[0].out_degree, 2);
        assert_eq!(ranking.pages[1].out_degree, 1);
    }

    #[test]
    fn test_output_matches_input_order_and_length() {
        let docs = vec![
            doc("zeta", &["alpha"]),
            doc("alpha", &["zeta", "mid"]),
            doc("mid", &["alpha"]),
        ];
        let ranking = rank_documents(&docs);

        let names: Vec<&str> = ranking.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_dangling_input_produces_defined_scores() {
        let docs = vec![doc("A", &["B"]), doc("B", &[])];

        for policy in [DanglingPolicy::Redistribute, DanglingPolicy::Ignore] {
            let config = RankConfig::new().with_dangling(policy);
            let ranking = rank_documents_with(&docs, config).unwrap();

            assert!(ranking.converged);
            for (_, score) in ranking.iter() {
                assert!(score.is_finite());
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected_with_full_report() {
        let docs = vec![doc("A", &[])];
        let config = RankConfig::new().with_damping(1.5).with_epsilon(0.0);

        let err = rank_documents_with(&docs, config).unwrap_err();
        assert_eq!(err.report.errors().count(), 2);
        assert!(err.to_string().contains("invalid rank configuration"));
    }

    #[test]
    fn test_warning_config_still_runs() {
        let docs = vec![doc("A", &["B"]), doc("B", &["A"])];
        let config = RankConfig::new().with_damping(0.995).with_max_iterations(5000);

        let ranking = rank_documents_with(&docs, config).unwrap();
        assert!(ranking.converged);
    }

    #[test]
    fn test_repeated_runs_bit_identical() {
        let docs = vec![
            doc("a", &["b", "c"]),
            doc("b", &["c"]),
            doc("c", &["a"]),
            doc("d", &["a", "c"]),
        ];

        let first = rank_documents(&docs);
        let second = rank_documents(&docs);

        assert_eq!(first.scores(), second.scores());
        assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn test_rank_mass_near_document_count() {
        // No dangling pages: total rank mass settles at N.
        let docs = vec![
            doc("a", &["b", "c"]),
            doc("b", &["c"]),
            doc("c", &["a"]),
        ];
        let ranking = rank_documents(&docs);

        let sum: f64 = ranking.scores().iter().sum();
        assert!((sum - 3.0).abs() < 1e-3);
    }
}
