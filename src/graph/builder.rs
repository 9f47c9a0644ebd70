//! Graph builder with case-insensitive reference resolution
//!
//! This module turns an ordered list of documents into a dense 0/1
//! adjacency matrix, using an FxHashMap over case-folded names for O(1)
//! reference lookups during construction.

use rustc_hash::FxHashMap;

use crate::graph::adjacency::AdjacencyGraph;
use crate::types::Document;

/// A mutable adjacency builder.
///
/// Construction is two-pass: every document name is registered first (in
/// input order, which becomes the canonical index order everywhere
/// downstream), then each document's references are resolved against the
/// full name set. A reference only creates an edge when its target name
/// exists; unknown names are silently ignored.
///
/// Matching is case-insensitive equality on the entire name. No trimming,
/// no partial matching. Self-references are kept as self-loop edges.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Page names in input order.
    names: Vec<String>,
    /// Maps case-folded name -> index. First occurrence wins when two
    /// input names collide case-insensitively.
    folded_index: FxHashMap<String, usize>,
    /// Dense row-major 0/1 matrix, `names.len()` squared.
    matrix: Vec<u8>,
}

impl GraphBuilder {
    /// Create a new empty graph builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the adjacency relation for an ordered document sequence.
    pub fn from_documents(documents: &[Document]) -> Self {
        let n = documents.len();
        let mut builder = Self {
            names: Vec::with_capacity(n),
            folded_index: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            matrix: vec![0; n * n],
        };

        for (i, doc) in documents.iter().enumerate() {
            builder.names.push(doc.name.clone());
            builder
                .folded_index
                .entry(doc.name.to_lowercase())
                .or_insert(i);
        }

        for (i, doc) in documents.iter().enumerate() {
            for reference in &doc.references {
                if let Some(j) = builder.resolve(reference) {
                    builder.matrix[i * n + j] = 1;
                }
            }
        }

        builder
    }

    /// Resolve a name to its page index, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.folded_index.get(&name.to_lowercase()).copied()
    }

    /// Get the number of pages.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Whether an edge from page `i` to page `j` was recorded.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.matrix[i * self.names.len() + j] == 1
    }

    /// Check if the builder holds no pages.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Freeze into the read-only [`AdjacencyGraph`], computing per-page
    /// out-degrees once.
    pub fn freeze(self) -> AdjacencyGraph {
        AdjacencyGraph::from_parts(self.names, self.matrix)
    }
}
