//! Frozen adjacency matrix
//!
//! Read-only output of the [`GraphBuilder`](super::builder::GraphBuilder),
//! optimized for the solver's repeated full sweeps over every edge.

use super::builder::GraphBuilder;

/// A directed link graph as a dense, row-major 0/1 matrix.
///
/// Three parallel structures share one index space: `names[i]` is page
/// `i`, row `i` of `matrix` lists its outbound edges, and `out_degree[i]`
/// is that row's sum. They are built together and never reordered
/// independently; downstream rank vectors and projections use the same
/// indices.
///
/// Density is a deliberate choice: the target collections are tens to low
/// thousands of pages, where an N×N byte grid beats sparse bookkeeping for
/// the column-wise reads the solver performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    names: Vec<String>,
    matrix: Vec<u8>,
    out_degree: Vec<usize>,
}

impl AdjacencyGraph {
    /// Assemble from builder output. Out-degrees are computed here, once,
    /// and held constant for the life of the graph.
    pub(crate) fn from_parts(names: Vec<String>, matrix: Vec<u8>) -> Self {
        let n = names.len();
        debug_assert_eq!(matrix.len(), n * n);

        let out_degree = (0..n)
            .map(|i| matrix[i * n..(i + 1) * n].iter().map(|&c| c as usize).sum())
            .collect();

        Self {
            names,
            matrix,
            out_degree,
        }
    }

    /// Build directly from documents; shorthand for
    /// [`GraphBuilder::from_documents`] followed by `freeze`.
    pub fn from_documents(documents: &[crate::types::Document]) -> Self {
        GraphBuilder::from_documents(documents).freeze()
    }

    /// Number of pages (matrix side length).
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Check if the graph has no pages.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Page names in canonical (input) order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of page `i`.
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    /// Whether page `i` links to page `j`.
    pub fn edge(&self, i: usize, j: usize) -> bool {
        self.matrix[i * self.names.len() + j] == 1
    }

    /// Row `i` of the matrix: the 0/1 outbound edge flags of page `i`.
    pub fn row(&self, i: usize) -> &[u8] {
        let n = self.names.len();
        &self.matrix[i * n..(i + 1) * n]
    }

    /// Out-degree of page `i`.
    pub fn out_degree(&self, i: usize) -> usize {
        self.out_degree[i]
    }

    /// Total number of edges.
    pub fn num_edges(&self) -> usize {
        self.out_degree.iter().sum()
    }

    /// Indices of pages with no outbound edges.
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.names.len())
            .filter(|&i| self.out_degree[i] == 0)
            .collect()
    }
}

impl Default for AdjacencyGraph {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            matrix: Vec::new(),
            out_degree: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;

    fn doc(name: &str, refs: &[&str]) -> Document {
        Document::new(name, refs.iter().map(|r| r.to_string()).collect())
    }

    fn triangle() -> AdjacencyGraph {
        AdjacencyGraph::from_documents(&[
            doc("a", &["b"]),
            doc("b", &["c"]),
            doc("c", &["a"]),
        ])
    }

    #[test]
    fn test_shape_and_names() {
        let graph = triangle();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.names(), &["a", "b", "c"]);
        assert_eq!(graph.name(1), "b");
    }

    #[test]
    fn test_out_degree_is_row_sum() {
        let graph = AdjacencyGraph::from_documents(&[
            doc("hub", &["s1", "s2", "s3"]),
            doc("s1", &["hub"]),
            doc("s2", &[]),
            doc("s3", &["missing"]),
        ]);

        assert_eq!(graph.out_degree(0), 3);
        assert_eq!(graph.out_degree(1), 1);
        assert_eq!(graph.out_degree(2), 0);
        // Unresolved reference contributes no edge and no degree.
        assert_eq!(graph.out_degree(3), 0);
        assert_eq!(graph.num_edges(), 4);
    }

    #[test]
    fn test_row_view() {
        let graph = triangle();
        assert_eq!(graph.row(0), &[0, 1, 0]);
        assert_eq!(graph.row(2), &[1, 0, 0]);
    }

    #[test]
    fn test_dangling_nodes() {
        let graph = AdjacencyGraph::from_documents(&[
            doc("a", &["b"]),
            doc("b", &[]),
            doc("c", &[]),
        ]);

        assert_eq!(graph.dangling_nodes(), vec![1, 2]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = AdjacencyGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.dangling_nodes().is_empty());

        let built = AdjacencyGraph::from_documents(&[]);
        assert_eq!(built, graph);
    }

    #[test]
    fn test_self_loop_counts_toward_degree() {
        let graph = AdjacencyGraph::from_documents(&[doc("a", &["a", "b"]), doc("b", &[])]);

        assert!(graph.edge(0, 0));
        assert_eq!(graph.out_degree(0), 2);
    }
}
