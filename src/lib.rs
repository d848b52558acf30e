//! Fixed-size directed graphs with labeled edges.
//!
//! Vertices are integers in `[0, n)` with `n` fixed at construction. Edges
//! may carry an optional label of arbitrary type; an edge's existence and
//! its label are one tri-state value ([`Label`]).
//!
//! Two storage backends share one mutation/query surface, chosen by density:
//!
//! - [`SparseGraph`] keeps hash-map adjacency lists and Θ(n+m) space, best
//!   when the edge count `m` is far below `n²`.
//! - [`DenseGraph`] keeps an n×n table and Θ(n²) space, with O(1) worst-case
//!   edge operations and deterministic, index-ascending neighbor order.
//!
//! Traversal ([`depth_first`], [`breadth_first`]) is written once against
//! the [`GraphView`] capability both backends implement, and drives an
//! externally owned `visited` buffer so one buffer can be shared across
//! calls to decompose a graph into reachability sets.
//!
//! # Example
//!
//! ```rust
//! use arcgraph::{breadth_first, Label, SparseGraph};
//!
//! let mut g: SparseGraph<&str> = SparseGraph::new(4);
//! g.add_edge(0, 1)?;
//! g.add_edge_labeled(1, 2, "toll road")?;
//! assert_eq!(g.edge_count(), 2);
//! assert_eq!(g.label(1, 2)?, Label::Labeled(&"toll road"));
//!
//! let mut visited = vec![false; g.vertex_count()];
//! let mut reached = Vec::new();
//! breadth_first(&g, 0, &mut visited, |w| reached.push(w));
//! reached.sort_unstable();
//! assert_eq!(reached, vec![0, 1, 2]);
//! assert!(!visited[3]);
//! # Ok::<(), arcgraph::GraphError>(())
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export the whole public surface at the crate root.
pub use algo::{
    breadth_first, component_stats, depth_first, reachable_components, ComponentStats,
};
pub use graph::{DenseGraph, GraphError, GraphResult, GraphView, Label, SparseGraph};
