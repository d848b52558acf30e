//! The read capability traversal algorithms depend on.

use super::label::Label;

/// Minimal read-only view of a graph's topology.
///
/// Exposes exactly what a traversal needs: the vertex count and neighbor
/// enumeration with labels. Both storage backends implement it, so an
/// algorithm written once against `GraphView` runs unchanged on either.
///
/// Enumeration order is part of each implementor's contract:
/// [`SparseGraph`](super::SparseGraph) enumerates in unspecified order,
/// [`DenseGraph`](super::DenseGraph) in ascending index order.
pub trait GraphView {
    /// The explicit label type carried by edges.
    type EdgeLabel;

    /// Number of vertices. Valid indices are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Calls `visit(w, label)` for each neighbor `w` of `v`, with `label`
    /// the state of the edge `v -> w` (never [`Label::Absent`]).
    ///
    /// # Panics
    ///
    /// Panics if `v >= vertex_count()`. Callers holding arbitrary input
    /// should use the validated inherent query surface instead.
    fn for_each_neighbor<F>(&self, v: usize, visit: F)
    where
        F: FnMut(usize, Label<&Self::EdgeLabel>);
}
