//! Graph storage backends for a fixed set of vertices.
//!
//! Vertices are `usize` indices in `[0, n)` with `n` fixed at construction;
//! there is no vertex insertion or removal. Directed edges carry a tri-state
//! [`Label`]. Two backends share one mutation/query surface:
//!
//! - [`SparseGraph`]: hash-map adjacency lists, Θ(n+m) space, best when the
//!   edge count `m` is far below `n²`.
//! - [`DenseGraph`]: an n×n cell table, Θ(n²) space, O(1) worst-case edge
//!   operations, best for dense graphs.
//!
//! Both implement the [`GraphView`] capability consumed by the traversals
//! in [`crate::algo`].

pub mod dense;
pub mod label;
pub mod sparse;
pub mod view;

pub use dense::DenseGraph;
pub use label::Label;
pub use sparse::SparseGraph;
pub use view::GraphView;

use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} out of bounds for graph with {vertex_count} vertices")]
    VertexOutOfBounds { vertex: usize, vertex_count: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Bounds check shared by both backends.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> GraphResult<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfBounds {
            vertex,
            vertex_count,
        })
    }
}
