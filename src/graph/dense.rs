//! Adjacency-matrix graph backed by a flat n×n cell table.

use super::label::Label;
use super::view::GraphView;
use super::{check_vertex, GraphResult};

/// A directed graph stored as an n×n table of label cells.
///
/// Space is Θ(n²) regardless of edge count, and every per-edge operation is
/// O(1) worst case with no hashing. [`degree`](DenseGraph::degree) and
/// neighbor enumeration scan a full row and are O(n).
///
/// Unlike [`SparseGraph`], neighbor enumeration is deterministic: row cells
/// are visited in ascending index order. Algorithms that rely on a
/// reproducible traversal order for a fixed input get it only from this
/// backend.
///
/// [`SparseGraph`]: super::SparseGraph
#[derive(Debug, Clone)]
pub struct DenseGraph<L> {
    /// Row-major cells; `cells[v * n + w]` is the label state of `v -> w`.
    cells: Vec<Label<L>>,

    /// Number of vertices (row length).
    n: usize,

    /// Total number of directed edges, maintained incrementally.
    edge_count: usize,
}

impl<L> DenseGraph<L> {
    /// Creates a graph with `n` vertices and no edges; all n² cells start
    /// out `Absent`.
    pub fn new(n: usize) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        cells.resize_with(n * n, || Label::Absent);
        Self {
            cells,
            n,
            edge_count: 0,
        }
    }

    /// Number of vertices. O(1).
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Number of directed edges. O(1).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Out-degree of `v`, counted by scanning row `v`. O(n).
    pub fn degree(&self, v: usize) -> GraphResult<usize> {
        check_vertex(v, self.n)?;
        Ok(self.row(v).iter().filter(|cell| cell.is_present()).count())
    }

    /// Returns true if the edge `v -> w` exists. O(1).
    pub fn has_edge(&self, v: usize, w: usize) -> GraphResult<bool> {
        check_vertex(v, self.n)?;
        check_vertex(w, self.n)?;
        Ok(self.cells[v * self.n + w].is_present())
    }

    /// Label state of the edge `v -> w`. O(1).
    pub fn label(&self, v: usize, w: usize) -> GraphResult<Label<&L>> {
        check_vertex(v, self.n)?;
        check_vertex(w, self.n)?;
        Ok(self.cells[v * self.n + w].as_ref())
    }

    /// Inserts the directed edge `v -> w` with no explicit label,
    /// overwriting any previous label. O(1).
    pub fn add_edge(&mut self, v: usize, w: usize) -> GraphResult<()> {
        self.insert(v, w, Label::Unlabeled)
    }

    /// Inserts the directed edge `v -> w` labeled `x`, overwriting any
    /// previous label. O(1).
    pub fn add_edge_labeled(&mut self, v: usize, w: usize, x: L) -> GraphResult<()> {
        self.insert(v, w, Label::Labeled(x))
    }

    /// Inserts unlabeled edges in both directions between `v` and `w`.
    ///
    /// A self-loop (`v == w`) is a single edge and is applied once.
    pub fn add_edge_bi(&mut self, v: usize, w: usize) -> GraphResult<()> {
        self.add_edge(v, w)?;
        if v != w {
            self.add_edge(w, v)?;
        }
        Ok(())
    }

    /// Removes the edge `v -> w` if present; no-op otherwise. O(1).
    pub fn remove_edge(&mut self, v: usize, w: usize) -> GraphResult<()> {
        check_vertex(v, self.n)?;
        check_vertex(w, self.n)?;
        let cell = &mut self.cells[v * self.n + w];
        if cell.is_present() {
            *cell = Label::Absent;
            self.edge_count -= 1;
        }
        Ok(())
    }

    /// Removes the edges between `v` and `w` in both directions.
    ///
    /// A self-loop is removed once.
    pub fn remove_edge_bi(&mut self, v: usize, w: usize) -> GraphResult<()> {
        self.remove_edge(v, w)?;
        if v != w {
            self.remove_edge(w, v)?;
        }
        Ok(())
    }

    fn insert(&mut self, v: usize, w: usize, label: Label<L>) -> GraphResult<()> {
        check_vertex(v, self.n)?;
        check_vertex(w, self.n)?;
        let cell = &mut self.cells[v * self.n + w];
        if cell.is_absent() {
            self.edge_count += 1;
        }
        *cell = label;
        Ok(())
    }

    fn row(&self, v: usize) -> &[Label<L>] {
        &self.cells[v * self.n..(v + 1) * self.n]
    }
}

impl<L: Clone> DenseGraph<L> {
    /// Inserts edges labeled `x` in both directions between `v` and `w`.
    ///
    /// A self-loop is applied once.
    pub fn add_edge_bi_labeled(&mut self, v: usize, w: usize, x: L) -> GraphResult<()> {
        if v == w {
            return self.add_edge_labeled(v, w, x);
        }
        self.add_edge_labeled(v, w, x.clone())?;
        self.add_edge_labeled(w, v, x)
    }
}

impl<L> GraphView for DenseGraph<L> {
    type EdgeLabel = L;

    fn vertex_count(&self) -> usize {
        self.n
    }

    fn for_each_neighbor<F>(&self, v: usize, mut visit: F)
    where
        F: FnMut(usize, Label<&L>),
    {
        // Index-ascending by construction; this order is contractual.
        for (w, cell) in self.row(v).iter().enumerate() {
            if cell.is_present() {
                visit(w, cell.as_ref());
            }
        }
    }
}
