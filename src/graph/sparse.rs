//! Adjacency-list graph backed by per-vertex hash maps.

use std::collections::HashMap;

use super::label::Label;
use super::view::GraphView;
use super::{check_vertex, GraphResult};

/// A directed graph stored as one `neighbor -> label` map per vertex.
///
/// Space is Θ(n+m) for n vertices and m edges; an empty `HashMap` does not
/// allocate, so vertices without outgoing edges cost only the slot in the
/// outer vec. All per-edge operations are O(1) expected.
///
/// Neighbor enumeration order is unspecified. Algorithms that need a
/// reproducible order for a fixed input should use [`DenseGraph`], which
/// enumerates index-ascending.
///
/// [`DenseGraph`]: super::DenseGraph
#[derive(Debug, Clone)]
pub struct SparseGraph<L> {
    /// `edges[v]` maps each neighbor `w` to the label of the edge `v -> w`.
    /// Stored labels are never `Absent`; absence is absence from the map.
    edges: Vec<HashMap<usize, Label<L>>>,

    /// Total number of directed edges, maintained incrementally.
    edge_count: usize,
}

impl<L> SparseGraph<L> {
    /// Creates a graph with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        let mut edges = Vec::with_capacity(n);
        edges.resize_with(n, HashMap::new);
        Self {
            edges,
            edge_count: 0,
        }
    }

    /// Number of vertices. O(1).
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges. O(1).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Out-degree of `v`. O(1).
    pub fn degree(&self, v: usize) -> GraphResult<usize> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.edges[v].len())
    }

    /// Returns true if the edge `v -> w` exists. O(1) expected.
    pub fn has_edge(&self, v: usize, w: usize) -> GraphResult<bool> {
        check_vertex(v, self.vertex_count())?;
        check_vertex(w, self.vertex_count())?;
        Ok(self.edges[v].contains_key(&w))
    }

    /// Label state of the edge `v -> w`. O(1) expected.
    pub fn label(&self, v: usize, w: usize) -> GraphResult<Label<&L>> {
        check_vertex(v, self.vertex_count())?;
        check_vertex(w, self.vertex_count())?;
        Ok(self.edges[v].get(&w).map_or(Label::Absent, Label::as_ref))
    }

    /// Inserts the directed edge `v -> w` with no explicit label,
    /// overwriting any previous label. O(1) expected.
    pub fn add_edge(&mut self, v: usize, w: usize) -> GraphResult<()> {
        self.insert(v, w, Label::Unlabeled)
    }

    /// Inserts the directed edge `v -> w` labeled `x`, overwriting any
    /// previous label. O(1) expected.
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

    /// Removes the edge `v -> w` if present; no-op otherwise. O(1) expected.
    pub fn remove_edge(&mut self, v: usize, w: usize) -> GraphResult<()> {
        check_vertex(v, self.vertex_count())?;
        check_vertex(w, self.vertex_count())?;
        if self.edges[v].remove(&w).is_some() {
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
        check_vertex(v, self.vertex_count())?;
        check_vertex(w, self.vertex_count())?;
        if self.edges[v].insert(w, label).is_none() {
            self.edge_count += 1;
        }
        Ok(())
    }
}

impl<L: Clone> SparseGraph<L> {
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

impl<L> GraphView for SparseGraph<L> {
    type EdgeLabel = L;

    fn vertex_count(&self) -> usize {
        SparseGraph::vertex_count(self)
    }

    fn for_each_neighbor<F>(&self, v: usize, mut visit: F)
    where
        F: FnMut(usize, Label<&L>),
    {
        for (&w, label) in &self.edges[v] {
            visit(w, label.as_ref());
        }
    }
}
