//! Reachability decomposition over a shared visitation buffer.
//!
//! "Components" here are out-reachability sets: sweeping the vertices in
//! ascending order and starting one depth-first traversal from each vertex
//! not yet visited partitions the graph into the sets reachable outward from
//! each root. For graphs whose edges were added bidirectionally these are
//! the connected components; for general directed graphs they are not
//! strongly-connected components, and deliberately so.

use crate::graph::GraphView;

use super::traversal::depth_first;

/// Summary of a reachability decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentStats {
    /// Number of reachability sets found.
    pub count: usize,
    /// Size of the largest set.
    pub largest: usize,
}

/// Decomposes `g` into out-reachability sets.
///
/// Each inner vector holds one set in discovery order; roots are taken in
/// ascending vertex order, so every vertex appears in exactly one set.
pub fn reachable_components<G: GraphView>(g: &G) -> Vec<Vec<usize>> {
    let mut visited = vec![false; g.vertex_count()];
    let mut components = Vec::new();
    for v in 0..g.vertex_count() {
        if !visited[v] {
            let mut component = Vec::new();
            depth_first(g, v, &mut visited, |w| component.push(w));
            components.push(component);
        }
    }
    components
}

/// Counts the reachability sets of `g` and the size of the largest one
/// without materializing the sets.
pub fn component_stats<G: GraphView>(g: &G) -> ComponentStats {
    let mut visited = vec![false; g.vertex_count()];
    let mut stats = ComponentStats {
        count: 0,
        largest: 0,
    };
    for v in 0..g.vertex_count() {
        if !visited[v] {
            stats.count += 1;
            let mut size = 0usize;
            depth_first(g, v, &mut visited, |_| size += 1);
            stats.largest = stats.largest.max(size);
        }
    }
    stats
}
