//! Order-parameterized single-source traversal.
//!
//! One routine implements both depth-first and breadth-first search over any
//! [`GraphView`]: the pending work lives in a `VecDeque`, and the visitation
//! order falls out of which end gets popped. Visitation state is owned by the
//! caller as a plain `&mut [bool]`, so one buffer can be shared across
//! repeated calls to sweep out a whole graph component by component.

use std::collections::VecDeque;

use tracing::trace;

use crate::graph::GraphView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    BreadthFirst,
    DepthFirst,
}

/// Depth-first traversal of the vertices reachable from `start` that are not
/// yet visited.
///
/// When the search discovers a vertex `w` with `visited[w] == false`, it sets
/// `visited[w]` and calls `action(w)`; each reachable vertex is discovered at
/// most once, in depth-first preorder. If `visited[start]` is already true
/// the call returns immediately without invoking `action`.
///
/// # Panics
///
/// Panics if `visited.len() != g.vertex_count()` or `start` is out of range.
pub fn depth_first<G, F>(g: &G, start: usize, visited: &mut [bool], action: F)
where
    G: GraphView,
    F: FnMut(usize),
{
    traverse(g, start, visited, action, Order::DepthFirst);
}

/// Breadth-first traversal of the vertices reachable from `start` that are
/// not yet visited.
///
/// Identical contract to [`depth_first`], except vertices are discovered in
/// non-decreasing distance layers from `start`.
///
/// # Panics
///
/// Panics if `visited.len() != g.vertex_count()` or `start` is out of range.
pub fn breadth_first<G, F>(g: &G, start: usize, visited: &mut [bool], action: F)
where
    G: GraphView,
    F: FnMut(usize),
{
    traverse(g, start, visited, action, Order::BreadthFirst);
}

fn traverse<G, F>(g: &G, start: usize, visited: &mut [bool], mut action: F, order: Order)
where
    G: GraphView,
    F: FnMut(usize),
{
    assert_eq!(
        visited.len(),
        g.vertex_count(),
        "visited buffer length must equal the vertex count"
    );
    if visited[start] {
        return;
    }

    let mut work = VecDeque::new();
    let mut discovered = 1usize;
    visited[start] = true;
    action(start);
    work.push_back(start);

    while let Some(v) = match order {
        Order::BreadthFirst => work.pop_front(),
        Order::DepthFirst => work.pop_back(),
    } {
        // Labels are enumerated but never influence the traversal.
        g.for_each_neighbor(v, |w, _| {
            if !visited[w] {
                visited[w] = true;
                action(w);
                work.push_back(w);
                discovered += 1;
            }
        });
    }

    trace!(start, ?order, discovered, "traversal exhausted reachable set");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DenseGraph, SparseGraph};

    /// 0 -> 1 -> 2, 0 -> 3; vertex 4 unreachable.
    fn chain_and_branch() -> DenseGraph<()> {
        let mut g = DenseGraph::new(5);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(0, 3).unwrap();
        g.add_edge(4, 0).unwrap();
        g
    }

    #[test]
    fn bfs_discovers_in_distance_layers() {
        let g = chain_and_branch();
        let mut visited = vec![false; 5];
        let mut order = Vec::new();
        breadth_first(&g, 0, &mut visited, |w| order.push(w));
        // Dense enumeration is index-ascending, so the order is exact.
        assert_eq!(order, vec![0, 1, 3, 2]);
        assert!(!visited[4]);
    }

    #[test]
    fn dfs_discovers_in_preorder() {
        let g = chain_and_branch();
        let mut visited = vec![false; 5];
        let mut order = Vec::new();
        depth_first(&g, 0, &mut visited, |w| order.push(w));
        // LIFO pops the most recent push: 0, then 3, then back to 1, 2.
        assert_eq!(order, vec![0, 1, 3, 2]);
        assert_eq!(visited, vec![true, true, true, true, false]);
    }

    #[test]
    fn discovery_happens_at_enumeration_for_both_orders() {
        // 0 -> {1, 2}; 1 -> 3. Both of 0's children are discovered while 0
        // is being expanded, so discovery order coincides here; the orders
        // diverge only in which vertex gets expanded next.
        let mut g = DenseGraph::<()>::new(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(1, 3).unwrap();

        let mut visited = vec![false; 4];
        let mut bfs_order = Vec::new();
        breadth_first(&g, 0, &mut visited, |w| bfs_order.push(w));
        assert_eq!(bfs_order, vec![0, 1, 2, 3]);

        let mut visited = vec![false; 4];
        let mut dfs_order = Vec::new();
        depth_first(&g, 0, &mut visited, |w| dfs_order.push(w));
        assert_eq!(dfs_order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn visited_start_is_a_no_op() {
        let g = chain_and_branch();
        let mut visited = vec![false; 5];
        visited[0] = true;
        let before = visited.clone();
        let mut calls = 0;
        depth_first(&g, 0, &mut visited, |_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(visited, before);
    }

    #[test]
    fn shared_buffer_resumes_across_components() {
        let mut g = SparseGraph::<()>::new(6);
        g.add_edge_bi(0, 1).unwrap();
        g.add_edge_bi(2, 3).unwrap();
        g.add_edge(4, 4).unwrap();

        let mut visited = vec![false; 6];
        let mut sets = Vec::new();
        for v in 0..6 {
            if !visited[v] {
                let mut set = Vec::new();
                breadth_first(&g, v, &mut visited, |w| set.push(w));
                sets.push(set);
            }
        }
        for set in &mut sets {
            set.sort_unstable();
        }
        assert_eq!(sets, vec![vec![0, 1], vec![2, 3], vec![4], vec![5]]);
        assert!(visited.iter().all(|&b| b));
    }

    #[test]
    fn follows_edges_outward_only() {
        let mut g = SparseGraph::<()>::new(3);
        g.add_edge(1, 0).unwrap();
        g.add_edge(1, 2).unwrap();

        let mut visited = vec![false; 3];
        let mut reached = Vec::new();
        depth_first(&g, 0, &mut visited, |w| reached.push(w));
        // 1 -> 0 exists but 0 -> 1 does not.
        assert_eq!(reached, vec![0]);
    }

    #[test]
    fn self_loop_terminates() {
        let mut g = DenseGraph::<()>::new(1);
        g.add_edge(0, 0).unwrap();
        let mut visited = vec![false; 1];
        let mut calls = 0;
        breadth_first(&g, 0, &mut visited, |_| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    #[should_panic(expected = "visited buffer length")]
    fn wrong_buffer_length_panics() {
        let g = DenseGraph::<()>::new(3);
        let mut visited = vec![false; 2];
        depth_first(&g, 0, &mut visited, |_| {});
    }
}
