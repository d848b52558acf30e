//! Representation-agnostic graph algorithms.
//!
//! Everything here is written against the [`GraphView`](crate::graph::GraphView)
//! capability, never a concrete backend, so sparse and dense graphs share one
//! implementation.

pub mod components;
pub mod traversal;

pub use components::{component_stats, reachable_components, ComponentStats};
pub use traversal::{breadth_first, depth_first};
