//! Graph data structures.
//! 
//! [`MapGraph`] is an in-memory road network keyed by intersection coordinates. It grows by adding nodes
//! and edges and implements the traits from [`crate::graph`], so every search algorithm runs on it.

mod edge;
mod map_graph;

pub use edge::*;
pub use map_graph::*;
