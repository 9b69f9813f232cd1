//! Shortest routes in road networks.
//!
//! A road network is a [`MapGraph`] of intersections connected by directed, weighted road segments. Routes
//! are found with breadth-first search, Dijkstra's algorithm or A* either through a [`SearchEngine`] or
//! with the generic functions in [`route`], which work on any graph implementing the traits in [`graph`].

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod graph_impl;
pub mod route;
pub mod spatial;

mod search_space;

#[cfg(test)]
mod test_utils;

pub use config::{Algorithm, SearchConfig};
pub use engine::SearchEngine;
pub use error::{Error, Result};
pub use graph_impl::{Edge, MapGraph};
pub use spatial::{DistanceMetric, Point};
