//! Search settings.
//!
//! [`SearchConfig`] derives `Deserialize` with defaults for every field, so it can be embedded in whatever
//! configuration format the application uses.

use crate::spatial::DistanceMetric;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
  /// Fewest road segments, lengths are ignored
  Bfs,
  Dijkstra,
  AStar,
}

impl Default for Algorithm {
  fn default() -> Self {
    Algorithm::AStar
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
  /// Used by [`crate::engine::SearchEngine::route`]
  pub algorithm: Algorithm,
  /// Straight-line distance used as the A* heuristic. Must be measured in the same units as edge lengths.
  pub heuristic: DistanceMetric,
  /// Give up after taking this many nodes off the frontier
  pub max_settled: Option<usize>,
}
