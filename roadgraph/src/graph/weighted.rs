use std::fmt::Debug;
use std::ops::Add;
use crate::graph::GraphBase;

/// Trait representing an edge weight(cost) in weighted graph
pub trait Weight<T = Self>: Default + Add<Output = T> + Ord + Copy + Debug {}
impl<T> Weight for T where T: Default + Add<Output = T> + Ord + Copy + Debug {}

/// Weighted graph
/// 
/// `weighted_neighbors()` for node `u` yields a `(v, w)` pair for every edge from `u` to `v` with weight `w`.
/// Parallel edges are reported separately. Weights must not be negative.
pub trait Weighted: GraphBase {
  type Weight: Weight;
  type Edges: Iterator<Item = (Self::NodeId, Self::Weight)>;
  fn weighted_neighbors(self, node: Self::NodeId) -> Self::Edges;
}
