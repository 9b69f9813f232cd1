use crate::graph::GraphBase;
use crate::spatial::Point;

/// Defines a spatial index for graph nodes
pub trait Spatial: GraphBase {
  /// The node closest to `position`, `None` for an empty graph.
  fn nearest_node(&self, position: &Point) -> Option<Self::NodeId>;
}

impl<'a, G: Spatial> Spatial for &'a G {
  fn nearest_node(&self, position: &Point) -> Option<Self::NodeId> {
    (*self).nearest_node(position)
  }
}
