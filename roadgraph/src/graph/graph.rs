use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

// ====== Basic traits =====

/// Requirements for a node identifier
pub trait Identifier: Eq + Hash + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

/// Membership and size of the node set
pub trait NodeSet: GraphBase {
  fn contains_node(&self, node: Self::NodeId) -> bool;
  fn number_of_nodes(&self) -> usize;
}

// ====== Neighbors access =====

/// Trait for defining graph connectivity
/// 
/// `neighbors()` for node with id `u` must return all nodes `v` such that there is an edge from `u` to `v`
/// in the graph, once per edge and in a stable order. Ids which are not part of the graph have no neighbors.
pub trait IntoNeighbors: GraphBase {
  type Neighbors: Iterator<Item = Self::NodeId>;
  fn neighbors(self, node: Self::NodeId) -> Self::Neighbors;
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}

impl<'a, G: NodeSet> NodeSet for &'a G {
  fn contains_node(&self, node: Self::NodeId) -> bool {
    (*self).contains_node(node)
  }

  fn number_of_nodes(&self) -> usize {
    (*self).number_of_nodes()
  }
}
