use super::edge::Edge;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::spatial::Point;
use log::debug;
use ordered_float::OrderedFloat;
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use std::collections::hash_map::{HashMap, Keys};
use std::fmt;

#[derive(Debug)]
struct Entry {
  point: Point,
}

impl RTreeObject for Entry {
  type Envelope = AABB<[f64; 2]>;
  fn envelope(&self) -> Self::Envelope {
    AABB::from_point(self.point.coords())
  }
}

impl PointDistance for Entry {
  fn distance_2(&self, point: &[f64; 2]) -> f64 {
    let [x, y] = self.point.coords();
    (x - point[0]).powi(2) + (y - point[1]).powi(2)
  }
}

/// Road network with intersections as nodes and directed road segments as edges.
///
/// Nodes are identified by their coordinates. Outgoing edges of a node are kept in insertion order, which
/// makes every search over the graph deterministic.
pub struct MapGraph {
  // Keys are the node set, values the outgoing edges of each node.
  adjacency: HashMap<Point, Vec<Edge>>,
  number_of_edges: usize,
  rtree: RTree<Entry>,
}

impl Default for MapGraph {
  fn default() -> Self {
    Self::new()
  }
}

impl MapGraph {
  pub fn new() -> Self {
    Self {
      adjacency: HashMap::new(),
      number_of_edges: 0,
      rtree: RTree::new(),
    }
  }

  /// Adds an intersection. Returns `false` without changing the graph if the location is already a node or
  /// has non-finite coordinates.
  pub fn add_node(&mut self, location: Point) -> bool {
    if !location.is_finite() {
      debug!("Rejected node with non-finite coordinates: {}", location);
      return false;
    }
    if self.adjacency.contains_key(&location) {
      return false;
    }
    self.adjacency.insert(location, Vec::new());
    self.rtree.insert(Entry { point: location });
    true
  }

  /// Adds a directed road segment from `from` to `to`.
  ///
  /// Both endpoints must already be nodes and `length` must be a finite non-negative number, otherwise
  /// [`Error::InvalidArgument`] is returned and the graph is left unchanged.
  pub fn add_edge<S: Into<String>, T: Into<String>>(
    &mut self,
    from: Point,
    to: Point,
    name: S,
    road_type: T,
    length: f64,
  ) -> Result<()> {
    if !length.is_finite() || length < 0.0 {
      debug!("Rejected edge {} -> {} with length {}", from, to, length);
      return Err(Error::InvalidArgument(format!(
        "edge length must be a non-negative number, got {}",
        length
      )));
    }
    if !self.adjacency.contains_key(&to) {
      debug!("Rejected edge {} -> {}: unknown target", from, to);
      return Err(unknown_node(&to));
    }
    let edges = match self.adjacency.get_mut(&from) {
      Some(edges) => edges,
      None => {
        debug!("Rejected edge {} -> {}: unknown source", from, to);
        return Err(unknown_node(&from));
      }
    };

    edges.push(Edge::new(from, to, name.into(), road_type.into(), length));
    self.number_of_edges += 1;
    Ok(())
  }

  pub fn number_of_nodes(&self) -> usize {
    self.adjacency.len()
  }

  pub fn number_of_edges(&self) -> usize {
    self.number_of_edges
  }

  /// Iterates over all intersections in arbitrary order.
  pub fn nodes(&self) -> Keys<'_, Point, Vec<Edge>> {
    self.adjacency.keys()
  }

  /// Outgoing edges of `node` in insertion order. Empty if `node` is not part of the graph.
  pub fn edges(&self, node: &Point) -> &[Edge] {
    self
      .adjacency
      .get(node)
      .map(|edges| edges.as_slice())
      .unwrap_or(&[])
  }

  pub fn contains_node(&self, node: &Point) -> bool {
    self.adjacency.contains_key(node)
  }

  fn sorted_nodes(&self) -> Vec<&Point> {
    let mut nodes: Vec<&Point> = self.adjacency.keys().collect();
    nodes.sort();
    nodes
  }
}

fn unknown_node(point: &Point) -> Error {
  Error::InvalidArgument(format!(
    "{} must be added as a node before adding edges to it",
    point
  ))
}

fn edge_target(edge: &Edge) -> Point {
  edge.to()
}

fn edge_target_and_length(edge: &Edge) -> (Point, OrderedFloat<f64>) {
  (edge.to(), OrderedFloat(edge.length()))
}

impl GraphBase for MapGraph {
  type NodeId = Point;
}

impl NodeSet for MapGraph {
  fn contains_node(&self, node: Point) -> bool {
    self.adjacency.contains_key(&node)
  }

  fn number_of_nodes(&self) -> usize {
    self.adjacency.len()
  }
}

impl<'a> IntoNeighbors for &'a MapGraph {
  type Neighbors = std::iter::Map<std::slice::Iter<'a, Edge>, fn(&Edge) -> Point>;

  fn neighbors(self, node: Point) -> Self::Neighbors {
    self
      .edges(&node)
      .iter()
      .map(edge_target as fn(&Edge) -> Point)
  }
}

impl<'a> Weighted for &'a MapGraph {
  type Weight = OrderedFloat<f64>;
  type Edges = std::iter::Map<std::slice::Iter<'a, Edge>, fn(&Edge) -> (Point, OrderedFloat<f64>)>;

  fn weighted_neighbors(self, node: Point) -> Self::Edges {
    self
      .edges(&node)
      .iter()
      .map(edge_target_and_length as fn(&Edge) -> (Point, OrderedFloat<f64>))
  }
}

impl Spatial for MapGraph {
  // Planar nearest neighbour in degrees, good enough for snapping to the closest intersection
  fn nearest_node(&self, position: &Point) -> Option<Point> {
    self
      .rtree
      .nearest_neighbor(&position.coords())
      .map(|entry| entry.point)
  }
}

impl fmt::Display for MapGraph {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let nodes = self.sorted_nodes();

    writeln!(f, "--------------- NODES ---------------")?;
    for node in &nodes {
      write!(f, "{} -> ", node)?;
      for edge in self.edges(node) {
        write!(f, "{}; ", edge.to())?;
      }
      writeln!(f)?;
    }

    writeln!(f, "--------------- EDGES ---------------")?;
    for node in &nodes {
      write!(f, "{} -> ", node)?;
      for edge in self.edges(node) {
        write!(f, "{}; ", edge)?;
      }
      writeln!(f)?;
    }

    write!(
      f,
      "numVertices = {} numEdges = {}",
      self.number_of_nodes(),
      self.number_of_edges()
    )
  }
}
