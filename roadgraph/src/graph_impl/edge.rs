use crate::spatial::Point;
use serde::Serialize;
use std::fmt;

/// A directed road segment between two intersections.
///
/// Edges are created by [`super::MapGraph::add_edge`] which validates them, and never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
  from: Point,
  to: Point,
  name: String,
  road_type: String,
  // Length in the same units as the graph's distance metric (km for geographic maps)
  length: f64,
}

impl Edge {
  pub(crate) fn new(from: Point, to: Point, name: String, road_type: String, length: f64) -> Self {
    Edge {
      from,
      to,
      name,
      road_type,
      length,
    }
  }

  pub fn from(&self) -> Point {
    self.from
  }

  pub fn to(&self) -> Point {
    self.to
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn road_type(&self) -> &str {
    &self.road_type
  }

  pub fn length(&self) -> f64 {
    self.length
  }
}

impl fmt::Display for Edge {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} from {} to {}", self.name, self.from, self.to)
  }
}
