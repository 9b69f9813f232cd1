use crate::graph_impl::*;
use crate::spatial::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A(0,0), B(1,0), C(1,1), D(0,1) with unit roads A->B->C and A->D->C plus a direct A->C of length 3.
pub fn square_graph() -> (MapGraph, [Point; 4]) {
  let points = [
    Point::new(0.0, 0.0),
    Point::new(1.0, 0.0),
    Point::new(1.0, 1.0),
    Point::new(0.0, 1.0),
  ];
  let graph = graph_from_points_and_edges(
    &points,
    &[(0, 1, 1.0), (1, 2, 1.0), (0, 3, 1.0), (3, 2, 1.0), (0, 2, 3.0)],
  );
  (graph, points)
}

pub fn graph_from_points_and_edges(points: &[Point], edges: &[(usize, usize, f64)]) -> MapGraph {
  let mut graph = MapGraph::new();
  for p in points {
    graph.add_node(*p);
  }
  for (i, (from, to, length)) in edges.iter().enumerate() {
    graph
      .add_edge(points[*from], points[*to], format!("Road {}", i), "residential", *length)
      .unwrap();
  }
  graph
}

/// Adds a road whose length is the great-circle distance between its ends, scaled by `detour`.
pub fn add_road(graph: &mut MapGraph, from: Point, to: Point, name: &str, detour: f64) {
  graph
    .add_edge(from, to, name, "residential", from.distance(&to) * detour)
    .unwrap();
}

/// Blocks around UC San Diego, a 3x3 grid of intersections ~100m apart.
///
/// Every grid street is two-way with geographic length. The diagonal avenue from the south-west to the
/// north-east corner is one-way and winding, so it is longer than going around the blocks.
pub fn campus_graph() -> (MapGraph, Vec<Point>) {
  let mut graph = MapGraph::new();
  let mut points = Vec::new();
  for row in 0..3 {
    for col in 0..3 {
      let p = Point::new(32.8660 + 0.0009 * row as f64, -117.2250 + 0.0011 * col as f64);
      graph.add_node(p);
      points.push(p);
    }
  }

  for row in 0..3 {
    for col in 0..3 {
      let here = points[row * 3 + col];
      if col + 1 < 3 {
        let east = points[row * 3 + col + 1];
        add_road(&mut graph, here, east, "Library Walk", 1.0);
        add_road(&mut graph, east, here, "Library Walk", 1.0);
      }
      if row + 1 < 3 {
        let north = points[(row + 1) * 3 + col];
        add_road(&mut graph, here, north, "Gilman Dr", 1.0);
        add_road(&mut graph, north, here, "Gilman Dr", 1.0);
      }
    }
  }

  add_road(&mut graph, points[0], points[8], "Scholars Dr", 2.5);

  (graph, points)
}

/// Random graph with `num_nodes` nodes on a 10x10 grid of coordinates.
///
/// Every edge is at least as long as the planar distance between its ends, so the euclidean distance is an
/// admissible and consistent heuristic.
pub fn random_graph(seed: u64, num_nodes: usize, num_edges: usize) -> (MapGraph, Vec<Point>) {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut graph = MapGraph::new();
  let mut points = Vec::new();

  while points.len() < num_nodes {
    let p = Point::new(rng.gen_range(0..10) as f64, rng.gen_range(0..10) as f64);
    if graph.add_node(p) {
      points.push(p);
    }
  }

  for i in 0..num_edges {
    let from = points[rng.gen_range(0..num_nodes)];
    let to = points[rng.gen_range(0..num_nodes)];
    let length = from.euclidean_distance(&to) * rng.gen_range(1.0..2.0);
    graph
      .add_edge(from, to, format!("Road {}", i), "residential", length)
      .unwrap();
  }

  (graph, points)
}

/// Shortest distances from `start` by relaxing every edge until nothing changes.
pub fn bellman_ford(graph: &MapGraph, start: Point) -> std::collections::HashMap<Point, f64> {
  let mut distances = std::collections::HashMap::new();
  distances.insert(start, 0.0);

  loop {
    let mut changed = false;
    for node in graph.nodes() {
      let base = match distances.get(node) {
        Some(d) => *d,
        None => continue,
      };
      for edge in graph.edges(node) {
        let candidate = base + edge.length();
        let improves = distances
          .get(&edge.to())
          .map_or(true, |current| candidate < *current - 1e-12);
        if improves {
          distances.insert(edge.to(), candidate);
          changed = true;
        }
      }
    }
    if !changed {
      return distances;
    }
  }
}

/// Sum of edge lengths along `path`, taking the shortest road between consecutive points.
pub fn path_length(graph: &MapGraph, path: &[Point]) -> f64 {
  path
    .windows(2)
    .map(|hop| {
      graph
        .edges(&hop[0])
        .iter()
        .filter(|e| e.to() == hop[1])
        .map(|e| e.length())
        .fold(f64::INFINITY, f64::min)
    })
    .sum()
}
