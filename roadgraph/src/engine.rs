//! Shortest path queries over a [`MapGraph`].

use crate::config::{Algorithm, SearchConfig};
use crate::error::Result;
use crate::graph::Spatial;
use crate::graph_impl::MapGraph;
use crate::route::{self, NoopObserver, Observer, Route};
use crate::spatial::Point;

use log::{debug, info};
use ordered_float::OrderedFloat;

pub type Length = OrderedFloat<f64>;

/// Runs searches against a road network.
///
/// The engine only borrows the graph, so the graph cannot change while searches run. Each call owns its
/// search state. An empty path means the goal is not reachable from the start, a path from a node to
/// itself is `[start]`.
pub struct SearchEngine<'g> {
  graph: &'g MapGraph,
  config: SearchConfig,
}

impl<'g> SearchEngine<'g> {
  pub fn new(graph: &'g MapGraph) -> Self {
    Self::with_config(graph, SearchConfig::default())
  }

  pub fn with_config(graph: &'g MapGraph, config: SearchConfig) -> Self {
    Self { graph, config }
  }

  pub fn graph(&self) -> &'g MapGraph {
    self.graph
  }

  pub fn config(&self) -> &SearchConfig {
    &self.config
  }

  /// Path with the fewest road segments.
  pub fn bfs(&self, start: Point, goal: Point) -> Result<Vec<Point>> {
    self.bfs_observed(start, goal, &mut NoopObserver)
  }

  /// Same as [`Self::bfs`], reporting every discovered intersection to `observer`.
  pub fn bfs_observed<O: Observer<Point>>(
    &self,
    start: Point,
    goal: Point,
    observer: &mut O,
  ) -> Result<Vec<Point>> {
    Ok(into_path(self.bfs_route(start, goal, observer)?))
  }

  pub fn bfs_route<O: Observer<Point>>(
    &self,
    start: Point,
    goal: Point,
    observer: &mut O,
  ) -> Result<Option<Route<usize, Point>>> {
    let route = route::bfs(self.graph, start, goal, self.config.max_settled, observer)?;
    log_outcome("BFS", start, goal, &route);
    Ok(route)
  }

  /// Shortest path by total road length.
  pub fn dijkstra(&self, start: Point, goal: Point) -> Result<Vec<Point>> {
    self.dijkstra_observed(start, goal, &mut NoopObserver)
  }

  /// Same as [`Self::dijkstra`], reporting every settled intersection to `observer`.
  pub fn dijkstra_observed<O: Observer<Point>>(
    &self,
    start: Point,
    goal: Point,
    observer: &mut O,
  ) -> Result<Vec<Point>> {
    Ok(into_path(self.dijkstra_route(start, goal, observer)?))
  }

  pub fn dijkstra_route<O: Observer<Point>>(
    &self,
    start: Point,
    goal: Point,
    observer: &mut O,
  ) -> Result<Option<Route<Length, Point>>> {
    let route = route::dijkstra(self.graph, start, goal, self.config.max_settled, observer)?;
    log_outcome("Dijkstra", start, goal, &route);
    Ok(route)
  }

  /// Shortest path by total road length, guided by the straight-line distance to `goal`.
  pub fn a_star(&self, start: Point, goal: Point) -> Result<Vec<Point>> {
    self.a_star_observed(start, goal, &mut NoopObserver)
  }

  /// Same as [`Self::a_star`], reporting every settled intersection to `observer`.
  pub fn a_star_observed<O: Observer<Point>>(
    &self,
    start: Point,
    goal: Point,
    observer: &mut O,
  ) -> Result<Vec<Point>> {
    Ok(into_path(self.a_star_route(start, goal, observer)?))
  }

  pub fn a_star_route<O: Observer<Point>>(
    &self,
    start: Point,
    goal: Point,
    observer: &mut O,
  ) -> Result<Option<Route<Length, Point>>> {
    let metric = self.config.heuristic;
    let route = route::a_star(
      self.graph,
      start,
      goal,
      move |p: Point| OrderedFloat(metric.measure(&p, &goal)),
      self.config.max_settled,
      observer,
    )?;
    log_outcome("A*", start, goal, &route);
    Ok(route)
  }

  /// Path found by the configured algorithm.
  pub fn route(&self, start: Point, goal: Point) -> Result<Vec<Point>> {
    match self.config.algorithm {
      Algorithm::Bfs => self.bfs(start, goal),
      Algorithm::Dijkstra => self.dijkstra(start, goal),
      Algorithm::AStar => self.a_star(start, goal),
    }
  }

  /// Routes between the intersections closest to two arbitrary positions. Empty for an empty graph.
  pub fn snap_and_route(&self, from: &Point, to: &Point) -> Result<Vec<Point>> {
    let start = match self.graph.nearest_node(from) {
      Some(start) => start,
      None => {
        debug!("({}) isn't snapped", from);
        return Ok(Vec::new());
      }
    };
    let goal = match self.graph.nearest_node(to) {
      Some(goal) => goal,
      None => {
        debug!("({}) isn't snapped", to);
        return Ok(Vec::new());
      }
    };
    debug!("Snapped ({}) to ({}) and ({}) to ({})", from, start, to, goal);

    self.route(start, goal)
  }
}

fn into_path<W: crate::graph::Weight>(route: Option<Route<W, Point>>) -> Vec<Point> {
  route.map(|route| route.ids).unwrap_or_default()
}

fn log_outcome<W: crate::graph::Weight>(
  algorithm: &str,
  start: Point,
  goal: Point,
  route: &Option<Route<W, Point>>,
) {
  match route {
    Some(route) => info!(
      "{} route from ({}) to ({}): cost = {:?}, nodes = {}, resolved = {}",
      algorithm,
      start,
      goal,
      route.cost,
      route.ids.len(),
      route.num_resolved
    ),
    None => info!("{}: no path from ({}) to ({})", algorithm, start, goal),
  }
}
