//! Route finding algorithms.
//!
//! All searches are generic over the traits in [`crate::graph`] and keep their state local to one call, so
//! any number of them may run concurrently over the same graph. A search which does not reach the goal
//! returns `Ok(None)`. An `Err` is only returned for [`Error::CorruptedState`](crate::error::Error).

use crate::error::Result;
use crate::graph::*;
use crate::search_space::*;

use log::{debug, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route<W: Weight, N: Identifier> {
  pub cost: W,
  /// Visited nodes in travel order, starting with the origin and ending with the destination
  pub ids: Vec<N>,
  /// Number of nodes taken off the frontier
  pub num_resolved: usize,
}

/// Receives the nodes a search discovers (BFS) or settles (Dijkstra, A*), e.g. for visualization.
///
/// Observers cannot influence the search.
pub trait Observer<N> {
  fn visit(&mut self, node: N);
}

impl<N, F: FnMut(N)> Observer<N> for F {
  fn visit(&mut self, node: N) {
    self(node)
  }
}

/// Observer which ignores everything.
pub struct NoopObserver;

impl<N> Observer<N> for NoopObserver {
  fn visit(&mut self, _: N) {}
}

/// Estimated remaining cost from a node to the goal.
///
/// For A* to return optimal routes the estimate must never exceed the real remaining cost and must not
/// drop by more than the weight of any edge.
pub trait Heuristic<N, W> {
  fn estimate(&self, node: N) -> W;
}

impl<N, W, F: Fn(N) -> W> Heuristic<N, W> for F {
  fn estimate(&self, node: N) -> W {
    self(node)
  }
}

fn budget_exhausted(max_settled: Option<usize>, num_resolved: usize) -> bool {
  match max_settled {
    Some(limit) if num_resolved >= limit => {
      warn!("Search stopped after resolving {} nodes", num_resolved);
      true
    }
    _ => false,
  }
}

/// Finds a route with the fewest edges from `start` to `goal`, ignoring edge weights.
///
/// The cost of the returned route is its number of edges. The observer is called once for every node when
/// it is discovered, starting with `start`.
pub fn bfs<G, O>(
  graph: G,
  start: G::NodeId,
  goal: G::NodeId,
  max_settled: Option<usize>,
  observer: &mut O,
) -> Result<Option<Route<usize, G::NodeId>>>
where
  G: Copy + NodeSet + IntoNeighbors,
  O: Observer<G::NodeId>,
{
  if !graph.contains_node(start) {
    debug!("Start {:?} is not part of the graph", start);
    return Ok(None);
  }

  let mut frontier = VecDeque::new();
  let mut visited = HashSet::new();
  let mut parents = HashMap::new();
  let mut num_resolved = 0;

  visited.insert(start);
  observer.visit(start);
  frontier.push_back(start);

  while let Some(current) = frontier.pop_front() {
    if budget_exhausted(max_settled, num_resolved) {
      return Ok(None);
    }
    num_resolved += 1;

    if current == goal {
      let ids = reconstruct_path(
        |node| parents.get(&node).copied(),
        start,
        goal,
        graph.number_of_nodes(),
      )?;
      return Ok(Some(Route {
        cost: ids.len() - 1,
        ids,
        num_resolved,
      }));
    }

    for next in graph.neighbors(current) {
      if visited.insert(next) {
        parents.insert(next, current);
        observer.visit(next);
        frontier.push_back(next);
      }
    }
  }

  Ok(None)
}

/// Finds a route with the minimum total weight from `start` to `goal`.
///
/// The observer is called once for every settled node, including `start` and `goal`.
pub fn dijkstra<G, O>(
  graph: G,
  start: G::NodeId,
  goal: G::NodeId,
  max_settled: Option<usize>,
  observer: &mut O,
) -> Result<Option<Route<G::Weight, G::NodeId>>>
where
  G: Copy + NodeSet + Weighted,
  O: Observer<G::NodeId>,
{
  best_first(
    graph,
    start,
    goal,
    |_: G::NodeId| G::Weight::default(),
    max_settled,
    observer,
  )
}

/// Same as [`dijkstra`] but explores nodes in order of `cost + heuristic`, which settles fewer nodes when
/// the heuristic is informative.
pub fn a_star<G, H, O>(
  graph: G,
  start: G::NodeId,
  goal: G::NodeId,
  heuristic: H,
  max_settled: Option<usize>,
  observer: &mut O,
) -> Result<Option<Route<G::Weight, G::NodeId>>>
where
  G: Copy + NodeSet + Weighted,
  H: Heuristic<G::NodeId, G::Weight>,
  O: Observer<G::NodeId>,
{
  best_first(graph, start, goal, heuristic, max_settled, observer)
}

fn best_first<G, H, O>(
  graph: G,
  start: G::NodeId,
  goal: G::NodeId,
  heuristic: H,
  max_settled: Option<usize>,
  observer: &mut O,
) -> Result<Option<Route<G::Weight, G::NodeId>>>
where
  G: Copy + NodeSet + Weighted,
  H: Heuristic<G::NodeId, G::Weight>,
  O: Observer<G::NodeId>,
{
  if !graph.contains_node(start) {
    debug!("Start {:?} is not part of the graph", start);
    return Ok(None);
  }

  let mut search_space: SearchSpace<G::Weight, G::NodeId> = SearchSpace::new();
  search_space.init(start, heuristic.estimate(start));

  loop {
    if budget_exhausted(max_settled, search_space.num_settled()) {
      return Ok(None);
    }
    let (current, cost) = match search_space.settle_next() {
      Some(settled) => settled,
      None => return Ok(None),
    };
    observer.visit(current);

    if current == goal {
      return Ok(Some(Route {
        cost,
        ids: search_space.unwind(start, goal, graph.number_of_nodes())?,
        num_resolved: search_space.num_settled(),
      }));
    }

    for (next, weight) in graph.weighted_neighbors(current) {
      let path_cost = cost + weight;
      search_space.relax(current, next, path_cost, || {
        path_cost + heuristic.estimate(next)
      });
    }
  }
}

/// Total weight of the route through `ids`, using the lightest edge between consecutive nodes. `None` if
/// two consecutive nodes are not connected.
pub fn path_weight<G: Copy + Weighted>(graph: G, ids: &[G::NodeId]) -> Option<G::Weight> {
  ids.windows(2).try_fold(G::Weight::default(), |total, hop| {
    graph
      .weighted_neighbors(hop[0])
      .filter(|(to, _)| *to == hop[1])
      .map(|(_, weight)| weight)
      .min()
      .map(|weight| total + weight)
  })
}
