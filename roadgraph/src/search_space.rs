use crate::error::{Error, Result};
use crate::graph::*;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State<W: Weight, N: Identifier> {
  priority: W,
  cost: W,
  // Push order, resolves ties between equal priorities first-in first-out
  sequence: u64,
  id: N,
}

impl<W: Weight, N: Identifier> Ord for State<W, N> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc
    other
      .priority
      .cmp(&self.priority)
      .then_with(|| other.sequence.cmp(&self.sequence))
  }
}

// `PartialOrd` needs to be implemented as well.
impl<W: Weight, N: Identifier> PartialOrd for State<W, N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

#[derive(Copy, Clone)]
struct Resolved<W: Weight, N: Identifier> {
  cost: W,
  parent: N,
}

/// Frontier and bookkeeping of a best-first search.
///
/// Entries are never updated in place. An improved cost pushes a new entry and the outdated one is dropped
/// when it reaches the top of the queue.
pub struct SearchSpace<W: Weight, N: Identifier> {
  pq: BinaryHeap<State<W, N>>,
  resolved: HashMap<N, Resolved<W, N>>,
  settled: HashSet<N>,
  pushed: u64,
}

impl<W: Weight, N: Identifier> SearchSpace<W, N> {
  pub fn new() -> Self {
    SearchSpace {
      pq: BinaryHeap::new(),
      resolved: HashMap::new(),
      settled: HashSet::new(),
      pushed: 0,
    }
  }

  /// Seeds the search with `node` at zero cost.
  pub fn init(&mut self, node: N, priority: W) {
    self.resolve(node, node, Default::default(), priority);
  }

  /// Pops entries until one is neither stale nor settled, settles it and returns it with its cost.
  pub fn settle_next(&mut self) -> Option<(N, W)> {
    while let Some(State { cost, id, .. }) = self.pq.pop() {
      if self.settled.contains(&id) {
        continue;
      }
      if let Some(resolved) = self.resolved.get(&id) {
        if cost > resolved.cost {
          continue;
        }
      }
      self.settled.insert(id);
      return Some((id, cost));
    }
    None
  }

  /// Records a path to `node` through `parent` if it is cheaper than the best known one. The priority is
  /// only computed for improvements.
  pub fn relax<F: FnOnce() -> W>(&mut self, parent: N, node: N, path_cost: W, priority: F) -> bool {
    if self.settled.contains(&node) {
      return false;
    }
    if let Some(resolved) = self.resolved.get(&node) {
      if path_cost >= resolved.cost {
        return false;
      }
    }
    self.resolve(node, parent, path_cost, priority());
    true
  }

  pub fn num_settled(&self) -> usize {
    self.settled.len()
  }

  pub fn unwind(&self, start: N, goal: N, max_steps: usize) -> Result<Vec<N>> {
    reconstruct_path(
      |node| self.resolved.get(&node).map(|resolved| resolved.parent),
      start,
      goal,
      max_steps,
    )
  }

  fn resolve(&mut self, node: N, parent: N, cost: W, priority: W) {
    self.resolved.insert(node, Resolved { cost, parent });
    self.pq.push(State {
      priority,
      cost,
      sequence: self.pushed,
      id: node,
    });
    self.pushed += 1;
  }
}

/// Walks the parent links back from `goal` to `start` and returns the path in travel order.
///
/// A valid walk takes fewer steps than there are nodes in the graph, so `max_steps` bounds it.
pub fn reconstruct_path<N, P>(parent_of: P, start: N, goal: N, max_steps: usize) -> Result<Vec<N>>
where
  N: Identifier,
  P: Fn(N) -> Option<N>,
{
  let mut path = vec![goal];
  let mut current = goal;

  while current != start {
    if path.len() > max_steps {
      return Err(Error::CorruptedState(format!(
        "walk from {:?} did not reach {:?} within {} steps",
        goal, start, max_steps
      )));
    }
    current = parent_of(current)
      .ok_or_else(|| Error::CorruptedState(format!("{:?} was reached without a parent", current)))?;
    path.push(current);
  }

  // Need to reverse the list to get elements in the routing order
  path.reverse();
  Ok(path)
}
