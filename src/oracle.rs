//! Isomorphism testing behind a narrow interface.
//!
//! The reduction passes only talk to [`IsomorphismOracle`]. Invariants are computed
//! once per graph into a profile so the cheap filters never touch the graph again.

use petgraph::algo;

use crate::graph::{SimpleGraph, degree, triangles_at};

pub trait IsomorphismOracle {
  type Profile;

  fn profile(&self, graph: &SimpleGraph) -> Self::Profile;

  /// Cheapest necessary condition for isomorphism.
  fn could_be_isomorphic_faster(&self, a: &Self::Profile, b: &Self::Profile) -> bool;

  /// Slightly more expensive necessary condition, checked after the faster one.
  fn could_be_isomorphic_fast(&self, a: &Self::Profile, b: &Self::Profile) -> bool;

  fn is_isomorphic(&self, g: &SimpleGraph, h: &SimpleGraph) -> bool;

  /// True if `sub` is isomorphic to an induced subgraph of `sup`.
  fn is_induced_subgraph(&self, sub: &SimpleGraph, sup: &SimpleGraph) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphProfile {
  pub order: usize,
  pub size: usize,
  /// Sorted degree sequence.
  pub degrees: Vec<usize>,
  /// Sorted (degree, triangles through the vertex) pairs.
  pub degree_triangles: Vec<(usize, usize)>,
}

impl GraphProfile {
  pub fn of(graph: &SimpleGraph) -> Self {
    let mut degree_triangles: Vec<(usize, usize)> = graph
      .node_indices()
      .map(|n| (degree(graph, n), triangles_at(graph, n)))
      .collect();
    degree_triangles.sort_unstable();
    let mut degrees: Vec<usize> = degree_triangles.iter().map(|&(d, _)| d).collect();
    degrees.sort_unstable();

    GraphProfile {
      order: graph.node_count(),
      size: graph.edge_count(),
      degrees,
      degree_triangles,
    }
  }
}

/// VF2 from petgraph. Its graph-subgraph mode matches non-edges as well as edges,
/// which is exactly induced subgraph isomorphism.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vf2Oracle;

impl IsomorphismOracle for Vf2Oracle {
  type Profile = GraphProfile;

  fn profile(&self, graph: &SimpleGraph) -> GraphProfile {
    GraphProfile::of(graph)
  }

  fn could_be_isomorphic_faster(&self, a: &GraphProfile, b: &GraphProfile) -> bool {
    a.order == b.order && a.size == b.size && a.degrees == b.degrees
  }

  fn could_be_isomorphic_fast(&self, a: &GraphProfile, b: &GraphProfile) -> bool {
    a.degree_triangles == b.degree_triangles
  }

  fn is_isomorphic(&self, g: &SimpleGraph, h: &SimpleGraph) -> bool {
    algo::is_isomorphic(g, h)
  }

  fn is_induced_subgraph(&self, sub: &SimpleGraph, sup: &SimpleGraph) -> bool {
    sub.node_count() <= sup.node_count() && algo::is_isomorphic_subgraph(sub, sup)
  }
}
