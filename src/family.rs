//! Parent graphs of G_1 and the run configuration built around them.
//!
//! G_1 is made of the 2-hopping accelerators (family M_2) and the (1,1)-hopping
//! accelerators (family M_{1,1}). M_2 has a single parent, 2K_3. M_{1,1} has three
//! parents, one for each possible size (2, 1 or 0) of the intersection of T_1 and S_2.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use petgraph::graph::NodeIndex;

use crate::error::{EnumerationError, Result};
use crate::graph::SimpleGraph;
use crate::progress::ProgressOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
  M2,
  M11,
}

impl fmt::Display for Family {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Family::M2 => write!(f, "M_2"),
      Family::M11 => write!(f, "M_{{1,1}}"),
    }
  }
}

/// A hand-authored seed graph. Vertex labels are arbitrary; only the labels that
/// appear in `edges` are vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentGraph {
  pub name: String,
  pub family: Family,
  pub edges: Vec<(usize, usize)>,
}

impl ParentGraph {
  pub fn new(name: impl Into<String>, family: Family, edges: &[(usize, usize)]) -> Self {
    ParentGraph {
      name: name.into(),
      family,
      edges: edges.to_vec(),
    }
  }

  /// Labels are assigned node indices in the order they are first met in `edges`.
  pub fn build(&self) -> Result<SimpleGraph> {
    let mut graph = SimpleGraph::with_capacity(0, self.edges.len());
    let mut nodes: HashMap<usize, NodeIndex> = HashMap::new();

    for &(a, b) in &self.edges {
      if a == b {
        return Err(self.invalid(format!("self-loop at vertex {}", a)));
      }
      let u = *nodes.entry(a).or_insert_with(|| graph.add_node(()));
      let v = *nodes.entry(b).or_insert_with(|| graph.add_node(()));
      if graph.contains_edge(u, v) {
        return Err(self.invalid(format!("edge ({}, {}) listed twice", a, b)));
      }
      graph.add_edge(u, v, ());
    }
    Ok(graph)
  }

  fn invalid(&self, reason: String) -> EnumerationError {
    EnumerationError::InvalidParent {
      name: self.name.clone(),
      reason,
    }
  }
}

/// 2K_3
pub fn m2_parent() -> ParentGraph {
  ParentGraph::new("M2", Family::M2, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)])
}

/// Two vertices in T_1 ∩ S_2.
pub fn m11a_parent() -> ParentGraph {
  ParentGraph::new("M11a", Family::M11, &[(0, 1), (2, 3), (4, 5)])
}

/// One vertex in T_1 ∩ S_2.
pub fn m11b_parent() -> ParentGraph {
  ParentGraph::new(
    "M11b",
    Family::M11,
    &[(1, 2), (1, 5), (2, 5), (3, 4), (4, 5), (3, 5), (3, 6), (3, 7), (6, 7)],
  )
}

/// No vertex in T_1 ∩ S_2.
pub fn m11c_parent() -> ParentGraph {
  ParentGraph::new(
    "M11c",
    Family::M11,
    &[
      (1, 2), (1, 5), (1, 6), (2, 5), (2, 6),
      (3, 4), (4, 5), (5, 6), (3, 5), (4, 6), (3, 6),
      (3, 7), (3, 8), (4, 7), (4, 8), (7, 8),
    ],
  )
}

pub fn default_parents() -> Vec<ParentGraph> {
  vec![m2_parent(), m11a_parent(), m11b_parent(), m11c_parent()]
}

#[derive(Debug, Clone)]
pub struct RunConfig {
  pub parents: Vec<ParentGraph>,
  pub output_path: PathBuf,
  /// Print a progress line every this many outer iterations of a reduction pass.
  pub progress_interval: usize,
  pub show_progress: bool,
}

impl Default for RunConfig {
  fn default() -> Self {
    let progress = ProgressOptions::default();
    RunConfig {
      parents: default_parents(),
      output_path: PathBuf::from("g1graphs.txt"),
      progress_interval: progress.interval,
      show_progress: progress.visible,
    }
  }
}

impl RunConfig {
  pub fn progress(&self) -> ProgressOptions {
    ProgressOptions {
      interval: self.progress_interval,
      visible: self.show_progress,
    }
  }
}
