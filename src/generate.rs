use itertools::Itertools;

use crate::error::Result;
use crate::family::{Family, ParentGraph};
use crate::graph::{SimpleGraph, edge_list, from_edges};
use crate::progress::{Progress, ProgressOptions};

/// Every graph obtained from `parent` by deleting a subset of its edges, 2^E in all.
///
/// Subsets are taken by increasing size, then lexicographically by edge position, so
/// the first graph is the parent itself and the last one is edgeless. The vertex set
/// never changes.
pub fn edge_deletions(parent: &SimpleGraph) -> Vec<SimpleGraph> {
  let n = parent.node_count();
  let edges = edge_list(parent);
  let positions: Vec<usize> = (0..edges.len()).collect();

  let mut graphs = Vec::with_capacity(1 << edges.len().min(20));
  for k in 0..=edges.len() {
    for deleted in positions.iter().copied().combinations(k) {
      let mut deleted = deleted.into_iter().peekable();
      let kept: Vec<(usize, usize)> = edges
        .iter()
        .enumerate()
        .filter(|&(pos, _)| {
          if deleted.peek() == Some(&pos) {
            deleted.next();
            false
          } else {
            true
          }
        })
        .map(|(_, &e)| e)
        .collect();
      graphs.push(from_edges(n, &kept));
    }
  }
  graphs
}

/// Candidate count contributed by one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentCount {
  pub name: String,
  pub family: Family,
  pub candidates: usize,
}

/// Concatenates the edge deletions of every parent, in parent order.
pub fn generate_candidates(
  parents: &[ParentGraph],
  options: ProgressOptions,
) -> Result<(Vec<SimpleGraph>, Vec<ParentCount>)> {
  let progress = Progress::new("gen", parents.len(), options);
  let mut candidates = Vec::new();
  let mut counts = Vec::with_capacity(parents.len());

  for parent in parents {
    let graph = parent.build()?;
    let graphs = edge_deletions(&graph);
    progress.line(format!(
      "{} parent {}: {} vertices, {} edges -> {} candidates",
      parent.family,
      parent.name,
      graph.node_count(),
      graph.edge_count(),
      graphs.len()
    ));
    counts.push(ParentCount {
      name: parent.name.clone(),
      family: parent.family,
      candidates: graphs.len(),
    });
    candidates.extend(graphs);
    progress.inc();
  }
  progress.finish("✔ Generation complete");

  Ok((candidates, counts))
}
