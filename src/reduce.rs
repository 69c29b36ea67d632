use crate::graph::SimpleGraph;
use crate::oracle::IsomorphismOracle;
use crate::progress::{Progress, ProgressOptions};

/// Deletes `marked` from `list`, highest index first so earlier deletions never
/// shift an index still waiting to be deleted.
pub fn remove_marked<T>(list: &mut Vec<T>, mut marked: Vec<usize>) {
  marked.sort_unstable();
  marked.dedup();
  for index in marked.into_iter().rev() {
    list.remove(index);
  }
}

/// Keeps the first graph of every isomorphism class, in list order.
///
/// Every pair `i < j` is tested with both cheap filters first and only then with the
/// exact test. A match marks `j`, and `j` is not compared any further. Returns the
/// number of graphs removed.
pub fn remove_isomorphisms<O: IsomorphismOracle>(
  graphs: &mut Vec<SimpleGraph>,
  oracle: &O,
  options: ProgressOptions,
) -> usize {
  let total_before = graphs.len();
  let profiles: Vec<O::Profile> = graphs.iter().map(|g| oracle.profile(g)).collect();
  let mut duplicate = vec![false; graphs.len()];

  let progress = Progress::new("iso", graphs.len(), options);
  for j in 0..graphs.len() {
    progress.step(j);
    for i in 0..j {
      // a marked graph already has an isomorphic witness before it
      if duplicate[i] {
        continue;
      }
      if oracle.could_be_isomorphic_faster(&profiles[i], &profiles[j])
        && oracle.could_be_isomorphic_fast(&profiles[i], &profiles[j])
        && oracle.is_isomorphic(&graphs[i], &graphs[j])
      {
        duplicate[j] = true;
        break;
      }
    }
  }
  progress.finish("✔ Isomorphism filtering complete");

  let marked: Vec<usize> = (0..graphs.len()).filter(|&k| duplicate[k]).collect();
  let removed = marked.len();
  remove_marked(graphs, marked);

  if options.visible {
    println!(
      "Deduplication complete: {} → {} ({} removed)",
      total_before,
      graphs.len(),
      removed
    );
  }
  removed
}

/// Removes every graph that has another listed graph of strictly smaller order as
/// an induced subgraph. Graphs of equal order are never compared. Returns the number
/// of graphs removed.
pub fn remove_supergraphs<O: IsomorphismOracle>(
  graphs: &mut Vec<SimpleGraph>,
  oracle: &O,
  options: ProgressOptions,
) -> usize {
  let total_before = graphs.len();
  let mut supergraphs = Vec::new();

  let progress = Progress::new("super", graphs.len(), options);
  for (i, possible_supergraph) in graphs.iter().enumerate() {
    progress.step(i);
    let found = graphs.iter().enumerate().any(|(j, possible_subgraph)| {
      i != j
        && possible_supergraph.node_count() > possible_subgraph.node_count()
        && oracle.is_induced_subgraph(possible_subgraph, possible_supergraph)
    });
    if found {
      supergraphs.push(i);
    }
  }
  progress.finish("✔ Supergraph elimination complete");

  let removed = supergraphs.len();
  remove_marked(graphs, supergraphs);

  if options.visible {
    println!(
      "Supergraph elimination complete: {} → {} ({} removed)",
      total_before,
      graphs.len(),
      removed
    );
  }
  removed
}
