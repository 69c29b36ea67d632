use forbidden_subgraphs::graph::{SimpleGraph, edge_list, from_edges};
use forbidden_subgraphs::progress::ProgressOptions;
use forbidden_subgraphs::reduce::{remove_isomorphisms, remove_supergraphs};
use forbidden_subgraphs::Vf2Oracle;
use itertools::Itertools;
use proptest::prelude::*;

fn adjacency(graph: &SimpleGraph) -> Vec<Vec<bool>> {
  let n = graph.node_count();
  let mut adj = vec![vec![false; n]; n];
  for (u, v) in edge_list(graph) {
    adj[u][v] = true;
    adj[v][u] = true;
  }
  adj
}

/// True if some injective map of `sub`'s vertices into `sup` preserves edges and non-edges.
fn brute_force_embeds(sub: &SimpleGraph, sup: &SimpleGraph) -> bool {
  let (a, b) = (adjacency(sub), adjacency(sup));
  let k = sub.node_count();
  if k > sup.node_count() {
    return false;
  }
  (0..sup.node_count()).permutations(k).any(|map| {
    (0..k).all(|i| (0..k).all(|j| i == j || a[i][j] == b[map[i]][map[j]]))
  })
}

fn brute_force_isomorphic(g: &SimpleGraph, h: &SimpleGraph) -> bool {
  g.node_count() == h.node_count() && g.edge_count() == h.edge_count() && brute_force_embeds(g, h)
}

fn graph_from_mask(n: usize, mask: u16) -> SimpleGraph {
  let pairs: Vec<(usize, usize)> = (0..n).tuple_combinations().collect();
  let edges: Vec<(usize, usize)> = pairs
    .into_iter()
    .enumerate()
    .filter(|&(bit, _)| mask & (1 << bit) != 0)
    .map(|(_, e)| e)
    .collect();
  from_edges(n, &edges)
}

fn graph_list() -> impl Strategy<Value = Vec<SimpleGraph>> {
  prop::collection::vec((1usize..=5, any::<u16>()), 1..14)
    .prop_map(|specs| specs.into_iter().map(|(n, mask)| graph_from_mask(n, mask)).collect())
}

proptest! {
  #[test]
  fn dedup_keeps_first_of_each_class(graphs in graph_list()) {
    let expected: Vec<Vec<(usize, usize)>> = graphs
      .iter()
      .enumerate()
      .filter(|&(j, g)| !graphs[..j].iter().any(|h| brute_force_isomorphic(h, g)))
      .map(|(_, g)| edge_list(g))
      .collect();

    let mut reduced = graphs.clone();
    let removed = remove_isomorphisms(&mut reduced, &Vf2Oracle, ProgressOptions::silent());
    prop_assert_eq!(removed + reduced.len(), graphs.len());
    let survivors: Vec<Vec<(usize, usize)>> = reduced.iter().map(edge_list).collect();
    prop_assert_eq!(survivors, expected);

    for (a, b) in reduced.iter().tuple_combinations() {
      prop_assert!(!brute_force_isomorphic(a, b));
    }
  }

  #[test]
  fn dedup_is_idempotent(graphs in graph_list()) {
    let mut once = graphs;
    remove_isomorphisms(&mut once, &Vf2Oracle, ProgressOptions::silent());
    let mut twice = once.clone();
    prop_assert_eq!(remove_isomorphisms(&mut twice, &Vf2Oracle, ProgressOptions::silent()), 0);
    prop_assert_eq!(
      once.iter().map(edge_list).collect::<Vec<_>>(),
      twice.iter().map(edge_list).collect::<Vec<_>>()
    );
  }

  #[test]
  fn elimination_leaves_no_induced_supergraph(graphs in graph_list()) {
    let mut reduced = graphs;
    remove_isomorphisms(&mut reduced, &Vf2Oracle, ProgressOptions::silent());
    let before = reduced.len();
    remove_supergraphs(&mut reduced, &Vf2Oracle, ProgressOptions::silent());
    prop_assert!(reduced.len() <= before);

    for a in &reduced {
      for b in &reduced {
        if a.node_count() > b.node_count() {
          prop_assert!(!brute_force_embeds(b, a));
        }
      }
    }
  }
}
