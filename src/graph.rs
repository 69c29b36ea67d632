use petgraph::Undirected;
use petgraph::graph::{Graph, NodeIndex};

/// Unlabeled, undirected, simple graph on nodes `0..n`.
pub type SimpleGraph = Graph<(), (), Undirected>;

/// Builds a graph with `node_count` nodes and the given 0-indexed edges.
///
/// # Panics
///
/// If an endpoint is not below `node_count` or an edge is a self-loop.
pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> SimpleGraph {
  let mut graph = SimpleGraph::with_capacity(node_count, edges.len());
  let nodes: Vec<NodeIndex> = (0..node_count).map(|_| graph.add_node(())).collect();
  for &(u, v) in edges {
    assert!(
      u < node_count && v < node_count,
      "edge ({}, {}) out of range for {} nodes",
      u, v, node_count
    );
    assert_ne!(u, v, "self-loop at {}", u);
    graph.add_edge(nodes[u], nodes[v], ());
  }
  graph
}

/// Edges as `(u, v)` index pairs with `u < v`, in edge insertion order.
pub fn edge_list(graph: &SimpleGraph) -> Vec<(usize, usize)> {
  graph
    .raw_edges()
    .iter()
    .map(|e| {
      let (u, v) = (e.source().index(), e.target().index());
      if u < v { (u, v) } else { (v, u) }
    })
    .collect()
}

pub fn degree(graph: &SimpleGraph, node: NodeIndex) -> usize {
  graph.edges(node).count()
}

/// Number of triangles through `node`.
pub fn triangles_at(graph: &SimpleGraph, node: NodeIndex) -> usize {
  let neighbours: Vec<NodeIndex> = graph.neighbors(node).collect();
  let mut count = 0;
  for (k, &a) in neighbours.iter().enumerate() {
    for &b in &neighbours[k + 1..] {
      if graph.contains_edge(a, b) {
        count += 1;
      }
    }
  }
  count
}
