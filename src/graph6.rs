//! graph6 encoding without the `>>graph6<<` header.
//!
//! N(n) is followed by the upper triangle of the adjacency matrix read column by
//! column, x(0,1) x(0,2) x(1,2) x(0,3) ..., packed six bits per byte and offset by 63.

use petgraph::graph::NodeIndex;

use crate::error::{EnumerationError, Result};
use crate::graph::{SimpleGraph, from_edges};

const OFFSET: u8 = 63;
const MAX_ORDER: usize = 258_047;

fn encode_order(n: usize, out: &mut String) -> Result<()> {
  if n <= 62 {
    out.push((n as u8 + OFFSET) as char);
  } else if n <= MAX_ORDER {
    out.push('~');
    for shift in [12, 6, 0] {
      out.push((((n >> shift) & 0x3f) as u8 + OFFSET) as char);
    }
  } else {
    return Err(EnumerationError::GraphTooLarge { order: n });
  }
  Ok(())
}

pub fn encode(graph: &SimpleGraph) -> Result<String> {
  let n = graph.node_count();
  let mut result = String::new();
  encode_order(n, &mut result)?;

  let mut value = 0u8;
  let mut filled = 0;
  for j in 1..n {
    for i in 0..j {
      value <<= 1;
      if graph.contains_edge(NodeIndex::new(i), NodeIndex::new(j)) {
        value |= 1;
      }
      filled += 1;
      if filled == 6 {
        result.push((value + OFFSET) as char);
        value = 0;
        filled = 0;
      }
    }
  }
  if filled > 0 {
    result.push(((value << (6 - filled)) + OFFSET) as char);
  }
  Ok(result)
}

pub fn decode(record: &str) -> Result<SimpleGraph> {
  let bytes = record.trim_end_matches(['\n', '\r']).as_bytes();
  if let Some(&b) = bytes.iter().find(|&&b| !(OFFSET..=126).contains(&b)) {
    return Err(EnumerationError::graph6(record, format!("byte {} outside 63..=126", b)));
  }

  let (n, data) = match bytes {
    [] => return Err(EnumerationError::graph6(record, "empty record")),
    [126, 126, ..] => return Err(EnumerationError::graph6(record, "order exceeds 258047")),
    [126, rest @ ..] => {
      if rest.len() < 3 {
        return Err(EnumerationError::graph6(record, "truncated order"));
      }
      let n = rest[..3]
        .iter()
        .fold(0usize, |acc, &b| (acc << 6) | (b - OFFSET) as usize);
      (n, &rest[3..])
    }
    [first, rest @ ..] => ((first - OFFSET) as usize, rest),
  };

  let num_bits = n * n.saturating_sub(1) / 2;
  let num_bytes = num_bits.div_ceil(6);
  if data.len() != num_bytes {
    return Err(EnumerationError::graph6(
      record,
      format!("expected {} data bytes for {} vertices, found {}", num_bytes, n, data.len()),
    ));
  }

  let mut edges = Vec::new();
  let mut k = 0;
  for j in 1..n {
    for i in 0..j {
      let byte = data[k / 6] - OFFSET;
      if (byte >> (5 - k % 6)) & 1 == 1 {
        edges.push((i, j));
      }
      k += 1;
    }
  }
  Ok(from_edges(n, &edges))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::graph::edge_list;

  #[test]
  fn known_encodings() {
    // reference strings from the graph6 format description
    assert_eq!(encode(&from_edges(0, &[])).unwrap(), "?");
    assert_eq!(encode(&from_edges(1, &[])).unwrap(), "@");
    assert_eq!(encode(&from_edges(2, &[(0, 1)])).unwrap(), "A_");
    assert_eq!(encode(&from_edges(3, &[(0, 1), (1, 2), (0, 2)])).unwrap(), "Bw");
    let k4 = from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    assert_eq!(encode(&k4).unwrap(), "C~");
    // 0-1-2-3-4 path
    let p5 = from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
    assert_eq!(encode(&p5).unwrap(), "DhC");
  }

  #[test]
  fn two_triangles() {
    let g = from_edges(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
    let encoded = encode(&g).unwrap();
    assert_eq!(encoded, "EwCW");
    assert_eq!(edge_list(&decode(&encoded).unwrap()), vec![(0, 1), (0, 2), (1, 2), (3, 4), (3, 5), (4, 5)]);
  }

  #[test]
  fn large_order_uses_long_form() {
    let g = from_edges(63, &[(0, 62)]);
    let encoded = encode(&g).unwrap();
    assert!(encoded.starts_with("~??~"));
    let back = decode(&encoded).unwrap();
    assert_eq!(back.node_count(), 63);
    assert_eq!(edge_list(&back), vec![(0, 62)]);
  }

  #[test]
  fn trailing_newline_is_accepted() {
    assert_eq!(decode("Bw\n").unwrap().edge_count(), 3);
  }

  #[test]
  fn malformed_records_are_rejected() {
    assert!(matches!(decode(""), Err(EnumerationError::Graph6 { .. })));
    assert!(matches!(decode("Bww"), Err(EnumerationError::Graph6 { .. })));
    assert!(matches!(decode("B "), Err(EnumerationError::Graph6 { .. })));
    assert!(matches!(decode("~?"), Err(EnumerationError::Graph6 { .. })));
  }
}
