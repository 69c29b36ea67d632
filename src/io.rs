use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{EnumerationError, Result};
use crate::graph::SimpleGraph;
use crate::graph6;

/// Writes one graph6 line per graph, in list order.
pub fn write_graph6(path: &Path, graphs: &[SimpleGraph]) -> Result<()> {
  let file = File::create(path).map_err(|e| EnumerationError::io(path, e))?;
  let mut writer = BufWriter::new(file);
  for graph in graphs {
    let line = graph6::encode(graph)?;
    writeln!(writer, "{}", line).map_err(|e| EnumerationError::io(path, e))?;
  }
  writer.flush().map_err(|e| EnumerationError::io(path, e))
}

/// Reads a file written by [`write_graph6`]. Blank lines are skipped.
pub fn read_graph6(path: &Path) -> Result<Vec<SimpleGraph>> {
  let file = File::open(path).map_err(|e| EnumerationError::io(path, e))?;
  let mut graphs = Vec::new();
  for line in BufReader::new(file).lines() {
    let line = line.map_err(|e| EnumerationError::io(path, e))?;
    if line.trim().is_empty() {
      continue;
    }
    graphs.push(graph6::decode(&line)?);
  }
  Ok(graphs)
}
