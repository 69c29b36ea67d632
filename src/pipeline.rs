use std::path::PathBuf;

use crate::error::Result;
use crate::family::RunConfig;
use crate::generate::{ParentCount, generate_candidates};
use crate::graph::SimpleGraph;
use crate::io::write_graph6;
use crate::oracle::{IsomorphismOracle, Vf2Oracle};
use crate::reduce::{remove_isomorphisms, remove_supergraphs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
  pub candidates: usize,
  pub per_parent: Vec<ParentCount>,
  pub after_dedup: usize,
  pub after_elimination: usize,
  pub output_path: PathBuf,
}

/// Generation and both reduction passes, without touching the filesystem.
pub fn reduce_family<O: IsomorphismOracle>(
  config: &RunConfig,
  oracle: &O,
) -> Result<(Vec<SimpleGraph>, RunSummary)> {
  let options = config.progress();
  let (mut graphs, per_parent) = generate_candidates(&config.parents, options)?;
  let candidates = graphs.len();

  remove_isomorphisms(&mut graphs, oracle, options);
  let after_dedup = graphs.len();

  remove_supergraphs(&mut graphs, oracle, options);
  let after_elimination = graphs.len();

  let summary = RunSummary {
    candidates,
    per_parent,
    after_dedup,
    after_elimination,
    output_path: config.output_path.clone(),
  };
  Ok((graphs, summary))
}

/// Runs the whole pipeline and writes the graph6 file.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
  let (graphs, summary) = reduce_family(config, &Vf2Oracle)?;

  write_graph6(&config.output_path, &graphs)?;
  Ok(summary)
}
