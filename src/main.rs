use std::process::ExitCode;

use forbidden_subgraphs::{RunConfig, run};

fn main() -> ExitCode {
  let config = RunConfig::default();

  match run(&config) {
    Ok(summary) => {
      for parent in &summary.per_parent {
        println!("{} ({}): {} candidates", parent.name, parent.family, parent.candidates);
      }
      println!(
        "{} candidates → {} after deduplication → {} after supergraph elimination",
        summary.candidates, summary.after_dedup, summary.after_elimination
      );
      println!("The number of graphs in G_1 is: {}", summary.after_elimination);
      println!("Saved graph6 list to {}", summary.output_path.display());
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("error: {}", err);
      ExitCode::FAILURE
    }
  }
}
