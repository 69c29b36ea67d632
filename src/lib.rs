//! Enumeration of the hopping accelerators that make up G_1.
//!
//! Every edge subset of each parent graph is deleted to produce a candidate, the
//! candidates are reduced to one graph per isomorphism class, graphs that contain
//! a smaller listed graph as an induced subgraph are dropped, and the survivors are
//! written as graph6.

pub mod error;
pub mod family;
pub mod generate;
pub mod graph;
pub mod graph6;
pub mod io;
pub mod oracle;
pub mod pipeline;
pub mod progress;
pub mod reduce;

pub use error::{EnumerationError, Result};
pub use family::{Family, ParentGraph, RunConfig};
pub use graph::SimpleGraph;
pub use oracle::{IsomorphismOracle, Vf2Oracle};
pub use pipeline::{RunSummary, run};
