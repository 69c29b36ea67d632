use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnumerationError>;

#[derive(Debug, Error)]
pub enum EnumerationError {
  #[error("IO error at {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid graph6 record {record:?}: {reason}")]
  Graph6 { record: String, reason: String },

  #[error("graph of order {order} cannot be written as graph6")]
  GraphTooLarge { order: usize },

  #[error("invalid parent graph {name}: {reason}")]
  InvalidParent { name: String, reason: String },
}

impl EnumerationError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    EnumerationError::Io { path: path.into(), source }
  }

  pub(crate) fn graph6(record: &str, reason: impl Into<String>) -> Self {
    EnumerationError::Graph6 {
      record: record.to_string(),
      reason: reason.into(),
    }
  }
}
