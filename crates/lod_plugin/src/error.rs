//! Error types for LOD tool operations.

use thiserror::Error;

/// Errors raised while executing LOD tool commands.
///
/// None of these escape [`LodTools::run`](crate::commands::LodTools::run):
/// the dispatch boundary logs them and reports a failed outcome instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LodError {
  /// The object has no LOD group attached (or it was removed).
  #[error("object {0} has no LOD group")]
  NotAnLodGroup(String),

  /// A level index beyond the suffix table.
  #[error("LOD level {level} is out of range (max {max})")]
  LevelOutOfRange { level: usize, max: usize },

  /// A context-bearing command was run without a context object.
  #[error("command '{0}' requires a context object")]
  MissingContext(&'static str),

  /// The host refused or failed a write.
  #[error("host error: {0}")]
  Host(String),
}
