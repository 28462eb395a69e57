//! Hierarchy scanning - group a root's renderers by the level their name
//! declares.

use std::collections::HashSet;

use crate::classify::classify;
use crate::constants::MAX_LOD_LEVELS;
use crate::host::SceneGraph;
use crate::types::ObjectId;

/// Renderers found under a root, bucketed by declared level.
#[derive(Clone, Debug)]
pub struct LevelScan<O> {
  levels: [Vec<O>; MAX_LOD_LEVELS],
  seen: HashSet<(usize, O)>,
}

impl<O: ObjectId> LevelScan<O> {
  /// Create an empty scan.
  pub fn new() -> Self {
    Self {
      levels: std::array::from_fn(|_| Vec::new()),
      seen: HashSet::new(),
    }
  }

  /// Add a renderer to a level bucket. Ignores levels past the table and
  /// renderers already in the bucket.
  pub fn insert(&mut self, level: usize, renderer: O) {
    if let Some(bucket) = self.levels.get_mut(level) {
      if self.seen.insert((level, renderer)) {
        bucket.push(renderer);
      }
    }
  }

  /// Renderers declaring `level`, in traversal order.
  pub fn at(&self, level: usize) -> &[O] {
    self.levels.get(level).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Check if no renderer was classified.
  pub fn is_empty(&self) -> bool {
    self.levels.iter().all(Vec::is_empty)
  }

  /// Total number of classified renderers.
  pub fn classified_count(&self) -> usize {
    self.levels.iter().map(Vec::len).sum()
  }

  /// Iterate non-empty buckets as `(level, renderers)` in level order.
  pub fn iter(&self) -> impl Iterator<Item = (usize, &[O])> {
    self
      .levels
      .iter()
      .enumerate()
      .filter(|(_, bucket)| !bucket.is_empty())
      .map(|(level, bucket)| (level, bucket.as_slice()))
  }
}

impl<O: ObjectId> Default for LevelScan<O> {
  fn default() -> Self {
    Self::new()
  }
}

/// Scan every renderer under `root` and classify it by name suffix.
///
/// Unclassified renderers are dropped. The hierarchy is only read.
pub fn scan<H: SceneGraph + ?Sized>(
  host: &H,
  root: H::Object,
  include_inactive: bool,
) -> LevelScan<H::Object> {
  let _span = tracing::debug_span!("lod::scan", ?root).entered();

  let renderers = host.renderers_in_subtree(root, include_inactive);
  let mut result = LevelScan::new();
  for renderer in &renderers {
    let level = host.display_name(*renderer).and_then(classify);
    if let Some(level) = level {
      result.insert(level, *renderer);
    }
  }

  tracing::debug!(
    found = renderers.len(),
    classified = result.classified_count(),
    "scanned LOD root"
  );
  result
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;
