//! Core data types for LOD group configuration.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::constants::MAX_LOD_LEVELS;

/// Host object handle.
///
/// Anything cheap to copy and hashable works: ECS entities, arena indices,
/// instance ids.
pub trait ObjectId: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> ObjectId for T {}

/// One tier of an LOD group.
#[derive(Clone, Debug, PartialEq)]
pub struct LodLevel<O> {
  /// Screen-relative height at which this level becomes active, in (0, 1].
  pub transition_height: f32,

  /// Renderers drawn at this level. Insertion ordered, no duplicates.
  renderers: Vec<O>,
}

impl<O: ObjectId> LodLevel<O> {
  /// Create a level from a height and renderer list.
  ///
  /// Duplicate renderers are dropped, first occurrence wins.
  pub fn new(transition_height: f32, renderers: impl IntoIterator<Item = O>) -> Self {
    let mut level = Self::empty();
    level.transition_height = transition_height;
    level.union_renderers(renderers);
    level
  }

  /// A level with no renderers and a zero height.
  ///
  /// Newly created levels start here; their height is filled in once every
  /// level has been materialized.
  pub fn empty() -> Self {
    Self {
      transition_height: 0.0,
      renderers: Vec::new(),
    }
  }

  /// Renderers drawn at this level, in insertion order.
  #[inline]
  pub fn renderers(&self) -> &[O] {
    &self.renderers
  }

  /// Check if a renderer is registered at this level.
  pub fn contains(&self, renderer: &O) -> bool {
    self.renderers.contains(renderer)
  }

  /// Add renderers not already present, keeping existing order.
  ///
  /// Returns the number of renderers actually added.
  pub fn union_renderers(&mut self, renderers: impl IntoIterator<Item = O>) -> usize {
    let mut seen: HashSet<O> = self.renderers.iter().copied().collect();
    let before = self.renderers.len();
    for renderer in renderers {
      if seen.insert(renderer) {
        self.renderers.push(renderer);
      }
    }
    self.renderers.len() - before
  }

  /// Keep only renderers matching the predicate.
  ///
  /// Returns the number of renderers removed.
  pub fn retain_renderers(&mut self, mut keep: impl FnMut(&O) -> bool) -> usize {
    let before = self.renderers.len();
    self.renderers.retain(|r| keep(r));
    before - self.renderers.len()
  }
}

/// Ordered LOD configuration owned by a single root object.
///
/// Level 0 is the highest detail. Levels are never reordered.
#[derive(Clone, Debug, PartialEq)]
pub struct LodGroup<O> {
  levels: SmallVec<[LodLevel<O>; MAX_LOD_LEVELS]>,
}

impl<O: ObjectId> LodGroup<O> {
  /// Create a group with no levels.
  pub fn new() -> Self {
    Self {
      levels: SmallVec::new(),
    }
  }

  /// Create a group from an ordered level sequence.
  pub fn from_levels(levels: impl IntoIterator<Item = LodLevel<O>>) -> Self {
    Self {
      levels: levels.into_iter().collect(),
    }
  }

  /// Number of levels.
  #[inline]
  pub fn level_count(&self) -> usize {
    self.levels.len()
  }

  /// Check if the group has no levels.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.levels.is_empty()
  }

  /// Get a level by index.
  pub fn level(&self, index: usize) -> Option<&LodLevel<O>> {
    self.levels.get(index)
  }

  /// Get a mutable level by index.
  pub fn level_mut(&mut self, index: usize) -> Option<&mut LodLevel<O>> {
    self.levels.get_mut(index)
  }

  /// All levels in index order.
  pub fn levels(&self) -> &[LodLevel<O>] {
    &self.levels
  }

  /// Append a level after the current last one.
  pub fn push_level(&mut self, level: LodLevel<O>) {
    self.levels.push(level);
  }

  /// Iterate every renderer reference across all levels.
  pub fn renderers(&self) -> impl Iterator<Item = &O> {
    self.levels.iter().flat_map(|level| level.renderers.iter())
  }
}

impl<O: ObjectId> Default for LodGroup<O> {
  fn default() -> Self {
    Self::new()
  }
}

impl<O: ObjectId> FromIterator<LodLevel<O>> for LodGroup<O> {
  fn from_iter<I: IntoIterator<Item = LodLevel<O>>>(iter: I) -> Self {
    Self::from_levels(iter)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
