//! Selecting every renderer registered at one level.

use std::collections::HashSet;

use crate::constants::MAX_LOD_LEVELS;
use crate::error::LodError;
use crate::gate::{CooldownGate, IdleQueue, IdleTask};
use crate::host::{selected_lod_roots, SceneGraph, SelectionHost};

/// Check if every selected LOD root has a level at `level`.
///
/// `false` for an empty selection (or one without LOD roots) and for levels
/// past the suffix table.
pub fn can_select_at_level<H: SelectionHost + ?Sized>(host: &H, level: usize) -> bool {
  if level >= MAX_LOD_LEVELS {
    return false;
  }
  let roots = selected_lod_roots(host);
  !roots.is_empty()
    && roots.iter().all(|&root| {
      host
        .lod_group(root)
        .is_some_and(|group| group.level_count() > level)
    })
}

/// Live renderers registered at `level` across `roots`, deduplicated, in
/// root then level order.
///
/// Roots without that level contribute nothing.
pub fn renderers_at_level<H: SceneGraph + ?Sized>(
  host: &H,
  roots: &[H::Object],
  level: usize,
) -> Vec<H::Object> {
  let mut seen = HashSet::new();
  roots
    .iter()
    .filter_map(|&root| host.lod_group(root)?.level(level))
    .flat_map(|lod| lod.renderers().iter().copied())
    .filter(|&renderer| host.is_live_renderer(renderer))
    .filter(|renderer| seen.insert(*renderer))
    .collect()
}

/// Level selection with a single-shot-per-cycle cooldown.
///
/// Hosts may deliver the same menu action once per selected object in one
/// frame; only the first call of a cycle replaces the selection so later
/// calls can't act on the selection the first one produced.
#[derive(Debug, Default)]
pub struct LevelSelector {
  gate: CooldownGate,
}

impl LevelSelector {
  /// Create a selector with an open gate.
  pub fn new() -> Self {
    Self::default()
  }

  /// Replace the selection with every live renderer at `level` across the
  /// selected LOD roots.
  ///
  /// Returns `Ok(None)` while the cooldown is running, otherwise the number
  /// of objects selected.
  pub fn select<H: SelectionHost + ?Sized>(
    &mut self,
    host: &mut H,
    idle: &mut IdleQueue,
    level: usize,
  ) -> Result<Option<usize>, LodError> {
    if level >= MAX_LOD_LEVELS {
      return Err(LodError::LevelOutOfRange {
        level,
        max: MAX_LOD_LEVELS - 1,
      });
    }
    if !self
      .gate
      .try_acquire(idle, IdleTask::ReleaseSelectionCooldown)
    {
      tracing::trace!(level, "level selection on cooldown");
      return Ok(None);
    }

    let roots = selected_lod_roots(&*host);
    let renderers = renderers_at_level(&*host, &roots, level);
    let count = renderers.len();
    host.set_selection(renderers);

    tracing::debug!(level, roots = roots.len(), selected = count, "selected LOD renderers");
    Ok(Some(count))
  }

  /// Check if the cooldown is running.
  pub fn cooldown_active(&self) -> bool {
    self.gate.is_active()
  }

  /// End the cooldown.
  pub fn release_cooldown(&mut self) {
    self.gate.release();
  }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;
