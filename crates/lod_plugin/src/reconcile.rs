//! Reconciliation - apply a manifest to an LOD group.
//!
//! # Positional alignment
//!
//! Levels are materialized up to `lowest_unassigned_level + 1`, including
//! empty ones. A group with levels 0-1 and renderers declaring only level 4
//! becomes:
//!
//! ```text
//! LOD0  (existing)
//! LOD1  (existing)
//! LOD2  (empty, created)   height = LOD1 / 2
//! LOD3  (empty, created)   height = LOD2 / 2
//! LOD4  (renderers)        height = LOD3 / 2
//! ```
//!
//! so a LOD4 renderer can never slide into an earlier slot.

use crate::classify::has_level_suffix;
use crate::config::LodToolsConfig;
use crate::constants::APPEND_UNDO_LABEL;
use crate::error::LodError;
use crate::host::UndoHost;
use crate::manifest::Manifest;
use crate::types::{LodGroup, LodLevel, ObjectId};
use crate::undo::UndoTransaction;

/// What a reconciliation changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
  /// Levels appended to the group.
  pub levels_created: usize,
  /// Renderers newly registered across all levels.
  pub renderers_added: usize,
}

/// Build the corrected group for `manifest`.
///
/// `matches_level(renderer, level)` re-checks that a renderer still carries
/// the level's suffix; renderers failing it are left out.
pub fn reconcile_group<O: ObjectId>(
  group: &LodGroup<O>,
  manifest: &Manifest<O>,
  config: &LodToolsConfig,
  mut matches_level: impl FnMut(O, usize) -> bool,
) -> (LodGroup<O>, ReconcileReport) {
  let existing_count = group.level_count();
  let target_count = existing_count.max(manifest.lowest_unassigned_level + 1);

  let mut report = ReconcileReport::default();
  let mut levels: Vec<LodLevel<O>> = Vec::with_capacity(target_count);

  for index in 0..target_count {
    let mut level = group.level(index).cloned().unwrap_or_else(LodLevel::empty);

    if let Some(unassigned) = manifest.at(index) {
      let matching = unassigned
        .iter()
        .copied()
        .filter(|&renderer| matches_level(renderer, index));
      report.renderers_added += level.union_renderers(matching);
    }

    levels.push(level);
  }

  // Heights for created levels chain off the previous level, so this runs
  // after every level exists
  for index in existing_count..target_count {
    let previous = index
      .checked_sub(1)
      .map(|prev| levels[prev].transition_height);
    levels[index].transition_height = config.synthesized_height(previous);
  }

  report.levels_created = target_count - existing_count;
  (LodGroup::from_levels(levels), report)
}

/// Apply `manifest` to its root and write the result back as one undo entry.
///
/// Returns `Ok(None)` without touching the host when the root is gone or no
/// longer carries a group.
pub fn apply_manifest<H: UndoHost + ?Sized>(
  host: &mut H,
  manifest: &Manifest<H::Object>,
  config: &LodToolsConfig,
) -> Result<Option<ReconcileReport>, LodError> {
  let root = manifest.root;
  if !host.is_alive(root) {
    tracing::debug!(?root, "LOD root no longer exists, skipping manifest");
    return Ok(None);
  }
  let Some(group) = host.lod_group(root) else {
    tracing::debug!(?root, "LOD group removed since scan, skipping manifest");
    return Ok(None);
  };

  let _span = tracing::info_span!("lod::reconcile", ?root).entered();

  let (corrected, report) = reconcile_group(group, manifest, config, |renderer, level| {
    host
      .display_name(renderer)
      .is_some_and(|name| has_level_suffix(name, level))
  });

  let mut tx = UndoTransaction::begin(host, root, APPEND_UNDO_LABEL);
  tx.set_lod_group(root, corrected)?;

  tracing::info!(
    ?root,
    levels_created = report.levels_created,
    renderers_added = report.renderers_added,
    "appended unassigned LOD renderers"
  );
  Ok(Some(report))
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;
