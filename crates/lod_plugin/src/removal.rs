//! Removal of renderer references that no longer resolve.

use crate::constants::REMOVE_MISSING_UNDO_LABEL;
use crate::error::LodError;
use crate::host::{SceneGraph, UndoHost};
use crate::undo::UndoTransaction;

/// Check if any level of `root`'s group references a renderer that no
/// longer resolves.
///
/// `false` when `root` has no group.
pub fn has_missing_renderers<H: SceneGraph + ?Sized>(host: &H, root: H::Object) -> bool {
  host
    .lod_group(root)
    .is_some_and(|group| group.renderers().any(|&r| !host.is_live_renderer(r)))
}

/// Drop dead renderer references from every level of `root`'s group.
///
/// Heights and live members are kept as they are. Returns the number of
/// references removed; nothing is recorded or written when that is zero.
pub fn remove_missing_renderers<H: UndoHost + ?Sized>(
  host: &mut H,
  root: H::Object,
) -> Result<usize, LodError> {
  let group = host
    .lod_group(root)
    .ok_or_else(|| LodError::NotAnLodGroup(format!("{:?}", root)))?;

  let mut pruned = group.clone();
  let mut removed = 0;
  for index in 0..pruned.level_count() {
    if let Some(level) = pruned.level_mut(index) {
      removed += level.retain_renderers(|&r| host.is_live_renderer(r));
    }
  }

  if removed == 0 {
    return Ok(0);
  }

  let mut tx = UndoTransaction::begin(host, root, REMOVE_MISSING_UNDO_LABEL);
  tx.set_lod_group(root, pruned)?;

  tracing::info!(?root, removed, "removed missing LOD renderers");
  Ok(removed)
}

#[cfg(test)]
#[path = "removal_test.rs"]
mod removal_test;
