//! Manifest building - diff classified renderers against a group's levels.
//!
//! ```text
//! LevelScan (classified)        LodGroup (registered)          Manifest
//! ┌───────┬──────────┐          ┌───────┬──────────┐          ┌───────┬──────┐
//! │ LOD0  │ A, B, X  │    -     │ LOD0  │ A, B     │    =     │ 0     │ X    │
//! │ LOD2  │ Y        │          └───────┴──────────┘          │ 2     │ Y    │
//! └───────┴──────────┘                                        └───────┴──────┘
//!                                                             lowest_unassigned_level = 2
//! ```

use std::collections::{BTreeMap, HashSet};

use crate::constants::MAX_LOD_LEVELS;
use crate::host::SceneGraph;
use crate::scan::{scan, LevelScan};
use crate::types::{LodGroup, ObjectId};

/// Correction plan for one LOD root.
#[derive(Clone, Debug, PartialEq)]
pub struct Manifest<O> {
  /// Root owning the LOD group.
  pub root: O,

  /// Level index → renderers declaring that level but not registered there.
  pub unassigned: BTreeMap<usize, Vec<O>>,

  /// Last level index (in ascending order) that had any classified
  /// renderers, assigned or not.
  ///
  /// Despite the name this is the highest such level. The reconciler extends
  /// the group to `lowest_unassigned_level + 1` levels, which is exactly far
  /// enough to hold every classified renderer.
  pub lowest_unassigned_level: usize,
}

impl<O: ObjectId> Manifest<O> {
  /// Number of renderers waiting to be assigned.
  pub fn unassigned_count(&self) -> usize {
    self.unassigned.values().map(Vec::len).sum()
  }

  /// Unassigned renderers for one level.
  pub fn at(&self, level: usize) -> Option<&[O]> {
    self.unassigned.get(&level).map(Vec::as_slice)
  }
}

/// Diff a scan against a group.
///
/// Returns `None` when every classified renderer is already registered at
/// its declared level.
pub fn diff_scan<O: ObjectId>(
  root: O,
  group: &LodGroup<O>,
  classified: &LevelScan<O>,
) -> Option<Manifest<O>> {
  let mut unassigned = BTreeMap::new();
  let mut lowest_unassigned_level = 0;

  for level in 0..MAX_LOD_LEVELS {
    let found = classified.at(level);
    if found.is_empty() {
      continue;
    }

    lowest_unassigned_level = level;

    match group.level(level) {
      // Level doesn't exist yet - everything found is unassigned
      None => {
        unassigned.insert(level, found.to_vec());
      }
      Some(existing) => {
        let registered: HashSet<&O> = existing.renderers().iter().collect();
        let missing: Vec<O> = found
          .iter()
          .copied()
          .filter(|renderer| !registered.contains(renderer))
          .collect();
        if !missing.is_empty() {
          unassigned.insert(level, missing);
        }
      }
    }
  }

  if unassigned.is_empty() {
    return None;
  }

  Some(Manifest {
    root,
    unassigned,
    lowest_unassigned_level,
  })
}

/// Scan `root` and build its manifest.
///
/// Returns `None` if `root` has no LOD group or nothing is unassigned.
pub fn build_manifest<H: SceneGraph + ?Sized>(
  host: &H,
  root: H::Object,
  include_inactive: bool,
) -> Option<Manifest<H::Object>> {
  let group = host.lod_group(root)?;
  let classified = scan(host, root, include_inactive);
  let manifest = diff_scan(root, group, &classified)?;

  tracing::debug!(
    ?root,
    unassigned = manifest.unassigned_count(),
    levels = manifest.unassigned.len(),
    lowest_unassigned_level = manifest.lowest_unassigned_level,
    "built LOD manifest"
  );
  Some(manifest)
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;
